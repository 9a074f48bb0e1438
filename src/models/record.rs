//! 查询结果数据模型
//!
//! 字段缺失时使用固定的占位文案（与词典页面语言一致），
//! 而不是空字符串，保证输出表格中"未找到"与"未查询"可区分

use std::path::PathBuf;

/// 表头字段缺失占位
pub const HANJA_NOT_FOUND: &str = "표제어 없음";
/// 训音字段缺失占位
pub const MEANING_NOT_FOUND: &str = "훈음 없음";
/// 部首字段缺失占位
pub const RADICAL_NOT_FOUND: &str = "부수 없음";
/// 部首训音字段缺失占位
pub const RADICAL_MEANING_NOT_FOUND: &str = "부수 훈음 없음";
/// 总笔画字段缺失占位
pub const STROKE_COUNT_NOT_FOUND: &str = "획수 없음";

/// 从词典页面提取出的五个字段
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HanjaFields {
    /// 表头字（标题汉字）
    pub hanja: String,
    /// 训音（字义与读音）
    pub meaning: String,
    /// 部首
    pub radical: String,
    /// 部首训音（部首描述括号内的内容）
    pub radical_meaning: String,
    /// 总笔画，如 "4획"
    pub stroke_count: String,
}

impl HanjaFields {
    /// 全部字段取占位值
    pub fn not_found() -> Self {
        Self {
            hanja: HANJA_NOT_FOUND.to_string(),
            meaning: MEANING_NOT_FOUND.to_string(),
            radical: RADICAL_NOT_FOUND.to_string(),
            radical_meaning: RADICAL_MEANING_NOT_FOUND.to_string(),
            stroke_count: STROKE_COUNT_NOT_FOUND.to_string(),
        }
    }
}

/// 单个检索词的查询结果状态
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchStatus {
    /// 页面成功渲染（字段仍可能是占位值）
    Ok,
    /// 查询失败，所有字段为占位值
    FetchFailed,
}

/// 一行输出记录
///
/// 每个有效检索词恰好产生一条记录，生成后不再修改
#[derive(Debug, Clone)]
pub struct SearchRecord {
    pub search_text: String,
    pub fields: HanjaFields,
    pub status: FetchStatus,
}

impl SearchRecord {
    pub fn ok(search_text: String, fields: HanjaFields) -> Self {
        Self {
            search_text,
            fields,
            status: FetchStatus::Ok,
        }
    }

    /// 查询失败的占位记录
    pub fn fetch_failed(search_text: String) -> Self {
        Self {
            search_text,
            fields: HanjaFields::not_found(),
            status: FetchStatus::FetchFailed,
        }
    }
}

/// 一个输入文件到输出文件的处理任务
#[derive(Debug, Clone)]
pub struct BatchUnit {
    pub input_path: PathBuf,
    pub output_path: PathBuf,
}
