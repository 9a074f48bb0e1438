//! 应用程序错误类型
//!
//! 错误粒度与恢复策略：
//! - `FetchError`：单词条级别，产生占位行后继续处理本文件
//! - `InputError` / `WriteError`：文件级别，跳过本文件后继续处理其他文件
//! - `DiscoveryError`：运行级别，终止本次运行

use chromiumoxide::error::CdpError;
use thiserror::Error;

/// 页面查询错误
///
/// 每个变体都对应一次查询的失败原因；调用方不重试，
/// 由 unit_runner 以占位行的形式隔离
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("创建页面失败: {0}")]
    PageCreation(#[source] CdpError),

    #[error("导航到 {url} 失败: {source}")]
    Navigation {
        url: String,
        #[source]
        source: CdpError,
    },

    #[error("页面加载超时 ({timeout_secs} 秒): {url}")]
    Timeout { url: String, timeout_secs: u64 },

    #[error("读取页面内容失败: {0}")]
    Content(#[source] CdpError),
}

/// 输入文件错误
#[derive(Debug, Error)]
pub enum InputError {
    #[error("无法打开输入文件 ({path}): {source}")]
    Open {
        path: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("读取输入文件失败 ({path}): {source}")]
    Read {
        path: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("输入文件缺少 SEARCH_TEXT 列: {path}")]
    MissingColumn { path: String },
}

/// Excel 输出错误
#[derive(Debug, Error)]
pub enum WriteError {
    #[error("生成 Excel 文件失败: {0}")]
    Workbook(#[from] rust_xlsxwriter::XlsxError),
}

/// 输入文件发现错误
#[derive(Debug, Error)]
pub enum DiscoveryError {
    #[error("输入路径不存在: {path}")]
    InputPathMissing { path: String },

    #[error("读取输入目录失败 ({path}): {source}")]
    ReadDir {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("输入目录中没有可识别的输入文件 (csv/xlsx/xls): {path}")]
    NoInputFiles { path: String },
}
