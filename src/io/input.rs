//! 输入文件读取
//!
//! 支持带表头的 CSV 与 Excel（xlsx / xls），只关心 SEARCH_TEXT 一列。
//! 空值或非文本的行会被丢弃并打印警告，不计入有效词条。

use std::path::Path;

use calamine::{open_workbook_auto, Reader};
use serde::Deserialize;
use tracing::{info, warn};

use crate::error::InputError;

/// SEARCH_TEXT 列名
const SEARCH_TEXT_COLUMN: &str = "SEARCH_TEXT";

#[derive(Debug, Deserialize)]
struct InputRow {
    #[serde(rename = "SEARCH_TEXT")]
    search_text: Option<String>,
}

/// 按扩展名选择解析器，返回有序的有效检索词
pub fn load_search_terms(path: &Path) -> Result<Vec<String>, InputError> {
    let is_excel = path
        .extension()
        .map_or(false, |ext| ext.eq_ignore_ascii_case("xlsx") || ext.eq_ignore_ascii_case("xls"));

    if is_excel {
        load_excel(path)
    } else {
        load_csv(path)
    }
}

fn load_csv(path: &Path) -> Result<Vec<String>, InputError> {
    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_path(path)
        .map_err(|e| InputError::Open {
            path: path.display().to_string(),
            source: Box::new(e),
        })?;

    let headers = rdr.headers().map_err(|e| InputError::Read {
        path: path.display().to_string(),
        source: Box::new(e),
    })?;
    if !headers.iter().any(|h| h == SEARCH_TEXT_COLUMN) {
        return Err(InputError::MissingColumn {
            path: path.display().to_string(),
        });
    }

    let mut terms = Vec::new();
    for (row_idx, result) in rdr.deserialize::<InputRow>().enumerate() {
        match result {
            Ok(row) => push_valid_term(&mut terms, row.search_text, row_idx),
            Err(e) => {
                warn!("⚠️ 跳过无法解析的行 (第 {} 行): {}", row_idx + 2, e);
            }
        }
    }

    info!("✓ 从 {} 读取到 {} 个有效检索词", path.display(), terms.len());
    Ok(terms)
}

fn load_excel(path: &Path) -> Result<Vec<String>, InputError> {
    // open_workbook_auto 按文件格式选择解析器，xlsx 与老式 xls 都能读
    let mut workbook = open_workbook_auto(path).map_err(|e| InputError::Open {
        path: path.display().to_string(),
        source: Box::new(e),
    })?;

    let worksheets = workbook.worksheets();
    let (_name, range) = worksheets.first().ok_or_else(|| InputError::MissingColumn {
        path: path.display().to_string(),
    })?;

    // 第一行是表头，定位 SEARCH_TEXT 列
    let mut search_text_idx = None;
    let mut terms = Vec::new();
    for (row_idx, row) in range.rows().enumerate() {
        if row_idx == 0 {
            for (col_idx, cell) in row.iter().enumerate() {
                if cell.to_string().trim() == SEARCH_TEXT_COLUMN {
                    search_text_idx = Some(col_idx);
                }
            }
            if search_text_idx.is_none() {
                return Err(InputError::MissingColumn {
                    path: path.display().to_string(),
                });
            }
            continue;
        }

        let cell = search_text_idx
            .and_then(|i| row.get(i))
            .map(|c| c.to_string());
        push_valid_term(&mut terms, cell, row_idx - 1);
    }

    info!("✓ 从 {} 读取到 {} 个有效检索词", path.display(), terms.len());
    Ok(terms)
}

fn push_valid_term(terms: &mut Vec<String>, value: Option<String>, row_idx: usize) {
    match value.map(|v| v.trim().to_string()).filter(|v| !v.is_empty()) {
        Some(term) => terms.push(term),
        None => {
            warn!("⚠️ 跳过 SEARCH_TEXT 为空的行 (第 {} 行)", row_idx + 2);
        }
    }
}
