//! 单个输入文件的处理流程
//!
//! ## 故障隔离约定
//!
//! - 单个检索词查询失败：记录日志，追加占位行，继续下一个词
//! - 输入不可读 / 没有有效词 / 输出写失败：整个文件作为一个失败单元上报
//!
//! N 个有效检索词必然产生 N 行输出，顺序与输入一致。

use std::future::Future;

use anyhow::{Context, Result};
use tracing::{error, info};

use crate::error::FetchError;
use crate::extract::Extractor;
use crate::fetcher::Fetcher;
use crate::io;
use crate::models::{BatchUnit, HanjaFields, SearchRecord};

/// 处理一个输入文件：读取 → 逐词查询 → 写出
///
/// 返回写出的行数
pub async fn run_unit(
    fetcher: &Fetcher<'_>,
    extractor: &Extractor,
    unit: &BatchUnit,
    unit_index: usize,
) -> Result<usize> {
    process_unit(unit, unit_index, |term| async move {
        let html = fetcher.fetch(&term).await?;
        Ok(extractor.extract(&html))
    })
    .await
}

/// `run_unit` 的核心流程，查询步骤通过闭包注入
///
/// 没有任何有效检索词的文件作为单元级失败上报，不写输出文件
pub async fn process_unit<F, Fut>(unit: &BatchUnit, unit_index: usize, lookup: F) -> Result<usize>
where
    F: FnMut(String) -> Fut,
    Fut: Future<Output = Result<HanjaFields, FetchError>>,
{
    let terms = io::input::load_search_terms(&unit.input_path)
        .with_context(|| format!("读取输入文件失败: {}", unit.input_path.display()))?;

    if terms.is_empty() {
        anyhow::bail!(
            "输入文件没有有效的 SEARCH_TEXT 行: {}",
            unit.input_path.display()
        );
    }

    info!(
        "[文件 {}] 共 {} 个检索词，开始查询...",
        unit_index,
        terms.len()
    );

    let records = collect_records(terms, lookup).await;

    io::output::write_results(&unit.output_path, &records)
        .with_context(|| format!("写出结果失败: {}", unit.output_path.display()))?;

    Ok(records.len())
}

/// 按顺序逐词执行查询，失败的词产生占位记录
///
/// 查询步骤通过闭包注入，方便在测试中替换
pub async fn collect_records<F, Fut>(terms: Vec<String>, mut lookup: F) -> Vec<SearchRecord>
where
    F: FnMut(String) -> Fut,
    Fut: Future<Output = Result<HanjaFields, FetchError>>,
{
    let total = terms.len();
    let mut records = Vec::with_capacity(total);

    for (index, term) in terms.into_iter().enumerate() {
        info!("({}/{}) 查询: {}", index + 1, total, term);

        match lookup(term.clone()).await {
            Ok(fields) => {
                info!(
                    "({}/{}) ✓ 표제어={} 훈음={} 부수={} 획수={}",
                    index + 1,
                    total,
                    fields.hanja,
                    fields.meaning,
                    fields.radical,
                    fields.stroke_count
                );
                records.push(SearchRecord::ok(term, fields));
            }
            Err(e) => {
                error!("({}/{}) ❌ 查询失败: {} - {}", index + 1, total, term, e);
                records.push(SearchRecord::fetch_failed(term));
            }
        }
    }

    records
}
