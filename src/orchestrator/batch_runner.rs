//! 批量处理器 - 编排层
//!
//! ## 职责
//!
//! 1. **应用初始化**：写运行日志头、启动无头浏览器、创建 DebugCapture
//! 2. **任务发现**：输入路径是文件则处理单个文件，是目录则处理目录下所有可识别文件
//! 3. **顺序调度**：逐个文件处理，单个文件失败记录后继续
//! 4. **资源管理**：唯一持有 Browser，每次查询的 Page 由 fetcher 创建并关闭
//! 5. **全局统计**：汇总成功 / 失败的文件数
//!
//! 查询全程串行：每次查询独占一个渲染环境，代价较高，
//! 并行请求也容易触发目标站点的反自动化限制。

use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chromiumoxide::Browser;
use tracing::{error, info};

use crate::browser;
use crate::config::Config;
use crate::error::DiscoveryError;
use crate::extract::Extractor;
use crate::fetcher::{DebugCapture, Fetcher};
use crate::models::BatchUnit;
use crate::orchestrator::unit_runner;

/// 可识别的输入文件扩展名
const INPUT_EXTENSIONS: [&str; 3] = ["csv", "xlsx", "xls"];

/// 应用主结构
pub struct App {
    config: Config,
    browser: Browser,
    debug: DebugCapture,
}

impl App {
    /// 初始化应用
    pub async fn initialize(config: Config) -> Result<Self> {
        // 初始化日志文件
        init_log_file(&config.run_log_file)?;

        log_startup(&config);

        // 启动无头浏览器
        let browser = browser::launch_headless_browser().await?;

        let debug = DebugCapture::new(PathBuf::from(&config.debug_html_file));

        Ok(Self {
            config,
            browser,
            debug,
        })
    }

    /// 运行应用主逻辑
    pub async fn run(&self) -> Result<()> {
        // 发现所有待处理的输入文件
        let units = discover_units(
            Path::new(&self.config.input_path),
            Path::new(&self.config.output_folder),
        )?;

        fs::create_dir_all(&self.config.output_folder)
            .with_context(|| format!("创建输出目录失败: {}", self.config.output_folder))?;

        let total = units.len();
        info!("✓ 找到 {} 个待处理的输入文件\n", total);

        let extractor = Extractor::new();
        let fetcher = Fetcher::new(&self.browser, &self.config, &self.debug);

        let mut stats = RunStats {
            total,
            ..Default::default()
        };

        // 逐个文件处理，失败只影响当前文件
        for (idx, unit) in units.iter().enumerate() {
            let unit_index = idx + 1;
            log_unit_start(unit_index, total, unit);

            match unit_runner::run_unit(&fetcher, &extractor, unit, unit_index).await {
                Ok(rows) => {
                    info!(
                        "[文件 {}] ✅ 处理完成: {} 行 → {}\n",
                        unit_index,
                        rows,
                        unit.output_path.display()
                    );
                    stats.success += 1;
                }
                Err(e) => {
                    error!("[文件 {}] ❌ 处理失败: {:#}\n", unit_index, e);
                    stats.failed += 1;
                }
            }
        }

        print_final_stats(&stats, &self.config);

        Ok(())
    }
}

/// 处理统计
#[derive(Debug, Default)]
struct RunStats {
    success: usize,
    failed: usize,
    total: usize,
}

/// 发现待处理的输入文件并推导输出路径
///
/// 输入路径是文件时只产生一个任务；是目录时按文件名排序，
/// 保证每次运行的处理顺序一致
pub fn discover_units(
    input_path: &Path,
    output_folder: &Path,
) -> Result<Vec<BatchUnit>, DiscoveryError> {
    if !input_path.exists() {
        return Err(DiscoveryError::InputPathMissing {
            path: input_path.display().to_string(),
        });
    }

    if input_path.is_file() {
        return Ok(vec![unit_for(input_path, output_folder)]);
    }

    let entries = fs::read_dir(input_path).map_err(|e| DiscoveryError::ReadDir {
        path: input_path.display().to_string(),
        source: e,
    })?;

    let mut inputs: Vec<PathBuf> = entries
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| path.is_file() && has_input_extension(path))
        .collect();
    inputs.sort();

    if inputs.is_empty() {
        return Err(DiscoveryError::NoInputFiles {
            path: input_path.display().to_string(),
        });
    }

    Ok(inputs
        .iter()
        .map(|input| unit_for(input, output_folder))
        .collect())
}

fn has_input_extension(path: &Path) -> bool {
    path.extension().map_or(false, |ext| {
        INPUT_EXTENSIONS
            .iter()
            .any(|known| ext.eq_ignore_ascii_case(known))
    })
}

fn unit_for(input: &Path, output_folder: &Path) -> BatchUnit {
    let stem = input.file_stem().unwrap_or_else(|| OsStr::new("output"));
    BatchUnit {
        input_path: input.to_path_buf(),
        output_path: output_folder.join(stem).with_extension("xlsx"),
    }
}

// ========== 日志辅助函数 ==========

fn init_log_file(log_file_path: &str) -> Result<()> {
    let log_header = format!(
        "{}\n汉字批量查询日志 - {}\n{}\n\n",
        "=".repeat(60),
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
        "=".repeat(60)
    );
    fs::write(log_file_path, log_header)?;
    Ok(())
}

fn log_startup(config: &Config) {
    info!("{}", "=".repeat(60));
    info!("🚀 程序启动 - 汉字词典批量查询");
    info!("📁 输入路径: {}", config.input_path);
    info!("📁 输出目录: {}", config.output_folder);
    info!("{}", "=".repeat(60));
}

fn log_unit_start(unit_index: usize, total: usize, unit: &BatchUnit) {
    info!("{}", "─".repeat(60));
    info!(
        "[文件 {}] 开始处理 ({}/{}): {}",
        unit_index,
        unit_index,
        total,
        unit.input_path.display()
    );
}

fn print_final_stats(stats: &RunStats, config: &Config) {
    info!("{}", "=".repeat(60));
    info!("📊 全部处理完成统计");
    info!(
        "完成时间: {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    );
    info!("✅ 成功: {}/{}", stats.success, stats.total);
    info!("❌ 失败: {}", stats.failed);
    info!("{}", "=".repeat(60));
    info!("日志已保存至: {}", config.run_log_file);
}
