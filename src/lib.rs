//! # Hanja Batch Search
//!
//! 一个批量查询 Naver 汉字词典并导出 Excel 的 Rust 应用程序
//!
//! ## 架构设计
//!
//! 本系统采用分层架构，自下而上：
//!
//! ### ① 基础设施层
//! - `browser` - 启动无头浏览器，持有 Browser 资源
//! - `io` - 表格输入（CSV / Excel）与 Excel 输出
//!
//! ### ② 业务能力层
//! - `fetcher` - 单个检索词的页面渲染能力（每次查询独占一个 Page）
//! - `extract` - 从渲染后的页面中提取五个字段（纯函数，永不失败）
//!
//! ### ③ 编排层
//! - `orchestrator/unit_runner` - 单个输入文件的处理流程（读取 → 逐词查询 → 写出）
//! - `orchestrator/batch_runner` - 批量处理器，发现输入文件并逐个调度
//!
//! ## 核心约束
//!
//! 1. **顺序保证**：输出行与输入行一一对应，顺序不变
//! 2. **故障隔离**：单个词查询失败只产生占位行，单个文件失败不影响其他文件
//! 3. **资源释放**：每次查询的 Page 在任何退出路径上都会被关闭

pub mod browser;
pub mod config;
pub mod error;
pub mod extract;
pub mod fetcher;
pub mod io;
pub mod logger;
pub mod models;
pub mod orchestrator;

// 重新导出常用类型
pub use config::Config;
pub use error::{DiscoveryError, FetchError, InputError, WriteError};
pub use extract::Extractor;
pub use fetcher::{DebugCapture, Fetcher};
pub use models::{BatchUnit, FetchStatus, HanjaFields, SearchRecord};
pub use orchestrator::App;
