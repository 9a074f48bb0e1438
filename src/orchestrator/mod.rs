//! 编排层
//!
//! ## 模块划分
//!
//! ### `batch_runner` - 批量处理器
//! - 管理应用生命周期（初始化、运行、统计）
//! - 发现输入文件（单个文件或整个目录）
//! - 唯一持有 Browser 与 DebugCapture
//! - 逐个调度文件，单个文件失败不影响其他文件
//!
//! ### `unit_runner` - 单个文件处理器
//! - 读取检索词列表
//! - 按顺序逐词查询，失败的词以占位行隔离
//! - 把完整的结果列表交给 Excel 输出
//!
//! ## 层次关系
//!
//! ```text
//! batch_runner (处理 Vec<BatchUnit>)
//!     ↓
//! unit_runner (处理 Vec<SearchTerm>)
//!     ↓
//! fetcher / extract (处理单个检索词)
//!     ↓
//! browser / io (基础设施)
//! ```

pub mod batch_runner;
pub mod unit_runner;

// 重新导出主要类型
pub use batch_runner::{discover_units, App};
pub use unit_runner::{process_unit, run_unit};
