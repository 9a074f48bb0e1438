//! 数据模型

pub mod record;

pub use record::{BatchUnit, FetchStatus, HanjaFields, SearchRecord};
