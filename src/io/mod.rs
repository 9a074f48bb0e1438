//! 表格输入输出

pub mod input;
pub mod output;
