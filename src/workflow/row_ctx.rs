//! 行处理上下文
//!
//! 封装"我正在处理第几行"这一信息

use std::fmt::Display;

/// 行处理上下文
#[derive(Debug, Clone, Copy)]
pub struct RowCtx {
    /// 行号（从1开始）
    pub row: usize,

    /// 总行数（仅用于日志显示）
    pub total: usize,
}

impl RowCtx {
    pub fn new(row: usize, total: usize) -> Self {
        Self { row, total }
    }
}

impl Display for RowCtx {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[行 {}/{}]", self.row, self.total)
    }
}
