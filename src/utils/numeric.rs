//! 数值文本解析
//!
//! 抓取的 HTML 和表格单元格格式不统一，这里只报告"无法解析"，从不 panic。

use regex::Regex;
use std::sync::OnceLock;

/// 带可选符号的小数或整数
const NUMBER_PATTERN: &str = r"[-+]?(?:\d*\.\d+|\d+)";

fn number_regex() -> Option<&'static Regex> {
    static NUMBER_RE: OnceLock<Option<Regex>> = OnceLock::new();
    NUMBER_RE.get_or_init(|| Regex::new(NUMBER_PATTERN).ok()).as_ref()
}

/// 将数值文本转换为 f64
///
/// # 参数
/// - `text`: 原始文本，可为空
///
/// # 返回
/// 返回文本中第一个数值；空输入或没有数值时返回 None
pub fn parse_number(text: Option<&str>) -> Option<f64> {
    let text = text?;
    let normalized = text.replace('\u{a0}', " ");
    let normalized = normalized.trim().replace(',', ".");
    if normalized.is_empty() {
        return None;
    }

    let found = number_regex()?.find(&normalized)?;
    found.as_str().parse::<f64>().ok()
}
