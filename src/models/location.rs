use std::fmt;

/// 一端（起点或终点）的查询键
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LocationKey {
    /// 自由文本（街道、地名或整串邮编）
    FreeText(String),
    /// 结构化邮编：4 位 + 3 位
    PostalCode { cp4: String, cp3: String },
}

impl LocationKey {
    pub fn free_text(text: impl Into<String>) -> Self {
        LocationKey::FreeText(text.into())
    }

    pub fn postal_code(cp4: impl Into<String>, cp3: impl Into<String>) -> Self {
        LocationKey::PostalCode {
            cp4: cp4.into(),
            cp3: cp3.into(),
        }
    }

    /// 查询页面使用的参数
    pub fn query_params(&self) -> Vec<(&'static str, &str)> {
        match self {
            LocationKey::FreeText(text) => vec![("rua", text.as_str())],
            LocationKey::PostalCode { cp4, cp3 } => vec![("cp4", cp4.as_str()), ("cp3", cp3.as_str())],
        }
    }

    /// 报告中显示的邮编，按位数补零
    ///
    /// 无论是否解析成功都补零，便于在结果中辨认过短的邮编
    pub fn display_label(&self) -> String {
        match self {
            LocationKey::FreeText(text) => zfill(text, 8),
            LocationKey::PostalCode { cp4, cp3 } => format!("{}-{}", zfill(cp4, 4), zfill(cp3, 3)),
        }
    }
}

/// 原始键值（用于日志条目）
impl fmt::Display for LocationKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LocationKey::FreeText(text) => write!(f, "{}", text),
            LocationKey::PostalCode { cp4, cp3 } => write!(f, "{}-{}", cp4, cp3),
        }
    }
}

/// 左侧补零到指定宽度，符号位保持在最前
fn zfill(text: &str, width: usize) -> String {
    let len = text.chars().count();
    if len >= width {
        return text.to_string();
    }
    let padding = "0".repeat(width - len);
    match text.chars().next() {
        Some(sign @ ('+' | '-')) => format!("{}{}{}", sign, padding, &text[1..]),
        _ => format!("{}{}", padding, text),
    }
}
