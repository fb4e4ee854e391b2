use crate::error::{ResolveError, RouteError};
use crate::models::coordinate::{Coordinate, RouteMetrics};
use crate::models::location::LocationKey;
use std::fmt;

/// 输入表格中的一行：起点和终点
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteRow {
    pub origin: LocationKey,
    pub destination: LocationKey,
}

impl RouteRow {
    pub fn new(origin: LocationKey, destination: LocationKey) -> Self {
        Self {
            origin,
            destination,
        }
    }
}

/// 路线的一端
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Origin,
    Destination,
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Endpoint::Origin => write!(f, "起点"),
            Endpoint::Destination => write!(f, "终点"),
        }
    }
}

/// 一行的处理结果
///
/// 无论解析是否成功，每一行都恰好产生一个 RowResult
#[derive(Debug, Clone, PartialEq)]
pub struct RowResult {
    /// 行号（从 1 开始）
    pub row: usize,
    pub origin_label: String,
    pub origin: Option<Coordinate>,
    pub destination_label: String,
    pub destination: Option<Coordinate>,
    pub route: Option<RouteMetrics>,
    /// 路线缺失的原因
    pub route_error: Option<RouteError>,
}

/// 一端坐标解析失败的诊断条目
#[derive(Debug, Clone, PartialEq)]
pub struct LogEntry {
    pub row: usize,
    pub endpoint: Endpoint,
    /// 原始（未补零的）键值
    pub key: String,
    pub reason: ResolveError,
}

impl LogEntry {
    pub fn new(row: usize, endpoint: Endpoint, key: &LocationKey, reason: ResolveError) -> Self {
        Self {
            row,
            endpoint,
            key: key.to_string(),
            reason,
        }
    }

    /// 写入报告的文本
    pub fn message(&self) -> String {
        format!("Sem coordenadas para {}", self.key)
    }
}

impl fmt::Display for LogEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[行 {}] {} {}: {}",
            self.row,
            self.endpoint,
            self.key,
            self.reason
        )
    }
}
