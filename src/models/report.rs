use crate::models::row::{LogEntry, RowResult};
use crate::models::travel_mode::TravelModeAdvisory;

/// 一次批处理的全部产出
///
/// `results` 与 `logs` 互相独立：每行一个结果，每个失败端点一条日志
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BatchReport {
    pub results: Vec<RowResult>,
    pub logs: Vec<LogEntry>,
    /// 出行方式使用了默认值时的提示
    pub advisory: Option<TravelModeAdvisory>,
    /// 是否在完成所有行之前被取消
    pub cancelled: bool,
}

/// 批次统计
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BatchStats {
    pub total_rows: usize,
    pub routed_rows: usize,
    pub unresolved_endpoints: usize,
    pub mean_distance_km: Option<f64>,
    pub mean_time_minutes: Option<f64>,
}

impl BatchReport {
    /// 汇总统计（平均值只计算有路线的行）
    pub fn stats(&self) -> BatchStats {
        let routes: Vec<_> = self.results.iter().filter_map(|r| r.route).collect();
        let mean = |values: Vec<f64>| -> Option<f64> {
            if values.is_empty() {
                None
            } else {
                Some(values.iter().sum::<f64>() / values.len() as f64)
            }
        };

        BatchStats {
            total_rows: self.results.len(),
            routed_rows: routes.len(),
            unresolved_endpoints: self.logs.len(),
            mean_distance_km: mean(routes.iter().map(|r| r.distance_km).collect()),
            mean_time_minutes: mean(routes.iter().map(|r| r.time_minutes).collect()),
        }
    }
}
