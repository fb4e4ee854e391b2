//! 路线计算服务 - 业务能力层
//!
//! 只负责"两个坐标 + 出行方式 → 距离/时间"能力。
//! 出行方式由调用方显式传入，不读取任何全局状态。

use crate::clients::RoutingClient;
use crate::error::RouteError;
use crate::models::{Coordinate, RouteMetrics, TravelMode};
use serde::Deserialize;
use tracing::debug;

#[derive(Debug, Deserialize)]
struct RoutingResponse {
    #[serde(default)]
    routes: Option<Vec<Route>>,
}

#[derive(Debug, Deserialize)]
struct Route {
    summary: RouteSummary,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RouteSummary {
    length_in_meters: f64,
    travel_time_in_seconds: f64,
}

/// 路线计算服务
pub struct RouteCalculator<C> {
    client: C,
}

impl<C: RoutingClient> RouteCalculator<C> {
    pub fn new(client: C) -> Self {
        Self { client }
    }

    /// 计算路线
    ///
    /// # 参数
    /// - `origin`: 起点坐标（可能缺失）
    /// - `destination`: 终点坐标（可能缺失）
    /// - `mode`: 出行方式
    ///
    /// # 返回
    /// 成功时返回第一条路线的距离（km）和时间（分钟）；
    /// 任一坐标缺失时直接返回 `MissingEndpoint`，不发出请求
    pub async fn compute(
        &self,
        origin: Option<Coordinate>,
        destination: Option<Coordinate>,
        mode: TravelMode,
    ) -> Result<RouteMetrics, RouteError> {
        let (Some(origin), Some(destination)) = (origin, destination) else {
            return Err(RouteError::MissingEndpoint);
        };

        let reply = self.client.fetch_route(origin, destination, mode).await?;
        if !reply.is_success() {
            return Err(RouteError::BadStatus(reply.status));
        }

        let metrics = parse_route_summary(&reply.body)?;
        debug!(
            "{} -> {}: {} km, {} min",
            origin, destination, metrics.distance_km, metrics.time_minutes
        );
        Ok(metrics)
    }
}

/// 解析路由响应，只使用第一条路线的摘要
fn parse_route_summary(body: &str) -> Result<RouteMetrics, RouteError> {
    let response: RoutingResponse =
        serde_json::from_str(body).map_err(|e| RouteError::InvalidPayload(e.to_string()))?;

    let route = response
        .routes
        .as_deref()
        .and_then(|routes| routes.first())
        .ok_or(RouteError::NoRoutes)?;

    Ok(RouteMetrics::from_summary(
        route.summary.length_in_meters,
        route.summary.travel_time_in_seconds,
    ))
}
