//! 行处理流程 - 流程层
//!
//! 核心职责：定义"一行"的完整处理流程
//!
//! 流程顺序：
//! 1. 起点、终点坐标解析（并发，两者都完成后才继续）
//! 2. 路线计算（任一端缺失时直接为空）
//! 3. 生成结果和日志条目

use futures::future::join;
use tracing::{debug, info, warn};

use crate::clients::RoutingClient;
use crate::error::ResolveError;
use crate::models::{Coordinate, Endpoint, LocationKey, LogEntry, RouteRow, RowResult, TravelMode};
use crate::services::{CoordinateResolver, RouteCalculator};
use crate::utils::logging::truncate_text;
use crate::workflow::row_ctx::RowCtx;

/// 一行的产出：一个结果，0~2 条日志
#[derive(Debug, Clone, PartialEq)]
pub struct RowOutcome {
    pub result: RowResult,
    pub logs: Vec<LogEntry>,
}

/// 行处理流程
///
/// - 不持有任何资源，只借用业务能力（services）
/// - 行与行之间没有依赖
pub struct RowFlow<'a, R, C> {
    resolver: &'a R,
    calculator: &'a RouteCalculator<C>,
    mode: TravelMode,
}

impl<'a, R, C> RowFlow<'a, R, C>
where
    R: CoordinateResolver,
    C: RoutingClient,
{
    pub fn new(resolver: &'a R, calculator: &'a RouteCalculator<C>, mode: TravelMode) -> Self {
        Self {
            resolver,
            calculator,
            mode,
        }
    }

    pub async fn run(&self, ctx: &RowCtx, row: &RouteRow) -> RowOutcome {
        debug!(
            "{} {} → {}",
            ctx,
            truncate_text(&row.origin.to_string(), 40),
            truncate_text(&row.destination.to_string(), 40)
        );

        let (origin, destination) = join(
            self.resolver.resolve(&row.origin),
            self.resolver.resolve(&row.destination),
        )
        .await;

        let mut logs = Vec::new();
        let origin = self.absorb(ctx, Endpoint::Origin, &row.origin, origin, &mut logs);
        let destination = self.absorb(ctx, Endpoint::Destination, &row.destination, destination, &mut logs);

        let (route, route_error) = match self.calculator.compute(origin, destination, self.mode).await {
            Ok(metrics) => {
                info!(
                    "{} ✓ {:.2} km, {:.2} min",
                    ctx, metrics.distance_km, metrics.time_minutes
                );
                (Some(metrics), None)
            }
            Err(e) => {
                warn!("{} ⚠️ 无法计算路线: {}", ctx, e);
                (None, Some(e))
            }
        };

        RowOutcome {
            result: RowResult {
                row: ctx.row,
                origin_label: row.origin.display_label(),
                origin,
                destination_label: row.destination.display_label(),
                destination,
                route,
                route_error,
            },
            logs,
        }
    }

    /// 解析失败降级为缺失坐标，并记录一条日志
    fn absorb(
        &self,
        ctx: &RowCtx,
        endpoint: Endpoint,
        key: &LocationKey,
        resolved: Result<Coordinate, ResolveError>,
        logs: &mut Vec<LogEntry>,
    ) -> Option<Coordinate> {
        match resolved {
            Ok(coordinate) => Some(coordinate),
            Err(reason) => {
                warn!("{} ⚠️ {} {} 没有坐标: {}", ctx, endpoint, key, reason);
                logs.push(LogEntry::new(ctx.row, endpoint, key, reason));
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::HttpReply;
    use crate::error::{RouteError, TransportError};

    /// 固定坐标；键为 "?" 时失败
    struct FixedResolver;

    impl CoordinateResolver for FixedResolver {
        async fn resolve(&self, key: &LocationKey) -> Result<Coordinate, ResolveError> {
            match key.to_string().as_str() {
                "?" => Err(ResolveError::NoMarkers),
                "timeout" => Err(ResolveError::Transport(TransportError::Timeout)),
                _ => Ok(Coordinate::new(38.7, -9.1)),
            }
        }
    }

    struct FixedRouting;

    impl RoutingClient for FixedRouting {
        async fn fetch_route(
            &self,
            _origin: Coordinate,
            _destination: Coordinate,
            _mode: TravelMode,
        ) -> Result<HttpReply, TransportError> {
            Ok(HttpReply::new(
                200,
                r#"{"routes":[{"summary":{"lengthInMeters":1500,"travelTimeInSeconds":90}}]}"#,
            ))
        }
    }

    fn run_row(origin: &str, destination: &str) -> RowOutcome {
        let calculator = RouteCalculator::new(FixedRouting);
        let flow = RowFlow::new(&FixedResolver, &calculator, TravelMode::Car);
        let row = RouteRow::new(LocationKey::free_text(origin), LocationKey::free_text(destination));
        tokio_test::block_on(flow.run(&RowCtx::new(2, 3), &row))
    }

    #[test]
    fn test_resolved_row_is_routed() {
        let outcome = run_row("1000001", "4000322");

        assert!(outcome.logs.is_empty());
        assert_eq!(outcome.result.row, 2);
        assert_eq!(outcome.result.origin_label, "01000001");
        assert_eq!(outcome.result.route.map(|r| r.distance_km), Some(1.5));
        assert_eq!(outcome.result.route.map(|r| r.time_minutes), Some(1.5));
    }

    #[test]
    fn test_both_failures_logged_origin_first() {
        let outcome = run_row("?", "timeout");

        let endpoints: Vec<Endpoint> = outcome.logs.iter().map(|l| l.endpoint).collect();
        assert_eq!(endpoints, vec![Endpoint::Origin, Endpoint::Destination]);
        assert_eq!(outcome.logs[1].reason, ResolveError::Transport(TransportError::Timeout));
        assert_eq!(outcome.result.origin, None);
        assert_eq!(outcome.result.route_error, Some(RouteError::MissingEndpoint));
    }
}
