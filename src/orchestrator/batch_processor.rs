//! 批量行处理器 - 编排层
//!
//! ## 职责
//!
//! 1. **逐行调度**：对每一行运行 `RowFlow`，收集结果和日志
//! 2. **并发控制**：有界并发，输出顺序始终与输入一致
//! 3. **进度报告**：每完成一行回调一次已完成比例
//! 4. **协作取消**：在行与行之间检查取消标志，不打断进行中的请求
//!
//! ## 设计特点
//!
//! - 行与行之间没有状态依赖，只累积结果集合
//! - 单行失败不会中断批次

use crate::clients::RoutingClient;
use crate::models::{BatchReport, RouteRow, TravelMode};
use crate::services::{CoordinateResolver, RouteCalculator};
use crate::workflow::{RowCtx, RowFlow};
use futures::stream::{self, StreamExt};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::{info, warn};

/// 批量行处理器
pub struct BatchOrchestrator<R, C> {
    resolver: R,
    calculator: RouteCalculator<C>,
    max_concurrent_rows: usize,
    cancel: Arc<AtomicBool>,
}

impl<R, C> BatchOrchestrator<R, C>
where
    R: CoordinateResolver,
    C: RoutingClient,
{
    /// 创建顺序处理的编排器
    pub fn new(resolver: R, calculator: RouteCalculator<C>) -> Self {
        Self {
            resolver,
            calculator,
            max_concurrent_rows: 1,
            cancel: Arc::new(AtomicBool::new(false)),
        }
    }

    /// 设置同时处理的行数（至少为 1）
    pub fn with_max_concurrent_rows(mut self, max_concurrent_rows: usize) -> Self {
        self.max_concurrent_rows = max_concurrent_rows.max(1);
        self
    }

    /// 取消标志；置为 true 后，当前进行中的行完成即停止
    pub fn cancel_handle(&self) -> Arc<AtomicBool> {
        self.cancel.clone()
    }

    /// 处理所有行
    ///
    /// # 参数
    /// - `rows`: 输入行（调用方已完成校验）
    /// - `mode`: 出行方式，整个批次共用
    /// - `progress_fn`: 进度回调，参数为已完成比例 (0, 1]
    ///
    /// # 返回
    /// 返回按输入顺序排列的结果和日志；取消时只包含已完成的行
    pub async fn run(
        &self,
        rows: &[RouteRow],
        mode: TravelMode,
        progress_fn: Option<&dyn Fn(f64)>,
    ) -> BatchReport {
        let total = rows.len();
        let mut report = BatchReport::default();

        if self.is_cancelled() {
            warn!("⚠️ 批次在开始前已被取消");
            report.cancelled = total > 0;
            return report;
        }

        let flow = RowFlow::new(&self.resolver, &self.calculator, mode);
        let flow = &flow;
        let mut outcomes = stream::iter(rows.iter().enumerate())
            .map(|(idx, row)| async move {
                let ctx = RowCtx::new(idx + 1, total);
                flow.run(&ctx, row).await
            })
            .buffered(self.max_concurrent_rows);

        while let Some(outcome) = outcomes.next().await {
            report.results.push(outcome.result);
            report.logs.extend(outcome.logs);

            let done = report.results.len();
            if let Some(progress) = progress_fn {
                progress(done as f64 / total as f64);
            }

            if done < total && self.is_cancelled() {
                warn!("⚠️ 批次已取消: 完成 {}/{} 行", done, total);
                report.cancelled = true;
                break;
            }
        }

        info!(
            "✓ 批次完成: {} 行结果, {} 条日志",
            report.results.len(),
            report.logs.len()
        );
        report
    }

    fn is_cancelled(&self) -> bool {
        self.cancel.load(Ordering::SeqCst)
    }
}
