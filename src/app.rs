use crate::clients::{HttpLookupClient, HttpRoutingClient, RoutingClient};
use crate::config::Config;
use crate::error::AppResult;
use crate::models::{load_xlsx_rows, BatchReport, RouteRow, TravelMode, TravelModeAdvisory};
use crate::orchestrator::BatchOrchestrator;
use crate::services::{CoordinateResolver, ReportExporter, RouteCalculator, ScrapingResolver};
use crate::utils::logging::{log_rows_loaded, log_startup, print_final_stats};
use std::path::Path;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::task::JoinHandle;
use tracing::{info, warn};

type HttpOrchestrator = BatchOrchestrator<ScrapingResolver<HttpLookupClient>, HttpRoutingClient>;

/// 应用主结构
pub struct App {
    config: Config,
    orchestrator: HttpOrchestrator,
    exporter: ReportExporter,
}

impl App {
    /// 初始化应用
    pub fn initialize(config: Config) -> AppResult<Self> {
        log_startup(&config);

        if config.routing_api_key.is_empty() {
            warn!("⚠️ 未设置 ROUTING_API_KEY，路由请求可能被拒绝");
        }

        let resolver = ScrapingResolver::new(HttpLookupClient::new(&config)?)?;
        let calculator = RouteCalculator::new(HttpRoutingClient::new(&config)?);
        let orchestrator = BatchOrchestrator::new(resolver, calculator)
            .with_max_concurrent_rows(config.max_concurrent_rows);

        Ok(Self {
            config,
            orchestrator,
            exporter: ReportExporter::new(),
        })
    }

    /// 运行应用主逻辑
    ///
    /// 出行方式或输入校验失败时，不处理任何行
    pub async fn run(&self) -> AppResult<BatchReport> {
        let (mode, advisory) = TravelMode::resolve(self.config.travel_mode.as_deref())?;
        if let Some(advisory) = &advisory {
            warn!("⚠️ {}", advisory);
        }

        let table = load_xlsx_rows(Path::new(&self.config.input_file)).await?;
        log_rows_loaded(table.rows.len(), table.layout, mode);

        let _signal = CtrlCGuard::install(self.orchestrator.cancel_handle());

        let report = process_batch(
            &self.orchestrator,
            &self.exporter,
            &table.rows,
            mode,
            advisory,
            Path::new(&self.config.output_file),
        )
        .await?;

        print_final_stats(&report.stats(), &self.config.output_file);
        Ok(report)
    }
}

/// 编排、附加出行方式提示并导出一次
///
/// 出行方式提示随报告返回给调用方，而不只是写进日志
pub async fn process_batch<R, C>(
    orchestrator: &BatchOrchestrator<R, C>,
    exporter: &ReportExporter,
    rows: &[RouteRow],
    mode: TravelMode,
    advisory: Option<TravelModeAdvisory>,
    output_file: &Path,
) -> AppResult<BatchReport>
where
    R: CoordinateResolver,
    C: RoutingClient,
{
    let last_percent = AtomicUsize::new(0);
    let progress = |fraction: f64| {
        let percent = (fraction * 100.0).floor() as usize;
        if percent / 10 > last_percent.load(Ordering::Relaxed) / 10 || percent == 100 {
            last_percent.store(percent, Ordering::Relaxed);
            info!("⏳ 进度: {}%", percent);
        }
    };

    let progress_fn: &dyn Fn(f64) = &progress;
    let mut report = orchestrator.run(rows, mode, Some(progress_fn)).await;
    report.advisory = advisory;

    if !report.logs.is_empty() {
        warn!("⚠️ Alguns códigos não tiveram coordenadas encontradas:");
        for entry in &report.logs {
            warn!("  {}", entry);
        }
    }

    // 无论是否有日志，只导出一次
    exporter.write_to(&report, output_file).await?;
    Ok(report)
}

/// Ctrl+C 置位取消标志，当前行完成后停止
///
/// 监听任务随 guard 一起结束，多次运行不会遗留后台任务
struct CtrlCGuard {
    handle: JoinHandle<()>,
}

impl CtrlCGuard {
    fn install(cancel: Arc<AtomicBool>) -> Self {
        let handle = tokio::spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                warn!("⚠️ 收到中断信号，完成当前行后停止");
                cancel.store(true, Ordering::SeqCst);
            }
        });
        Self { handle }
    }
}

impl Drop for CtrlCGuard {
    fn drop(&mut self) {
        self.handle.abort();
    }
}
