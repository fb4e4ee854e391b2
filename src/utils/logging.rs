/// 日志工具模块
///
/// 提供日志初始化和输出的辅助函数
use crate::config::Config;
use crate::models::{BatchStats, InputLayout, TravelMode};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// 初始化日志
///
/// 优先使用 RUST_LOG，否则根据 `verbose` 选择 debug 或 info
pub fn init(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

/// 记录程序启动信息
pub fn log_startup(config: &Config) {
    info!("{}", "=".repeat(60));
    info!("🚀 程序启动 - 邮编距离计算");
    info!("📄 输入文件: {}", config.input_file);
    info!("📊 最大并发行数: {}", config.max_concurrent_rows);
    info!("{}", "=".repeat(60));
}

/// 记录输入加载信息
///
/// # 参数
/// - `total`: 行数
/// - `layout`: 输入表格格式
/// - `mode`: 出行方式
pub fn log_rows_loaded(total: usize, layout: InputLayout, mode: TravelMode) {
    info!("✓ 找到 {} 行待处理 ({})", total, layout);
    info!("🚚 出行方式: {}", mode);
    info!("💡 A processar coordenadas... isto pode demorar alguns minutos ⏳\n");
}

/// 打印最终统计信息
///
/// # 参数
/// - `stats`: 批次统计
/// - `output_file`: 报告文件路径
pub fn print_final_stats(stats: &BatchStats, output_file: &str) {
    info!("\n{}", "=".repeat(60));
    info!("📊 全部处理完成统计");
    info!(
        "完成时间: {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    );
    info!("{}", "=".repeat(60));
    info!("✅ 已计算路线: {}/{}", stats.routed_rows, stats.total_rows);
    info!("❌ 未找到坐标的端点: {}", stats.unresolved_endpoints);
    if let Some(distance) = stats.mean_distance_km {
        info!("📏 Média: {:.2} km", distance);
    }
    if let Some(time) = stats.mean_time_minutes {
        info!("⏱️ Média: {:.2} min", time);
    }
    info!("{}", "=".repeat(60));
    info!("\n报告已保存至: {}", output_file);
}

/// 截断长文本用于日志显示
///
/// # 参数
/// - `text`: 原始文本
/// - `max_len`: 最大长度
///
/// # 返回
/// 返回截断后的文本
pub fn truncate_text(text: &str, max_len: usize) -> String {
    if text.chars().count() > max_len {
        text.chars().take(max_len).collect::<String>() + "..."
    } else {
        text.to_string()
    }
}
