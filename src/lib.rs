//! # Postal Distance
//!
//! 从 Excel 表读取成对的邮政编码，查询坐标，再计算驾车距离和时间，
//! 结果写回新的 Excel 文件。
//!
//! ## 架构设计
//!
//! ### ① 传输层（Clients）
//! - `clients/` - 只负责 HTTP 请求，返回状态码和响应体
//! - `HttpLookupClient` - 邮编查询页面
//! - `HttpRoutingClient` - 路由 API
//!
//! ### ② 业务能力层（Services）
//! - `services/` - 描述"我能做什么"，只处理单个位置或单对坐标
//! - `ScrapingResolver` - 从查询页面提取 GPS 坐标
//! - `RouteCalculator` - 距离（km）和时间（分钟）
//! - `ReportExporter` - 生成两个工作表的报告
//!
//! ### ③ 流程层（Workflow）
//! - `workflow/` - 定义"一行"的完整处理流程
//! - `RowCtx` - 上下文封装（行号 + 总行数）
//! - `RowFlow` - 流程编排（resolve × 2 → route）
//!
//! ### ④ 编排层（Orchestration）
//! - `orchestrator/batch_processor` - 批量行处理器，负责并发、进度和取消
//!
//! ## 模块结构

pub mod app;
pub mod clients;
pub mod config;
pub mod error;
pub mod models;
pub mod orchestrator;
pub mod services;
pub mod utils;
pub mod workflow;

// 重新导出常用类型
pub use app::App;
pub use config::Config;
pub use error::{AppError, AppResult};
pub use models::{BatchReport, Coordinate, LocationKey, LogEntry, RouteMetrics, RouteRow, RowResult, TravelMode};
pub use orchestrator::BatchOrchestrator;
pub use workflow::{RowCtx, RowFlow, RowOutcome};
