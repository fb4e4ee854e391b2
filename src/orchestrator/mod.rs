//! 编排层（Orchestration Layer）
//!
//! ## 层次关系
//!
//! ```text
//! app (加载输入 → 校验 → 编排 → 导出 → 统计)
//!     ↓
//! orchestrator::BatchOrchestrator (处理 Vec<RouteRow>)
//!     ↓
//! workflow::RowFlow (处理单行)
//!     ↓
//! services (能力层：resolve / route / export)
//!     ↓
//! clients (传输：查询页面 / 路由 API)
//! ```
//!
//! 编排层只做调度、进度和取消，不做具体业务判断

pub mod batch_processor;

pub use batch_processor::BatchOrchestrator;
