//! # 数据模型模块
//!
//! 定义 FSC 曲线和 DENSS 运行统计的数据模型。
//!
//! ## 依赖关系
//! - 被 `parsers/`、`commands/` 和 `plot/` 使用
//! - 子模块: fsc, run_stats

pub mod fsc;
pub mod run_stats;

pub use fsc::{FscCurve, FscPoint, FSC_CUTOFF, FSC_GOLD_STANDARD};
pub use run_stats::{Metric, MetricStats, RunStack, RunSummary, StepTable};
