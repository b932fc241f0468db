//! # DENSSWeb Charts - DENSS 诊断图表工具
//!
//! DENSSWeb 在每个重建作业结束后调用的两个命令行工具。
//!
//! ## 可执行文件
//! - `denssweb-fsc-chart` - FSC 曲线与分辨率估算
//! - `denssweb-summary-chart` - 多次运行逐步统计 (χ², Rg, 支撑体积) 汇总
//!
//! ## 依赖关系
//! ```text
//! bin/
//!   ├── cli/        (命令行参数定义)
//!   ├── commands/   (命令执行逻辑)
//!   │     ├── parsers/   (数据文件解析器)
//!   │     ├── models/    (数据模型与统计)
//!   │     ├── plot/      (plotters 图表)
//!   │     └── export.rs  (CSV 导出)
//!   ├── utils/      (日志、输出、进度条)
//!   └── error.rs    (错误处理)
//! ```

pub mod cli;
pub mod commands;
pub mod error;
pub mod export;
pub mod models;
pub mod parsers;
pub mod plot;
pub mod utils;

pub use error::{DenssError, Result};
