//! # 命令执行模块
//!
//! 两个图表工具的执行逻辑。
//!
//! ## 依赖关系
//! - 被可执行文件入口调用
//! - 使用 `cli/`, `parsers/`, `models/`, `plot/`, `utils/`
//! - 子模块: fsc, summary

pub mod fsc;
pub mod summary;
