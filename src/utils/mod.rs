//! # 工具函数模块
//!
//! 提供日志初始化、美化输出、进度条等工具。
//!
//! ## 依赖关系
//! - 被 `commands/` 模块和可执行文件入口使用
//! - 子模块: logging, output, progress

pub mod logging;
pub mod output;
pub mod progress;
