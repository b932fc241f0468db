//! # 日志初始化
//!
//! 基于 `tracing-subscriber` 的 fmt 订阅者，输出到 stderr。
//!
//! ## 过滤级别
//! - `--verbose`: `debug`
//! - 否则使用 `RUST_LOG`，未设置时为 `error`（默认只显示致命错误）

use tracing_subscriber::EnvFilter;

/// 构造日志过滤器
pub fn build_filter(verbose: bool) -> EnvFilter {
    if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("error"))
    }
}

/// 初始化全局日志订阅者
pub fn init(verbose: bool) {
    tracing_subscriber::fmt()
        .with_env_filter(build_filter(verbose))
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
