//! # 美化输出工具
//!
//! 提供统一的终端输出样式。日志走 `tracing`，这里只负责面向用户的结果。
//!
//! ## 依赖关系
//! - 被 `commands/` 模块使用
//! - 使用 `colored` crate

use colored::Colorize;

/// 打印成功消息
pub fn print_success(msg: &str) {
    println!("{} {}", "[OK]".green().bold(), msg);
}

/// 打印键值结果，如 `Resolution: 12.345 Å`
pub fn print_result(label: &str, value: &str) {
    println!("{} {} {}", "[=]".cyan().bold(), format!("{}:", label).dimmed(), value.bold());
}

/// 打印标题栏
pub fn print_header(title: &str) {
    let line = "─".repeat(60);
    println!("\n{}", line.dimmed());
    println!("  {}", title.bold());
    println!("{}\n", line.dimmed());
}
