//! # FSC 数据文件解析器
//!
//! 解析两列空白分隔的 FSC 文本文件（如 `spt_avg_01/fsc_0.txt`）。
//!
//! ## 格式说明
//! ```text
//! 0.0100  0.9987     # frequency (1/Å)  correlation
//! 0.0200  0.9712
//! ...
//! ```
//! 每一行必须恰好包含两个数值；任何不符合的行（包括空行）都会导致整个解析失败。
//!
//! ## 依赖关系
//! - 被 `commands/fsc.rs` 使用
//! - 使用 `models/fsc.rs`

use crate::error::{DenssError, Result};
use crate::models::{FscCurve, FscPoint};
use std::fs;
use std::path::Path;

/// 解析 FSC 文件
pub fn parse_fsc_file(path: &Path) -> Result<FscCurve> {
    let content = fs::read_to_string(path).map_err(|e| DenssError::FileReadError {
        path: path.display().to_string(),
        source: e,
    })?;

    parse_fsc_content(&content, &path.display().to_string())
}

/// 从字符串内容解析 FSC 曲线
pub fn parse_fsc_content(content: &str, source_name: &str) -> Result<FscCurve> {
    let mut points = Vec::new();

    for (idx, line) in content.lines().enumerate() {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        if tokens.len() != 2 {
            return Err(parse_error(
                source_name,
                format!(
                    "line {}: expected 2 columns, found {}",
                    idx + 1,
                    tokens.len()
                ),
            ));
        }

        let frequency = parse_number(tokens[0], idx, source_name)?;
        let correlation = parse_number(tokens[1], idx, source_name)?;
        points.push(FscPoint::new(frequency, correlation));
    }

    Ok(FscCurve::new(points))
}

fn parse_number(token: &str, idx: usize, source_name: &str) -> Result<f64> {
    token.parse::<f64>().map_err(|_| {
        parse_error(
            source_name,
            format!("line {}: invalid number '{}'", idx + 1, token),
        )
    })
}

fn parse_error(source_name: &str, reason: String) -> DenssError {
    DenssError::ParseError {
        format: "fsc".to_string(),
        path: source_name.to_string(),
        reason,
    }
}
