//! # DENSS 逐步统计文件解析器
//!
//! 发现并解析工作目录中的 `output_*stats_by_step.dat` 文件。
//!
//! ## 格式说明
//! ```text
//! # chi2        rg         supportV   ...
//! 1.234e+02   31.52      1.20e+05
//! 5.678e+01   30.98      1.10e+05
//! 0.000e+00   0.00       0.00e+00   # 未执行的步以 0 填充
//! ```
//! 空行与 `#` 注释行被忽略；所有数据行必须列数一致。
//!
//! ## 依赖关系
//! - 被 `commands/summary.rs` 使用
//! - 使用 `models/run_stats.rs`
//! - 使用 `glob` 进行文件发现

use crate::error::{DenssError, Result};
use crate::models::StepTable;
use std::fs;
use std::path::{Path, PathBuf};

/// 每次运行的统计文件名模式
pub const STATS_FILE_PATTERN: &str = "output_*stats_by_step.dat";

/// 在工作目录中查找统计文件
pub fn discover_stats_files(work_dir: &Path) -> Result<Vec<PathBuf>> {
    if !work_dir.is_dir() {
        return Err(DenssError::DirectoryNotFound {
            path: work_dir.display().to_string(),
        });
    }

    let dir = work_dir.to_str().ok_or_else(|| {
        DenssError::InvalidPattern(format!("non UTF-8 path: {}", work_dir.display()))
    })?;
    let pattern = Path::new(&glob::Pattern::escape(dir))
        .join(STATS_FILE_PATTERN)
        .display()
        .to_string();

    let entries = glob::glob(&pattern).map_err(|e| DenssError::InvalidPattern(e.to_string()))?;

    let mut files = Vec::new();
    for entry in entries {
        let path = entry.map_err(|e| DenssError::FileReadError {
            path: e.path().display().to_string(),
            source: e.into_error(),
        })?;
        if path.is_file() {
            files.push(path);
        }
    }

    if files.is_empty() {
        return Err(DenssError::NoFilesFound { pattern });
    }

    Ok(files)
}

/// 解析单个统计文件
pub fn parse_stats_file(path: &Path) -> Result<StepTable> {
    let content = fs::read_to_string(path).map_err(|e| DenssError::FileReadError {
        path: path.display().to_string(),
        source: e,
    })?;

    parse_stats_content(&content, path)
}

/// 从字符串内容解析统计表
pub fn parse_stats_content(content: &str, source: &Path) -> Result<StepTable> {
    let mut rows: Vec<Vec<f64>> = Vec::new();

    for (idx, line) in content.lines().enumerate() {
        let data = line.split('#').next().unwrap_or("").trim();
        if data.is_empty() {
            continue;
        }

        let row = data
            .split_whitespace()
            .map(|t| {
                t.parse::<f64>().map_err(|_| {
                    parse_error(source, format!("line {}: invalid number '{}'", idx + 1, t))
                })
            })
            .collect::<Result<Vec<f64>>>()?;

        if let Some(first) = rows.first() {
            if first.len() != row.len() {
                return Err(parse_error(
                    source,
                    format!(
                        "line {}: expected {} columns, found {}",
                        idx + 1,
                        first.len(),
                        row.len()
                    ),
                ));
            }
        }

        rows.push(row);
    }

    if rows.is_empty() {
        return Err(parse_error(source, "no data rows".to_string()));
    }

    StepTable::from_rows(source.to_path_buf(), rows)
        .ok_or_else(|| parse_error(source, "inconsistent column count".to_string()))
}

fn parse_error(source: &Path, reason: String) -> DenssError {
    DenssError::ParseError {
        format: "stats_by_step".to_string(),
        path: source.display().to_string(),
        reason,
    }
}
