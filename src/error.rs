//! # 统一错误处理模块
//!
//! 定义两个图表工具共用的错误类型，使用 `thiserror` 派生。
//!
//! ## 依赖关系
//! - 被所有其他模块使用
//! - 无外部模块依赖

use thiserror::Error;

/// DENSSWeb 图表工具统一错误类型
#[derive(Error, Debug)]
pub enum DenssError {
    // ─────────────────────────────────────────────────────────────
    // 参数错误
    // ─────────────────────────────────────────────────────────────
    #[error("{0}")]
    MissingArgument(String),

    // ─────────────────────────────────────────────────────────────
    // I/O 错误
    // ─────────────────────────────────────────────────────────────
    #[error("Failed to read file: {path}")]
    FileReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write file: {path}")]
    FileWriteError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Directory not found: {path}")]
    DirectoryNotFound { path: String },

    #[error("No matching files found with pattern: {pattern}")]
    NoFilesFound { pattern: String },

    #[error("Invalid file pattern: {0}")]
    InvalidPattern(String),

    // ─────────────────────────────────────────────────────────────
    // 解析错误
    // ─────────────────────────────────────────────────────────────
    #[error("Failed to parse {format} file: {path}\nReason: {reason}")]
    ParseError {
        format: String,
        path: String,
        reason: String,
    },

    // ─────────────────────────────────────────────────────────────
    // 统计数据错误
    // ─────────────────────────────────────────────────────────────
    #[error(
        "Shape mismatch in {path}: expected {}x{} (steps x columns), found {}x{}",
        .expected.0, .expected.1, .found.0, .found.1
    )]
    ShapeMismatch {
        path: String,
        expected: (usize, usize),
        found: (usize, usize),
    },

    #[error("Statistics file {path} has {found} columns, at least {required} are required")]
    MissingColumns {
        path: String,
        found: usize,
        required: usize,
    },

    #[error("No nonzero {metric} value in {path}")]
    NoTerminalValue { path: String, metric: String },

    // ─────────────────────────────────────────────────────────────
    // 输出错误
    // ─────────────────────────────────────────────────────────────
    #[error("Plotting failed: {0}")]
    Plot(String),

    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),
}

impl DenssError {
    /// 包含底层原因链的完整错误描述
    pub fn report(&self) -> String {
        let mut msg = self.to_string();
        let mut source = std::error::Error::source(self);
        while let Some(cause) = source {
            msg.push_str(&format!(": {}", cause));
            source = cause.source();
        }
        msg
    }
}

/// Result 类型别名
pub type Result<T> = std::result::Result<T, DenssError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_includes_source() {
        let err = DenssError::FileReadError {
            path: "fsc_0.txt".to_string(),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "No such file"),
        };
        assert_eq!(err.report(), "Failed to read file: fsc_0.txt: No such file");
    }
}
