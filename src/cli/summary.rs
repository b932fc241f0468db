//! # denssweb-summary-chart CLI 定义
//!
//! ## 依赖关系
//! - 被 `bin/denssweb-summary-chart.rs` 使用
//! - 参数传递给 `commands/summary.rs`

use super::require_paths;
use crate::error::Result;
use clap::Parser;
use std::path::{Path, PathBuf};

/// Create summary plot of DENSS run for use with DENSSWeb
#[derive(Parser, Debug)]
#[command(name = "denssweb-summary-chart")]
#[command(version)]
#[command(about = "Create summary plot of DENSS run for use with DENSSWeb", long_about = None)]
pub struct SummaryArgs {
    /// Path to work directory (/workdir/denss-1)
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Path to output file (.png, or .svg for vector output)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Output debugging information
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,

    /// Also write per-run terminal values to this CSV file
    #[arg(long)]
    pub csv: Option<PathBuf>,

    /// Figure width in pixels
    #[arg(long, default_value_t = 800)]
    pub width: u32,

    /// Figure height in pixels
    #[arg(long, default_value_t = 900)]
    pub height: u32,
}

impl SummaryArgs {
    /// 返回 (work_dir, output)，任一缺失时报错
    pub fn paths(&self) -> Result<(&Path, &Path)> {
        require_paths(
            self.input.as_deref(),
            self.output.as_deref(),
            "Please specify both a work directory and output file",
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DenssError;

    #[test]
    fn test_parse_long_flags() {
        let args = SummaryArgs::parse_from([
            "denssweb-summary-chart",
            "--input",
            "/workdir/denss-1",
            "--output",
            "summary.png",
            "--csv",
            "terminal.csv",
        ]);
        let (input, output) = args.paths().unwrap();
        assert_eq!(input, Path::new("/workdir/denss-1"));
        assert_eq!(output, Path::new("summary.png"));
        assert_eq!(args.csv.as_deref(), Some(Path::new("terminal.csv")));
        assert!(!args.verbose);
    }

    #[test]
    fn test_missing_input_is_error() {
        let args = SummaryArgs::parse_from(["denssweb-summary-chart", "-o", "summary.png"]);
        match args.paths() {
            Err(DenssError::MissingArgument(msg)) => assert!(msg.contains("work directory")),
            other => panic!("unexpected result: {other:?}"),
        }
    }
}
