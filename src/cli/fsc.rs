//! # denssweb-fsc-chart CLI 定义
//!
//! ## 依赖关系
//! - 被 `bin/denssweb-fsc-chart.rs` 使用
//! - 参数传递给 `commands/fsc.rs`

use super::require_paths;
use crate::error::Result;
use clap::Parser;
use std::path::{Path, PathBuf};

/// Create Fourier Shell Correlation (FSC) chart for use with DENSSWeb
#[derive(Parser, Debug)]
#[command(name = "denssweb-fsc-chart")]
#[command(version)]
#[command(about = "Create Fourier Shell Correlation chart for use with DENSSWeb", long_about = None)]
pub struct FscArgs {
    /// Path to input file (spt_01/fsc_0.txt)
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Path to output file (.png, or .svg for vector output)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Output debugging information
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,

    /// Figure width in pixels
    #[arg(long, default_value_t = 800)]
    pub width: u32,

    /// Figure height in pixels
    #[arg(long, default_value_t = 600)]
    pub height: u32,
}

impl FscArgs {
    /// 返回 (input, output)，任一缺失时报错
    pub fn paths(&self) -> Result<(&Path, &Path)> {
        require_paths(
            self.input.as_deref(),
            self.output.as_deref(),
            "Please specify both an input and output file",
        )
    }
}
