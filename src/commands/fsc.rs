//! # FSC 图表命令实现
//!
//! ## 流程
//! 1. 校验 `--input` / `--output`
//! 2. 解析两列 FSC 文件
//! 3. 估算分辨率 (最后一个 FSC > 0.5 的频率的倒数)
//! 4. 绘制并保存图表
//!
//! ## 依赖关系
//! - 使用 `cli/fsc.rs` 定义的参数
//! - 使用 `parsers/fsc.rs`, `models/fsc.rs`, `plot/fsc.rs`

use crate::cli::fsc::FscArgs;
use crate::error::Result;
use crate::models::FSC_CUTOFF;
use crate::parsers::fsc::parse_fsc_file;
use crate::plot::fsc::generate_fsc_plot;
use crate::utils::output;

use tracing::{debug, info};

/// 执行 FSC 图表生成，返回估算的分辨率
pub fn execute(args: &FscArgs) -> Result<f64> {
    let (input, output_path) = args.paths()?;

    info!("Parsing input file");
    let curve = parse_fsc_file(input)?;
    debug!(points = curve.len(), path = %input.display(), "Parsed FSC curve");

    info!("Estimate resolution");
    let resolution = curve.resolution(FSC_CUTOFF);
    match curve.last_above(FSC_CUTOFF) {
        Some(p) => debug!(frequency = p.frequency, resolution, "Found FSC cutoff crossing"),
        None => debug!("FSC never exceeds cutoff, resolution reported as 0"),
    }

    info!("Plotting fsc curve");
    generate_fsc_plot(&curve, resolution, output_path, (args.width, args.height))?;

    output::print_result("Resolution", &format!("{:.3} Å", resolution));
    output::print_success(&format!("FSC chart saved to '{}'", output_path.display()));

    Ok(resolution)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DenssError;
    use clap::Parser;
    use std::ffi::OsString;
    use std::fs;

    fn args(input: &std::path::Path, output: &std::path::Path) -> FscArgs {
        FscArgs::parse_from([
            OsString::from("denssweb-fsc-chart"),
            OsString::from("-i"),
            input.as_os_str().to_owned(),
            OsString::from("-o"),
            output.as_os_str().to_owned(),
        ])
    }

    #[test]
    fn test_huge_correlation_fails_without_output() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("fsc_0.txt");
        fs::write(&input, "0.01 1e308\n0.02 -1e308\n").unwrap();
        let output_path = dir.path().join("fsc.png");

        let err = execute(&args(&input, &output_path)).unwrap_err();
        assert!(matches!(err, DenssError::Plot(_)));
        assert!(!output_path.exists());
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 1);
    }

    #[test]
    fn test_huge_frequency_fails_without_output() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("fsc_0.txt");
        fs::write(&input, "-1e308 0.9\n1e308 0.1\n").unwrap();
        let output_path = dir.path().join("fsc.svg");

        assert!(execute(&args(&input, &output_path)).is_err());
        assert!(!output_path.exists());
    }
}
