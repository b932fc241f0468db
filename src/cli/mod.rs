//! # CLI 模块
//!
//! 使用 `clap` 定义两个图表工具的命令行参数。
//!
//! ## 命令结构
//! - `denssweb-fsc-chart`: FSC 曲线与分辨率
//! - `denssweb-summary-chart`: 多次运行的逐步统计汇总
//!
//! `--input` / `--output` 在 clap 层面是可选的，由 [`require_paths`] 在运行时校验，
//! 以便缺失时记录错误日志并以状态码 1 退出。
//!
//! ## 依赖关系
//! - 被可执行文件入口和 `commands/` 使用
//! - 子模块: fsc, summary

pub mod fsc;
pub mod summary;

use crate::error::{DenssError, Result};
use std::path::Path;

/// 校验必需的输入/输出路径
pub fn require_paths<'a>(
    input: Option<&'a Path>,
    output: Option<&'a Path>,
    message: &str,
) -> Result<(&'a Path, &'a Path)> {
    match (input, output) {
        (Some(i), Some(o)) => Ok((i, o)),
        _ => Err(DenssError::MissingArgument(message.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_require_paths() {
        let input = PathBuf::from("fsc_0.txt");
        let output = PathBuf::from("fsc.png");

        let (i, o) = require_paths(Some(input.as_path()), Some(output.as_path()), "missing").unwrap();
        assert_eq!(i, input.as_path());
        assert_eq!(o, output.as_path());

        let err = require_paths(Some(input.as_path()), None, "Please specify both").unwrap_err();
        assert!(matches!(err, DenssError::MissingArgument(ref m) if m == "Please specify both"));
        assert!(require_paths(None, Some(output.as_path()), "missing").is_err());
        assert!(require_paths(None, None, "missing").is_err());
    }
}
