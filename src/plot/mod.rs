//! # 图表生成模块
//!
//! 使用 `plotters` 库生成 FSC 曲线图和运行统计汇总图。
//!
//! ## 子模块
//! - `fsc`: FSC 曲线 + 分辨率标注
//! - `summary`: 三面板逐步统计图
//!
//! 图表先渲染到同目录下的临时文件，全部绘制成功后再重命名为目标路径；
//! 任何绘制错误都会删除临时文件，目标路径保持不变。
//!
//! ## 依赖关系
//! - 被 `commands/` 调用
//! - 使用 `models/` 的数据结构
//! - 使用 `plotters` 渲染图表

pub mod fsc;
pub mod summary;

use crate::error::{DenssError, Result};

use plotters::coord::Shift;
use plotters::prelude::*;
use std::fmt::Debug;
use std::fs;
use std::path::{Path, PathBuf};

/// 图像四周的固定留白 (像素)
pub const PADDING: u32 = 30;

/// 输出图像格式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFormat {
    Png,
    Svg,
}

impl ImageFormat {
    /// 根据扩展名推断格式，默认 PNG
    pub fn from_path(path: &Path) -> Self {
        match path
            .extension()
            .and_then(|e| e.to_str())
            .map(|s| s.to_lowercase())
            .as_deref()
        {
            Some("svg") => ImageFormat::Svg,
            _ => ImageFormat::Png,
        }
    }

    pub fn extension(self) -> &'static str {
        match self {
            ImageFormat::Png => "png",
            ImageFormat::Svg => "svg",
        }
    }
}

/// 渲染用临时文件：`<dir>/.<name>.partial.<png|svg>`
pub(crate) fn staging_path(output_path: &Path, format: ImageFormat) -> PathBuf {
    let name = output_path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| "chart".to_string());
    output_path.with_file_name(format!(".{}.partial.{}", name, format.extension()))
}

/// 渲染到临时文件，成功后重命名为 `output_path`；失败时删除临时文件
pub(crate) fn save_atomically<F>(output_path: &Path, render: F) -> Result<()>
where
    F: FnOnce(&Path, ImageFormat) -> Result<()>,
{
    let format = ImageFormat::from_path(output_path);
    let staging = staging_path(output_path, format);

    // 后端在 render 返回时析构并落盘，之后才能清理
    if let Err(e) = render(&staging, format) {
        let _ = fs::remove_file(&staging);
        return Err(e);
    }

    fs::rename(&staging, output_path).map_err(|e| {
        let _ = fs::remove_file(&staging);
        DenssError::FileWriteError {
            path: output_path.display().to_string(),
            source: e,
        }
    })
}

/// 将 plotters 错误转换为统一错误类型
pub(crate) fn plot_err<E: Debug>(e: E) -> DenssError {
    DenssError::Plot(format!("{:?}", e))
}

/// 在绘图区内按比例坐标 (0..1, 原点在左下角) 放置文字
pub(crate) fn draw_label<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    fx: f64,
    fy: f64,
    text: &str,
) -> Result<()> {
    let (w, h) = area.dim_in_pixel();
    let x = (w as f64 * fx).round() as i32;
    let y = (h as f64 * (1.0 - fy)).round() as i32;
    let style = ("sans-serif", 16).into_font().color(&BLACK);

    area.draw(&Text::new(text.to_string(), (x, y), style))
        .map_err(plot_err)
}

/// 线性坐标范围，两端各留 5% 余量；跨度溢出时报错
pub(crate) fn linear_range(bounds: Option<(f64, f64)>, fallback: (f64, f64)) -> Result<(f64, f64)> {
    let (lo, hi) = bounds.unwrap_or(fallback);
    let margin = if hi > lo {
        (hi - lo) * 0.05
    } else if lo == 0.0 {
        1.0
    } else {
        lo.abs() * 0.1
    };
    checked_range(lo - margin, hi + margin)
}

/// 对数坐标范围，只考虑正值；上界溢出时报错
pub(crate) fn log_range(values: impl Iterator<Item = f64>) -> Result<(f64, f64)> {
    let bounds = values
        .filter(|v| *v > 0.0 && v.is_finite())
        .fold(None, |acc: Option<(f64, f64)>, v| match acc {
            None => Some((v, v)),
            Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
        });

    match bounds {
        Some((lo, hi)) => checked_range(lo / 1.5, hi * 1.5),
        None => Ok((0.1, 10.0)),
    }
}

/// plotters 的刻度生成在无穷跨度上不会终止
fn checked_range(lo: f64, hi: f64) -> Result<(f64, f64)> {
    if lo.is_finite() && hi.is_finite() && (hi - lo).is_finite() {
        Ok((lo, hi))
    } else {
        Err(DenssError::Plot("axis range overflow".to_string()))
    }
}
