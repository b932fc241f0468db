//! # FSC 曲线图
//!
//! 单坐标轴折线图：相关系数 vs 空间频率，
//! 带 0.5 / 0.143 虚线参考线和分辨率标注。
//!
//! ## 依赖关系
//! - 被 `commands/fsc.rs` 调用
//! - 使用 `models/fsc.rs` 的 FscCurve
//! - 使用 `plotters` 渲染图表

use super::{draw_label, linear_range, plot_err, save_atomically, ImageFormat, PADDING};
use crate::error::Result;
use crate::models::{FscCurve, FSC_CUTOFF, FSC_GOLD_STANDARD};

use plotters::coord::Shift;
use plotters::prelude::*;
use std::path::Path;

const CURVE_COLOR: RGBColor = RGBColor(226, 74, 51);
const REFERENCE_COLOR: RGBColor = RGBColor(68, 68, 68);

/// 生成 FSC 曲线图，格式由扩展名决定
pub fn generate_fsc_plot(
    curve: &FscCurve,
    resolution: f64,
    output_path: &Path,
    size: (u32, u32),
) -> Result<()> {
    save_atomically(output_path, |staging, format| match format {
        ImageFormat::Svg => {
            let root = SVGBackend::new(staging, size).into_drawing_area();
            draw_fsc_chart(&root, curve, resolution)?;
            root.present().map_err(plot_err)
        }
        ImageFormat::Png => {
            let root = BitMapBackend::new(staging, size).into_drawing_area();
            draw_fsc_chart(&root, curve, resolution)?;
            root.present().map_err(plot_err)
        }
    })
}

/// 绘制 FSC 图表的核心逻辑
fn draw_fsc_chart<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    curve: &FscCurve,
    resolution: f64,
) -> Result<()>
where
    DB::ErrorType: 'static,
{
    let (x_min, x_max) = linear_range(curve.frequency_range(), (0.0, 1.0))?;
    // 参考线始终在可见范围内
    let (y_lo, y_hi) = curve
        .correlation_range()
        .map(|(lo, hi)| (lo.min(0.0), hi.max(1.0)))
        .unwrap_or((0.0, 1.0));
    let (y_min, y_max) = linear_range(Some((y_lo, y_hi)), (0.0, 1.0))?;

    root.fill(&WHITE).map_err(plot_err)?;

    let mut chart = ChartBuilder::on(root)
        .margin(PADDING)
        .x_label_area_size(50)
        .y_label_area_size(60)
        .build_cartesian_2d(x_min..x_max, y_min..y_max)
        .map_err(plot_err)?;

    chart
        .configure_mesh()
        .x_desc("Resolution (1/Å)")
        .y_desc("FSC")
        .x_label_style(("sans-serif", 16))
        .y_label_style(("sans-serif", 16))
        .axis_desc_style(("sans-serif", 18))
        .draw()
        .map_err(plot_err)?;

    chart
        .draw_series(LineSeries::new(
            curve.points.iter().map(|p| (p.frequency, p.correlation)),
            CURVE_COLOR.stroke_width(2),
        ))
        .map_err(plot_err)?;

    for threshold in [FSC_CUTOFF, FSC_GOLD_STANDARD] {
        chart
            .draw_series(
                dashed_segments(x_min, x_max, 48)
                    .map(|(a, b)| {
                        PathElement::new(
                            vec![(a, threshold), (b, threshold)],
                            REFERENCE_COLOR.stroke_width(1),
                        )
                    }),
            )
            .map_err(plot_err)?;
    }

    let area = chart.plotting_area().strip_coord_spec();
    draw_label(&area, 0.8, 0.9, &format!("r = {:.3} Å", resolution))?;

    Ok(())
}

/// 把 [start, end] 切成 `dashes` 段虚线，返回每段实线的端点
fn dashed_segments(start: f64, end: f64, dashes: usize) -> impl Iterator<Item = (f64, f64)> {
    let period = (end - start) / dashes as f64;
    (0..dashes).map(move |i| {
        let a = start + period * i as f64;
        (a, a + period * 0.6)
    })
}
