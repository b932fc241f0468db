//! # 运行统计汇总图
//!
//! 三个纵向排列、共享 x 轴 (step) 的面板：
//! - χ² (对数 y 轴)
//! - Rg (线性 y 轴)
//! - 支撑体积 (对数 y 轴)
//!
//! 每次运行一条曲线；每个面板标注终值的均值与标准差。
//! 对数面板中的非正值被屏蔽。
//!
//! ## 依赖关系
//! - 被 `commands/summary.rs` 调用
//! - 使用 `models/run_stats.rs` 的 RunStack, RunSummary
//! - 使用 `plotters` 渲染图表

use super::{draw_label, linear_range, log_range, plot_err, save_atomically, ImageFormat, PADDING};
use crate::error::Result;
use crate::models::{Metric, RunStack, RunSummary};

use plotters::coord::ranged1d::ValueFormatter;
use plotters::coord::Shift;
use plotters::prelude::*;
use std::ops::Range;
use std::path::Path;

const TITLE: &str = "Statistics by Step";

/// 生成汇总图，格式由扩展名决定
pub fn generate_summary_plot(
    stack: &RunStack,
    summary: &RunSummary,
    output_path: &Path,
    size: (u32, u32),
) -> Result<()> {
    save_atomically(output_path, |staging, format| match format {
        ImageFormat::Svg => {
            let root = SVGBackend::new(staging, size).into_drawing_area();
            draw_summary_chart(&root, stack, summary)?;
            root.present().map_err(plot_err)
        }
        ImageFormat::Png => {
            let root = BitMapBackend::new(staging, size).into_drawing_area();
            draw_summary_chart(&root, stack, summary)?;
            root.present().map_err(plot_err)
        }
    })
}

/// 绘制三面板图表
fn draw_summary_chart<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    stack: &RunStack,
    summary: &RunSummary,
) -> Result<()>
where
    DB::ErrorType: 'static,
{
    // 所有坐标范围在落笔前确定
    let y_ranges = Metric::ALL
        .iter()
        .map(|&metric| panel_y_range(stack, metric))
        .collect::<Result<Vec<_>>>()?;

    root.fill(&WHITE).map_err(plot_err)?;

    let body = root.margin(PADDING, PADDING, PADDING, PADDING);
    let panels = body.split_evenly((Metric::ALL.len(), 1));

    let x_max = stack.steps().saturating_sub(1).max(1) as f64;
    let last = Metric::ALL.len() - 1;

    for (i, ((panel, metric), (y_min, y_max))) in panels
        .iter()
        .zip(Metric::ALL)
        .zip(y_ranges)
        .enumerate()
    {
        let stats = summary.metric(metric);
        let layout = PanelLayout {
            title: (i == 0).then_some(TITLE),
            show_x_axis: i == last,
            x_range: 0.0..x_max,
            y_range: y_min..y_max,
            annotation: format!("Average = {:.3}  σ = {:.3}", stats.mean, stats.std_dev),
        };
        draw_metric_panel(panel, stack, metric, &layout)?;
    }

    Ok(())
}

struct PanelLayout {
    title: Option<&'static str>,
    show_x_axis: bool,
    x_range: Range<f64>,
    y_range: Range<f64>,
    annotation: String,
}

/// 指标面板的 y 轴范围；对数面板只看正值
fn panel_y_range(stack: &RunStack, metric: Metric) -> Result<(f64, f64)> {
    let values = (0..stack.runs()).flat_map(|run| stack.series(run, metric));
    if metric.log_scale() {
        return log_range(values);
    }

    let bounds = values
        .filter(|v| v.is_finite())
        .fold(None, |acc: Option<(f64, f64)>, v| match acc {
            None => Some((v, v)),
            Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
        });
    linear_range(bounds, (0.0, 1.0))
}

/// 绘制单个指标面板
fn draw_metric_panel<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    stack: &RunStack,
    metric: Metric,
    layout: &PanelLayout,
) -> Result<()>
where
    DB::ErrorType: 'static,
{
    let mut builder = ChartBuilder::on(area);
    builder
        .margin(8)
        .x_label_area_size(if layout.show_x_axis { 40 } else { 0 })
        .y_label_area_size(80);
    if let Some(title) = layout.title {
        builder.caption(title, ("sans-serif", 22));
    }

    if metric.log_scale() {
        let mut chart = builder
            .build_cartesian_2d(layout.x_range.clone(), layout.y_range.clone().log_scale())
            .map_err(plot_err)?;
        finish_panel(&mut chart, stack, metric, layout)
    } else {
        let mut chart = builder
            .build_cartesian_2d(layout.x_range.clone(), layout.y_range.clone())
            .map_err(plot_err)?;
        finish_panel(&mut chart, stack, metric, layout)
    }
}

/// 网格、曲线与均值标注，线性和对数面板共用
fn finish_panel<DB, X, Y>(
    chart: &mut ChartContext<'_, DB, Cartesian2d<X, Y>>,
    stack: &RunStack,
    metric: Metric,
    layout: &PanelLayout,
) -> Result<()>
where
    DB: DrawingBackend,
    DB::ErrorType: 'static,
    X: Ranged<ValueType = f64> + ValueFormatter<f64>,
    Y: Ranged<ValueType = f64> + ValueFormatter<f64>,
{
    let mut mesh = chart.configure_mesh();
    mesh.y_desc(metric.axis_label())
        .axis_desc_style(("sans-serif", 16));
    if layout.show_x_axis {
        mesh.x_desc("Step");
    }
    mesh.draw().map_err(plot_err)?;

    draw_runs(chart, stack, metric)?;

    let plot_area = chart.plotting_area().strip_coord_spec();
    draw_label(&plot_area, 0.5, 0.8, &layout.annotation)
}

/// 每次运行画一条逐步曲线
fn draw_runs<DB, CT>(
    chart: &mut ChartContext<'_, DB, CT>,
    stack: &RunStack,
    metric: Metric,
) -> Result<()>
where
    DB: DrawingBackend,
    DB::ErrorType: 'static,
    CT: CoordTranslate<From = (f64, f64)>,
{
    for run in 0..stack.runs() {
        let points = run_points(stack, run, metric);
        chart
            .draw_series(LineSeries::new(
                points,
                Palette99::pick(run).stroke_width(2),
            ))
            .map_err(plot_err)?;
    }
    Ok(())
}

/// (step, value) 点列；对数面板中丢弃非正值
fn run_points(stack: &RunStack, run: usize, metric: Metric) -> Vec<(f64, f64)> {
    stack
        .series(run, metric)
        .enumerate()
        .filter(|(_, v)| !metric.log_scale() || *v > 0.0)
        .map(|(step, v)| (step as f64, v))
        .collect()
}
