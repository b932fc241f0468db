//! # DENSS 运行统计数据模型
//!
//! 将多个 `output_*stats_by_step.dat` 文件堆叠成 [run, step, column] 三维表，
//! 并计算每次运行的终值与跨运行的均值/标准差。
//!
//! ## 列约定
//! | 列 | 指标 |
//! |----|------|
//! | 0  | χ² |
//! | 1  | 回转半径 Rg |
//! | 2  | 支撑体积 |
//!
//! ## 依赖关系
//! - 被 `parsers/stats.rs` 构造 `StepTable`
//! - 被 `commands/summary.rs`, `plot/summary.rs`, `export.rs` 使用

use crate::error::{DenssError, Result};
use std::fmt;
use std::path::{Path, PathBuf};

/// 统计指标
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Metric {
    ChiSquared,
    RadiusOfGyration,
    SupportVolume,
}

impl Metric {
    /// 按列顺序排列的全部指标
    pub const ALL: [Metric; 3] = [
        Metric::ChiSquared,
        Metric::RadiusOfGyration,
        Metric::SupportVolume,
    ];

    /// 在统计文件中的列号
    pub fn column(self) -> usize {
        match self {
            Metric::ChiSquared => 0,
            Metric::RadiusOfGyration => 1,
            Metric::SupportVolume => 2,
        }
    }

    /// 图表 y 轴标签
    pub fn axis_label(self) -> &'static str {
        match self {
            Metric::ChiSquared => "χ²",
            Metric::RadiusOfGyration => "Rg",
            Metric::SupportVolume => "Support Volume",
        }
    }

    /// 是否使用对数 y 轴
    pub fn log_scale(self) -> bool {
        !matches!(self, Metric::RadiusOfGyration)
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Metric::ChiSquared => write!(f, "chi-squared"),
            Metric::RadiusOfGyration => write!(f, "radius of gyration"),
            Metric::SupportVolume => write!(f, "support volume"),
        }
    }
}

/// 单个统计文件：step × column 的行主序矩阵
#[derive(Debug, Clone, PartialEq)]
pub struct StepTable {
    pub source: PathBuf,
    steps: usize,
    columns: usize,
    values: Vec<f64>,
}

impl StepTable {
    /// 由等长行构造；行长度不一致时返回 None
    pub fn from_rows(source: PathBuf, rows: Vec<Vec<f64>>) -> Option<Self> {
        let columns = rows.first().map(|r| r.len()).unwrap_or(0);
        if rows.iter().any(|r| r.len() != columns) {
            return None;
        }
        let steps = rows.len();
        let values = rows.into_iter().flatten().collect();
        Some(Self {
            source,
            steps,
            columns,
            values,
        })
    }

    /// (steps, columns)
    pub fn shape(&self) -> (usize, usize) {
        (self.steps, self.columns)
    }

    pub fn value(&self, step: usize, column: usize) -> f64 {
        self.values[step * self.columns + column]
    }
}

/// 经过形状校验的多运行统计表
#[derive(Debug, Clone)]
pub struct RunStack {
    sources: Vec<PathBuf>,
    steps: usize,
    columns: usize,
    data: Vec<f64>,
}

impl RunStack {
    /// 每个统计文件至少需要的列数
    pub const REQUIRED_COLUMNS: usize = 3;

    /// 堆叠统计表；所有表必须与第一个表形状一致
    pub fn from_tables(tables: Vec<StepTable>) -> Result<Self> {
        let first = tables.first().ok_or_else(|| DenssError::NoFilesFound {
            pattern: crate::parsers::stats::STATS_FILE_PATTERN.to_string(),
        })?;

        let (steps, columns) = first.shape();
        if columns < Self::REQUIRED_COLUMNS {
            return Err(DenssError::MissingColumns {
                path: first.source.display().to_string(),
                found: columns,
                required: Self::REQUIRED_COLUMNS,
            });
        }

        let mut sources = Vec::with_capacity(tables.len());
        let mut data = Vec::with_capacity(tables.len() * steps * columns);

        for table in tables {
            if table.shape() != (steps, columns) {
                return Err(DenssError::ShapeMismatch {
                    path: table.source.display().to_string(),
                    expected: (steps, columns),
                    found: table.shape(),
                });
            }
            data.extend_from_slice(&table.values);
            sources.push(table.source);
        }

        Ok(Self {
            sources,
            steps,
            columns,
            data,
        })
    }

    /// 运行数
    pub fn runs(&self) -> usize {
        self.sources.len()
    }

    /// 每次运行的步数
    pub fn steps(&self) -> usize {
        self.steps
    }

    /// (runs, steps, columns)
    pub fn shape(&self) -> (usize, usize, usize) {
        (self.runs(), self.steps, self.columns)
    }

    pub fn source(&self, run: usize) -> &Path {
        &self.sources[run]
    }

    pub fn value(&self, run: usize, step: usize, column: usize) -> f64 {
        self.data[(run * self.steps + step) * self.columns + column]
    }

    /// 某次运行某指标的逐步序列
    pub fn series(&self, run: usize, metric: Metric) -> impl Iterator<Item = f64> + '_ {
        let column = metric.column();
        (0..self.steps).map(move |step| self.value(run, step, column))
    }

    /// 某次运行某指标的终值（最后一个非零值）
    pub fn terminal_value(&self, run: usize, metric: Metric) -> Result<f64> {
        let series: Vec<f64> = self.series(run, metric).collect();
        last_nonzero(&series).ok_or_else(|| DenssError::NoTerminalValue {
            path: self.source(run).display().to_string(),
            metric: metric.to_string(),
        })
    }

    /// 计算全部运行的终值及跨运行统计
    pub fn summarize(&self) -> Result<RunSummary> {
        let mut terminal = Vec::with_capacity(self.runs());
        for run in 0..self.runs() {
            let mut row = [0.0; 3];
            for metric in Metric::ALL {
                row[metric.column()] = self.terminal_value(run, metric)?;
            }
            terminal.push(row);
        }

        let stats = Metric::ALL.map(|metric| {
            let values: Vec<f64> = terminal.iter().map(|row| row[metric.column()]).collect();
            MetricStats::from_values(&values)
        });

        Ok(RunSummary { terminal, stats })
    }
}

/// 序列中最后一个非零值
pub fn last_nonzero(series: &[f64]) -> Option<f64> {
    series.iter().rev().copied().find(|&v| v != 0.0)
}

/// 均值与总体标准差
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MetricStats {
    pub mean: f64,
    pub std_dev: f64,
}

impl MetricStats {
    /// 总体方差 (除以 N)；空输入为 NaN
    pub fn from_values(values: &[f64]) -> Self {
        let n = values.len() as f64;
        let mean = values.iter().sum::<f64>() / n;
        let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n;
        Self {
            mean,
            std_dev: variance.sqrt(),
        }
    }
}

/// 汇总结果
#[derive(Debug, Clone, PartialEq)]
pub struct RunSummary {
    /// 每次运行的终值，按 `Metric::column()` 排列
    pub terminal: Vec<[f64; 3]>,
    /// 每个指标的跨运行统计，按 `Metric::column()` 排列
    pub stats: [MetricStats; 3],
}

impl RunSummary {
    pub fn metric(&self, metric: Metric) -> &MetricStats {
        &self.stats[metric.column()]
    }
}
