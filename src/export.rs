//! # 终值数据导出
//!
//! 将每次运行的终值及跨运行均值/标准差导出为 CSV。
//!
//! ## 格式
//! ```text
//! run,file,chi2,rg,support_volume
//! 1,output_1_stats_by_step.dat,1.2e-1,31.52,120000
//! ...
//! mean,,...
//! std,,...
//! ```
//!
//! ## 依赖关系
//! - 被 `commands/summary.rs` 调用
//! - 使用 `csv` 库写入 CSV 文件

use crate::error::{DenssError, Result};
use crate::models::{Metric, RunStack, RunSummary};

use std::path::Path;

/// 写出终值 CSV
pub fn terminal_values_to_csv(
    stack: &RunStack,
    summary: &RunSummary,
    output_path: &Path,
) -> Result<()> {
    let mut wtr = csv::Writer::from_path(output_path)?;

    wtr.write_record(["run", "file", "chi2", "rg", "support_volume"])?;

    for (run, values) in summary.terminal.iter().enumerate() {
        let file = stack
            .source(run)
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();
        let mut record = vec![(run + 1).to_string(), file];
        record.extend(values.iter().map(|v| v.to_string()));
        wtr.write_record(&record)?;
    }

    let means = Metric::ALL.map(|m| summary.metric(m).mean.to_string());
    let stds = Metric::ALL.map(|m| summary.metric(m).std_dev.to_string());
    for (label, row) in [("mean", &means), ("std", &stds)] {
        wtr.write_record([label, "", row[0].as_str(), row[1].as_str(), row[2].as_str()])?;
    }

    wtr.flush().map_err(|e| DenssError::FileWriteError {
        path: output_path.display().to_string(),
        source: e,
    })?;

    Ok(())
}
