//! # 运行汇总图表命令实现
//!
//! ## 流程
//! 1. 校验 `--input` (工作目录) / `--output`
//! 2. 发现 `output_*stats_by_step.dat` 文件
//! 3. 加载并按形状校验后堆叠
//! 4. 计算终值与跨运行均值/标准差
//! 5. 打印终值表格
//! 6. 绘制并保存三面板图表
//! 7. 可选导出终值 CSV
//!
//! ## 依赖关系
//! - 使用 `cli/summary.rs` 定义的参数
//! - 使用 `parsers/stats.rs`, `models/run_stats.rs`, `plot/summary.rs`, `export.rs`
//! - 使用 `utils/output.rs`, `utils/progress.rs`

use crate::cli::summary::SummaryArgs;
use crate::error::Result;
use crate::export;
use crate::models::{Metric, RunStack, RunSummary};
use crate::parsers::stats::{discover_stats_files, parse_stats_file};
use crate::plot::summary::generate_summary_plot;
use crate::utils::{output, progress};

use tabled::{Table, Tabled};
use tracing::{debug, info};

/// 终值表格行
#[derive(Debug, Clone, Tabled)]
struct TerminalRow {
    #[tabled(rename = "Run")]
    run: String,
    #[tabled(rename = "File")]
    file: String,
    #[tabled(rename = "χ²")]
    chi2: String,
    #[tabled(rename = "Rg")]
    rg: String,
    #[tabled(rename = "Support Volume")]
    support_volume: String,
}

impl TerminalRow {
    fn new(run: String, file: String, values: [f64; 3]) -> Self {
        Self {
            run,
            file,
            chi2: format!("{:.3}", values[0]),
            rg: format!("{:.3}", values[1]),
            support_volume: format!("{:.3}", values[2]),
        }
    }
}

/// 执行汇总图表生成
pub fn execute(args: &SummaryArgs) -> Result<RunSummary> {
    let (work_dir, output_path) = args.paths()?;

    let files = discover_stats_files(work_dir)?;
    info!(runs = files.len(), "Found statistics files");

    let pb = progress::create_progress_bar(files.len() as u64, "Loading statistics");
    let mut tables = Vec::with_capacity(files.len());
    for file in &files {
        debug!(path = %file.display(), "Loading statistics file");
        tables.push(parse_stats_file(file)?);
        pb.inc(1);
    }
    pb.finish_and_clear();

    let stack = RunStack::from_tables(tables)?;
    let (runs, steps, columns) = stack.shape();
    debug!(runs, steps, columns, "Stacked run statistics");

    let summary = stack.summarize()?;
    for metric in Metric::ALL {
        let stats = summary.metric(metric);
        debug!(%metric, mean = stats.mean, std_dev = stats.std_dev, "Terminal value statistics");
    }

    print_summary_table(&stack, &summary);

    info!("Plotting summary chart");
    generate_summary_plot(&stack, &summary, output_path, (args.width, args.height))?;
    output::print_success(&format!("Summary chart saved to '{}'", output_path.display()));

    // 图表成功后才导出，失败的运行不留下任何文件
    if let Some(csv_path) = &args.csv {
        export::terminal_values_to_csv(&stack, &summary, csv_path)?;
        output::print_success(&format!("Terminal values saved to '{}'", csv_path.display()));
    }

    Ok(summary)
}

/// 打印每次运行的终值与统计行
fn print_summary_table(stack: &RunStack, summary: &RunSummary) {
    let mut rows: Vec<TerminalRow> = summary
        .terminal
        .iter()
        .enumerate()
        .map(|(run, values)| {
            let file = stack
                .source(run)
                .file_name()
                .map(|n| n.to_string_lossy().to_string())
                .unwrap_or_default();
            TerminalRow::new((run + 1).to_string(), file, *values)
        })
        .collect();

    let means = Metric::ALL.map(|m| summary.metric(m).mean);
    let stds = Metric::ALL.map(|m| summary.metric(m).std_dev);
    rows.push(TerminalRow::new("Average".to_string(), String::new(), means));
    rows.push(TerminalRow::new("σ".to_string(), String::new(), stds));

    output::print_header(&format!("Terminal Values ({} runs)", stack.runs()));
    println!("{}", Table::new(&rows));
}
