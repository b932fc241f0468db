//! 两个可执行文件的端到端测试：退出状态、图表与 CSV 输出

use std::fs;
use std::path::Path;
use std::process::{Command, Output};

fn fsc_chart(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_denssweb-fsc-chart"))
        .args(args)
        .output()
        .expect("failed to run denssweb-fsc-chart")
}

fn summary_chart(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_denssweb-summary-chart"))
        .args(args)
        .output()
        .expect("failed to run denssweb-summary-chart")
}

fn path_str(p: &Path) -> &str {
    p.to_str().expect("temp path is UTF-8")
}

#[test]
fn test_fsc_missing_output_exits_1() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("does-not-exist.txt");

    let out = fsc_chart(&["--input", path_str(&input)]);
    assert_eq!(out.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("Please specify both an input and output file"));
}

#[test]
fn test_fsc_missing_input_exits_1_without_io() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("fsc.png");

    let out = fsc_chart(&["-o", path_str(&output)]);
    assert_eq!(out.status.code(), Some(1));
    assert!(!output.exists());
}

#[test]
fn test_fsc_malformed_input_exits_1_without_output() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("fsc_0.txt");
    let output = dir.path().join("fsc.png");
    fs::write(&input, "0.01 0.99\n0.02 0.80 0.1\n").unwrap();

    let out = fsc_chart(&["-i", path_str(&input), "-o", path_str(&output)]);
    assert_eq!(out.status.code(), Some(1));
    assert!(!output.exists());
    assert!(String::from_utf8_lossy(&out.stderr).contains("line 2"));
}

#[test]
fn test_summary_missing_arguments_exit_1() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("summary.png");

    let out = summary_chart(&["--output", path_str(&output)]);
    assert_eq!(out.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&out.stderr).contains("work directory and output file"));
    assert!(!output.exists());

    let out = summary_chart(&["--input", path_str(dir.path())]);
    assert_eq!(out.status.code(), Some(1));
}

#[test]
fn test_summary_no_matching_files_exits_1_without_output() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("output_1_fsc.dat"), "1 2\n").unwrap();
    let output = dir.path().join("summary.png");

    let out = summary_chart(&["-i", path_str(dir.path()), "-o", path_str(&output)]);
    assert_eq!(out.status.code(), Some(1));
    assert!(!output.exists());
    assert!(String::from_utf8_lossy(&out.stderr).contains("No matching files found"));
}

#[test]
fn test_summary_missing_directory_exits_1() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("denss-1");
    let output = dir.path().join("summary.png");

    let out = summary_chart(&["-i", path_str(&missing), "-o", path_str(&output)]);
    assert_eq!(out.status.code(), Some(1));
    assert!(!output.exists());
}

fn assert_chart_written(path: &Path) {
    let meta = fs::metadata(path).expect("chart written");
    assert!(meta.len() > 0);
}

#[test]
fn test_fsc_empty_input_renders_chart() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("fsc_0.txt");
    let output = dir.path().join("fsc.png");
    fs::write(&input, "").unwrap();

    let out = fsc_chart(&["-i", path_str(&input), "-o", path_str(&output)]);
    assert_eq!(out.status.code(), Some(0));
    assert_chart_written(&output);
}

#[test]
fn test_fsc_all_zero_input_renders_chart() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("fsc_0.txt");
    let output = dir.path().join("fsc.png");
    fs::write(&input, "0 0\n0 0\n").unwrap();

    let out = fsc_chart(&["-i", path_str(&input), "-o", path_str(&output)]);
    assert_eq!(out.status.code(), Some(0));
    assert_chart_written(&output);
    assert!(String::from_utf8_lossy(&out.stdout).contains("0.000"));
}

#[test]
fn test_fsc_reports_resolution() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("fsc_0.txt");
    let output = dir.path().join("fsc.svg");
    fs::write(&input, "0.01 0.9\n0.02 0.6\n0.03 0.5\n0.04 0.3\n").unwrap();

    let out = fsc_chart(&["-i", path_str(&input), "-o", path_str(&output)]);
    assert_eq!(out.status.code(), Some(0));
    assert_chart_written(&output);
    assert!(String::from_utf8_lossy(&out.stdout).contains("50.000"));
    // 只留下输入和图表
    assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 2);
}

#[test]
fn test_summary_two_runs_writes_chart_and_csv() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("output_1_stats_by_step.dat"),
        "5 28 150\n2 30 100\n0 0 0\n",
    )
    .unwrap();
    fs::write(
        dir.path().join("output_2_stats_by_step.dat"),
        "6 29 350\n4 32 300\n0 0 0\n",
    )
    .unwrap();
    let output = dir.path().join("summary.png");
    let csv = dir.path().join("terminal.csv");

    let out = summary_chart(&[
        "-i",
        path_str(dir.path()),
        "-o",
        path_str(&output),
        "--csv",
        path_str(&csv),
    ]);
    assert_eq!(out.status.code(), Some(0));
    assert_chart_written(&output);

    let content = fs::read_to_string(&csv).unwrap();
    assert_eq!(
        content.lines().collect::<Vec<_>>(),
        vec![
            "run,file,chi2,rg,support_volume",
            "1,output_1_stats_by_step.dat,2,30,100",
            "2,output_2_stats_by_step.dat,4,32,300",
            "mean,,3,31,200",
            "std,,1,1,100",
        ]
    );
}

#[test]
fn test_summary_single_run_has_zero_std() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("output_1_stats_by_step.dat"),
        "5 28 150\n2 30 100\n",
    )
    .unwrap();
    let output = dir.path().join("summary.png");
    let csv = dir.path().join("terminal.csv");

    let out = summary_chart(&[
        "-i",
        path_str(dir.path()),
        "-o",
        path_str(&output),
        "--csv",
        path_str(&csv),
    ]);
    assert_eq!(out.status.code(), Some(0));
    assert_chart_written(&output);

    let content = fs::read_to_string(&csv).unwrap();
    assert_eq!(content.lines().last(), Some("std,,0,0,0"));
}
