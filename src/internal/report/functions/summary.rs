//! 下载结束后的汇总表。

use std::fmt::Write;
use std::time::Duration;

use tracing::info;

use crate::internal::coordinator::structs::DownloadReport;
use crate::internal::task::structs::ChunkStatus;

const MIB: f64 = 1024.0 * 1024.0;
const RULE: &str = "========================================";
const THIN_RULE: &str = "----------------------------------------------------";

/// 渲染汇总表：文件大小、线程数、总耗时、吞吐，以及每个分片相对任务开始的起止时间与数据量。
pub fn render_summary(report: &DownloadReport) -> String {
    let mut out = String::new();
    let total_secs = report.total_elapsed.as_secs_f64();
    let speed = report
        .throughput()
        .map(|bps| format!("{:.2} MB/s", bps / MIB))
        .unwrap_or_else(|| "-".to_string());

    let _ = writeln!(out, "{}", RULE);
    let _ = writeln!(out, "        下载汇总");
    let _ = writeln!(out, "{}", RULE);
    let _ = writeln!(out, "文件: {}", report.output.display());
    let _ = writeln!(out, "大小: {:.2} MB", report.total_size as f64 / MIB);
    let _ = writeln!(
        out,
        "线程: {} (请求 {})",
        report.worker_count, report.requested_workers
    );
    let _ = writeln!(out, "总耗时: {:.2} s", total_secs);
    let _ = writeln!(out, "速度: {}", speed);
    let _ = writeln!(out, "{}", RULE);
    let _ = writeln!(out);
    let _ = writeln!(out, "分片  | 开始    | 结束    | 耗时     | 数据       | 状态");
    let _ = writeln!(out, "{}", THIN_RULE);

    for chunk in &report.chunks {
        let start = report.chunk_start_offset(chunk);
        let end = report.chunk_end_offset(chunk);
        let duration = match (start, end) {
            (Some(s), Some(e)) => e.checked_sub(s),
            _ => None,
        };
        let _ = writeln!(
            out,
            " {:>3}  | {} | {} | {}  | {:>7.2} MB | {}",
            chunk.id(),
            secs_cell(start),
            secs_cell(end),
            secs_cell(duration),
            chunk.bytes_written() as f64 / MIB,
            status_label(chunk.status()),
        );
    }
    let _ = writeln!(out, "{}", THIN_RULE);
    out
}

/// 通过 tracing 逐行输出汇总表
pub fn log_summary(report: &DownloadReport) {
    for line in render_summary(report).lines() {
        info!("{}", line);
    }
}

fn secs_cell(d: Option<Duration>) -> String {
    match d {
        Some(d) => format!("{:>6.2}s", d.as_secs_f64()),
        None => format!("{:>7}", "-"),
    }
}

fn status_label(status: ChunkStatus) -> &'static str {
    match status {
        ChunkStatus::Pending => "等待",
        ChunkStatus::Downloading => "下载中",
        ChunkStatus::Succeeded => "成功",
        ChunkStatus::Failed => "失败",
    }
}
