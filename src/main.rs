//! chunked_fetch 命令行入口：解析参数，交给协调器下载，最后输出汇总表。

use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::Duration;

use clap::{Parser, ValueEnum};
use percent_encoding::percent_decode_str;
use tracing::{error, info};
use url::Url;

use chunked_fetch::config::{DownloaderConfig, RetryPolicy, WriteStrategy};
use chunked_fetch::config::downloader_config::MAX_WORKERS;
use chunked_fetch::coordinator::{Coordinator, DownloadError, DownloadReport};
use chunked_fetch::report::log_summary;

/// 多线程分片 HTTP 下载器
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// 要下载的文件 URL（http/https）
    #[arg(short, long)]
    url: String,

    /// 输出路径；默认取 URL 中的文件名，放到系统下载目录
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// 并发分片数
    #[arg(short, long, default_value_t = 4, value_parser = clap::value_parser!(u8).range(1..=MAX_WORKERS as i64))]
    threads: u8,

    /// 每个分片的最大尝试次数
    #[arg(long, default_value_t = 3)]
    retries: usize,

    /// 退避步长（毫秒），第 k 次失败后等待 k 个步长
    #[arg(long, default_value_t = 1000)]
    backoff_ms: u64,

    /// 写入输出文件的方式
    #[arg(long, value_enum, default_value_t = StrategyArg::Shared)]
    write_strategy: StrategyArg,

    /// 把下载报告以 JSON 写到该路径
    #[arg(long)]
    report_json: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum StrategyArg {
    /// 所有分片共用一个加锁的文件句柄
    Shared,
    /// 每个分片各自打开文件
    PerChunk,
}

impl From<StrategyArg> for WriteStrategy {
    fn from(arg: StrategyArg) -> Self {
        match arg {
            StrategyArg::Shared => WriteStrategy::SharedHandle,
            StrategyArg::PerChunk => WriteStrategy::PerChunkHandle,
        }
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    init_tracing();
    let args = Args::parse();

    let output = match args.output.clone() {
        Some(path) => path,
        None => match default_output_path(&args.url) {
            Some(path) => path,
            None => {
                error!(url = %args.url, "无法从 URL 推断文件名，请用 --output 指定");
                return ExitCode::FAILURE;
            }
        },
    };

    let config = DownloaderConfig::default()
        .workers(usize::from(args.threads))
        .retry(RetryPolicy::new(
            args.retries,
            Duration::from_millis(args.backoff_ms),
        ))
        .write_strategy(args.write_strategy.into());

    let coordinator = match Coordinator::new(config) {
        Ok(c) => c,
        Err(e) => {
            error!(error = %e, "初始化失败");
            return ExitCode::FAILURE;
        }
    };

    let mut watcher = coordinator.progress().watch();
    let progress_task = tokio::spawn(async move {
        let mut last_decile = 0u64;
        while let Ok(p) = watcher.changed().await {
            let pct = p.pct();
            if !pct.is_finite() {
                continue;
            }
            let decile = (pct / 10.0) as u64;
            if decile > last_decile {
                last_decile = decile;
                info!(
                    bytes = p.bytes_done,
                    total = p.total,
                    chunks_done = p.chunks_done,
                    "进度 {:.0}%",
                    pct
                );
            }
        }
    });

    info!(url = %args.url, output = %output.display(), "开始下载");
    let result = coordinator.download(&args.url, &output).await;
    progress_task.abort();

    let report = match &result {
        Ok(report) => Some(report),
        Err(e) => e.report(),
    };
    if let Some(report) = report {
        log_summary(report);
        if let Some(path) = &args.report_json {
            write_report_json(report, path).await;
        }
    }

    match result {
        Ok(_) => {
            info!(output = %output.display(), "下载完成");
            ExitCode::SUCCESS
        }
        Err(e) => {
            report_error(&e);
            ExitCode::FAILURE
        }
    }
}

fn init_tracing() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .compact()
        .init();
}

/// URL 路径最后一段（百分号解码后）作为文件名，放到下载目录，没有下载目录时放当前目录。
fn default_output_path(url: &str) -> Option<PathBuf> {
    let parsed = Url::parse(url).ok()?;
    let last = parsed.path_segments()?.next_back()?;
    let decoded = percent_decode_str(last).decode_utf8().ok()?;
    let name = Path::new(&*decoded).file_name()?.to_owned();

    let dir = dirs::download_dir().unwrap_or_else(|| PathBuf::from("."));
    Some(dir.join(name))
}

async fn write_report_json(report: &DownloadReport, path: &Path) {
    let json = match serde_json::to_vec_pretty(report) {
        Ok(json) => json,
        Err(e) => {
            error!(error = %e, "序列化下载报告失败");
            return;
        }
    };
    if let Err(e) = tokio::fs::write(path, json).await {
        error!(path = %path.display(), error = %e, "写入下载报告失败");
    }
}

fn report_error(e: &DownloadError) {
    match e {
        DownloadError::Failed(failure) => {
            error!(failed = ?failure.failed, "下载失败，部分分片重试后仍未完成");
        }
        other => error!(error = %other, "下载失败"),
    }
}
