//! 下载协调器
//!
//! ## 流程
//!
//! 1. [`SizeProbe`] 用 HEAD 请求拿到文件总大小，失败则直接返回，不启动任何分片
//! 2. 预分配输出文件，按写入策略打开 [`OutputFile`]
//! 3. [`partition`] 划分区间，每个分片 spawn 一个 worker，worker 驱动 [`ChunkDownloader`]
//! 4. 等待全部 worker 结束（join 屏障），之后才汇总成功与否
//!
//! ## 并发约定
//!
//! - worker 数量固定等于分片数（≤ 16），不复用、不动态扩缩
//! - 分片记录由所属 worker 独占，结束后随 join 结果交回协调器
//! - 一个分片失败不会取消其他分片；没有任务级截止时间
//! - 分片之间唯一共享的可变资源是输出文件句柄

use std::path::Path;
use std::sync::Arc;
use std::time::Instant;

use chrono::Utc;
use futures_util::future::join_all;
use reqwest::Client;
use tokio::task::JoinError;
use tracing::{error, info, warn};

use crate::internal::config::structs::DownloaderConfig;
use crate::internal::downloader::structs::{ChunkDownloader, DownloadProgress, ProgressTracker};
use crate::internal::http::functions::build_client::build_client;
use crate::internal::local_file::functions::{allocate_file, verify_file_size};
use crate::internal::probe::structs::SizeProbe;
use crate::internal::states::unlock_reactive::UnlockReactiveProperty;
use crate::internal::task::functions::partition::partition;
use crate::internal::task::structs::{ByteRange, Chunk, ChunkStatus, DownloadTask};
use crate::internal::writer::structs::OutputFile;

use super::download_error::DownloadError;
use super::download_report::DownloadReport;

#[derive(Debug)]
pub struct Coordinator {
    client: Client,
    config: DownloaderConfig,
    progress_state: UnlockReactiveProperty<DownloadProgress>,
}

impl Coordinator {
    /// 按配置构建 HTTP 客户端并创建协调器。
    pub fn new(config: DownloaderConfig) -> Result<Self, DownloadError> {
        let client = build_client(&config).map_err(DownloadError::Client)?;
        Ok(Self::with_client(client, config))
    }

    /// 使用调用方提供的客户端；连接超时与重定向策略以该客户端为准。
    pub fn with_client(client: Client, config: DownloaderConfig) -> Self {
        Self {
            client,
            config,
            progress_state: UnlockReactiveProperty::new(DownloadProgress::default()),
        }
    }

    pub fn config(&self) -> &DownloaderConfig {
        &self.config
    }

    /// 内置的下载进度状态；返回可共享句柄，`.watch()` 后 `changed().await` 监听进度。
    pub fn progress(&self) -> UnlockReactiveProperty<DownloadProgress> {
        self.progress_state.clone()
    }

    /// 完整下载流程：探测 → 预分配 → 并发下载 → 校验大小。
    ///
    /// 有分片失败时返回 [`DownloadError::Failed`]，其中带有完整报告。
    pub async fn download(
        &self,
        url: &str,
        output_path: impl AsRef<Path>,
    ) -> Result<DownloadReport, DownloadError> {
        let output_path = output_path.as_ref();

        let task = self.prepare(url).await?;
        allocate_file(output_path, task.total_size()).await?;

        let output = Arc::new(OutputFile::open(output_path, self.config.write_strategy).await?);
        let report = self.run(&task, output).await.into_result()?;

        verify_file_size(output_path, task.total_size()).await?;
        Ok(report)
    }

    /// 校验参数并探测文件大小，得到不可变的下载任务。
    ///
    /// URL 与 worker 数在发出任何请求之前校验。
    pub async fn prepare(&self, url: &str) -> Result<DownloadTask, DownloadError> {
        let parsed = DownloadTask::parse_url(url)?;
        DownloadTask::check_worker_count(self.config.workers)?;

        let probe = SizeProbe::new(self.client.clone(), self.config.probe_timeout);
        let total_size = probe.get_size(&parsed).await?;
        info!(url = %parsed, total_size, "获取到文件大小");

        Ok(DownloadTask::new(url, total_size, self.config.workers)?)
    }

    /// 每个分片一个 worker 并发下载，等待全部结束后返回报告。
    ///
    /// 输出文件必须已预分配到 `task.total_size()`。返回时所有 worker 都已结束，
    /// 每个分片都处于终态。
    pub async fn run(&self, task: &DownloadTask, output: Arc<OutputFile>) -> DownloadReport {
        let ranges = partition(task.total_size(), task.worker_count());
        let progress = ProgressTracker::with_property(
            self.progress_state.clone(),
            task.total_size(),
            ranges.len(),
        );
        let downloader = Arc::new(ChunkDownloader::new(
            self.client.clone(),
            task.url().clone(),
            self.config.retry,
            self.config.chunk_timeout,
        ));

        info!(
            workers = ranges.len(),
            total_size = task.total_size(),
            strategy = ?output.strategy(),
            "开始并发下载"
        );

        let started_at = Utc::now();
        let clock = Instant::now();

        let handles: Vec<_> = ranges
            .iter()
            .enumerate()
            .map(|(id, range)| {
                tokio::spawn(run_worker(
                    Chunk::new(id, *range),
                    Arc::clone(&downloader),
                    Arc::clone(&output),
                    progress.clone(),
                ))
            })
            .collect();

        // join 屏障：所有 worker 结束之前不继续
        let results = join_all(handles).await;
        let total_elapsed = clock.elapsed();

        let chunks: Vec<Chunk> = results
            .into_iter()
            .zip(ranges.iter())
            .enumerate()
            .map(|(id, (result, range))| match result {
                Ok(chunk) => chunk,
                Err(join_err) => {
                    error!(chunk = id, error = %join_err, "worker 异常退出");
                    progress.chunk_finished();
                    failed_chunk(id, *range, &join_err)
                }
            })
            .collect();
        progress.publish();

        let report = DownloadReport {
            url: task.url().to_string(),
            output: output.path().to_path_buf(),
            total_size: task.total_size(),
            requested_workers: task.worker_count(),
            worker_count: chunks.len(),
            write_strategy: output.strategy(),
            started_at,
            total_elapsed,
            chunks,
        };

        if report.is_success() {
            info!(elapsed_ms = total_elapsed.as_millis() as u64, "所有分片下载完成");
        } else {
            warn!(failed = ?report.failed_chunk_ids(), "部分分片下载失败");
        }
        report
    }
}

/// worker 没能交回分片记录（panic 或被取消）时，按划分区间补一条失败记录。
pub(crate) fn failed_chunk(id: usize, range: ByteRange, join_err: &JoinError) -> Chunk {
    let mut chunk = Chunk::new(id, range);
    chunk.record_error(format!("worker 异常退出: {}", join_err));
    chunk.finish(ChunkStatus::Failed);
    chunk
}

/// 单个 worker：记录开始时间 → 下载 → 记录结束时间与终态，最后交回分片记录。
async fn run_worker(
    mut chunk: Chunk,
    downloader: Arc<ChunkDownloader>,
    output: Arc<OutputFile>,
    progress: ProgressTracker,
) -> Chunk {
    chunk.mark_downloading();
    info!(
        chunk = chunk.id(),
        start = chunk.start_byte(),
        end = chunk.end_byte(),
        size = chunk.size(),
        "分片开始下载"
    );

    let status = match output.sink_for_chunk().await {
        Ok(sink) => downloader.fetch(&mut chunk, sink.as_ref(), &progress).await,
        Err(e) => {
            error!(chunk = chunk.id(), error = %e, "分片无法打开输出文件");
            chunk.record_error(e.to_string());
            ChunkStatus::Failed
        }
    };

    chunk.finish(status);
    progress.chunk_finished();

    let elapsed_ms = chunk.elapsed().map(|d| d.as_millis() as u64).unwrap_or(0);
    match status {
        ChunkStatus::Succeeded => info!(
            chunk = chunk.id(),
            bytes = chunk.bytes_written(),
            elapsed_ms,
            "分片结束"
        ),
        _ => warn!(
            chunk = chunk.id(),
            bytes = chunk.bytes_written(),
            attempts = chunk.attempts(),
            elapsed_ms,
            "分片失败"
        ),
    }

    chunk
}
