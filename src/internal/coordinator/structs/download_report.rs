use std::path::PathBuf;
use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::internal::config::structs::WriteStrategy;
use crate::internal::task::structs::{Chunk, ChunkStatus};

use super::task_failure::TaskFailure;

/// 一次下载的汇总结果，在所有 worker join 之后生成。
#[derive(Debug, Clone, Serialize)]
pub struct DownloadReport {
    pub url: String,
    pub output: PathBuf,
    /// 文件总大小（字节）
    pub total_size: u64,
    /// 配置中请求的 worker 数
    pub requested_workers: usize,
    /// 实际分片数（文件小于 worker 数时会更少）
    pub worker_count: usize,
    pub write_strategy: WriteStrategy,
    /// 第一个 worker 启动前的时刻
    pub started_at: DateTime<Utc>,
    /// 从启动 worker 到全部 join 的耗时
    pub total_elapsed: Duration,
    /// 按区间起点升序排列的分片记录
    pub chunks: Vec<Chunk>,
}

impl DownloadReport {
    /// 所有分片都成功才算成功
    pub fn is_success(&self) -> bool {
        self.chunks
            .iter()
            .all(|c| c.status() == ChunkStatus::Succeeded)
    }

    pub fn failed_chunk_ids(&self) -> Vec<usize> {
        self.chunks
            .iter()
            .filter(|c| c.status() == ChunkStatus::Failed)
            .map(Chunk::id)
            .collect()
    }

    /// 各分片最近一次尝试写入的字节数之和
    pub fn bytes_written(&self) -> u64 {
        self.chunks.iter().map(Chunk::bytes_written).sum()
    }

    /// 平均吞吐（字节/秒）；耗时为 0 时返回 `None`。
    pub fn throughput(&self) -> Option<f64> {
        let secs = self.total_elapsed.as_secs_f64();
        (secs > 0.0).then(|| self.total_size as f64 / secs)
    }

    /// 分片开始时刻相对任务开始的偏移
    pub fn chunk_start_offset(&self, chunk: &Chunk) -> Option<Duration> {
        chunk
            .started_at()
            .and_then(|t| (t - self.started_at).to_std().ok())
    }

    /// 分片结束时刻相对任务开始的偏移
    pub fn chunk_end_offset(&self, chunk: &Chunk) -> Option<Duration> {
        chunk
            .finished_at()
            .and_then(|t| (t - self.started_at).to_std().ok())
    }

    /// 汇总任务结果：任一分片失败即为 [`TaskFailure`]，报告随错误一并返回。
    pub fn into_result(self) -> Result<Self, TaskFailure> {
        if self.is_success() {
            return Ok(self);
        }
        Err(TaskFailure {
            failed: self.failed_chunk_ids(),
            report: Box::new(self),
        })
    }
}
