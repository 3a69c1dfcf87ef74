//! 单个分片的下载器
//!
//! 每次尝试都对完整区间 `[start, end]` 发起 Range GET，收到的每一块数据按到达顺序
//! 写到 `start + 本次尝试已写入字节数` 处。写入偏移由下载器自己维护，不依赖连接状态。
//!
//! ## 重试
//!
//! - 最多尝试 [`RetryPolicy::limit`] 次（默认 3）
//! - 第 k 次失败后等待 `k * backoff_step`（默认 1s、2s）再试
//! - 次数用尽后分片记为 `Failed`，已写入的部分保留在文件中，不回滚
//! - 本次尝试没有完整收到区间内所有字节，也算失败

use std::time::Duration;

use futures_util::StreamExt;
use reqwest::header::RANGE;
use reqwest::{Client, StatusCode};
use tracing::{debug, error, warn};
use url::Url;

use crate::internal::config::structs::{RetryPolicy, RetryState};
use crate::internal::task::structs::{ByteRange, Chunk, ChunkStatus};
use crate::internal::writer::traits::chunk_sink::ChunkSink;

use super::attempt_error::AttemptError;
use super::network_error::NetworkError;
use super::progress_tracker::ProgressTracker;

#[derive(Debug, Clone)]
pub struct ChunkDownloader {
    client: Client,
    url: Url,
    retry: RetryPolicy,
    timeout: Duration,
}

impl ChunkDownloader {
    /// `timeout` 为单次尝试的总超时，不跨重试累计。
    pub fn new(client: Client, url: Url, retry: RetryPolicy, timeout: Duration) -> Self {
        Self {
            client,
            url,
            retry,
            timeout,
        }
    }

    /// 下载分片区间并写入 `sink`，返回终态（`Succeeded` 或 `Failed`）。
    ///
    /// 只更新分片的写入字节数、尝试次数、退避时长与最近错误；状态转换由调用方负责。
    pub async fn fetch(
        &self,
        chunk: &mut Chunk,
        sink: &dyn ChunkSink,
        progress: &ProgressTracker,
    ) -> ChunkStatus {
        let mut retry = RetryState::new(&self.retry);

        while let Some(attempt) = retry.begin_attempt() {
            progress.retract(chunk.bytes_written());
            chunk.begin_attempt(attempt);

            let err = match self.fetch_once(chunk, sink, progress).await {
                Ok(()) => {
                    debug!(chunk = chunk.id(), attempt, "分片下载完成");
                    return ChunkStatus::Succeeded;
                }
                Err(e) => e,
            };
            chunk.record_error(err.to_string());

            if retry.is_exhausted() {
                error!(
                    chunk = chunk.id(),
                    attempts = attempt,
                    error = %err,
                    "分片下载失败，重试次数已用尽"
                );
                break;
            }

            let delay = self.retry.backoff_for(attempt);
            warn!(
                chunk = chunk.id(),
                attempt,
                limit = retry.limit(),
                delay_ms = delay.as_millis() as u64,
                error = %err,
                "分片下载失败，等待后重试"
            );
            tokio::time::sleep(delay).await;
            chunk.record_backoff(delay);
        }

        ChunkStatus::Failed
    }

    /// 单次尝试：请求、校验状态码、流式写入并核对字节数。
    async fn fetch_once(
        &self,
        chunk: &mut Chunk,
        sink: &dyn ChunkSink,
        progress: &ProgressTracker,
    ) -> Result<(), AttemptError> {
        let range = chunk.range();
        let resp = self
            .client
            .get(self.url.clone())
            .header(RANGE, range.header_value())
            .timeout(self.timeout)
            .send()
            .await
            .map_err(NetworkError::from)?;

        check_range_status(resp.status(), range)?;

        let expected = range.len();
        let mut stream = resp.bytes_stream();

        while let Some(chunk_result) = stream.next().await {
            let data = chunk_result.map_err(NetworkError::from)?;
            if data.is_empty() {
                continue;
            }

            let received = chunk.bytes_written() + data.len() as u64;
            if received > expected {
                return Err(NetworkError::Overflow { expected, received }.into());
            }

            let offset = range.start + chunk.bytes_written();
            let written = sink.write_at(offset, &data).await? as u64;
            chunk.record_written(written);
            progress.add(written);
        }

        if chunk.bytes_written() != expected {
            return Err(NetworkError::Incomplete {
                expected,
                received: chunk.bytes_written(),
            }
            .into());
        }

        Ok(())
    }
}

/// 206 总是接受；200 只在区间从 0 开始时接受（服务器忽略 Range 时，超出部分由字节数校验兜底）。
fn check_range_status(status: StatusCode, range: ByteRange) -> Result<(), NetworkError> {
    match status {
        StatusCode::PARTIAL_CONTENT => Ok(()),
        StatusCode::OK if range.start == 0 => Ok(()),
        StatusCode::OK => Err(NetworkError::RangeIgnored { start: range.start }),
        other => Err(NetworkError::Status(other)),
    }
}
