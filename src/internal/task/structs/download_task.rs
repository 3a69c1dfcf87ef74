use url::Url;

use crate::internal::config::structs::downloader_config::MAX_WORKERS;

use super::task_error::TaskError;

/// 下载任务：一次下载的不可变输入，只能通过 [`DownloadTask::new`] 校验后创建。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadTask {
    url: Url,
    total_size: u64,
    worker_count: usize,
}

impl DownloadTask {
    /// 校验并创建任务：URL 必须为 http/https，`total_size > 0`，`1 <= worker_count <= 16`。
    pub fn new(
        url: &str,
        total_size: u64,
        worker_count: usize,
    ) -> Result<Self, TaskError> {
        let url = Self::parse_url(url)?;
        Self::check_worker_count(worker_count)?;
        if total_size == 0 {
            return Err(TaskError::EmptyFile);
        }

        Ok(Self {
            url,
            total_size,
            worker_count,
        })
    }

    /// 解析 URL，只接受 http/https。
    pub fn parse_url(url: &str) -> Result<Url, TaskError> {
        let url = Url::parse(url)?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(TaskError::UnsupportedScheme(url.scheme().to_string()));
        }
        Ok(url)
    }

    /// 校验 worker 数在 `1..=16` 之内。
    pub fn check_worker_count(worker_count: usize) -> Result<(), TaskError> {
        if worker_count == 0 || worker_count > MAX_WORKERS {
            return Err(TaskError::WorkerCount {
                actual: worker_count,
                max: MAX_WORKERS,
            });
        }
        Ok(())
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    pub fn total_size(&self) -> u64 {
        self.total_size
    }

    /// 请求的 worker 数；实际分片数见 [`crate::task::partition`]。
    pub fn worker_count(&self) -> usize {
        self.worker_count
    }
}
