use std::time::Duration;

use super::retry_policy::RetryPolicy;
use super::write_strategy::WriteStrategy;

/// 并发 worker 数的硬上限
pub const MAX_WORKERS: usize = 16;

/// 默认 worker 数
pub const DEFAULT_WORKERS: usize = 4;

/// 默认连接超时（秒）
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 30;

/// 探测文件大小的总超时（秒）
pub const DEFAULT_PROBE_TIMEOUT_SECS: u64 = 60;

/// 单次分片请求的总超时（秒）
pub const DEFAULT_CHUNK_TIMEOUT_SECS: u64 = 120;

/// 最多跟随的重定向次数
pub const DEFAULT_MAX_REDIRECTS: usize = 10;

/// 一次下载任务的全部可调参数。
///
/// 默认值与命令行默认值一致；通过链式方法覆盖，例如：
///
/// ```rust,no_run
/// use std::time::Duration;
/// use chunked_fetch::config::{DownloaderConfig, RetryPolicy};
///
/// let config = DownloaderConfig::default()
///     .workers(8)
///     .retry(RetryPolicy::new(5, Duration::from_millis(500)));
/// ```
#[derive(Debug, Clone)]
pub struct DownloaderConfig {
    /// 期望的并发分片数（1..=16，由 `DownloadTask` 校验）
    pub workers: usize,
    /// 分片失败重试策略
    pub retry: RetryPolicy,
    /// 建立连接的超时
    pub connect_timeout: Duration,
    /// HEAD 探测请求的总超时
    pub probe_timeout: Duration,
    /// 每次分片尝试的总超时（不跨重试累计）
    pub chunk_timeout: Duration,
    /// 重定向跟随上限
    pub max_redirects: usize,
    /// 分片写入本地文件的方式
    pub write_strategy: WriteStrategy,
}

impl Default for DownloaderConfig {
    fn default() -> Self {
        Self {
            workers: DEFAULT_WORKERS,
            retry: RetryPolicy::default(),
            connect_timeout: Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS),
            probe_timeout: Duration::from_secs(DEFAULT_PROBE_TIMEOUT_SECS),
            chunk_timeout: Duration::from_secs(DEFAULT_CHUNK_TIMEOUT_SECS),
            max_redirects: DEFAULT_MAX_REDIRECTS,
            write_strategy: WriteStrategy::default(),
        }
    }
}

impl DownloaderConfig {
    /// 设置并发分片数
    pub fn workers(mut self, workers: usize) -> Self {
        self.workers = workers;
        self
    }

    /// 设置重试策略
    pub fn retry(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    /// 设置连接超时
    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }

    /// 设置探测请求超时
    pub fn probe_timeout(mut self, timeout: Duration) -> Self {
        self.probe_timeout = timeout;
        self
    }

    /// 设置单次分片请求超时
    pub fn chunk_timeout(mut self, timeout: Duration) -> Self {
        self.chunk_timeout = timeout;
        self
    }

    pub fn max_redirects(mut self, max_redirects: usize) -> Self {
        self.max_redirects = max_redirects;
        self
    }

    /// 设置写入策略
    pub fn write_strategy(mut self, strategy: WriteStrategy) -> Self {
        self.write_strategy = strategy;
        self
    }
}
