use std::time::Duration;

/// 默认最大尝试次数（含首次）
pub const DEFAULT_RETRY_LIMIT: usize = 3;

/// 默认退避步长（毫秒）；第 k 次失败后等待 k 个步长
pub const DEFAULT_BACKOFF_STEP_MS: u64 = 1000;

/// 分片重试策略：最多尝试 `limit` 次，第 k 次失败后线性退避 `k * backoff_step`。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    limit: usize,
    backoff_step: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::new(
            DEFAULT_RETRY_LIMIT,
            Duration::from_millis(DEFAULT_BACKOFF_STEP_MS),
        )
    }
}

impl RetryPolicy {
    /// `limit` 小于 1 时按 1 处理，保证至少发起一次请求。
    pub fn new(limit: usize, backoff_step: Duration) -> Self {
        Self {
            limit: limit.max(1),
            backoff_step,
        }
    }

    /// 最大尝试次数
    pub fn limit(&self) -> usize {
        self.limit
    }

    /// 第 `attempt` 次（从 1 开始）失败后、下一次尝试前的等待时长。
    pub fn backoff_for(&self, attempt: usize) -> Duration {
        self.backoff_step
            .saturating_mul(u32::try_from(attempt).unwrap_or(u32::MAX))
    }
}

/// 单个分片下载期间的重试计数，分片到达终态后即丢弃。
#[derive(Debug)]
pub struct RetryState {
    attempt: usize,
    limit: usize,
}

impl RetryState {
    pub fn new(policy: &RetryPolicy) -> Self {
        Self {
            attempt: 0,
            limit: policy.limit(),
        }
    }

    /// 开始下一次尝试；次数已用尽时返回 `None`。
    pub fn begin_attempt(&mut self) -> Option<usize> {
        if self.attempt >= self.limit {
            return None;
        }
        self.attempt += 1;
        Some(self.attempt)
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    /// 当前尝试是否已是最后一次
    pub fn is_exhausted(&self) -> bool {
        self.attempt >= self.limit
    }
}
