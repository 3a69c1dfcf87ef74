use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::byte_range::ByteRange;
use super::chunk_status::ChunkStatus;

/// 分片：目标文件中分配给唯一一个 worker 的连续字节区间及其下载记录。
///
/// 由划分结果创建，下载期间只被所属 worker 修改；到达终态后不再变化，
/// 字段只通过只读方法对外暴露。
#[derive(Debug, Clone, Serialize)]
pub struct Chunk {
    id: usize,
    start_byte: u64,
    end_byte: u64,
    bytes_written: u64,
    status: ChunkStatus,
    started_at: Option<DateTime<Utc>>,
    finished_at: Option<DateTime<Utc>>,
    attempts: usize,
    backoff: Duration,
    last_error: Option<String>,
}

impl Chunk {
    pub fn new(id: usize, range: ByteRange) -> Self {
        Self {
            id,
            start_byte: range.start,
            end_byte: range.end,
            bytes_written: 0,
            status: ChunkStatus::Pending,
            started_at: None,
            finished_at: None,
            attempts: 0,
            backoff: Duration::ZERO,
            last_error: None,
        }
    }

    pub fn id(&self) -> usize {
        self.id
    }

    pub fn start_byte(&self) -> u64 {
        self.start_byte
    }

    pub fn end_byte(&self) -> u64 {
        self.end_byte
    }

    pub fn range(&self) -> ByteRange {
        ByteRange::new(self.start_byte, self.end_byte)
    }

    /// 划分时分配给本分片的字节数
    pub fn size(&self) -> u64 {
        self.range().len()
    }

    /// 最近一次尝试已写入文件的字节数
    pub fn bytes_written(&self) -> u64 {
        self.bytes_written
    }

    pub fn status(&self) -> ChunkStatus {
        self.status
    }

    pub fn started_at(&self) -> Option<DateTime<Utc>> {
        self.started_at
    }

    pub fn finished_at(&self) -> Option<DateTime<Utc>> {
        self.finished_at
    }

    /// 已消耗的尝试次数
    pub fn attempts(&self) -> usize {
        self.attempts
    }

    /// 重试退避累计等待的时长
    pub fn backoff(&self) -> Duration {
        self.backoff
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    pub fn is_terminal(&self) -> bool {
        self.status.is_terminal()
    }

    /// 从开始下载到终态的耗时；未开始或未结束时为 `None`。
    pub fn elapsed(&self) -> Option<Duration> {
        let (start, end) = (self.started_at?, self.finished_at?);
        (end - start).to_std().ok()
    }

    /// `Pending -> Downloading`，记录开始时间。
    pub(crate) fn mark_downloading(&mut self) {
        if self.status != ChunkStatus::Pending {
            return;
        }
        self.status = ChunkStatus::Downloading;
        self.started_at = Some(Utc::now());
    }

    /// 开始第 `attempt` 次尝试：写入偏移回到区间起点。
    pub(crate) fn begin_attempt(&mut self, attempt: usize) {
        self.attempts = attempt;
        self.bytes_written = 0;
    }

    pub(crate) fn record_written(&mut self, n: u64) {
        self.bytes_written += n;
    }

    pub(crate) fn record_backoff(&mut self, delay: Duration) {
        self.backoff += delay;
    }

    pub(crate) fn record_error(&mut self, message: impl Into<String>) {
        self.last_error = Some(message.into());
    }

    /// 进入终态并记录结束时间；已是终态或目标不是终态时忽略。
    pub(crate) fn finish(&mut self, status: ChunkStatus) {
        if self.is_terminal() || !status.is_terminal() {
            return;
        }
        if self.started_at.is_none() {
            self.started_at = Some(Utc::now());
        }
        self.status = status;
        self.finished_at = Some(Utc::now());
    }
}
