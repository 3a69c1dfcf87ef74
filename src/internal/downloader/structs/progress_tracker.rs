use std::sync::Arc;
use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};

use crate::internal::states::unlock_reactive::UnlockReactiveProperty;

use super::download_progress::DownloadProgress;

/// 全局进度计数器：worker 只做原子累加并推送快照，从不读取它做决策。
///
/// 快照总是由两个原子量重新拼出，避免并发的读-改-写互相覆盖。
#[derive(Debug, Clone)]
pub struct ProgressTracker {
    total: u64,
    chunks_total: usize,
    bytes_done: Arc<AtomicU64>,
    chunks_done: Arc<AtomicUsize>,
    state: UnlockReactiveProperty<DownloadProgress>,
}

impl ProgressTracker {
    pub fn new(total: u64, chunks_total: usize) -> Self {
        Self {
            total,
            chunks_total,
            bytes_done: Arc::new(AtomicU64::new(0)),
            chunks_done: Arc::new(AtomicUsize::new(0)),
            state: UnlockReactiveProperty::new(DownloadProgress {
                bytes_done: 0,
                total,
                chunks_done: 0,
                chunks_total,
            }),
        }
    }

    /// 复用已有的响应式属性（例如调用方提前拿到并开始监听的），并推送初始快照。
    pub fn with_property(
        state: UnlockReactiveProperty<DownloadProgress>,
        total: u64,
        chunks_total: usize,
    ) -> Self {
        let tracker = Self {
            total,
            chunks_total,
            bytes_done: Arc::new(AtomicU64::new(0)),
            chunks_done: Arc::new(AtomicUsize::new(0)),
            state,
        };
        tracker.publish();
        tracker
    }

    /// 可共享的响应式进度；`.watch()` 后 `changed().await` 监听。
    pub fn property(&self) -> UnlockReactiveProperty<DownloadProgress> {
        self.state.clone()
    }

    pub fn bytes_done(&self) -> u64 {
        self.bytes_done.load(Ordering::Relaxed)
    }

    pub fn chunks_done(&self) -> usize {
        self.chunks_done.load(Ordering::Relaxed)
    }

    /// 累加写入字节
    pub(crate) fn add(&self, n: u64) {
        self.bytes_done.fetch_add(n, Ordering::Relaxed);
        self.publish();
    }

    /// 重试前扣除上一次尝试计入的字节
    pub(crate) fn retract(&self, n: u64) {
        if n == 0 {
            return;
        }
        self.bytes_done.fetch_sub(n, Ordering::Relaxed);
        self.publish();
    }

    pub(crate) fn chunk_finished(&self) {
        self.chunks_done.fetch_add(1, Ordering::Relaxed);
        self.publish();
    }

    /// 按当前计数推送一次完整快照
    pub(crate) fn publish(&self) {
        let _ = self.state.update(DownloadProgress {
            bytes_done: self.bytes_done(),
            total: self.total,
            chunks_done: self.chunks_done(),
            chunks_total: self.chunks_total,
        });
    }
}
