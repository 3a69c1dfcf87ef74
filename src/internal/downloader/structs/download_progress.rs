use serde::Serialize;

/// 下载进度：响应式状态，记录已写入的字节数与已结束的分片数。
///
/// 调用方通过协调器的 `progress()` 读取或监听；进度比例可用 [`DownloadProgress::pct`] 获取。
#[derive(Debug, Clone, Default, Serialize)]
pub struct DownloadProgress {
    /// 已写入文件的字节数（重试时会扣除失败尝试写入的部分）
    pub bytes_done: u64,
    /// 文件总大小（字节），来自探测结果
    pub total: u64,
    /// 已到达终态的分片数
    pub chunks_done: usize,
    /// 分片总数
    pub chunks_total: usize,
}

impl DownloadProgress {
    /// 进度百分比（0～100）；总大小为 0 时返回 `f64::NAN`。
    pub fn pct(&self) -> f64 {
        if self.total == 0 {
            return f64::NAN;
        }
        (self.bytes_done as f64 / self.total as f64) * 100.0
    }
}
