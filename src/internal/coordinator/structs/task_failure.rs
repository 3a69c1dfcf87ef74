use thiserror::Error;

use super::download_report::DownloadReport;

/// 汇总失败：至少一个分片以 `Failed` 结束。携带完整报告，便于调用方输出明细。
#[derive(Debug, Error)]
#[error("{} 个分片下载失败: {:?}", .failed.len(), .failed)]
pub struct TaskFailure {
    /// 失败分片的 id
    pub failed: Vec<usize>,
    pub report: Box<DownloadReport>,
}
