//! 下载入口的错误类型。

use thiserror::Error;

use crate::internal::local_file::functions::local_file_error::LocalFileError;
use crate::internal::probe::structs::probe_error::ProbeError;
use crate::internal::task::structs::task_error::TaskError;
use crate::internal::writer::structs::write_error::WriteError;

use super::download_report::DownloadReport;
use super::task_failure::TaskFailure;

#[derive(Debug, Error)]
pub enum DownloadError {
    #[error("构建 HTTP 客户端失败: {0}")]
    Client(#[source] reqwest::Error),

    #[error("下载参数无效: {0}")]
    Task(#[from] TaskError),

    /// 无法确定文件大小，任何分片都不会启动。
    #[error("探测文件大小失败: {0}")]
    Probe(#[from] ProbeError),

    #[error(transparent)]
    LocalFile(#[from] LocalFileError),

    #[error("打开输出文件失败: {0}")]
    Output(#[from] WriteError),

    #[error(transparent)]
    Failed(#[from] TaskFailure),
}

impl DownloadError {
    /// 分片下载失败时取出报告；其他错误发生时还没有分片。
    pub fn report(&self) -> Option<&DownloadReport> {
        match self {
            DownloadError::Failed(failure) => Some(&failure.report),
            _ => None,
        }
    }
}
