//! 下载任务参数校验错误。

use thiserror::Error;

#[derive(Debug, Error)]
pub enum TaskError {
    #[error("URL 格式错误: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("仅支持 http/https 协议，当前为 {0}")]
    UnsupportedScheme(String),

    #[error("文件大小必须大于 0")]
    EmptyFile,

    #[error("worker 数必须在 1..={max} 之间，当前为 {actual}")]
    WorkerCount { actual: usize, max: usize },
}
