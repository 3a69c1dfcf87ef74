//! 文件大小探测错误：任何一种都是致命的，下载在启动任何分片前中止。

use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProbeError {
    #[error("HEAD 请求失败: {0}")]
    Request(#[from] reqwest::Error),

    #[error("HEAD 请求返回异常状态码: {0}")]
    Status(StatusCode),

    #[error("服务器未声明文件大小")]
    MissingLength,

    #[error("文件大小无法解析: {0}")]
    UnparsableLength(String),

    #[error("文件大小无效: {0}")]
    NonPositiveLength(i64),
}
