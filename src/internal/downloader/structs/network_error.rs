//! 单次分片请求的传输错误。

use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum NetworkError {
    #[error("HTTP 请求失败: {0}")]
    Request(#[from] reqwest::Error),

    #[error("服务器返回异常状态码: {0}")]
    Status(StatusCode),

    /// 区间不从 0 开始，服务器却返回了 200 和整个文件。
    #[error("服务器忽略了 Range 请求（区间起点 {start}）")]
    RangeIgnored { start: u64 },

    #[error("分片数据不完整：期望 {expected} 字节，实际 {received} 字节")]
    Incomplete { expected: u64, received: u64 },

    #[error("分片数据超出区间：期望 {expected} 字节，已收到 {received} 字节")]
    Overflow { expected: u64, received: u64 },
}
