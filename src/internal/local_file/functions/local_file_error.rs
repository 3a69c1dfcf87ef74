//! 本地文件相关错误类型。

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum LocalFileError {
    #[error("创建文件 {path} 失败: {source}")]
    Create {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("预分配文件 {path} 空间失败: {source}")]
    Preallocate {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("读取文件 {path} 元数据失败: {source}")]
    Metadata {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("文件 {path} 大小校验失败：期望 {expected} 字节，实际 {actual} 字节")]
    SizeMismatch {
        path: PathBuf,
        expected: u64,
        actual: u64,
    },
}
