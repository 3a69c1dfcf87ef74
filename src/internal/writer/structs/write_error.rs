//! 写文件相关错误类型。

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum WriteError {
    #[error("打开输出文件 {path} 失败: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("文件定位到偏移 {offset} 失败: {source}")]
    Seek {
        offset: u64,
        #[source]
        source: std::io::Error,
    },

    #[error("在偏移 {offset} 写入失败: {source}")]
    Write {
        offset: u64,
        #[source]
        source: std::io::Error,
    },

    #[error("刷新文件失败: {0}")]
    Flush(#[source] std::io::Error),
}
