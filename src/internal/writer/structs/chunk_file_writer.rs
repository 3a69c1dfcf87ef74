//! 分片独占的文件写入器（[`WriteStrategy::PerChunkHandle`] 使用）。
//!
//! 每个分片各自打开一次输出文件，得到独立的文件描述与游标；各分片只写自己不相交的区间，
//! 分片之间没有共享锁。内部的互斥锁只是为了在 `&self` 上拿到 `&mut File`，不会有竞争。
//!
//! [`WriteStrategy::PerChunkHandle`]: crate::config::WriteStrategy::PerChunkHandle

use std::path::Path;

use async_trait::async_trait;
use tokio::fs::File;
use tokio::sync::Mutex as TokioMutex;

use crate::internal::writer::traits::chunk_sink::ChunkSink;

use super::shared_file_writer::{open_existing, positioned_write};
use super::write_error::WriteError;

#[derive(Debug)]
pub struct ChunkFileWriter {
    file: TokioMutex<File>,
}

impl ChunkFileWriter {
    /// 为单个分片单独打开输出文件；注意不能用 `try_clone`，克隆出的句柄与原句柄共享游标。
    pub async fn open(path: impl AsRef<Path>) -> Result<Self, WriteError> {
        let file = open_existing(path.as_ref()).await?;
        Ok(Self {
            file: TokioMutex::new(file),
        })
    }
}

#[async_trait]
impl ChunkSink for ChunkFileWriter {
    async fn write_at(&self, offset: u64, buf: &[u8]) -> Result<usize, WriteError> {
        let mut file_guard = self.file.lock().await;
        positioned_write(&mut file_guard, offset, buf).await
    }
}
