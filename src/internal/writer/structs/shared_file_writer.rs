//! 共享文件写入器：所有分片共用一个文件句柄，用一把互斥锁串行化写入。
//!
//! 一个句柄只有一个游标，多个 worker 不加锁地交错 seek + write 会把数据写错位置，
//! 所以 seek、write、flush 必须在同一次加锁内完成。

use std::io::SeekFrom;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs::{File, OpenOptions};
use tokio::io::{AsyncSeekExt, AsyncWriteExt};
use tokio::sync::Mutex as TokioMutex;

use crate::internal::writer::traits::chunk_sink::ChunkSink;

use super::write_error::WriteError;

#[derive(Debug)]
pub struct SharedFileWriter {
    path: PathBuf,
    file: TokioMutex<File>,
}

impl SharedFileWriter {
    /// 以写模式打开一个已存在的文件；不创建、不截断、不改变文件长度。
    pub async fn open(path: impl AsRef<Path>) -> Result<Self, WriteError> {
        let path = path.as_ref().to_path_buf();
        let file = open_existing(&path).await?;
        Ok(Self {
            path,
            file: TokioMutex::new(file),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// 在锁内完成 seek + write + flush，返回写入字节数。
    pub async fn write(&self, offset: u64, buf: &[u8]) -> Result<usize, WriteError> {
        let mut file_guard = self.file.lock().await;
        positioned_write(&mut file_guard, offset, buf).await
    }
}

#[async_trait]
impl ChunkSink for SharedFileWriter {
    async fn write_at(&self, offset: u64, buf: &[u8]) -> Result<usize, WriteError> {
        self.write(offset, buf).await
    }
}

/// 打开已预分配的输出文件（只写，不创建）
pub(crate) async fn open_existing(path: &Path) -> Result<File, WriteError> {
    OpenOptions::new()
        .write(true)
        .open(path)
        .await
        .map_err(|source| WriteError::Open {
            path: path.to_path_buf(),
            source,
        })
}

/// 定位、写入并刷新；调用方负责保证句柄独占。
pub(crate) async fn positioned_write(
    file: &mut File,
    offset: u64,
    buf: &[u8],
) -> Result<usize, WriteError> {
    file.seek(SeekFrom::Start(offset))
        .await
        .map_err(|source| WriteError::Seek { offset, source })?;
    file.write_all(buf)
        .await
        .map_err(|source| WriteError::Write { offset, source })?;
    file.flush().await.map_err(WriteError::Flush)?;
    Ok(buf.len())
}
