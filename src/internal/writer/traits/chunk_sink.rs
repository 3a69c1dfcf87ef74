//! 分片下载器写出数据的接口。
//!
//! 下载器自己维护写入偏移，sink 只负责把一段字节写到给定的绝对偏移，
//! 与底层连接无关。

use async_trait::async_trait;

use crate::internal::writer::structs::write_error::WriteError;

#[async_trait]
pub trait ChunkSink: Send + Sync {
    /// 把 `buf` 整段写到文件的绝对偏移 `offset`，返回写入的字节数。
    ///
    /// 单次调用是原子的：不会与其他调用在同一句柄上交错 seek 与 write。
    async fn write_at(&self, offset: u64, buf: &[u8]) -> Result<usize, WriteError>;
}
