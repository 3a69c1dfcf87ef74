use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::internal::config::structs::WriteStrategy;
use crate::internal::writer::traits::chunk_sink::ChunkSink;

use super::chunk_file_writer::ChunkFileWriter;
use super::shared_file_writer::SharedFileWriter;
use super::write_error::WriteError;

/// 已预分配的输出文件，按写入策略给每个分片提供 sink。
///
/// 生命周期覆盖整个任务；共享策略下所有分片拿到的是同一个 [`SharedFileWriter`]。
#[derive(Debug)]
pub struct OutputFile {
    path: PathBuf,
    strategy: WriteStrategy,
    shared: Option<Arc<SharedFileWriter>>,
}

impl OutputFile {
    /// 打开输出文件。共享策略下立即打开唯一句柄，打不开直接报错；
    /// 独立句柄策略下各分片在自己的 worker 中打开。
    pub async fn open(
        path: impl AsRef<Path>,
        strategy: WriteStrategy,
    ) -> Result<Self, WriteError> {
        let path = path.as_ref().to_path_buf();
        let shared = match strategy {
            WriteStrategy::SharedHandle => Some(Arc::new(SharedFileWriter::open(&path).await?)),
            WriteStrategy::PerChunkHandle => None,
        };
        Ok(Self {
            path,
            strategy,
            shared,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn strategy(&self) -> WriteStrategy {
        self.strategy
    }

    /// 为一个分片取得写入 sink
    pub async fn sink_for_chunk(&self) -> Result<Arc<dyn ChunkSink>, WriteError> {
        match &self.shared {
            Some(shared) => Ok(Arc::clone(shared) as Arc<dyn ChunkSink>),
            None => Ok(Arc::new(ChunkFileWriter::open(&self.path).await?)),
        }
    }
}
