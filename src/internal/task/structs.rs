pub mod byte_range;
pub mod chunk;
pub mod chunk_status;
pub mod download_task;
pub mod task_error;

// 重导出公共类型
pub use byte_range::ByteRange;
pub use chunk::Chunk;
pub use chunk_status::ChunkStatus;
pub use download_task::DownloadTask;
pub use task_error::TaskError;
