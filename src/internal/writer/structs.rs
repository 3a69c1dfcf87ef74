pub mod chunk_file_writer;
pub mod output_file;
pub mod shared_file_writer;
pub mod write_error;

// 重导出公共类型
pub use chunk_file_writer::ChunkFileWriter;
pub use output_file::OutputFile;
pub use shared_file_writer::SharedFileWriter;
pub use write_error::WriteError;
