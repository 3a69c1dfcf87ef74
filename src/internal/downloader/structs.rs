pub mod attempt_error;
pub mod chunk_downloader;
pub mod download_progress;
pub mod network_error;
pub mod progress_tracker;

// 重导出公共类型
pub use attempt_error::AttemptError;
pub use chunk_downloader::ChunkDownloader;
pub use download_progress::DownloadProgress;
pub use network_error::NetworkError;
pub use progress_tracker::ProgressTracker;
