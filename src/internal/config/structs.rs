pub mod downloader_config;
pub mod retry_policy;
pub mod write_strategy;

// 重导出公共类型
pub use downloader_config::DownloaderConfig;
pub use retry_policy::{RetryPolicy, RetryState};
pub use write_strategy::WriteStrategy;
