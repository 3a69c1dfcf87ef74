pub mod coordinator;
pub mod download_error;
pub mod download_report;
pub mod task_failure;

// 重导出公共类型
pub use coordinator::Coordinator;
pub use download_error::DownloadError;
pub use download_report::DownloadReport;
pub use task_failure::TaskFailure;
