use std::path::Path;

use crate::internal::config::structs::DownloaderConfig;
use crate::internal::coordinator::structs::{Coordinator, DownloadError, DownloadReport};

/// 按配置并发分片下载 `url` 到 `output`
///
/// 先用 HEAD 探测文件大小，再预分配文件并按区间并发下载，最后校验落盘大小。
/// 任一分片重试耗尽都会返回错误；错误为 [`DownloadError::Failed`] 时仍可取出报告。
///
/// example:
/// ```no_run
/// use chunked_fetch::config::DownloaderConfig;
/// use chunked_fetch::download_file;
///
/// # async fn demo() -> Result<(), chunked_fetch::coordinator::DownloadError> {
/// let report = download_file(
///     "https://example.com/big.iso",
///     "./big.iso",
///     DownloaderConfig::default().workers(8),
/// )
/// .await?;
/// println!("{} 字节，耗时 {:?}", report.total_size, report.total_elapsed);
/// # Ok(())
/// # }
/// ```
pub async fn download_file(
    url: &str,
    output: impl AsRef<Path>,
    config: DownloaderConfig,
) -> Result<DownloadReport, DownloadError> {
    Coordinator::new(config)?.download(url, output).await
}
