use std::path::Path;

use tokio::fs;

use super::local_file_error::LocalFileError;

/// 核对磁盘上的文件长度是否等于 `expected`，返回实际长度。
///
/// 只比较字节数，不做内容校验。
pub async fn verify_file_size(path: impl AsRef<Path>, expected: u64) -> Result<u64, LocalFileError> {
    let path = path.as_ref();
    let actual = fs::metadata(path)
        .await
        .map_err(|source| LocalFileError::Metadata {
            path: path.to_path_buf(),
            source,
        })?
        .len();

    if actual != expected {
        return Err(LocalFileError::SizeMismatch {
            path: path.to_path_buf(),
            expected,
            actual,
        });
    }
    Ok(actual)
}
