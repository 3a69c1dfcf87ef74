use std::path::Path;

use tokio::fs::{self, File};
use tracing::debug;

use super::local_file_error::LocalFileError;

/// 创建（或截断）输出文件并把长度设为 `size`，分片只在这个已存在的文件里定位写入。
///
/// 父目录不存在时一并创建。
pub async fn allocate_file(path: impl AsRef<Path>, size: u64) -> Result<(), LocalFileError> {
    let path = path.as_ref();

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .await
            .map_err(|source| LocalFileError::Create {
                path: parent.to_path_buf(),
                source,
            })?;
    }

    let file = File::create(path)
        .await
        .map_err(|source| LocalFileError::Create {
            path: path.to_path_buf(),
            source,
        })?;
    file.set_len(size)
        .await
        .map_err(|source| LocalFileError::Preallocate {
            path: path.to_path_buf(),
            source,
        })?;

    debug!(path = %path.display(), size, "输出文件已预分配");
    Ok(())
}
