use thiserror::Error;

use crate::internal::writer::structs::write_error::WriteError;

use super::network_error::NetworkError;

/// 一次分片尝试失败的原因；两种都只影响当前尝试，由重试循环决定是否再试。
#[derive(Debug, Error)]
pub enum AttemptError {
    #[error(transparent)]
    Network(#[from] NetworkError),

    #[error(transparent)]
    Write(#[from] WriteError),
}
