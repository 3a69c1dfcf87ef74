use serde::Serialize;

/// 分片状态（由所属 worker 独占维护）
///
/// 状态只会按 `Pending -> Downloading -> Succeeded | Failed` 前进，终态只到达一次。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ChunkStatus {
    Pending,
    Downloading,
    Succeeded,
    Failed,
}

impl ChunkStatus {
    pub fn is_terminal(&self) -> bool {
        matches!(self, ChunkStatus::Succeeded | ChunkStatus::Failed)
    }
}
