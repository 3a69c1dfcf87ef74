use serde::Serialize;

/// 分片数据写入本地文件的方式。
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum WriteStrategy {
    /// 所有分片共用一个文件句柄，每次写入在互斥锁内完成 seek + write + flush。
    #[default]
    SharedHandle,
    /// 每个分片独立打开一个句柄，各自在不相交的偏移上写入，分片之间没有共享锁。
    PerChunkHandle,
}
