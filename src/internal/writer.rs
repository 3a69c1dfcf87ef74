//! 分片写入：把收到的字节写到输出文件的绝对偏移处。

pub mod structs;
pub mod traits;
