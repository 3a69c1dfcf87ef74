//! 分片下载：单个字节区间的 Range 请求、流式写入与有界重试。

pub mod structs;
