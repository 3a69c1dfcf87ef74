//! 下载任务领域模型：任务、字节区间、分片及其划分。

pub mod functions;
pub mod structs;
