//! 协调器：探测大小、划分区间、每个分片一个 worker 并发下载，全部 join 后汇总结果。

pub mod structs;
