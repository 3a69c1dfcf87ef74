//! 下载配置：并发数、重试策略、超时与写入策略。

pub mod structs;
