//! HTTP 客户端构建：探测与分片下载共用同一个 reqwest 客户端。

pub mod functions;
