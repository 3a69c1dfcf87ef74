//! 本地文件协作者：预分配输出文件、下载后核对文件大小。

pub mod functions;
