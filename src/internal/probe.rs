//! 文件大小探测：只发 HEAD 请求，不下载内容。

pub mod structs;
