use reqwest::{redirect, Client};

use crate::internal::config::structs::DownloaderConfig;

/// 构建共享的 HTTP 客户端：连接超时与重定向策略在客户端级别设置，
/// 总超时按请求设置（探测与分片的总超时不同）。
///
/// reqwest 的 `Client` 内部是 Arc，克隆给各 worker 不会重复建连接池。
pub fn build_client(config: &DownloaderConfig) -> Result<Client, reqwest::Error> {
    Client::builder()
        .connect_timeout(config.connect_timeout)
        .redirect(redirect::Policy::limited(config.max_redirects))
        .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
        .build()
}
