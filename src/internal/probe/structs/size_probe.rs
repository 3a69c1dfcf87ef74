use std::time::Duration;

use reqwest::header::CONTENT_LENGTH;
use reqwest::Client;
use tracing::debug;
use url::Url;

use super::probe_error::ProbeError;

/// 远程文件大小探测器
#[derive(Debug, Clone)]
pub struct SizeProbe {
    client: Client,
    timeout: Duration,
}

impl SizeProbe {
    /// `timeout` 为单次 HEAD 请求的总超时；连接超时与重定向策略取自 `client`。
    pub fn new(client: Client, timeout: Duration) -> Self {
        Self { client, timeout }
    }

    /// 通过 HEAD 请求读取 `Content-Length`。
    ///
    /// 传输失败、非 2xx 状态、缺少或无法解析长度、长度 `<= 0` 都返回 [`ProbeError`]。
    pub async fn get_size(&self, url: &Url) -> Result<u64, ProbeError> {
        let resp = self
            .client
            .head(url.clone())
            .timeout(self.timeout)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            return Err(ProbeError::Status(status));
        }

        // HEAD 响应没有 body，不能用 `content_length()`，直接读响应头
        let raw = resp
            .headers()
            .get(CONTENT_LENGTH)
            .ok_or(ProbeError::MissingLength)?;
        let text = raw
            .to_str()
            .map_err(|_| ProbeError::UnparsableLength(format!("{:?}", raw)))?;
        let declared: i64 = text
            .trim()
            .parse()
            .map_err(|_| ProbeError::UnparsableLength(text.to_string()))?;

        if declared <= 0 {
            return Err(ProbeError::NonPositiveLength(declared));
        }

        debug!(url = %url, size = declared, "探测到文件大小");
        Ok(declared as u64)
    }
}
