//! 大小探测测试：HEAD 成功、长度缺失或为 0、错误状态码、连接失败。

use std::time::Duration;

use reqwest::{Client, StatusCode};
use url::Url;

use crate::probe::{ProbeError, SizeProbe};
use crate::tests::{refused_url, LengthMode, TestServer, random_payload};

fn probe() -> SizeProbe {
    SizeProbe::new(Client::new(), Duration::from_secs(5))
}

#[tokio::test]
async fn probe_reads_content_length() {
    let server = TestServer::with_random(12_345).await;
    let url = Url::parse(&server.url()).unwrap();

    assert_eq!(probe().get_size(&url).await.unwrap(), 12_345);
    assert_eq!(server.head_count(), 1);
    assert_eq!(server.get_count(), 0);
}

#[tokio::test]
async fn probe_rejects_zero_length() {
    let server = TestServer::builder(random_payload(100))
        .length_mode(LengthMode::Zero)
        .start()
        .await;
    let url = Url::parse(&server.url()).unwrap();

    assert!(matches!(
        probe().get_size(&url).await,
        Err(ProbeError::NonPositiveLength(0))
    ));
}

#[tokio::test]
async fn probe_rejects_missing_length() {
    let server = TestServer::builder(random_payload(100))
        .length_mode(LengthMode::Missing)
        .start()
        .await;
    let url = Url::parse(&server.url()).unwrap();

    assert!(matches!(
        probe().get_size(&url).await,
        Err(ProbeError::MissingLength)
    ));
    assert_eq!(server.head_count(), 1);
}

#[tokio::test]
async fn probe_rejects_error_status() {
    let server = TestServer::with_random(100).await;
    let url = Url::parse(&server.url()).unwrap().join("/nope").unwrap();

    assert!(matches!(
        probe().get_size(&url).await,
        Err(ProbeError::Status(StatusCode::NOT_FOUND))
    ));
}

#[tokio::test]
async fn probe_reports_connection_failure() {
    let url = Url::parse(&refused_url().await).unwrap();

    assert!(matches!(
        probe().get_size(&url).await,
        Err(ProbeError::Request(_))
    ));
}
