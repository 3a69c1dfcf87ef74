//! 协调器端到端测试：并发下载结果与负载一致、失败隔离、探测失败不发分片请求、进度收敛。

use std::sync::Arc;

use reqwest::Client;
use tempfile::tempdir;
use tokio::task::JoinHandle;

use crate::config::WriteStrategy;
use crate::coordinator::{Coordinator, DownloadError};
use crate::download_file;
use crate::local_file::allocate_file;
use crate::probe::ProbeError;
use crate::internal::coordinator::structs::coordinator::failed_chunk;
use crate::task::{ByteRange, ChunkStatus, DownloadTask, TaskError};
use crate::tests::{
    fast_config, random_payload, refused_url, Failure, LengthMode, TestServer,
};
use crate::writer::OutputFile;

const SIZE: usize = 300 * 1024 + 7;

async fn download_and_compare(workers: usize, strategy: WriteStrategy) {
    let server = TestServer::with_random(SIZE).await;
    let dir = tempdir().unwrap();
    let path = dir.path().join("out.bin");

    let report = download_file(
        &server.url(),
        &path,
        fast_config(workers).write_strategy(strategy),
    )
    .await
    .unwrap();

    assert!(report.is_success());
    assert_eq!(report.total_size, SIZE as u64);
    assert_eq!(report.worker_count, workers);
    assert_eq!(report.chunks.len(), workers);
    assert_eq!(report.bytes_written(), SIZE as u64);
    assert_eq!(server.head_count(), 1);
    assert_eq!(server.get_count(), workers);

    let data = tokio::fs::read(&path).await.unwrap();
    assert!(data == server.payload(), "文件内容与负载不一致");
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn single_worker_download() {
    download_and_compare(1, WriteStrategy::SharedHandle).await;
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn three_worker_download() {
    download_and_compare(3, WriteStrategy::SharedHandle).await;
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn sixteen_worker_download() {
    download_and_compare(16, WriteStrategy::SharedHandle).await;
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn per_chunk_handle_download() {
    download_and_compare(8, WriteStrategy::PerChunkHandle).await;
}

#[tokio::test]
async fn tiny_file_uses_fewer_workers() {
    let server = TestServer::with_random(3).await;
    let dir = tempdir().unwrap();
    let path = dir.path().join("tiny.bin");

    let report = download_file(&server.url(), &path, fast_config(16))
        .await
        .unwrap();

    assert_eq!(report.requested_workers, 16);
    assert_eq!(report.worker_count, 3);
    assert!(report.chunks.iter().all(|c| c.size() == 1));
    assert_eq!(tokio::fs::read(&path).await.unwrap(), server.payload());
}

#[tokio::test]
async fn recovers_from_transient_chunk_failures() {
    let payload = random_payload(40_000);
    // 4 个分片，每段 10_000 字节
    let server = TestServer::builder(payload)
        .fail_at(10_000, [Failure::Status500])
        .fail_at(30_000, [Failure::Truncate, Failure::Status500])
        .start()
        .await;
    let dir = tempdir().unwrap();
    let path = dir.path().join("out.bin");

    let report = download_file(&server.url(), &path, fast_config(4))
        .await
        .unwrap();

    let attempts: Vec<_> = report.chunks.iter().map(|c| c.attempts()).collect();
    assert_eq!(attempts, vec![1, 2, 1, 3]);
    assert_eq!(tokio::fs::read(&path).await.unwrap(), server.payload());
}

#[tokio::test]
async fn failed_chunk_does_not_cancel_others() {
    let payload = random_payload(40_000);
    let server = TestServer::builder(payload)
        .fail_at(
            20_000,
            [Failure::Status500, Failure::Status500, Failure::Status500],
        )
        .start()
        .await;
    let dir = tempdir().unwrap();
    let path = dir.path().join("out.bin");

    let err = download_file(&server.url(), &path, fast_config(4))
        .await
        .unwrap_err();

    let failure = match &err {
        DownloadError::Failed(failure) => failure,
        other => panic!("意外的错误: {}", other),
    };
    assert_eq!(failure.failed, vec![2]);

    let report = err.report().unwrap();
    assert!(!report.is_success());
    assert_eq!(report.chunks[2].status(), ChunkStatus::Failed);
    assert_eq!(report.chunks[2].attempts(), 3);
    for id in [0, 1, 3] {
        assert_eq!(report.chunks[id].status(), ChunkStatus::Succeeded);
    }

    // 其他分片的数据完整落盘
    let data = tokio::fs::read(&path).await.unwrap();
    assert_eq!(&data[..20_000], &server.payload()[..20_000]);
    assert_eq!(&data[30_000..], &server.payload()[30_000..]);
}

/// 按长度模式启动服务器并下载，返回错误与服务器（用于检查请求计数）
async fn download_with_length_mode(mode: LengthMode) -> (DownloadError, TestServer, bool) {
    let server = TestServer::builder(random_payload(1_000))
        .length_mode(mode)
        .start()
        .await;
    let dir = tempdir().unwrap();
    let path = dir.path().join("out.bin");

    let err = download_file(&server.url(), &path, fast_config(4))
        .await
        .unwrap_err();
    (err, server, path.exists())
}

#[tokio::test]
async fn probe_failure_starts_no_chunks() {
    let (err, server, created) = download_with_length_mode(LengthMode::Zero).await;
    assert!(matches!(
        err,
        DownloadError::Probe(ProbeError::NonPositiveLength(0))
    ));
    assert!(err.report().is_none());
    assert_eq!(server.head_count(), 1);
    assert_eq!(server.get_count(), 0);
    assert!(!created);
}

#[tokio::test]
async fn missing_length_starts_no_chunks() {
    let (err, server, created) = download_with_length_mode(LengthMode::Missing).await;
    assert!(matches!(
        err,
        DownloadError::Probe(ProbeError::MissingLength)
    ));
    assert!(err.report().is_none());
    assert_eq!(server.head_count(), 1);
    assert_eq!(server.get_count(), 0);
    assert!(!created);
}

#[tokio::test]
async fn panicked_worker_becomes_failed_chunk() {
    let handle: JoinHandle<()> = tokio::spawn(async {
        panic!("worker 崩溃");
    });
    let join_err = handle.await.unwrap_err();
    assert!(join_err.is_panic());

    let chunk = failed_chunk(3, ByteRange::new(300, 399), &join_err);

    assert_eq!(chunk.id(), 3);
    assert_eq!(chunk.status(), ChunkStatus::Failed);
    assert_eq!(chunk.range(), ByteRange::new(300, 399));
    assert_eq!(chunk.bytes_written(), 0);
    assert!(chunk.last_error().unwrap().contains("worker 异常退出"));
    assert!(chunk.finished_at().is_some());
}

#[tokio::test]
async fn unreachable_server_fails_probe() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("out.bin");

    let err = download_file(&refused_url().await, &path, fast_config(4))
        .await
        .unwrap_err();

    assert!(matches!(err, DownloadError::Probe(ProbeError::Request(_))));
    assert!(!path.exists());
}

#[tokio::test]
async fn invalid_arguments_rejected_before_probe() {
    let server = TestServer::with_random(1_000).await;
    let coordinator = Coordinator::new(fast_config(17)).unwrap();

    assert!(matches!(
        coordinator.prepare(&server.url()).await,
        Err(DownloadError::Task(TaskError::WorkerCount { actual: 17, .. }))
    ));

    let coordinator = Coordinator::new(fast_config(4)).unwrap();
    assert!(matches!(
        coordinator.prepare("ftp://example.com/a").await,
        Err(DownloadError::Task(TaskError::UnsupportedScheme(_)))
    ));
    assert_eq!(server.head_count(), 0);
}

#[tokio::test]
async fn run_leaves_every_chunk_terminal() {
    let server = TestServer::builder(random_payload(10_000))
        .fail_at(0, [Failure::Status500, Failure::Status500, Failure::Status500])
        .start()
        .await;
    let dir = tempdir().unwrap();
    let path = dir.path().join("out.bin");

    let coordinator = Coordinator::with_client(Client::new(), fast_config(5));
    let task = coordinator.prepare(&server.url()).await.unwrap();
    allocate_file(&path, task.total_size()).await.unwrap();
    let output = Arc::new(
        OutputFile::open(&path, WriteStrategy::SharedHandle)
            .await
            .unwrap(),
    );

    let report = coordinator.run(&task, output).await;

    assert_eq!(report.chunks.len(), 5);
    for (id, chunk) in report.chunks.iter().enumerate() {
        assert_eq!(chunk.id(), id);
        assert!(chunk.is_terminal());
        assert!(chunk.started_at().is_some());
        assert!(chunk.finished_at().unwrap() >= chunk.started_at().unwrap());
        assert!(report.chunk_start_offset(chunk).is_some());
    }
    assert_eq!(report.failed_chunk_ids(), vec![0]);
    assert!(report.into_result().is_err());
}

#[tokio::test]
async fn progress_reaches_total() {
    let server = TestServer::with_random(SIZE).await;
    let dir = tempdir().unwrap();
    let path = dir.path().join("out.bin");

    let coordinator = Coordinator::new(fast_config(6)).unwrap();
    let progress = coordinator.progress();
    let mut watcher = progress.watch();

    let watch_task = tokio::spawn(async move {
        let mut last = 0u64;
        while let Ok(p) = watcher.changed().await {
            assert!(p.bytes_done <= p.total);
            if p.chunks_done == p.chunks_total && p.chunks_total > 0 {
                return p.bytes_done;
            }
            last = p.bytes_done;
        }
        last
    });

    coordinator.download(&server.url(), &path).await.unwrap();

    let p = progress.get_current().unwrap();
    assert_eq!(p.bytes_done, SIZE as u64);
    assert_eq!(p.total, SIZE as u64);
    assert_eq!(p.chunks_done, 6);
    assert_eq!(p.chunks_total, 6);
    assert!((p.pct() - 100.0).abs() < f64::EPSILON);

    assert_eq!(watch_task.await.unwrap(), SIZE as u64);
}

#[tokio::test]
async fn prepare_builds_task_from_probe() {
    let server = TestServer::with_random(4_321).await;
    let coordinator = Coordinator::new(fast_config(4)).unwrap();

    let task = coordinator.prepare(&server.url()).await.unwrap();
    assert_eq!(
        task,
        DownloadTask::new(&server.url(), 4_321, 4).unwrap()
    );
    assert_eq!(server.get_count(), 0);
}
