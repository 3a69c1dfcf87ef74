//! 写入器测试：乱序并发写不相交区间，两种写入策略结果一致。

use std::sync::Arc;

use futures_util::future::join_all;
use rand::seq::SliceRandom;
use tempfile::tempdir;

use crate::config::WriteStrategy;
use crate::local_file::{allocate_file, verify_file_size, LocalFileError};
use crate::task::partition;
use crate::tests::random_payload;
use crate::writer::{OutputFile, SharedFileWriter, WriteError};

const SIZE: usize = 256 * 1024;

/// 把负载按 `pieces` 段乱序并发写入，写完读回比对
async fn write_shuffled(strategy: WriteStrategy, pieces: usize) {
    let dir = tempdir().unwrap();
    let path = dir.path().join("out.bin");
    let payload = Arc::new(random_payload(SIZE));

    allocate_file(&path, SIZE as u64).await.unwrap();
    let output = Arc::new(OutputFile::open(&path, strategy).await.unwrap());

    let mut ranges = partition(SIZE as u64, pieces);
    ranges.shuffle(&mut rand::thread_rng());

    let tasks = ranges.into_iter().map(|range| {
        let output = Arc::clone(&output);
        let payload = Arc::clone(&payload);
        tokio::spawn(async move {
            let sink = output.sink_for_chunk().await.unwrap();
            // 每段再拆成小块按顺序写，模拟流式到达
            let data = &payload[range.start as usize..=range.end as usize];
            let mut offset = range.start;
            for piece in data.chunks(1000) {
                let n = sink.write_at(offset, piece).await.unwrap();
                offset += n as u64;
            }
        })
    });
    for result in join_all(tasks).await {
        result.unwrap();
    }
    drop(output);

    assert_eq!(verify_file_size(&path, SIZE as u64).await.unwrap(), SIZE as u64);
    let written = tokio::fs::read(&path).await.unwrap();
    assert!(written == *payload, "文件内容与负载不一致");
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn shared_handle_concurrent_writes() {
    write_shuffled(WriteStrategy::SharedHandle, 16).await;
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn per_chunk_handle_concurrent_writes() {
    write_shuffled(WriteStrategy::PerChunkHandle, 16).await;
}

#[tokio::test]
async fn shared_writer_writes_at_absolute_offset() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("out.bin");
    allocate_file(&path, 10).await.unwrap();

    let writer = SharedFileWriter::open(&path).await.unwrap();
    assert_eq!(writer.write(7, b"xyz").await.unwrap(), 3);
    assert_eq!(writer.write(0, b"ab").await.unwrap(), 2);
    drop(writer);

    let data = tokio::fs::read(&path).await.unwrap();
    assert_eq!(data, b"ab\0\0\0\0\0xyz");
}

#[tokio::test]
async fn open_missing_file_fails() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("missing.bin");

    let err = SharedFileWriter::open(&path).await.unwrap_err();
    assert!(matches!(err, WriteError::Open { .. }));

    // 独立句柄策略在分片打开时才会失败
    let output = OutputFile::open(&path, WriteStrategy::PerChunkHandle)
        .await
        .unwrap();
    assert!(output.sink_for_chunk().await.is_err());
}

#[tokio::test]
async fn allocate_creates_parent_dirs_and_sets_length() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("a/b/out.bin");

    allocate_file(&path, 4096).await.unwrap();
    assert_eq!(verify_file_size(&path, 4096).await.unwrap(), 4096);

    assert!(matches!(
        verify_file_size(&path, 4095).await,
        Err(LocalFileError::SizeMismatch {
            expected: 4095,
            actual: 4096,
            ..
        })
    ));
}
