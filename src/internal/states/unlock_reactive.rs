//! # UnlockReactiveProperty
//!
//! 读写都不阻塞的响应式属性，用来发布下载进度。
//!
//! ## 使用示例
//! ```rust,no_run
//! use chunked_fetch::states::unlock_reactive::UnlockReactiveProperty;
//! use chunked_fetch::downloader::DownloadProgress;
//!
//! # async fn demo() {
//! let prop = UnlockReactiveProperty::new(DownloadProgress::default());
//! let mut watcher = prop.watch();
//! tokio::spawn(async move {
//!     while let Ok(p) = watcher.changed().await {
//!         println!("{:.1}%", p.pct());
//!     }
//! });
//! # }
//! ```

pub use super::reactive_core::{PropertyWatcher, ReactivePropertyError as UnlockReactivePropertyError};

/// 纯通知机制，适合高频更新（如下载进度）。
pub type UnlockReactiveProperty<T> = super::reactive_core::ReactiveProperty<T>;
