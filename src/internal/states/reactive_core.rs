//! # ReactiveProperty：响应式属性内核
//!
//! 基于 [`tokio::sync::watch`]：写入方整体替换快照，监听方只关心最新值，
//! 中间值可以被合并掉。[`UnlockReactiveProperty`](super::unlock_reactive::UnlockReactiveProperty)
//! 直接复用本模块。

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use thiserror::Error;
use tokio::sync::watch;
use tokio::sync::watch::Ref;
use tokio::sync::watch::error::RecvError;

// ──────────────────────────── Error ────────────────────────────

#[derive(Debug, Error)]
pub enum ReactivePropertyError {
    /// 属性已被销毁，不会再有新值
    #[error("属性已被销毁")]
    Destroyed,

    #[error("接收失败: {0}")]
    RecvError(#[from] RecvError),
}

// ──────────────────────────── Inner ────────────────────────────

/// 值发送器和销毁标志。最后一个属性句柄释放时向监听方发送 `None`。
#[derive(Debug)]
pub(crate) struct Inner<T> {
    pub(crate) sender: watch::Sender<Option<T>>,
    pub(crate) is_dropped: AtomicBool,
}

impl<T> Drop for Inner<T> {
    fn drop(&mut self) {
        self.is_dropped.store(true, Ordering::Relaxed);
        let _ = self.sender.send(None);
    }
}

// ──────────────────────────── ReactiveProperty ────────────────────────────

/// 可克隆的共享句柄，所有克隆指向同一个值。
#[derive(Clone, Debug)]
pub struct ReactiveProperty<T: Clone + Send + Sync> {
    pub(crate) inner: Arc<Inner<T>>,
    pub(crate) cache_receiver: watch::Receiver<Option<T>>,
}

impl<T> ReactiveProperty<T>
where
    T: Clone + Send + Sync,
{
    pub fn new(value: T) -> Self {
        let (sender, cache_receiver) = watch::channel(Some(value));
        Self {
            inner: Arc::new(Inner {
                sender,
                is_dropped: AtomicBool::new(false),
            }),
            cache_receiver,
        }
    }

    /// 整体替换当前值并通知所有监听者。
    ///
    /// 没有监听者时同样成功，值会留给之后的 [`get_current`](Self::get_current)。
    pub fn update(&self, new_value: T) -> Result<&Self, ReactivePropertyError> {
        if self.inner.is_dropped.load(Ordering::Relaxed) {
            return Err(ReactivePropertyError::Destroyed);
        }
        self.inner.sender.send_replace(Some(new_value));
        Ok(self)
    }

    /// 当前值的快照（会 clone）。
    pub fn get_current(&self) -> Option<T> {
        self.cache_receiver.borrow().as_ref().cloned()
    }

    /// 当前值的只读借用，持有期间会阻塞写入方，不要跨 `.await` 持有。
    pub fn get_current_borrow(&'_ self) -> Ref<'_, Option<T>> {
        self.cache_receiver.borrow()
    }


    /// 对当前值应用转换函数，例如只取进度百分比。
    pub fn map<R, F>(&self, f: F) -> Option<R>
    where
        F: FnOnce(&T) -> R,
    {
        self.cache_receiver.borrow().as_ref().map(f)
    }

    /// 创建监听器。监听器只会看到创建之后的变化。
    pub fn watch(&self) -> PropertyWatcher<T> {
        PropertyWatcher {
            receiver: self.inner.sender.subscribe(),
            _inner: Arc::clone(&self.inner),
        }
    }
}

// ──────────────────────────── PropertyWatcher ────────────────────────────

pub struct PropertyWatcher<T> {
    receiver: watch::Receiver<Option<T>>,
    _inner: Arc<Inner<T>>,
}

impl<T> PropertyWatcher<T>
where
    T: Clone + Send + Sync,
{
    /// 等待下一次变化并返回最新值。
    pub async fn changed(&mut self) -> Result<T, ReactivePropertyError> {
        self.receiver.changed().await?;
        match self.receiver.borrow_and_update().as_ref() {
            None => Err(ReactivePropertyError::Destroyed),
            Some(value) => Ok(value.clone()),
        }
    }
}
