use serde::Serialize;

/// 闭区间字节范围 `[start, end]`，对应一次 Range 请求。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ByteRange {
    pub start: u64,
    pub end: u64,
}

impl ByteRange {
    /// 调用方保证 `start <= end`。
    pub fn new(start: u64, end: u64) -> Self {
        debug_assert!(start <= end, "区间起点不能大于终点");
        Self { start, end }
    }

    /// 区间包含的字节数
    pub fn len(&self) -> u64 {
        self.end - self.start + 1
    }

    /// 闭区间恒非空
    pub fn is_empty(&self) -> bool {
        false
    }

    /// 生成 Range 请求头：`bytes=start-end`。
    pub fn header_value(&self) -> String {
        format!("bytes={}-{}", self.start, self.end)
    }
}
