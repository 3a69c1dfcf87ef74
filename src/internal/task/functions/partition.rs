//! 把 `[0, total_size - 1]` 划分为若干连续、不重叠的闭区间。

use crate::internal::task::structs::byte_range::ByteRange;

/// 按 worker 数划分字节区间。
///
/// `base = total / n`，`remainder = total % n`：前 `remainder` 段各 `base + 1` 字节，其余各 `base` 字节，
/// 依次首尾相接，恰好覆盖 `[0, total - 1]`。
///
/// `n` 大于 `total` 时按 `total` 段划分，保证每段至少 1 字节；`total` 或 `n` 为 0 时返回空列表。
///
/// ```rust,no_run
/// use chunked_fetch::task::{partition, ByteRange};
///
/// assert_eq!(
///     partition(10, 3),
///     vec![ByteRange::new(0, 3), ByteRange::new(4, 6), ByteRange::new(7, 9)],
/// );
/// ```
pub fn partition(total_size: u64, worker_count: usize) -> Vec<ByteRange> {
    if total_size == 0 || worker_count == 0 {
        return Vec::new();
    }

    let count = (worker_count as u64).min(total_size);
    let base = total_size / count;
    let remainder = total_size % count;

    let mut ranges = Vec::with_capacity(count as usize);
    let mut offset = 0u64;
    for i in 0..count {
        let size = base + u64::from(i < remainder);
        ranges.push(ByteRange::new(offset, offset + size - 1));
        offset += size;
    }

    ranges
}
