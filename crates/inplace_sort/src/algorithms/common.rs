use std::cmp::Ordering;
use std::ptr;

use crate::Direction;

/// Exchanges the elements at `a` and `b`.
///
/// The two slots are expected to be distinct; this is only checked in debug
/// builds, and swapping a slot with itself leaves it unchanged.
#[inline]
pub fn swap<T>(data: &mut [T], a: usize, b: usize) {
    debug_assert_ne!(a, b, "swap slots overlap");
    assert!(a < data.len() && b < data.len(), "swap index out of bounds");

    let ptr = data.as_mut_ptr();
    // SAFETY: both indices are in bounds; `ptr::swap` tolerates `a == b`.
    unsafe {
        ptr::swap(ptr.add(a), ptr.add(b));
    }
}

/// Reverses `data[0..=upper]` in place by swapping symmetric pairs from both
/// ends toward the center.
pub fn transpose<T>(data: &mut [T], upper: usize) {
    debug_assert!(upper < data.len() || data.is_empty());
    if data.is_empty() {
        return;
    }

    let mut left = 0_usize;
    let mut right = upper;
    while left < right {
        swap(data, left, right);
        left += 1;
        right -= 1;
    }
}

#[inline]
pub fn floor_log2(n: usize) -> usize {
    if n <= 1 {
        0
    } else {
        usize::BITS as usize - 1 - n.leading_zeros() as usize
    }
}

/// Returns whether every adjacent pair of `data` is consistent with
/// `direction` under `compare`.
pub fn is_sorted_by<T, F>(data: &[T], mut compare: F, direction: Direction) -> bool
where
    F: FnMut(&T, &T) -> Ordering,
{
    data.windows(2)
        .all(|pair| direction.is_ordered(compare(&pair[0], &pair[1])))
}
