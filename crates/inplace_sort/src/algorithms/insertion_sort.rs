use std::cmp::Ordering;
use std::mem::ManuallyDrop;
use std::ptr;

use crate::Direction;

/// Insertion sort that shifts each element left past every predecessor ordered after it.
pub fn insertion_sort_by<T, F>(data: &mut [T], mut compare: F, direction: Direction)
where
    F: FnMut(&T, &T) -> Ordering,
{
    let mut is_less = |a: &T, b: &T| direction.orient(compare(a, b)) == Ordering::Less;
    insertion_sort_gapped(data, 1, &mut is_less);
}

/// Insertion sort over the `gap` interleaved subsequences of `data`.
///
/// With `gap == 1` this is plain insertion sort. Gaps `>= data.len()` leave
/// the slice untouched.
pub(crate) fn insertion_sort_gapped<T, F>(data: &mut [T], gap: usize, is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    debug_assert!(gap > 0);
    let len = data.len();
    if len < 2 || gap >= len {
        return;
    }

    for i in gap..len {
        // SAFETY: gap <= i < len.
        unsafe {
            insert_tail_gapped(data, i, gap, is_less);
        }
    }
}

/// Holds the element lifted out of the slice and writes it back into `pos`
/// when dropped, so the slice is whole again even if `is_less` panics.
struct GapGuard<T> {
    pos: *mut T,
    value: ManuallyDrop<T>,
}

impl<T> Drop for GapGuard<T> {
    fn drop(&mut self) {
        // SAFETY: `pos` always points at the single vacated slot.
        unsafe {
            ptr::copy_nonoverlapping(&*self.value, self.pos, 1);
        }
    }
}

/// Moves `data[i]` left in steps of `gap` until the element `gap` slots
/// before it is not greater, assuming that subsequence is already ordered.
///
/// # Safety
///
/// Caller must guarantee `gap > 0` and `gap <= i < data.len()`.
unsafe fn insert_tail_gapped<T, F>(data: &mut [T], i: usize, gap: usize, is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    debug_assert!(gap > 0 && gap <= i && i < data.len());

    let base = data.as_mut_ptr();
    unsafe {
        let tail = base.add(i);
        if !is_less(&*tail, &*tail.sub(gap)) {
            return;
        }

        let mut guard = GapGuard {
            pos: tail,
            value: ManuallyDrop::new(ptr::read(tail)),
        };

        let mut j = i;
        loop {
            let prev = base.add(j - gap);
            ptr::copy_nonoverlapping(prev, guard.pos, 1);
            guard.pos = prev;
            j -= gap;

            if j < gap || !is_less(&*guard.value, &*base.add(j - gap)) {
                break;
            }
        }
        // `guard` drops here and fills the hole at `j`.
    }
}
