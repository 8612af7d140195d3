use std::cmp::Ordering;

use crate::algorithms::common::swap;
use crate::{Direction, TUNED_PARAMS};

/// Comb sort: bubble passes over a gap that shrinks by the tuned factor down to 1.
///
/// Passes at gap 1 are capped at `data.len()`, enough for any total preorder, so
/// an inconsistent `compare` still returns with every element in place.
pub fn comb_sort_by<T, F>(data: &mut [T], mut compare: F, direction: Direction)
where
    F: FnMut(&T, &T) -> Ordering,
{
    let len = data.len();
    if len < 2 {
        return;
    }

    let mut is_less = |a: &T, b: &T| direction.orient(compare(a, b)) == Ordering::Less;
    let mut gap = len;
    let mut unit_passes = 0_usize;
    loop {
        gap = shrink_gap(gap);
        let swapped = comb_pass(data, gap, &mut is_less);
        if gap == 1 {
            unit_passes += 1;
            if !swapped || unit_passes >= len {
                break;
            }
        }
    }
}

#[inline]
fn shrink_gap(gap: usize) -> usize {
    ((gap as f64 / TUNED_PARAMS.comb_shrink_factor) as usize).max(1)
}

/// Compares every pair `(k, k + gap)` and exchanges those out of order.
/// Returns whether any exchange happened.
fn comb_pass<T, F>(data: &mut [T], gap: usize, is_less: &mut F) -> bool
where
    F: FnMut(&T, &T) -> bool,
{
    let mut swapped = false;
    for k in 0..data.len().saturating_sub(gap) {
        if is_less(&data[k + gap], &data[k]) {
            swap(data, k, k + gap);
            swapped = true;
        }
    }
    swapped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ascending_small() {
        let mut data = vec![5, 3, 1, 4, 2];
        comb_sort_by(&mut data, Ord::cmp, Direction::Ascending);
        assert_eq!(data, [1, 2, 3, 4, 5]);
    }

    #[test]
    fn descending_small() {
        let mut data = vec![5, 3, 1, 4, 2];
        comb_sort_by(&mut data, Ord::cmp, Direction::Descending);
        assert_eq!(data, [5, 4, 3, 2, 1]);
    }

    #[test]
    fn gap_shrinks_to_one() {
        let mut gap = 1000;
        let mut steps = Vec::new();
        while gap != 1 {
            gap = shrink_gap(gap);
            steps.push(gap);
        }
        assert_eq!(&steps[..4], &[769, 591, 454, 349]);
        assert!(steps.windows(2).all(|w| w[0] > w[1]));
        assert_eq!(shrink_gap(1), 1);
        assert_eq!(shrink_gap(2), 1);
    }

    #[test]
    fn sorted_input_never_exchanges() {
        let mut data = (0..200).collect::<Vec<u32>>();
        let mut is_less = |a: &u32, b: &u32| a < b;
        let mut gap = data.len();
        while gap != 1 {
            gap = shrink_gap(gap);
            assert!(!comb_pass(&mut data, gap, &mut is_less), "gap={gap}");
        }
        assert!(data.iter().copied().eq(0..200));
    }

    #[test]
    fn pass_reports_exchange() {
        let mut data = vec![2, 1, 3];
        let mut is_less = |a: &i32, b: &i32| a < b;
        assert!(comb_pass(&mut data, 1, &mut is_less));
        assert_eq!(data, [1, 2, 3]);
        assert!(!comb_pass(&mut data, 1, &mut is_less));
    }

    #[test]
    fn inconsistent_compare_returns() {
        let mut data = vec![1, 2, 3];
        comb_sort_by(&mut data, |_, _| Ordering::Less, Direction::Ascending);
        data.sort();
        assert_eq!(data, [1, 2, 3]);

        let original = (0..50).map(|i| format!("v{i:02}")).collect::<Vec<_>>();
        let mut data = original.clone();
        let mut flip = false;
        comb_sort_by(
            &mut data,
            |_, _| {
                flip = !flip;
                if flip { Ordering::Greater } else { Ordering::Less }
            },
            Direction::Descending,
        );
        data.sort();
        assert_eq!(data, original);
    }

    #[test]
    fn reversed_input_within_unit_pass_cap() {
        let mut data = (0..300).rev().collect::<Vec<u32>>();
        comb_sort_by(&mut data, Ord::cmp, Direction::Ascending);
        assert!(data.iter().copied().eq(0..300));
    }

    #[test]
    fn turtles_at_the_end() {
        let mut data = (1..=100).collect::<Vec<i32>>();
        data.push(0);
        data.push(-1);
        comb_sort_by(&mut data, Ord::cmp, Direction::Ascending);
        assert!(data.iter().copied().eq(-1..=100));
    }
}
