use std::cmp::Ordering;

use log::trace;

use crate::algorithms::common::transpose;
use crate::algorithms::gap_sequence::generate_gap_sequence;
use crate::algorithms::insertion_sort::insertion_sort_gapped;
use crate::{Direction, SortError};

/// Shell sort driven by the Ciura gap sequence extended for `data.len()`.
///
/// The only allocation is the gap buffer; if it cannot be obtained the error
/// is returned before `data` is touched.
pub fn shell_sort_by<T, F>(
    data: &mut [T],
    mut compare: F,
    direction: Direction,
) -> Result<(), SortError>
where
    F: FnMut(&T, &T) -> Ordering,
{
    let len = data.len();
    let mut gaps = generate_gap_sequence(len)?;
    let upper = gaps.len() - 1;
    transpose(&mut gaps, upper);
    trace!("shell sort len={len} passes={} gaps={gaps:?}", gaps.len());

    if len < 2 {
        return Ok(());
    }

    let mut is_less = |a: &T, b: &T| direction.orient(compare(a, b)) == Ordering::Less;
    for &gap in &gaps {
        insertion_sort_gapped(data, gap, &mut is_less);
    }
    debug_assert_eq!(gaps.last(), Some(&1));
    Ok(())
}
