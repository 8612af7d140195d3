use crate::algorithms::common::floor_log2;
use crate::{SortError, TUNED_PARAMS};

/// Ciura's empirically derived shell sort gaps, ascending.
pub const CIURA_GAPS: [usize; 9] = [1, 4, 10, 23, 57, 132, 301, 701, 1750];

/// Number of slots reserved for the gaps of a `len`-element input.
///
/// Every seed after the first exceeds `floor_log2` of itself and derived gaps
/// grow by more than 2x per step, so the sequence never outgrows this bound.
#[inline]
pub fn gap_sequence_capacity(len: usize) -> usize {
    CIURA_GAPS.len() + floor_log2(len)
}

/// Builds the ascending gap sequence for shell sorting `len` elements.
///
/// The sequence always starts at 1 and every other gap is `< len`. Seeds are
/// taken from [`CIURA_GAPS`]; once the table is exhausted each new gap is the
/// previous one scaled by the growth factor, truncated and forced odd.
pub fn generate_gap_sequence(len: usize) -> Result<Vec<usize>, SortError> {
    let capacity = gap_sequence_capacity(len);
    let mut gaps = Vec::new();
    gaps.try_reserve_exact(capacity)
        .map_err(|source| SortError::Allocation {
            what: "gap sequence",
            len: capacity,
            source,
        })?;

    gaps.push(CIURA_GAPS[0]);
    for &gap in &CIURA_GAPS[1..] {
        if gap >= len {
            return Ok(gaps);
        }
        gaps.push(gap);
    }

    let mut gap = next_gap(CIURA_GAPS[CIURA_GAPS.len() - 1]);
    while gap < len {
        gaps.push(gap);
        gap = next_gap(gap);
    }

    debug_assert!(gaps.len() <= capacity);
    Ok(gaps)
}

#[inline]
fn next_gap(gap: usize) -> usize {
    // Float to int casts saturate, so this stays well defined near usize::MAX.
    ((gap as f64 * TUNED_PARAMS.gap_growth_factor) as usize) | 1
}
