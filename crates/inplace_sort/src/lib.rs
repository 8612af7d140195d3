mod algorithms;

use std::cmp::Ordering;
use std::collections::TryReserveError;

pub use algorithms::comb_sort::comb_sort_by;
pub use algorithms::common::{floor_log2, is_sorted_by, swap, transpose};
pub use algorithms::gap_sequence::{CIURA_GAPS, gap_sequence_capacity, generate_gap_sequence};
pub use algorithms::insertion_sort::insertion_sort_by;
pub use algorithms::shell_sort_ciura::shell_sort_by;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Requested order of the sorted output.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub enum Direction {
    #[default]
    Ascending,
    Descending,
}

impl Direction {
    /// Maps a comparison result onto this direction, so that `Less` always
    /// means "belongs earlier".
    #[inline]
    pub fn orient(self, ord: Ordering) -> Ordering {
        match self {
            Self::Ascending => ord,
            Self::Descending => ord.reverse(),
        }
    }

    /// Whether a pair comparing as `ord` may stay in its current order.
    #[inline]
    pub fn is_ordered(self, ord: Ordering) -> bool {
        self.orient(ord) != Ordering::Greater
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SortError {
    #[error("failed to allocate {what} ({len} elements)")]
    Allocation {
        what: &'static str,
        len: usize,
        #[source]
        source: TryReserveError,
    },
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum SortAlgorithm {
    CombSort,
    InsertionSort,
    ShellSortCiura,
}

pub const ALL_ALGORITHMS: [SortAlgorithm; 3] = [
    SortAlgorithm::CombSort,
    SortAlgorithm::InsertionSort,
    SortAlgorithm::ShellSortCiura,
];

pub fn all_algorithms() -> &'static [SortAlgorithm] {
    &ALL_ALGORITHMS
}

pub fn algorithm_name(algo: SortAlgorithm) -> &'static str {
    match algo {
        SortAlgorithm::CombSort => "comb_sort",
        SortAlgorithm::InsertionSort => "insertion_sort",
        SortAlgorithm::ShellSortCiura => "shell_sort_ciura",
    }
}

/// None of the algorithms here keep equal elements in their input order.
pub fn is_stable(algo: SortAlgorithm) -> bool {
    match algo {
        SortAlgorithm::CombSort => false,
        SortAlgorithm::InsertionSort => false,
        SortAlgorithm::ShellSortCiura => false,
    }
}

/// Whether the algorithm needs a heap allocation and can therefore fail with
/// [`SortError::Allocation`].
pub fn allocates(algo: SortAlgorithm) -> bool {
    matches!(algo, SortAlgorithm::ShellSortCiura)
}

#[derive(Clone, Copy, Debug)]
pub struct TunedParams {
    pub comb_shrink_factor: f64,
    pub gap_growth_factor: f64,
}

pub const TUNED_PARAMS: TunedParams = TunedParams {
    comb_shrink_factor: 1.3,
    gap_growth_factor: 2.25,
};

pub fn sort<T: Ord>(
    algo: SortAlgorithm,
    data: &mut [T],
    direction: Direction,
) -> Result<(), SortError> {
    sort_by(algo, data, T::cmp, direction)
}

/// Sorts `data` in place with `algo`.
///
/// `compare` must be a total preorder; otherwise the resulting order is
/// unspecified, but the call still returns and every element is present
/// exactly once.
pub fn sort_by<T, F>(
    algo: SortAlgorithm,
    data: &mut [T],
    compare: F,
    direction: Direction,
) -> Result<(), SortError>
where
    F: FnMut(&T, &T) -> Ordering,
{
    match algo {
        SortAlgorithm::CombSort => {
            comb_sort_by(data, compare, direction);
            Ok(())
        }
        SortAlgorithm::InsertionSort => {
            insertion_sort_by(data, compare, direction);
            Ok(())
        }
        SortAlgorithm::ShellSortCiura => shell_sort_by(data, compare, direction),
    }
}
