pub mod comb_sort;
pub mod common;
pub mod gap_sequence;
pub mod insertion_sort;
pub mod shell_sort_ciura;
