//! The benchmark harness's fixed sorter roster.
//!
//! Five sorters are compared; the roster is small and closed, so it is
//! represented as a tagged enum rather than a trait-object hierarchy.

use crate::algo::{multikey1, multikey2};
use crate::burstsort::burstsort;

/// One entry in the benchmark's sorter roster.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Runner {
    /// The standard library's stable sort.
    Mergesort,
    /// The standard library's unstable pattern-defeating quicksort.
    Quicksort,
    /// Multikey quicksort, randomized pivot.
    Multikey1,
    /// Multikey quicksort, median-of-three / pseudo-median-of-nine pivot.
    Multikey2,
    /// Trie-bucketing burstsort.
    Burstsort,
}

impl Runner {
    /// All roster entries, in display order.
    pub fn all() -> [Runner; 5] {
        [
            Runner::Mergesort,
            Runner::Quicksort,
            Runner::Multikey1,
            Runner::Multikey2,
            Runner::Burstsort,
        ]
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Runner::Mergesort => "Mergesort",
            Runner::Quicksort => "Quicksort",
            Runner::Multikey1 => "Multikey 1",
            Runner::Multikey2 => "Multikey 2",
            Runner::Burstsort => "Burstsort",
        }
    }

    /// Sorts `data` in place with this runner's algorithm.
    pub fn sort(self, data: &mut Vec<String>) {
        match self {
            Runner::Mergesort => data.sort(),
            Runner::Quicksort => data.sort_unstable(),
            Runner::Multikey1 => multikey1(Some(data.as_mut_slice())).expect("non-null array"),
            Runner::Multikey2 => multikey2(Some(data.as_mut_slice())).expect("non-null array"),
            Runner::Burstsort => burstsort(data.as_mut_slice()),
        }
    }
}
