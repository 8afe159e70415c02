//! # multikey-sort
//!
//! A small library of **character-indexed string sorts** — three-way
//! multikey quicksort and burstsort — together with a benchmark harness that
//! compares them against the standard library's generic comparison sorts.
//!
//! Both algorithms partition on one character position at a time rather than
//! re-scanning whole keys on every comparison, which is what lets them beat a
//! generic comparison sort on large arrays of strings with shared prefixes.
//!
//! ## Key Features
//!
//! - **Character-indexed partitioning**: every kernel is built on
//!   [`char_at`](crate::core)'s virtual-character model, under which a string
//!   behaves as if zero-padded to infinity.
//! - **Two multikey quicksort variants**: [`multikey1`] (randomized pivot,
//!   pedagogical) and [`multikey2`] (median-of-three / pseudo-median-of-nine
//!   pivot, insertion-sort cutoff, bounded stack depth).
//! - **Burstsort**: a trie-bucketing sort over the same character primitive,
//!   see [`burstsort`].
//! - **In-place**: every sort mutates its input slice; none allocate a
//!   parallel index array or copy individual elements beyond ordinary swaps.
//!
//! ## Usage
//!
//! ```rust
//! use multikey_sort::multikey2;
//!
//! let mut data = vec!["banana", "apple", "cherry", "date"];
//! multikey2(Some(&mut data)).unwrap();
//!
//! assert_eq!(data, vec!["apple", "banana", "cherry", "date"]);
//! ```
//!
//! Rust has no null references, so the "absent array" precondition from the
//! systems this crate's algorithms originate in is modeled as `Option::None`:
//!
//! ```rust
//! use multikey_sort::{multikey2, SortError};
//!
//! let result: Result<(), SortError> = multikey2::<String>(None);
//! assert!(matches!(result, Err(SortError::NullArray)));
//! ```
//!
//! ## Performance characteristics
//!
//! - **Best case**: close to `O(n)` when keys are distinct and distinguished
//!   by short prefixes.
//! - **Worst case**: `O(n log n)`, same as a generic three-way quicksort.
//! - **Memory**: `O(log n)` auxiliary stack under M2's bounded-recursion
//!   discipline; no heap allocation in the sort kernels themselves.

pub mod algo;
pub mod burstsort;
pub mod core;
pub mod driver;
pub mod error;
pub mod generators;
pub mod runners;

pub use algo::{MultikeyQuicksort, insertion_sort, mkqsort, multikey1, multikey2};
pub use burstsort::burstsort;
pub use error::{GeneratorError, SortError};

pub mod prelude {
    pub use crate::algo::{MultikeyQuicksort, insertion_sort, mkqsort, multikey1, multikey2};
    pub use crate::burstsort::burstsort;
    pub use crate::error::{GeneratorError, SortError};
}
