//! Multikey quicksort (CPU-efficient three-way string quicksort).
//!
//! This module implements the character-indexed multikey quicksort family:
//! - [`multikey1`] / [`multikey2`]: the public in-place entry points.
//! - [`mkqsort`]: the range- and depth-restricted M2 engine.
//! - [`insertion_sort`]: the depth-aware small-range base case.
//!
//! Both variants share a single partition routine ([`partition_once`]), a
//! four-cursor Bentley–McIlroy Dutch-flag three-way split that buckets a
//! range into `< pivot`, `== pivot`, `> pivot` at one character position, then
//! recurses on the equal band one character deeper. They differ only in pivot
//! selection and recursion discipline: M1 picks a uniformly random pivot and
//! recurses naively; M2 uses a pseudo-median-of-nine pivot, cuts over to
//! insertion sort below 8 elements, and always recurses into the smaller of
//! the less/greater bands to bound stack depth at `O(log n)`.

use crate::core::{char_at, compare_from, med3};
use crate::error::SortError;
use rand::Rng;
use std::cmp::Ordering;

/// Below this many elements, `mkqsort` falls back to insertion sort.
const INSERTION_SORT_CUTOFF: usize = 8;

/// Above this many elements, M2's pivot is a pseudo-median of nine rather
/// than a plain median of three.
const PSEUDO_MEDIAN_CUTOFF: usize = 30;

/// Sorts `strings` in place using multikey quicksort with a randomized pivot
/// (the pedagogical M1 variant).
///
/// `strings` being `None` models an absent array (Rust has no null
/// references); this returns [`SortError::NullArray`] rather than panicking.
/// An empty or single-element array returns immediately.
pub fn multikey1<T: AsRef<[u8]>>(strings: Option<&mut [T]>) -> Result<(), SortError> {
    let arr = strings.ok_or(SortError::NullArray)?;
    if arr.len() <= 1 {
        return Ok(());
    }
    let mut rng = rand::rng();
    m1_recurse(arr, 0, &mut rng);
    Ok(())
}

/// Sorts `strings` in place using multikey quicksort with median-of-three /
/// pseudo-median-of-nine pivot selection and an insertion-sort cutoff (the
/// production M2 variant). Same preconditions as [`multikey1`].
pub fn multikey2<T: AsRef<[u8]>>(strings: Option<&mut [T]>) -> Result<(), SortError> {
    let arr = strings.ok_or(SortError::NullArray)?;
    if arr.len() <= 1 {
        return Ok(());
    }
    mkqsort_slice(arr, 0);
    Ok(())
}

/// Range- and depth-restricted entry point into the M2 engine.
///
/// Sorts `array[lo..hi)` comparing strings from character offset `depth`
/// onward. Unlike [`multikey1`]/[`multikey2`] this takes a concrete slice: it
/// is meant for composing custom recursion schedules over a range the caller
/// already knows is non-null.
pub fn mkqsort<T: AsRef<[u8]>>(array: &mut [T], lo: usize, hi: usize, depth: usize) {
    mkqsort_slice(&mut array[lo..hi], depth);
}

/// Depth-aware insertion sort: sorts `array[lo..hi)` comparing strings from
/// character offset `depth` onward. Used as the base case below
/// [`INSERTION_SORT_CUTOFF`] elements, and directly usable on its own for
/// small ranges.
pub fn insertion_sort<T: AsRef<[u8]>>(array: &mut [T], lo: usize, hi: usize, depth: usize) {
    insertion_sort_slice(&mut array[lo..hi], depth);
}

/// `MultikeyQuicksort::sort` is an in-place three-way string sort at depth 0
/// over the full range: an alias for [`multikey2`].
pub struct MultikeyQuicksort;

impl MultikeyQuicksort {
    pub fn sort<T: AsRef<[u8]>>(strings: Option<&mut [T]>) -> Result<(), SortError> {
        multikey2(strings)
    }
}

fn insertion_sort_slice<T: AsRef<[u8]>>(arr: &mut [T], depth: usize) {
    for i in 1..arr.len() {
        let mut j = i;
        while j > 0 && compare_from(&arr[j], &arr[j - 1], depth) == Ordering::Less {
            arr.swap(j, j - 1);
            j -= 1;
        }
    }
}

fn m1_recurse<T: AsRef<[u8]>, R: Rng>(arr: &mut [T], depth: usize, rng: &mut R) {
    let n = arr.len();
    if n <= 1 {
        return;
    }
    let pivot_idx = rng.random_range(0..n);
    let (less_len, eq_len, all_zeros) = partition_once(arr, pivot_idx, depth);

    let (left, rest) = arr.split_at_mut(less_len);
    let (mid, right) = rest.split_at_mut(eq_len);

    if left.len() > 1 {
        m1_recurse(left, depth, rng);
    }
    if !all_zeros && mid.len() > 1 {
        m1_recurse(mid, depth + 1, rng);
    }
    if right.len() > 1 {
        m1_recurse(right, depth, rng);
    }
}

/// The M2 engine. Iterates on the larger of the less/greater bands and
/// recurses on the smaller one, bounding the call stack at `O(log n)`.
fn mkqsort_slice<T: AsRef<[u8]>>(mut arr: &mut [T], mut depth: usize) {
    loop {
        let n = arr.len();
        if n < INSERTION_SORT_CUTOFF {
            insertion_sort_slice(arr, depth);
            return;
        }

        let pivot_idx = pivot_m2(arr, depth);
        let (less_len, eq_len, all_zeros) = partition_once(arr, pivot_idx, depth);

        let (left, rest) = arr.split_at_mut(less_len);
        let (mid, right) = rest.split_at_mut(eq_len);

        if left.len() <= right.len() {
            if left.len() > 1 {
                mkqsort_slice(left, depth);
            }
            if !all_zeros && mid.len() > 1 {
                mkqsort_slice(mid, depth + 1);
            }
            if right.len() <= 1 {
                return;
            }
            arr = right;
        } else {
            if right.len() > 1 {
                mkqsort_slice(right, depth);
            }
            if !all_zeros && mid.len() > 1 {
                mkqsort_slice(mid, depth + 1);
            }
            if left.len() <= 1 {
                return;
            }
            arr = left;
        }
    }
}

/// Median-of-three / pseudo-median-of-nine pivot index for M2.
fn pivot_m2<T: AsRef<[u8]>>(arr: &[T], depth: usize) -> usize {
    let n = arr.len();
    let mut pl = 0;
    let mut pm = n / 2;
    let mut pn = n - 1;

    if n > PSEUDO_MEDIAN_CUTOFF {
        let d = n / 8;
        pl = med3(arr, pl, pl + d, pl + 2 * d, depth);
        pm = med3(arr, pm - d, pm, pm + d, depth);
        pn = med3(arr, pn - 2 * d, pn - d, pn, depth);
    }
    med3(arr, pl, pm, pn, depth)
}

/// The shared three-way Dutch-flag partition (Bentley–McIlroy).
///
/// Moves the element at `pivot_idx` to the front, partitions the rest of
/// `arr` around `charAt(pivot, depth)`, and returns `(less_len, eq_len,
/// all_zeros)`: the range `arr[0..less_len)` holds the less-than band,
/// `arr[less_len..less_len+eq_len)` the equal band, and the remainder the
/// greater-than band.
///
/// `all_zeros` is true exactly when the pivot character is the virtual
/// sentinel `0` *and* no greater-than element was found during the scan —
/// equivalently, every string in this partition has already terminated by
/// `depth`. When true, the equal band is skipped by callers rather than
/// recursed into at `depth + 1`.
fn partition_once<T: AsRef<[u8]>>(arr: &mut [T], pivot_idx: usize, depth: usize) -> (usize, usize, bool) {
    let n = arr.len();
    arr.swap(0, pivot_idx);
    let v = char_at(&arr[0], depth);

    let mut le = 1usize;
    let mut lt = 1usize;
    let mut gt = n - 1;
    let mut ge = n - 1;

    loop {
        while lt <= gt {
            let c = char_at(&arr[lt], depth);
            if c > v {
                break;
            }
            if c == v {
                arr.swap(le, lt);
                le += 1;
            }
            lt += 1;
        }
        while gt >= lt {
            let c = char_at(&arr[gt], depth);
            if c < v {
                break;
            }
            if c == v {
                arr.swap(gt, ge);
                ge -= 1;
            }
            gt -= 1;
        }
        if lt > gt {
            break;
        }
        arr.swap(lt, gt);
        lt += 1;
        gt -= 1;
    }

    let r1 = std::cmp::min(le, lt - le);
    vecswap(arr, 0, lt - r1, r1);
    let r2 = std::cmp::min(ge - gt, n - 1 - ge);
    vecswap(arr, lt, n - r2, r2);

    let less_len = lt - le;
    let greater_len = ge - gt;
    let eq_len = n - less_len - greater_len;
    let all_zeros = v == 0 && greater_len == 0;

    (less_len, eq_len, all_zeros)
}

fn vecswap<T>(arr: &mut [T], mut i: usize, mut j: usize, mut n: usize) {
    while n > 0 {
        arr.swap(i, j);
        i += 1;
        j += 1;
        n -= 1;
    }
}
