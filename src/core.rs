//! Core primitives shared by every sort kernel in this crate.
//!
//! This module defines:
//! - [`char_at`]: the virtual-character access model that makes every string
//!   behave as if zero-padded to infinity.
//! - [`med3`]: the median-of-three index selector used by M2's pivot rule.
//! - [`compare_from`]: a full lexicographic comparison from a given depth,
//!   used by the insertion-sort base case and by property tests.

use std::cmp::Ordering;

/// Virtual character access.
///
/// Returns `s[d]` if `d` is within bounds, otherwise the sentinel `0`. This is
/// the single primitive that all recursion in this crate is built on: changing
/// it to a different backend (e.g. UTF-16 code units) changes the ordering
/// everywhere at once, which is the point.
///
/// Kept branch-light on purpose: it is called once per compared character per
/// recursion level and dominates cache behavior in the sort kernels.
#[inline(always)]
pub(crate) fn char_at<T: AsRef<[u8]> + ?Sized>(s: &T, d: usize) -> u8 {
    let bytes = s.as_ref();
    if d < bytes.len() { bytes[d] } else { 0 }
}

/// Returns the index among `l, m, h` whose character at `depth` is the median
/// of the three, breaking ties the way Bentley & Sedgewick's original
/// `mkqsort` does.
#[inline]
pub(crate) fn med3<T: AsRef<[u8]>>(arr: &[T], l: usize, m: usize, h: usize, depth: usize) -> usize {
    let va = char_at(&arr[l], depth);
    let vb = char_at(&arr[m], depth);
    let vc = char_at(&arr[h], depth);

    if va == vb {
        l
    } else if vc == va || vc == vb {
        h
    } else if va < vb {
        if vb < vc { m } else if va < vc { h } else { l }
    } else if vb > vc {
        m
    } else if va > vc {
        h
    } else {
        l
    }
}

/// Lexicographic comparison of two strings restricted to character positions
/// `>= depth`, with zero-padding beyond each string's own length.
///
/// Used by the insertion-sort base case and exercised directly by property
/// tests that check agreement with a reference sort.
#[inline]
pub(crate) fn compare_from<T: AsRef<[u8]>>(a: &T, b: &T, depth: usize) -> Ordering {
    let (a, b) = (a.as_ref(), b.as_ref());
    let mut d = depth;
    loop {
        let ca = if d < a.len() { a[d] } else { 0 };
        let cb = if d < b.len() { b[d] } else { 0 };
        match ca.cmp(&cb) {
            Ordering::Equal => {
                if ca == 0 {
                    return Ordering::Equal;
                }
                d += 1;
            }
            other => return other,
        }
    }
}
