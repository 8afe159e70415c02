//! Burstsort: a trie-bucketing string sort over the same virtual-character
//! primitive ([`crate::core::char_at`]) the multikey quicksort kernels use.
//!
//! Burstsort distributes strings into 256 buckets keyed by `char_at(s,
//! depth)`. Each trie level is one pass of 256-bucket counting distribution
//! (histogram, prefix-sum offsets, permute-through-buffer), which "bursts"
//! recursively into the next character position, exactly like a single level
//! of a byte-wise radix sort repeated down the trie.

use crate::algo::insertion_sort;
use crate::core::char_at;

/// Buckets smaller than this are finished with insertion sort rather than
/// bursting further.
const BURST_THRESHOLD: usize = 16;

/// Number of buckets per level: one per byte value.
const BUCKETS: usize = 256;

/// Sorts `items` in place using burstsort.
pub fn burstsort<T: AsRef<[u8]> + Clone>(items: &mut [T]) {
    if items.len() <= 1 {
        return;
    }
    burst(items, 0);
}

fn burst<T: AsRef<[u8]> + Clone>(items: &mut [T], depth: usize) {
    let n = items.len();
    if n <= BURST_THRESHOLD {
        insertion_sort(items, 0, n, depth);
        return;
    }

    let mut counts = [0usize; BUCKETS];
    for item in items.iter() {
        counts[char_at(item, depth) as usize] += 1;
    }

    // Degenerate: every item shares the same character at this depth. Bucket
    // 0 is the virtual-zero (exhausted-key) leaf and is never bursted again
    // regardless; for any other single dominant bucket, recursing would just
    // reproduce the same partition forever, so fall back to insertion sort.
    if counts.iter().any(|&c| c == n) {
        insertion_sort(items, 0, n, depth);
        return;
    }

    let mut offsets = [0usize; BUCKETS];
    let mut sum = 0;
    for (offset, &count) in offsets.iter_mut().zip(counts.iter()) {
        *offset = sum;
        sum += count;
    }

    let scratch = items.to_vec();
    let mut cursor = offsets;
    for item in scratch.iter() {
        let b = char_at(item, depth) as usize;
        items[cursor[b]] = item.clone();
        cursor[b] += 1;
    }

    // Recurse per bucket; bucket 0 (exhausted keys) is already in its final
    // position and is skipped, mirroring the all-zeros pruning of mkqsort.
    let mut start = counts[0];
    for &count in counts.iter().skip(1) {
        let end = start + count;
        if count > 1 {
            burst(&mut items[start..end], depth + 1);
        }
        start = end;
    }
}
