//! Byte-offset comparators (4.G): comparator functions over fixed-stride
//! records keyed at a byte offset, for the general-sort fallback path (the
//! case where keys aren't hashed to a `u64`/`u128` and `sort_hash` doesn't
//! apply).
//!
//! Each comparator reads its key out of a record at a fixed `usize` offset
//! and returns a [`std::cmp::Ordering`], so the set slots directly into
//! [`[T]::sort_by`] / [`[T]::sort_unstable_by`] without an adapter. Each has
//! an ascending and a descending form; the descending forms are not `rev()`
//! wrappers around the ascending ones but independent functions, matching
//! the original's paired `*Invert` comparators.

use std::cmp::Ordering;

/// Ascending comparator over an `f64` key read from byte offset `kstart`
/// within each fixed-stride `record`. Uses [`f64::total_cmp`] (a total
/// order by bit pattern) so NaN keys sort consistently instead of
/// panicking or comparing unordered.
pub fn compare_num(kstart: usize, a: &[u8], b: &[u8]) -> Ordering {
    read_f64(a, kstart).total_cmp(&read_f64(b, kstart))
}

/// Descending counterpart of [`compare_num`].
pub fn compare_num_invert(kstart: usize, a: &[u8], b: &[u8]) -> Ordering {
    read_f64(b, kstart).total_cmp(&read_f64(a, kstart))
}

/// Ascending comparator over a NUL-terminated byte-string key starting at
/// offset `kstart`.
pub fn compare_char(kstart: usize, a: &[u8], b: &[u8]) -> Ordering {
    read_cstr(a, kstart).cmp(read_cstr(b, kstart))
}

/// Descending counterpart of [`compare_char`].
pub fn compare_char_invert(kstart: usize, a: &[u8], b: &[u8]) -> Ordering {
    read_cstr(b, kstart).cmp(read_cstr(a, kstart))
}

/// Ascending comparator over a `u64` key at offset `kstart`, for records
/// that carry a precomputed hash (the general-sort fallback's analogue of
/// `sort_hash`'s own key, used when the caller wants one comparator table
/// to cover both the hashed and unhashed cases uniformly).
pub fn compare_hashed(kstart: usize, a: &[u8], b: &[u8]) -> Ordering {
    read_u64(a, kstart).cmp(&read_u64(b, kstart))
}

fn read_f64(record: &[u8], kstart: usize) -> f64 {
    f64::from_ne_bytes(record[kstart..kstart + 8].try_into().unwrap())
}

fn read_u64(record: &[u8], kstart: usize) -> u64 {
    u64::from_ne_bytes(record[kstart..kstart + 8].try_into().unwrap())
}

/// Reads a NUL-terminated byte string starting at `kstart`; if no NUL
/// appears before the end of `record`, the whole remainder is the key.
fn read_cstr(record: &[u8], kstart: usize) -> &[u8] {
    let tail = &record[kstart..];
    match tail.iter().position(|&b| b == 0) {
        Some(end) => &tail[..end],
        None => tail,
    }
}
