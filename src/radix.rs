//! Radix sort (4.B): stable LSD radix sort of 64-bit keys with a companion
//! index, in 8-bit and 16-bit digit variants, plus a 16-bit variant whose
//! count-accumulation phase fans out across worker threads.
//!
//! Used by the dispatcher (`dispatch` module) when the key range is too
//! sparse for counting sort to be memory-efficient.

use crate::error::SortResult;
use crate::scratch::zeroed_vec;

const RADIX8_BUCKETS: usize = 256;
const RADIX16_BUCKETS: usize = 65536;

/// Builds the histogram for every digit position in a single pass over
/// `hash`, then converts each histogram to an exclusive prefix-sum (base
/// offset) table. Counting frequencies for digit position `p` is a
/// multiset property of `hash` (it doesn't depend on the current order of
/// elements), so all `passes` histograms can come from one scan of the
/// *original* array, before any redistribution has happened.
fn build_all_offset_tables(
    hash: &[u64],
    width: u32,
    mask: u64,
    passes: usize,
    buckets: usize,
) -> SortResult<Vec<Vec<usize>>> {
    let mut tables: Vec<Vec<usize>> = Vec::with_capacity(passes);
    for _ in 0..passes {
        tables.push(zeroed_vec(buckets, "radix_sort::histogram")?);
    }

    for &h in hash {
        for (p, table) in tables.iter_mut().enumerate() {
            let shift = width * (p as u32);
            let digit = ((h >> shift) & mask) as usize;
            table[digit] += 1;
        }
    }

    for table in tables.iter_mut() {
        let mut running = 0usize;
        for count in table.iter_mut() {
            let freq = *count;
            *count = running;
            running += freq;
        }
    }

    Ok(tables)
}

/// One stable scatter pass: reads `(src_h, src_i)`, writes into
/// `(dst_h, dst_i)` at positions given by `offsets`, which is mutated into
/// a running cursor (the classic "increment after placing" counting-sort
/// write).
fn scatter_pass(
    src_h: &[u64],
    src_i: &[usize],
    dst_h: &mut [u64],
    dst_i: &mut [usize],
    shift: u32,
    mask: u64,
    offsets: &mut [usize],
) {
    for i in 0..src_h.len() {
        let digit = ((src_h[i] >> shift) & mask) as usize;
        let pos = offsets[digit];
        dst_h[pos] = src_h[i];
        dst_i[pos] = src_i[i];
        offsets[digit] += 1;
    }
}

/// Runs the redistribution passes given precomputed offset tables, one per
/// digit position, alternating between the caller's arrays and a shadow
/// pair. Because the pass count is always even (8 passes at 8-bit, 4
/// passes at 16-bit), the final result always lands back in the caller's
/// `hash`/`index` slices.
fn redistribute(
    hash: &mut [u64],
    index: &mut [usize],
    width: u32,
    mask: u64,
    tables: &mut [Vec<usize>],
) -> SortResult<()> {
    let n = hash.len();
    let mut buf_h: Vec<u64> = zeroed_vec(n, "radix_sort::buf_h")?;
    let mut buf_i: Vec<usize> = zeroed_vec(n, "radix_sort::buf_i")?;
    let mut from_original = true;

    for (p, table) in tables.iter_mut().enumerate() {
        let shift = width * (p as u32);
        if from_original {
            scatter_pass(hash, index, &mut buf_h, &mut buf_i, shift, mask, table);
        } else {
            scatter_pass(&buf_h, &buf_i, hash, index, shift, mask, table);
        }
        from_original = !from_original;
    }

    debug_assert!(
        tables.len() % 2 == 0,
        "radix pass count must be even to return data to the caller's buffers"
    );
    Ok(())
}

/// Stable LSD radix sort, 8 bits at a time (8 passes, 256-slot histograms).
pub fn radix_sort_8(hash: &mut [u64], index: &mut [usize]) -> SortResult<()> {
    let n = hash.len();
    if n == 0 {
        return Ok(());
    }
    let mut tables = build_all_offset_tables(hash, 8, 0xff, 8, RADIX8_BUCKETS)?;
    redistribute(hash, index, 8, 0xff, &mut tables)
}

/// Stable LSD radix sort, 16 bits at a time (4 passes, 65536-slot
/// histograms).
pub fn radix_sort_16(hash: &mut [u64], index: &mut [usize]) -> SortResult<()> {
    let n = hash.len();
    if n == 0 {
        return Ok(());
    }
    let mut tables = build_all_offset_tables(hash, 16, 0xffff, 4, RADIX16_BUCKETS)?;
    redistribute(hash, index, 16, 0xffff, &mut tables)
}

/// As [`radix_sort_16`], but the count-accumulation phase (building the 4
/// offset tables) fans out across up to `thread_count` worker threads, one
/// per digit position, each scanning the whole, untouched `hash` slice into
/// a private histogram. There is no shared mutable state during
/// accumulation, so no synchronization is needed beyond the join barrier
/// that `std::thread::scope` provides before redistribution starts.
/// Redistribution itself stays single-threaded: it is memory-bandwidth
/// bound and does not benefit from parallelizing.
///
/// If `thread_count` is less than the 4 digit positions, the remaining
/// positions are computed serially on the calling thread after the
/// parallel ones join.
pub fn radix_sort_16_parallel(
    hash: &mut [u64],
    index: &mut [usize],
    thread_count: usize,
) -> SortResult<()> {
    let n = hash.len();
    if n == 0 {
        return Ok(());
    }

    const PASSES: usize = 4;
    const WIDTH: u32 = 16;
    const MASK: u64 = 0xffff;

    let mut tables: Vec<Vec<usize>> = Vec::with_capacity(PASSES);
    for _ in 0..PASSES {
        tables.push(zeroed_vec(RADIX16_BUCKETS, "radix_sort_16_parallel::histogram")?);
    }

    let par_degree = thread_count.clamp(1, PASSES);
    let hash_ref: &[u64] = hash;
    let (parallel_tables, serial_tables) = tables.split_at_mut(par_degree);

    std::thread::scope(|scope| {
        for (p, table) in parallel_tables.iter_mut().enumerate() {
            let shift = WIDTH * (p as u32);
            scope.spawn(move || {
                count_one_digit(hash_ref, shift, MASK, table);
            });
        }
    });

    for (j, table) in serial_tables.iter_mut().enumerate() {
        let shift = WIDTH * ((par_degree + j) as u32);
        count_one_digit(hash_ref, shift, MASK, table);
    }

    for table in tables.iter_mut() {
        let mut running = 0usize;
        for count in table.iter_mut() {
            let freq = *count;
            *count = running;
            running += freq;
        }
    }

    redistribute(hash, index, WIDTH, MASK, &mut tables)
}

/// Counts occurrences of one digit position across `hash`, leaving raw
/// frequencies (not yet converted to offsets) in `hist`.
fn count_one_digit(hash: &[u64], shift: u32, mask: u64, hist: &mut [usize]) {
    for &h in hash {
        let digit = ((h >> shift) & mask) as usize;
        hist[digit] += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_sorted_and_permutation(hash_in: &[u64], hash_out: &[u64], index: &[usize]) {
        for w in hash_out.windows(2) {
            assert!(w[0] <= w[1]);
        }
        let mut seen = vec![false; hash_in.len()];
        for (k, &i) in index.iter().enumerate() {
            assert!(!seen[i], "index {i} used twice");
            seen[i] = true;
            assert_eq!(hash_out[k], hash_in[i]);
        }
        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn radix16_sorts_sparse_range() {
        let hash_in = vec![1u64 << 40, (1u64 << 40) + 1, 1u64 << 40];
        let mut hash = hash_in.clone();
        let mut index: Vec<usize> = (0..hash.len()).collect();
        radix_sort_16(&mut hash, &mut index).unwrap();
        assert_eq!(hash, vec![1u64 << 40, 1u64 << 40, (1u64 << 40) + 1]);
        assert_eq!(index, vec![0, 2, 1]);
        assert_sorted_and_permutation(&hash_in, &hash, &index);
    }

    #[test]
    fn radix8_matches_radix16() {
        let hash_in: Vec<u64> = (0..5000u64).map(|i| (i * 2654435761) % 999983).collect();
        let mut h8 = hash_in.clone();
        let mut i8: Vec<usize> = (0..h8.len()).collect();
        radix_sort_8(&mut h8, &mut i8).unwrap();

        let mut h16 = hash_in.clone();
        let mut i16_: Vec<usize> = (0..h16.len()).collect();
        radix_sort_16(&mut h16, &mut i16_).unwrap();

        assert_eq!(h8, h16);
        assert_eq!(i8, i16_);
        assert_sorted_and_permutation(&hash_in, &h8, &i8);
    }

    #[test]
    fn parallel_matches_serial() {
        let hash_in: Vec<u64> = (0..20_000u64)
            .map(|i| (i.wrapping_mul(0x9E3779B97F4A7C15)) >> 8)
            .collect();

        let mut serial_h = hash_in.clone();
        let mut serial_i: Vec<usize> = (0..serial_h.len()).collect();
        radix_sort_16(&mut serial_h, &mut serial_i).unwrap();

        let mut par_h = hash_in.clone();
        let mut par_i: Vec<usize> = (0..par_h.len()).collect();
        radix_sort_16_parallel(&mut par_h, &mut par_i, 4).unwrap();

        assert_eq!(serial_h, par_h);
        assert_eq!(serial_i, par_i);
    }

    #[test]
    fn parallel_with_fewer_threads_than_digits() {
        let hash_in: Vec<u64> = (0..3000u64).map(|i| i.wrapping_mul(7919)).collect();
        let mut h = hash_in.clone();
        let mut idx: Vec<usize> = (0..h.len()).collect();
        radix_sort_16_parallel(&mut h, &mut idx, 2).unwrap();
        assert_sorted_and_permutation(&hash_in, &h, &idx);
    }

    #[test]
    fn empty_is_noop() {
        let mut hash: Vec<u64> = vec![];
        let mut index: Vec<usize> = vec![];
        radix_sort_16(&mut hash, &mut index).unwrap();
        radix_sort_8(&mut hash, &mut index).unwrap();
        radix_sort_16_parallel(&mut hash, &mut index, 4).unwrap();
    }
}
