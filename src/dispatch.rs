//! Sort dispatcher (4.C) and the `sort_hash` entry point (§6).
//!
//! Chooses counting sort vs radix sort based on key-range density, and
//! within radix sort, chooses the configured digit width and whether the
//! count-accumulation phase runs in parallel.

use crate::config::{DigitWidth, SortConfig};
use crate::counting::counting_sort;
use crate::error::{SortError, SortResult};
use crate::radix::{radix_sort_8, radix_sort_16, radix_sort_16_parallel};

/// Which strategy `sort_hash` ended up using. Purely informational (the
/// out-of-scope host printing layer would have surfaced this as a verbose
/// log line in the original); here it's a typed field the caller may
/// inspect or ignore.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// `N = 0`; nothing to do.
    Empty,
    /// Dense key range, counting sort.
    Counting,
    /// Sparse key range, serial radix sort.
    Radix,
    /// Sparse key range, radix sort with parallel count-accumulation.
    RadixParallel,
}

/// Informational summary of a `sort_hash` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortReport {
    pub strategy: Strategy,
    /// `max(hash) - min(hash) + 1` at entry, or 0 if `N = 0`.
    pub range: u64,
}

/// Sorts `hash` ascending in place, stably, permuting `index` to match.
///
/// `index` must have the same length as `hash`; it is the caller's
/// responsibility to seed it as the identity permutation
/// (`index[i] = i`) before the first call, since the permutation this
/// function produces is relative to whatever order `index` encoded on
/// entry.
///
/// Dispatch rule (4.C): counting sort when `max - min + 1` is below
/// `config.density_threshold`, otherwise radix sort at `config`'s digit
/// width, using the parallel count-accumulation variant when `N` reaches
/// `config.parallel_threshold` and the digit width is 16-bit. 8-bit radix
/// has no parallel variant: its histograms are cheap enough that the
/// threading overhead isn't worth it.
pub fn sort_hash(
    hash: &mut [u64],
    index: &mut [usize],
    config: &SortConfig,
) -> SortResult<SortReport> {
    if hash.len() != index.len() {
        return Err(SortError::LengthMismatch {
            expected: hash.len(),
            got: index.len(),
        });
    }

    let n = hash.len();
    if n == 0 {
        return Ok(SortReport {
            strategy: Strategy::Empty,
            range: 0,
        });
    }

    let min = *hash.iter().min().unwrap();
    let max = *hash.iter().max().unwrap();
    let range = max.saturating_sub(min).saturating_add(1);

    if range < config.density_threshold {
        counting_sort(hash, index, min, max)?;
        log::debug!("sort_hash: counting sort, min={min}, max={max}, range={range}");
        return Ok(SortReport {
            strategy: Strategy::Counting,
            range,
        });
    }

    let use_parallel =
        config.digit_width == DigitWidth::Sixteen && n >= config.parallel_threshold;

    if use_parallel {
        radix_sort_16_parallel(hash, index, config.thread_count)?;
        log::debug!("sort_hash: parallel radix sort (16-bit), range={range}, threads={}", config.thread_count);
        Ok(SortReport {
            strategy: Strategy::RadixParallel,
            range,
        })
    } else {
        match config.digit_width {
            DigitWidth::Sixteen => radix_sort_16(hash, index)?,
            DigitWidth::Eight => radix_sort_8(hash, index)?,
        }
        log::debug!("sort_hash: radix sort, digit_width={:?}, range={range}", config.digit_width);
        Ok(SortReport {
            strategy: Strategy::Radix,
            range,
        })
    }
}
