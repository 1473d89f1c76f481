//! Counting sort (4.A): stable sort of 64-bit keys into a dense range.
//!
//! Used by the dispatcher (`dispatch` module) when `max - min + 1` is below
//! `SortConfig::density_threshold`.

use crate::error::SortResult;
use crate::scratch::{try_clone_slice, zeroed_vec};

/// Stably sorts `hash[0..n)` ascending in place, permuting `index` to match.
///
/// `min`/`max` must bound `hash`'s values (`min <= hash[i] <= max` for all
/// `i`); the dispatcher guarantees this by computing them from `hash`
/// itself before calling in.
///
/// The original source biases the histogram index by `+1`/`-1` to reuse a
/// single guard slot at `count[0]`. This implementation instead uses the
/// conventional 0-based exclusive prefix sum over `count[0..range)`
/// (behaviorally identical, and clearer to read).
///
/// On allocation failure, `hash` and `index` are left completely
/// unmodified.
pub fn counting_sort(hash: &mut [u64], index: &mut [usize], min: u64, max: u64) -> SortResult<()> {
    let n = hash.len();
    if n == 0 {
        return Ok(());
    }

    let range = (max - min + 1) as usize;

    // Allocate every scratch buffer before touching caller state.
    let hash_shadow = try_clone_slice(hash, "counting_sort::hash_shadow")?;
    let index_shadow = try_clone_slice(index, "counting_sort::index_shadow")?;
    let mut count: Vec<usize> = zeroed_vec(range, "counting_sort::count")?;

    for &h in hash_shadow.iter() {
        count[(h - min) as usize] += 1;
    }

    // Exclusive prefix sum: count[d] becomes the first output position for
    // digit d.
    let mut running = 0usize;
    for c in count.iter_mut() {
        let freq = *c;
        *c = running;
        running += freq;
    }

    for i in 0..n {
        let digit = (hash_shadow[i] - min) as usize;
        let pos = count[digit];
        hash[pos] = hash_shadow[i];
        index[pos] = index_shadow[i];
        count[digit] += 1;
    }

    Ok(())
}
