//! Panel builders (4.D, 4.E): turn a sorted key array into group
//! boundaries.

use crate::error::{SortError, SortResult};
use crate::radix::radix_sort_16;

/// Result of [`panel_setup`]: `info[0..=j]` are ascending offsets into the
/// sorted order, with `info[0] == 0` and `info[j] == N`. Group `g` spans
/// `info[g]..info[g + 1]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelInfo {
    pub info: Vec<usize>,
    pub j: usize,
}

/// As [`PanelInfo`], plus the number of 64-bit hash collisions the
/// 128-bit refinement pass resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelInfo128 {
    pub info: Vec<usize>,
    pub j: usize,
    pub collisions: u64,
}

/// Scans a sorted 64-bit key array into group boundaries (4.D).
///
/// `h` must already be sorted ascending (e.g. by [`crate::sort_hash`]).
/// This is not checked in release builds; the caller is contractually
/// required to pass sorted input. A debug assertion catches non-monotone
/// input during development.
pub fn panel_setup(h: &[u64]) -> PanelInfo {
    let n = h.len();
    if n == 0 {
        return PanelInfo { info: vec![0], j: 0 };
    }

    debug_assert!(h.windows(2).all(|w| w[0] <= w[1]), "panel_setup requires sorted input");

    let mut info = Vec::with_capacity(n + 1);
    info.push(0);
    let mut el = h[0];
    for (i, &val) in h.iter().enumerate().skip(1) {
        if val != el {
            info.push(i);
            el = val;
        }
    }
    info.push(n);
    info.shrink_to_fit();

    let j = info.len() - 1;
    PanelInfo { info, j }
}

/// Scans `h1` into group boundaries as [`panel_setup`] does, but treats a
/// boundary as provisional: if `h2` is not constant across the block (a
/// 64-bit hash collision), the block's `h2` values are sorted with
/// [`radix_sort_16`] and the resulting local permutation is spliced back
/// into `index[start..end]`. The block itself is never split: a
/// 64-bit-equal run is always one group, and collisions only refine
/// ordering *within* it.
///
/// `h1`, `h2`, and `index` must all have the same length.
pub fn panel_setup_128(
    h1: &[u64],
    h2: &[u64],
    index: &mut [usize],
) -> SortResult<PanelInfo128> {
    let n = h1.len();
    if h2.len() != n {
        return Err(SortError::LengthMismatch {
            expected: n,
            got: h2.len(),
        });
    }
    if index.len() != n {
        return Err(SortError::LengthMismatch {
            expected: n,
            got: index.len(),
        });
    }

    if n == 0 {
        return Ok(PanelInfo128 {
            info: vec![0],
            j: 0,
            collisions: 0,
        });
    }

    debug_assert!(h1.windows(2).all(|w| w[0] <= w[1]), "panel_setup_128 requires sorted h1");

    let mut info = Vec::with_capacity(n + 1);
    info.push(0);
    let mut collisions = 0u64;
    let mut el = h1[0];
    let mut block_start = 0usize;

    for (i, &val) in h1.iter().enumerate().skip(1) {
        if val != el {
            collisions += refine_block(h2, index, block_start, i)? as u64;
            info.push(i);
            el = val;
            block_start = i;
        }
    }
    collisions += refine_block(h2, index, block_start, n)? as u64;
    info.push(n);
    info.shrink_to_fit();

    if collisions > 0 {
        log::info!(
            "panel_setup_128: resolved {collisions} 64-bit hash collision(s) via 128-bit fallback"
        );
    }

    let j = info.len() - 1;
    Ok(PanelInfo128 { info, j, collisions })
}

/// Resolves a single `[start, end)` block: if `h2` is already constant
/// there, nothing to do. Otherwise sort `h2[start..end)` and splice the
/// resulting order back into `index[start..end)`. Returns `true` if a
/// collision was found and repaired.
fn refine_block(h2: &[u64], index: &mut [usize], start: usize, end: usize) -> SortResult<bool> {
    if end - start <= 1 {
        return Ok(false);
    }

    let first = h2[start];
    if h2[start..end].iter().all(|&v| v == first) {
        return Ok(false);
    }

    let mut h2_local: Vec<u64> = h2[start..end].to_vec();
    let mut local_index: Vec<usize> = (0..(end - start)).collect();
    radix_sort_16(&mut h2_local, &mut local_index)?;

    let refined: Vec<usize> = local_index.iter().map(|&li| index[start + li]).collect();
    index[start..end].copy_from_slice(&refined);

    Ok(true)
}
