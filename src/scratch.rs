//! Scratch-buffer allocation helpers.
//!
//! Every sort in this crate is structured as: allocate all scratch buffers
//! for the pass, *then* mutate caller-owned arrays. If any allocation
//! fails, the caller's `hash`/`index` slices are guaranteed untouched.
//! These helpers exist so that guarantee is enforced in one place instead
//! of re-derived per primitive.

use crate::error::{SortError, SortResult};

/// Allocates a zero-filled `Vec<T>` of length `len`, reporting an
/// allocation failure as `SortError` rather than aborting the process.
pub(crate) fn zeroed_vec<T: Copy + Default>(len: usize, what: &'static str) -> SortResult<Vec<T>> {
    let mut v = Vec::new();
    v.try_reserve_exact(len)
        .map_err(|_| SortError::Allocation { what })?;
    v.resize(len, T::default());
    Ok(v)
}

/// Clones a slice into a freshly allocated `Vec`, reporting allocation
/// failure instead of aborting.
pub(crate) fn try_clone_slice<T: Copy>(src: &[T], what: &'static str) -> SortResult<Vec<T>> {
    let mut v = Vec::new();
    v.try_reserve_exact(src.len())
        .map_err(|_| SortError::Allocation { what })?;
    v.extend_from_slice(src);
    Ok(v)
}
