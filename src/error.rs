//! Error types for the sort and panel-building entry points.
//!
//! The range reducer (`reduce` module) has no error channel by design
//! (see its module docs), so none of these variants apply to it.

use thiserror::Error;

/// Failure modes for `sort_hash`, `panel_setup_128`, and the radix/counting
/// primitives that back them.
#[derive(Debug, Error)]
pub enum SortError {
    /// A scratch buffer (shadow copy, histogram, offset table) could not be
    /// allocated. Caller-owned buffers are left untouched up to this point.
    #[error("failed to allocate scratch buffer for {what}")]
    Allocation { what: &'static str },

    /// Two companion arrays that must share a length (e.g. `hash` and
    /// `index`, or `h1` and `h2`) did not.
    #[error("length mismatch: expected {expected}, got {got}")]
    LengthMismatch { expected: usize, got: usize },
}

pub type SortResult<T> = Result<T, SortError>;
