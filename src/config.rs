//! Plain configuration for the sort engine. No global state: every entry
//! point takes a `SortConfig` (or uses `SortConfig::default()`), per the
//! Design Notes's "no process-wide singletons" rule.

/// Digit width used by the LSD radix sort.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DigitWidth {
    /// 8 passes of a 256-slot histogram.
    Eight,
    /// 4 passes of a 65536-slot histogram.
    Sixteen,
}

/// Tunable parameters threaded through the sort/panel entry points.
///
/// `SortConfig::default()` sets the dispatcher's defaults: a 2^24 density
/// threshold between counting and radix sort, 16-bit radix digits, and a
/// 4-thread fan-out for parallel count-accumulation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortConfig {
    /// Counting sort is used when `max - min + 1` is below this threshold;
    /// radix sort otherwise.
    pub density_threshold: u64,
    /// Digit width for the radix sort passes.
    pub digit_width: DigitWidth,
    /// Number of worker threads used for the parallel 16-bit
    /// count-accumulation phase. Ignored by the serial radix sort.
    pub thread_count: usize,
    /// Minimum `N` before the parallel count-accumulation path is used
    /// instead of the serial one; below this, thread setup cost dominates.
    pub parallel_threshold: usize,
}

impl Default for SortConfig {
    fn default() -> Self {
        SortConfig {
            density_threshold: 1 << 24,
            digit_width: DigitWidth::Sixteen,
            thread_count: 4,
            parallel_threshold: 1 << 20,
        }
    }
}
