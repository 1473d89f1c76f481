//! # hashgroup
//!
//! `hashgroup` sorts hash-keyed rows into their groups and summarizes a
//! value column per group, without ever materializing the group key
//! itself: callers hash their grouping columns down to a `u64` (or
//! `u64`/`u64` pair, for collision safety at scale) and this crate handles
//! the sort, the group-boundary scan, and the summary reduction.
//!
//! ## Key Features
//!
//! - **Density-adaptive sort**: [`sort_hash`] picks counting sort or radix
//!   sort based on how sparse the key range is, so callers don't have to
//!   reason about which is faster for their data.
//! - **Collision-aware 128-bit panels**: [`panel_setup_128`] repairs rare
//!   64-bit hash collisions in place, without ever re-sorting the whole
//!   array or splitting a legitimate group.
//! - **In-place quantile reduction**: [`reduce`] computes every summary
//!   statistic (`sum`, `mean`, `sd`, quantiles, `iqr`, ...) via partition
//!   selection, with no intermediate sorted copy of the value column.
//! - **Byte-offset comparators**: [`comparators`] gives the general-sort
//!   fallback (unhashed, record-based) path the same key types as the
//!   hashed path.
//!
//! ## Usage
//!
//! ```rust
//! use hashgroup::{sort_hash, panel_setup, reduce, ReduceCode, SortConfig};
//!
//! let mut hash = vec![30u64, 10, 20, 10, 30];
//! let mut index: Vec<usize> = (0..hash.len()).collect();
//! sort_hash(&mut hash, &mut index, &SortConfig::default()).unwrap();
//!
//! let panel = panel_setup(&hash);
//! assert_eq!(panel.j, 3); // three distinct groups: 10, 20, 30
//!
//! let mut values = vec![1.0, 2.0, 3.0, 4.0, 5.0];
//! // reorder values to match the sorted permutation before reducing
//! let mut sorted_values: Vec<f64> = index.iter().map(|&i| values[i]).collect();
//! let group_sum = reduce(ReduceCode::Sum, &mut sorted_values, panel.info[0], panel.info[1]);
//! assert!(group_sum.is_finite());
//! ```
//!
//! ## Performance Characteristics
//!
//! - **Sort**: O(N) for counting sort (dense key ranges), O(N · passes) for
//!   radix sort (sparse ranges), both stable.
//! - **Panel scan**: O(N), one pass over the sorted keys.
//! - **Reduce**: O(N) for `sum`/`mean`/`sd`/`min`/`max`, O(N) amortized for
//!   quantiles via quickselect.

pub mod comparators;
pub mod config;
pub mod counting;
pub mod dispatch;
pub mod error;
pub mod funcode;
pub mod panel;
pub mod radix;
pub mod reduce;
mod scratch;

pub use config::{DigitWidth, SortConfig};
pub use dispatch::{sort_hash, SortReport, Strategy};
pub use error::{SortError, SortResult};
pub use funcode::{fun_apply, fun_code};
pub use panel::{panel_setup, panel_setup_128, PanelInfo, PanelInfo128};
pub use radix::{radix_sort_16, radix_sort_16_parallel, radix_sort_8};
pub use reduce::{reduce, ReduceCode};

pub mod prelude {
    pub use crate::config::{DigitWidth, SortConfig};
    pub use crate::dispatch::{sort_hash, SortReport, Strategy};
    pub use crate::error::{SortError, SortResult};
    pub use crate::funcode::{fun_apply, fun_code};
    pub use crate::panel::{panel_setup, panel_setup_128, PanelInfo, PanelInfo128};
    pub use crate::reduce::{reduce, ReduceCode};
}
