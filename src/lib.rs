//! Range-partition an ordered key universe with a sorted pivot sequence and
//! answer "which range does this key fall in?" through interchangeable
//! search strategies.
//!
//! With pivots `p0 <= p1 <= ... <= pN-1` the buckets are right-closed:
//! `(-inf, p0], (p0, p1], ..., (pN-1, +inf)`, indexed `0..=N`. A key equal
//! to a pivot belongs to that pivot's own bucket. Three strategies implement
//! the same contract with different trade-offs:
//!
//! - [`ClassicSearch`]: iterative, overflow-safe bisection,
//! - [`StdSearch`]: the standard library's sorted-slice binary search,
//!   converted to the bucket convention,
//! - [`InterpolationSearch`]: probes proportionally to where the key sits in
//!   the current value range; integer keys only.
//!
//! Every query reports the number of key-to-pivot comparisons it spent, and
//! [`OnlineStats`] aggregates such measurements (and timings) in a single
//! pass, for benchmarking one strategy against another.

pub mod search;
pub mod stats;

pub use crate::search::{
  ClassicSearch, InterpolationKey, InterpolationSearch, Placement, RangeSearch, StdSearch,
};
pub use crate::stats::OnlineStats;
