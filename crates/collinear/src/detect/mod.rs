//! Collinear-run detectors: exhaustive oracle and sort-based fast path.
//!
//! Purpose
//! - `BruteCollinearPoints`: O(N⁴) scan over all 4-combinations of the sorted
//!   points. Small inputs only; it is the reference the fast path must match.
//! - `FastCollinearPoints`: per origin, sort by slope and scan runs of equal
//!   slope. O(N² log N).
//!
//! Contract (both)
//! - Construction validates, sorts a private copy, and computes the final set
//!   of segments; failure leaves nothing behind.
//! - Each maximal run of `MIN_RUN_LEN`+ collinear points yields exactly one
//!   segment between its natural-order minimum and maximum.
//! - Fewer than `MIN_RUN_LEN` points: validated, zero segments.
//!
//! Code cross-refs: `geom::{Point, Segment}`, `validate`.

mod brute;
mod fast;

pub use brute::BruteCollinearPoints;
pub use fast::FastCollinearPoints;

use crate::geom::Segment;

/// Common read-only surface of a finished detection run.
pub trait CollinearDetector {
    /// Short algorithm label for logs and reports.
    fn name(&self) -> &'static str;

    /// Number of maximal segments found.
    fn number_of_segments(&self) -> usize;

    /// Owned copy of the segments, in discovery order.
    fn segments(&self) -> Vec<Segment>;
}
