//! Collinear point detection on integer grids.
//!
//! Finds every maximal run of four or more collinear points in a finite set of
//! planar points and reports it once, as a segment between its extreme points.
//!
//! Layout
//! - `geom`: `Point` (natural order, slope, slope order) and `Segment`.
//! - `validate`: shared precondition checks (absent input, absent entries, duplicates).
//! - `detect`: the exhaustive O(N⁴) oracle and the sort-based O(N² log N) detector.
//! - `rand`: reproducible point sets with planted lines, for tests and benches.
//!
//! API Policy
//! - Detectors are all-or-nothing: construction either validates and computes the
//!   final segment set, or returns an `InputError` with no partial state.
//! - Everything handed back to callers is an owned copy.

pub mod detect;
mod error;
pub mod geom;
pub mod rand;
pub mod validate;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use detect::{BruteCollinearPoints, CollinearDetector, FastCollinearPoints};
pub use error::InputError;
pub use geom::{Point, Segment};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::detect::{BruteCollinearPoints, CollinearDetector, FastCollinearPoints};
    pub use crate::geom::{Point, Segment, COORD_MAX, COORD_MIN, MIN_RUN_LEN};
    pub use crate::rand::{draw_point_set, PointSetCfg, ReplayToken, RunLength};
    pub use crate::InputError;
}
