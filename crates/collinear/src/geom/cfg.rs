//! Fixed limits for point coordinates and runs.
//!
//! Policy
//! - Constants, not runtime config: the slope exactness argument in
//!   `Point::slope_to` depends on `COORD_MAX`, so it must not drift silently.

/// Smallest accepted coordinate (inclusive).
pub const COORD_MIN: i32 = 0;
/// Largest accepted coordinate (inclusive).
pub const COORD_MAX: i32 = 32767;
/// Minimum number of collinear points that make a reportable segment.
pub const MIN_RUN_LEN: usize = 4;
