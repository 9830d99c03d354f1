//! Planar integer geometry for collinearity tests.
//!
//! Purpose
//! - `Point`: immutable grid point with the natural order (y, then x) and an
//!   exact slope function.
//! - `Segment`: value object for the extreme endpoints of a collinear run.
//!
//! Two orders
//! - Natural order is the `Ord` impl and stays fixed for a whole detection run.
//! - Slope order is built per origin via `Point::slope_order`; it is a
//!   comparator, not a trait impl, because both orders are needed at once.

mod cfg;
mod point;
mod segment;

pub use cfg::{COORD_MAX, COORD_MIN, MIN_RUN_LEN};
pub use point::Point;
pub use segment::Segment;

#[cfg(test)]
mod tests;
