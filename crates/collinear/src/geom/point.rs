use std::cmp::Ordering;
use std::fmt;

use nalgebra::Vector2;

use super::cfg::{COORD_MAX, COORD_MIN};
use crate::InputError;

/// Immutable grid point with coordinates in `[COORD_MIN, COORD_MAX]`.
///
/// Invariants:
/// - Coordinates are range-checked once, at construction.
/// - Equality is by value; `Ord` is the natural order (y ascending, then x).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Point {
    x: i32,
    y: i32,
}

impl Point {
    /// Construct a point, rejecting coordinates outside the grid.
    pub fn new(x: i32, y: i32) -> Result<Self, InputError> {
        let range = COORD_MIN..=COORD_MAX;
        if !range.contains(&x) || !range.contains(&y) {
            return Err(InputError::OutOfRange { x, y });
        }
        Ok(Self { x, y })
    }

    #[inline]
    pub fn x(&self) -> i32 {
        self.x
    }

    #[inline]
    pub fn y(&self) -> i32 {
        self.y
    }

    /// Slope of the line through `self` and `other`.
    ///
    /// Conventions:
    /// - identical points → `-inf` (no direction),
    /// - horizontal → `+0.0`,
    /// - vertical → `+inf`,
    /// - otherwise `Δy / Δx`.
    ///
    /// Exactness: for coordinates in `[0, 32767]` two distinct reduced fractions
    /// differ by at least `1/32767²`, far above the f64 rounding error of one
    /// division, so equal slopes compare equal bit for bit and distinct slopes
    /// never collide. NaN is never produced.
    pub fn slope_to(&self, other: &Point) -> f64 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        match (dx, dy) {
            (0, 0) => f64::NEG_INFINITY,
            (0, _) => f64::INFINITY,
            (_, 0) => 0.0,
            _ => f64::from(dy) / f64::from(dx),
        }
    }

    /// Comparator ordering points by their slope from `self`.
    ///
    /// `self` sorts first (its slope to itself is `-inf`). Ties are left to the
    /// caller; with a stable sort they keep their previous relative order.
    pub fn slope_order(self) -> impl Fn(&Point, &Point) -> Ordering {
        move |a, b| {
            self.slope_to(a)
                .partial_cmp(&self.slope_to(b))
                .unwrap_or(Ordering::Equal)
        }
    }

    /// Grid coordinates as an integer vector.
    #[inline]
    pub fn to_grid(&self) -> Vector2<i32> {
        Vector2::new(self.x, self.y)
    }

    /// Coordinates as a float vector, for plotting collaborators.
    #[inline]
    pub fn to_vec2(&self) -> Vector2<f64> {
        Vector2::new(f64::from(self.x), f64::from(self.y))
    }
}

impl TryFrom<Vector2<i32>> for Point {
    type Error = InputError;

    fn try_from(v: Vector2<i32>) -> Result<Self, Self::Error> {
        Point::new(v.x, v.y)
    }
}

impl Ord for Point {
    fn cmp(&self, other: &Self) -> Ordering {
        self.y.cmp(&other.y).then(self.x.cmp(&other.x))
    }
}

impl PartialOrd for Point {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
