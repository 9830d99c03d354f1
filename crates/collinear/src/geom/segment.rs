use std::fmt;

use super::point::Point;

/// Line segment between the extreme points of a collinear run.
///
/// Value object: equality, hashing and ordering use the endpoints `(p, q)`.
/// Detectors always build it with `p < q` in natural order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Segment {
    p: Point,
    q: Point,
}

impl Segment {
    #[inline]
    pub fn new(p: Point, q: Point) -> Self {
        Self { p, q }
    }

    #[inline]
    pub fn p(&self) -> Point {
        self.p
    }

    #[inline]
    pub fn q(&self) -> Point {
        self.q
    }

    /// True if `point` lies on this segment (endpoints included).
    pub fn contains(&self, point: &Point) -> bool {
        let (lo, hi) = if self.p <= self.q {
            (self.p, self.q)
        } else {
            (self.q, self.p)
        };
        if *point == lo || *point == hi {
            return true;
        }
        // Collinear points sort along the line in natural order.
        lo < *point && *point < hi && lo.slope_to(point) == lo.slope_to(&hi)
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.p, self.q)
    }
}
