//! Exhaustive detector over all 4-combinations of the sorted points.

use super::CollinearDetector;
use crate::geom::{Point, Segment, MIN_RUN_LEN};
use crate::validate::{require_points, sorted_distinct_copy};
use crate::InputError;

/// Exhaustive O(N⁴) detector; the correctness oracle for `FastCollinearPoints`.
#[derive(Clone, Debug)]
pub struct BruteCollinearPoints {
    segments: Vec<Segment>,
}

impl BruteCollinearPoints {
    pub fn new(points: &[Point]) -> Result<Self, InputError> {
        let sorted = sorted_distinct_copy(points)?;
        Ok(Self {
            segments: find_segments(&sorted),
        })
    }

    /// Like `new`, for inputs where the sequence or its entries may be absent.
    pub fn from_slots(points: Option<&[Option<Point>]>) -> Result<Self, InputError> {
        let points = require_points(points)?;
        Self::new(&points)
    }
}

impl CollinearDetector for BruteCollinearPoints {
    fn name(&self) -> &'static str {
        "brute"
    }

    fn number_of_segments(&self) -> usize {
        self.segments.len()
    }

    fn segments(&self) -> Vec<Segment> {
        self.segments.clone()
    }
}

/// Iterate `i < j < k < l` over `sorted`, testing slopes from `sorted[i]`.
///
/// The `k` loop compares `slope(i, k)` against `slope(i, j)` before entering
/// the `l` loop, so non-collinear triples never reach the fourth point.
fn find_segments(sorted: &[Point]) -> Vec<Segment> {
    let n = sorted.len();
    let mut out = Vec::new();
    if n < MIN_RUN_LEN {
        return out;
    }
    for i in 0..n {
        let p = sorted[i];
        for j in i + 1..n {
            let slope = p.slope_to(&sorted[j]);
            for k in j + 1..n {
                if p.slope_to(&sorted[k]) != slope {
                    continue;
                }
                for l in k + 1..n {
                    if p.slope_to(&sorted[l]) != slope {
                        continue;
                    }
                    if !is_canonical_quad(sorted, [i, j, k, l], slope) {
                        continue;
                    }
                    let mut quad = [sorted[i], sorted[j], sorted[k], sorted[l]];
                    quad.sort();
                    out.push(Segment::new(quad[0], quad[3]));
                }
            }
        }
    }
    out
}

/// A collinear quadruple stands for its whole line only if it holds the
/// first three points of the line and the last one.
///
/// Collinear points appear along the line in natural order, so it suffices to
/// reject any other collinear point sorted before `k` or after `l`.
fn is_canonical_quad(sorted: &[Point], [i, j, k, l]: [usize; 4], slope: f64) -> bool {
    let p = sorted[i];
    sorted.iter().enumerate().all(|(t, other)| {
        t == i || t == j || (k..=l).contains(&t) || p.slope_to(other) != slope
    })
}
