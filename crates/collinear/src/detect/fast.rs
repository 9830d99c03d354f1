//! Sort-based detector: one slope sort and one linear scan per origin.
//!
//! Per origin `p` (iterated in natural order):
//! 1. Copy the naturally sorted points and stable-sort them by slope from `p`.
//!    `p` lands first; equal slopes are contiguous and stay in natural order.
//! 2. Scan runs of equal slope. A run of `k` points plus `p` is a candidate.
//! 3. Emit `Segment(p, last)` only if the candidate has `MIN_RUN_LEN`+ points
//!    and `p` precedes every run member. Every other point of the line sees `p`
//!    in its run and stays silent, so each line is reported once, by its minimum.

use super::CollinearDetector;
use crate::geom::{Point, Segment, MIN_RUN_LEN};
use crate::validate::{require_points, sorted_distinct_copy};
use crate::InputError;

/// Sort-based O(N² log N) detector.
#[derive(Clone, Debug)]
pub struct FastCollinearPoints {
    segments: Vec<Segment>,
}

impl FastCollinearPoints {
    pub fn new(points: &[Point]) -> Result<Self, InputError> {
        let sorted = sorted_distinct_copy(points)?;
        Ok(Self {
            segments: find_segments(&sorted)?,
        })
    }

    /// Like `new`, for inputs where the sequence or its entries may be absent.
    pub fn from_slots(points: Option<&[Option<Point>]>) -> Result<Self, InputError> {
        let points = require_points(points)?;
        Self::new(&points)
    }
}

impl CollinearDetector for FastCollinearPoints {
    fn name(&self) -> &'static str {
        "fast"
    }

    fn number_of_segments(&self) -> usize {
        self.segments.len()
    }

    fn segments(&self) -> Vec<Segment> {
        self.segments.clone()
    }
}

/// Scan state for one origin.
#[derive(Clone, Copy, Debug)]
enum Run {
    Idle,
    Accumulating { start: usize, slope: f64 },
}

fn find_segments(sorted: &[Point]) -> Result<Vec<Segment>, InputError> {
    let mut out = Vec::new();
    if sorted.len() < MIN_RUN_LEN {
        return Ok(out);
    }
    let mut by_slope = sorted.to_vec();
    for &origin in sorted {
        // Restart from natural order so the stable sort keeps runs ordered.
        by_slope.copy_from_slice(sorted);
        by_slope.sort_by(origin.slope_order());
        scan_origin(origin, &by_slope, &mut out)?;
    }
    Ok(out)
}

fn scan_origin(
    origin: Point,
    by_slope: &[Point],
    out: &mut Vec<Segment>,
) -> Result<(), InputError> {
    let mut run = Run::Idle;
    for (idx, point) in by_slope.iter().enumerate().skip(1) {
        let slope = origin.slope_to(point);
        if slope == f64::NEG_INFINITY {
            return Err(InputError::DuplicatePoint { point: *point });
        }
        run = match run {
            Run::Accumulating { start, slope: current } if current == slope => {
                Run::Accumulating { start, slope }
            }
            Run::Accumulating { start, .. } => {
                emit_if_maximal(origin, &by_slope[start..idx], out);
                Run::Accumulating { start: idx, slope }
            }
            Run::Idle => Run::Accumulating { start: idx, slope },
        };
    }
    if let Run::Accumulating { start, .. } = run {
        emit_if_maximal(origin, &by_slope[start..], out);
    }
    Ok(())
}

/// `run` holds the points sharing one slope from `origin`, in natural order.
fn emit_if_maximal(origin: Point, run: &[Point], out: &mut Vec<Segment>) {
    debug_assert!(run.windows(2).all(|w| w[0] < w[1]));
    if run.len() + 1 < MIN_RUN_LEN {
        return;
    }
    match (run.first(), run.last()) {
        (Some(first), Some(last)) if origin < *first => out.push(Segment::new(origin, *last)),
        _ => {}
    }
}
