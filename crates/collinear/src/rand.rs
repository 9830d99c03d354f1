//! Random point sets with planted collinear runs (replay tokens).
//!
//! Purpose
//! - Deterministic inputs for detector cross-checks, benches, and the CLI
//!   `generate` command.
//!
//! Model
//! - Plant `lines` runs: a random start, a small integer step vector, and a
//!   run length drawn from `RunLength`. Runs that leave `[0, extent]²` are
//!   redrawn (bounded attempts).
//! - Add `noise` uniform points. Duplicates collapse, so the result is a valid
//!   detector input; planted runs may merge with noise into longer lines.
//! - Determinism uses a replay token `(seed, index)` mixed into a single RNG.

use std::collections::BTreeSet;

use nalgebra::Vector2;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::geom::{Point, COORD_MAX, COORD_MIN, MIN_RUN_LEN};

/// Run length distribution for planted lines.
#[derive(Clone, Copy, Debug)]
pub enum RunLength {
    Fixed(usize),
    Uniform { min: usize, max: usize },
}

impl RunLength {
    fn sample<R: Rng>(&self, rng: &mut R) -> usize {
        match *self {
            RunLength::Fixed(n) => n.max(2),
            RunLength::Uniform { min, max } => {
                let lo = min.max(2);
                let hi = max.max(lo);
                rng.gen_range(lo..=hi)
            }
        }
    }
}

/// Point-set sampler configuration.
#[derive(Clone, Copy, Debug)]
pub struct PointSetCfg {
    /// Number of planted runs.
    pub lines: usize,
    pub run_length: RunLength,
    /// Extra uniform points.
    pub noise: usize,
    /// Coordinates are drawn from `[0, extent]`; clamped to the grid.
    pub extent: i32,
    /// Largest absolute component of a step vector.
    pub max_step: i32,
}

impl Default for PointSetCfg {
    fn default() -> Self {
        Self {
            lines: 3,
            run_length: RunLength::Uniform {
                min: MIN_RUN_LEN,
                max: MIN_RUN_LEN + 2,
            },
            noise: 8,
            extent: 64,
            max_step: 3,
        }
    }
}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64 finalizer.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

const MAX_ATTEMPTS_PER_LINE: usize = 32;

/// Draw a distinct point set in shuffled order.
pub fn draw_point_set(cfg: PointSetCfg, tok: ReplayToken) -> Vec<Point> {
    let mut rng = tok.to_std_rng();
    let extent = cfg.extent.clamp(COORD_MIN, COORD_MAX);
    let max_step = cfg.max_step.max(1);
    let mut set = BTreeSet::new();

    for _ in 0..cfg.lines {
        let len = cfg.run_length.sample(&mut rng);
        for _ in 0..MAX_ATTEMPTS_PER_LINE {
            if let Some(run) = sample_run(&mut rng, len, extent, max_step) {
                set.extend(run);
                break;
            }
        }
    }
    for _ in 0..cfg.noise {
        set.extend(sample_point(&mut rng, extent));
    }

    let mut points: Vec<Point> = set.into_iter().collect();
    points.shuffle(&mut rng);
    points
}

/// Uniform point in `[0, extent]²`; `extent` is already clamped to the grid.
fn sample_point(rng: &mut StdRng, extent: i32) -> Option<Point> {
    let v = Vector2::new(rng.gen_range(0..=extent), rng.gen_range(0..=extent));
    Point::try_from(v).ok()
}

/// One planted run, or `None` if it leaves the box.
fn sample_run(rng: &mut StdRng, len: usize, extent: i32, max_step: i32) -> Option<Vec<Point>> {
    let step = loop {
        let v = Vector2::new(
            rng.gen_range(-max_step..=max_step),
            rng.gen_range(-max_step..=max_step),
        );
        if v != Vector2::zeros() {
            break v;
        }
    };
    let start = sample_point(rng, extent)?.to_grid();
    (0..len)
        .map(|t| {
            let v = start + step * (t as i32);
            if v.x > extent || v.y > extent {
                return None;
            }
            Point::try_from(v).ok()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::detect::{CollinearDetector, FastCollinearPoints};

    #[test]
    fn draws_are_reproducible_per_token() {
        let cfg = PointSetCfg::default();
        let tok = ReplayToken { seed: 7, index: 3 };
        assert_eq!(draw_point_set(cfg, tok), draw_point_set(cfg, tok));
        let other = draw_point_set(cfg, ReplayToken { seed: 7, index: 4 });
        assert_ne!(draw_point_set(cfg, tok), other);
    }

    #[test]
    fn draws_are_valid_detector_input() {
        let cfg = PointSetCfg {
            lines: 4,
            run_length: RunLength::Fixed(5),
            noise: 20,
            extent: 40,
            max_step: 2,
        };
        for index in 0..10 {
            let pts = draw_point_set(cfg, ReplayToken { seed: 1, index });
            assert!(pts
                .iter()
                .all(|p| (0..=40).contains(&p.x()) && (0..=40).contains(&p.y())));
            let det = FastCollinearPoints::new(&pts).expect("distinct points");
            assert!(det.number_of_segments() >= 1);
        }
    }

    #[test]
    fn planted_run_is_found() {
        let cfg = PointSetCfg {
            lines: 1,
            run_length: RunLength::Fixed(6),
            noise: 0,
            extent: 200,
            max_step: 3,
        };
        let pts = draw_point_set(cfg, ReplayToken { seed: 11, index: 0 });
        assert_eq!(pts.len(), 6);
        let det = FastCollinearPoints::new(&pts).unwrap();
        assert_eq!(det.number_of_segments(), 1);
        let mut sorted = pts.clone();
        sorted.sort();
        let seg = det.segments()[0];
        assert_eq!((seg.p(), seg.q()), (sorted[0], sorted[5]));
        // Evenly spaced along one integer step.
        let step = sorted[1].to_grid() - sorted[0].to_grid();
        for w in sorted.windows(2) {
            assert_eq!(w[1].to_grid() - w[0].to_grid(), step);
        }
    }
}
