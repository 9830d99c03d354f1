//! Point files: an integer count `N`, then `N` pairs `x y`, whitespace separated.

use anyhow::{bail, Context, Result};
use collinear::Point;
use std::fs;
use std::path::Path;

pub fn parse_points(text: &str) -> Result<Vec<Point>> {
    let tokens: Vec<&str> = text.split_whitespace().collect();
    let (head, coords) = tokens
        .split_first()
        .context("empty input: expected point count")?;
    let count: usize = head
        .parse()
        .context("point count is not a non-negative integer")?;
    // Checked against the tokens present, so the header never drives allocation.
    if count.checked_mul(2) != Some(coords.len()) {
        bail!(
            "header announces {count} points but {} coordinates follow",
            coords.len()
        );
    }
    coords
        .chunks_exact(2)
        .enumerate()
        .map(|(index, pair)| {
            let coord = |axis: &str, token: &str| -> Result<i32> {
                token
                    .parse()
                    .with_context(|| format!("point {index}: {axis} {token:?} is not an integer"))
            };
            let (x, y) = (coord("x", pair[0])?, coord("y", pair[1])?);
            Point::new(x, y).with_context(|| format!("point {index}"))
        })
        .collect()
}

pub fn read_points(path: &Path) -> Result<Vec<Point>> {
    let text =
        fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    parse_points(&text).with_context(|| format!("parsing {}", path.display()))
}

/// Render points in the same format `parse_points` reads.
pub fn format_points(points: &[Point]) -> String {
    std::iter::once(points.len().to_string())
        .chain(points.iter().map(|p| format!("{} {}", p.x(), p.y())))
        .map(|line| line + "\n")
        .collect()
}
