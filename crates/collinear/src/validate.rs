//! Shared precondition checks for the detectors.
//!
//! - `require_points`: absent sequence / absent entries, for sparse callers.
//! - `check_distinct_pairwise`: all-pairs duplicate check on unsorted input.
//! - `check_distinct_sorted`: adjacent duplicate check on naturally sorted input.
//!
//! None of these mutate their input; each reports the first violation found.

use crate::geom::Point;
use crate::InputError;

/// Unwrap a possibly absent, possibly sparse point sequence into owned points.
pub fn require_points(points: Option<&[Option<Point>]>) -> Result<Vec<Point>, InputError> {
    let slots = points.ok_or(InputError::MissingInput)?;
    slots
        .iter()
        .enumerate()
        .map(|(index, slot)| slot.ok_or(InputError::MissingPoint { index }))
        .collect()
}

/// Exhaustive O(N²) duplicate check; order of `points` is irrelevant.
pub fn check_distinct_pairwise(points: &[Point]) -> Result<(), InputError> {
    for (i, a) in points.iter().enumerate() {
        if let Some(b) = points[i + 1..].iter().find(|b| *b == a) {
            return Err(InputError::DuplicatePoint { point: *b });
        }
    }
    Ok(())
}

/// Adjacent duplicate check; `sorted` must be in natural order.
pub fn check_distinct_sorted(sorted: &[Point]) -> Result<(), InputError> {
    debug_assert!(sorted.windows(2).all(|w| w[0] <= w[1]), "input not sorted");
    match sorted.windows(2).find(|w| w[0] == w[1]) {
        Some(w) => Err(InputError::DuplicatePoint { point: w[0] }),
        None => Ok(()),
    }
}

/// Copy `points` into natural order and reject duplicates.
///
/// Small inputs (fewer than `MIN_RUN_LEN` points) are checked pairwise on the
/// caller's order; larger ones after sorting.
pub(crate) fn sorted_distinct_copy(points: &[Point]) -> Result<Vec<Point>, InputError> {
    if points.len() < crate::geom::MIN_RUN_LEN {
        check_distinct_pairwise(points)?;
        let mut sorted = points.to_vec();
        sorted.sort();
        return Ok(sorted);
    }
    let mut sorted = points.to_vec();
    sorted.sort();
    check_distinct_sorted(&sorted)?;
    Ok(sorted)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pt(x: i32, y: i32) -> Point {
        Point::new(x, y).unwrap()
    }

    #[test]
    fn require_points_reports_missing_input_and_index() {
        assert_eq!(require_points(None), Err(InputError::MissingInput));
        let slots = [Some(pt(0, 0)), Some(pt(1, 1)), None, None];
        assert_eq!(
            require_points(Some(slots.as_slice())),
            Err(InputError::MissingPoint { index: 2 })
        );
        let full = [Some(pt(0, 0)), Some(pt(1, 1))];
        assert_eq!(
            require_points(Some(full.as_slice())).unwrap(),
            vec![pt(0, 0), pt(1, 1)]
        );
        assert!(require_points(Some(&[][..])).unwrap().is_empty());
    }

    #[test]
    fn pairwise_finds_non_adjacent_duplicates() {
        let pts = [pt(1, 2), pt(5, 5), pt(1, 2)];
        assert_eq!(
            check_distinct_pairwise(&pts),
            Err(InputError::DuplicatePoint { point: pt(1, 2) })
        );
        assert!(check_distinct_pairwise(&[pt(1, 2), pt(2, 1)]).is_ok());
        assert!(check_distinct_pairwise(&[]).is_ok());
    }

    #[test]
    fn sorted_check_needs_only_neighbours() {
        let mut pts = vec![pt(3, 3), pt(0, 0), pt(7, 1), pt(3, 3), pt(2, 9)];
        pts.sort();
        assert_eq!(
            check_distinct_sorted(&pts),
            Err(InputError::DuplicatePoint { point: pt(3, 3) })
        );
        pts.dedup();
        assert!(check_distinct_sorted(&pts).is_ok());
    }

    #[test]
    fn sorted_copy_leaves_input_untouched() {
        let pts = vec![pt(4, 4), pt(0, 1), pt(2, 0), pt(9, 9)];
        let before = pts.clone();
        let sorted = sorted_distinct_copy(&pts).unwrap();
        assert_eq!(pts, before);
        assert_eq!(sorted, vec![pt(2, 0), pt(0, 1), pt(4, 4), pt(9, 9)]);
        assert!(sorted_distinct_copy(&[pt(1, 1), pt(1, 1)]).is_err());
    }
}
