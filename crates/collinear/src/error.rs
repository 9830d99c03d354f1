use std::fmt;

use crate::geom::{Point, COORD_MAX, COORD_MIN};

/// Precondition violations raised by point construction and the detectors.
///
/// All variants are fatal: a detector never returns partial results.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InputError {
    /// The point sequence itself is absent.
    MissingInput,
    /// An entry of the point sequence is absent.
    MissingPoint { index: usize },
    /// Two value-equal points are present.
    DuplicatePoint { point: Point },
    /// A coordinate lies outside `[COORD_MIN, COORD_MAX]`.
    OutOfRange { x: i32, y: i32 },
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingInput => write!(f, "point sequence is missing"),
            Self::MissingPoint { index } => write!(f, "point at index {index} is missing"),
            Self::DuplicatePoint { point } => write!(f, "duplicate point {point}"),
            Self::OutOfRange { x, y } => write!(
                f,
                "coordinates ({x}, {y}) outside [{COORD_MIN}, {COORD_MAX}]"
            ),
        }
    }
}

impl std::error::Error for InputError {}
