//! Error type shared by segment construction and the detector.

use std::fmt;

use crate::point::Point;

/// Errors surfaced while building segments or running the detector.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CollinearError {
    /// The point sequence, or one of its elements, is absent.
    NullInput,
    /// The same coordinates appear more than once in the input.
    DuplicatePoint { point: Point },
    /// A segment was requested with identical endpoints.
    DegenerateSegment { point: Point },
}

impl fmt::Display for CollinearError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CollinearError::NullInput => {
                write!(f, "point sequence or one of its points is absent")
            }
            CollinearError::DuplicatePoint { point } => {
                write!(f, "repeated point {point} in input")
            }
            CollinearError::DegenerateSegment { point } => {
                write!(f, "segment endpoints coincide at {point}")
            }
        }
    }
}

impl std::error::Error for CollinearError {}
