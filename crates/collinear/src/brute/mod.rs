//! Brute-force detection of 4-point collinear segments.
//!
//! Purpose
//! - Examine every 4-subset of the input once (C(n,4) subsets, O(n^4) work) and
//!   report a segment for each subset whose points share one line.
//!
//! Model
//! - The input is copied and sorted by the (y, x) point order. Sorting makes
//!   duplicate detection a single adjacency scan.
//! - Each candidate quadruple is sorted again so that its first and last points
//!   are the segment endpoints, independent of the indices that picked them.
//! - Collinearity is exact slope equality from the smallest point to the other
//!   three; no tolerance is applied.
//!
//! Limitation
//! - A line with five or more input points yields one segment per 4-subset of
//!   that line. Callers must not pass such inputs.

use crate::error::CollinearError;
use crate::point::Point;
use crate::segment::LineSegment;

/// Segments found by exhaustive search, computed once at construction.
#[derive(Clone, Debug)]
pub struct BruteCollinearPoints {
    segments: Vec<LineSegment>,
}

impl BruteCollinearPoints {
    /// Run the search over `points`.
    ///
    /// Fails with `DuplicatePoint` if two points share coordinates; no segments
    /// are computed in that case.
    pub fn new(points: &[Point]) -> Result<Self, CollinearError> {
        let mut pts = points.to_vec();
        pts.sort_unstable();
        if let Some(w) = pts.windows(2).find(|w| w[0] == w[1]) {
            return Err(CollinearError::DuplicatePoint { point: w[0] });
        }

        let mut found = Self {
            segments: Vec::with_capacity(1),
        };
        let n = pts.len();
        for i in 0..n {
            for j in i + 1..n {
                for k in j + 1..n {
                    for l in k + 1..n {
                        let mut subset = [pts[i], pts[j], pts[k], pts[l]];
                        subset.sort_unstable();
                        if let Some(segment) = collinear_span(&subset)? {
                            found.enqueue(segment);
                        }
                    }
                }
            }
        }
        Ok(found)
    }

    /// Null-aware entry point: an absent sequence or an absent element fails with
    /// `NullInput` before any search work starts.
    pub fn from_nullable(points: Option<&[Option<Point>]>) -> Result<Self, CollinearError> {
        let points = points.ok_or(CollinearError::NullInput)?;
        let pts = points
            .iter()
            .copied()
            .collect::<Option<Vec<Point>>>()
            .ok_or(CollinearError::NullInput)?;
        Self::new(&pts)
    }

    #[inline]
    pub fn number_of_segments(&self) -> usize {
        self.segments.len()
    }

    /// Owned copy of the segments, in discovery order.
    pub fn segments(&self) -> Vec<LineSegment> {
        self.segments.clone()
    }

    fn enqueue(&mut self, segment: LineSegment) {
        self.segments.push(segment);
    }
}

/// Segment spanning `subset` if its four points are collinear.
/// `subset` must be sorted by point order.
fn collinear_span(subset: &[Point; 4]) -> Result<Option<LineSegment>, CollinearError> {
    let origin = subset[0];
    let a = origin.slope_to(&subset[1]);
    let b = origin.slope_to(&subset[2]);
    let c = origin.slope_to(&subset[3]);
    if a == b && b == c {
        LineSegment::new(origin, subset[3]).map(Some)
    } else {
        Ok(None)
    }
}
