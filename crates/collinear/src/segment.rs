//! Line segments between two distinct grid points.

use std::fmt;

use crate::error::CollinearError;
use crate::point::Point;

/// Line segment between two distinct points.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct LineSegment {
    p: Point,
    q: Point,
}

impl LineSegment {
    pub fn new(p: Point, q: Point) -> Result<Self, CollinearError> {
        if p == q {
            return Err(CollinearError::DegenerateSegment { point: p });
        }
        Ok(Self { p, q })
    }

    #[inline]
    pub fn p(&self) -> Point {
        self.p
    }

    #[inline]
    pub fn q(&self) -> Point {
        self.q
    }
}

impl fmt::Display for LineSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.p, self.q)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_coinciding_endpoints() {
        let p = Point::new(5, 5);
        assert_eq!(
            LineSegment::new(p, p),
            Err(CollinearError::DegenerateSegment { point: p })
        );
    }

    #[test]
    fn displays_endpoints() {
        let s = LineSegment::new(Point::new(1, 1), Point::new(4, 4)).unwrap();
        assert_eq!(s.to_string(), "(1, 1) -> (4, 4)");
        assert_eq!(s.p(), Point::new(1, 1));
        assert_eq!(s.q(), Point::new(4, 4));
    }
}
