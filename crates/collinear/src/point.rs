//! Immutable grid points with a (y, x) total order and tagged slopes.
//!
//! - `Point`: integer coordinates; `Ord` compares y first, then x.
//! - `Slope`: slope of the line through two points, with explicit markers for
//!   vertical lines and for a point paired with itself.

use std::cmp::Ordering;
use std::fmt;

/// A point on the integer grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Point {
    x: i32,
    y: i32,
}

impl Point {
    #[inline]
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    #[inline]
    pub fn x(&self) -> i32 {
        self.x
    }

    #[inline]
    pub fn y(&self) -> i32 {
        self.y
    }

    /// Slope of the line from `self` to `other`.
    ///
    /// Coinciding points give `Slope::Degenerate`, vertical lines give
    /// `Slope::PositiveInfinity` and horizontal lines give `Finite(+0.0)`.
    pub fn slope_to(&self, other: &Point) -> Slope {
        // i64 keeps differences of extreme i32 coordinates exact.
        let dx = i64::from(other.x) - i64::from(self.x);
        let dy = i64::from(other.y) - i64::from(self.y);
        match (dx, dy) {
            (0, 0) => Slope::Degenerate,
            (0, _) => Slope::PositiveInfinity,
            (_, 0) => Slope::Finite(0.0),
            _ => Slope::Finite(dy as f64 / dx as f64),
        }
    }

    /// Comparator ordering two points by their slope from `self`.
    pub fn slope_order(&self) -> impl Fn(&Point, &Point) -> Ordering + '_ {
        move |a, b| {
            self.slope_to(a)
                .partial_cmp(&self.slope_to(b))
                .unwrap_or(Ordering::Equal)
        }
    }
}

impl Ord for Point {
    fn cmp(&self, other: &Self) -> Ordering {
        self.y.cmp(&other.y).then(self.x.cmp(&other.x))
    }
}

impl PartialOrd for Point {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Slope between two points.
///
/// Variant order is significant: the derived `PartialOrd` sorts
/// `Degenerate` below every finite slope and `PositiveInfinity` above.
/// Equality is exact; two markers of the same kind compare equal.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub enum Slope {
    /// Slope from a point to itself.
    Degenerate,
    Finite(f64),
    /// Vertical line.
    PositiveInfinity,
}

impl Slope {
    /// Floating-point encoding: `-inf` for degenerate, `+inf` for vertical.
    #[inline]
    pub fn to_f64(self) -> f64 {
        match self {
            Slope::Degenerate => f64::NEG_INFINITY,
            Slope::Finite(s) => s,
            Slope::PositiveInfinity => f64::INFINITY,
        }
    }
}
