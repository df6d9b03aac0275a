//! Collinear point detection on integer grids.
//!
//! Purpose
//! - Find every line segment that passes through exactly four points of a finite
//!   set of 2D integer points, by exhaustive search over all 4-point subsets.
//! - Keep the point model explicit: a total (y, x) order and a tagged slope with
//!   well-defined vertical, horizontal and degenerate cases.
//!
//! API Policy
//! - Inputs are borrowed and never mutated; results are owned copies.
//! - Inputs with five or more collinear points are outside the contract: such a
//!   line is reported once per qualifying 4-subset.

pub mod brute;
pub mod error;
pub mod point;
pub mod rand;
pub mod segment;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use brute::BruteCollinearPoints;
pub use error::CollinearError;
pub use point::{Point, Slope};
pub use segment::LineSegment;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::brute::BruteCollinearPoints;
    pub use crate::error::CollinearError;
    pub use crate::point::{Point, Slope};
    pub use crate::rand::{draw_point_cloud, PointCloudCfg, ReplayToken};
    pub use crate::segment::LineSegment;
}
