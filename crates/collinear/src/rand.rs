//! Random point clouds with planted collinear quadruples.
//!
//! Purpose
//! - Provide reproducible detector inputs for tests, benches and the CLI
//!   `sample` command.
//!
//! Model
//! - `planted_lines` groups of four evenly spaced collinear points are placed
//!   first, then uniform points fill the cloud up to `count`.
//! - All points are pairwise distinct and lie in `[0, bound)²`.
//! - Determinism uses a replay token `(seed, index)` mixed into a single RNG.

use std::collections::HashSet;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::point::Point;

/// Largest step between consecutive planted points, per axis.
const MAX_PLANT_STEP: i32 = 8;
/// Draws per planted quad before planting stops; earlier quads can block the grid.
const MAX_PLANT_ATTEMPTS: usize = 256;

/// Point cloud sampler configuration.
#[derive(Clone, Copy, Debug)]
pub struct PointCloudCfg {
    /// Total number of points. Clamped to `bound²`.
    pub count: usize,
    /// Number of planted 4-point lines. Clamped to `count / 4`; fewer are
    /// planted when the grid leaves no free quad.
    pub planted_lines: usize,
    /// Exclusive upper bound for both coordinates.
    pub bound: i32,
}

impl Default for PointCloudCfg {
    fn default() -> Self {
        Self {
            count: 32,
            planted_lines: 2,
            bound: 32_768,
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

/// Draw a cloud of distinct points; the planted quadruples come first.
pub fn draw_point_cloud(cfg: PointCloudCfg, tok: ReplayToken) -> Vec<Point> {
    let mut rng = tok.to_std_rng();
    let bound = cfg.bound.max(1);
    let cells = (bound as u64).saturating_mul(bound as u64);
    let count = (cfg.count as u64).min(cells) as usize;
    let max_step = ((bound - 1) / 3).min(MAX_PLANT_STEP);
    let planted = if max_step == 0 {
        0
    } else {
        cfg.planted_lines.min(count / 4)
    };

    let mut seen = HashSet::with_capacity(count);
    let mut out = Vec::with_capacity(count);
    'plant: for _ in 0..planted {
        for _ in 0..MAX_PLANT_ATTEMPTS {
            let quad = draw_quad(&mut rng, bound, max_step);
            if quad.iter().any(|p| seen.contains(p)) {
                continue;
            }
            for p in quad {
                seen.insert(p);
                out.push(p);
            }
            continue 'plant;
        }
        break;
    }
    while out.len() < count {
        let p = Point::new(rng.gen_range(0..bound), rng.gen_range(0..bound));
        if seen.insert(p) {
            out.push(p);
        }
    }
    out
}

/// Four evenly spaced collinear points inside `[0, bound)²`.
fn draw_quad<R: Rng>(rng: &mut R, bound: i32, max_step: i32) -> [Point; 4] {
    let (dx, dy) = loop {
        let dx = rng.gen_range(-max_step..=max_step);
        let dy = rng.gen_range(0..=max_step);
        if dx != 0 || dy != 0 {
            break (dx, dy);
        }
    };
    let x0 = if dx >= 0 {
        rng.gen_range(0..bound - 3 * dx)
    } else {
        rng.gen_range(-3 * dx..bound)
    };
    let y0 = rng.gen_range(0..bound - 3 * dy);
    [0, 1, 2, 3].map(|k| Point::new(x0 + k * dx, y0 + k * dy))
}
