//! Hex Math - axial coordinates, pixel projection, bounds, sampling.
//!
//! Pointy-top layout throughout. Everything in this module is pure; the
//! camera, renderer and picker all build on the same forward projection
//! so pixel→hex inversion stays consistent with drawing.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// √3, used by the pointy-top projection.
pub const SQRT_3: f32 = 1.732_050_8;

// ============================================================================
// AXIAL COORDINATES
// ============================================================================

/// Axial hex coordinate (q, r). Cells are integral; fractional positions
/// only exist transiently inside `pixel_to_axial`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Axial {
    pub q: i32,
    pub r: i32,
}

/// Six pointy-top neighbor offsets, counterclockwise from (+1, 0).
/// Callers rely on this order for edge indexing; do not reorder.
pub const AXIAL_DIRECTIONS: [(i32, i32); 6] = [
    (1, 0), (1, -1), (0, -1), (-1, 0), (-1, 1), (0, 1),
];

impl Axial {
    pub const ZERO: Axial = Axial { q: 0, r: 0 };

    pub const fn new(q: i32, r: i32) -> Self {
        Self { q, r }
    }

    /// Canonical string key `"q,r"` used by tile/stockpile lookup tables.
    /// The encode/decode pair lives here so no other module reinvents it.
    pub fn key(&self) -> String {
        format!("{},{}", self.q, self.r)
    }

    /// Parse a `"q,r"` key. Returns `None` for anything that is not two
    /// integers — callers skip such entries rather than erroring.
    pub fn parse_key(key: &str) -> Option<Axial> {
        let (q, r) = key.split_once(',')?;
        Some(Axial {
            q: q.trim().parse().ok()?,
            r: r.trim().parse().ok()?,
        })
    }

    /// The six adjacent cells, counterclockwise from (+1, 0).
    pub fn neighbors(&self) -> [Axial; 6] {
        AXIAL_DIRECTIONS.map(|(dq, dr)| Axial::new(self.q + dq, self.r + dr))
    }

    /// Hex-metric distance: `(|dq| + |dr| + |dq+dr|) / 2`.
    pub fn distance(&self, other: Axial) -> i32 {
        let dq = self.q - other.q;
        let dr = self.r - other.r;
        (dq.abs() + dr.abs() + (dq + dr).abs()) / 2
    }
}

// ============================================================================
// PIXEL PROJECTION
// ============================================================================

/// Axial → world-pixel center of the hex (pointy-top):
/// `x = size·√3·(q + r/2)`, `y = size·1.5·r`. Canvas convention, y-down.
pub fn axial_to_pixel(pos: Axial, size: f32) -> Vec2 {
    Vec2::new(
        size * SQRT_3 * (pos.q as f32 + pos.r as f32 / 2.0),
        size * 1.5 * pos.r as f32,
    )
}

/// World-pixel → nearest hex via cube rounding. Rounds q, r, s = -q-r
/// independently, then recomputes the axis with the largest rounding
/// error from the other two so q + r + s = 0 holds exactly. This snaps
/// to the hex-distance-nearest cell, not the Euclidean roundoff one.
pub fn pixel_to_axial(p: Vec2, size: f32) -> Axial {
    let qf = (SQRT_3 / 3.0 * p.x - p.y / 3.0) / size;
    let rf = (2.0 / 3.0 * p.y) / size;
    let sf = -qf - rf;

    let mut q = qf.round();
    let mut r = rf.round();
    let s = sf.round();

    let dq = (q - qf).abs();
    let dr = (r - rf).abs();
    let ds = (s - sf).abs();

    if dq > dr && dq > ds {
        q = -r - s;
    } else if dr > ds {
        r = -q - s;
    }
    // s has the largest error: q and r already agree, nothing to fix.

    Axial::new(q as i32, r as i32)
}

/// The i-th of 6 corners of the hex centered at `center`, at angle
/// `60°·i − 30°` (pointy-top: a vertex straight up/down the y axis).
pub fn hex_corner(center: Vec2, size: f32, i: usize) -> Vec2 {
    let angle = (60.0 * i as f32 - 30.0).to_radians();
    Vec2::new(
        center.x + size * angle.cos(),
        center.y + size * angle.sin(),
    )
}

/// All six corners in order, for polygon paths.
pub fn hex_corners(center: Vec2, size: f32) -> [Vec2; 6] {
    std::array::from_fn(|i| hex_corner(center, size, i))
}

// ============================================================================
// MAP BOUNDS
// ============================================================================

/// Finite set of valid cells. `Rect` is a w×h parallelogram of axial
/// rows; `Radius` is a hexagonal disc of cube-distance ≤ r.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "shape", rename_all = "lowercase")]
pub enum MapBounds {
    Rect {
        w: i32,
        h: i32,
        #[serde(default = "Axial::default_origin")]
        origin: Axial,
    },
    Radius {
        r: i32,
        #[serde(default = "Axial::default_origin")]
        origin: Axial,
    },
}

impl Axial {
    fn default_origin() -> Axial {
        Axial::ZERO
    }
}

impl Default for MapBounds {
    fn default() -> Self {
        MapBounds::Rect { w: 24, h: 16, origin: Axial::ZERO }
    }
}

impl MapBounds {
    /// Exact containment test per variant.
    pub fn contains(&self, pos: Axial) -> bool {
        match *self {
            MapBounds::Rect { w, h, origin } => {
                pos.q >= origin.q && pos.q < origin.q + w
                    && pos.r >= origin.r && pos.r < origin.r + h
            }
            MapBounds::Radius { r, origin } => pos.distance(origin) <= r,
        }
    }

    /// Enumerate every valid cell. Rect: row-major nested loop offset by
    /// origin. Radius: cube-range enumeration, r-row clamped per q.
    pub fn cells(&self) -> impl Iterator<Item = Axial> + '_ {
        let cells: Vec<Axial> = match *self {
            MapBounds::Rect { w, h, origin } => (0..h)
                .flat_map(move |r| (0..w).map(move |q| Axial::new(origin.q + q, origin.r + r)))
                .collect(),
            MapBounds::Radius { r, origin } => {
                let mut out = Vec::new();
                for q in -r..=r {
                    let lo = (-r).max(-q - r);
                    let hi = r.min(-q + r);
                    for row in lo..=hi {
                        out.push(Axial::new(origin.q + q, origin.r + row));
                    }
                }
                out
            }
        };
        cells.into_iter()
    }

    /// Number of valid cells (rect: w·h, radius: 3r² + 3r + 1).
    pub fn cell_count(&self) -> usize {
        match *self {
            MapBounds::Rect { w, h, .. } => (w.max(0) as usize) * (h.max(0) as usize),
            MapBounds::Radius { r, .. } => {
                let r = r.max(0) as usize;
                3 * r * r + 3 * r + 1
            }
        }
    }
}

// ============================================================================
// RANDOM SAMPLING
// ============================================================================

/// 64-bit linear congruential generator (Knuth MMIX constants). Used
/// wherever a reproducible cell sequence is needed; equal seeds yield
/// equal sequences.
#[derive(Clone, Debug)]
pub struct Lcg {
    state: u64,
}

impl Lcg {
    pub fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    pub fn next_u32(&mut self) -> u32 {
        self.state = self
            .state
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        (self.state >> 32) as u32
    }

    /// Uniform draw in `[lo, hi]` inclusive.
    pub fn range_i32(&mut self, lo: i32, hi: i32) -> i32 {
        debug_assert!(lo <= hi);
        let span = (hi - lo) as u64 + 1;
        lo + (self.next_u32() as u64 % span) as i32
    }
}

/// Uniformly sample a valid cell with a caller-supplied generator.
/// Rect bounds draw each axis directly; radius bounds rejection-sample
/// the bounding square until the cube-distance check passes (the disc
/// covers ~90% of the square, so the loop terminates fast).
pub fn rand_axial_with(bounds: &MapBounds, rng: &mut Lcg) -> Axial {
    match *bounds {
        MapBounds::Rect { w, h, origin } => Axial::new(
            origin.q + rng.range_i32(0, w - 1),
            origin.r + rng.range_i32(0, h - 1),
        ),
        MapBounds::Radius { r, origin } => loop {
            let q = rng.range_i32(-r, r);
            let row = rng.range_i32(-r, r);
            let cell = Axial::new(origin.q + q, origin.r + row);
            if cell.distance(origin) <= r {
                return cell;
            }
        },
    }
}

/// Uniformly sample a valid cell from the platform RNG.
pub fn rand_axial(bounds: &MapBounds) -> Axial {
    let mut rng = Lcg::new(rand::random::<u64>());
    rand_axial_with(bounds, &mut rng)
}
