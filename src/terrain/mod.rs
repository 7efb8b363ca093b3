//! Height-field generators
//!
//! Each generator turns random draws into a 1D height profile sampled over
//! the normalized interval `[0, 1]`. They share a two-phase lifecycle:
//! construct with static parameters, then call `regenerate` with a random
//! source before reading values. Reading never mutates the generator.

mod midpoint;
mod perlin;
mod voronoi;
mod walk;

pub use midpoint::Midpoint;
pub use perlin::{PerlinConfig, PerlinNoise, PerlinOctave};
pub use voronoi::{PeakType, Voronoi};
pub use walk::RandomWalk;

use glam::Vec2;

/// A user or algorithm defined high point of the height profile
///
/// Coordinates are normalized to the target area: `x` runs from the left
/// edge (0) to the right edge (1), `y` from the floor (0) to the ceiling (1).
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Peak {
    /// Normalized position of the peak
    pub position: Vec2,
    /// Ignored peaks stay in the list but are skipped by every generator
    pub ignored: bool,
}

impl Peak {
    /// Create an active peak at `(x, y)`
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            position: Vec2::new(x, y),
            ignored: false,
        }
    }

    #[inline]
    pub fn x(&self) -> f32 {
        self.position.x
    }

    #[inline]
    pub fn y(&self) -> f32 {
        self.position.y
    }
}

/// Heights produced by one generator method, tagged with how the blender
/// has to treat them
#[derive(Debug, Clone, PartialEq)]
pub enum HeightMap {
    /// Arbitrary range; normalized to `[0, 1]` before blending
    Raw(Vec<f32>),
    /// Already within `[0, 1]`; blended as is
    Normalized(Vec<f32>),
    /// Heights pinned to user peaks. Blended as is, and the blended result
    /// is not stretched afterwards so the requested peak heights survive.
    PeakPinned(Vec<f32>),
}

impl HeightMap {
    /// The height values regardless of tag
    pub fn values(&self) -> &[f32] {
        match self {
            HeightMap::Raw(values) | HeightMap::Normalized(values) | HeightMap::PeakPinned(values) => {
                values
            }
        }
    }

    pub fn len(&self) -> usize {
        self.values().len()
    }

    pub fn is_empty(&self) -> bool {
        self.values().is_empty()
    }

    /// Whether the heights follow user peaks exactly
    pub fn is_peak_pinned(&self) -> bool {
        matches!(self, HeightMap::PeakPinned(_))
    }

    /// Consume the map and return heights ready for blending
    ///
    /// `Raw` heights are stretched into `[0, 1]`; the other variants are
    /// returned untouched.
    pub fn into_blendable(self) -> Vec<f32> {
        match self {
            HeightMap::Raw(mut values) => {
                normalize(&mut values);
                values
            }
            HeightMap::Normalized(values) | HeightMap::PeakPinned(values) => values,
        }
    }
}

/// Stretch heights so the lowest becomes 0 and the highest becomes 1
///
/// Constant (or non-finite) input is left unchanged instead of dividing by
/// a zero range.
pub fn normalize(heights: &mut [f32]) {
    let (min, max) = heights
        .iter()
        .fold((f32::MAX, f32::MIN), |(lo, hi), &h| (lo.min(h), hi.max(h)));

    let range = max - min;
    if !(range > 0.0) || !range.is_finite() {
        return;
    }

    for h in heights.iter_mut() {
        *h = (*h - min) / range;
    }
}

/// Linear interpolation without clamping `t`
#[inline]
pub(crate) fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}
