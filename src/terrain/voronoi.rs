//! Peak/valley interpolation
//!
//! Given sparse peaks on `[0, 1]`, a valley is placed between every pair of
//! neighbouring peaks and at both edges. Heights between a valley and its
//! peak follow a falloff curve chosen by [`PeakType`]. Wide gaps produce
//! deep valleys, tight clusters of peaks stay high in between.

use std::cmp::Ordering;
use std::f32::consts::PI;

use glam::Vec2;

use super::{lerp, Peak};
use crate::error::{Result, TerrainError};

/// Sine falloff exponent at zero peak width
const SINE_POWER_MIN: f32 = 0.6;
/// Sine falloff exponent at full peak width
const SINE_POWER_MAX: f32 = 2.5;
/// How early a quadratic slope tops out at full peak width
const QUADRATIC_PEAK_WIDTH_RATIO: f32 = 4.0;

/// Shape of the slope between a valley and a peak
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PeakType {
    /// Straight line from valley to peak
    Linear,
    /// Half sine wave, rounded at both ends
    #[default]
    Sine,
    /// Parabola that reaches the peak early for wide peaks (plateaus)
    Quadratic,
}

/// Height function interpolating between peaks and derived valleys
#[derive(Debug, Clone, PartialEq)]
pub struct Voronoi {
    /// Sorted by x, no duplicate x
    peaks: Vec<Vec2>,
    /// `peaks.len() + 1` entries; `valleys[i]` lies left of `peaks[i]`
    valleys: Vec<Vec2>,
    peak_type: PeakType,
    peak_width: f32,
}

impl Voronoi {
    /// Build the peak and valley lists
    ///
    /// Ignored peaks are dropped and peaks sharing an `x` collapse into the
    /// highest of them. `peak_width` is clamped into `[0, 1]`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if no usable peak is left.
    pub fn new(peaks: &[Peak], peak_type: PeakType, peak_width: f32) -> Result<Self> {
        let mut sorted: Vec<Vec2> = peaks
            .iter()
            .filter(|peak| !peak.ignored)
            .map(|peak| peak.position)
            .collect();

        if sorted.is_empty() {
            return Err(TerrainError::InvalidArgument(
                "Voronoi needs at least one peak".to_string(),
            ));
        }

        sorted.sort_by(|a, b| {
            a.x.partial_cmp(&b.x)
                .unwrap_or(Ordering::Equal)
                .then(b.y.partial_cmp(&a.y).unwrap_or(Ordering::Equal))
        });
        // highest peak of each x run comes first
        sorted.dedup_by(|later, earlier| later.x == earlier.x);

        let peak_width = if peak_width.is_nan() {
            0.0
        } else {
            peak_width.clamp(0.0, 1.0)
        };
        let valleys = compute_valleys(&sorted, peak_type, peak_width);

        Ok(Self {
            peaks: sorted,
            valleys,
            peak_type,
            peak_width,
        })
    }

    pub fn peaks(&self) -> &[Vec2] {
        &self.peaks
    }

    pub fn valleys(&self) -> &[Vec2] {
        &self.valleys
    }

    #[inline]
    pub fn peak_type(&self) -> PeakType {
        self.peak_type
    }

    #[inline]
    pub fn peak_width(&self) -> f32 {
        self.peak_width
    }

    /// Height at `x`; `x` is clamped into `[0, 1]` first
    pub fn sample(&self, x: f32) -> f32 {
        let x = x.clamp(0.0, 1.0);
        let (peak, valley) = self.bracket(x);

        let mut delta = (x - valley.x) / (peak.x - valley.x);
        if delta.is_nan() {
            delta = 0.0;
        }

        match self.peak_type {
            PeakType::Linear => lerp(valley.y, peak.y, delta),
            PeakType::Sine => {
                let power = lerp(SINE_POWER_MIN, SINE_POWER_MAX, self.peak_width);
                let delta = 1.0 - (1.0 - delta).powf(power);
                let radians = -0.5 * PI + delta * PI;
                let amplitude = 0.5 * (peak.y - valley.y);
                valley.y + (radians.sin() + 1.0) * amplitude
            }
            PeakType::Quadratic => {
                let delta = delta * lerp(1.0, QUADRATIC_PEAK_WIDTH_RATIO, self.peak_width);
                if delta > 1.0 {
                    peak.y
                } else {
                    valley.y + delta * delta * (peak.y - valley.y)
                }
            }
        }
    }

    /// Peak and valley enclosing `x`
    fn bracket(&self, x: f32) -> (Vec2, Vec2) {
        let n = self.peaks.len();
        let next = self.peaks.partition_point(|peak| peak.x <= x);

        if next == n {
            // a peak on the right edge shares its x with the last valley
            let last = self.peaks[n - 1];
            if x == last.x && self.valleys[n].x == last.x {
                (last, self.valleys[n - 1])
            } else {
                (last, self.valleys[n])
            }
        } else if next > 0 && x < self.valleys[next].x {
            (self.peaks[next - 1], self.valleys[next])
        } else {
            (self.peaks[next], self.valleys[next])
        }
    }
}

/// Derive one valley per gap (plus both edges) from sorted peaks
fn compute_valleys(peaks: &[Vec2], peak_type: PeakType, peak_width: f32) -> Vec<Vec2> {
    let n = peaks.len();
    let mut valleys = Vec::with_capacity(n + 1);

    // depth starts as the negated distance from the valley to its peak
    valleys.push(Vec2::new(0.0, -peaks[0].x));
    for pair in peaks.windows(2) {
        let gap = (pair[1].x - pair[0].x).abs();
        valleys.push(Vec2::new(0.5 * (pair[0].x + pair[1].x), -0.5 * gap));
    }
    valleys.push(Vec2::new(1.0, -(1.0 - peaks[n - 1].x)));

    let deepest = valleys.iter().map(|v| v.y).fold(f32::MAX, f32::min);
    let last = valleys.len() - 1;

    for (i, valley) in valleys.iter_mut().enumerate() {
        // the widest gap maps to 0, a zero gap to 1
        if deepest < 0.0 {
            valley.y = (valley.y - deepest) / -deepest;
        } else {
            valley.y = 1.0;
        }

        let lower_neighbour = if i == 0 {
            peaks[0].y
        } else if i == last {
            peaks[n - 1].y
        } else {
            peaks[i - 1].y.min(peaks[i].y)
        };
        valley.y *= lower_neighbour;

        if peak_type == PeakType::Linear {
            if peak_width <= 0.5 {
                valley.y *= 2.0 * peak_width;
            } else if i > 0 && i < last {
                let t = 2.0 * (peak_width - 0.5);
                valley.y = lerp(valley.y, lower_neighbour, t);
            }
        }
    }

    valleys
}
