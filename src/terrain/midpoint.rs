//! Midpoint displacement
//!
//! Cells on a `2^k + 1` grid are seeded every `initial_step` cells, then the
//! step is halved repeatedly and each new midpoint becomes the average of its
//! two neighbours plus a random displacement. The displacement range shrinks
//! every level; `roughness` controls how fast.

use log::{debug, warn};
use rand::Rng;

use super::{lerp, Peak};

/// Random range of the seeded cells, centered on 0.5
const INITIAL_HEIGHT_RANGE: f32 = 0.9;
/// Range decay exponent at roughness 0 (smooth)
const ROUGHNESS_POWER_MIN: f32 = -2.0;
/// Range decay exponent at roughness 1 (rough)
const ROUGHNESS_POWER_MAX: f32 = -0.5;

/// Fractal height array built by midpoint displacement
///
/// Not thread-safe during [`Midpoint::regenerate`]; use one instance per
/// generation run.
#[derive(Debug, Clone, PartialEq)]
pub struct Midpoint {
    cells: Vec<f32>,
    /// Cell count the caller asked for; peaks map onto this range
    requested_cells: usize,
    initial_step: usize,
    roughness: f32,
    peaks: Vec<Peak>,
}

impl Midpoint {
    /// Allocate the grid without generating anything
    ///
    /// `cell_count` is rounded up to the next `2^k + 1` and `initial_step`
    /// is snapped to the closest power of two within `[1, len - 1]`.
    /// Counts below 2 are raised to 2.
    pub fn new(cell_count: usize, initial_step: usize, roughness: f32, peaks: Option<&[Peak]>) -> Self {
        let requested_cells = if cell_count < 2 {
            warn!("Midpoint cell count must be at least 2 (got {})", cell_count);
            2
        } else {
            cell_count
        };

        let len = (requested_cells - 1).next_power_of_two() + 1;
        let initial_step = closest_power_of_two(initial_step).clamp(1, len - 1);
        let roughness = if roughness.is_nan() {
            0.0
        } else {
            roughness.clamp(0.0, 1.0)
        };
        let peaks = peaks
            .unwrap_or_default()
            .iter()
            .filter(|peak| !peak.ignored)
            .copied()
            .collect();

        Self {
            cells: vec![0.0; len],
            requested_cells,
            initial_step,
            roughness,
            peaks,
        }
    }

    /// All cells of the power-of-two grid
    pub fn cells(&self) -> &[f32] {
        &self.cells
    }

    /// Raw value of a cell, `None` past the end of the grid
    pub fn value_at(&self, index: usize) -> Option<f32> {
        self.cells.get(index).copied()
    }

    #[inline]
    pub fn initial_step(&self) -> usize {
        self.initial_step
    }

    #[inline]
    pub fn roughness(&self) -> f32 {
        self.roughness
    }

    /// Regenerate every cell of the grid
    pub fn regenerate<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let len = self.cells.len();
        let multiplier = 2f32.powf(lerp(ROUGHNESS_POWER_MIN, ROUGHNESS_POWER_MAX, self.roughness));
        let mut height_range = INITIAL_HEIGHT_RANGE;
        let mut step = self.initial_step;

        self.cells.fill(f32::NAN);
        for i in (0..len).step_by(step) {
            self.cells[i] = 0.5 + (rng.gen::<f32>() - 0.5) * height_range;
        }
        height_range *= multiplier;

        self.pin_peaks();

        while step > 1 {
            let half = step >> 1;
            let mut i = 0;
            while i + step < len {
                let average = 0.5 * (self.cells[i] + self.cells[i + step]);
                self.cells[i + half] = average + (rng.gen::<f32>() - 0.5) * height_range;
                i += step;
            }

            step = half;
            height_range *= multiplier;
        }
    }

    /// Overwrite the seed cells nearest to each peak with the peak height
    ///
    /// Peaks between two seed cells snap to the closer one; their exact
    /// position is lost.
    fn pin_peaks(&mut self) {
        let last = self.cells.len() - 1;
        let span = (self.requested_cells - 1) as f32;
        let step = self.initial_step;

        for peak in &self.peaks {
            let exact = peak.x().clamp(0.0, 1.0) * span / step as f32;
            let slot = exact.round();
            if (exact - slot).abs() > f32::EPSILON {
                debug!(
                    "Midpoint peak at x={} snapped to seed cell {}",
                    peak.x(),
                    slot as usize * step
                );
            }
            let index = (slot as usize * step).min(last);
            self.cells[index] = peak.y();
        }
    }
}

/// Power of two nearest to `value`, rounding ties up
fn closest_power_of_two(value: usize) -> usize {
    if value <= 1 {
        return 1;
    }
    let upper = value.next_power_of_two();
    let lower = upper >> 1;
    if value - lower < upper - value {
        lower
    } else {
        upper
    }
}
