//! Directed random walk
//!
//! The walk starts at height 0.5 heading flat and moves right one node at a
//! time. Near periodic turning points the heading may change sharply; away
//! from them it barely moves. A cohesion band around the heights seen so far
//! keeps the walk from drifting off forever.

use rand::Rng;

use crate::config::WalkSettings;

/// Steepest slope the walk may take, in degrees
const MAX_ANGLE: f32 = 80.0;
/// Cohesion at which the band collapses to a flat line
pub(crate) const COHESION_MAX: f32 = 2.0;
/// Exponent sharpening the turning-point proximity curve
const TURN_SHARPNESS: i32 = 10;

/// Height generator simulating a slope-limited walk
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RandomWalk {
    settings: WalkSettings,
    /// Width of the target area in world units
    target_width: f32,
}

impl RandomWalk {
    pub fn new(settings: WalkSettings, target_width: f32) -> Self {
        Self {
            settings,
            target_width,
        }
    }

    #[inline]
    pub fn settings(&self) -> &WalkSettings {
        &self.settings
    }

    /// Walk across `node_count` nodes and return the raw heights
    ///
    /// Heights are not normalized; the first node is always 0.5. Fewer than
    /// two nodes yield that single starting height (or nothing).
    pub fn generate<R: Rng + ?Sized>(&self, node_count: usize, rng: &mut R) -> Vec<f32> {
        let mut heights = Vec::with_capacity(node_count);
        if node_count == 0 {
            return heights;
        }

        let mut height = 0.5f32;
        heights.push(height);
        if node_count == 1 {
            return heights;
        }

        let segments = (node_count - 1) as f32;
        let cell_width = 1.0 / segments;
        let actual_cell_width = self.target_width / segments;
        let turn_distance = (1.0 / (self.settings.frequency_per_unit * self.target_width)).clamp(0.0, 1.0);
        // NaN settings fall back to a single turn
        let turn_distance = if turn_distance.is_nan() { 1.0 } else { turn_distance };

        let mut angle = 0.0f32;
        let mut min_height = height;
        let mut max_height = height;

        for i in 1..node_count {
            let position = i as f32 / segments;

            let proximity = turn_proximity(position, turn_distance);
            let angle_delta = proximity
                * self.settings.angle_change_per_unit
                * actual_cell_width
                * (2.0 * rng.gen::<f32>() - 1.0);
            angle = (angle + angle_delta + 180.0).rem_euclid(360.0) - 180.0;
            angle = angle.clamp(-MAX_ANGLE, MAX_ANGLE);

            height += angle.to_radians().tan() * cell_width;

            let limit = (COHESION_MAX - self.settings.cohesion_per_unit) * i as f32 * cell_width * 0.5;
            let clamped = clamp_band(height, max_height - limit, min_height + limit);
            if clamped != height {
                angle = 0.0;
            }
            height = clamped;

            min_height = min_height.min(height);
            max_height = max_height.max(height);
            heights.push(height);
        }

        heights
    }
}

/// 1 at a turning point, falling steeply to 0 halfway between two of them
fn turn_proximity(position: f32, turn_distance: f32) -> f32 {
    let offset = position % turn_distance;
    let distance = offset.min(turn_distance - offset);
    let normalized = 1.0 - distance * 2.0 / turn_distance;
    normalized.powi(TURN_SHARPNESS)
}

/// Clamp that tolerates an inverted band: the lower bound wins first
fn clamp_band(value: f32, low: f32, high: f32) -> f32 {
    if value < low {
        low
    } else if value > high {
        high
    } else {
        value
    }
}
