//! Terrain Curve Configuration and Builder
//!
//! This module provides the configuration types for deterministic terrain
//! curve generation: the target area, per-method settings with their presets,
//! blend weights and user peaks.

use glam::Vec2;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Result, TerrainError};
use crate::generation::CurveMethod;
use crate::terrain::{Peak, PeakType};

/// Smallest distance allowed between two curve nodes
pub const NODE_STEP_MIN: f32 = 0.001;

/// Named settings shipped with the generator
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Preset<T: 'static> {
    pub name: &'static str,
    pub settings: T,
}

fn check_range(name: &str, value: f32, min: f32, max: f32) -> Result<()> {
    if !(min..=max).contains(&value) {
        return Err(TerrainError::InvalidConfig(format!(
            "{} must be within [{}, {}] (got {})",
            name, min, max, value
        )));
    }
    Ok(())
}

// ============================================================================
// TARGET AREA
// ============================================================================

/// Rotated rectangle the curve is generated in
///
/// The curve runs along the bottom edge from left to right; heights go from
/// the bottom edge (0) to the top edge (1).
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TargetArea {
    /// Centre of the rectangle
    pub position: Vec2,
    /// Width and height of the rectangle
    pub size: Vec2,
    /// Counter-clockwise rotation around the centre, in degrees
    pub angle: f32,
}

impl TargetArea {
    pub fn new(position: Vec2, size: Vec2, angle: f32) -> Self {
        Self { position, size, angle }
    }

    /// Corners in the order bottom-left, top-left, top-right, bottom-right
    pub fn boundary(&self) -> [Vec2; 4] {
        let half = 0.5 * self.size;
        [
            Vec2::new(-half.x, -half.y),
            Vec2::new(-half.x, half.y),
            Vec2::new(half.x, half.y),
            Vec2::new(half.x, -half.y),
        ]
        .map(|corner| self.to_world(corner))
    }

    /// Transform a point from the unrotated, centred frame of the area
    pub fn to_world(&self, local: Vec2) -> Vec2 {
        Vec2::from_angle(self.angle.to_radians()).rotate(local) + self.position
    }

    /// Transform a point into the unrotated, centred frame of the area
    pub fn to_local(&self, world: Vec2) -> Vec2 {
        Vec2::from_angle(-self.angle.to_radians()).rotate(world - self.position)
    }

    /// Number of curve nodes spanning the width at the given spacing
    ///
    /// A step that is not a positive finite number gives 0 nodes.
    pub fn node_count(&self, node_step: f32) -> usize {
        let segments = (self.size.x / node_step).round();
        if !(node_step > 0.0) || !segments.is_finite() {
            return 0;
        }
        (segments.max(0.0) as usize).saturating_add(1)
    }
}

impl Default for TargetArea {
    fn default() -> Self {
        Self {
            position: Vec2::new(50.0, 50.0),
            size: Vec2::new(100.0, 100.0),
            angle: 0.0,
        }
    }
}

// ============================================================================
// METHOD SETTINGS
// ============================================================================

/// Settings of the Perlin noise method
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PerlinSettings {
    /// Number of noise octaves (1 to 20)
    pub octaves: usize,
    /// Samples of the first octave per world unit of width
    pub frequency_per_unit: f32,
    /// Amplitude multiplier from one octave to the next
    pub persistence: f32,
}

impl PerlinSettings {
    pub const OCTAVES_MAX: usize = 20;

    pub const PRESETS: &'static [Preset<PerlinSettings>] = &[
        Preset {
            name: "Rolling Hills",
            settings: PerlinSettings {
                octaves: 3,
                frequency_per_unit: 0.02,
                persistence: 0.3,
            },
        },
        Preset {
            name: "Jagged Plains",
            settings: PerlinSettings {
                octaves: 11,
                frequency_per_unit: 0.001,
                persistence: 0.51,
            },
        },
        Preset {
            name: "Spiky Mountains",
            settings: PerlinSettings {
                octaves: 2,
                frequency_per_unit: 0.117,
                persistence: 0.155,
            },
        },
    ];

    /// # Errors
    ///
    /// Returns `InvalidConfig` if any field is outside its documented range
    pub fn validate(&self) -> Result<()> {
        if !(1..=Self::OCTAVES_MAX).contains(&self.octaves) {
            return Err(TerrainError::InvalidConfig(format!(
                "Perlin octaves must be within [1, {}] (got {})",
                Self::OCTAVES_MAX,
                self.octaves
            )));
        }
        check_range("Perlin frequency", self.frequency_per_unit, 0.001, 0.2)?;
        check_range("Perlin persistence", self.persistence, 0.001, 1.0)
    }
}

impl Default for PerlinSettings {
    fn default() -> Self {
        Self::PRESETS[0].settings
    }
}

/// Settings of the Voronoi peak method
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VoronoiSettings {
    /// Shape of the slopes between peaks and valleys
    pub peak_type: PeakType,
    /// Peaks per world unit of width
    pub frequency_per_unit: f32,
    /// Probability of a random peak having a non-zero height
    pub peak_ratio: f32,
    /// Width of the flat peak tops, relative to the distance to the valley
    pub peak_width: f32,
    /// Include the user peaks; the result then keeps their exact heights
    pub use_peaks: bool,
}

impl VoronoiSettings {
    pub const PRESETS: &'static [Preset<VoronoiSettings>] = &[
        Preset {
            name: "Rolling Hills",
            settings: VoronoiSettings {
                peak_type: PeakType::Sine,
                frequency_per_unit: 0.025,
                peak_ratio: 0.755,
                peak_width: 0.21,
                use_peaks: false,
            },
        },
        Preset {
            name: "Highland Plateaus",
            settings: VoronoiSettings {
                peak_type: PeakType::Quadratic,
                frequency_per_unit: 0.012,
                peak_ratio: 0.664,
                peak_width: 0.21,
                use_peaks: false,
            },
        },
        Preset {
            name: "Scattered Mountains",
            settings: VoronoiSettings {
                peak_type: PeakType::Sine,
                frequency_per_unit: 0.037,
                peak_ratio: 0.237,
                peak_width: 0.21,
                use_peaks: false,
            },
        },
    ];

    pub fn validate(&self) -> Result<()> {
        check_range("Voronoi frequency", self.frequency_per_unit, 0.001, 0.2)?;
        check_range("Voronoi peak ratio", self.peak_ratio, 0.001, 1.0)?;
        check_range("Voronoi peak width", self.peak_width, 0.001, 1.0)
    }
}

impl Default for VoronoiSettings {
    fn default() -> Self {
        Self::PRESETS[0].settings
    }
}

/// Settings of the midpoint displacement method
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MidpointSettings {
    /// Seed cells per world unit of width
    pub frequency_per_unit: f32,
    /// 0 is smooth, 1 is rough
    pub roughness: f32,
    /// Pin the user peaks onto the seed cells
    pub use_peaks: bool,
}

impl MidpointSettings {
    pub const PRESETS: &'static [Preset<MidpointSettings>] = &[
        Preset {
            name: "Spiky Hills",
            settings: MidpointSettings {
                frequency_per_unit: 0.025,
                roughness: 0.082,
                use_peaks: false,
            },
        },
        Preset {
            name: "Jagged Plains",
            settings: MidpointSettings {
                frequency_per_unit: 0.001,
                roughness: 0.709,
                use_peaks: false,
            },
        },
        Preset {
            name: "Jagged Mountains",
            settings: MidpointSettings {
                frequency_per_unit: 0.084,
                roughness: 0.327,
                use_peaks: false,
            },
        },
    ];

    pub fn validate(&self) -> Result<()> {
        check_range("Midpoint frequency", self.frequency_per_unit, 0.001, 0.2)?;
        check_range("Midpoint roughness", self.roughness, 0.0, 1.0)
    }
}

impl Default for MidpointSettings {
    fn default() -> Self {
        Self::PRESETS[0].settings
    }
}

/// Settings of the random walk method
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WalkSettings {
    /// Largest heading change per world unit, in degrees
    pub angle_change_per_unit: f32,
    /// Turning points per world unit of width
    pub frequency_per_unit: f32,
    /// How tightly the walk stays around its past heights (0 to 2)
    pub cohesion_per_unit: f32,
}

impl WalkSettings {
    pub const PRESETS: &'static [Preset<WalkSettings>] = &[
        Preset {
            name: "Rolling Hills",
            settings: WalkSettings {
                angle_change_per_unit: 56.0,
                frequency_per_unit: 0.5,
                cohesion_per_unit: 0.855,
            },
        },
        Preset {
            name: "Large Plains",
            settings: WalkSettings {
                angle_change_per_unit: 39.0,
                frequency_per_unit: 0.269,
                cohesion_per_unit: 2.0,
            },
        },
    ];

    pub fn validate(&self) -> Result<()> {
        check_range("Walk angle change", self.angle_change_per_unit, 0.0, 100.0)?;
        check_range("Walk frequency", self.frequency_per_unit, 0.001, 0.5)?;
        check_range("Walk cohesion", self.cohesion_per_unit, 0.0, 2.0)
    }
}

impl Default for WalkSettings {
    fn default() -> Self {
        Self::PRESETS[0].settings
    }
}

/// Relative weight of each method in the blended curve
///
/// Weights are relative to their sum; a method with weight 0 is skipped.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlendWeights {
    pub perlin: f32,
    pub voronoi: f32,
    pub midpoint: f32,
    pub walk: f32,
}

impl BlendWeights {
    /// Weight of a single method
    pub fn get(&self, method: CurveMethod) -> f32 {
        match method {
            CurveMethod::Perlin => self.perlin,
            CurveMethod::Voronoi => self.voronoi,
            CurveMethod::Midpoint => self.midpoint,
            CurveMethod::Walk => self.walk,
        }
    }

    pub fn set(&mut self, method: CurveMethod, weight: f32) {
        match method {
            CurveMethod::Perlin => self.perlin = weight,
            CurveMethod::Voronoi => self.voronoi = weight,
            CurveMethod::Midpoint => self.midpoint = weight,
            CurveMethod::Walk => self.walk = weight,
        }
    }

    /// Sum of all weights
    pub fn total(&self) -> f32 {
        CurveMethod::ALL.iter().map(|&method| self.get(method)).sum()
    }

    /// Full weight on a single method
    pub fn only(method: CurveMethod) -> Self {
        let mut weights = Self {
            perlin: 0.0,
            voronoi: 0.0,
            midpoint: 0.0,
            walk: 0.0,
        };
        weights.set(method, 1.0);
        weights
    }

    fn validate(&self) -> Result<()> {
        for method in CurveMethod::ALL {
            let weight = self.get(method);
            if !weight.is_finite() || weight < 0.0 {
                return Err(TerrainError::InvalidConfig(format!(
                    "{} weight must be a finite non-negative number (got {})",
                    method.name(),
                    weight
                )));
            }
        }
        Ok(())
    }
}

impl Default for BlendWeights {
    fn default() -> Self {
        Self::only(CurveMethod::Perlin)
    }
}

// ============================================================================
// CURVE CONFIG
// ============================================================================

/// Configuration for deterministic terrain curve generation
///
/// The same configuration always produces the identical curve when generated
/// with [`CurveGenerator::generate_seeded`](crate::CurveGenerator::generate_seeded).
///
/// # Example
///
/// ```rust
/// use terrain_curve::*;
///
/// let config = CurveConfigBuilder::new()
///     .seed(42)
///     .walk(WalkSettings::PRESETS[1].settings)
///     .unwrap()
///     .weight(CurveMethod::Walk, 0.5)
///     .unwrap()
///     .build()
///     .unwrap();
///
/// assert_eq!(config.node_count(), 201);
///
/// # #[cfg(feature = "serde")]
/// # {
/// let json = serde_json::to_string(&config).unwrap();
/// let restored: CurveConfig = serde_json::from_str(&json).unwrap();
/// assert_eq!(config, restored);
/// # }
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct CurveConfig {
    /// Random seed for deterministic generation
    pub seed: u64,

    /// Rectangle the curve is generated in
    pub area: TargetArea,

    /// Distance between two neighbouring nodes along the area width
    pub node_step: f32,

    pub perlin: PerlinSettings,
    pub voronoi: VoronoiSettings,
    pub midpoint: MidpointSettings,
    pub walk: WalkSettings,

    /// Blend weight of each method
    pub weights: BlendWeights,

    /// User peaks in normalized area coordinates
    ///
    /// Only used by methods whose `use_peaks` flag is set.
    pub peaks: Vec<Peak>,
}

impl CurveConfig {
    /// Number of nodes the generated curve will have
    #[inline]
    pub fn node_count(&self) -> usize {
        self.area.node_count(self.node_step)
    }
}

impl Default for CurveConfig {
    fn default() -> Self {
        CurveConfigBuilder::new().into_config(rand::random())
    }
}

/// Builder for creating CurveConfig with validation
///
/// # Example
///
/// ```rust
/// use terrain_curve::*;
/// use glam::Vec2;
///
/// let config = CurveConfigBuilder::new()
///     .seed(7)
///     .target_area(TargetArea::new(Vec2::ZERO, Vec2::new(40.0, 10.0), 15.0))
///     .unwrap()
///     .node_step(0.25)
///     .unwrap()
///     .peak(0.5, 1.0)
///     .build()
///     .unwrap();
///
/// assert_eq!(config.node_count(), 161);
/// assert_eq!(config.peaks.len(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct CurveConfigBuilder {
    seed: Option<u64>,
    area: TargetArea,
    node_step: f32,
    perlin: PerlinSettings,
    voronoi: VoronoiSettings,
    midpoint: MidpointSettings,
    walk: WalkSettings,
    weights: BlendWeights,
    peaks: Vec<Peak>,
}

impl CurveConfigBuilder {
    /// Create a new builder with default values
    ///
    /// Defaults:
    /// - seed: Random (generated from thread_rng)
    /// - area: 100 x 100 centred at (50, 50), unrotated
    /// - node_step: 0.5
    /// - method settings: first preset of each method
    /// - weights: Perlin only
    /// - peaks: none
    pub fn new() -> Self {
        Self {
            seed: None,
            area: TargetArea::default(),
            node_step: 0.5,
            perlin: PerlinSettings::default(),
            voronoi: VoronoiSettings::default(),
            midpoint: MidpointSettings::default(),
            walk: WalkSettings::default(),
            weights: BlendWeights::default(),
            peaks: Vec::new(),
        }
    }

    /// Set the random seed
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the target area
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` if either side is not a positive finite number
    pub fn target_area(mut self, area: TargetArea) -> Result<Self> {
        let size = area.size;
        if !(size.x > 0.0 && size.y > 0.0) || !size.is_finite() {
            return Err(TerrainError::InvalidConfig(format!(
                "Target area size must be positive (got {}x{})",
                size.x, size.y
            )));
        }
        self.area = area;
        Ok(self)
    }

    /// Set the distance between two nodes
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` if the step is below 0.001 or not finite
    pub fn node_step(mut self, step: f32) -> Result<Self> {
        if !(step >= NODE_STEP_MIN) || !step.is_finite() {
            return Err(TerrainError::InvalidConfig(format!(
                "Node step must be at least {} (got {})",
                NODE_STEP_MIN, step
            )));
        }
        self.node_step = step;
        Ok(self)
    }

    pub fn perlin(mut self, settings: PerlinSettings) -> Result<Self> {
        settings.validate()?;
        self.perlin = settings;
        Ok(self)
    }

    pub fn voronoi(mut self, settings: VoronoiSettings) -> Result<Self> {
        settings.validate()?;
        self.voronoi = settings;
        Ok(self)
    }

    pub fn midpoint(mut self, settings: MidpointSettings) -> Result<Self> {
        settings.validate()?;
        self.midpoint = settings;
        Ok(self)
    }

    pub fn walk(mut self, settings: WalkSettings) -> Result<Self> {
        settings.validate()?;
        self.walk = settings;
        Ok(self)
    }

    /// Set the blend weight of one method
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` if the weight is negative or not finite
    pub fn weight(mut self, method: CurveMethod, weight: f32) -> Result<Self> {
        let mut weights = self.weights;
        weights.set(method, weight);
        weights.validate()?;
        self.weights = weights;
        Ok(self)
    }

    /// Replace all blend weights at once
    pub fn weights(mut self, weights: BlendWeights) -> Result<Self> {
        weights.validate()?;
        self.weights = weights;
        Ok(self)
    }

    /// Add a user peak at normalized `(x, y)`, clamped into the area
    pub fn peak(mut self, x: f32, y: f32) -> Self {
        self.peaks.push(Peak::new(x.clamp(0.0, 1.0), y.clamp(0.0, 1.0)));
        self
    }

    /// Add several user peaks, clamped into the area
    pub fn peaks<I: IntoIterator<Item = Peak>>(mut self, peaks: I) -> Self {
        self.peaks.extend(peaks.into_iter().map(|mut peak| {
            peak.position = peak.position.clamp(Vec2::ZERO, Vec2::ONE);
            peak
        }));
        self
    }

    /// Build the configuration
    ///
    /// If no seed was provided, generates a random seed using thread_rng.
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` if the area is too narrow for two nodes at
    /// the chosen step
    pub fn build(self) -> Result<CurveConfig> {
        let node_count = self.area.node_count(self.node_step);
        if node_count < 2 {
            return Err(TerrainError::InvalidConfig(format!(
                "Target area of width {} is too small for node step {}",
                self.area.size.x, self.node_step
            )));
        }

        let seed = self.seed.unwrap_or_else(rand::random);
        Ok(self.into_config(seed))
    }

    fn into_config(self, seed: u64) -> CurveConfig {
        CurveConfig {
            seed,
            area: self.area,
            node_step: self.node_step,
            perlin: self.perlin,
            voronoi: self.voronoi,
            midpoint: self.midpoint,
            walk: self.walk,
            weights: self.weights,
            peaks: self.peaks,
        }
    }
}

impl Default for CurveConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults() {
        let config = CurveConfigBuilder::new().build().unwrap();
        assert_eq!(config.area, TargetArea::default());
        assert_eq!(config.node_step, 0.5);
        assert_eq!(config.node_count(), 201);
        assert_eq!(config.weights, BlendWeights::only(CurveMethod::Perlin));
        assert!(config.peaks.is_empty());
    }

    #[test]
    fn test_builder_custom() {
        let config = CurveConfigBuilder::new()
            .seed(42)
            .node_step(2.0)
            .unwrap()
            .voronoi(VoronoiSettings::PRESETS[2].settings)
            .unwrap()
            .weight(CurveMethod::Voronoi, 3.0)
            .unwrap()
            .build()
            .unwrap();

        assert_eq!(config.seed, 42);
        assert_eq!(config.node_count(), 51);
        assert_eq!(config.voronoi.peak_ratio, 0.237);
        assert_eq!(config.weights.total(), 4.0);
    }

    #[test]
    fn test_defaults_are_first_presets() {
        assert_eq!(PerlinSettings::default(), PerlinSettings::PRESETS[0].settings);
        assert_eq!(VoronoiSettings::default().peak_type, PeakType::Sine);
        assert_eq!(MidpointSettings::default().roughness, 0.082);
        assert_eq!(WalkSettings::default().angle_change_per_unit, 56.0);
    }

    #[test]
    fn test_presets_are_valid() {
        for preset in PerlinSettings::PRESETS {
            assert!(preset.settings.validate().is_ok(), "{}", preset.name);
        }
        for preset in VoronoiSettings::PRESETS {
            assert!(preset.settings.validate().is_ok(), "{}", preset.name);
        }
        for preset in MidpointSettings::PRESETS {
            assert!(preset.settings.validate().is_ok(), "{}", preset.name);
        }
        for preset in WalkSettings::PRESETS {
            assert!(preset.settings.validate().is_ok(), "{}", preset.name);
        }
    }

    #[test]
    fn test_builder_too_many_octaves() {
        let settings = PerlinSettings {
            octaves: 21,
            ..PerlinSettings::default()
        };
        assert!(CurveConfigBuilder::new().perlin(settings).is_err());
    }

    #[test]
    fn test_builder_out_of_range_settings() {
        let walk = WalkSettings {
            cohesion_per_unit: 2.5,
            ..WalkSettings::default()
        };
        assert!(CurveConfigBuilder::new().walk(walk).is_err());

        let midpoint = MidpointSettings {
            roughness: f32::NAN,
            ..MidpointSettings::default()
        };
        assert!(CurveConfigBuilder::new().midpoint(midpoint).is_err());
    }

    #[test]
    fn test_builder_invalid_weights() {
        assert!(CurveConfigBuilder::new().weight(CurveMethod::Walk, -1.0).is_err());
        assert!(CurveConfigBuilder::new()
            .weight(CurveMethod::Perlin, f32::INFINITY)
            .is_err());
    }

    #[test]
    fn test_node_count_with_unusable_step() {
        let area = TargetArea::default();
        assert_eq!(area.node_count(0.5), 201);
        assert_eq!(area.node_count(0.0), 0);
        assert_eq!(area.node_count(-1.0), 0);
        assert_eq!(area.node_count(f32::NAN), 0);
        assert_eq!(area.node_count(1e-30), usize::MAX);
    }

    #[test]
    fn test_builder_invalid_step_and_area() {
        assert!(CurveConfigBuilder::new().node_step(0.0).is_err());
        assert!(CurveConfigBuilder::new().node_step(f32::NAN).is_err());

        let flat = TargetArea::new(Vec2::ZERO, Vec2::new(10.0, 0.0), 0.0);
        assert!(CurveConfigBuilder::new().target_area(flat).is_err());
    }

    #[test]
    fn test_builder_area_too_small_for_step() {
        let narrow = TargetArea::new(Vec2::ZERO, Vec2::new(0.2, 1.0), 0.0);
        let result = CurveConfigBuilder::new()
            .target_area(narrow)
            .unwrap()
            .node_step(1.0)
            .unwrap()
            .build();
        assert!(matches!(result, Err(TerrainError::InvalidConfig(_))));
    }

    #[test]
    fn test_peaks_are_clamped() {
        let config = CurveConfigBuilder::new()
            .peak(-0.5, 2.0)
            .peaks([Peak::new(1.5, 0.5)])
            .build()
            .unwrap();
        assert_eq!(config.peaks[0].position, Vec2::new(0.0, 1.0));
        assert_eq!(config.peaks[1].position, Vec2::new(1.0, 0.5));
    }

    #[test]
    fn test_target_area_boundary_unrotated() {
        let area = TargetArea::default();
        let [bl, tl, tr, br] = area.boundary();
        assert_eq!(bl, Vec2::new(0.0, 0.0));
        assert_eq!(tl, Vec2::new(0.0, 100.0));
        assert_eq!(tr, Vec2::new(100.0, 100.0));
        assert_eq!(br, Vec2::new(100.0, 0.0));
    }

    #[test]
    fn test_target_area_rotation_round_trip() {
        let area = TargetArea::new(Vec2::new(3.0, -2.0), Vec2::new(8.0, 4.0), 90.0);
        let [bl, ..] = area.boundary();
        // rotating (-4, -2) by 90 degrees gives (2, -4)
        assert!(bl.abs_diff_eq(Vec2::new(5.0, -6.0), 1e-5));

        let point = Vec2::new(1.5, 0.25);
        assert!(area.to_local(area.to_world(point)).abs_diff_eq(point, 1e-5));
    }

    #[test]
    fn test_blend_weights_accessors() {
        let mut weights = BlendWeights::default();
        weights.set(CurveMethod::Midpoint, 0.5);
        assert_eq!(weights.get(CurveMethod::Perlin), 1.0);
        assert_eq!(weights.get(CurveMethod::Midpoint), 0.5);
        assert_eq!(weights.total(), 1.5);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_config_serialization() {
        let config = CurveConfigBuilder::new()
            .seed(12345)
            .peak(0.3, 0.9)
            .build()
            .unwrap();

        let json = serde_json::to_string(&config).unwrap();
        let restored: CurveConfig = serde_json::from_str(&json).unwrap();

        assert_eq!(config, restored);
    }
}
