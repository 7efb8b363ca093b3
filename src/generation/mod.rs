//! Curve generation driver
//!
//! Runs every method with a non-zero blend weight over the target area and
//! blends their height maps into one normalized profile, which is then laid
//! out as a [`TerrainCurve`].

mod peaks;

pub use peaks::prepare_peaks;

use log::{debug, info};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::config::{CurveConfig, MidpointSettings, PerlinSettings, VoronoiSettings, WalkSettings};
use crate::curve::TerrainCurve;
use crate::error::{Result, TerrainError};
use crate::terrain::{
    normalize, HeightMap, Midpoint, Peak, PerlinConfig, PerlinNoise, RandomWalk, Voronoi,
};

/// Height generation methods that can be blended together
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CurveMethod {
    /// Octaves of smooth value noise
    Perlin,
    /// Fractal midpoint displacement
    Midpoint,
    /// Slopes between random or user peaks
    Voronoi,
    /// Slope-limited random walk
    Walk,
}

impl CurveMethod {
    /// Every method, in the order they are generated
    pub const ALL: [CurveMethod; 4] = [
        CurveMethod::Perlin,
        CurveMethod::Midpoint,
        CurveMethod::Voronoi,
        CurveMethod::Walk,
    ];

    /// Get a human-readable name for this method
    pub fn name(self) -> &'static str {
        match self {
            CurveMethod::Perlin => "Perlin",
            CurveMethod::Midpoint => "Midpoint",
            CurveMethod::Voronoi => "Voronoi",
            CurveMethod::Walk => "Walk",
        }
    }
}

/// Normalized sample position of node `i` out of `node_count`
#[inline]
fn sample_position(i: usize, node_count: usize) -> f32 {
    i as f32 / node_count.saturating_sub(1).max(1) as f32
}

// ============================================================================
// METHODS
// ============================================================================

/// Perlin noise heights, one sample per node
pub fn perlin_heights<R: Rng + ?Sized>(
    settings: &PerlinSettings,
    width: f32,
    node_count: usize,
    rng: &mut R,
) -> HeightMap {
    let frequency = 1 + (settings.frequency_per_unit * width).round().max(0.0) as usize;
    let mut noise = PerlinNoise::new(PerlinConfig {
        octaves: settings.octaves,
        amplitude: 1.0,
        frequency: frequency.max(2),
        persistence: settings.persistence,
    });
    noise.regenerate(rng);

    HeightMap::Raw(
        (0..node_count)
            .map(|i| noise.sample(sample_position(i, node_count)))
            .collect(),
    )
}

/// Voronoi heights over random peaks, plus the user peaks if enabled
///
/// With user peaks the map keeps their exact heights.
pub fn voronoi_heights<R: Rng + ?Sized>(
    settings: &VoronoiSettings,
    width: f32,
    user_peaks: &[Peak],
    node_count: usize,
    rng: &mut R,
) -> Result<HeightMap> {
    let peak_count = (settings.frequency_per_unit * width).round().max(0.0) as usize;
    let custom = settings.use_peaks.then_some(user_peaks);
    let peaks = prepare_peaks(peak_count, settings.peak_ratio, custom, rng);

    let voronoi = Voronoi::new(&peaks, settings.peak_type, settings.peak_width)?;
    let heights = (0..node_count)
        .map(|i| voronoi.sample(sample_position(i, node_count)))
        .collect();

    Ok(if settings.use_peaks {
        HeightMap::PeakPinned(heights)
    } else {
        HeightMap::Normalized(heights)
    })
}

/// Midpoint displacement heights, one grid cell per node
///
/// With user peaks the values are clamped into `[0, 1]` and pinned.
pub fn midpoint_heights<R: Rng + ?Sized>(
    settings: &MidpointSettings,
    width: f32,
    user_peaks: &[Peak],
    node_count: usize,
    rng: &mut R,
) -> HeightMap {
    let peaks = settings
        .use_peaks
        .then(|| prepare_peaks(user_peaks.len(), 0.0, Some(user_peaks), rng));

    let step = (node_count as f32 / (settings.frequency_per_unit * width)).round();
    let step = if step.is_finite() {
        step.min(node_count as f32) as usize
    } else {
        node_count
    };

    let mut midpoint = Midpoint::new(node_count, step, settings.roughness, peaks.as_deref());
    midpoint.regenerate(rng);

    let cells = &midpoint.cells()[..node_count.min(midpoint.cells().len())];
    if settings.use_peaks {
        HeightMap::PeakPinned(cells.iter().map(|h| h.clamp(0.0, 1.0)).collect())
    } else {
        HeightMap::Raw(cells.to_vec())
    }
}

/// Random walk heights
pub fn walk_heights<R: Rng + ?Sized>(
    settings: &WalkSettings,
    width: f32,
    node_count: usize,
    rng: &mut R,
) -> HeightMap {
    HeightMap::Raw(RandomWalk::new(*settings, width).generate(node_count, rng))
}

// ============================================================================
// BLENDING
// ============================================================================

/// Blend weighted height maps into one profile of `node_count` heights
///
/// The profile starts flat at 0.5 and every map adds its deviation from 0.5
/// scaled by its share of the total weight. `Raw` maps are normalized first.
/// The result is normalized to `[0, 1]` unless a peak-pinned map took part.
///
/// # Errors
///
/// Returns `InvalidArgument` if `node_count < 2` or a map has the wrong length
pub fn blend_heights<I>(node_count: usize, layers: I) -> Result<Vec<f32>>
where
    I: IntoIterator<Item = (HeightMap, f32)>,
{
    if node_count < 2 {
        return Err(TerrainError::InvalidArgument(format!(
            "Target area too small for generating ({} nodes)",
            node_count
        )));
    }

    let layers: Vec<(HeightMap, f32)> = layers.into_iter().filter(|(_, w)| *w > 0.0).collect();
    let total_weight: f32 = layers.iter().map(|(_, w)| w).sum();

    let mut heights = vec![0.5; node_count];
    if !(total_weight > 0.0) {
        return Ok(heights);
    }

    let mut normalize_after = true;
    for (map, weight) in layers {
        if map.len() != node_count {
            return Err(TerrainError::InvalidArgument(format!(
                "Height map has {} values, expected {}",
                map.len(),
                node_count
            )));
        }
        if map.is_peak_pinned() {
            normalize_after = false;
        }

        let share = weight / total_weight;
        for (height, value) in heights.iter_mut().zip(map.into_blendable()) {
            *height += (value - 0.5) * share;
        }
    }

    if normalize_after {
        normalize(&mut heights);
    }
    Ok(heights)
}

// ============================================================================
// GENERATOR
// ============================================================================

/// Generates terrain curves from a [`CurveConfig`]
///
/// # Example
///
/// ```
/// use terrain_curve::*;
///
/// let config = CurveConfigBuilder::new()
///     .seed(3)
///     .weight(CurveMethod::Voronoi, 1.0)
///     .unwrap()
///     .build()
///     .unwrap();
///
/// let generator = CurveGenerator::new(config);
/// let curve = generator.generate_seeded().unwrap();
/// assert_eq!(curve.len(), generator.config().node_count());
/// ```
#[derive(Debug, Clone)]
pub struct CurveGenerator {
    config: CurveConfig,
}

impl CurveGenerator {
    pub fn new(config: CurveConfig) -> Self {
        Self { config }
    }

    #[inline]
    pub fn config(&self) -> &CurveConfig {
        &self.config
    }

    /// Heights of a single method over `node_count` nodes
    pub fn method_heights<R: Rng + ?Sized>(
        &self,
        method: CurveMethod,
        node_count: usize,
        rng: &mut R,
    ) -> Result<HeightMap> {
        let config = &self.config;
        let width = config.area.size.x;
        Ok(match method {
            CurveMethod::Perlin => perlin_heights(&config.perlin, width, node_count, rng),
            CurveMethod::Midpoint => {
                midpoint_heights(&config.midpoint, width, &config.peaks, node_count, rng)
            }
            CurveMethod::Voronoi => {
                voronoi_heights(&config.voronoi, width, &config.peaks, node_count, rng)?
            }
            CurveMethod::Walk => walk_heights(&config.walk, width, node_count, rng),
        })
    }

    /// Blended heights of every weighted method, one per node
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if the area holds fewer than two nodes
    pub fn generate_heights<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Vec<f32>> {
        let node_count = self.config.node_count();
        if node_count < 2 {
            return Err(TerrainError::InvalidArgument(format!(
                "Target area too small for generating ({} nodes)",
                node_count
            )));
        }

        let weights = self.config.weights;
        let total_weight = weights.total();
        info!(
            "Generating terrain curve: {} nodes over width {}",
            node_count, self.config.area.size.x
        );

        let mut layers = Vec::with_capacity(CurveMethod::ALL.len());
        for method in CurveMethod::ALL {
            let weight = weights.get(method);
            if !(weight > 0.0) || !(total_weight > 0.0) {
                continue;
            }
            debug!(
                "Blending {} heights with weight {:.3}",
                method.name(),
                weight / total_weight
            );
            layers.push((self.method_heights(method, node_count, rng)?, weight));
        }

        blend_heights(node_count, layers)
    }

    /// Generate a curve using the given random source
    pub fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<TerrainCurve> {
        let heights = self.generate_heights(rng)?;
        TerrainCurve::from_heights(self.config.area, &heights)
    }

    /// Generate the curve determined by the configured seed
    pub fn generate_seeded(&self) -> Result<TerrainCurve> {
        info!("Seeding terrain curve generation with {}", self.config.seed);
        let mut rng = ChaCha8Rng::seed_from_u64(self.config.seed);
        self.generate(&mut rng)
    }
}
