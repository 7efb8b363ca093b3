//! 1D value noise summed over octaves
//!
//! Each octave is a fixed array of random samples read back with cosine
//! interpolation. The noise function is the sum of octaves whose frequency
//! doubles and whose amplitude is scaled by the persistence each step.
//! Low octaves give the broad shape, high octaves add fine jitter.

use std::f32::consts::PI;

use log::{error, warn};
use rand::Rng;

/// Amplitude used when the configured one is not positive
const FALLBACK_AMPLITUDE: f32 = 0.1;

/// Lowest frequency an octave can interpolate over
const MIN_FREQUENCY: usize = 2;

/// Configuration for a Perlin noise function
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PerlinConfig {
    /// Number of octaves (at least 1)
    pub octaves: usize,
    /// Amplitude of the first octave
    pub amplitude: f32,
    /// Number of samples in the first octave (at least 2)
    pub frequency: usize,
    /// Amplitude multiplier per octave
    pub persistence: f32,
}

impl Default for PerlinConfig {
    fn default() -> Self {
        Self {
            octaves: 3,
            amplitude: 1.0,
            frequency: 3,
            persistence: 0.3,
        }
    }
}

// ============================================================================
// OCTAVE
// ============================================================================

/// One noise layer: `frequency` random samples in `[0, amplitude)`
#[derive(Debug, Clone, PartialEq)]
pub struct PerlinOctave {
    amplitude: f32,
    samples: Vec<f32>,
}

impl PerlinOctave {
    /// Create an octave with all samples at zero
    ///
    /// Frequencies below 2 are raised to 2 so interpolation always has two
    /// neighbours to work with.
    pub fn new(amplitude: f32, frequency: usize) -> Self {
        Self {
            amplitude,
            samples: vec![0.0; frequency.max(MIN_FREQUENCY)],
        }
    }

    #[inline]
    pub fn amplitude(&self) -> f32 {
        self.amplitude
    }

    #[inline]
    pub fn frequency(&self) -> usize {
        self.samples.len()
    }

    pub fn samples(&self) -> &[f32] {
        &self.samples
    }

    /// Redraw every sample uniformly from `[0, amplitude)`
    pub fn regenerate<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let amplitude = self.amplitude;
        for sample in self.samples.iter_mut() {
            *sample = amplitude * rng.gen::<f32>();
        }
    }

    /// Value of the octave at `x01`; `x01` is clamped into `[0, 1]` first
    pub fn sample(&self, x01: f32) -> f32 {
        let last = self.samples.len() - 1;
        let x = x01.clamp(0.0, 1.0) * last as f32;
        let lower = (x.floor() as usize).min(last);
        let upper = (x.ceil() as usize).min(last);

        interpolate_cosine(self.samples[lower], self.samples[upper], x - lower as f32)
    }
}

/// Cosine interpolation from `a` to `b`
#[inline]
fn interpolate_cosine(a: f32, b: f32, t: f32) -> f32 {
    let f = (1.0 - (t * PI).cos()) * 0.5;
    a * (1.0 - f) + b * f
}

// ============================================================================
// NOISE
// ============================================================================

/// Sum of [`PerlinOctave`]s forming band-limited fractal noise
#[derive(Debug, Clone, PartialEq)]
pub struct PerlinNoise {
    octaves: Vec<PerlinOctave>,
}

impl PerlinNoise {
    /// Build the octaves without drawing any values
    ///
    /// Invalid parameters are corrected and logged rather than rejected:
    /// zero octaves become 1, frequencies below 2 become 2 and non-positive
    /// amplitudes become 0.1.
    pub fn new(config: PerlinConfig) -> Self {
        let PerlinConfig {
            mut octaves,
            mut amplitude,
            mut frequency,
            persistence,
        } = config;

        if frequency < MIN_FREQUENCY {
            error!("Perlin frequency must be at least {} (got {})", MIN_FREQUENCY, frequency);
            frequency = MIN_FREQUENCY;
        }
        if !(amplitude > 0.0) {
            error!("Perlin amplitude must be bigger than 0 (got {})", amplitude);
            amplitude = FALLBACK_AMPLITUDE;
        }
        if octaves < 1 {
            warn!("Perlin octave count must be at least 1 (got {})", octaves);
            octaves = 1;
        }

        let octaves = (0..octaves)
            .scan((amplitude, frequency), |(amp, freq), _| {
                let octave = PerlinOctave::new(*amp, *freq);
                *amp *= persistence;
                *freq = freq.saturating_mul(2);
                Some(octave)
            })
            .collect();

        Self { octaves }
    }

    pub fn octaves(&self) -> &[PerlinOctave] {
        &self.octaves
    }

    /// Redraw the samples of every octave
    pub fn regenerate<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        for octave in self.octaves.iter_mut() {
            octave.regenerate(rng);
        }
    }

    /// Sum of all octaves at `x`; `x` is clamped into `[0, 1]` first
    pub fn sample(&self, x: f32) -> f32 {
        self.octaves.iter().map(|octave| octave.sample(x)).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_octave_boundaries_hit_samples_exactly() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        for frequency in [2, 3, 5, 16, 33] {
            let mut octave = PerlinOctave::new(1.5, frequency);
            octave.regenerate(&mut rng);

            let samples = octave.samples();
            assert_eq!(octave.sample(0.0), samples[0]);
            assert_eq!(octave.sample(1.0), samples[frequency - 1]);
        }
    }

    #[test]
    fn test_octave_samples_within_amplitude() {
        let mut rng = ChaCha8Rng::seed_from_u64(99);
        let mut octave = PerlinOctave::new(2.0, 64);
        octave.regenerate(&mut rng);

        assert!(octave.samples().iter().all(|&s| (0.0..2.0).contains(&s)));
    }

    #[test]
    fn test_octave_interpolation_midpoint() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let mut octave = PerlinOctave::new(1.0, 2);
        octave.regenerate(&mut rng);

        // cosine weight at t = 0.5 is exactly one half
        let [a, b] = [octave.samples()[0], octave.samples()[1]];
        assert!((octave.sample(0.5) - 0.5 * (a + b)).abs() < 1e-6);
    }

    #[test]
    fn test_octave_clamps_out_of_range_input() {
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        let mut octave = PerlinOctave::new(1.0, 4);
        octave.regenerate(&mut rng);

        assert_eq!(octave.sample(-3.0), octave.sample(0.0));
        assert_eq!(octave.sample(8.0), octave.sample(1.0));
    }

    #[test]
    fn test_single_octave_noise_matches_octave() {
        let config = PerlinConfig {
            octaves: 1,
            amplitude: 1.0,
            frequency: 6,
            persistence: 0.5,
        };
        let mut noise = PerlinNoise::new(config);
        noise.regenerate(&mut ChaCha8Rng::seed_from_u64(5));

        let octave = &noise.octaves()[0];
        for i in 0..=50 {
            let x = i as f32 / 50.0;
            assert_eq!(noise.sample(x), octave.sample(x));
        }
    }

    #[test]
    fn test_octave_schedule() {
        let config = PerlinConfig {
            octaves: 4,
            amplitude: 2.0,
            frequency: 3,
            persistence: 0.5,
        };
        let noise = PerlinNoise::new(config);

        let frequencies: Vec<usize> = noise.octaves().iter().map(|o| o.frequency()).collect();
        let amplitudes: Vec<f32> = noise.octaves().iter().map(|o| o.amplitude()).collect();
        assert_eq!(frequencies, vec![3, 6, 12, 24]);
        assert_eq!(amplitudes, vec![2.0, 1.0, 0.5, 0.25]);
    }

    #[test]
    fn test_invalid_parameters_are_corrected() {
        let config = PerlinConfig {
            octaves: 0,
            amplitude: -1.0,
            frequency: 1,
            persistence: 0.5,
        };
        let noise = PerlinNoise::new(config);

        assert_eq!(noise.octaves().len(), 1);
        assert_eq!(noise.octaves()[0].frequency(), 2);
        assert_eq!(noise.octaves()[0].amplitude(), FALLBACK_AMPLITUDE);
    }

    #[test]
    fn test_nan_amplitude_is_corrected() {
        let config = PerlinConfig {
            amplitude: f32::NAN,
            ..PerlinConfig::default()
        };
        let noise = PerlinNoise::new(config);
        assert_eq!(noise.octaves()[0].amplitude(), FALLBACK_AMPLITUDE);
    }

    #[test]
    fn test_regenerate_changes_values() {
        let mut noise = PerlinNoise::new(PerlinConfig::default());
        let mut rng = ChaCha8Rng::seed_from_u64(42);

        noise.regenerate(&mut rng);
        let first: Vec<f32> = (0..10).map(|i| noise.sample(i as f32 / 9.0)).collect();
        noise.regenerate(&mut rng);
        let second: Vec<f32> = (0..10).map(|i| noise.sample(i as f32 / 9.0)).collect();

        assert_ne!(first, second, "each regeneration should draw new samples");
    }

    #[test]
    fn test_determinism_with_same_seed() {
        let mut a = PerlinNoise::new(PerlinConfig::default());
        let mut b = PerlinNoise::new(PerlinConfig::default());
        a.regenerate(&mut ChaCha8Rng::seed_from_u64(1234));
        b.regenerate(&mut ChaCha8Rng::seed_from_u64(1234));

        assert_eq!(a, b);
    }
}
