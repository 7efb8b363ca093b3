//! Peak lists for the peak-driven methods

use rand::Rng;

use crate::terrain::Peak;

/// Custom peaks closer than this to the ceiling count as touching it
const CEILING_TOLERANCE: f32 = 1e-6;

/// Build a list of at least `max(total, 2)` peaks
///
/// Custom peaks come first, clamped into the unit square (ignored ones are
/// dropped). Random peaks fill the rest: each one is raised to a random
/// height with probability `peak_ratio` and lies flat at 0 otherwise.
/// The random peaks are then scaled so the highest touches 1, unless a custom
/// peak already does.
pub fn prepare_peaks<R: Rng + ?Sized>(
    total: usize,
    peak_ratio: f32,
    custom: Option<&[Peak]>,
    rng: &mut R,
) -> Vec<Peak> {
    let total = total.max(2);
    let mut peaks: Vec<Peak> = custom
        .unwrap_or_default()
        .iter()
        .filter(|peak| !peak.ignored)
        .map(|peak| Peak::new(peak.x().clamp(0.0, 1.0), peak.y().clamp(0.0, 1.0)))
        .collect();

    let custom_count = peaks.len();
    let reaches_ceiling = peaks.iter().any(|peak| (peak.y() - 1.0).abs() <= CEILING_TOLERANCE);

    while peaks.len() < total {
        let y = if rng.gen::<f32>() <= peak_ratio {
            rng.gen::<f32>()
        } else {
            0.0
        };
        let x = rng.gen::<f32>();
        peaks.push(Peak::new(x, y));
    }

    if !reaches_ceiling {
        let random = &mut peaks[custom_count..];
        let highest = random.iter().map(Peak::y).fold(f32::MIN, f32::max);
        if highest > f32::EPSILON {
            for peak in random.iter_mut() {
                peak.position.y /= highest;
            }
        }
    }

    peaks
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::mock::StepRng;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_at_least_two_peaks() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        assert_eq!(prepare_peaks(0, 0.5, None, &mut rng).len(), 2);
        assert_eq!(prepare_peaks(1, 0.5, None, &mut rng).len(), 2);
        assert_eq!(prepare_peaks(7, 0.5, None, &mut rng).len(), 7);
    }

    #[test]
    fn test_random_peaks_reach_ceiling() {
        let peaks = prepare_peaks(12, 0.8, None, &mut ChaCha8Rng::seed_from_u64(9));
        let highest = peaks.iter().map(Peak::y).fold(f32::MIN, f32::max);
        assert!((highest - 1.0).abs() < 1e-6);
        assert!(peaks.iter().all(|p| (0.0..=1.0).contains(&p.x())));
    }

    #[test]
    fn test_constant_draws() {
        // every draw is 0.5: raised (0.5 <= 0.755), height 0.5, x 0.5, scaled to 1
        let peaks = prepare_peaks(3, 0.755, None, &mut StepRng::new(1 << 31, 0));
        assert_eq!(peaks.len(), 3);
        assert!(peaks.iter().all(|p| p.position == glam::Vec2::new(0.5, 1.0)));
    }

    #[test]
    fn test_low_ratio_keeps_peaks_flat() {
        // 0.5 > 0.1 so no peak is raised and there is nothing to scale
        let peaks = prepare_peaks(4, 0.1, None, &mut StepRng::new(1 << 31, 0));
        assert!(peaks.iter().all(|p| p.y() == 0.0));
    }

    #[test]
    fn test_custom_peaks_come_first_and_are_clamped() {
        let mut ignored = Peak::new(0.5, 0.5);
        ignored.ignored = true;
        let custom = [Peak::new(-1.0, 0.4), ignored, Peak::new(0.7, 3.0)];
        let peaks = prepare_peaks(5, 0.5, Some(&custom), &mut ChaCha8Rng::seed_from_u64(4));

        assert_eq!(peaks.len(), 5);
        assert_eq!(peaks[0], Peak::new(0.0, 0.4));
        assert_eq!(peaks[1], Peak::new(0.7, 1.0));
    }

    #[test]
    fn test_ceiling_peak_disables_scaling() {
        let custom = [Peak::new(0.2, 1.0)];
        let mut rng = StepRng::new(1 << 31, 0);
        let peaks = prepare_peaks(3, 0.9, Some(&custom), &mut rng);

        // random peaks keep their drawn height of 0.5
        assert_eq!(peaks[1].y(), 0.5);
        assert_eq!(peaks[2].y(), 0.5);
    }

    #[test]
    fn test_custom_peaks_are_not_scaled() {
        let custom = [Peak::new(0.2, 0.3)];
        let peaks = prepare_peaks(3, 0.9, Some(&custom), &mut StepRng::new(1 << 31, 0));

        assert_eq!(peaks[0].y(), 0.3);
        assert_eq!(peaks[1].y(), 1.0);
    }
}
