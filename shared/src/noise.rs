//! Photon shot noise generation.
//!
//! Photon arrivals in each wavelength bin are modeled as independent Poisson
//! processes. The expected count of a bin is the mean of its distribution and
//! the simulated count is a single draw from it.
//!
//! The random source is always supplied by the caller, either directly as an
//! [`Rng`] or as an optional seed, so simulations are reproducible whenever a
//! seed is fixed.

use ndarray::{Array1, ArrayView1};
use rand::rngs::StdRng;
use rand::{thread_rng, Rng, RngCore, SeedableRng};
use rand_distr::{Distribution, Poisson};
use thiserror::Error;

/// Errors that can occur while drawing noise
#[derive(Debug, Error)]
pub enum NoiseError {
    #[error("Poisson mean must be finite and non-negative, got {mean} at index {index}")]
    InvalidMean { index: usize, mean: f64 },

    #[error("Poisson mean {mean} at index {index} exceeds the largest representable count")]
    MeanTooLarge { index: usize, mean: f64 },
}

/// Largest mean accepted by [`poisson_counts`], half of `u64::MAX`, so the
/// integer cast of a draw never saturates.
pub const MAX_POISSON_MEAN: f64 = 9.223_372_036_854_776e18;

/// Draw one Poisson-distributed count per element of `means`.
///
/// Each element is sampled independently with its own mean. A mean of exactly
/// zero always yields zero counts.
///
/// # Arguments
/// * `means` - Expected counts, one per bin
/// * `rng` - Random source used for every draw, in index order
///
/// # Returns
/// Integer counts with the same length as `means`, or an error naming the
/// first mean that is negative, NaN or infinite, or above
/// [`MAX_POISSON_MEAN`].
pub fn poisson_counts<R: Rng + ?Sized>(
    means: ArrayView1<f64>,
    rng: &mut R,
) -> Result<Array1<u64>, NoiseError> {
    let mut counts = Array1::<u64>::zeros(means.len());

    for (index, (&mean, count)) in means.iter().zip(counts.iter_mut()).enumerate() {
        if !mean.is_finite() || mean < 0.0 {
            return Err(NoiseError::InvalidMean { index, mean });
        }
        if mean > MAX_POISSON_MEAN {
            return Err(NoiseError::MeanTooLarge { index, mean });
        }
        if mean == 0.0 {
            continue;
        }

        let poisson = Poisson::new(mean).map_err(|_| NoiseError::InvalidMean { index, mean })?;
        let draw: f64 = poisson.sample(&mut *rng);
        *count = draw as u64;
    }

    Ok(counts)
}

/// Apply Poisson arrival statistics to an array of expected counts.
///
/// # Arguments
/// * `means` - Expected counts, one per bin
/// * `rng_seed` - Optional seed for reproducible results
///
/// # Returns
/// Poisson-sampled counts, one per bin
pub fn apply_poisson_noise(
    means: ArrayView1<f64>,
    rng_seed: Option<u64>,
) -> Result<Array1<u64>, NoiseError> {
    let rng_seed = rng_seed.unwrap_or(thread_rng().next_u64());
    log::debug!("Drawing {} Poisson counts with seed {}", means.len(), rng_seed);

    let mut rng = StdRng::seed_from_u64(rng_seed);
    poisson_counts(means, &mut rng)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_zero_mean_draws_zero() {
        let means = array![0.0, 0.0, 0.0];
        let counts = apply_poisson_noise(means.view(), Some(7)).unwrap();
        assert_eq!(counts, array![0u64, 0, 0]);
    }

    #[test]
    fn test_same_seed_same_draws() {
        let means = array![3.5, 120.0, 1.0e6, 0.25];
        let a = apply_poisson_noise(means.view(), Some(42)).unwrap();
        let b = apply_poisson_noise(means.view(), Some(42)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_injected_rng_matches_seed() {
        let means = array![10.0, 20.0, 30.0];
        let mut rng = StdRng::seed_from_u64(99);
        let injected = poisson_counts(means.view(), &mut rng).unwrap();
        let seeded = apply_poisson_noise(means.view(), Some(99)).unwrap();
        assert_eq!(injected, seeded);
    }

    #[test]
    fn test_large_means_stay_close() {
        // Relative scatter of a Poisson draw is 1/sqrt(mean)
        let means = Array1::from_elem(50, 1.0e8);
        let counts = apply_poisson_noise(means.view(), Some(1)).unwrap();
        for &c in counts.iter() {
            let rel = (c as f64 - 1.0e8).abs() / 1.0e8;
            assert!(rel < 1e-3, "draw {} too far from mean", c);
        }
    }

    #[test]
    fn test_sample_mean_tracks_expectation() {
        let means = Array1::from_elem(20_000, 4.0);
        let counts = apply_poisson_noise(means.view(), Some(2024)).unwrap();
        let mean = counts.iter().map(|&c| c as f64).sum::<f64>() / counts.len() as f64;
        assert!((mean - 4.0).abs() < 0.1, "sample mean was {}", mean);
    }

    #[test]
    fn test_rejects_negative_mean() {
        let means = array![1.0, -2.0];
        let err = apply_poisson_noise(means.view(), Some(3)).unwrap_err();
        assert!(matches!(err, NoiseError::InvalidMean { index: 1, .. }));
    }

    #[test]
    fn test_rejects_unrepresentable_mean() {
        let means = array![10.0, 3.4e21];
        let err = apply_poisson_noise(means.view(), Some(1)).unwrap_err();
        assert!(matches!(err, NoiseError::MeanTooLarge { index: 1, .. }));
    }

    #[test]
    fn test_largest_mean_does_not_saturate() {
        let means = array![1.0e18];
        let counts = apply_poisson_noise(means.view(), Some(1)).unwrap();
        assert!(counts[0] < u64::MAX);
        assert!((counts[0] as f64 - 1.0e18).abs() < 1.0e12);
    }

    #[test]
    fn test_rejects_nan_mean() {
        let means = array![f64::NAN];
        assert!(apply_poisson_noise(means.view(), Some(3)).is_err());
    }
}
