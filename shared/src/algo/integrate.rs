//! Trapezoidal integration over sampled curves.

use ndarray::ArrayView1;

/// Integrate sampled `y` over abscissae `x` with the trapezoidal rule.
///
/// Both arrays must have the same length. Fewer than two samples integrate
/// to zero. The abscissae need not be evenly spaced; a decreasing `x` yields
/// a negative integral, matching the usual definite-integral convention.
///
/// # Panics
/// If `x` and `y` differ in length. Callers are expected to validate grids
/// before integrating.
pub fn trap_integrate(x: ArrayView1<f64>, y: ArrayView1<f64>) -> f64 {
    assert_eq!(
        x.len(),
        y.len(),
        "Abscissae and ordinates must have the same length"
    );

    x.windows(2)
        .into_iter()
        .zip(y.windows(2))
        .map(|(xs, ys)| (xs[1] - xs[0]) * (ys[0] + ys[1]) / 2.0)
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use ndarray::{array, Array1};

    #[test]
    fn test_linear_is_exact() {
        let x = Array1::linspace(0.0, 2.0, 5);
        let y = x.mapv(|v| 3.0 * v + 1.0);
        // ∫₀² (3x + 1) dx = 6 + 2
        assert_relative_eq!(trap_integrate(x.view(), y.view()), 8.0, epsilon = 1e-12);
    }

    #[test]
    fn test_uneven_spacing() {
        let x = array![0.0, 1.0, 3.0];
        let y = array![0.0, 2.0, 2.0];
        assert_relative_eq!(trap_integrate(x.view(), y.view()), 5.0);
    }

    #[test]
    fn test_quadratic_converges() {
        let x = Array1::linspace(0.0, 1.0, 1001);
        let y = x.mapv(|v| v * v);
        assert_relative_eq!(
            trap_integrate(x.view(), y.view()),
            1.0 / 3.0,
            epsilon = 1e-6
        );
    }

    #[test]
    fn test_single_sample_is_zero() {
        let x = array![1.0];
        let y = array![5.0];
        assert_eq!(trap_integrate(x.view(), y.view()), 0.0);
    }

    #[test]
    #[should_panic(expected = "same length")]
    fn test_length_mismatch_panics() {
        let x = array![0.0, 1.0, 2.0];
        let y = array![0.0, 1.0];
        trap_integrate(x.view(), y.view());
    }
}
