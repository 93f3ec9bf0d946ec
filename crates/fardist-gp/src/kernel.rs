//! Squared-exponential kernel matrices over 1-D locations.

use nalgebra::DMatrix;

/// Evaluates the squared-exponential kernel between two location sets.
///
/// Entry `(i, j)` is `sigvar * exp(-(x1[i] - x2[j])^2 / (2 * lengthscale^2))`.
/// `sigvar` enters as the signal variance, so the diagonal of a
/// self-covariance equals `sigvar` exactly.
pub fn k_se(x1: &[f64], x2: &[f64], lengthscale: f64, sigvar: f64) -> DMatrix<f64> {
    let inv_two_lsq = 1.0 / (2.0 * lengthscale * lengthscale);
    DMatrix::from_fn(x1.len(), x2.len(), |i, j| {
        let diff = x1[i] - x2[j];
        sigvar * (-diff * diff * inv_two_lsq).exp()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn self_covariance_diagonal_equals_sigvar() {
        let xs = [0.0, 0.25, 0.9];
        let k = k_se(&xs, &xs, 0.3, 2.5);
        for i in 0..xs.len() {
            assert!((k[(i, i)] - 2.5).abs() < 1e-12);
        }
    }

    #[test]
    fn kernel_is_symmetric_and_decays_with_distance() {
        let xs = [0.0, 0.1, 0.8];
        let k = k_se(&xs, &xs, 0.2, 1.0);
        for i in 0..xs.len() {
            for j in 0..xs.len() {
                assert!((k[(i, j)] - k[(j, i)]).abs() < 1e-12);
            }
        }
        // nearby pair correlates more strongly than the distant pair
        assert!(k[(0, 1)] > k[(0, 2)]);
    }

    #[test]
    fn shorter_lengthscale_decorrelates_faster() {
        let xs = [0.0, 0.3];
        let slow = k_se(&xs, &xs, 0.5, 1.0);
        let fast = k_se(&xs, &xs, 0.05, 1.0);
        assert!(fast[(0, 1)] < slow[(0, 1)]);
    }
}
