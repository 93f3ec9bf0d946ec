//! Conditioned GP posterior mean and covariance.

use fardist_core::{ErrorInfo, FardistError};
use nalgebra::{Cholesky, DMatrix, DVector};

use crate::kernel::k_se;

fn check_observations(x_obs: &[f64], y_obs: &[f64]) -> Result<(), FardistError> {
    if x_obs.is_empty() {
        return Err(FardistError::Shape(ErrorInfo::new(
            "obs-empty",
            "conditioning requires at least one observation",
        )));
    }
    if x_obs.len() != y_obs.len() {
        return Err(FardistError::Shape(
            ErrorInfo::new("obs-mismatch", "observation locations and values disagree in length")
                .with_context("x_len", x_obs.len().to_string())
                .with_context("y_len", y_obs.len().to_string()),
        ));
    }
    Ok(())
}

fn obs_cholesky(
    x_obs: &[f64],
    lengthscale: f64,
    sigvar: f64,
    noisevar: f64,
) -> Result<Cholesky<f64, nalgebra::Dyn>, FardistError> {
    let mut k_obs = k_se(x_obs, x_obs, lengthscale, sigvar);
    for i in 0..x_obs.len() {
        k_obs[(i, i)] += noisevar;
    }
    Cholesky::new(k_obs).ok_or_else(|| {
        FardistError::Gp(
            ErrorInfo::new(
                "kernel-not-pd",
                "observation kernel matrix is not positive definite",
            )
            .with_context("n_obs", x_obs.len().to_string())
            .with_context("lengthscale", lengthscale.to_string())
            .with_context("noisevar", noisevar.to_string())
            .with_hint("raise the noise variance floor above zero"),
        )
    })
}

/// Posterior mean over `domain`, conditioned on noisy observations.
///
/// Computes `K(domain, obs) (K(obs, obs) + noisevar I)^-1 y` through a
/// Cholesky solve. The noise variance keeps the factorization well posed;
/// callers default it to a small positive floor rather than exactly zero.
pub fn conditioned_mu(
    domain: &[f64],
    x_obs: &[f64],
    y_obs: &[f64],
    lengthscale: f64,
    sigvar: f64,
    noisevar: f64,
) -> Result<DVector<f64>, FardistError> {
    check_observations(x_obs, y_obs)?;
    let chol = obs_cholesky(x_obs, lengthscale, sigvar, noisevar)?;
    let alpha = chol.solve(&DVector::from_column_slice(y_obs));
    let k_cross = k_se(domain, x_obs, lengthscale, sigvar);
    Ok(k_cross * alpha)
}

/// Posterior covariance over `domain`, conditioned on observation locations.
///
/// `k_domain` is the prior self-covariance of the domain (typically
/// `k_se(domain, domain, ..)`, which callers often already have in hand).
/// Returns `k_domain - K(domain, obs) (K(obs, obs) + noisevar I)^-1
/// K(obs, domain)`.
pub fn conditioned_covmat(
    domain: &[f64],
    k_domain: &DMatrix<f64>,
    x_obs: &[f64],
    lengthscale: f64,
    sigvar: f64,
    noisevar: f64,
) -> Result<DMatrix<f64>, FardistError> {
    if k_domain.nrows() != domain.len() || k_domain.ncols() != domain.len() {
        return Err(FardistError::Shape(
            ErrorInfo::new("k-domain-shape", "prior domain covariance has the wrong shape")
                .with_context("domain_len", domain.len().to_string())
                .with_context("k_rows", k_domain.nrows().to_string())
                .with_context("k_cols", k_domain.ncols().to_string()),
        ));
    }
    if x_obs.is_empty() {
        return Err(FardistError::Shape(ErrorInfo::new(
            "obs-empty",
            "conditioning requires at least one observation",
        )));
    }
    let chol = obs_cholesky(x_obs, lengthscale, sigvar, noisevar)?;
    let k_cross = k_se(domain, x_obs, lengthscale, sigvar);
    let solved = chol.solve(&k_cross.transpose());
    Ok(k_domain - &k_cross * solved)
}
