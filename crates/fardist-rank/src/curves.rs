//! Posterior band data for visualization consumers.
//!
//! The numeric pipeline stays plotting-free; this module turns one
//! experiment's observations into plain serializable curves (posterior mean,
//! pointwise standard deviation, max marker) that any external plotter can
//! render.

use serde::{Deserialize, Serialize};

use fardist_core::{Domain, ErrorInfo, ExperimentBatch, FardistError};
use fardist_gp::{conditioned_covmat, conditioned_mu, k_se};

/// Posterior summary of one experiment under one length-scale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PosteriorCurve {
    /// Length-scale the posterior was conditioned with.
    pub lengthscale: f64,
    /// Posterior mean, one entry per domain point.
    pub mean: Vec<f64>,
    /// Posterior standard deviation, one entry per domain point.
    pub sd: Vec<f64>,
    /// Domain index of the posterior-mean maximum.
    pub max_index: usize,
    /// Domain location of the maximum.
    pub max_location: f64,
    /// Posterior-mean value at the maximum.
    pub max_value: f64,
}

/// Computes one [`PosteriorCurve`] per pool entry for a single experiment.
pub fn posterior_curves(
    batch: &ExperimentBatch,
    experiment: usize,
    domain: &Domain,
    lengthscale_pool: &[f64],
    sigvar: f64,
    noisevar: f64,
) -> Result<Vec<PosteriorCurve>, FardistError> {
    if experiment >= batch.n_exp() {
        return Err(FardistError::Shape(
            ErrorInfo::new("experiment-out-of-range", "experiment index exceeds the batch")
                .with_context("experiment", experiment.to_string())
                .with_context("n_exp", batch.n_exp().to_string()),
        ));
    }
    let x_obs = batch.locations(experiment);
    let y_obs = batch.values(experiment);

    let mut curves = Vec::with_capacity(lengthscale_pool.len());
    for &lengthscale in lengthscale_pool {
        let mu = conditioned_mu(domain.as_slice(), x_obs, y_obs, lengthscale, sigvar, noisevar)?;
        let k_domain = k_se(domain.as_slice(), domain.as_slice(), lengthscale, sigvar);
        let cov = conditioned_covmat(
            domain.as_slice(),
            &k_domain,
            x_obs,
            lengthscale,
            sigvar,
            noisevar,
        )?;
        // tiny negative diagonal entries are factorization round-off
        let sd: Vec<f64> = (0..domain.len()).map(|i| cov[(i, i)].max(0.0).sqrt()).collect();

        let mut max_index = 0;
        for (index, &value) in mu.as_slice().iter().enumerate().skip(1) {
            if value > mu[max_index] {
                max_index = index;
            }
        }
        curves.push(PosteriorCurve {
            lengthscale,
            max_index,
            max_location: domain.location(max_index),
            max_value: mu[max_index],
            mean: mu.as_slice().to_vec(),
            sd,
        });
    }
    Ok(curves)
}
