//! Random observation-set generation with validity resampling.

use fardist_core::{derive_substream_seed, ErrorInfo, ExperimentBatch, FardistError, RngHandle};
use rand::Rng;
use rand_distr::StandardNormal;

/// Draws an `n_exp x n_obs` batch of random observations.
///
/// Locations are i.i.d. uniform within `sample_bounds`. Values are i.i.d.
/// standard normal scaled by `sigvar` directly (the reference treats the
/// signal variance as a multiplicative factor here, not a variance to take
/// the square root of; that literal behaviour is kept). An experiment whose
/// drawn values are all non-positive is redrawn wholesale so every
/// experiment carries an interior peak; the redraw loop is bounded by
/// `max_attempts` per experiment.
///
/// Each experiment draws from its own RNG substream derived from
/// `master_seed`, so resampling one experiment never disturbs another's
/// sequence.
pub fn sample_batch(
    n_exp: usize,
    n_obs: usize,
    sample_bounds: (f64, f64),
    sigvar: f64,
    max_attempts: usize,
    master_seed: u64,
) -> Result<ExperimentBatch, FardistError> {
    let (lo, hi) = sample_bounds;
    let mut x_obs = Vec::with_capacity(n_exp);
    let mut y_obs = Vec::with_capacity(n_exp);
    for experiment in 0..n_exp {
        let mut rng = RngHandle::from_seed(derive_substream_seed(master_seed, experiment as u64));
        let locations: Vec<f64> = (0..n_obs).map(|_| rng.gen_range(lo..hi)).collect();
        let values = sample_values(n_obs, sigvar, max_attempts, experiment, &mut rng)?;
        x_obs.push(locations);
        y_obs.push(values);
    }
    ExperimentBatch::new(x_obs, y_obs)
}

fn sample_values(
    n_obs: usize,
    sigvar: f64,
    max_attempts: usize,
    experiment: usize,
    rng: &mut RngHandle,
) -> Result<Vec<f64>, FardistError> {
    for _ in 0..max_attempts {
        let values: Vec<f64> = (0..n_obs)
            .map(|_| {
                let draw: f64 = rng.sample(StandardNormal);
                draw * sigvar
            })
            .collect();
        if values.iter().any(|v| *v > 0.0) {
            return Ok(values);
        }
    }
    Err(FardistError::Sampling(
        ErrorInfo::new(
            "resample-exhausted",
            "no strictly positive value drawn within the retry ceiling",
        )
        .with_context("experiment", experiment.to_string())
        .with_context("max_attempts", max_attempts.to_string())
        .with_hint("check the signal variance and the random source"),
    ))
}
