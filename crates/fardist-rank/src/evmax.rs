//! Posterior-mean maximum extraction per experiment for one length-scale.

use fardist_core::{Domain, ErrorInfo, EvMaxRecord, ExperimentBatch, FardistError};
use fardist_gp::conditioned_mu;

/// Computes the posterior-mean maximum of every experiment in `batch` under
/// a single length-scale.
///
/// For each experiment the GP posterior mean is evaluated over the full
/// domain conditioned on that experiment's observations; the record holds
/// the argmax index (first occurrence on ties), the domain location at that
/// index, and the posterior-mean value there.
pub fn extract_evmax(
    batch: &ExperimentBatch,
    domain: &Domain,
    lengthscale: f64,
    sigvar: f64,
    noisevar: f64,
) -> Result<Vec<EvMaxRecord>, FardistError> {
    if batch.n_exp() == 0 {
        return Err(FardistError::Shape(ErrorInfo::new(
            "batch-empty",
            "cannot extract maxima from an empty batch",
        )));
    }
    if batch.n_obs() == 0 {
        return Err(FardistError::Shape(ErrorInfo::new(
            "batch-no-obs",
            "experiments carry no observations",
        )));
    }

    let mut records = Vec::with_capacity(batch.n_exp());
    for experiment in 0..batch.n_exp() {
        let mu = conditioned_mu(
            domain.as_slice(),
            batch.locations(experiment),
            batch.values(experiment),
            lengthscale,
            sigvar,
            noisevar,
        )?;
        let (index, value) = argmax_first(mu.as_slice());
        records.push(EvMaxRecord {
            experiment,
            lengthscale,
            index,
            location: domain.location(index),
            value,
        });
    }
    Ok(records)
}

/// Index and value of the largest element, keeping the lowest index on ties.
fn argmax_first(values: &[f64]) -> (usize, f64) {
    let mut best_index = 0;
    let mut best_value = values[0];
    for (index, &value) in values.iter().enumerate().skip(1) {
        if value > best_value {
            best_index = index;
            best_value = value;
        }
    }
    (best_index, best_value)
}
