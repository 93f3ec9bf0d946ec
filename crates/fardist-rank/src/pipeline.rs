//! End-to-end generation pipeline: sample, extract, rank, select.

use serde::{Deserialize, Serialize};

use fardist_core::{DistanceRecord, Domain, ExperimentBatch, FardistError, RngHandle};
use rand::RngCore;

use crate::config::FardistConfig;
use crate::distance::rank_by_distance;
use crate::evmax::extract_evmax;
use crate::sampler::sample_batch;
use crate::select::select_top;

/// Result of one generation run.
///
/// All fields are derived, immutable data; the report serializes to JSON for
/// downstream consumers (persistence, plotting).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FardistReport {
    /// Configuration the run was executed with. Its `seed` field always
    /// holds the master seed actually used, so replaying this config
    /// reproduces the report even when the input config left `seed` unset.
    pub config: FardistConfig,
    /// Master seed actually used (drawn from entropy when the config left
    /// `seed` unset).
    pub master_seed: u64,
    /// Query domain shared by every posterior evaluation.
    pub domain: Domain,
    /// Observations of the selected experiments, original index order.
    pub selected: ExperimentBatch,
    /// Distance records of the selected experiments, same order as
    /// `selected` rows.
    pub selected_records: Vec<DistanceRecord>,
}

/// Runs the full pipeline described by `config`.
///
/// Samples `n_to_test` candidate experiments, extracts the posterior-mean
/// maximum of each under every length-scale in the pool, scores divergence
/// with the configured metric, and keeps the `n_to_keep` most divergent
/// candidates.
pub fn generate_fardists(config: &FardistConfig) -> Result<FardistReport, FardistError> {
    config.validate()?;

    let master_seed = match config.seed {
        Some(seed) => seed,
        None => RngHandle::from_entropy().next_u64(),
    };
    let domain = Domain::linspace(
        config.domain_bounds.0,
        config.domain_bounds.1,
        config.domain_resolution,
    )?;

    let batch = sample_batch(
        config.effective_n_to_test(),
        config.n_obs,
        config.sample_bounds(),
        config.signal_variance,
        config.max_resample_attempts,
        master_seed,
    )?;

    let mut evmaxes = Vec::with_capacity(config.lengthscale_pool.len());
    for &lengthscale in &config.lengthscale_pool {
        evmaxes.push(extract_evmax(
            &batch,
            &domain,
            lengthscale,
            config.signal_variance,
            config.noise_variance,
        )?);
    }

    let records = rank_by_distance(&evmaxes, config.metric)?;
    let selected = select_top(&batch, &records, config.n_to_keep)?;
    let selected_records: Vec<DistanceRecord> = records
        .values()
        .filter(|record| record.rank < config.n_to_keep)
        .cloned()
        .collect();

    // record the seed actually used so the report's config replays the run
    let mut report_config = config.clone();
    report_config.seed = Some(master_seed);

    Ok(FardistReport {
        config: report_config,
        master_seed,
        domain,
        selected,
        selected_records,
    })
}
