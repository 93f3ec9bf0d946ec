#![deny(missing_docs)]
#![doc = "Divergence ranking of synthetic GP experiments across a length-scale pool."]

//! The pipeline samples random observation sets, fits a GP posterior per
//! length-scale in a pool, and keeps the experiments whose posterior-mean
//! maxima disagree most across the pool.

/// Pipeline configuration schema and defaults.
pub mod config;
/// Posterior band data for visualization consumers.
pub mod curves;
/// Divergence scoring and the ranking utility.
pub mod distance;
/// Posterior-max extraction per (experiment, length-scale).
pub mod evmax;
/// Pipeline entry point and run report.
pub mod pipeline;
/// Random observation generation with validity resampling.
pub mod sampler;
/// Top-N divergent experiment selection.
pub mod select;

pub use config::FardistConfig;
pub use curves::{posterior_curves, PosteriorCurve};
pub use distance::{mean_pairwise_distance, rank_by_distance, rank_descending};
pub use evmax::extract_evmax;
pub use pipeline::{generate_fardists, FardistReport};
pub use sampler::sample_batch;
pub use select::select_top;
