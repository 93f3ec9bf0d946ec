#![deny(missing_docs)]
#![doc = "Core data types, structured errors, and deterministic RNG for the fardist pipeline."]

pub mod errors;
pub mod rng;
mod types;

pub use errors::{ErrorInfo, FardistError};
pub use rng::{derive_substream_seed, RngHandle};
pub use types::{Domain, DistanceMetric, DistanceRecord, EvMaxRecord, ExperimentBatch};
