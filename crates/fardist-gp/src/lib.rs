#![deny(missing_docs)]
#![doc = "Squared-exponential GP posterior engine for the fardist pipeline."]

//! One-dimensional GP regression: kernel matrices and conditioned posterior
//! mean/covariance over a discretised domain. Only the squared-exponential
//! kernel is supported.

pub mod kernel;
pub mod posterior;

pub use kernel::k_se;
pub use posterior::{conditioned_covmat, conditioned_mu};
