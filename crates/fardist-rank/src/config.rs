use serde::{Deserialize, Serialize};

use fardist_core::{DistanceMetric, ErrorInfo, FardistError};

/// YAML-configurable parameters governing one fardist generation run.
///
/// Defaults reproduce the reference demo: a 100-point unit domain, three
/// octave-spaced length-scales, three observations per experiment, and the
/// location metric.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FardistConfig {
    /// Number of most-divergent experiments to keep.
    #[serde(default = "default_n_to_keep")]
    pub n_to_keep: usize,
    /// Observations per experiment.
    #[serde(default = "default_n_obs")]
    pub n_obs: usize,
    /// Number of candidate experiments to sample and rank.
    /// `None` defaults to `n_to_keep * 100`.
    #[serde(default)]
    pub n_to_test: Option<usize>,
    /// Competing kernel length-scales, one posterior fit per entry.
    #[serde(default = "default_lengthscale_pool")]
    pub lengthscale_pool: Vec<f64>,
    /// Inclusive bounds of the query domain.
    #[serde(default = "default_domain_bounds")]
    pub domain_bounds: (f64, f64),
    /// Number of evenly spaced domain grid points.
    #[serde(default = "default_domain_resolution")]
    pub domain_resolution: usize,
    /// Margin kept between sampled locations and each domain edge.
    #[serde(default = "default_edge_buffer")]
    pub edge_buffer: f64,
    /// Kernel signal variance; also scales sampled observation values.
    #[serde(default = "default_signal_variance")]
    pub signal_variance: f64,
    /// Observation noise variance floor used during conditioning.
    #[serde(default = "default_noise_variance")]
    pub noise_variance: f64,
    /// Distance metric used to score divergence across the pool.
    #[serde(default = "default_metric")]
    pub metric: DistanceMetric,
    /// Master seed; `None` draws a fresh seed from OS entropy.
    #[serde(default)]
    pub seed: Option<u64>,
    /// Ceiling on value-vector redraws per experiment before failing.
    #[serde(default = "default_max_resample_attempts")]
    pub max_resample_attempts: usize,
}

fn default_n_to_keep() -> usize {
    200
}

fn default_n_obs() -> usize {
    3
}

fn default_lengthscale_pool() -> Vec<f64> {
    // 2^-2, 2^-4, 2^-6
    vec![0.25, 0.0625, 0.015625]
}

fn default_domain_bounds() -> (f64, f64) {
    (0.0, 1.0)
}

fn default_domain_resolution() -> usize {
    100
}

fn default_edge_buffer() -> f64 {
    0.05
}

fn default_signal_variance() -> f64 {
    1.0
}

fn default_noise_variance() -> f64 {
    1e-7
}

fn default_metric() -> DistanceMetric {
    DistanceMetric::Location
}

fn default_max_resample_attempts() -> usize {
    10_000
}

impl Default for FardistConfig {
    fn default() -> Self {
        Self {
            n_to_keep: default_n_to_keep(),
            n_obs: default_n_obs(),
            n_to_test: None,
            lengthscale_pool: default_lengthscale_pool(),
            domain_bounds: default_domain_bounds(),
            domain_resolution: default_domain_resolution(),
            edge_buffer: default_edge_buffer(),
            signal_variance: default_signal_variance(),
            noise_variance: default_noise_variance(),
            metric: default_metric(),
            seed: None,
            max_resample_attempts: default_max_resample_attempts(),
        }
    }
}

impl FardistConfig {
    /// Effective candidate count after applying the `n_to_keep * 100` fallback.
    pub fn effective_n_to_test(&self) -> usize {
        self.n_to_test.unwrap_or(self.n_to_keep * 100)
    }

    /// Sampling bounds after shrinking the domain by the edge buffer.
    pub fn sample_bounds(&self) -> (f64, f64) {
        (
            self.domain_bounds.0 + self.edge_buffer,
            self.domain_bounds.1 - self.edge_buffer,
        )
    }

    /// Validates the configuration before any computation is attempted.
    pub fn validate(&self) -> Result<(), FardistError> {
        if self.n_to_keep == 0 {
            return Err(config_error("n-to-keep", "n_to_keep must be positive"));
        }
        if self.n_obs == 0 {
            return Err(config_error("n-obs", "n_obs must be positive"));
        }
        if self.effective_n_to_test() == 0 {
            return Err(config_error("n-to-test", "n_to_test must be positive"));
        }
        if self.lengthscale_pool.is_empty() {
            return Err(config_error(
                "lengthscale-pool-empty",
                "lengthscale_pool must contain at least one entry",
            ));
        }
        if let Some(bad) = self.lengthscale_pool.iter().find(|ls| !(**ls > 0.0)) {
            return Err(FardistError::Config(
                ErrorInfo::new("lengthscale-nonpositive", "length-scales must be positive")
                    .with_context("lengthscale", bad.to_string()),
            ));
        }
        if !(self.domain_bounds.0 < self.domain_bounds.1) {
            return Err(config_error(
                "domain-bounds",
                "domain lower bound must be below upper bound",
            ));
        }
        if self.domain_resolution < 2 {
            return Err(config_error(
                "domain-resolution",
                "domain_resolution must be at least 2",
            ));
        }
        if self.edge_buffer < 0.0 {
            return Err(config_error("edge-buffer", "edge_buffer must be non-negative"));
        }
        let (lo, hi) = self.sample_bounds();
        if !(lo < hi) {
            return Err(FardistError::Config(
                ErrorInfo::new(
                    "edge-buffer-too-wide",
                    "edge buffer leaves no interval to sample from",
                )
                .with_context("edge_buffer", self.edge_buffer.to_string())
                .with_context("domain_lo", self.domain_bounds.0.to_string())
                .with_context("domain_hi", self.domain_bounds.1.to_string()),
            ));
        }
        if !(self.signal_variance > 0.0) {
            return Err(config_error(
                "signal-variance",
                "signal_variance must be positive",
            ));
        }
        if self.noise_variance < 0.0 {
            return Err(config_error(
                "noise-variance",
                "noise_variance must be non-negative",
            ));
        }
        if self.max_resample_attempts == 0 {
            return Err(config_error(
                "max-resample-attempts",
                "max_resample_attempts must be positive",
            ));
        }
        Ok(())
    }
}

fn config_error(code: &str, message: &str) -> FardistError {
    FardistError::Config(ErrorInfo::new(code, message))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_validate_and_match_demo_constants() {
        let config = FardistConfig::default();
        config.validate().unwrap();
        assert_eq!(config.effective_n_to_test(), 20_000);
        assert_eq!(config.lengthscale_pool, vec![0.25, 0.0625, 0.015625]);
        let (lo, hi) = config.sample_bounds();
        assert!((lo - 0.05).abs() < 1e-12);
        assert!((hi - 0.95).abs() < 1e-12);
    }

    #[test]
    fn invalid_fields_are_rejected() {
        let mut config = FardistConfig {
            n_to_keep: 0,
            ..FardistConfig::default()
        };
        assert_eq!(config.validate().unwrap_err().info().code, "n-to-keep");

        config = FardistConfig {
            lengthscale_pool: vec![0.25, -1.0],
            ..FardistConfig::default()
        };
        assert_eq!(
            config.validate().unwrap_err().info().code,
            "lengthscale-nonpositive"
        );

        config = FardistConfig {
            edge_buffer: 0.6,
            ..FardistConfig::default()
        };
        assert_eq!(
            config.validate().unwrap_err().info().code,
            "edge-buffer-too-wide"
        );
    }
}
