use serde::{Deserialize, Serialize};

use crate::errors::{ErrorInfo, FardistError};

/// Ordered grid of query locations shared read-only across the pipeline.
///
/// The grid is evenly spaced and endpoint-inclusive, matching the usual
/// `linspace` convention.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Domain {
    points: Vec<f64>,
}

impl Domain {
    /// Builds an evenly spaced grid of `resolution` points over `[lo, hi]`.
    pub fn linspace(lo: f64, hi: f64, resolution: usize) -> Result<Self, FardistError> {
        if resolution < 2 {
            return Err(FardistError::Shape(
                ErrorInfo::new("domain-resolution", "domain needs at least two grid points")
                    .with_context("resolution", resolution.to_string()),
            ));
        }
        if !(lo < hi) {
            return Err(FardistError::Shape(
                ErrorInfo::new("domain-bounds", "domain lower bound must be below upper bound")
                    .with_context("lo", lo.to_string())
                    .with_context("hi", hi.to_string()),
            ));
        }
        let step = (hi - lo) / (resolution - 1) as f64;
        let points = (0..resolution).map(|i| lo + step * i as f64).collect();
        Ok(Self { points })
    }

    /// Wraps an explicit ordered sequence of grid points.
    pub fn from_points(points: Vec<f64>) -> Result<Self, FardistError> {
        if points.is_empty() {
            return Err(FardistError::Shape(ErrorInfo::new(
                "domain-empty",
                "domain must contain at least one point",
            )));
        }
        Ok(Self { points })
    }

    /// Number of grid points.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the grid is empty (never true for a constructed domain).
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Grid points as a slice.
    pub fn as_slice(&self) -> &[f64] {
        &self.points
    }

    /// Location at the given grid index.
    pub fn location(&self, index: usize) -> f64 {
        self.points[index]
    }
}

/// Rectangular collection of experiments: `n_exp` rows of exactly `n_obs`
/// (location, value) pairs each.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExperimentBatch {
    x_obs: Vec<Vec<f64>>,
    y_obs: Vec<Vec<f64>>,
}

impl ExperimentBatch {
    /// Creates a batch after validating rectangularity.
    pub fn new(x_obs: Vec<Vec<f64>>, y_obs: Vec<Vec<f64>>) -> Result<Self, FardistError> {
        if x_obs.len() != y_obs.len() {
            return Err(FardistError::Shape(
                ErrorInfo::new("batch-rows", "location and value arrays disagree on row count")
                    .with_context("x_rows", x_obs.len().to_string())
                    .with_context("y_rows", y_obs.len().to_string()),
            ));
        }
        let n_obs = x_obs.first().map(Vec::len).unwrap_or(0);
        for (row, (xs, ys)) in x_obs.iter().zip(y_obs.iter()).enumerate() {
            if xs.len() != n_obs || ys.len() != n_obs {
                return Err(FardistError::Shape(
                    ErrorInfo::new("batch-ragged", "observation arrays must be rectangular")
                        .with_context("row", row.to_string())
                        .with_context("expected", n_obs.to_string())
                        .with_context("x_len", xs.len().to_string())
                        .with_context("y_len", ys.len().to_string()),
                ));
            }
        }
        Ok(Self { x_obs, y_obs })
    }

    /// Number of experiments in the batch.
    pub fn n_exp(&self) -> usize {
        self.x_obs.len()
    }

    /// Observations per experiment.
    pub fn n_obs(&self) -> usize {
        self.x_obs.first().map(Vec::len).unwrap_or(0)
    }

    /// Observation locations for one experiment.
    pub fn locations(&self, experiment: usize) -> &[f64] {
        &self.x_obs[experiment]
    }

    /// Observation values for one experiment.
    pub fn values(&self, experiment: usize) -> &[f64] {
        &self.y_obs[experiment]
    }

    /// All location rows.
    pub fn all_locations(&self) -> &[Vec<f64>] {
        &self.x_obs
    }

    /// All value rows.
    pub fn all_values(&self) -> &[Vec<f64>] {
        &self.y_obs
    }
}

/// Posterior-mean maximum recorded for one (experiment, length-scale) pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvMaxRecord {
    /// Index of the experiment within its batch.
    pub experiment: usize,
    /// Length-scale the posterior was conditioned with.
    pub lengthscale: f64,
    /// Domain index attaining the maximum posterior mean.
    pub index: usize,
    /// Domain location at that index.
    pub location: f64,
    /// Posterior-mean value at that index.
    pub value: f64,
}

/// Divergence score and rank assigned to one experiment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DistanceRecord {
    /// Index of the experiment within its batch.
    pub experiment: usize,
    /// Mean pairwise distance among the experiment's posterior maxima.
    pub distance: f64,
    /// 0-based rank, descending by distance (0 = most divergent).
    pub rank: usize,
    /// Metric the distance was computed with.
    pub metric: DistanceMetric,
}

/// Distance metric applied when comparing posterior maxima across the
/// length-scale pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DistanceMetric {
    /// Mean pairwise distance among max locations.
    Location,
    /// Mean pairwise distance among max values.
    Value,
    /// Product of the location and value scores.
    #[serde(rename = "location-x-value")]
    LocationValue,
}

impl DistanceMetric {
    /// Stable identifier used in artifacts and diagnostics.
    pub fn as_str(&self) -> &'static str {
        match self {
            DistanceMetric::Location => "location",
            DistanceMetric::Value => "value",
            DistanceMetric::LocationValue => "location-x-value",
        }
    }

    /// Parses a metric selector, rejecting anything unrecognised.
    pub fn parse(raw: &str) -> Result<Self, FardistError> {
        match raw {
            "location" => Ok(DistanceMetric::Location),
            "value" => Ok(DistanceMetric::Value),
            "location-x-value" => Ok(DistanceMetric::LocationValue),
            other => Err(FardistError::Config(
                ErrorInfo::new("unknown-metric", "unrecognised distance metric selector")
                    .with_context("metric", other.to_string())
                    .with_hint("expected one of: location, value, location-x-value"),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn linspace_hits_both_endpoints() {
        let domain = Domain::linspace(0.0, 1.0, 5).unwrap();
        assert_eq!(domain.len(), 5);
        assert!((domain.location(0) - 0.0).abs() < 1e-12);
        assert!((domain.location(4) - 1.0).abs() < 1e-12);
        assert!((domain.location(2) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn linspace_rejects_degenerate_grids() {
        assert!(Domain::linspace(0.0, 1.0, 1).is_err());
        assert!(Domain::linspace(1.0, 0.0, 10).is_err());
    }

    #[test]
    fn batch_rejects_ragged_rows() {
        let err = ExperimentBatch::new(
            vec![vec![0.1, 0.2], vec![0.3]],
            vec![vec![1.0, -1.0], vec![0.5]],
        )
        .unwrap_err();
        assert_eq!(err.info().code, "batch-ragged");
    }

    #[test]
    fn batch_rejects_mismatched_row_counts() {
        let err =
            ExperimentBatch::new(vec![vec![0.1, 0.2]], vec![]).unwrap_err();
        assert_eq!(err.info().code, "batch-rows");
    }

    #[test]
    fn metric_parse_round_trips_and_rejects() {
        for metric in [
            DistanceMetric::Location,
            DistanceMetric::Value,
            DistanceMetric::LocationValue,
        ] {
            assert_eq!(DistanceMetric::parse(metric.as_str()).unwrap(), metric);
        }
        let err = DistanceMetric::parse("xXf").unwrap_err();
        assert_eq!(err.info().code, "unknown-metric");
    }
}
