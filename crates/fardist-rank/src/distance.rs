//! Divergence scoring and ranking of experiments across the length-scale pool.

use std::collections::BTreeMap;

use fardist_core::{DistanceMetric, DistanceRecord, ErrorInfo, EvMaxRecord, FardistError};

/// Mean pairwise absolute distance between all elements of `values`.
///
/// Groups of fewer than two elements have no pairs and score exactly 0.
pub fn mean_pairwise_distance(values: &[f64]) -> f64 {
    let n = values.len();
    if n < 2 {
        return 0.0;
    }
    let mut total = 0.0;
    let mut pairs = 0usize;
    for i in 0..n {
        for j in (i + 1)..n {
            total += (values[i] - values[j]).abs();
            pairs += 1;
        }
    }
    total / pairs as f64
}

/// Ranks scores descending: rank 0 goes to the largest score, ties keep the
/// lower original index first (stable).
pub fn rank_descending(scores: &[f64]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..scores.len()).collect();
    order.sort_by(|&a, &b| {
        scores[b]
            .partial_cmp(&scores[a])
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    let mut ranks = vec![0usize; scores.len()];
    for (rank, &index) in order.iter().enumerate() {
        ranks[index] = rank;
    }
    ranks
}

/// Scores and ranks every experiment by how far its posterior maxima drift
/// across the length-scale pool.
///
/// `evmaxes` holds one record vector per length-scale, each covering the
/// same experiments in index order (the shape produced by running the max
/// extractor once per pool entry). Returns one [`DistanceRecord`] per
/// experiment, keyed by experiment index.
pub fn rank_by_distance(
    evmaxes: &[Vec<EvMaxRecord>],
    metric: DistanceMetric,
) -> Result<BTreeMap<usize, DistanceRecord>, FardistError> {
    let n_exp = check_rectangular(evmaxes)?;

    let mut scores = Vec::with_capacity(n_exp);
    for experiment in 0..n_exp {
        let locations: Vec<f64> = evmaxes
            .iter()
            .map(|per_ls| per_ls[experiment].location)
            .collect();
        let values: Vec<f64> = evmaxes
            .iter()
            .map(|per_ls| per_ls[experiment].value)
            .collect();
        let score = match metric {
            DistanceMetric::Location => mean_pairwise_distance(&locations),
            DistanceMetric::Value => mean_pairwise_distance(&values),
            DistanceMetric::LocationValue => {
                mean_pairwise_distance(&locations) * mean_pairwise_distance(&values)
            }
        };
        scores.push(score);
    }

    let ranks = rank_descending(&scores);
    Ok(scores
        .into_iter()
        .zip(ranks)
        .enumerate()
        .map(|(experiment, (distance, rank))| {
            (
                experiment,
                DistanceRecord {
                    experiment,
                    distance,
                    rank,
                    metric,
                },
            )
        })
        .collect())
}

fn check_rectangular(evmaxes: &[Vec<EvMaxRecord>]) -> Result<usize, FardistError> {
    let first = evmaxes.first().ok_or_else(|| {
        FardistError::Shape(ErrorInfo::new(
            "evmax-empty",
            "ranking requires at least one length-scale's records",
        ))
    })?;
    let n_exp = first.len();
    for (pool_index, per_ls) in evmaxes.iter().enumerate() {
        if per_ls.len() != n_exp {
            return Err(FardistError::Shape(
                ErrorInfo::new(
                    "evmax-ragged",
                    "every length-scale must cover the same experiments",
                )
                .with_context("pool_index", pool_index.to_string())
                .with_context("expected", n_exp.to_string())
                .with_context("actual", per_ls.len().to_string()),
            ));
        }
        for (experiment, record) in per_ls.iter().enumerate() {
            if record.experiment != experiment {
                return Err(FardistError::Shape(
                    ErrorInfo::new("evmax-misordered", "records must be ordered by experiment")
                        .with_context("pool_index", pool_index.to_string())
                        .with_context("position", experiment.to_string())
                        .with_context("experiment", record.experiment.to_string()),
                ));
            }
        }
    }
    Ok(n_exp)
}
