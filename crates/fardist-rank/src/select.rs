//! Filtering a batch down to its most divergent experiments.

use std::collections::BTreeMap;

use fardist_core::{DistanceRecord, ErrorInfo, ExperimentBatch, FardistError};

/// Returns the observations of every experiment ranked below `n_to_keep`.
///
/// The result preserves the original experiment index order; it is a filter,
/// not a re-sort by rank. When `n_to_keep` meets or exceeds the batch size
/// the rank predicate admits everyone and the full batch comes back
/// unchanged.
pub fn select_top(
    batch: &ExperimentBatch,
    records: &BTreeMap<usize, DistanceRecord>,
    n_to_keep: usize,
) -> Result<ExperimentBatch, FardistError> {
    if records.len() != batch.n_exp() {
        return Err(FardistError::Shape(
            ErrorInfo::new(
                "records-mismatch",
                "distance records must cover every experiment in the batch",
            )
            .with_context("n_exp", batch.n_exp().to_string())
            .with_context("n_records", records.len().to_string()),
        ));
    }
    let mut x_obs = Vec::new();
    let mut y_obs = Vec::new();
    for (&experiment, record) in records {
        if record.rank < n_to_keep {
            x_obs.push(batch.locations(experiment).to_vec());
            y_obs.push(batch.values(experiment).to_vec());
        }
    }
    ExperimentBatch::new(x_obs, y_obs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use fardist_core::DistanceMetric;

    fn batch_of(n: usize) -> ExperimentBatch {
        let x: Vec<Vec<f64>> = (0..n).map(|i| vec![i as f64, i as f64 + 0.5]).collect();
        let y: Vec<Vec<f64>> = (0..n).map(|i| vec![1.0, -(i as f64)]).collect();
        ExperimentBatch::new(x, y).unwrap()
    }

    fn records_with_ranks(ranks: &[usize]) -> BTreeMap<usize, DistanceRecord> {
        ranks
            .iter()
            .enumerate()
            .map(|(experiment, &rank)| {
                (
                    experiment,
                    DistanceRecord {
                        experiment,
                        distance: (ranks.len() - rank) as f64,
                        rank,
                        metric: DistanceMetric::Location,
                    },
                )
            })
            .collect()
    }

    #[test]
    fn keeps_only_low_ranked_experiments_in_index_order() {
        let batch = batch_of(4);
        // experiment 1 is most divergent, experiment 3 second
        let records = records_with_ranks(&[2, 0, 3, 1]);
        let selected = select_top(&batch, &records, 2).unwrap();
        assert_eq!(selected.n_exp(), 2);
        // index order preserved: experiment 1 before experiment 3
        assert_eq!(selected.locations(0), batch.locations(1));
        assert_eq!(selected.locations(1), batch.locations(3));
    }

    #[test]
    fn oversized_n_to_keep_returns_the_full_batch() {
        let batch = batch_of(3);
        let records = records_with_ranks(&[1, 0, 2]);
        let selected = select_top(&batch, &records, 10).unwrap();
        assert_eq!(selected, batch);
    }

    #[test]
    fn incomplete_records_are_rejected() {
        let batch = batch_of(3);
        let records = records_with_ranks(&[0, 1]);
        let err = select_top(&batch, &records, 2).unwrap_err();
        assert_eq!(err.info().code, "records-mismatch");
    }
}
