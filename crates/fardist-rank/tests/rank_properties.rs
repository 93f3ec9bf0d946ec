use std::collections::BTreeSet;

use fardist_core::{DistanceMetric, DistanceRecord, EvMaxRecord, ExperimentBatch};
use fardist_rank::{rank_by_distance, rank_descending, select_top};
use proptest::prelude::*;

fn evmaxes_from_locations(locations: &[Vec<f64>]) -> Vec<Vec<EvMaxRecord>> {
    locations
        .iter()
        .enumerate()
        .map(|(pool_index, per_ls)| {
            per_ls
                .iter()
                .enumerate()
                .map(|(experiment, &location)| EvMaxRecord {
                    experiment,
                    lengthscale: 0.25 / (pool_index + 1) as f64,
                    index: 0,
                    location,
                    value: location * 2.0,
                })
                .collect()
        })
        .collect()
}

proptest! {
    #[test]
    fn ranks_form_a_permutation(scores in prop::collection::vec(0.0f64..100.0, 1..64)) {
        let ranks = rank_descending(&scores);
        let unique: BTreeSet<usize> = ranks.iter().copied().collect();
        prop_assert_eq!(unique.len(), scores.len());
        prop_assert_eq!(*unique.iter().next_back().unwrap(), scores.len() - 1);
        // larger score never carries a larger rank
        for i in 0..scores.len() {
            for j in 0..scores.len() {
                if scores[i] > scores[j] {
                    prop_assert!(ranks[i] < ranks[j]);
                }
            }
        }
    }

    #[test]
    fn ranked_distances_cover_every_experiment(
        rows in prop::collection::vec(prop::collection::vec(0.0f64..1.0, 8), 1..5),
    ) {
        let evmaxes = evmaxes_from_locations(&rows);
        let records = rank_by_distance(&evmaxes, DistanceMetric::Location).unwrap();
        prop_assert_eq!(records.len(), 8);
        let ranks: BTreeSet<usize> = records.values().map(|record| record.rank).collect();
        prop_assert_eq!(ranks.len(), 8);
        for record in records.values() {
            prop_assert!(record.distance >= 0.0);
        }
    }

    #[test]
    fn selector_returns_min_of_keep_and_batch(
        rows in prop::collection::vec(prop::collection::vec(0.0f64..1.0, 6), 2..4),
        n_to_keep in 0usize..12,
    ) {
        let evmaxes = evmaxes_from_locations(&rows);
        let records = rank_by_distance(&evmaxes, DistanceMetric::Location).unwrap();
        let x: Vec<Vec<f64>> = (0..6).map(|i| vec![i as f64 * 0.1]).collect();
        let y: Vec<Vec<f64>> = (0..6).map(|i| vec![1.0 + i as f64]).collect();
        let batch = ExperimentBatch::new(x, y).unwrap();

        let selected = select_top(&batch, &records, n_to_keep).unwrap();
        prop_assert_eq!(selected.n_exp(), n_to_keep.min(6));

        let kept: Vec<&DistanceRecord> = records
            .values()
            .filter(|record| record.rank < n_to_keep)
            .collect();
        prop_assert_eq!(kept.len(), selected.n_exp());
    }
}
