//! Property-based tests for the running mean and the default MAF bins.

use proptest::prelude::*;

use snpstats_bins::consts::DEFAULT_MAF_EDGES;
use snpstats_bins::{Bin, BinSet};

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() <= 1e-9 * (1.0 + a.abs().max(b.abs()))
}

// ---------------------------------------------------------------------------
// 1. The running mean is the arithmetic mean of what was added
// ---------------------------------------------------------------------------
proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_running_mean_matches_arithmetic_mean(
        values in prop::collection::vec(0.0f64..1.0, 0..3_000),
    ) {
        let mut bin = Bin::new(0.0, 1.0);
        for value in &values {
            bin.add(*value);
        }

        prop_assert_eq!(bin.count() as usize, values.len());
        match bin.mean() {
            None => prop_assert!(values.is_empty()),
            Some(mean) => {
                let expected = values.iter().sum::<f64>() / values.len() as f64;
                prop_assert!(close(mean, expected), "{} != {}", mean, expected);
            }
        }
    }

    #[test]
    fn prop_sort_into_only_counts_keys_in_range(
        pairs in prop::collection::vec((-0.1f64..0.6, 0.0f64..1.0), 0..1_500),
    ) {
        let mut bins = BinSet::default_maf_bins();
        for (key, value) in &pairs {
            bins.sort_into(*key, *value);
        }

        for bin in &bins {
            let kept: Vec<f64> = pairs
                .iter()
                .filter(|(key, _)| bin.in_range(*key))
                .map(|(_, value)| *value)
                .collect();

            prop_assert_eq!(bin.count() as usize, kept.len());
            if let Some(mean) = bin.mean() {
                let expected = kept.iter().sum::<f64>() / kept.len() as f64;
                prop_assert!(close(mean, expected));
            }
        }
    }
}

#[test]
fn running_mean_over_many_values() {
    let mut bin = Bin::new(0.0, 1.0);
    for i in 0..10_000 {
        bin.add((i % 10) as f64 / 10.0);
    }
    assert_eq!(bin.count(), 10_000);
    assert!(close(bin.mean().unwrap(), 0.45));
}

// ---------------------------------------------------------------------------
// 2. Default bins are disjoint; edges belong to no bin
// ---------------------------------------------------------------------------
proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn prop_default_bins_are_disjoint(x in 0.0f64..0.5) {
        let bins = BinSet::default_maf_bins();
        let holding = bins.iter().filter(|bin| bin.in_range(x)).count();

        if DEFAULT_MAF_EDGES.contains(&x) {
            prop_assert_eq!(holding, 0);
        } else {
            prop_assert_eq!(holding, 1);
        }
    }
}

#[test]
fn edges_are_in_no_bin() {
    let bins = BinSet::default_maf_bins();
    for edge in DEFAULT_MAF_EDGES {
        assert_eq!(bins.classify_index(edge), None);
    }
}
