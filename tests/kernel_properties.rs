// ============================================================================
// Kernel Property Tests
// Invariants that must hold for arbitrary inputs
// ============================================================================
//
// Test Organization:
// 1. Reductions vs scans - cumulative/total agreement
// 2. Lagged difference   - elementwise definition
// 3. Missing protocol    - propagate vs skip behavior
// 4. Predicates          - which/any/all consistency
// 5. Parallel transform  - independence from worker count

use approx::assert_relative_eq;
use proptest::prelude::*;
use quickcheck::quickcheck;
use std::sync::Arc;
use vector_kernels::engine::{all, any, parallel, scan, CumulativeSum};
use vector_kernels::prelude::*;
use vector_kernels::simd::{create_simd_kernel, ScalarKernel};

/// Finite values in a range where sums stay exact enough to compare
fn finite_values() -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec(-1.0e6..1.0e6f64, 1..200)
}

/// Values with roughly one in five missing
fn values_with_missing() -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec(
        prop_oneof![4 => -1.0e3..1.0e3f64, 1 => Just(MISSING)],
        0..100,
    )
}

// ============================================================================
// Reductions vs Scans
// ============================================================================

proptest! {
    #[test]
    fn prop_cumulative_sum_last_equals_sum(x in finite_values()) {
        let running = cumulative_sum(&x, false);
        prop_assert_eq!(running.len(), x.len());
        // Both accumulate left to right, so the values are identical
        prop_assert_eq!(running[running.len() - 1], sum(&x, false));
    }

    #[test]
    fn prop_mean_is_sum_over_len(x in finite_values()) {
        prop_assert_eq!(mean(&x, false), sum(&x, false) / x.len() as f64);
    }

    #[test]
    fn prop_variance_is_non_negative(x in finite_values()) {
        let v = variance(&x, false);
        if x.len() < 2 {
            prop_assert!(is_missing(v));
        } else {
            prop_assert!(v >= 0.0);
        }
    }

    #[test]
    fn prop_rmse_from_mean_relates_to_variance(x in prop::collection::vec(-1.0e3..1.0e3f64, 2..100)) {
        // rmse(x, mean)^2 * n == variance * (n - 1)
        let n = x.len() as f64;
        let m = mean(&x, false);
        let r = rmse(&x, m, false);
        let v = variance(&x, false);
        prop_assert!((r * r * n - v * (n - 1.0)).abs() <= 1e-6 * (1.0 + v * n));
    }
}

// ============================================================================
// Lagged Difference
// ============================================================================

proptest! {
    #[test]
    fn prop_diff_definition(x in finite_values(), lag in 1usize..5) {
        let result = diff(&x, lag);
        if lag >= x.len() {
            let rejected = matches!(result, Err(KernelError::InvalidArgument { .. }));
            prop_assert!(rejected, "expected InvalidArgument for lag {} on {} values", lag, x.len());
        } else {
            let d = result.unwrap();
            prop_assert_eq!(d.len(), x.len() - lag);
            for i in 0..d.len() {
                prop_assert_eq!(d[i], x[i + lag] - x[i]);
            }
        }
    }

    #[test]
    fn prop_range_bounds_every_element(x in finite_values()) {
        let (lo, hi) = range(&x).unwrap();
        prop_assert!(x.iter().all(|&v| lo <= v && v <= hi));
        prop_assert!(x.contains(&lo) && x.contains(&hi));
    }
}

// ============================================================================
// Missing Protocol
// ============================================================================

proptest! {
    #[test]
    fn prop_scans_preserve_length(x in values_with_missing(), skip in prop::bool::ANY) {
        prop_assert_eq!(cumulative_sum(&x, skip).len(), x.len());
        prop_assert_eq!(cumulative_product(&x, skip).len(), x.len());
        prop_assert_eq!(cumulative_min(&x, skip).len(), x.len());
        prop_assert_eq!(cumulative_max(&x, skip).len(), x.len());
    }

    #[test]
    fn prop_propagate_poisons_suffix(x in values_with_missing()) {
        let out = cumulative_sum(&x, false);
        if let Some(first) = x.iter().position(|&v| is_missing(v)) {
            prop_assert!(out[first..].iter().all(|&v| is_missing(v)));
            prop_assert!(out[..first].iter().all(|&v| !is_missing(v)));
        } else {
            prop_assert!(out.iter().all(|&v| !is_missing(v)));
        }
    }

    #[test]
    fn prop_skip_missing_only_before_first_value(x in values_with_missing()) {
        let out = cumulative_max(&x, true);
        let first_present = x.iter().position(|&v| !is_missing(v)).unwrap_or(x.len());
        for (i, &v) in out.iter().enumerate() {
            prop_assert_eq!(is_missing(v), i < first_present);
        }
    }

    #[test]
    fn prop_skip_sum_matches_filtered(x in values_with_missing()) {
        let present: Vec<f64> = x.iter().copied().filter(|&v| !is_missing(v)).collect();
        prop_assert_eq!(sum(&x, true), sum(&present, false));
        prop_assert_eq!(variance(&x, true).is_nan(), present.len() < 2);
        if let Some(&last) = cumulative_sum(&x, true).last() {
            if !present.is_empty() {
                prop_assert_eq!(last, sum(&present, false));
            }
        }
    }

    #[test]
    fn prop_scan_prefix_property(x in values_with_missing(), cut in 0usize..100) {
        let cut = cut.min(x.len());
        let full = scan(&x, &CumulativeSum, MissingPolicy::Skip);
        let prefix = scan(&x[..cut], &CumulativeSum, MissingPolicy::Skip);
        for i in 0..cut {
            prop_assert!(
                full[i] == prefix[i] || (is_missing(full[i]) && is_missing(prefix[i]))
            );
        }
    }
}

// ============================================================================
// Predicates
// ============================================================================

quickcheck! {
    fn qc_which_matches_filter(x: Vec<i32>) -> bool {
        let positions = which(&x, |&v| v > 0);
        let expected: Vec<usize> = (1..=x.len()).filter(|&p| x[p - 1] > 0).collect();
        positions == expected
    }

    fn qc_any_all_duality(x: Vec<bool>) -> bool {
        let negated: Vec<bool> = x.iter().map(|b| !b).collect();
        any(&x) == !all(&negated)
    }

    fn qc_which_empty_iff_not_any(x: Vec<bool>) -> bool {
        which(&x, |&b| b).is_empty() == !any(&x)
    }
}

#[test]
fn test_which_no_match_is_empty_sequence() {
    assert_eq!(which(&[1.0, 2.0, 3.0], |&v| v > 10.0), Vec::<usize>::new());
}

#[test]
fn test_documented_examples() {
    assert!(any(&[false, false, true]));
    assert!(!all(&[true, true, false]));
    assert!(all(&[]));
    assert!(!any(&[]));
    assert_eq!(range(&[3.0, 1.0, 4.0, 1.0, 5.0, 9.0, 2.0, 6.0]).unwrap(), (1.0, 9.0));
    assert_eq!(cumulative_sum(&[1.0, MISSING, 3.0], true), vec![1.0, 1.0, 4.0]);

    let propagated = cumulative_sum(&[1.0, MISSING, 3.0], false);
    assert_eq!(propagated[0], 1.0);
    assert!(is_missing(propagated[1]) && is_missing(propagated[2]));

    assert!(is_missing(variance(&[5.0], false)));
    assert!(is_missing(variance(&[], true)));
}

// ============================================================================
// Parallel Transform
// ============================================================================

proptest! {
    #[test]
    fn prop_parallel_square_independent_of_workers(
        x in prop::collection::vec(-1.0e3..1.0e3f64, 0..500),
        workers in 1usize..9,
    ) {
        let backend = create_simd_kernel();
        let reference = parallel::square(&x, 1, &ScalarKernel, &NoOpEventHandler).unwrap();
        let split = parallel::square(&x, workers, backend.as_ref(), &NoOpEventHandler).unwrap();
        prop_assert_eq!(split, reference);
    }
}

#[test]
fn test_engine_sum_of_squares_across_configs() {
    let x: Vec<f64> = (0..10_000).map(|i| (i % 100) as f64 * 0.5).collect();
    let expected: f64 = x.iter().map(|v| v * v).sum();

    for config in [
        KernelConfig::single_threaded(),
        KernelConfig::strict().with_parallel_threshold(1000).with_worker_threads(4),
        KernelConfig::lenient().with_parallel_threshold(1),
    ] {
        let engine = create_from_config(config, Arc::new(NoOpEventHandler)).unwrap();
        assert_relative_eq!(engine.sum_of_squares(&x).unwrap(), expected, max_relative = 1e-12);
    }
}
