// ============================================================================
// Prefix Scans
// Cumulative sum/product/min/max with explicit missing-value protocol
// ============================================================================
//
// output[0] = input[0]
// output[i] = op(output[i - 1], input[i])          for i >= 1
//
// Missing-value protocol at each step (acc = output[i - 1], v = input[i]):
//
//   acc      v        Propagate   Skip
//   present  present  op(acc, v)  op(acc, v)
//   present  missing  MISSING     op(acc, identity) = acc  (carry forward)
//   missing  present  MISSING     v                        (recovery)
//   missing  missing  MISSING     MISSING
//
// The same table holds for every operator, min/max included.

use crate::interfaces::ScanOperator;
use crate::numeric::{is_missing, MissingPolicy, MISSING};

/// Running sum (identity 0)
#[derive(Debug, Clone, Copy, Default)]
pub struct CumulativeSum;

impl ScanOperator for CumulativeSum {
    #[inline]
    fn identity(&self) -> f64 {
        0.0
    }

    #[inline]
    fn combine(&self, acc: f64, value: f64) -> f64 {
        acc + value
    }

    fn name(&self) -> &'static str {
        "CumulativeSum"
    }
}

/// Running product (identity 1)
#[derive(Debug, Clone, Copy, Default)]
pub struct CumulativeProduct;

impl ScanOperator for CumulativeProduct {
    #[inline]
    fn identity(&self) -> f64 {
        1.0
    }

    #[inline]
    fn combine(&self, acc: f64, value: f64) -> f64 {
        acc * value
    }

    fn name(&self) -> &'static str {
        "CumulativeProduct"
    }
}

/// Running minimum (identity +inf)
#[derive(Debug, Clone, Copy, Default)]
pub struct CumulativeMin;

impl ScanOperator for CumulativeMin {
    #[inline]
    fn identity(&self) -> f64 {
        f64::INFINITY
    }

    #[inline]
    fn combine(&self, acc: f64, value: f64) -> f64 {
        if value < acc {
            value
        } else {
            acc
        }
    }

    fn name(&self) -> &'static str {
        "CumulativeMin"
    }
}

/// Running maximum (identity -inf)
#[derive(Debug, Clone, Copy, Default)]
pub struct CumulativeMax;

impl ScanOperator for CumulativeMax {
    #[inline]
    fn identity(&self) -> f64 {
        f64::NEG_INFINITY
    }

    #[inline]
    fn combine(&self, acc: f64, value: f64) -> f64 {
        if value > acc {
            value
        } else {
            acc
        }
    }

    fn name(&self) -> &'static str {
        "CumulativeMax"
    }
}

/// Run a prefix scan of `x` with `op` under `policy`.
///
/// The output has the same length as `x`; an empty input gives an
/// empty output.
pub fn scan(x: &[f64], op: &dyn ScanOperator, policy: MissingPolicy) -> Vec<f64> {
    let mut out = Vec::with_capacity(x.len());

    let Some((&first, rest)) = x.split_first() else {
        return out;
    };

    let mut acc = first;
    out.push(acc);

    for &v in rest {
        acc = match (is_missing(acc), is_missing(v)) {
            (false, false) => op.combine(acc, v),
            _ if policy == MissingPolicy::Propagate => MISSING,
            (false, true) => op.combine(acc, op.identity()),
            (true, false) => v,
            (true, true) => MISSING,
        };
        out.push(acc);
    }

    out
}

/// Cumulative sum.
///
/// # Example
/// ```
/// use vector_kernels::engine::cumulative_sum;
///
/// assert_eq!(cumulative_sum(&[1.0, 2.0, 3.0], false), vec![1.0, 3.0, 6.0]);
/// assert_eq!(cumulative_sum(&[1.0, f64::NAN, 3.0], true), vec![1.0, 1.0, 4.0]);
/// ```
pub fn cumulative_sum(x: &[f64], skip_missing: bool) -> Vec<f64> {
    scan(x, &CumulativeSum, MissingPolicy::from_skip(skip_missing))
}

/// Cumulative product.
pub fn cumulative_product(x: &[f64], skip_missing: bool) -> Vec<f64> {
    scan(x, &CumulativeProduct, MissingPolicy::from_skip(skip_missing))
}

/// Cumulative minimum.
pub fn cumulative_min(x: &[f64], skip_missing: bool) -> Vec<f64> {
    scan(x, &CumulativeMin, MissingPolicy::from_skip(skip_missing))
}

/// Cumulative maximum.
pub fn cumulative_max(x: &[f64], skip_missing: bool) -> Vec<f64> {
    scan(x, &CumulativeMax, MissingPolicy::from_skip(skip_missing))
}
