// ============================================================================
// Lagged Difference and Range
// Single-pass kernels that need a first element to work from
// ============================================================================

use crate::numeric::{KernelError, KernelResult};

/// Lagged difference: `out[i] = x[i + lag] - x[i]`.
///
/// The output has `x.len() - lag` elements. Missing values propagate
/// through the subtraction. Fails if `lag` is zero or not smaller than
/// the input length.
///
/// # Example
/// ```
/// use vector_kernels::engine::diff;
///
/// assert_eq!(diff(&[1.0, 4.0, 9.0, 16.0], 1).unwrap(), vec![3.0, 5.0, 7.0]);
/// assert_eq!(diff(&[1.0, 4.0, 9.0, 16.0], 2).unwrap(), vec![8.0, 12.0]);
/// assert!(diff(&[1.0], 1).is_err());
/// ```
pub fn diff(x: &[f64], lag: usize) -> KernelResult<Vec<f64>> {
    if lag < 1 {
        return Err(KernelError::invalid_argument("lag must be at least 1"));
    }
    if lag >= x.len() {
        return Err(KernelError::invalid_argument(format!(
            "lag {} must be smaller than the input length {}",
            lag,
            x.len()
        )));
    }

    Ok(x[lag..]
        .iter()
        .zip(x)
        .map(|(&ahead, &behind)| ahead - behind)
        .collect())
}

/// Minimum and maximum of `x` in one pass, seeded from the first element.
///
/// There is no missing-value handling: a missing first element is
/// returned as both bounds, later missing elements never compare as
/// smaller or larger. Fails on empty input.
pub fn range(x: &[f64]) -> KernelResult<(f64, f64)> {
    let Some((&first, rest)) = x.split_first() else {
        return Err(KernelError::invalid_argument("range of an empty sequence"));
    };

    let mut min = first;
    let mut max = first;
    for &v in rest {
        if v < min {
            min = v;
        }
        if v > max {
            max = v;
        }
    }

    Ok((min, max))
}
