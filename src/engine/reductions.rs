// ============================================================================
// Reductions
// Missing-value-aware sum, mean, variance and root-mean-square error
// ============================================================================
//
// Every reduction takes a `skip_missing` flag:
// - false (propagate): any missing element makes the result missing
// - true (skip): missing elements are excluded, including from counts
//
// Reductions never fail; an undefined statistic is reported as MISSING.

use crate::numeric::{is_missing, KernelError, KernelResult, MISSING};

/// Total and count of the elements taking part in a reduction.
///
/// Returns `None` when propagating and a missing element is found.
#[inline]
fn present_total(x: &[f64], skip_missing: bool) -> Option<(f64, usize)> {
    let mut total = 0.0;
    let mut count = 0usize;
    for &v in x {
        if is_missing(v) {
            if skip_missing {
                continue;
            }
            return None;
        }
        total += v;
        count += 1;
    }
    Some((total, count))
}

/// Sum of squared deviations from `center` over the elements taking part.
#[inline]
fn squared_deviations(x: &[f64], center: f64) -> f64 {
    x.iter()
        .filter(|&&v| !is_missing(v))
        .map(|&v| {
            let d = v - center;
            d * d
        })
        .sum()
}

/// Sum of `x`, accumulated left to right.
///
/// An empty input sums to `0.0`, as does an all-missing input when
/// `skip_missing` is set.
///
/// # Example
/// ```
/// use vector_kernels::engine::sum;
/// use vector_kernels::numeric::{is_missing, MISSING};
///
/// assert_eq!(sum(&[1.0, 2.0, 3.0], false), 6.0);
/// assert!(is_missing(sum(&[1.0, MISSING, 3.0], false)));
/// assert_eq!(sum(&[1.0, MISSING, 3.0], true), 4.0);
/// ```
pub fn sum(x: &[f64], skip_missing: bool) -> f64 {
    match present_total(x, skip_missing) {
        Some((total, _)) => total,
        None => MISSING,
    }
}

/// Arithmetic mean of the non-missing elements.
///
/// Missing when no element takes part.
pub fn mean(x: &[f64], skip_missing: bool) -> f64 {
    match present_total(x, skip_missing) {
        Some((total, count)) if count > 0 => total / count as f64,
        _ => MISSING,
    }
}

/// Sample variance with Bessel's correction (divides by `n - 1`).
///
/// Computed in two passes, mean first and squared deviations second,
/// which keeps precision for large-magnitude inputs. Missing when fewer
/// than two elements take part.
///
/// # Example
/// ```
/// use vector_kernels::engine::variance;
/// use vector_kernels::numeric::is_missing;
///
/// assert_eq!(variance(&[2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0], false), 32.0 / 7.0);
/// assert!(is_missing(variance(&[1.0], false)));
/// ```
pub fn variance(x: &[f64], skip_missing: bool) -> f64 {
    let (total, count) = match present_total(x, skip_missing) {
        Some((total, count)) if count >= 2 => (total, count),
        _ => return MISSING,
    };
    let center = total / count as f64;
    squared_deviations(x, center) / (count - 1) as f64
}

/// Sample standard deviation, the square root of [`variance`].
pub fn std_dev(x: &[f64], skip_missing: bool) -> f64 {
    variance(x, skip_missing).sqrt()
}

/// Root-mean-square deviation of `x` from the reference value `x0`.
///
/// Missing when no element takes part or `x0` itself is missing.
pub fn rmse(x: &[f64], x0: f64, skip_missing: bool) -> f64 {
    if is_missing(x0) {
        return MISSING;
    }
    match present_total(x, skip_missing) {
        Some((_, count)) if count > 0 => (squared_deviations(x, x0) / count as f64).sqrt(),
        _ => MISSING,
    }
}

/// Root-mean-square error between two paired sequences.
///
/// A pair takes part only when both sides are present. Fails when the
/// sequences have different lengths.
pub fn rmse_between(x: &[f64], y: &[f64], skip_missing: bool) -> KernelResult<f64> {
    if x.len() != y.len() {
        return Err(KernelError::invalid_argument(format!(
            "sequence lengths differ: {} vs {}",
            x.len(),
            y.len()
        )));
    }

    let mut total = 0.0;
    let mut count = 0usize;
    for (&a, &b) in x.iter().zip(y) {
        if is_missing(a) || is_missing(b) {
            if skip_missing {
                continue;
            }
            return Ok(MISSING);
        }
        let d = a - b;
        total += d * d;
        count += 1;
    }

    if count == 0 {
        return Ok(MISSING);
    }
    Ok((total / count as f64).sqrt())
}
