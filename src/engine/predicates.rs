// ============================================================================
// Predicate Reductions
// any / all / which over boolean and predicate results
// ============================================================================

/// True on the first true element; false if there is none.
///
/// An empty input is false.
#[inline]
pub fn any(x: &[bool]) -> bool {
    for &b in x {
        if b {
            return true;
        }
    }
    false
}

/// False on the first false element; true otherwise.
///
/// An empty input is true.
#[inline]
pub fn all(x: &[bool]) -> bool {
    for &b in x {
        if !b {
            return false;
        }
    }
    true
}

/// 1-based positions of the elements satisfying `predicate`, in order.
///
/// No match yields an empty vector.
///
/// # Example
/// ```
/// use vector_kernels::engine::which;
///
/// assert_eq!(which(&[1.0, 20.0, 3.0, 40.0], |&v| v > 10.0), vec![2, 4]);
/// assert!(which(&[1.0, 2.0, 3.0], |&v| v > 10.0).is_empty());
/// ```
pub fn which<T, P>(x: &[T], predicate: P) -> Vec<usize>
where
    P: Fn(&T) -> bool,
{
    x.iter()
        .enumerate()
        .filter_map(|(idx, v)| if predicate(v) { Some(idx + 1) } else { None })
        .collect()
}
