// ============================================================================
// Missing Values
// The missing-value marker and the policy for handling it
// ============================================================================

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Marker for an absent observation.
///
/// Any NaN is treated as missing; this constant is the canonical one
/// produced by the kernels.
pub const MISSING: f64 = f64::NAN;

/// Returns true if `value` is the missing marker.
#[inline(always)]
pub fn is_missing(value: f64) -> bool {
    value.is_nan()
}

/// Count of non-missing values in `x`.
#[inline]
pub fn count_present(x: &[f64]) -> usize {
    x.iter().filter(|&&v| !is_missing(v)).count()
}

/// Returns true if any element of `x` is missing.
#[inline]
pub fn has_missing(x: &[f64]) -> bool {
    x.iter().any(|&v| is_missing(v))
}

/// How a kernel treats missing values it encounters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum MissingPolicy {
    /// Any missing operand poisons the result at that step
    #[default]
    Propagate,
    /// Missing operands are excluded from accumulation
    Skip,
}

impl MissingPolicy {
    /// Map the conventional `skip_missing` flag onto a policy.
    #[inline]
    pub const fn from_skip(skip_missing: bool) -> Self {
        if skip_missing {
            MissingPolicy::Skip
        } else {
            MissingPolicy::Propagate
        }
    }

    /// True for [`MissingPolicy::Skip`].
    #[inline]
    pub const fn skips(self) -> bool {
        matches!(self, MissingPolicy::Skip)
    }
}

impl std::fmt::Display for MissingPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MissingPolicy::Propagate => write!(f, "propagate"),
            MissingPolicy::Skip => write!(f, "skip"),
        }
    }
}
