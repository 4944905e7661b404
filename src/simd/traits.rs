// ============================================================================
// SIMD Kernel Trait
// Abstract interface for vectorized dense-slice kernels
// ============================================================================

/// Trait for SIMD-accelerated dense kernels.
///
/// Implementations provide the missing-free fast paths used by the
/// kernel engine: a plain sum and an element-wise square.
///
/// # Thread Safety
/// All implementations must be `Send + Sync` so a single backend can be
/// shared by every worker of the parallel transform.
///
/// # Missing Values
/// Backends do not inspect values. A NaN anywhere in the input makes
/// `sum` return NaN and squares to NaN in `square_into`, which is exactly
/// the propagate policy.
pub trait SimdKernel: Send + Sync {
    /// Sum every element of `x`.
    ///
    /// Lane-wise accumulation may associate additions differently from a
    /// left-to-right loop, so results can differ in the last bits.
    fn sum(&self, x: &[f64]) -> f64;

    /// Write `input[i] * input[i]` into `output[i]`.
    ///
    /// Only the common prefix of the two slices is processed; callers
    /// pass slices of equal length.
    fn square_into(&self, input: &[f64], output: &mut [f64]);

    /// Get the name of this SIMD implementation.
    ///
    /// Used for logging, debugging, and benchmarking.
    fn name(&self) -> &'static str;
}
