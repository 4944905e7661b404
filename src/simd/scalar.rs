// ============================================================================
// Scalar (Non-SIMD) Implementation
// Fallback implementation using standard scalar operations
// ============================================================================

use super::traits::SimdKernel;

/// Scalar implementation of the dense kernels.
///
/// This is the fallback implementation that works on all platforms.
/// It sums strictly left to right, so it is also the reference the
/// SIMD backends are checked against.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScalarKernel;

impl ScalarKernel {
    /// Create a new scalar kernel.
    pub fn new() -> Self {
        Self
    }
}

impl SimdKernel for ScalarKernel {
    fn sum(&self, x: &[f64]) -> f64 {
        x.iter().fold(0.0, |acc, &v| acc + v)
    }

    fn square_into(&self, input: &[f64], output: &mut [f64]) {
        for (out, &v) in output.iter_mut().zip(input) {
            *out = v * v;
        }
    }

    fn name(&self) -> &'static str {
        "Scalar"
    }
}
