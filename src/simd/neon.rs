// ============================================================================
// ARM NEON Implementation
// SIMD acceleration using ARM NEON instructions (128-bit, 2x f64)
// ============================================================================

#![cfg(target_arch = "aarch64")]

use super::traits::SimdKernel;

/// ARM NEON implementation of the dense kernels.
///
/// Uses 128-bit NEON registers to process 2 f64 values per iteration.
/// NEON is always available on aarch64 (ARMv8-A baseline).
#[derive(Debug, Clone, Copy, Default)]
pub struct NeonKernel;

impl NeonKernel {
    /// Create a new NEON kernel.
    pub fn new() -> Self {
        Self
    }
}

impl SimdKernel for NeonKernel {
    fn sum(&self, x: &[f64]) -> f64 {
        // NEON is always available on aarch64
        unsafe { neon_sum(x) }
    }

    fn square_into(&self, input: &[f64], output: &mut [f64]) {
        let len = input.len().min(output.len());
        unsafe { neon_square_into(&input[..len], &mut output[..len]) }
    }

    fn name(&self) -> &'static str {
        "NEON"
    }
}

/// NEON-accelerated sum with two lane accumulators.
///
/// # Safety
/// This function uses NEON intrinsics which are always available on aarch64.
#[inline]
unsafe fn neon_sum(x: &[f64]) -> f64 {
    use std::arch::aarch64::*;

    let mut acc = vdupq_n_f64(0.0);

    let chunks = x.chunks_exact(2);
    let remainder = chunks.remainder();

    for chunk in chunks {
        acc = vaddq_f64(acc, vld1q_f64(chunk.as_ptr()));
    }

    let mut total = vaddvq_f64(acc);

    // Handle remainder with scalar code
    for &v in remainder {
        total += v;
    }

    total
}

/// NEON-accelerated element-wise square.
///
/// # Safety
/// Caller must ensure `input.len() == output.len()`.
#[inline]
unsafe fn neon_square_into(input: &[f64], output: &mut [f64]) {
    use std::arch::aarch64::*;

    let mut in_chunks = input.chunks_exact(2);
    let mut out_chunks = output.chunks_exact_mut(2);

    for (src, dst) in (&mut in_chunks).zip(&mut out_chunks) {
        let v = vld1q_f64(src.as_ptr());
        vst1q_f64(dst.as_mut_ptr(), vmulq_f64(v, v));
    }

    for (out, &v) in out_chunks
        .into_remainder()
        .iter_mut()
        .zip(in_chunks.remainder())
    {
        *out = v * v;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::numeric::{is_missing, MISSING};
    use approx::assert_relative_eq;

    #[test]
    fn test_neon_sum() {
        let kernel = NeonKernel::new();
        assert_eq!(kernel.sum(&[1.0, 2.0, 3.0]), 6.0);
        assert_eq!(kernel.sum(&[]), 0.0);
        assert!(is_missing(kernel.sum(&[1.0, MISSING, 3.0])));
    }

    #[test]
    fn test_neon_name() {
        let kernel = NeonKernel::new();
        assert_eq!(kernel.name(), "NEON");
    }

    #[test]
    fn test_neon_consistency_with_scalar() {
        use crate::simd::scalar::ScalarKernel;

        let neon = NeonKernel::new();
        let scalar = ScalarKernel::new();

        // Test with various sizes to exercise both SIMD and remainder paths
        for size in [1usize, 2, 3, 5, 7, 10, 15, 100] {
            let x: Vec<f64> = (0..size).map(|i| 1.0 + i as f64 * 0.25).collect();

            assert_relative_eq!(neon.sum(&x), scalar.sum(&x), epsilon = 1e-12);

            let mut neon_out = vec![0.0; size];
            let mut scalar_out = vec![0.0; size];
            neon.square_into(&x, &mut neon_out);
            scalar.square_into(&x, &mut scalar_out);
            assert_eq!(
                neon_out, scalar_out,
                "Mismatch for size {}: NEON={:?}, Scalar={:?}",
                size, neon_out, scalar_out
            );
        }
    }
}
