// ============================================================================
// x86_64 AVX2 Implementation
// SIMD acceleration using AVX2 instructions (256-bit, 4x f64)
// ============================================================================

#![cfg(target_arch = "x86_64")]

use super::traits::SimdKernel;

/// AVX2 implementation of the dense kernels.
///
/// Uses 256-bit AVX2 registers to process 4 f64 values per iteration.
/// Requires runtime detection of AVX2 support.
///
/// The private field keeps construction behind `new`/`try_new`, so every
/// value proves AVX2 was detected.
#[derive(Debug, Clone, Copy)]
pub struct Avx2Kernel {
    _detected: (),
}

impl Avx2Kernel {
    /// Create a new AVX2 kernel.
    ///
    /// # Panics
    /// Panics if AVX2 is not available on this CPU.
    /// Use `try_new()` to fall back instead.
    pub fn new() -> Self {
        match Self::try_new() {
            Some(kernel) => kernel,
            None => panic!("AVX2 is not available on this CPU"),
        }
    }

    /// Create an AVX2 kernel if this CPU supports AVX2.
    pub fn try_new() -> Option<Self> {
        if Self::is_available() {
            Some(Self { _detected: () })
        } else {
            None
        }
    }

    /// Check if AVX2 is available on this CPU.
    #[inline]
    pub fn is_available() -> bool {
        is_x86_feature_detected!("avx2")
    }
}

impl SimdKernel for Avx2Kernel {
    fn sum(&self, x: &[f64]) -> f64 {
        // Safety: values only exist after try_new() detected AVX2
        unsafe { avx2_sum(x) }
    }

    fn square_into(&self, input: &[f64], output: &mut [f64]) {
        let len = input.len().min(output.len());
        unsafe { avx2_square_into(&input[..len], &mut output[..len]) }
    }

    fn name(&self) -> &'static str {
        "AVX2"
    }
}

/// AVX2-accelerated sum.
///
/// Keeps four running partial sums, one per lane, and folds them at the end.
///
/// # Safety
/// Caller must ensure AVX2 is available.
#[target_feature(enable = "avx2")]
unsafe fn avx2_sum(x: &[f64]) -> f64 {
    use std::arch::x86_64::*;

    let mut acc = _mm256_setzero_pd();

    let chunks = x.chunks_exact(4);
    let remainder = chunks.remainder();

    for chunk in chunks {
        let v = _mm256_loadu_pd(chunk.as_ptr());
        acc = _mm256_add_pd(acc, v);
    }

    // Fold the four lanes
    let mut lanes = [0.0f64; 4];
    _mm256_storeu_pd(lanes.as_mut_ptr(), acc);
    let mut total = (lanes[0] + lanes[1]) + (lanes[2] + lanes[3]);

    // Handle remainder with scalar code
    for &v in remainder {
        total += v;
    }

    total
}

/// AVX2-accelerated element-wise square.
///
/// # Safety
/// Caller must ensure AVX2 is available and `input.len() == output.len()`.
#[target_feature(enable = "avx2")]
unsafe fn avx2_square_into(input: &[f64], output: &mut [f64]) {
    use std::arch::x86_64::*;

    let mut in_chunks = input.chunks_exact(4);
    let mut out_chunks = output.chunks_exact_mut(4);

    for (src, dst) in (&mut in_chunks).zip(&mut out_chunks) {
        let v = _mm256_loadu_pd(src.as_ptr());
        _mm256_storeu_pd(dst.as_mut_ptr(), _mm256_mul_pd(v, v));
    }

    for (out, &v) in out_chunks
        .into_remainder()
        .iter_mut()
        .zip(in_chunks.remainder())
    {
        *out = v * v;
    }
}
