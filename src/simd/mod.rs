// ============================================================================
// SIMD Optimizations Module
// Platform-specific SIMD implementations of the dense kernels
//
// Supported architectures:
// - x86_64: AVX2 (256-bit registers, 4x f64 parallel)
// - aarch64: NEON (128-bit registers, 2x f64 parallel)
// - Other: Scalar fallback
// ============================================================================

mod detector;
mod scalar;
mod traits;

#[cfg(target_arch = "x86_64")]
mod avx2;
#[cfg(target_arch = "aarch64")]
mod neon;

pub use detector::{create_scalar_kernel, create_simd_kernel, SimdLevel};
pub use scalar::ScalarKernel;
pub use traits::SimdKernel;

#[cfg(target_arch = "x86_64")]
pub use avx2::Avx2Kernel;
#[cfg(target_arch = "aarch64")]
pub use neon::NeonKernel;
