// ============================================================================
// SIMD Backend Selection
// Runtime detection of the widest usable f64 lane width
// ============================================================================

use super::scalar::ScalarKernel;
use super::traits::SimdKernel;
use std::sync::Arc;

/// SIMD backend level, ordered by lane width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SimdLevel {
    /// No SIMD, scalar operations only
    None,
    /// ARM NEON (128-bit, 2x f64)
    Neon,
    /// x86 AVX2 (256-bit, 4x f64)
    Avx2,
}

impl SimdLevel {
    /// Detect the highest available SIMD level for the current CPU.
    pub fn detect() -> Self {
        #[cfg(target_arch = "x86_64")]
        {
            if super::avx2::Avx2Kernel::is_available() {
                return SimdLevel::Avx2;
            }
            SimdLevel::None
        }

        #[cfg(target_arch = "aarch64")]
        {
            SimdLevel::Neon
        }

        #[cfg(not(any(target_arch = "x86_64", target_arch = "aarch64")))]
        {
            SimdLevel::None
        }
    }

    /// Number of f64 values one register holds at this level.
    #[inline]
    pub const fn lanes(self) -> usize {
        match self {
            SimdLevel::None => 1,
            SimdLevel::Neon => 2,
            SimdLevel::Avx2 => 4,
        }
    }

    /// Build the backend for this level.
    ///
    /// Falls back to the scalar kernel when the level is not usable on the
    /// running CPU, so asking for `Avx2` on an aarch64 host is safe.
    pub fn create_kernel(self) -> Arc<dyn SimdKernel> {
        match self {
            #[cfg(target_arch = "x86_64")]
            SimdLevel::Avx2 => match super::avx2::Avx2Kernel::try_new() {
                Some(kernel) => Arc::new(kernel),
                None => {
                    tracing::debug!("AVX2 requested but not detected, using scalar");
                    Arc::new(ScalarKernel::new())
                },
            },

            #[cfg(target_arch = "aarch64")]
            SimdLevel::Neon => Arc::new(super::neon::NeonKernel::new()),

            _ => Arc::new(ScalarKernel::new()),
        }
    }
}

impl std::fmt::Display for SimdLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SimdLevel::None => write!(f, "None (Scalar)"),
            SimdLevel::Neon => write!(f, "ARM NEON"),
            SimdLevel::Avx2 => write!(f, "AVX2"),
        }
    }
}

/// Create the optimal SIMD kernel for the current CPU.
///
/// - AVX2 on x86_64 with AVX2 support
/// - NEON on aarch64 (always available)
/// - Scalar fallback on other platforms
///
/// # Example
/// ```
/// use vector_kernels::simd::create_simd_kernel;
///
/// let kernel = create_simd_kernel();
/// assert_eq!(kernel.sum(&[1.0, 2.0, 3.0]), 6.0);
/// println!("Using SIMD: {}", kernel.name());
/// ```
pub fn create_simd_kernel() -> Arc<dyn SimdKernel> {
    let level = SimdLevel::detect();
    tracing::debug!(level = %level, lanes = level.lanes(), "Selecting SIMD kernel");
    level.create_kernel()
}

/// Create a scalar kernel (for testing or comparison).
pub fn create_scalar_kernel() -> Arc<dyn SimdKernel> {
    Arc::new(ScalarKernel::new())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detected_level_drives_factory() {
        let level = SimdLevel::detect();
        let kernel = create_simd_kernel();

        let expected = match level {
            SimdLevel::None => "Scalar",
            SimdLevel::Neon => "NEON",
            SimdLevel::Avx2 => "AVX2",
        };
        assert_eq!(kernel.name(), expected);

        #[cfg(target_arch = "aarch64")]
        assert_eq!(level, SimdLevel::Neon);
        #[cfg(not(any(target_arch = "x86_64", target_arch = "aarch64")))]
        assert_eq!(level, SimdLevel::None);

        assert_eq!(kernel.sum(&[0.5, 0.25, 0.25]), 1.0);
    }

    #[test]
    fn test_unusable_level_falls_back_to_scalar() {
        #[cfg(not(target_arch = "aarch64"))]
        assert_eq!(SimdLevel::Neon.create_kernel().name(), "Scalar");

        #[cfg(not(target_arch = "x86_64"))]
        assert_eq!(SimdLevel::Avx2.create_kernel().name(), "Scalar");

        #[cfg(target_arch = "x86_64")]
        {
            let name = SimdLevel::Avx2.create_kernel().name();
            if SimdLevel::detect() == SimdLevel::Avx2 {
                assert_eq!(name, "AVX2");
            } else {
                assert_eq!(name, "Scalar");
            }
        }

        assert_eq!(SimdLevel::None.create_kernel().name(), "Scalar");
    }

    #[test]
    fn test_create_scalar_kernel() {
        let kernel = create_scalar_kernel();
        assert_eq!(kernel.name(), "Scalar");
    }

    #[test]
    fn test_kernel_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Arc<dyn SimdKernel>>();
    }

    #[test]
    fn test_simd_level_ordering_follows_lanes() {
        assert!(SimdLevel::None < SimdLevel::Neon);
        assert!(SimdLevel::Neon < SimdLevel::Avx2);
        assert_eq!(SimdLevel::None.lanes(), 1);
        assert_eq!(SimdLevel::Neon.lanes(), 2);
        assert_eq!(SimdLevel::Avx2.lanes(), 4);
    }
}
