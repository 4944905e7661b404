// ============================================================================
// Vector Kernels Library
// Missing-value-aware reductions and prefix scans over numeric sequences
// ============================================================================

//! # Vector Kernels
//!
//! Small, stateless numeric kernels over `f64` sequences with an explicit
//! policy for missing values (NaN).
//!
//! ## Features
//!
//! - **Reductions**: sum, mean, sample variance, standard deviation, RMSE
//! - **Prefix scans**: cumulative sum/product/min/max with a carry-forward /
//!   recovery protocol for missing values
//! - **Lagged difference and range**
//! - **Predicate reductions**: any, all, which (1-based positions)
//! - **SIMD backends** for dense fast paths (AVX2 on x86_64, NEON on aarch64)
//! - **Data-parallel transforms** over contiguous partitions on scoped threads
//!
//! Every kernel takes a `skip_missing` flag. With `false` a missing value
//! poisons the result; with `true` it is left out. Missing is a value, not
//! an error: only arguments a kernel cannot work with (empty input for
//! `range`, an out-of-range lag, mismatched lengths) produce a
//! [`numeric::KernelError`].
//!
//! ## Example
//!
//! ```rust
//! use vector_kernels::prelude::*;
//! use std::sync::Arc;
//!
//! let x = [1.0, MISSING, 3.0];
//!
//! // Free functions
//! assert!(is_missing(sum(&x, false)));
//! assert_eq!(sum(&x, true), 4.0);
//! assert_eq!(cumulative_sum(&x, true), vec![1.0, 1.0, 4.0]);
//!
//! // Configured engine
//! let engine = KernelEngineBuilder::new()
//!     .skip_missing(true)
//!     .build(Arc::new(NoOpEventHandler))
//!     .unwrap();
//! assert_eq!(engine.mean(&x), 2.0);
//! println!("Backend: {}", engine.backend_name());
//! ```

pub mod domain;
pub mod engine;
pub mod interfaces;
pub mod numeric;
pub mod simd;
pub mod utils;

// Re-exports for convenience
pub mod prelude {
    pub use crate::domain::KernelConfig;
    pub use crate::engine::{
        all, any, create_from_config, cumulative_max, cumulative_min, cumulative_product,
        cumulative_sum, diff, mean, range, rmse, rmse_between, std_dev, sum, variance, which,
        KernelEngine, KernelEngineBuilder,
    };
    pub use crate::interfaces::{
        EventHandler, KernelEvent, LoggingEventHandler, NoOpEventHandler, ScanOperator,
    };
    pub use crate::numeric::{is_missing, KernelError, KernelResult, MissingPolicy, MISSING};
    pub use crate::simd::SimdKernel;
}
