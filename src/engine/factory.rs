// ============================================================================
// Kernel Engine Factory
// Creates kernel engines with proper configuration
// ============================================================================

use crate::domain::KernelConfig;
use crate::engine::KernelEngine;
use crate::interfaces::EventHandler;
use crate::numeric::{KernelResult, MissingPolicy};
use crate::simd::{create_scalar_kernel, create_simd_kernel, SimdKernel};
use std::sync::Arc;

// ============================================================================
// Factory Functions
// ============================================================================

/// Creates a kernel engine from configuration
///
/// # Arguments
/// * `config` - Kernel configuration
/// * `event_handler` - Event handler for kernel events
///
/// # Returns
/// * `KernelResult<KernelEngine>` - Configured kernel engine or error
///
/// # Example
/// ```
/// use vector_kernels::prelude::*;
/// use std::sync::Arc;
///
/// let engine = create_from_config(KernelConfig::lenient(), Arc::new(NoOpEventHandler)).unwrap();
/// assert_eq!(engine.mean(&[1.0, f64::NAN, 3.0]), 2.0);
/// ```
pub fn create_from_config(
    config: KernelConfig,
    event_handler: Arc<dyn EventHandler>,
) -> KernelResult<KernelEngine> {
    // Validate configuration first
    config.validate()?;

    let backend = create_backend(&config);

    Ok(KernelEngine::new(config, backend, event_handler))
}

/// Creates the SIMD backend requested by the configuration
fn create_backend(config: &KernelConfig) -> Arc<dyn SimdKernel> {
    if config.use_simd {
        create_simd_kernel()
    } else {
        create_scalar_kernel()
    }
}

// ============================================================================
// Builder Pattern for Advanced Configuration
// ============================================================================

/// Builder for creating kernel engines with fluent API
///
/// # Example
/// ```
/// use vector_kernels::prelude::*;
/// use std::sync::Arc;
///
/// let engine = KernelEngineBuilder::new()
///     .skip_missing(true)
///     .with_worker_threads(2)
///     .build(Arc::new(NoOpEventHandler))
///     .unwrap();
/// assert_eq!(engine.cumulative_sum(&[1.0, f64::NAN, 3.0]), vec![1.0, 1.0, 4.0]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct KernelEngineBuilder {
    config: KernelConfig,
}

impl KernelEngineBuilder {
    /// Create a new builder with the default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing configuration
    pub fn from_config(config: KernelConfig) -> Self {
        Self { config }
    }

    // ========================================================================
    // Missing-Value Policy
    // ========================================================================

    /// Skip (true) or propagate (false) missing values
    pub fn skip_missing(mut self, skip: bool) -> Self {
        self.config.missing_policy = MissingPolicy::from_skip(skip);
        self
    }

    /// Set the missing-value policy
    pub fn missing_policy(mut self, policy: MissingPolicy) -> Self {
        self.config.missing_policy = policy;
        self
    }

    // ========================================================================
    // Backend and Parallelism
    // ========================================================================

    /// Enable or disable the SIMD backend
    pub fn with_simd(mut self, use_simd: bool) -> Self {
        self.config.use_simd = use_simd;
        self
    }

    /// Set worker thread count (0 = one per CPU)
    pub fn with_worker_threads(mut self, workers: usize) -> Self {
        self.config.worker_threads = workers;
        self
    }

    /// Set the minimum input length for the parallel transform
    pub fn with_parallel_threshold(mut self, threshold: usize) -> Self {
        self.config.parallel_threshold = threshold;
        self
    }

    // ========================================================================
    // Build
    // ========================================================================

    /// Build the kernel engine
    pub fn build(self, event_handler: Arc<dyn EventHandler>) -> KernelResult<KernelEngine> {
        create_from_config(self.config, event_handler)
    }

    /// Get the configuration without building (for inspection)
    pub fn get_config(&self) -> &KernelConfig {
        &self.config
    }
}
