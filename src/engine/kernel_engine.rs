// ============================================================================
// Kernel Engine
// Configured front end over the stateless kernels
// ============================================================================

use crate::domain::KernelConfig;
use crate::engine::{lagged, parallel, predicates, reductions, scans};
use crate::interfaces::{EventHandler, KernelEvent, ScanOperator};
use crate::numeric::{count_present, is_missing, KernelResult, MissingPolicy};
use crate::simd::SimdKernel;
use chrono::Utc;
use std::sync::Arc;

/// Kernel engine with a fixed missing-value policy, SIMD backend and
/// parallel transform settings.
///
/// The engine holds no mutable state; every method is a pure function of
/// its arguments and the configuration, so one engine can be shared across
/// threads.
pub struct KernelEngine {
    /// Policy, backend and parallelism settings
    config: KernelConfig,

    /// Dense fast-path backend
    backend: Arc<dyn SimdKernel>,

    /// Event handler for processing events
    event_handler: Arc<dyn EventHandler>,
}

impl KernelEngine {
    /// Create a new kernel engine
    pub fn new(
        config: KernelConfig,
        backend: Arc<dyn SimdKernel>,
        event_handler: Arc<dyn EventHandler>,
    ) -> Self {
        tracing::debug!(
            policy = %config.missing_policy,
            backend = backend.name(),
            "Kernel engine created"
        );
        Self {
            config,
            backend,
            event_handler,
        }
    }

    /// Get the engine configuration
    pub fn config(&self) -> &KernelConfig {
        &self.config
    }

    /// Get the active missing-value policy
    pub fn missing_policy(&self) -> MissingPolicy {
        self.config.missing_policy
    }

    /// Get the name of the active SIMD backend
    pub fn backend_name(&self) -> &'static str {
        self.backend.name()
    }

    fn skips(&self) -> bool {
        self.config.missing_policy.skips()
    }

    fn reduced(&self, kernel: &'static str, len: usize, value: f64) -> f64 {
        self.event_handler.on_event(KernelEvent::ReductionCompleted {
            kernel,
            len,
            missing: is_missing(value),
            timestamp: Utc::now(),
        });
        value
    }

    fn scanned(&self, kernel: &'static str, out: Vec<f64>) -> Vec<f64> {
        self.event_handler.on_event(KernelEvent::ScanCompleted {
            kernel,
            len: out.len(),
            missing_outputs: out.len() - count_present(&out),
            timestamp: Utc::now(),
        });
        out
    }

    // ========================================================================
    // Reductions
    // ========================================================================

    /// Sum under the engine's policy.
    ///
    /// When propagating with SIMD enabled the backend sums the slice
    /// directly; a missing element still poisons the result.
    pub fn sum(&self, x: &[f64]) -> f64 {
        let value = if self.config.use_simd && !self.skips() {
            self.backend.sum(x)
        } else {
            reductions::sum(x, self.skips())
        };
        self.reduced("sum", x.len(), value)
    }

    /// Mean under the engine's policy
    pub fn mean(&self, x: &[f64]) -> f64 {
        self.reduced("mean", x.len(), reductions::mean(x, self.skips()))
    }

    /// Sample variance under the engine's policy
    pub fn variance(&self, x: &[f64]) -> f64 {
        self.reduced("variance", x.len(), reductions::variance(x, self.skips()))
    }

    /// Sample standard deviation under the engine's policy
    pub fn std_dev(&self, x: &[f64]) -> f64 {
        self.reduced("std_dev", x.len(), reductions::std_dev(x, self.skips()))
    }

    /// RMSE from a reference value under the engine's policy
    pub fn rmse(&self, x: &[f64], x0: f64) -> f64 {
        self.reduced("rmse", x.len(), reductions::rmse(x, x0, self.skips()))
    }

    /// RMSE between paired sequences under the engine's policy
    pub fn rmse_between(&self, x: &[f64], y: &[f64]) -> KernelResult<f64> {
        let value = reductions::rmse_between(x, y, self.skips())?;
        Ok(self.reduced("rmse_between", x.len(), value))
    }

    /// Sum of squares: parallel square transform followed by a sum
    pub fn sum_of_squares(&self, x: &[f64]) -> KernelResult<f64> {
        let squares = self.square(x)?;
        Ok(self.sum(&squares))
    }

    // ========================================================================
    // Scans
    // ========================================================================

    /// Run any scan operator under the engine's policy
    pub fn scan(&self, x: &[f64], op: &dyn ScanOperator) -> Vec<f64> {
        let out = scans::scan(x, op, self.config.missing_policy);
        self.scanned(op.name(), out)
    }

    /// Cumulative sum under the engine's policy
    pub fn cumulative_sum(&self, x: &[f64]) -> Vec<f64> {
        self.scan(x, &scans::CumulativeSum)
    }

    /// Cumulative product under the engine's policy
    pub fn cumulative_product(&self, x: &[f64]) -> Vec<f64> {
        self.scan(x, &scans::CumulativeProduct)
    }

    /// Cumulative minimum under the engine's policy
    pub fn cumulative_min(&self, x: &[f64]) -> Vec<f64> {
        self.scan(x, &scans::CumulativeMin)
    }

    /// Cumulative maximum under the engine's policy
    pub fn cumulative_max(&self, x: &[f64]) -> Vec<f64> {
        self.scan(x, &scans::CumulativeMax)
    }

    /// Lagged difference
    pub fn diff(&self, x: &[f64], lag: usize) -> KernelResult<Vec<f64>> {
        let out = lagged::diff(x, lag)?;
        Ok(self.scanned("diff", out))
    }

    /// Minimum and maximum
    pub fn range(&self, x: &[f64]) -> KernelResult<(f64, f64)> {
        let (min, max) = lagged::range(x)?;
        self.event_handler.on_event(KernelEvent::ReductionCompleted {
            kernel: "range",
            len: x.len(),
            missing: is_missing(min) || is_missing(max),
            timestamp: Utc::now(),
        });
        Ok((min, max))
    }

    // ========================================================================
    // Predicates
    // ========================================================================

    /// True if any element is true
    pub fn any(&self, x: &[bool]) -> bool {
        predicates::any(x)
    }

    /// True if every element is true
    pub fn all(&self, x: &[bool]) -> bool {
        predicates::all(x)
    }

    /// 1-based positions satisfying `predicate`
    pub fn which<T, P>(&self, x: &[T], predicate: P) -> Vec<usize>
    where
        P: Fn(&T) -> bool,
    {
        predicates::which(x, predicate)
    }

    // ========================================================================
    // Element-wise transforms
    // ========================================================================

    /// Worker count for an input of `len` elements
    fn workers_for(&self, len: usize) -> usize {
        if len < self.config.parallel_threshold {
            1
        } else {
            self.config.effective_workers()
        }
    }

    /// Square every element, in parallel above the threshold
    pub fn square(&self, x: &[f64]) -> KernelResult<Vec<f64>> {
        let workers = self.workers_for(x.len());
        let out = parallel::square(x, workers, self.backend.as_ref(), self.event_handler.as_ref())?;
        self.transformed("square", x.len(), workers);
        Ok(out)
    }

    /// Apply `f` to every element, in parallel above the threshold
    pub fn map<F>(&self, x: &[f64], f: F) -> KernelResult<Vec<f64>>
    where
        F: Fn(f64) -> f64 + Sync,
    {
        let workers = self.workers_for(x.len());
        let out = parallel::map(x, workers, f, self.event_handler.as_ref())?;
        self.transformed("map", x.len(), workers);
        Ok(out)
    }

    fn transformed(&self, kernel: &'static str, len: usize, workers: usize) {
        self.event_handler.on_event(KernelEvent::TransformCompleted {
            kernel,
            len,
            workers,
            timestamp: Utc::now(),
        });
    }
}
