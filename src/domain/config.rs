// ============================================================================
// Kernel Configuration
// Missing-value policy, backend selection and parallel transform tuning
// ============================================================================

use crate::numeric::{KernelError, KernelResult, MissingPolicy};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Upper bound on explicitly requested worker threads
pub const MAX_WORKER_THREADS: usize = 1024;

/// Default minimum input length before the transform goes parallel
pub const DEFAULT_PARALLEL_THRESHOLD: usize = 64 * 1024;

/// Configuration for creating a kernel engine
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct KernelConfig {
    /// How reductions and scans treat missing values
    pub missing_policy: MissingPolicy,

    /// Use the best SIMD backend detected at runtime for dense fast paths
    pub use_simd: bool,

    /// Worker threads for the parallel transform
    /// 0 means one per available CPU
    pub worker_threads: usize,

    /// Inputs shorter than this run on the calling thread
    pub parallel_threshold: usize,
}

impl Default for KernelConfig {
    fn default() -> Self {
        Self {
            missing_policy: MissingPolicy::Propagate,
            use_simd: true,
            worker_threads: 0,
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
        }
    }
}

impl KernelConfig {
    /// Create a new configuration with the given missing-value policy
    pub fn new(missing_policy: MissingPolicy) -> Self {
        Self {
            missing_policy,
            ..Self::default()
        }
    }

    /// Builder method: Set missing-value policy
    pub fn with_missing_policy(mut self, policy: MissingPolicy) -> Self {
        self.missing_policy = policy;
        self
    }

    /// Builder method: Enable or disable SIMD backends
    pub fn with_simd(mut self, use_simd: bool) -> Self {
        self.use_simd = use_simd;
        self
    }

    /// Builder method: Set worker thread count (0 = auto)
    pub fn with_worker_threads(mut self, workers: usize) -> Self {
        self.worker_threads = workers;
        self
    }

    /// Builder method: Set parallel threshold
    pub fn with_parallel_threshold(mut self, threshold: usize) -> Self {
        self.parallel_threshold = threshold;
        self
    }

    /// Worker count with `0` resolved against the host
    pub fn effective_workers(&self) -> usize {
        if self.worker_threads > 0 {
            return self.worker_threads;
        }
        std::thread::available_parallelism()
            .map(|n| n.get())
            .unwrap_or(1)
    }

    /// Validate the configuration
    pub fn validate(&self) -> KernelResult<()> {
        if self.worker_threads > MAX_WORKER_THREADS {
            return Err(KernelError::invalid_config(format!(
                "worker threads must not exceed {}",
                MAX_WORKER_THREADS
            )));
        }

        if self.parallel_threshold == 0 {
            return Err(KernelError::invalid_config(
                "parallel threshold must be positive",
            ));
        }

        Ok(())
    }
}

// ============================================================================
// Preset Configurations (Factory Methods)
// ============================================================================

impl KernelConfig {
    /// Missing values poison results, SIMD on, auto workers
    pub fn strict() -> Self {
        Self::new(MissingPolicy::Propagate)
    }

    /// Missing values are skipped, SIMD on, auto workers
    pub fn lenient() -> Self {
        Self::new(MissingPolicy::Skip)
    }

    /// Everything on the calling thread with the scalar backend
    /// Useful as a baseline when benchmarking
    pub fn single_threaded() -> Self {
        Self::default()
            .with_simd(false)
            .with_worker_threads(1)
    }
}

#[cfg(feature = "serde")]
impl KernelConfig {
    /// Parse a configuration from JSON; absent fields take their defaults
    pub fn from_json(json: &str) -> KernelResult<Self> {
        let config: Self = serde_json::from_str(json).map_err(|e| KernelError::Serialization {
            reason: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize this configuration to JSON
    pub fn to_json(&self) -> KernelResult<String> {
        serde_json::to_string(self).map_err(|e| KernelError::Serialization {
            reason: e.to_string(),
        })
    }
}
