// ============================================================================
// Domain Models Module
// Contains the engine configuration value objects
// ============================================================================

pub mod config;

pub use config::{KernelConfig, DEFAULT_PARALLEL_THRESHOLD, MAX_WORKER_THREADS};
