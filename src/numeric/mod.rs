// ============================================================================
// Numeric Module
// Missing-value marker, missing-value policy and error types
// ============================================================================
//
// This module provides:
// - MISSING / is_missing: the NaN sentinel for absent observations
// - MissingPolicy: Propagate (default) or Skip
// - KernelError: Error types for invalid kernel arguments
//
// Design principles:
// - Missing is a value, not an error
// - Fallible kernels return Result (no panics)
// - Inputs are plain f64 slices, never coerced

mod errors;
mod missing;

pub use errors::{KernelError, KernelResult};
pub use missing::{count_present, has_missing, is_missing, MissingPolicy, MISSING};
