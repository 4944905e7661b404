// ============================================================================
// Kernel Errors
// Error types for invalid kernel arguments and engine failures
// ============================================================================

use std::fmt;

/// Errors that can occur when calling a kernel.
///
/// A missing value is never an error: it is an ordinary result value
/// (see [`super::MISSING`]). Errors are reserved for arguments a kernel
/// cannot work with at all.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum KernelError {
    /// Empty input where a first element is required, lag out of range,
    /// mismatched sequence lengths
    InvalidArgument { reason: String },
    /// Configuration rejected by validation
    InvalidConfig { reason: String },
    /// A worker thread of the parallel transform panicked
    WorkerPanicked { worker: usize },
    /// Configuration could not be (de)serialized
    Serialization { reason: String },
}

impl KernelError {
    pub(crate) fn invalid_argument(reason: impl Into<String>) -> Self {
        KernelError::InvalidArgument {
            reason: reason.into(),
        }
    }

    pub(crate) fn invalid_config(reason: impl Into<String>) -> Self {
        KernelError::InvalidConfig {
            reason: reason.into(),
        }
    }
}

impl fmt::Display for KernelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KernelError::InvalidArgument { reason } => write!(f, "invalid argument: {}", reason),
            KernelError::InvalidConfig { reason } => write!(f, "invalid configuration: {}", reason),
            KernelError::WorkerPanicked { worker } => {
                write!(f, "parallel worker {} panicked", worker)
            },
            KernelError::Serialization { reason } => write!(f, "serialization failed: {}", reason),
        }
    }
}

impl std::error::Error for KernelError {}

/// Result type alias for kernel operations
pub type KernelResult<T> = Result<T, KernelError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            KernelError::invalid_argument("lag must be at least 1").to_string(),
            "invalid argument: lag must be at least 1"
        );
        assert_eq!(
            KernelError::WorkerPanicked { worker: 3 }.to_string(),
            "parallel worker 3 panicked"
        );
    }

    #[test]
    fn test_error_equality() {
        assert_eq!(
            KernelError::invalid_config("x"),
            KernelError::InvalidConfig {
                reason: "x".to_string()
            }
        );
        assert_ne!(
            KernelError::invalid_config("x"),
            KernelError::invalid_argument("x")
        );
    }
}
