// ============================================================================
// Utilities Module
// Helper functions for running and observing the kernels
// ============================================================================

#[cfg(feature = "logging")]
mod logging;

#[cfg(feature = "logging")]
pub use logging::init_logging;
