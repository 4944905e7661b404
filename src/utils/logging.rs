// ============================================================================
// Logging Setup
// Installs a tracing subscriber for binaries, benches and demos
// ============================================================================

use tracing::Level;

/// Install a global `fmt` subscriber printing events at `level` and above.
///
/// Returns false if a global subscriber was already installed.
///
/// # Example
/// ```ignore
/// vector_kernels::utils::init_logging(tracing::Level::DEBUG);
/// ```
pub fn init_logging(level: Level) -> bool {
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_thread_ids(true)
        .try_init()
        .is_ok()
}
