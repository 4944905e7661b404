// ============================================================================
// Interfaces Module
// Contains all trait definitions and contracts
// ============================================================================

mod event_handler;
mod scan_operator;

pub use event_handler::{EventHandler, KernelEvent, LoggingEventHandler, NoOpEventHandler};
pub use scan_operator::ScanOperator;
