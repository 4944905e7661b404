// ============================================================================
// Event Handler Interface
// Defines the contract for handling kernel execution events
// ============================================================================

use chrono::{DateTime, Utc};

#[cfg(feature = "serde")]
use serde::Serialize;

/// Events emitted by the kernel engine
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub enum KernelEvent {
    /// A parallel worker finished its contiguous chunk `[start, end)`
    ChunkProcessed {
        worker: usize,
        start: usize,
        end: usize,
        timestamp: DateTime<Utc>,
    },

    /// An element-wise transform finished
    TransformCompleted {
        kernel: &'static str,
        len: usize,
        workers: usize,
        timestamp: DateTime<Utc>,
    },

    /// A reduction produced its value
    ReductionCompleted {
        kernel: &'static str,
        len: usize,
        missing: bool,
        timestamp: DateTime<Utc>,
    },

    /// A prefix scan produced its output
    ScanCompleted {
        kernel: &'static str,
        len: usize,
        missing_outputs: usize,
        timestamp: DateTime<Utc>,
    },
}

/// Event handler trait for processing kernel engine events
/// Implementations can handle logging, metrics, benchmarking probes, etc.
pub trait EventHandler: Send + Sync {
    /// Handle a kernel event
    fn on_event(&self, event: KernelEvent);

    /// Batch event handler (optional optimization)
    fn on_events(&self, events: Vec<KernelEvent>) {
        for event in events {
            self.on_event(event);
        }
    }
}

/// No-op event handler for testing
pub struct NoOpEventHandler;

impl EventHandler for NoOpEventHandler {
    fn on_event(&self, _event: KernelEvent) {
        // Do nothing
    }
}

/// Logging event handler
pub struct LoggingEventHandler;

impl EventHandler for LoggingEventHandler {
    fn on_event(&self, event: KernelEvent) {
        tracing::debug!("Kernel engine event: {:?}", event);
    }
}
