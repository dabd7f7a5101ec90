//! Realize Event Port
//!
//! Observable progress of a realization: which instances were materialized and
//! which files were written. Drives the NDJSON stream of `camp realize --json`.

use std::path::PathBuf;

use crate::domain::value_objects::ContentHash;

/// Event emitted while realizing configurations
#[derive(Debug, Clone, PartialEq)]
pub enum RealizeEvent {
    /// A configuration build started
    Started {
        configuration: usize,
        destination: PathBuf,
        instance_count: usize,
    },

    /// An instance image directory was populated
    InstanceRealized {
        configuration: usize,
        instance: String,
        files: usize,
    },

    /// A file was written (copied or substituted)
    FileWritten {
        configuration: usize,
        path: PathBuf,
        hash: ContentHash,
    },

    /// A configuration build finished
    Completed {
        configuration: usize,
        files_written: usize,
        substitutions: usize,
    },

    /// A configuration build failed; the tree on disk may be partial
    Failed { configuration: usize, error: String },
}

/// Trait for receiving realize events
pub trait RealizeEventSink {
    /// Handle a realize event
    fn on_event(&self, event: RealizeEvent);

    /// Whether this sink wants per-file events
    fn wants_detailed_events(&self) -> bool {
        true
    }
}

/// No-op event sink for silent operation
pub struct NoopEventSink;

impl RealizeEventSink for NoopEventSink {
    fn on_event(&self, _event: RealizeEvent) {}

    fn wants_detailed_events(&self) -> bool {
        false
    }
}
