//! JSON Event Sink
//!
//! Outputs realize events as NDJSON for CI/automation consumption.

use crate::domain::ports::{RealizeEvent, RealizeEventSink};
use std::io::{self, Write};
use std::sync::Mutex;

/// Event sink that outputs NDJSON events to stdout
pub struct JsonEventSink {
    writer: Mutex<Box<dyn Write + Send>>,
}

impl JsonEventSink {
    /// Create a new JSON event sink writing to stdout
    pub fn stdout() -> Self {
        Self {
            writer: Mutex::new(Box::new(io::stdout())),
        }
    }

    /// Create a JSON event sink writing to a custom writer (for testing)
    pub fn with_writer<W: Write + Send + 'static>(writer: W) -> Self {
        Self {
            writer: Mutex::new(Box::new(writer)),
        }
    }

    fn write_event(&self, event: serde_json::Value) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", event);
            let _ = writer.flush();
        }
    }
}

impl RealizeEventSink for JsonEventSink {
    fn on_event(&self, event: RealizeEvent) {
        let json = match event {
            RealizeEvent::Started {
                configuration,
                destination,
                instance_count,
            } => {
                serde_json::json!({
                    "event": "start",
                    "command": "realize",
                    "configuration": configuration,
                    "destination": destination.display().to_string(),
                    "instance_count": instance_count,
                })
            }

            RealizeEvent::InstanceRealized {
                configuration,
                instance,
                files,
            } => {
                serde_json::json!({
                    "event": "instance",
                    "command": "realize",
                    "configuration": configuration,
                    "instance": instance,
                    "files": files,
                })
            }

            RealizeEvent::FileWritten {
                configuration,
                path,
                hash,
            } => {
                serde_json::json!({
                    "event": "item_written",
                    "command": "realize",
                    "configuration": configuration,
                    "path": path.display().to_string(),
                    "hash": hash.to_string(),
                })
            }

            RealizeEvent::Completed {
                configuration,
                files_written,
                substitutions,
            } => {
                serde_json::json!({
                    "event": "complete",
                    "command": "realize",
                    "status": "success",
                    "configuration": configuration,
                    "written": files_written,
                    "substitutions": substitutions,
                })
            }

            RealizeEvent::Failed {
                configuration,
                error,
            } => {
                serde_json::json!({
                    "event": "complete",
                    "command": "realize",
                    "status": "error",
                    "configuration": configuration,
                    "error": error,
                })
            }
        };

        self.write_event(json);
    }
}
