//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `codecs/` - Model and configuration documents (YAML)
//! - `events/` - Realize event sinks (NDJSON)
//! - `fs/` - File system implementations

pub mod codecs;
pub mod events;
pub mod fs;

pub use codecs::{
    load_configuration, load_configuration_from_path, load_model, load_model_from_path,
    save_configuration,
};
pub use events::JsonEventSink;
pub use fs::LocalFs;
