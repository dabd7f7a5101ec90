//! Tool configuration for camp
//!
//! Settings are resolved in this order, first match wins:
//! 1. Environment variables (CAMP_*)
//! 2. Workspace config (`<dir>/camp.toml`)
//! 3. User config (`<config dir>/camp/config.toml`)
//! 4. Built-in defaults

mod loader;
mod types;

pub use crate::domain::value_objects::ConfigWarning;

pub use loader::{PROJECT_CONFIG_FILE, USER_CONFIG_FILE};
pub use types::{Config, LogFormat, LoggingConfig, PathsConfig, RealizeConfig};
