//! Logging initialization
//!
//! Library code only emits `tracing` events; the binary decides where they go
//! by calling [`init`] once at startup.

use std::sync::Once;
use tracing_subscriber::EnvFilter;

use crate::config::{LogFormat, LoggingConfig};

/// Environment variable holding a full filter directive, e.g. `camp=trace`
pub const LOG_ENV: &str = "CAMP_LOG";

/// Logging profile
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Profile {
    /// Human-readable output on stderr
    Development,
    /// JSON structured output on stderr
    Production,
    /// No output; events are discarded
    Silent,
}

impl From<LogFormat> for Profile {
    fn from(format: LogFormat) -> Self {
        match format {
            LogFormat::Text => Profile::Development,
            LogFormat::Json => Profile::Production,
        }
    }
}

static INIT_ONCE: Once = Once::new();

/// Install the global subscriber. Later calls are no-ops.
///
/// The filter comes from `CAMP_LOG`, then `RUST_LOG`, then `default_level`.
pub fn init(profile: Profile, default_level: &str) {
    INIT_ONCE.call_once(|| {
        let filter = filter(default_level);
        // An already installed subscriber (e.g. from a test harness) wins.
        let _ = match profile {
            Profile::Development => tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .with_target(false)
                .try_init(),
            Profile::Production => tracing_subscriber::fmt()
                .json()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .try_init(),
            Profile::Silent => tracing_subscriber::fmt()
                .with_env_filter(EnvFilter::new("off"))
                .try_init(),
        };
    });
}

/// Install the subscriber described by the tool configuration
pub fn init_from_config(config: &LoggingConfig) {
    init(Profile::from(config.format), &config.level);
}

fn filter(default_level: &str) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new(directive(default_level)))
}

/// `warn` becomes `camp=warn`; full directives are kept as written
fn directive(level: &str) -> String {
    if level.contains('=') || level.contains(',') {
        level.to_string()
    } else {
        format!("camp={}", level)
    }
}
