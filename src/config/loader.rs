//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{CampError, CampResult};

pub use crate::domain::value_objects::ConfigWarning;

use super::types::{Config, LogFormat};

/// Workspace configuration file name
pub const PROJECT_CONFIG_FILE: &str = "camp.toml";

/// User configuration file, relative to the platform config directory
pub const USER_CONFIG_FILE: &str = "camp/config.toml";

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> CampResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path).map_err(|e| CampError::io(path, e))?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| CampError::InvalidToolConfig {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .iter()
        .map(|unknown| {
            let (section, key) = unknown.rsplit_once('.').unwrap_or(("", unknown.as_str()));
            ConfigWarning {
                key: key.to_string(),
                file: path.to_path_buf(),
                line: find_line_number(&content, key),
                suggestion: suggest_key(section, key),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Load from the workspace config, the user config, or defaults.
///
/// Unlike a missing file, a present but unparsable file is an error.
pub fn load_or_default(workspace: Option<&Path>) -> CampResult<(Config, Vec<ConfigWarning>)> {
    let candidates = workspace
        .map(|root| root.join(PROJECT_CONFIG_FILE))
        .into_iter()
        .chain(user_config_path());

    for candidate in candidates {
        if candidate.is_file() {
            tracing::debug!(path = %candidate.display(), "tool configuration found");
            let (config, warnings) = load_with_warnings(&candidate)?;
            return Ok((with_env_overrides(config), warnings));
        }
    }

    Ok((with_env_overrides(Config::default()), Vec::new()))
}

/// Apply environment variable overrides (CAMP_* prefix)
pub fn with_env_overrides(config: Config) -> Config {
    apply_overrides(config, |name| std::env::var(name).ok())
}

pub(super) fn apply_overrides(
    mut config: Config,
    lookup: impl Fn(&str) -> Option<String>,
) -> Config {
    // CAMP_LOG_LEVEL
    if let Some(level) = lookup("CAMP_LOG_LEVEL") {
        config.logging.level = level.to_lowercase();
    }

    // CAMP_LOG_FORMAT
    if let Some(format) = lookup("CAMP_LOG_FORMAT") {
        config.logging.format = match format.to_lowercase().as_str() {
            "json" => LogFormat::Json,
            _ => LogFormat::Text,
        };
    }

    // CAMP_ATOMIC_WRITES
    if let Some(val) = lookup("CAMP_ATOMIC_WRITES") {
        config.realize.atomic_writes = val.to_lowercase() != "false" && val != "0";
    }

    // CAMP_MODEL
    if let Some(model) = lookup("CAMP_MODEL") {
        config.paths.model = model;
    }

    config
}

fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(USER_CONFIG_FILE))
}

/// Keys of each section; the unnamed section lists the tables
const KNOWN_KEYS: &[(&str, &[&str])] = &[
    ("", &["paths", "realize", "logging"]),
    ("paths", &["model", "output"]),
    ("realize", &["atomic_writes"]),
    ("logging", &["level", "format"]),
];

/// First line declaring `key`, as `[..key]` or as `key = ...`
pub(super) fn find_line_number(content: &str, key: &str) -> Option<usize> {
    let declares = |line: &str| {
        let line = line.trim();
        match line.strip_prefix('[').and_then(|l| l.strip_suffix(']')) {
            Some(table) => table.rsplit('.').next().map(str::trim) == Some(key),
            None => line
                .strip_prefix(key)
                .is_some_and(|rest| rest.trim_start().starts_with('=')),
        }
    };
    content.lines().position(declares).map(|index| index + 1)
}

/// Closest known key of `section`, if it is at most two edits away
pub(super) fn suggest_key(section: &str, unknown: &str) -> Option<String> {
    let (_, keys) = KNOWN_KEYS.iter().find(|(name, _)| *name == section)?;
    keys.iter()
        .map(|key| (edit_distance(unknown, key), *key))
        .filter(|(distance, _)| *distance <= 2)
        .min()
        .map(|(_, key)| key.to_string())
}

/// Levenshtein distance over chars, one row at a time
fn edit_distance(a: &str, b: &str) -> usize {
    let b: Vec<char> = b.chars().collect();
    let mut row: Vec<usize> = (0..=b.len()).collect();

    for (i, ca) in a.chars().enumerate() {
        let mut diagonal = row[0];
        row[0] = i + 1;
        for (j, cb) in b.iter().enumerate() {
            let substitution = diagonal + usize::from(ca != *cb);
            diagonal = row[j + 1];
            row[j + 1] = substitution.min(row[j] + 1).min(diagonal + 1);
        }
    }
    row[b.len()]
}
