pub mod check;
pub mod realize;
pub mod stacks;

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use camp::config::Config;
use camp::infrastructure::LocalFs;
use camp::{load_configuration_from_path, load_model_from_path, Configuration, Model, Workspace};

/// Workspace opened by a command: tool configuration loaded, logging installed
pub struct Session {
    pub config: Config,
    pub workspace: Workspace,
}

impl Session {
    pub fn open(directory: &Path, json: bool, verbose: u8) -> Result<Self> {
        let (mut config, warnings) = Config::load_or_default(Some(directory))?;
        if let Some(level) = verbosity_level(verbose) {
            config.logging.level = level.to_string();
        }
        camp::logging::init_from_config(&config.logging);

        for warning in &warnings {
            if json {
                let _ = emit(serde_json::json!({
                    "event": "config_warning",
                    "key": warning.key,
                    "file": warning.file.display().to_string(),
                    "line": warning.line,
                    "suggestion": warning.suggestion,
                }));
            } else {
                eprintln!("Warning: {}", warning);
            }
        }

        let workspace = Workspace::new(directory, &config);
        Ok(Self { config, workspace })
    }

    pub fn file_system(&self) -> LocalFs {
        LocalFs::new().with_atomic_writes(self.config.realize.atomic_writes)
    }

    pub fn load_model(&self) -> Result<Model> {
        let path = self.workspace.model();
        load_model_from_path(path).with_context(|| format!("loading model {}", path.display()))
    }

    /// Configuration files of the output directory, ordered by number
    pub fn configuration_files(&self) -> Result<Vec<(usize, PathBuf)>> {
        Ok(self.workspace.configuration_files(&self.file_system())?)
    }

    pub fn load_configuration<'m>(&self, model: &'m Model, path: &Path) -> Result<Configuration<'m>> {
        load_configuration_from_path(model, path)
            .with_context(|| format!("loading configuration {}", path.display()))
    }
}

/// `-v` is info, `-vv` debug, `-vvv` and more trace
fn verbosity_level(verbose: u8) -> Option<&'static str> {
    match verbose {
        0 => None,
        1 => Some("info"),
        2 => Some("debug"),
        _ => Some("trace"),
    }
}

/// Write a single NDJSON event (one JSON object per line) to stdout.
pub fn emit(event: serde_json::Value) -> io::Result<()> {
    let mut out = io::stdout().lock();
    writeln!(out, "{}", event)?;
    out.flush()
}
