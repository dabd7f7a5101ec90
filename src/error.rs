//! Error types for CAMP
//!
//! Library errors are `thiserror` enums. Model loading reports every problem
//! at once (`InvalidModel`); everything else fails on the first problem.

use std::path::PathBuf;
use thiserror::Error;

use crate::application::realize::RealizeError;
use crate::domain::entities::ResolveError;
use crate::domain::ports::FsError;
use crate::domain::value_objects::LoadWarning;

/// Result type alias for CAMP operations
pub type CampResult<T> = Result<T, CampError>;

/// Main error type for CAMP operations
#[derive(Error, Debug)]
pub enum CampError {
    /// The model document has structural problems; all of them are listed
    #[error("invalid model: {} problem(s) found\n{}", .warnings.len(), render_warnings(.warnings))]
    InvalidModel { warnings: Vec<LoadWarning> },

    /// Configuration document does not have the expected shape
    #[error("malformed configuration at '{path}': expected {expected}")]
    MalformedConfiguration { path: String, expected: String },

    /// A name in a configuration does not resolve
    #[error(transparent)]
    Resolve(#[from] ResolveError),

    /// Realization aborted
    #[error(transparent)]
    Realize(#[from] RealizeError),

    /// File system access through the FileSystem port failed
    #[error(transparent)]
    Fs(#[from] FsError),

    /// Tool configuration (camp.toml) could not be parsed
    #[error("invalid tool configuration in {file}: {message}")]
    InvalidToolConfig { file: PathBuf, message: String },

    /// IO error
    #[error("IO error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// YAML parsing error
    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),

    /// Directory not found
    #[error("directory not found: {path}")]
    DirectoryNotFound { path: PathBuf },
}

impl CampError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        CampError::Io {
            path: path.into(),
            source,
        }
    }

    /// Every warning behind an `InvalidModel` error, empty otherwise
    pub fn warnings(&self) -> &[LoadWarning] {
        match self {
            CampError::InvalidModel { warnings } => warnings,
            _ => &[],
        }
    }
}

fn render_warnings(warnings: &[LoadWarning]) -> String {
    warnings
        .iter()
        .map(|w| format!("  - {}", w))
        .collect::<Vec<_>>()
        .join("\n")
}
