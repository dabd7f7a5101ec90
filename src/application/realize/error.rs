//! Realization errors

use std::path::PathBuf;

use crate::domain::ports::FsError;

/// A fatal problem met while building an artifact tree.
///
/// The build stops at the first one; files written before it stay on disk.
#[derive(Debug, thiserror::Error)]
pub enum RealizeError {
    /// The source directory has no `template/` tree
    #[error("template directory not found: {}", .path.display())]
    TemplateNotFound { path: PathBuf },

    /// A substitution target does not exist in the artifact tree
    #[error("substitution target '{target}' of instance '{instance}' not found at {}", .path.display())]
    TargetNotFound {
        instance: String,
        target: String,
        path: PathBuf,
    },

    /// A configured value has no position in its variable domain
    #[error("value '{value}' of '{instance}.{variable}' is not in the variable domain")]
    UnknownValue {
        instance: String,
        variable: String,
        value: String,
    },

    /// The value selects a replacement the substitution does not have
    #[error("'{instance}.{variable}' selects replacement #{index} but only {available} exist")]
    MissingReplacement {
        instance: String,
        variable: String,
        index: usize,
        available: usize,
    },

    #[error(transparent)]
    Fs(#[from] FsError),
}
