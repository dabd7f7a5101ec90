//! Model loading warnings
//!
//! The model loader never stops at the first problem. Each problem becomes a
//! `LoadWarning` and the whole document is rejected once parsing is over if
//! any warning was recorded.

use std::fmt;

/// Location of an entry in the model document, e.g.
/// `components.server.variables.memory`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct EntryPath(Vec<String>);

impl EntryPath {
    pub fn root() -> Self {
        Self(Vec::new())
    }

    /// A new path with one more segment
    pub fn child(&self, segment: impl Into<String>) -> Self {
        let mut segments = self.0.clone();
        segments.push(segment.into());
        Self(segments)
    }

    pub fn segments(&self) -> &[String] {
        &self.0
    }
}

impl fmt::Display for EntryPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.join("."))
    }
}

impl<S: Into<String>> FromIterator<S> for EntryPath {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

/// A structural problem found while loading a model document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadWarning {
    /// An entry the loader does not know about
    Ignored { path: EntryPath },
    /// An entry whose value has the wrong shape
    WrongType {
        expected: String,
        found: String,
        path: EntryPath,
    },
    /// An entry lacking required sub-entries; `candidates` names them
    Missing {
        candidates: Vec<String>,
        path: EntryPath,
    },
}

impl LoadWarning {
    pub fn path(&self) -> &EntryPath {
        match self {
            LoadWarning::Ignored { path }
            | LoadWarning::WrongType { path, .. }
            | LoadWarning::Missing { path, .. } => path,
        }
    }

    pub fn is_ignored(&self) -> bool {
        matches!(self, LoadWarning::Ignored { .. })
    }
}

impl fmt::Display for LoadWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadWarning::Ignored { path } => write!(f, "Entry '{}' ignored!", path),
            LoadWarning::WrongType {
                expected,
                found,
                path,
            } => write!(
                f,
                "Wrong type at '{}'! Expected '{}' but found '{}'.",
                path, expected, found
            ),
            LoadWarning::Missing { candidates, path } => {
                let names: Vec<String> = candidates.iter().map(|c| format!("'{}'", c)).collect();
                write!(
                    f,
                    "Incomplete entry '{}'! Possibly missing entries {}",
                    path,
                    names.join(", ")
                )
            }
        }
    }
}
