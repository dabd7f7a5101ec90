//! Realization Result

use std::collections::BTreeSet;
use std::path::PathBuf;

/// What one build wrote
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RealizationReport {
    /// Root of the artifact tree
    pub destination: PathBuf,
    /// Instances whose image directory was populated, in realization order
    pub instances: Vec<String>,
    /// Every file written, relative to `destination`
    pub written: BTreeSet<PathBuf>,
    /// Shared files rewritten by at least one substitution
    pub shared: BTreeSet<PathBuf>,
    /// Substitutions applied, counted once per target file
    pub substitutions: usize,
}

impl RealizationReport {
    pub fn new(destination: impl Into<PathBuf>) -> Self {
        Self {
            destination: destination.into(),
            ..Self::default()
        }
    }

    pub fn file_count(&self) -> usize {
        self.written.len()
    }
}
