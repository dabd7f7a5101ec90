//! Workspace layout
//!
//! A camp workspace is a directory holding the model, the template tree and
//! the configurations produced by the solver:
//!
//! ```text
//! <dir>/camp.yml
//! <dir>/template/...
//! <dir>/out/config_1.yml      solver output
//! <dir>/out/config_1/...      realized artifacts
//! ```

use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::domain::ports::FileSystem;
use crate::error::{CampError, CampResult};

use super::realize::configuration_directory;

/// Resolved paths of one workspace
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Workspace {
    root: PathBuf,
    model: PathBuf,
    output: PathBuf,
}

impl Workspace {
    /// Layout of `root` as described by the tool configuration
    pub fn new(root: impl Into<PathBuf>, config: &Config) -> Self {
        let root = root.into();
        Self {
            model: root.join(&config.paths.model),
            output: root.join(&config.paths.output),
            root,
        }
    }

    /// Directory holding `template/`
    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn model(&self) -> &Path {
        &self.model
    }

    pub fn output(&self) -> &Path {
        &self.output
    }

    /// Artifact tree of configuration `index`
    pub fn destination(&self, index: usize) -> PathBuf {
        configuration_directory(&self.output, index)
    }

    /// The `config_<n>.yml` files of the output directory, ordered by `n`
    pub fn configuration_files<F: FileSystem + ?Sized>(
        &self,
        file_system: &F,
    ) -> CampResult<Vec<(usize, PathBuf)>> {
        if !file_system.is_dir(&self.output) {
            return Err(CampError::DirectoryNotFound {
                path: self.output.clone(),
            });
        }

        let mut files: Vec<(usize, PathBuf)> = file_system
            .list_dir(&self.output)?
            .into_iter()
            .filter(|path| !file_system.is_dir(path))
            .filter_map(|path| {
                let name = path.file_name()?.to_str()?;
                let index = configuration_index(name)?;
                Some((index, path))
            })
            .collect();
        files.sort();
        Ok(files)
    }
}

/// `config_12.yml` is configuration 12
fn configuration_index(file_name: &str) -> Option<usize> {
    let stem = file_name.strip_prefix("config_")?;
    let number = stem
        .strip_suffix(".yml")
        .or_else(|| stem.strip_suffix(".yaml"))?;
    number.parse().ok()
}
