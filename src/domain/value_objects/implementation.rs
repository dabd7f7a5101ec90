//! Implementation value object - how a component becomes a container image

use std::fmt;

/// The single way a component is implemented.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Implementation {
    /// Built from a Dockerfile, path relative to the template tree
    DockerFile(String),
    /// Pulled as an existing image reference
    DockerImage(String),
}

impl Implementation {
    /// Returns true if the component is built from a Dockerfile
    pub fn is_built(&self) -> bool {
        matches!(self, Implementation::DockerFile(_))
    }
}

impl fmt::Display for Implementation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Implementation::DockerFile(path) => write!(f, "DockerFile('{}')", path),
            Implementation::DockerImage(image) => write!(f, "DockerImage('{}')", image),
        }
    }
}
