//! Content Hash Value Object
//!
//! Digest of a realized artifact, reported for every file a build writes so
//! two builds of the same configuration can be compared file by file.

use std::fmt;

use sha2::{Digest, Sha256};

/// SHA-256 digest of a file's bytes, displayed as `sha256:<hex>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ContentHash([u8; 32]);

impl ContentHash {
    pub fn of(content: &[u8]) -> Self {
        Self(Sha256::digest(content).into())
    }
}

impl fmt::Display for ContentHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("sha256:")?;
        self.0.iter().try_for_each(|byte| write!(f, "{:02x}", byte))
    }
}
