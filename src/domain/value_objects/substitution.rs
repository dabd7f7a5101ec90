//! Substitution value object
//!
//! A substitution says how a chosen variable value shows up in template files:
//! every occurrence of `pattern` in each target is replaced by the replacement
//! whose position matches the value.

use std::collections::BTreeSet;
use std::hash::{Hash, Hasher};

/// Why a substitution could not be built
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidSubstitution {
    #[error("a substitution needs at least one target")]
    NoTargets,

    #[error("a substitution needs at least one replacement")]
    NoReplacements,
}

/// Text replacement rule attached to a variable.
///
/// Targets are paths relative to the template tree. A target starting with the
/// component name (`server/Dockerfile`) lives in the instance image directory;
/// any other target (`docker-compose.yml`) is a shared file.
#[derive(Debug, Clone)]
pub struct Substitution {
    targets: Vec<String>,
    pattern: String,
    replacements: Vec<String>,
}

impl Substitution {
    pub fn new(
        targets: Vec<String>,
        pattern: impl Into<String>,
        replacements: Vec<String>,
    ) -> Result<Self, InvalidSubstitution> {
        if targets.is_empty() {
            return Err(InvalidSubstitution::NoTargets);
        }
        if replacements.is_empty() {
            return Err(InvalidSubstitution::NoReplacements);
        }
        Ok(Self {
            targets,
            pattern: pattern.into(),
            replacements,
        })
    }

    pub fn targets(&self) -> &[String] {
        &self.targets
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    pub fn replacements(&self) -> &[String] {
        &self.replacements
    }

    /// Replacement selected by a value index, if the rule defines one
    pub fn replacement_for(&self, index: usize) -> Option<&str> {
        self.replacements.get(index).map(String::as_str)
    }

    /// Apply the rule to some content, replacing every occurrence of the pattern.
    ///
    /// Content without the pattern comes back unchanged.
    pub fn apply(&self, content: &str, index: usize) -> Option<String> {
        let replacement = self.replacement_for(index)?;
        Some(content.replace(&self.pattern, replacement))
    }

    fn target_set(&self) -> BTreeSet<&str> {
        self.targets.iter().map(String::as_str).collect()
    }
}

// Target order is irrelevant; pattern and replacement order are not.
impl PartialEq for Substitution {
    fn eq(&self, other: &Self) -> bool {
        self.target_set() == other.target_set()
            && self.pattern == other.pattern
            && self.replacements == other.replacements
    }
}

impl Eq for Substitution {}

impl Hash for Substitution {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.target_set().hash(state);
        self.pattern.hash(state);
        self.replacements.hash(state);
    }
}
