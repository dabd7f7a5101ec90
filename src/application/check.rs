//! Check Use Case
//!
//! Verifies that every file a model refers to exists in the template tree:
//! substitution targets and Dockerfiles. A realization would otherwise fail
//! half-way with `TargetNotFound`.

use std::fmt;
use std::path::{Path, PathBuf};

use crate::application::realize::TEMPLATE_DIRECTORY;
use crate::domain::entities::{Component, Model, Variable};
use crate::domain::ports::FileSystem;
use crate::domain::value_objects::{Implementation, Substitution};
use crate::domain::visitor::{walk_model, ModelVisitor};

/// A template file the model refers to but the tree lacks
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissingTemplate {
    /// Component making the reference
    pub component: String,
    /// Variable whose substitution makes the reference, if any
    pub variable: Option<String>,
    /// The reference as written in the model
    pub reference: String,
    /// Where it was looked for
    pub path: PathBuf,
}

impl fmt::Display for MissingTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.variable {
            Some(variable) => write!(
                f,
                "{}.{}: target '{}' not found at {}",
                self.component,
                variable,
                self.reference,
                self.path.display()
            ),
            None => write!(
                f,
                "{}: Dockerfile '{}' not found at {}",
                self.component,
                self.reference,
                self.path.display()
            ),
        }
    }
}

/// Result of the check operation
#[derive(Debug, Clone, Default)]
pub struct CheckResult {
    /// References checked
    pub checked: usize,
    /// References with no file behind them
    pub missing: Vec<MissingTemplate>,
}

impl CheckResult {
    pub fn is_success(&self) -> bool {
        self.missing.is_empty()
    }
}

/// Check every template reference of `model` against `source/template/`.
pub fn check_templates<F: FileSystem + ?Sized>(
    file_system: &F,
    model: &Model,
    source: &Path,
) -> CheckResult {
    let mut collector = TemplateReferences {
        file_system,
        template: source.join(TEMPLATE_DIRECTORY),
        result: CheckResult::default(),
    };
    walk_model(&mut collector, model);
    tracing::debug!(
        checked = collector.result.checked,
        missing = collector.result.missing.len(),
        "templates checked"
    );
    collector.result
}

struct TemplateReferences<'a, F: FileSystem + ?Sized> {
    file_system: &'a F,
    template: PathBuf,
    result: CheckResult,
}

impl<F: FileSystem + ?Sized> TemplateReferences<'_, F> {
    fn check(&mut self, component: &Component, variable: Option<&Variable>, reference: &str) {
        self.result.checked += 1;
        let path = self.template.join(reference);
        if !self.file_system.exists(&path) || self.file_system.is_dir(&path) {
            self.result.missing.push(MissingTemplate {
                component: component.name().to_string(),
                variable: variable.map(|v| v.name().to_string()),
                reference: reference.to_string(),
                path,
            });
        }
    }
}

impl<F: FileSystem + ?Sized> ModelVisitor for TemplateReferences<'_, F> {
    fn visit_implementation(&mut self, component: &Component, implementation: &Implementation) {
        if let Implementation::DockerFile(file) = implementation {
            self.check(component, None, file);
        }
    }

    fn visit_substitution(
        &mut self,
        component: &Component,
        variable: &Variable,
        substitution: &Substitution,
    ) {
        for target in substitution.targets() {
            self.check(component, Some(variable), target);
        }
    }
}
