//! Builder - one configuration into one artifact tree
//!
//! The build runs as a configuration visitor:
//!
//! 1. `visit_configuration` copies every shared template entry (anything at the
//!    top of `template/` that is not a component directory) to the destination.
//! 2. `visit_instance` copies `template/<component>/` to `images/<instance>/`.
//! 3. `visit_substitution` rewrites the targets of each substitution.
//!
//! Instances are visited in arena order, so rewrites of a shared file
//! accumulate in that order.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use crate::domain::entities::{Configuration, Instance, Variable};
use crate::domain::ports::{FileSystem, NoopEventSink, RealizeEvent, RealizeEventSink};
use crate::domain::value_objects::{ContentHash, Substitution, Value};
use crate::domain::visitor::{walk_configuration, ConfigurationVisitor};
use crate::infrastructure::fs::LocalFs;

use super::error::RealizeError;
use super::result::RealizationReport;

/// Directory of the source tree holding the templates
pub const TEMPLATE_DIRECTORY: &str = "template";

/// Directory of the artifact tree holding one sub-directory per instance
pub const IMAGES_DIRECTORY: &str = "images";

/// Build `configuration` from `source/template/` into `destination` on the local disk.
pub fn build(
    configuration: &Configuration<'_>,
    source: &Path,
    destination: &Path,
) -> Result<RealizationReport, RealizeError> {
    Builder::new(&LocalFs::new(), source, destination).build(configuration)
}

/// Materializes one configuration.
pub struct Builder<'a, F: FileSystem + ?Sized> {
    file_system: &'a F,
    template: PathBuf,
    destination: PathBuf,
    events: &'a dyn RealizeEventSink,
    configuration_index: usize,
    components: BTreeSet<String>,
    report: RealizationReport,
}

impl<'a, F: FileSystem + ?Sized> Builder<'a, F> {
    pub fn new(file_system: &'a F, source: &Path, destination: &Path) -> Self {
        Self {
            file_system,
            template: source.join(TEMPLATE_DIRECTORY),
            destination: destination.to_path_buf(),
            events: &NoopEventSink,
            configuration_index: 1,
            components: BTreeSet::new(),
            report: RealizationReport::new(destination),
        }
    }

    /// Builder: report progress to `events`, tagged with the configuration number
    pub fn with_events(mut self, events: &'a dyn RealizeEventSink, configuration: usize) -> Self {
        self.events = events;
        self.configuration_index = configuration;
        self
    }

    /// Run the build. Stops at the first error, leaving what was written so far.
    pub fn build(
        mut self,
        configuration: &Configuration<'_>,
    ) -> Result<RealizationReport, RealizeError> {
        walk_configuration(&mut self, configuration)?;
        tracing::info!(
            destination = %self.destination.display(),
            files = self.report.file_count(),
            substitutions = self.report.substitutions,
            "configuration realized"
        );
        Ok(self.report)
    }

    fn image_directory(&self, instance: &str) -> PathBuf {
        self.destination.join(IMAGES_DIRECTORY).join(instance)
    }

    /// Where a substitution target lives for `instance`, and whether it is shared.
    ///
    /// `server/Dockerfile` of a `server` instance is under its image directory;
    /// anything without the component prefix is at the destination root.
    fn locate(&self, instance: &Instance<'_>, target: &str) -> (PathBuf, bool) {
        let component = instance.definition().name();
        match target
            .strip_prefix(component)
            .and_then(|rest| rest.strip_prefix('/'))
        {
            Some(rest) => (self.image_directory(instance.name()).join(rest), false),
            None => (self.destination.join(target), true),
        }
    }

    fn copy_shared(&mut self) -> Result<(), RealizeError> {
        let fs = self.file_system;
        for entry in fs.list_dir(&self.template)? {
            let Some(name) = entry.file_name().map(|n| n.to_string_lossy().into_owned()) else {
                continue;
            };
            let target = self.destination.join(&name);
            if !fs.is_dir(&entry) {
                self.copy_file(&entry, &target)?;
            } else if !self.components.contains(&name) {
                self.copy_tree(&entry, &target)?;
            }
        }
        Ok(())
    }

    fn copy_tree(&mut self, from: &Path, to: &Path) -> Result<usize, RealizeError> {
        let files = self.file_system.walk_files(from)?;
        for relative in &files {
            self.copy_file(&from.join(relative), &to.join(relative))?;
        }
        Ok(files.len())
    }

    fn copy_file(&mut self, from: &Path, to: &Path) -> Result<(), RealizeError> {
        let content = self.file_system.read_bytes(from)?;
        self.write(to, &content)
    }

    fn write(&mut self, path: &Path, content: &[u8]) -> Result<(), RealizeError> {
        self.file_system.write(path, content)?;

        let relative = path
            .strip_prefix(&self.destination)
            .unwrap_or(path)
            .to_path_buf();
        tracing::debug!(path = %relative.display(), "file written");
        if self.events.wants_detailed_events() {
            self.events.on_event(RealizeEvent::FileWritten {
                configuration: self.configuration_index,
                path: relative.clone(),
                hash: ContentHash::of(content),
            });
        }
        self.report.written.insert(relative);
        Ok(())
    }
}

impl<'a, 'm, F: FileSystem + ?Sized> ConfigurationVisitor<'m> for Builder<'a, F> {
    type Error = RealizeError;

    fn visit_configuration(&mut self, configuration: &Configuration<'m>) -> Result<bool, RealizeError> {
        if !self.file_system.is_dir(&self.template) {
            return Err(RealizeError::TemplateNotFound {
                path: self.template.clone(),
            });
        }
        self.file_system.create_dir_all(&self.destination)?;

        self.components = configuration
            .model()
            .components()
            .map(|c| c.name().to_string())
            .collect();
        self.copy_shared()?;
        Ok(true)
    }

    fn visit_instance(&mut self, instance: &Instance<'m>) -> Result<bool, RealizeError> {
        let source = self.template.join(instance.definition().name());
        if !self.file_system.is_dir(&source) {
            tracing::warn!(
                instance = instance.name(),
                component = instance.definition().name(),
                "no template directory, image skipped"
            );
            return Ok(true);
        }

        let files = self.copy_tree(&source, &self.image_directory(instance.name()))?;
        self.report.instances.push(instance.name().to_string());
        self.events.on_event(RealizeEvent::InstanceRealized {
            configuration: self.configuration_index,
            instance: instance.name().to_string(),
            files,
        });
        Ok(true)
    }

    fn visit_substitution(
        &mut self,
        instance: &Instance<'m>,
        variable: &'m Variable,
        value: &Value,
        substitution: &'m Substitution,
    ) -> Result<(), RealizeError> {
        let index = variable
            .index_of(value)
            .ok_or_else(|| RealizeError::UnknownValue {
                instance: instance.name().to_string(),
                variable: variable.name().to_string(),
                value: value.to_string(),
            })?;
        if substitution.replacement_for(index).is_none() {
            return Err(RealizeError::MissingReplacement {
                instance: instance.name().to_string(),
                variable: variable.name().to_string(),
                index,
                available: substitution.replacements().len(),
            });
        }

        for target in substitution.targets() {
            let (path, shared) = self.locate(instance, target);
            if !self.file_system.exists(&path) || self.file_system.is_dir(&path) {
                return Err(RealizeError::TargetNotFound {
                    instance: instance.name().to_string(),
                    target: target.clone(),
                    path,
                });
            }

            let content = self.file_system.read(&path)?;
            let updated = substitution.apply(&content, index).unwrap_or(content);
            self.write(&path, updated.as_bytes())?;

            self.report.substitutions += 1;
            if shared {
                self.report.shared.insert(PathBuf::from(target));
            }
        }
        Ok(())
    }
}
