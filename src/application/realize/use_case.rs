//! Realize Use Case
//!
//! Builds every configuration produced for a model, configuration `i` (from 1)
//! into `<output>/config_<i>/`, in order, stopping at the first failure.

use std::path::{Path, PathBuf};

use crate::domain::entities::Configuration;
use crate::domain::ports::{FileSystem, NoopEventSink, RealizeEvent, RealizeEventSink};

use super::builder::Builder;
use super::error::RealizeError;
use super::result::RealizationReport;

/// Artifact tree of configuration number `index` under `output`
pub fn configuration_directory(output: &Path, index: usize) -> PathBuf {
    output.join(format!("config_{}", index))
}

/// Realize use case - parameterized by the file system it writes through
pub struct RealizeUseCase<FS: FileSystem> {
    file_system: FS,
}

impl<FS: FileSystem> RealizeUseCase<FS> {
    pub fn new(file_system: FS) -> Self {
        Self { file_system }
    }

    /// Build one configuration into `destination`
    pub fn build(
        &self,
        configuration: &Configuration<'_>,
        source: &Path,
        destination: &Path,
    ) -> Result<RealizationReport, RealizeError> {
        self.build_with_events(configuration, 1, source, destination, &NoopEventSink)
    }

    /// Build one configuration, reporting progress as configuration number `index`
    pub fn build_with_events(
        &self,
        configuration: &Configuration<'_>,
        index: usize,
        source: &Path,
        destination: &Path,
        events: &dyn RealizeEventSink,
    ) -> Result<RealizationReport, RealizeError> {
        events.on_event(RealizeEvent::Started {
            configuration: index,
            destination: destination.to_path_buf(),
            instance_count: configuration.instance_count(),
        });

        let result = Builder::new(&self.file_system, source, destination)
            .with_events(events, index)
            .build(configuration);

        match &result {
            Ok(report) => events.on_event(RealizeEvent::Completed {
                configuration: index,
                files_written: report.file_count(),
                substitutions: report.substitutions,
            }),
            Err(err) => {
                tracing::error!(configuration = index, error = %err, "realization failed");
                events.on_event(RealizeEvent::Failed {
                    configuration: index,
                    error: err.to_string(),
                });
            }
        }
        result
    }

    /// Build every configuration into `<output>/config_<i>/`
    pub fn realize_all(
        &self,
        configurations: &[Configuration<'_>],
        source: &Path,
        output: &Path,
    ) -> Result<Vec<RealizationReport>, RealizeError> {
        self.realize_all_with_events(configurations, source, output, &NoopEventSink)
    }

    pub fn realize_all_with_events(
        &self,
        configurations: &[Configuration<'_>],
        source: &Path,
        output: &Path,
        events: &dyn RealizeEventSink,
    ) -> Result<Vec<RealizationReport>, RealizeError> {
        configurations
            .iter()
            .enumerate()
            .map(|(offset, configuration)| {
                let index = offset + 1;
                let destination = configuration_directory(output, index);
                self.build_with_events(configuration, index, source, &destination, events)
            })
            .collect()
    }
}
