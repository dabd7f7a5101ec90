//! CAMP - configuration amplification
//!
//! A model describes the components of a deployable architecture, the
//! services and features they exchange and the variables that tune them.
//! An external solver turns the model into configurations; CAMP loads those
//! configurations and realizes each one into a tree of deployment artifacts
//! by copying and rewriting a template directory.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod logging;

// Re-exports for convenience
pub use application::{check_templates, RealizationReport, RealizeUseCase, Workspace};
pub use config::Config;
pub use domain::entities::{Component, Configuration, Instance, Model, Variable};
pub use domain::services::cover;
pub use domain::value_objects::{LoadWarning, Substitution, Value};
pub use error::{CampError, CampResult};
pub use infrastructure::{
    load_configuration, load_configuration_from_path, load_model, load_model_from_path,
    save_configuration, JsonEventSink, LocalFs,
};
