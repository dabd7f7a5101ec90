//! YAML codec for models and configurations
//!
//! Two distinct error-handling modes live here:
//!
//! - **aggregate-report** (model documents): every problem is recorded as a
//!   [`LoadWarning`](crate::domain::value_objects::LoadWarning) and the load
//!   fails once, at the end, listing all of them;
//! - **first-error** (configuration documents): the first shape problem or
//!   unknown name aborts the load.

mod configuration;
mod model;

pub use configuration::{load_configuration, load_configuration_from_path, save_configuration};
pub use model::{load_model, load_model_from_path};

use serde_yaml_ng::Value as YamlValue;

/// The labels that are fixed in the documents
pub(crate) struct Keys;

impl Keys {
    pub const COMPONENTS: &'static str = "components";
    pub const CONFIGURATION: &'static str = "configuration";
    pub const CONSTRAINTS: &'static str = "constraints";
    pub const COVERAGE: &'static str = "coverage";
    pub const DEFINITION: &'static str = "definition";
    pub const DOCKER: &'static str = "docker";
    pub const FEATURE_PROVIDER: &'static str = "feature_provider";
    pub const FILE: &'static str = "file";
    pub const GOALS: &'static str = "goals";
    pub const IMAGE: &'static str = "image";
    pub const IMPLEMENTATION: &'static str = "implementation";
    pub const INSTANCES: &'static str = "instances";
    pub const PATTERN: &'static str = "pattern";
    pub const PROVIDES_FEATURES: &'static str = "provides_features";
    pub const PROVIDES_SERVICES: &'static str = "provides_services";
    pub const RANGE: &'static str = "range";
    pub const REALIZATION: &'static str = "realization";
    pub const REPLACEMENTS: &'static str = "replacements";
    pub const REQUIRES_FEATURES: &'static str = "requires_features";
    pub const REQUIRES_SERVICES: &'static str = "requires_services";
    pub const RUNNING: &'static str = "running";
    pub const SERVICE_PROVIDERS: &'static str = "service_providers";
    pub const TARGETS: &'static str = "targets";
    pub const TYPE: &'static str = "type";
    pub const VALUES: &'static str = "values";
    pub const VARIABLES: &'static str = "variables";
}

/// Name of a document node's shape, as reported in warnings
pub(crate) fn type_name(value: &YamlValue) -> &'static str {
    match value {
        YamlValue::Null => "null",
        YamlValue::Bool(_) => "boolean",
        YamlValue::Number(n) if n.is_i64() || n.is_u64() => "integer",
        YamlValue::Number(_) => "float",
        YamlValue::String(_) => "string",
        YamlValue::Sequence(_) => "sequence",
        YamlValue::Mapping(_) => "mapping",
        YamlValue::Tagged(_) => "tagged value",
    }
}

/// Identifier text of a scalar node.
///
/// Strings are taken as they are. Other scalars are prefixed with `_` so that a
/// YAML number or boolean used as a name (`42`) cannot clash with the syntax
/// (`_42`). Non-scalars have no identifier.
pub(crate) fn escape(value: &YamlValue) -> Option<String> {
    match value {
        YamlValue::String(s) => Some(s.clone()),
        YamlValue::Number(n) => Some(format!("_{}", n)),
        YamlValue::Bool(b) => Some(format!("_{}", b)),
        YamlValue::Null => Some("_None".to_string()),
        _ => None,
    }
}
