//! Instance entity - one deployment of a component inside a configuration

use crate::domain::value_objects::Value;

use super::{Component, Variable};

/// Stable handle of an instance inside its [`Configuration`](super::Configuration).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct InstanceId(pub(crate) usize);

/// A concrete deployment of one component.
///
/// Provider links are handles into the owning configuration and are filled in
/// by its linking pass, once every instance exists.
#[derive(Debug, Clone)]
pub struct Instance<'m> {
    name: String,
    definition: &'m Component,
    feature_provider: Option<InstanceId>,
    service_providers: Vec<InstanceId>,
    configuration: Vec<(&'m Variable, Value)>,
}

impl<'m> Instance<'m> {
    pub fn new(name: impl Into<String>, definition: &'m Component) -> Self {
        Self {
            name: name.into(),
            definition,
            feature_provider: None,
            service_providers: Vec::new(),
            configuration: Vec::new(),
        }
    }

    /// Builder: the chosen value of each configured variable
    pub fn with_configuration(mut self, configuration: Vec<(&'m Variable, Value)>) -> Self {
        self.configuration = configuration;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn definition(&self) -> &'m Component {
        self.definition
    }

    pub fn feature_provider(&self) -> Option<InstanceId> {
        self.feature_provider
    }

    pub fn service_providers(&self) -> &[InstanceId] {
        &self.service_providers
    }

    pub fn configuration(&self) -> &[(&'m Variable, Value)] {
        &self.configuration
    }

    /// The value chosen for `variable`, if this instance configures it
    pub fn value_of(&self, variable: &str) -> Option<&Value> {
        self.configuration
            .iter()
            .find(|(v, _)| v.name() == variable)
            .map(|(_, value)| value)
    }

    pub(crate) fn set_feature_provider(&mut self, provider: Option<InstanceId>) {
        self.feature_provider = provider;
    }

    pub(crate) fn set_service_providers(&mut self, providers: Vec<InstanceId>) {
        self.service_providers = providers;
    }
}
