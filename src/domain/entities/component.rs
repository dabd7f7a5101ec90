//! Component entity - a reusable deployable unit

use crate::domain::value_objects::{Feature, Implementation, Service};

use super::Variable;

/// Definition of a deployable unit: its capabilities, variables and implementation.
#[derive(Debug, Clone, PartialEq)]
pub struct Component {
    name: String,
    provided_services: Vec<Service>,
    required_services: Vec<Service>,
    provided_features: Vec<Feature>,
    required_features: Vec<Feature>,
    /// Unique by name, declaration order kept
    variables: Vec<Variable>,
    implementation: Option<Implementation>,
}

impl Component {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            provided_services: Vec::new(),
            required_services: Vec::new(),
            provided_features: Vec::new(),
            required_features: Vec::new(),
            variables: Vec::new(),
            implementation: None,
        }
    }

    pub fn with_provided_services(mut self, services: Vec<Service>) -> Self {
        self.provided_services = services;
        self
    }

    pub fn with_required_services(mut self, services: Vec<Service>) -> Self {
        self.required_services = services;
        self
    }

    pub fn with_provided_features(mut self, features: Vec<Feature>) -> Self {
        self.provided_features = features;
        self
    }

    pub fn with_required_features(mut self, features: Vec<Feature>) -> Self {
        self.required_features = features;
        self
    }

    /// Builder: add a variable, replacing any previous one with the same name
    pub fn with_variable(mut self, variable: Variable) -> Self {
        match self
            .variables
            .iter_mut()
            .find(|v| v.name() == variable.name())
        {
            Some(existing) => *existing = variable,
            None => self.variables.push(variable),
        }
        self
    }

    pub fn with_variables(self, variables: Vec<Variable>) -> Self {
        variables
            .into_iter()
            .fold(self, |component, variable| component.with_variable(variable))
    }

    pub fn with_implementation(mut self, implementation: Implementation) -> Self {
        self.implementation = Some(implementation);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn provided_services(&self) -> &[Service] {
        &self.provided_services
    }

    pub fn required_services(&self) -> &[Service] {
        &self.required_services
    }

    pub fn provided_features(&self) -> &[Feature] {
        &self.provided_features
    }

    pub fn required_features(&self) -> &[Feature] {
        &self.required_features
    }

    pub fn variables(&self) -> &[Variable] {
        &self.variables
    }

    pub fn variable_named(&self, name: &str) -> Option<&Variable> {
        self.variables.iter().find(|v| v.name() == name)
    }

    pub fn implementation(&self) -> Option<&Implementation> {
        self.implementation.as_ref()
    }
}
