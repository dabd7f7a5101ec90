//! Model aggregate - every component, the goals and the raw constraints

use std::collections::{BTreeMap, BTreeSet};

use crate::domain::value_objects::{Feature, Goals, Service};

use super::{Component, ResolveError, Resolved};

/// A deployable architecture.
///
/// Components are unique by name. Constraints are kept as written; they only
/// matter to the external solver.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Model {
    components: BTreeMap<String, Component>,
    goals: Goals,
    constraints: Vec<String>,
}

impl Model {
    /// Build a model; a later component replaces an earlier one of the same name.
    pub fn new(components: Vec<Component>, goals: Goals) -> Self {
        Self {
            components: components
                .into_iter()
                .map(|c| (c.name().to_string(), c))
                .collect(),
            goals,
            constraints: Vec::new(),
        }
    }

    pub fn with_constraints(mut self, constraints: Vec<String>) -> Self {
        self.constraints = constraints;
        self
    }

    /// Components ordered by name
    pub fn components(&self) -> impl Iterator<Item = &Component> {
        self.components.values()
    }

    pub fn component_named(&self, name: &str) -> Option<&Component> {
        self.components.get(name)
    }

    pub fn goals(&self) -> &Goals {
        &self.goals
    }

    pub fn constraints(&self) -> &[String] {
        &self.constraints
    }

    /// Every service mentioned by a component or the goals, de-duplicated and sorted.
    pub fn services(&self) -> Vec<Service> {
        self.all_services()
            .cloned()
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Every feature mentioned by a component or the goals, de-duplicated and sorted.
    pub fn features(&self) -> Vec<Feature> {
        self.all_features()
            .cloned()
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    pub fn contains_service(&self, service: &Service) -> bool {
        self.all_services().any(|s| s == service)
    }

    pub fn contains_feature(&self, feature: &Feature) -> bool {
        self.all_features().any(|f| f == feature)
    }

    /// Look `identifier` up among components, then services, then features.
    pub fn resolve(&self, identifier: &str) -> Result<Resolved<'_>, ResolveError> {
        if let Some(component) = self.components.get(identifier) {
            return Ok(Resolved::Component(component));
        }
        if let Some(service) = self.all_services().find(|s| s.name() == identifier) {
            return Ok(Resolved::Service(service));
        }
        if let Some(feature) = self.all_features().find(|f| f.name() == identifier) {
            return Ok(Resolved::Feature(feature));
        }
        Err(ResolveError::UnknownIdentifier {
            identifier: identifier.to_string(),
        })
    }

    /// Resolve `identifier`, requiring a component.
    pub fn resolve_component(&self, identifier: &str) -> Result<&Component, ResolveError> {
        self.resolve(identifier)?
            .as_component()
            .ok_or_else(|| ResolveError::NotAComponent {
                identifier: identifier.to_string(),
            })
    }

    fn all_services(&self) -> impl Iterator<Item = &Service> {
        self.components
            .values()
            .flat_map(|c| c.provided_services().iter().chain(c.required_services()))
            .chain(self.goals.services())
    }

    fn all_features(&self) -> impl Iterator<Item = &Feature> {
        self.components
            .values()
            .flat_map(|c| c.provided_features().iter().chain(c.required_features()))
            .chain(self.goals.features())
    }
}
