//! Visitors over models and configurations.
//!
//! Each entity kind has its own `visit_*` method; the `walk_*` functions do the
//! recursion. All methods have default implementations, so a visitor only
//! overrides what it cares about. A `visit_*` method returning `false` skips the
//! children of that node.

use crate::domain::entities::{Component, Configuration, Instance, Model, Variable};
use crate::domain::value_objects::{Implementation, Substitution, Value};

/// Read-only traversal of a model.
pub trait ModelVisitor {
    fn visit_model(&mut self, _model: &Model) -> bool {
        true
    }

    fn visit_component(&mut self, _component: &Component) -> bool {
        true
    }

    fn visit_implementation(&mut self, _component: &Component, _implementation: &Implementation) {}

    fn visit_variable(&mut self, _component: &Component, _variable: &Variable) -> bool {
        true
    }

    fn visit_substitution(
        &mut self,
        _component: &Component,
        _variable: &Variable,
        _substitution: &Substitution,
    ) {
    }
}

/// Walk components (by name), then each component's implementation and variables.
pub fn walk_model<V: ModelVisitor + ?Sized>(visitor: &mut V, model: &Model) {
    if !visitor.visit_model(model) {
        return;
    }
    for component in model.components() {
        if !visitor.visit_component(component) {
            continue;
        }
        if let Some(implementation) = component.implementation() {
            visitor.visit_implementation(component, implementation);
        }
        for variable in component.variables() {
            if !visitor.visit_variable(component, variable) {
                continue;
            }
            for substitution in variable.realization() {
                visitor.visit_substitution(component, variable, substitution);
            }
        }
    }
}

/// Fallible traversal of a configuration, in instance order.
///
/// The first error stops the walk.
pub trait ConfigurationVisitor<'m> {
    type Error;

    fn visit_configuration(&mut self, _configuration: &Configuration<'m>) -> Result<bool, Self::Error> {
        Ok(true)
    }

    fn visit_instance(&mut self, _instance: &Instance<'m>) -> Result<bool, Self::Error> {
        Ok(true)
    }

    fn visit_assignment(
        &mut self,
        _instance: &Instance<'m>,
        _variable: &'m Variable,
        _value: &Value,
    ) -> Result<bool, Self::Error> {
        Ok(true)
    }

    fn visit_substitution(
        &mut self,
        _instance: &Instance<'m>,
        _variable: &'m Variable,
        _value: &Value,
        _substitution: &'m Substitution,
    ) -> Result<(), Self::Error> {
        Ok(())
    }
}

/// Walk instances, then each `(variable, value)` pair, then the variable's substitutions.
pub fn walk_configuration<'m, V: ConfigurationVisitor<'m> + ?Sized>(
    visitor: &mut V,
    configuration: &Configuration<'m>,
) -> Result<(), V::Error> {
    if !visitor.visit_configuration(configuration)? {
        return Ok(());
    }
    for instance in configuration.instances() {
        if !visitor.visit_instance(instance)? {
            continue;
        }
        for (variable, value) in instance.configuration() {
            let variable: &'m Variable = *variable;
            if !visitor.visit_assignment(instance, variable, value)? {
                continue;
            }
            for substitution in variable.realization() {
                visitor.visit_substitution(instance, variable, value, substitution)?;
            }
        }
    }
    Ok(())
}
