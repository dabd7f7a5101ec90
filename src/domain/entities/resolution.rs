//! Identifier resolution errors and results

use crate::domain::value_objects::{Feature, Service};

use super::Component;

/// A name that does not denote anything where it was looked up.
///
/// Resolution is always exact and fails on the first unknown name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ResolveError {
    #[error("no component, service or feature named '{identifier}' in the model")]
    UnknownIdentifier { identifier: String },

    #[error("'{identifier}' is not a component of the model")]
    NotAComponent { identifier: String },

    #[error("no instance named '{identifier}' in the configuration")]
    UnknownInstance { identifier: String },

    #[error("variable '{variable}' has no match in component '{component}'")]
    UnknownVariable { component: String, variable: String },

    #[error("instance '{identifier}' is defined twice")]
    DuplicateInstance { identifier: String },
}

/// What a model identifier resolved to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Resolved<'m> {
    Component(&'m Component),
    Service(&'m Service),
    Feature(&'m Feature),
}

impl<'m> Resolved<'m> {
    pub fn as_component(&self) -> Option<&'m Component> {
        match *self {
            Resolved::Component(component) => Some(component),
            _ => None,
        }
    }
}
