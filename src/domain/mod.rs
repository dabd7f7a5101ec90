//! Domain Layer
//!
//! The model of deployable architectures: pure data and pure algorithms,
//! without I/O.
//!
//! ## Structure
//!
//! - `entities/` - Model, Component, Variable, Configuration, Instance
//! - `value_objects/` - Service, Feature, Substitution, Value, warnings
//! - `services/` - Domain generator (`cover`)
//! - `ports/` - Interfaces implemented by the infrastructure layer
//! - `visitor` - Traversals used by realization and template checks

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
pub mod visitor;
