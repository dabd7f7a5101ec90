//! Domain Entities
//!
//! - `Model` - components, goals and constraints of an architecture
//! - `Component` / `Variable` - the reusable definitions it is made of
//! - `Configuration` / `Instance` - one concrete deployment over a model

mod component;
mod configuration;
mod instance;
mod model;
mod resolution;
mod variable;

pub use component::Component;
pub use configuration::{Configuration, Stacks};
pub use instance::{Instance, InstanceId};
pub use model::Model;
pub use resolution::{ResolveError, Resolved};
pub use variable::Variable;
