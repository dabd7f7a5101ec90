//! Domain Value Objects
//!
//! Immutable value types: capabilities, variable values, substitution rules,
//! implementations, goals and the warnings raised while loading models.

mod capability;
mod config_warning;
mod goals;
mod hash;
mod implementation;
mod load_warning;
mod substitution;
mod value;

pub use capability::{Feature, Service};
pub use config_warning::ConfigWarning;
pub use goals::Goals;
pub use hash::ContentHash;
pub use implementation::Implementation;
pub use load_warning::{EntryPath, LoadWarning};
pub use substitution::{InvalidSubstitution, Substitution};
pub use value::Value;
