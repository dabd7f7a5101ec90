//! Application Layer
//!
//! Use cases that orchestrate the business flow.
//! This layer:
//! - Depends on Domain layer (entities, visitors, ports)
//! - Does NOT contain business rules (those are in Domain)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `RealizeUseCase` - Builds configurations into artifact trees
//! - `check_templates` - Finds template files a model refers to but lacks
//! - `Workspace` - Where the CLI finds the model and the configurations

pub mod check;
pub mod realize;
pub mod workspace;

pub use check::{check_templates, CheckResult, MissingTemplate};
pub use realize::{RealizationReport, RealizeError, RealizeUseCase};
pub use workspace::Workspace;
