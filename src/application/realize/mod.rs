//! Realize Module
//!
//! Materializes configurations into artifact trees.
//!
//! ## Structure
//!
//! - `builder` - One configuration into one tree (`Builder`)
//! - `error` - Fatal realization failures (`RealizeError`)
//! - `result` - What a build produced (`RealizationReport`)
//! - `use_case` - Many configurations into `config_<n>/` trees (`RealizeUseCase`)
//!
//! ## Usage
//!
//! ```ignore
//! use camp::application::realize::RealizeUseCase;
//! use camp::infrastructure::LocalFs;
//!
//! let use_case = RealizeUseCase::new(LocalFs::new());
//! let reports = use_case.realize_all(&configurations, workspace, &workspace.join("out"))?;
//! ```

mod builder;
mod error;
mod result;
mod use_case;

pub use builder::{build, Builder, IMAGES_DIRECTORY, TEMPLATE_DIRECTORY};
pub use error::RealizeError;
pub use result::RealizationReport;
pub use use_case::{configuration_directory, RealizeUseCase};
