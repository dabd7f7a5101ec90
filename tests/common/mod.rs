//! Common test utilities for camp contract and scenario tests.
//!
//! This module provides:
//! - `TestEnv`: Isolated workspace in a temp directory, plus CLI helpers
//! - Assertion macros: `assert_realized!`, `assert_file_content!`
//! - Fixtures: the `server`/`jdk` model and its template tree

#![allow(dead_code)]

pub mod assertions;
pub mod env;
pub mod fixtures;

pub use assertions::*;
pub use env::*;
pub use fixtures::*;
