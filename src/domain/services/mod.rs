//! Domain Services
//!
//! Pure business logic that operates on domain values.
//! These services have no I/O dependencies and are easily testable.

mod coverage;

pub use coverage::{cover, CoverageError, MAX_POINTS};
