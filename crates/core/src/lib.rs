//! Student marks domain logic.
//!
//! Pure filtering and validation live here with no HTTP dependency, so the
//! API crate and the tests share the same rules.

pub mod dataset;
pub mod error;
pub mod student;
pub mod threshold_validation;
