//! Configuration-level domain types.
//!
//! - [`validation::ConfigIssue`]: a problem detected in a loaded configuration

pub mod validation;

pub use validation::{ConfigIssue, ConfigIssueCode, Severity};
