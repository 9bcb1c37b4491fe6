//! Configuration validation results.
//!
//! Configuration loaders report what they could not honour as a list of
//! [`ConfigIssue`]s instead of failing outright, so the shell can still
//! start with a fallback and print the issues as warnings.
//!
//! # Examples
//!
//! ```
//! use quizshell_domain::{ConfigIssue, ConfigIssueCode, Severity};
//!
//! let issue = ConfigIssue::warning(
//!     ConfigIssueCode::InvalidEnumValue {
//!         field: "store.backend".to_string(),
//!         value: "mongo".to_string(),
//!         valid_values: vec!["sqlite".to_string(), "memory".to_string()],
//!     },
//!     "store.backend: unknown value 'mongo', falling back to 'sqlite'",
//! );
//! assert_eq!(issue.severity, Severity::Warning);
//! ```

/// Severity level of a configuration issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Fatal: the configuration cannot work at all.
    Error,
    /// Non-fatal: a fallback value is used instead.
    Warning,
}

/// Identifies a specific configuration issue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigIssueCode {
    /// A string field holds a value outside its known set.
    InvalidEnumValue {
        field: String,
        value: String,
        valid_values: Vec<String>,
    },
    /// A field that must be non-empty is empty.
    EmptyValue { field: String },
    /// The server port is zero.
    InvalidPort,
}

/// A detected issue in the configuration.
#[derive(Debug, Clone)]
pub struct ConfigIssue {
    pub severity: Severity,
    pub code: ConfigIssueCode,
    pub message: String,
}

impl ConfigIssue {
    pub fn warning(code: ConfigIssueCode, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            code,
            message: message.into(),
        }
    }

    pub fn error(code: ConfigIssueCode, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            code,
            message: message.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}
