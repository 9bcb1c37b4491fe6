//! Domain error types

use thiserror::Error;

/// Errors produced while validating a raw `<id>` argument
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IdError {
    #[error("Missing parameter <id>.")]
    MissingParameter,

    #[error("The value of parameter <id> is not a number.")]
    NotANumber,
}
