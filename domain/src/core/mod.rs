//! Core domain concepts shared across all subdomains.
//!
//! - [`id::QuizId`]: the store-assigned quiz identifier
//! - [`id::validate_id`]: turns a raw command argument into a [`id::QuizId`]
//! - [`error::IdError`]: why an argument is not a usable id

pub mod error;
pub mod id;
