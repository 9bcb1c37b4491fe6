//! Domain layer for quizshell
//!
//! This crate contains the core business logic, entities, and value objects.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Quiz
//!
//! A [`Quiz`] is a question/answer pair identified by a store-assigned
//! [`QuizId`]. Stores persist quizzes behind the [`QuizRepository`] trait and
//! enforce the field rules from [`NewQuiz::validate`].
//!
//! ## Play
//!
//! A [`PlaySession`] is one "play all randomly" game: quizzes are drawn
//! without replacement, and the first wrong answer ends the game.
//!
//! ## Commands
//!
//! [`CommandLine`] splits raw input into a keyword and arguments, and
//! [`CommandKind`] names the shell commands (with their aliases).

pub mod command;
pub mod config;
pub mod core;
pub mod play;
pub mod quiz;

// Re-export commonly used types
pub use command::{CommandKind, CommandLine, UnknownCommand};
pub use config::{ConfigIssue, ConfigIssueCode, Severity};
pub use core::{
    error::IdError,
    id::{QuizId, validate_id},
};
pub use play::{PlayError, PlayOutcome, PlaySession, Round, Verdict};
pub use quiz::{
    answer::answers_match,
    entities::{NewQuiz, Quiz},
    repository::{QuizRepository, StoreError},
    validation::{FieldError, QuizField},
};
