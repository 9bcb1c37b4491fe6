//! Quiz store adapters
//!
//! Implementations of [`QuizRepository`](quizshell_domain::QuizRepository):
//! an in-memory map for tests and throwaway sessions, and a SQLite file for
//! everything else. Both enforce the same field rules, including the unique
//! question.

mod memory;
mod seed;
mod sqlite;

pub use memory::InMemoryQuizStore;
pub use seed::{SAMPLE_QUIZZES, seed_if_empty};
pub use sqlite::{SqliteError, SqliteQuizStore};
