//! Port definitions (interfaces for external adapters)
//!
//! Ports define the contracts that presentation adapters must implement.
//! The quiz store port is the domain's [`QuizRepository`](quizshell_domain::QuizRepository).

pub mod display;
pub mod prompt;
