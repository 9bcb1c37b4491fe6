//! Presentation layer for quizshell
//!
//! This crate contains the CLI definition, console output, the local
//! line-editing shell and the telnet-style socket server.

pub mod cli;
pub mod config;
pub mod output;
pub mod repl;
pub mod server;

// Re-export commonly used types
pub use cli::commands::{Cli, StoreKind};
pub use config::{ReplConfig, ServerConfig};
pub use output::console::ConsoleDisplay;
pub use repl::{LinePrompt, QuizRepl};
pub use server::QuizServer;
