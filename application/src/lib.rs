//! Application layer for quizshell
//!
//! This crate contains use cases, port definitions, the command dispatcher
//! and the session loop. It depends only on the domain layer.

pub mod config;
pub mod error;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::PlayConfig;
pub use error::CommandError;
pub use ports::{
    display::{DisplayPort, Tone},
    prompt::{PromptError, PromptPort},
};
pub use use_cases::dispatch::{CommandDispatcher, SessionSignal};
pub use use_cases::play_game::PlayGameUseCase;
pub use use_cases::quiz_commands::QuizCommandsUseCase;
pub use use_cases::session::{SessionEnd, SessionLoop, SessionReport};
