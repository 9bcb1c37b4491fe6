//! Prompt port for interactive input.
//!
//! A [`PromptPort`] is one user's input channel: the session loop reads
//! command lines from it, and handlers ask single questions through it.
//!
//! # Implementations
//!
//! - **Local terminal**: `LinePrompt` in the presentation layer
//! - **Socket**: `StreamPrompt` in the presentation layer

use async_trait::async_trait;

/// Error type for prompt operations.
///
/// These represent failures of the input channel, not user answers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptError {
    /// The user interrupted the current read (e.g., Ctrl+C).
    Interrupted,
    /// The input stream has ended (Ctrl+D, EOF, peer hung up).
    Closed,
    /// The line was refused (e.g., too long); the next read may succeed.
    Rejected(String),
    /// Input/output error on the underlying terminal or socket.
    Io(String),
}

impl std::fmt::Display for PromptError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PromptError::Interrupted => write!(f, "Operation cancelled"),
            PromptError::Closed => write!(f, "Input closed"),
            PromptError::Rejected(reason) => write!(f, "{}", reason),
            PromptError::Io(msg) => write!(f, "I/O error: {}", msg),
        }
    }
}

impl std::error::Error for PromptError {}

impl From<std::io::Error> for PromptError {
    fn from(error: std::io::Error) -> Self {
        PromptError::Io(error.to_string())
    }
}

/// Port for reading user input.
///
/// Each session owns exactly one prompt, and only one read is in flight at a
/// time.
#[async_trait]
pub trait PromptPort: Send + Sync {
    /// Show the session prompt and read the next command line.
    async fn read_command(&self) -> Result<String, PromptError>;

    /// Ask a single question and return the trimmed answer.
    ///
    /// When `default` is given the user starts from that text and can edit
    /// it, rather than typing from scratch.
    async fn ask(&self, question: &str, default: Option<&str>) -> Result<String, PromptError>;

    /// Close the input channel after `quit`.
    ///
    /// Defaults to doing nothing; socket prompts close their connection.
    async fn close(&self) {}
}
