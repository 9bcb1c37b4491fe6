//! Presentation-level configuration
//!
//! Settings for the local shell and the socket server, resolved from the
//! file configuration and command-line flags by the binary.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Local shell configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ReplConfig {
    /// Session prompt text
    pub prompt: String,
    /// Path to history file (`~/` is expanded)
    pub history_file: Option<String>,
    /// Colour output
    pub color: bool,
}

impl Default for ReplConfig {
    fn default() -> Self {
        Self {
            prompt: "P2_Quiz > ".to_string(),
            history_file: None,
            color: true,
        }
    }
}

impl ReplConfig {
    /// Where command history is kept
    ///
    /// Falls back to `<data dir>/quizshell/history.txt`.
    pub fn history_path(&self) -> Option<PathBuf> {
        match &self.history_file {
            Some(file) => match file.strip_prefix("~/") {
                Some(rest) => dirs::home_dir().map(|home| home.join(rest)),
                None => Some(PathBuf::from(file)),
            },
            None => dirs::data_dir().map(|d| d.join("quizshell").join("history.txt")),
        }
    }
}

/// Socket server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Prompt sent to each client
    pub prompt: String,
    /// Send ANSI colours to clients
    pub color: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            prompt: "P2_Quiz > ".to_string(),
            color: true,
        }
    }
}
