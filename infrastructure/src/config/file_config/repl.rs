//! REPL configuration from TOML (`[repl]` section)

use serde::{Deserialize, Serialize};

/// Raw REPL configuration from TOML
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileReplConfig {
    /// Session prompt text
    pub prompt: String,
    /// Path to history file
    pub history_file: Option<String>,
    /// Colour output
    pub color: bool,
}

impl Default for FileReplConfig {
    fn default() -> Self {
        Self {
            prompt: "P2_Quiz > ".to_string(),
            history_file: None,
            color: true,
        }
    }
}
