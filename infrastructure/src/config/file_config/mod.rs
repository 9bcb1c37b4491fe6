//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! String-valued choices are kept raw here and parsed with fallbacks, so a
//! typo produces a warning instead of a startup failure.

mod logging;
mod play;
mod repl;
mod server;
mod store;

pub use logging::FileLoggingConfig;
pub use play::FilePlayConfig;
pub use repl::FileReplConfig;
pub use server::FileServerConfig;
pub use store::{FileStoreConfig, StoreBackend};

use quizshell_domain::ConfigIssue;
use serde::{Deserialize, Serialize};

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Quiz store settings
    pub store: FileStoreConfig,
    /// Local shell settings
    pub repl: FileReplConfig,
    /// Socket server settings
    pub server: FileServerConfig,
    /// Game settings
    pub play: FilePlayConfig,
    /// Log output settings
    pub logging: FileLoggingConfig,
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();
        issues.extend(self.store.parse_backend().1);
        issues.extend(self.store.validate());
        issues.extend(self.server.validate());
        issues
    }
}
