//! Configuration file loading for quizshell
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `QUIZSHELL_*` environment variables (`__` separates sections)
//! 2. `--config <path>` specified file
//! 3. Project root: `./quizshell.toml` or `./.quizshell.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/quizshell/config.toml`
//! 5. Fallback: `~/.config/quizshell/config.toml`
//! 6. Default values

mod file_config;
mod loader;

pub use file_config::{
    FileConfig, FileLoggingConfig, FilePlayConfig, FileReplConfig, FileServerConfig,
    FileStoreConfig, StoreBackend,
};
pub use loader::{ConfigError, ConfigLoader};
