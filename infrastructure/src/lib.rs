//! Infrastructure layer for quizshell
//!
//! This crate contains adapters that implement the ports defined in the
//! domain and application layers: quiz stores and configuration file
//! loading.

pub mod config;
pub mod store;

// Re-export commonly used types
pub use config::{
    ConfigError, ConfigLoader, FileConfig, FileLoggingConfig, FilePlayConfig, FileReplConfig,
    FileServerConfig, FileStoreConfig, StoreBackend,
};
pub use store::{InMemoryQuizStore, SAMPLE_QUIZZES, SqliteError, SqliteQuizStore, seed_if_empty};
