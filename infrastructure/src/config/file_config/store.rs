//! Store configuration from TOML (`[store]` section)

use quizshell_domain::{ConfigIssue, ConfigIssueCode};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Which quiz store backs the shell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StoreBackend {
    /// SQLite database file
    #[default]
    Sqlite,
    /// Process memory, lost on exit
    Memory,
}

impl StoreBackend {
    pub fn as_str(&self) -> &'static str {
        match self {
            StoreBackend::Sqlite => "sqlite",
            StoreBackend::Memory => "memory",
        }
    }
}

impl std::fmt::Display for StoreBackend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StoreBackend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "sqlite" | "sqlite3" | "db" => Ok(StoreBackend::Sqlite),
            "memory" | "mem" => Ok(StoreBackend::Memory),
            other => Err(format!("unknown store backend: {}", other)),
        }
    }
}

/// Raw store configuration from TOML
///
/// # Example
///
/// ```toml
/// [store]
/// backend = "sqlite"          # "sqlite" or "memory"
/// path = "quizzes.sqlite"
/// seed = true                 # sample quizzes when empty
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileStoreConfig {
    pub backend: String,
    /// Database file for the sqlite backend
    pub path: String,
    /// Insert the sample quizzes into an empty store
    pub seed: bool,
}

impl Default for FileStoreConfig {
    fn default() -> Self {
        Self {
            backend: "sqlite".to_string(),
            path: "quizzes.sqlite".to_string(),
            seed: true,
        }
    }
}

impl FileStoreConfig {
    /// Parse the backend name, returning a warning on failure.
    pub fn parse_backend(&self) -> (StoreBackend, Vec<ConfigIssue>) {
        match self.backend.parse::<StoreBackend>() {
            Ok(backend) => (backend, vec![]),
            Err(_) => {
                let issue = ConfigIssue::warning(
                    ConfigIssueCode::InvalidEnumValue {
                        field: "store.backend".to_string(),
                        value: self.backend.clone(),
                        valid_values: vec!["sqlite".to_string(), "memory".to_string()],
                    },
                    format!(
                        "store.backend: unknown value '{}', falling back to 'sqlite'",
                        self.backend
                    ),
                );
                (StoreBackend::default(), vec![issue])
            }
        }
    }

    pub(super) fn validate(&self) -> Vec<ConfigIssue> {
        let uses_file = self.parse_backend().0 == StoreBackend::Sqlite;
        if uses_file && self.path.trim().is_empty() {
            vec![ConfigIssue::error(
                ConfigIssueCode::EmptyValue {
                    field: "store.path".to_string(),
                },
                "store.path cannot be empty for the sqlite backend",
            )]
        } else {
            vec![]
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backend_aliases() {
        assert_eq!("SQLite".parse::<StoreBackend>(), Ok(StoreBackend::Sqlite));
        assert_eq!("mem".parse::<StoreBackend>(), Ok(StoreBackend::Memory));
        assert!("mongo".parse::<StoreBackend>().is_err());
    }

    #[test]
    fn test_unknown_backend_falls_back() {
        let config = FileStoreConfig {
            backend: "mongo".to_string(),
            ..Default::default()
        };
        let (backend, issues) = config.parse_backend();
        assert_eq!(backend, StoreBackend::Sqlite);
        assert_eq!(issues.len(), 1);
        assert!(issues[0].message.contains("mongo"));
    }

    #[test]
    fn test_empty_path_only_matters_for_sqlite() {
        let sqlite = FileStoreConfig {
            path: " ".to_string(),
            ..Default::default()
        };
        assert_eq!(sqlite.validate().len(), 1);

        let memory = FileStoreConfig {
            backend: "memory".to_string(),
            path: String::new(),
            ..Default::default()
        };
        assert!(memory.validate().is_empty());
    }
}
