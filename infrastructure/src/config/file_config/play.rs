//! Game configuration from TOML (`[play]` section)

use serde::{Deserialize, Serialize};

/// Raw play configuration from TOML
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilePlayConfig {
    /// Fixed RNG seed; every game asks in the same order when set
    pub seed: Option<u64>,
}
