use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// What to do when two records normalize to the same name.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum DuplicatePolicy {
    /// The later record replaces the earlier one in the name index. The name
    /// keeps the position of its first occurrence in the ordered name list.
    #[default]
    LastWins,
    /// Fail the load.
    Reject,
}

/// Where the catalog comes from and how it is validated.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CatalogConfig {
    /// Path to the JSON catalog file.
    #[serde(default = "CatalogConfig::default_path")]
    pub path: PathBuf,

    #[serde(default)]
    pub duplicate_policy: DuplicatePolicy,
}

impl CatalogConfig {
    pub(crate) fn default_path() -> PathBuf {
        PathBuf::from("data/medicines.json")
    }

    pub fn with_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.path = path.into();
        self
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            path: Self::default_path(),
            duplicate_policy: DuplicatePolicy::default(),
        }
    }
}
