use catalog::MedicineRecord;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration for the matching engine.
///
/// `MatchConfig` is cheap to clone and serde-friendly so it can be embedded in
/// the server configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MatchConfig {
    /// Minimum similarity ratio an approximate candidate must reach.
    #[serde(default = "MatchConfig::default_cutoff")]
    pub cutoff: f64,
    /// Queries longer than this many chars are truncated before matching.
    #[serde(default = "MatchConfig::default_max_query_chars")]
    pub max_query_chars: usize,
}

impl MatchConfig {
    pub(crate) fn default_cutoff() -> f64 {
        0.5
    }

    pub(crate) fn default_max_query_chars() -> usize {
        256
    }

    /// Validate the configuration before building a matcher.
    pub fn validate(&self) -> Result<(), MatchError> {
        if !self.cutoff.is_finite() || !(0.0..=1.0).contains(&self.cutoff) {
            return Err(MatchError::InvalidConfig(format!(
                "cutoff must be in range [0.0, 1.0], got {}",
                self.cutoff
            )));
        }
        if self.max_query_chars == 0 {
            return Err(MatchError::InvalidConfig(
                "max_query_chars must be greater than zero".into(),
            ));
        }
        Ok(())
    }
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            cutoff: Self::default_cutoff(),
            max_query_chars: Self::default_max_query_chars(),
        }
    }
}

/// How a record was found.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum MatchKind {
    /// Normalized query equals a normalized catalog name.
    Exact,
    /// Best-scoring catalog name at or above the cutoff.
    Approximate { score: f64 },
}

/// Result of matching one query against the catalog.
#[derive(Debug, Clone, PartialEq)]
pub enum MatchOutcome<'a> {
    Found {
        record: &'a MedicineRecord,
        /// The record's own name for exact hits, the title-cased catalog key
        /// for approximate ones.
        matched_name: String,
        kind: MatchKind,
    },
    /// No exact hit and nothing reached the cutoff.
    NotFound {
        /// The query as the caller sent it.
        query: String,
    },
}

impl MatchOutcome<'_> {
    pub fn is_found(&self) -> bool {
        matches!(self, MatchOutcome::Found { .. })
    }

    pub fn record(&self) -> Option<&MedicineRecord> {
        match self {
            MatchOutcome::Found { record, .. } => Some(*record),
            MatchOutcome::NotFound { .. } => None,
        }
    }

    /// Stable label for logs and metrics.
    pub fn label(&self) -> &'static str {
        match self {
            MatchOutcome::Found {
                kind: MatchKind::Exact,
                ..
            } => "exact",
            MatchOutcome::Found {
                kind: MatchKind::Approximate { .. },
                ..
            } => "approximate",
            MatchOutcome::NotFound { .. } => "not_found",
        }
    }
}

/// Errors produced by the matching layer.
///
/// Matching itself is total over its input; only construction can fail.
#[derive(Debug, Error)]
pub enum MatchError {
    #[error("invalid match config: {0}")]
    InvalidConfig(String),
}
