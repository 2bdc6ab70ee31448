//! Load-time failures.
//!
//! Every variant is fatal for the load that produced it: the caller gets
//! either a complete [`CatalogStore`](crate::CatalogStore) or one of these.
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CatalogError {
    /// The source could not be read.
    #[error("failed to read catalog {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The payload is not well-formed JSON.
    #[error("catalog is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    /// The payload parsed but is not a top-level array.
    #[error("catalog must be a JSON array of records")]
    NotAnArray,

    #[error("record {index} is not a JSON object")]
    NotAnObject { index: usize },

    /// A required field is absent or null.
    #[error("record {index} is missing required field `{field}`")]
    MissingField { index: usize, field: &'static str },

    /// A required field is present but not a string.
    #[error("record {index} field `{field}` must be a string")]
    InvalidField { index: usize, field: &'static str },

    #[error("record {index} has a blank name")]
    EmptyName { index: usize },

    /// Two records normalize to the same name under
    /// [`DuplicatePolicy::Reject`](crate::DuplicatePolicy::Reject).
    #[error("duplicate medicine name `{name}` at records {first} and {second}")]
    DuplicateName {
        name: String,
        first: usize,
        second: usize,
    },
}
