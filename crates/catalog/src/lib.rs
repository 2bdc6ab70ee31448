//! MedAssist catalog layer
//!
//! The catalog is the fixed set of medicine records every lookup runs
//! against. It is loaded once at startup, validated in full, and never
//! mutated afterwards, so a [`CatalogStore`] can be shared across request
//! handlers behind an `Arc` without locking.
//!
//! ## What we do here
//!
//! - **Parse** a JSON array of records with snake-case fields (`name`,
//!   `usage`, `dos_donts`, `side_effects`, `disclaimer`).
//! - **Validate** every record. A missing, null or non-string field fails the
//!   whole load; there is no partially loaded catalog.
//! - **Index** records by normalized name (lower-cased, trimmed) for exact
//!   lookup, and keep the ordered list of normalized names for the fuzzy pass.
//!
//! ## Example
//!
//! ```
//! use catalog::{CatalogStore, DuplicatePolicy};
//!
//! let json = r#"[{"name": "Amoxicillin", "usage": "U", "dos_donts": "D",
//!                 "side_effects": "S", "disclaimer": "X"}]"#;
//! let store = CatalogStore::from_json_str(json, DuplicatePolicy::LastWins).unwrap();
//!
//! assert_eq!(store.len(), 1);
//! assert_eq!(store.lookup_exact("amoxicillin").unwrap().name, "Amoxicillin");
//! assert_eq!(store.normalized_names(), ["amoxicillin"]);
//! ```

mod config;
mod error;
mod store;
mod types;

pub use crate::config::{CatalogConfig, DuplicatePolicy};
pub use crate::error::CatalogError;
pub use crate::store::CatalogStore;
pub use crate::types::{normalize_name, MedicineRecord};
