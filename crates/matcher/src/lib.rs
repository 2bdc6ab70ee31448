//! # MedAssist Matcher (`matcher`)
//!
//! ## Purpose
//!
//! `matcher` turns a free-text medicine name into a catalog record. It sits
//! directly on top of the [`catalog`] crate and is pure: no I/O, no shared
//! mutable state, so any number of requests can match in parallel against
//! the same `Arc<CatalogStore>`.
//!
//! ## Algorithm
//!
//! 1. **Normalize**: truncate to `max_query_chars`, lower-case, trim.
//! 2. **Exact pass**: look the normalized query up in the catalog's name
//!    index. A hit reports the record's canonical `name`.
//! 3. **Approximate pass**: score every normalized catalog name with the
//!    block-matching [`similarity::ratio`] and keep the highest score at or
//!    above `cutoff` (default `0.5`). Ties keep the earliest name in catalog
//!    order. A hit reports the title-cased catalog key.
//! 4. **Miss**: [`MatchOutcome::NotFound`] carrying the original query.
//!
//! ## Core Types
//!
//! - [`MatchConfig`]: `cutoff` and `max_query_chars`.
//! - [`Matcher`]: validated configuration plus the matching entry point.
//! - [`MatchOutcome`] / [`MatchKind`]: found (exact or approximate) or not.
//!
//! ## Example Usage
//!
//! ```
//! use catalog::{CatalogStore, DuplicatePolicy, MedicineRecord};
//! use matcher::{MatchConfig, MatchOutcome, Matcher};
//!
//! let store = CatalogStore::from_records(
//!     vec![MedicineRecord::new("paracetamol", "U", "D", "S", "X")],
//!     DuplicatePolicy::LastWins,
//! )
//! .unwrap();
//! let matcher = Matcher::new(MatchConfig::default()).unwrap();
//!
//! match matcher.match_query(&store, "Paracetamal") {
//!     MatchOutcome::Found { record, matched_name, .. } => {
//!         assert_eq!(record.name, "paracetamol");
//!         assert_eq!(matched_name, "Paracetamol");
//!     }
//!     MatchOutcome::NotFound { .. } => unreachable!(),
//! }
//! ```
//!
//! ## Observability
//!
//! Install a [`MatchMetrics`] implementation via [`set_match_metrics`] to record
//! per-query outcome and latency. This is typically done once during service
//! startup.

pub mod engine;
pub mod metrics;
pub mod normalize;
pub mod similarity;
pub mod types;

pub use crate::engine::{Candidate, Matcher};
pub use crate::metrics::{set_match_metrics, MatchMetrics};
pub use crate::normalize::{normalize_query, title_case};
pub use crate::types::{MatchConfig, MatchError, MatchKind, MatchOutcome};
