//! Workspace umbrella crate for MedAssist.
//!
//! This crate stitches the catalog, the matching engine and the response
//! formatter into a single [`MedicineService`] so callers can answer a
//! medicine-name query with one call:
//!
//! ```
//! use medassist::{CatalogStore, DuplicatePolicy, Matcher, MedicineRecord, MedicineService};
//!
//! let store = CatalogStore::from_records(
//!     vec![MedicineRecord::new("Amoxicillin", "U", "D", "S", "X")],
//!     DuplicatePolicy::LastWins,
//! )
//! .unwrap();
//! let service = MedicineService::new(store, Matcher::default());
//!
//! let info = service.lookup_name("  AMOXICILLIN  ").unwrap();
//! assert_eq!(info.medicine, "Amoxicillin");
//!
//! let missing = service.lookup_name("xyzzy").unwrap();
//! assert_eq!(missing.medicine, "xyzzy");
//! assert_eq!(missing.usage, "Medicine not found in our database.");
//! ```

pub mod response;
pub mod service;

pub use catalog::{
    normalize_name, CatalogConfig, CatalogError, CatalogStore, DuplicatePolicy, MedicineRecord,
};
pub use matcher::{
    set_match_metrics, title_case, MatchConfig, MatchError, MatchKind, MatchMetrics, MatchOutcome,
    Matcher,
};
pub use response::{format_response, MedicineInfo};
pub use service::{
    CatalogState, CatalogStatus, LookupError, MedicineQuery, MedicineService, DEFAULT_LANGUAGE,
};
