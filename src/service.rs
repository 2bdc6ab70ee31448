use std::sync::Arc;

use catalog::{CatalogError, CatalogStore};
use matcher::Matcher;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::response::{format_response, MedicineInfo};

/// Language assumed when a request does not name one.
pub const DEFAULT_LANGUAGE: &str = "English";

/// A lookup request.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MedicineQuery {
    #[serde(alias = "medicineName")]
    pub medicine_name: String,

    /// Accepted for compatibility; catalog text exists in one language only
    /// and the hint does not change matching or output.
    #[serde(default)]
    pub language: Option<String>,
}

impl MedicineQuery {
    pub fn new(medicine_name: impl Into<String>) -> Self {
        Self {
            medicine_name: medicine_name.into(),
            language: None,
        }
    }

    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    pub fn language(&self) -> &str {
        self.language.as_deref().unwrap_or(DEFAULT_LANGUAGE)
    }
}

/// Errors surfaced by [`MedicineService::lookup`].
///
/// A miss is not an error; it is a normal [`MedicineInfo`] with apology text.
#[derive(Debug, Error)]
pub enum LookupError {
    /// No usable catalog. Carries the system-error payload for the query.
    #[error("medicine catalog unavailable: {reason}")]
    CatalogUnavailable {
        reason: String,
        payload: MedicineInfo,
    },
}

/// Whether the service has a catalog to answer from.
#[derive(Debug, Clone)]
pub enum CatalogState {
    Ready(Arc<CatalogStore>),
    Unavailable { reason: String },
}

/// Snapshot of [`CatalogState`] for health reporting.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct CatalogStatus {
    pub ready: bool,
    pub records: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

/// Catalog + matcher + formatter: the whole lookup path behind one call.
///
/// Built once at startup and shared by reference; every method takes
/// `&self`.
#[derive(Debug, Clone)]
pub struct MedicineService {
    catalog: CatalogState,
    matcher: Matcher,
}

impl MedicineService {
    /// Serve from a loaded store. An empty store counts as unavailable.
    pub fn new(store: CatalogStore, matcher: Matcher) -> Self {
        Self::with_shared(Arc::new(store), matcher)
    }

    pub fn with_shared(store: Arc<CatalogStore>, matcher: Matcher) -> Self {
        if store.is_empty() {
            return Self::unavailable("catalog contains no records", matcher);
        }
        Self {
            catalog: CatalogState::Ready(store),
            matcher,
        }
    }

    /// Serve configuration errors for every lookup.
    pub fn unavailable(reason: impl Into<String>, matcher: Matcher) -> Self {
        Self {
            catalog: CatalogState::Unavailable {
                reason: reason.into(),
            },
            matcher,
        }
    }

    /// Build from the result of a catalog load, logging a failure instead of
    /// propagating it.
    pub fn from_load(result: Result<CatalogStore, CatalogError>, matcher: Matcher) -> Self {
        match result {
            Ok(store) => Self::new(store, matcher),
            Err(err) => {
                warn!(error = %err, "catalog load failed; lookups will report a configuration error");
                Self::unavailable(err.to_string(), matcher)
            }
        }
    }

    pub fn catalog(&self) -> &CatalogState {
        &self.catalog
    }

    pub fn matcher(&self) -> &Matcher {
        &self.matcher
    }

    pub fn status(&self) -> CatalogStatus {
        match &self.catalog {
            CatalogState::Ready(store) => CatalogStatus {
                ready: true,
                records: store.len(),
                reason: None,
            },
            CatalogState::Unavailable { reason } => CatalogStatus {
                ready: false,
                records: 0,
                reason: Some(reason.clone()),
            },
        }
    }

    /// Answer one query.
    pub fn lookup(&self, query: &MedicineQuery) -> Result<MedicineInfo, LookupError> {
        let store = match &self.catalog {
            CatalogState::Ready(store) => store,
            CatalogState::Unavailable { reason } => {
                warn!(reason = %reason, "lookup rejected: catalog unavailable");
                return Err(LookupError::CatalogUnavailable {
                    reason: reason.clone(),
                    payload: MedicineInfo::catalog_unavailable(&query.medicine_name),
                });
            }
        };

        debug!(language = query.language(), "language hint accepted");
        let outcome = self.matcher.match_query(store, &query.medicine_name);
        info!(
            outcome = outcome.label(),
            medicine = outcome.record().map(|r| r.name.as_str()),
            "lookup"
        );

        Ok(format_response(&outcome, &query.medicine_name))
    }

    /// Convenience wrapper around [`lookup`](Self::lookup) without a
    /// language hint.
    pub fn lookup_name(&self, name: &str) -> Result<MedicineInfo, LookupError> {
        self.lookup(&MedicineQuery::new(name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog::{DuplicatePolicy, MedicineRecord};

    fn service() -> MedicineService {
        let store = CatalogStore::from_records(
            vec![MedicineRecord::new("Amoxicillin", "U", "D", "S", "X")],
            DuplicatePolicy::LastWins,
        )
        .unwrap();
        MedicineService::new(store, Matcher::default())
    }

    #[test]
    fn query_accepts_camel_case_alias_and_defaults_language() {
        let q: MedicineQuery = serde_json::from_str(r#"{"medicineName": "Aspirin"}"#).unwrap();
        assert_eq!(q.medicine_name, "Aspirin");
        assert_eq!(q.language(), "English");

        let q: MedicineQuery =
            serde_json::from_str(r#"{"medicine_name": "Aspirin", "language": null}"#).unwrap();
        assert_eq!(q.language(), DEFAULT_LANGUAGE);
    }

    #[test]
    fn language_hint_does_not_change_output() {
        let svc = service();
        let english = svc.lookup(&MedicineQuery::new("amoxicilin")).unwrap();
        let hindi = svc
            .lookup(&MedicineQuery::new("amoxicilin").with_language("Hindi"))
            .unwrap();
        assert_eq!(english, hindi);
    }

    #[test]
    fn empty_store_is_unavailable() {
        let svc = MedicineService::new(CatalogStore::default(), Matcher::default());
        assert!(!svc.status().ready);

        let err = svc.lookup_name("xyzzy").unwrap_err();
        let LookupError::CatalogUnavailable { payload, .. } = err;
        assert_eq!(payload, MedicineInfo::catalog_unavailable("xyzzy"));
    }

    #[test]
    fn failed_load_reports_reason() {
        let result = CatalogStore::from_json_str("not json", DuplicatePolicy::LastWins);
        let svc = MedicineService::from_load(result, Matcher::default());

        let status = svc.status();
        assert!(!status.ready);
        assert!(status.reason.unwrap().contains("not valid JSON"));
    }

    #[test]
    fn ready_status_counts_records() {
        let status = service().status();
        assert_eq!(
            status,
            CatalogStatus {
                ready: true,
                records: 1,
                reason: None
            }
        );
    }
}
