use std::time::Instant;

use catalog::CatalogStore;
use tracing::debug;

use crate::metrics::metrics_recorder;
use crate::normalize::{normalize_query, title_case};
use crate::similarity::ratio_at_least;
use crate::types::{MatchConfig, MatchError, MatchKind, MatchOutcome};


/// Best approximate candidate from one pass over the catalog names.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Candidate<'a> {
    /// Normalized catalog name.
    pub name: &'a str,
    pub score: f64,
}

/// Matcher for looking medicine names up in a catalog.
///
/// The matcher holds only its configuration; the catalog is passed per call
/// so the same matcher can serve any store.
#[derive(Debug, Clone)]
pub struct Matcher {
    cfg: MatchConfig,
}

impl Matcher {
    /// Construct a matcher from a validated configuration.
    pub fn new(cfg: MatchConfig) -> Result<Self, MatchError> {
        cfg.validate()?;
        Ok(Self { cfg })
    }

    pub fn config(&self) -> &MatchConfig {
        &self.cfg
    }

    /// Match a free-text query against the catalog.
    ///
    /// Exact lookup on the normalized query first, then the approximate pass.
    /// Never fails: empty, whitespace-only and oversized queries all resolve
    /// to an outcome.
    pub fn match_query<'c>(&self, catalog: &'c CatalogStore, query: &str) -> MatchOutcome<'c> {
        let start = Instant::now();
        let outcome = self.resolve(catalog, query);

        if let Some(recorder) = metrics_recorder() {
            recorder.record_match(outcome.label(), start.elapsed());
        }
        outcome
    }

    fn resolve<'c>(&self, catalog: &'c CatalogStore, query: &str) -> MatchOutcome<'c> {
        let normalized = normalize_query(query, self.cfg.max_query_chars);

        if let Some(record) = catalog.lookup_exact(&normalized) {
            return MatchOutcome::Found {
                record,
                matched_name: record.name.clone(),
                kind: MatchKind::Exact,
            };
        }

        let found = self
            .best_candidate(catalog.normalized_names(), &normalized)
            .and_then(|candidate| {
                catalog
                    .lookup_exact(candidate.name)
                    .map(|record| (record, candidate))
            });

        match found {
            Some((record, candidate)) => {
                debug!(
                    candidate = candidate.name,
                    score = candidate.score,
                    "approximate match"
                );
                MatchOutcome::Found {
                    record,
                    matched_name: title_case(candidate.name),
                    kind: MatchKind::Approximate {
                        score: candidate.score,
                    },
                }
            }
            None => MatchOutcome::NotFound {
                query: query.to_string(),
            },
        }
    }

    /// Highest-scoring name at or above the cutoff.
    ///
    /// Each name is scored as `ratio(name, query)`. Ties keep the earliest
    /// name in `names`, not the lexicographically largest one that
    /// `difflib.get_close_matches` would return.
    pub fn best_candidate<'n>(&self, names: &'n [String], query: &str) -> Option<Candidate<'n>> {
        let mut best: Option<Candidate<'n>> = None;
        for name in names {
            let Some(score) = ratio_at_least(name, query, self.cfg.cutoff) else {
                continue;
            };
            if best.map_or(true, |b| score > b.score) {
                best = Some(Candidate { name, score });
            }
        }
        best
    }
}

impl Default for Matcher {
    fn default() -> Self {
        Self {
            cfg: MatchConfig::default(),
        }
    }
}
