//! Prometheus wiring for lookup metrics.
use std::sync::Arc;
use std::time::Duration;

use matcher::{set_match_metrics, MatchMetrics};
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};

pub const LOOKUPS_TOTAL: &str = "medassist_lookups_total";
pub const LOOKUP_DURATION_SECONDS: &str = "medassist_lookup_duration_seconds";

/// Forwards matcher observations to the `metrics` facade.
#[derive(Debug, Default)]
pub struct PrometheusMatchMetrics;

impl MatchMetrics for PrometheusMatchMetrics {
    fn record_match(&self, outcome: &'static str, latency: Duration) {
        metrics::counter!(LOOKUPS_TOTAL, "outcome" => outcome).increment(1);
        metrics::histogram!(LOOKUP_DURATION_SECONDS).record(latency.as_secs_f64());
    }
}

/// Install the process-wide Prometheus recorder and hook the matcher into it.
///
/// Call once per process; a second install fails because the `metrics`
/// facade only accepts one global recorder.
pub fn install() -> anyhow::Result<PrometheusHandle> {
    let handle = PrometheusBuilder::new().install_recorder()?;
    set_match_metrics(Some(Arc::new(PrometheusMatchMetrics)));
    Ok(handle)
}
