use crate::config::ServerConfig;
use crate::error::{ServerError, ServerResult};
use catalog::CatalogStore;
use matcher::Matcher;
use medassist::MedicineService;
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::Arc;

/// Shared application state
#[derive(Clone)]
pub struct ServerState {
    /// Server configuration
    pub config: Arc<ServerConfig>,

    /// Lookup service (shared across requests)
    pub service: Arc<MedicineService>,

    /// Prometheus render handle, when the exporter is installed
    pub metrics: Option<PrometheusHandle>,
}

impl ServerState {
    /// Create new server state, loading the catalog named by the config.
    ///
    /// An unusable catalog (load failure or no records) is fatal only when
    /// `require_catalog` is set; otherwise the state is built with an
    /// unavailable catalog.
    pub fn new(config: ServerConfig) -> ServerResult<Self> {
        let matcher =
            Matcher::new(config.matcher.clone()).map_err(|e| ServerError::Config(e.to_string()))?;

        let service = MedicineService::from_load(CatalogStore::load(&config.catalog), matcher);
        if config.require_catalog {
            let status = service.status();
            if !status.ready {
                return Err(ServerError::Config(
                    status
                        .reason
                        .unwrap_or_else(|| "catalog unavailable".to_string()),
                ));
            }
        }

        Ok(Self::with_service(config, service))
    }

    /// Create server state around an already built service.
    pub fn with_service(config: ServerConfig, service: MedicineService) -> Self {
        Self {
            config: Arc::new(config),
            service: Arc::new(service),
            metrics: None,
        }
    }

    pub fn with_metrics(mut self, handle: PrometheusHandle) -> Self {
        self.metrics = Some(handle);
        self
    }
}
