//! MedAssist Server - HTTP API for medicine information lookups
//!
//! This crate exposes the [`medassist`] lookup service over HTTP. A single
//! catalog is loaded at startup and shared read-only by every request.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use server::ServerConfig;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = ServerConfig::load()?;
//!     server::start_server(config).await?;
//!     Ok(())
//! }
//! ```
//!
//! # API Endpoints
//!
//! - `GET /` - API status
//! - `GET /health` - Liveness probe
//! - `GET /ready` - Readiness probe (503 until the catalog is loaded)
//! - `GET /metrics` - Prometheus metrics
//! - `POST /api/medicine-info` - Look up a medicine by name
//!
//! # Error responses
//!
//! Errors use `{"error": {"code", "message", "details"?}}`. A name that is not
//! in the catalog is not an error. A missing catalog is
//! `400 CATALOG_UNAVAILABLE`; anything unexpected is `500 INTERNAL_ERROR`.

pub mod config;
pub mod error;
pub mod metrics;
pub mod middleware;
pub mod routes;
pub mod server;
pub mod state;

pub use config::ServerConfig;
pub use error::{ServerError, ServerResult};
pub use server::{build_router, start_server};
pub use state::ServerState;
