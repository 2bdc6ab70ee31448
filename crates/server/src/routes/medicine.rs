use crate::error::{ServerError, ServerResult};
use crate::state::ServerState;
use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use medassist::{MedicineInfo, MedicineQuery};
use std::sync::Arc;

/// Look up a medicine by free-text name.
///
/// Misspellings and case/whitespace differences are tolerated. An unknown
/// name is still a `200` with apology text in the payload; only a missing
/// catalog is an error (`400 CATALOG_UNAVAILABLE`).
///
/// A body that is not JSON or lacks `medicine_name` is `400 BAD_REQUEST`.
///
/// Matching is CPU-bound, so it runs on the blocking pool. A panic there
/// surfaces as `500 INTERNAL_ERROR`.
pub async fn medicine_info(
    State(state): State<Arc<ServerState>>,
    payload: Result<Json<MedicineQuery>, JsonRejection>,
) -> ServerResult<Json<MedicineInfo>> {
    let Json(request) =
        payload.map_err(|rejection| ServerError::BadRequest(rejection.body_text()))?;
    let service = Arc::clone(&state.service);
    let info = tokio::task::spawn_blocking(move || service.lookup(&request)).await??;
    Ok(Json(info))
}
