use axum::extract::{Path, State};
use axum::Json;
use jiff::Timestamp;

use strokeflow_core::models::visit::VisitId;
use strokeflow_workflow::scan::{record_scan_result, ScanOutcome, ScanResult};

use crate::error::ApiError;
use crate::state::AppState;

pub async fn record_scan(
    State(state): State<AppState>,
    Path(id): Path<VisitId>,
    Json(result): Json<ScanResult>,
) -> Result<Json<ScanOutcome>, ApiError> {
    if result.scan_path.trim().is_empty() {
        return Err(ApiError::BadRequest("scan_path is required".to_string()));
    }
    let outcome = record_scan_result(state.store.as_ref(), id, result, Timestamp::now()).await?;
    Ok(Json(outcome))
}
