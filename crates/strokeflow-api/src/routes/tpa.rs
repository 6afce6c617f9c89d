use axum::extract::{Path, State};
use axum::Json;
use jiff::Timestamp;
use serde::Serialize;

use strokeflow_core::models::eligibility::{Eligibility, Verdict};
use strokeflow_core::models::visit::VisitId;
use strokeflow_workflow::tpa;

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Serialize)]
pub struct TpaResponse {
    visit_id: VisitId,
    eligibility: Eligibility,
    status: &'static str,
    reasons: Vec<String>,
}

impl TpaResponse {
    fn new(visit_id: VisitId, verdict: Verdict) -> Self {
        Self {
            visit_id,
            eligibility: verdict.eligibility,
            status: verdict.eligibility.display_status(),
            reasons: verdict.reasons,
        }
    }
}

pub async fn evaluate(
    State(state): State<AppState>,
    Path(id): Path<VisitId>,
) -> Result<Json<TpaResponse>, ApiError> {
    let verdict = tpa::evaluate_visit(state.store.as_ref(), id, Timestamp::now()).await?;
    Ok(Json(TpaResponse::new(id, verdict)))
}

pub async fn evaluate_and_record(
    State(state): State<AppState>,
    Path(id): Path<VisitId>,
) -> Result<Json<TpaResponse>, ApiError> {
    let verdict = tpa::evaluate_and_record(state.store.as_ref(), id, Timestamp::now()).await?;
    Ok(Json(TpaResponse::new(id, verdict)))
}
