use std::collections::HashMap;

use axum::extract::{Path, State};
use axum::Json;
use serde::{Deserialize, Serialize};

use strokeflow_core::models::nihss::NihssScores;
use strokeflow_core::models::visit::VisitId;
use strokeflow_nihss::scoring::{item_definitions, validate_scores, ItemDefinition, Severity, ValidationError};
use strokeflow_nihss::translate_raw_exam;
use strokeflow_workflow::nihss::{self, NihssSummary};

use crate::error::ApiError;
use crate::state::AppState;

pub async fn list_items() -> Json<&'static [ItemDefinition]> {
    Json(item_definitions())
}

#[derive(Serialize)]
pub struct Calculation {
    total: u32,
    severity: Severity,
    items: NihssScores,
    warnings: Vec<ValidationError>,
}

/// Score a raw exam form without touching any visit.
pub async fn calculate(Json(raw): Json<HashMap<String, u32>>) -> Json<Calculation> {
    let items = translate_raw_exam(&raw);
    let total = items.total();
    Json(Calculation {
        total,
        severity: Severity::from_total(total),
        warnings: validate_scores(&items),
        items,
    })
}

pub async fn get_visit_scores(
    State(state): State<AppState>,
    Path(id): Path<VisitId>,
) -> Result<Json<NihssSummary>, ApiError> {
    Ok(Json(nihss::get_scores(state.store.as_ref(), id).await?))
}

/// Either the 13 named items or the raw exam form.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoresBody {
    Items(HashMap<String, u32>),
    Raw(HashMap<String, u32>),
}

pub async fn save_visit_scores(
    State(state): State<AppState>,
    Path(id): Path<VisitId>,
    Json(body): Json<ScoresBody>,
) -> Result<Json<NihssSummary>, ApiError> {
    let store = state.store.as_ref();
    match &body {
        ScoresBody::Items(items) => nihss::save_scores(store, id, items).await?,
        ScoresBody::Raw(raw) => nihss::save_raw_exam(store, id, raw).await?,
    };
    Ok(Json(nihss::get_scores(store, id).await?))
}
