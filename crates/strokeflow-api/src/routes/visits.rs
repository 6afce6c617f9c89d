use axum::extract::{Path, State};
use axum::Json;
use jiff::Timestamp;
use serde::Deserialize;

use strokeflow_core::models::visit::{Visit, VisitId, Vitals};
use strokeflow_workflow::visits::{self, OnsetEntry};

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct CreateVisit {
    pub patient_code: String,
}

pub async fn create_visit(
    State(state): State<AppState>,
    Json(body): Json<CreateVisit>,
) -> Result<Json<Visit>, ApiError> {
    let patient_code = body.patient_code.trim();
    if patient_code.is_empty() {
        return Err(ApiError::BadRequest("patient_code is required".to_string()));
    }
    let visit = visits::create_visit(state.store.as_ref(), patient_code, Timestamp::now()).await?;
    Ok(Json(visit))
}

pub async fn get_visit(
    State(state): State<AppState>,
    Path(id): Path<VisitId>,
) -> Result<Json<Visit>, ApiError> {
    Ok(Json(visits::get_visit(state.store.as_ref(), id).await?))
}

pub async fn list_patient_visits(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Result<Json<Vec<Visit>>, ApiError> {
    Ok(Json(visits::list_visits(state.store.as_ref(), &code).await?))
}

pub async fn update_vitals(
    State(state): State<AppState>,
    Path(id): Path<VisitId>,
    Json(vitals): Json<Vitals>,
) -> Result<Json<Visit>, ApiError> {
    Ok(Json(visits::record_vitals(state.store.as_ref(), id, vitals).await?))
}

pub async fn update_onset(
    State(state): State<AppState>,
    Path(id): Path<VisitId>,
    Json(entry): Json<OnsetEntry>,
) -> Result<Json<Visit>, ApiError> {
    let visit = visits::set_onset(state.store.as_ref(), id, &entry, Timestamp::now()).await?;
    Ok(Json(visit))
}

pub async fn get_summary(
    State(state): State<AppState>,
    Path(id): Path<VisitId>,
) -> Result<String, ApiError> {
    let visit = visits::get_visit(state.store.as_ref(), id).await?;
    Ok(visits::clinical_summary(&visit))
}

#[derive(Debug, Deserialize)]
pub struct NotesBody {
    #[serde(default)]
    pub notes: String,
}

pub async fn update_notes(
    State(state): State<AppState>,
    Path(id): Path<VisitId>,
    Json(body): Json<NotesBody>,
) -> Result<Json<Visit>, ApiError> {
    Ok(Json(visits::record_notes(state.store.as_ref(), id, &body.notes).await?))
}

#[derive(Debug, Deserialize)]
pub struct AssignDoctor {
    pub doctor_username: String,
}

pub async fn assign_doctor(
    State(state): State<AppState>,
    Path(id): Path<VisitId>,
    Json(body): Json<AssignDoctor>,
) -> Result<Json<Visit>, ApiError> {
    let doctor = body.doctor_username.trim();
    if doctor.is_empty() {
        return Err(ApiError::BadRequest("doctor_username is required".to_string()));
    }
    Ok(Json(visits::assign_doctor(state.store.as_ref(), id, doctor).await?))
}

pub async fn finalize(
    State(state): State<AppState>,
    Path(id): Path<VisitId>,
) -> Result<Json<Visit>, ApiError> {
    Ok(Json(visits::finalize(state.store.as_ref(), id).await?))
}
