use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use strokeflow_core::error::CoreError;
use strokeflow_core::models::visit::{NewVisit, Visit, VisitId, VisitStatus, Vitals};
use strokeflow_core::time::{onset_from_elapsed, parse_onset};
use strokeflow_nihss::scoring::{to_structured_input, Severity};
use strokeflow_storage::store::VisitStore;

use crate::error::WorkflowError;

/// Open a new visit for a patient, numbered after the patient's existing
/// visits (`P003-V001`, `P003-V002`, ...).
pub async fn create_visit(
    store: &dyn VisitStore,
    patient_code: &str,
    now: Timestamp,
) -> Result<Visit, WorkflowError> {
    let visit = store
        .insert(NewVisit {
            patient_code: patient_code.to_string(),
            created_at: now,
        })
        .await?;
    tracing::info!(visit_id = %visit.id, code = %visit.code, "visit created");
    Ok(visit)
}

pub async fn get_visit(store: &dyn VisitStore, id: VisitId) -> Result<Visit, WorkflowError> {
    Ok(store.get(id).await?)
}

pub async fn find_visit(store: &dyn VisitStore, code: &str) -> Result<Option<Visit>, WorkflowError> {
    Ok(store.find_by_code(code).await?)
}

pub async fn list_visits(
    store: &dyn VisitStore,
    patient_code: &str,
) -> Result<Vec<Visit>, WorkflowError> {
    Ok(store.list_for_patient(patient_code).await?)
}

/// Replace the vitals block of a visit with what the technician entered.
pub async fn record_vitals(
    store: &dyn VisitStore,
    id: VisitId,
    vitals: Vitals,
) -> Result<Visit, WorkflowError> {
    let mut visit = store.get(id).await?;
    visit.vitals = vitals;
    store.put(&visit).await?;
    tracing::info!(visit_id = %id, "vitals recorded");
    Ok(visit)
}

/// Replace the technician's free-text notes. Blank text clears them.
pub async fn record_notes(
    store: &dyn VisitStore,
    id: VisitId,
    notes: &str,
) -> Result<Visit, WorkflowError> {
    let mut visit = store.get(id).await?;
    let notes = notes.trim();
    visit.technician_notes = (!notes.is_empty()).then(|| notes.to_string());
    store.put(&visit).await?;
    tracing::info!(visit_id = %id, "technician notes recorded");
    Ok(visit)
}

/// Hand a visit to a doctor for review. Reassigning an unfinalized visit
/// replaces the doctor.
pub async fn assign_doctor(
    store: &dyn VisitStore,
    id: VisitId,
    doctor_username: &str,
) -> Result<Visit, WorkflowError> {
    let mut visit = store.get(id).await?;
    if visit.status == VisitStatus::Finalized {
        return Err(WorkflowError::Finalized(id));
    }
    visit.doctor_username = Some(doctor_username.to_string());
    visit.status = VisitStatus::SentToDoctor;
    store.put(&visit).await?;
    tracing::info!(visit_id = %id, doctor = %doctor_username, "visit sent to doctor");
    Ok(visit)
}

/// Close a case after doctor review. Finalizing twice is a no-op.
pub async fn finalize(store: &dyn VisitStore, id: VisitId) -> Result<Visit, WorkflowError> {
    let mut visit = store.get(id).await?;
    if visit.status == VisitStatus::Finalized {
        return Ok(visit);
    }
    visit.status = VisitStatus::Finalized;
    store.put(&visit).await?;
    tracing::info!(visit_id = %id, "visit finalized");
    Ok(visit)
}

/// How an onset time was entered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum OnsetEntry {
    /// An explicit date-time; unzoned values are UTC.
    At { time: String },
    /// "Symptoms started this long ago."
    Elapsed { hours: u32, minutes: u32 },
    Unknown,
}

impl OnsetEntry {
    pub fn resolve(&self, now: Timestamp) -> Result<Option<Timestamp>, CoreError> {
        match self {
            OnsetEntry::At { time } => parse_onset(time).map(Some),
            OnsetEntry::Elapsed { hours, minutes } => Ok(onset_from_elapsed(now, *hours, *minutes)),
            OnsetEntry::Unknown => Ok(None),
        }
    }
}

pub async fn set_onset(
    store: &dyn VisitStore,
    id: VisitId,
    entry: &OnsetEntry,
    now: Timestamp,
) -> Result<Visit, WorkflowError> {
    let onset = entry.resolve(now)?;
    let mut visit = store.get(id).await?;
    visit.onset_time = onset;
    store.put(&visit).await?;
    tracing::info!(visit_id = %id, onset = ?onset, "onset time recorded");
    Ok(visit)
}

/// Plain-text case summary handed to the treatment-plan generator.
pub fn clinical_summary(visit: &Visit) -> String {
    fn or_na<T: std::fmt::Display>(value: Option<T>) -> String {
        value.map_or_else(|| "N/A".to_string(), |v| v.to_string())
    }

    let vitals = &visit.vitals;
    let mut out = format!("## Visit {}\n\n", visit.code);
    out.push_str(&format!("- Status: {}\n", visit.status));
    out.push_str(&format!(
        "- Blood Pressure: {}/{} mmHg\n",
        or_na(vitals.systolic_bp),
        or_na(vitals.diastolic_bp)
    ));
    out.push_str(&format!("- Heart Rate: {} bpm\n", or_na(vitals.heart_rate)));
    out.push_str(&format!("- Temperature: {} °C\n", or_na(vitals.temperature)));
    out.push_str(&format!("- Oxygen Saturation: {}%\n", or_na(vitals.oxygen_saturation)));
    out.push_str(&format!("- Glucose: {} mg/dL\n", or_na(vitals.glucose)));
    out.push_str(&format!("- INR: {}\n", or_na(vitals.inr)));

    match visit.nihss_score {
        Some(total) => out.push_str(&format!(
            "- NIHSS Score: {total} ({} stroke)\n",
            Severity::from_total(total).label()
        )),
        None => out.push_str("- NIHSS Score: N/A\n"),
    }
    out.push_str(&format!(
        "- Scan Result: {}\n",
        visit.prediction_label.as_deref().unwrap_or("N/A")
    ));
    out.push_str(&format!("- tPA Status: {}\n", visit.tpa_status()));
    if let Some(notes) = &visit.technician_notes {
        out.push_str(&format!("- Technician Notes: {notes}\n"));
    }

    if let Some(items) = &visit.nihss_items {
        out.push('\n');
        out.push_str(&to_structured_input(items));
    }
    out
}
