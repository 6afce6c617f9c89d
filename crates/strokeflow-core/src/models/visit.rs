use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::eligibility::Eligibility;
use super::nihss::NihssScores;

/// Primary key of a visit record.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS,
)]
#[serde(transparent)]
#[ts(export)]
pub struct VisitId(#[ts(type = "number")] pub i64);

impl fmt::Display for VisitId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Vitals and labs captured at presentation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Vitals {
    /// mmHg
    pub systolic_bp: Option<u32>,
    /// mmHg
    pub diastolic_bp: Option<u32>,
    pub heart_rate: Option<u32>,
    pub respiratory_rate: Option<u32>,
    /// °C
    pub temperature: Option<f64>,
    pub oxygen_saturation: Option<u32>,
    /// mg/dL
    pub glucose: Option<f64>,
    pub inr: Option<f64>,
    pub platelet_count: Option<u32>,
}

/// Where a visit is in the technician to doctor hand-off.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum VisitStatus {
    /// Technician is still collecting data.
    #[default]
    InProgress,
    SentToDoctor,
    #[serde(alias = "completed")]
    Finalized,
}

impl VisitStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            VisitStatus::InProgress => "in_progress",
            VisitStatus::SentToDoctor => "sent_to_doctor",
            VisitStatus::Finalized => "finalized",
        }
    }
}

impl fmt::Display for VisitStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A stroke visit as persisted by the record store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Visit {
    pub id: VisitId,
    /// Per-patient sequential code, e.g. `P003-V001`.
    pub code: String,
    pub patient_code: String,
    pub created_at: jiff::Timestamp,
    #[serde(default)]
    pub status: VisitStatus,
    /// Doctor the case was sent to for review.
    #[serde(default)]
    pub doctor_username: Option<String>,
    #[serde(default)]
    pub technician_notes: Option<String>,
    pub onset_time: Option<jiff::Timestamp>,
    #[serde(default)]
    pub vitals: Vitals,
    pub nihss_items: Option<NihssScores>,
    pub nihss_score: Option<u32>,
    pub scan_path: Option<String>,
    pub prediction_label: Option<String>,
    pub prediction_confidence: Option<f64>,
    /// Last definitive eligibility decision. Never holds `Indeterminate`.
    pub tpa_eligibility: Option<Eligibility>,
    pub tpa_reason: Option<String>,
}

impl Visit {
    /// The read model consumed by the eligibility evaluator.
    pub fn snapshot(&self) -> ClinicalSnapshot {
        ClinicalSnapshot {
            onset_time: self.onset_time,
            scan_path: self.scan_path.clone(),
            prediction_label: self.prediction_label.clone(),
            nihss_score: self.nihss_score,
            systolic_bp: self.vitals.systolic_bp,
            diastolic_bp: self.vitals.diastolic_bp,
            inr: self.vitals.inr,
            glucose: self.vitals.glucose,
        }
    }

    /// Status label for the recorded tPA result.
    pub fn tpa_status(&self) -> &'static str {
        match (self.tpa_eligibility, &self.tpa_reason) {
            (Some(eligibility), _) => eligibility.display_status(),
            (None, Some(_)) => Eligibility::Indeterminate.display_status(),
            (None, None) => "Not evaluated",
        }
    }
}

/// Fields supplied when creating a visit. The store assigns the id and the
/// per-patient code.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewVisit {
    pub patient_code: String,
    pub created_at: jiff::Timestamp,
}

impl NewVisit {
    pub fn into_visit(self, id: VisitId, code: String) -> Visit {
        Visit {
            id,
            code,
            patient_code: self.patient_code,
            created_at: self.created_at,
            status: VisitStatus::InProgress,
            doctor_username: None,
            technician_notes: None,
            onset_time: None,
            vitals: Vitals::default(),
            nihss_items: None,
            nihss_score: None,
            scan_path: None,
            prediction_label: None,
            prediction_confidence: None,
            tpa_eligibility: None,
            tpa_reason: None,
        }
    }
}

/// Everything the eligibility protocol looks at. Every field is optional:
/// clinical data is routinely incomplete.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ClinicalSnapshot {
    pub onset_time: Option<jiff::Timestamp>,
    pub scan_path: Option<String>,
    pub prediction_label: Option<String>,
    pub nihss_score: Option<u32>,
    pub systolic_bp: Option<u32>,
    pub diastolic_bp: Option<u32>,
    pub inr: Option<f64>,
    pub glucose: Option<f64>,
}
