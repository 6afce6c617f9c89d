use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use strokeflow_core::models::eligibility::Verdict;
use strokeflow_core::models::visit::VisitId;
use strokeflow_eligibility::evaluate;
use strokeflow_storage::store::VisitStore;

use crate::error::WorkflowError;
use crate::tpa::apply_verdict;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassProbability {
    pub label: String,
    /// Percent, 0-100.
    pub confidence: f64,
}

/// Output of the image classifier for one scan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    pub label: String,
    pub confidence: f64,
    #[serde(default)]
    pub probabilities: Vec<ClassProbability>,
}

/// A scan that has been stored and (maybe) classified. `prediction` is
/// `None` when the classifier was unavailable or failed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScanResult {
    pub scan_path: String,
    pub prediction: Option<Prediction>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScanOutcome {
    pub visit_id: VisitId,
    pub scan_path: String,
    pub prediction_label: Option<String>,
    pub prediction_confidence: Option<f64>,
    pub probabilities: Vec<ClassProbability>,
    pub verdict: Verdict,
}

/// Attach a scan and its classification to a visit, then re-run and record
/// tPA eligibility against the updated visit.
pub async fn record_scan_result(
    store: &dyn VisitStore,
    id: VisitId,
    result: ScanResult,
    now: Timestamp,
) -> Result<ScanOutcome, WorkflowError> {
    let mut visit = store.get(id).await?;

    if let Some(previous) = &visit.scan_path
        && previous != &result.scan_path
    {
        tracing::info!(visit_id = %id, previous = %previous, "replacing scan");
    }

    let (label, confidence, probabilities) = match result.prediction {
        Some(p) => (Some(p.label), Some(p.confidence), p.probabilities),
        None => {
            tracing::warn!(visit_id = %id, "scan stored without a classification");
            (None, None, Vec::new())
        }
    };

    visit.scan_path = Some(result.scan_path.clone());
    visit.prediction_label = label.clone();
    visit.prediction_confidence = confidence;

    let verdict = evaluate(&visit.snapshot(), now);
    apply_verdict(&mut visit, &verdict);
    store.put(&visit).await?;

    tracing::info!(
        visit_id = %id,
        label = ?label,
        eligibility = ?verdict.eligibility,
        "scan recorded"
    );

    Ok(ScanOutcome {
        visit_id: id,
        scan_path: result.scan_path,
        prediction_label: label,
        prediction_confidence: confidence,
        probabilities,
        verdict,
    })
}
