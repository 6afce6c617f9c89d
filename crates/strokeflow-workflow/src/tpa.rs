use jiff::Timestamp;

use strokeflow_core::models::eligibility::Verdict;
use strokeflow_core::models::visit::{Visit, VisitId};
use strokeflow_eligibility::evaluate;
use strokeflow_storage::store::VisitStore;

use crate::error::WorkflowError;

/// Evaluate a stored visit without recording anything.
pub async fn evaluate_visit(
    store: &dyn VisitStore,
    id: VisitId,
    now: Timestamp,
) -> Result<Verdict, WorkflowError> {
    let visit = store.get(id).await?;
    Ok(evaluate(&visit.snapshot(), now))
}

/// Write a verdict onto a visit.
///
/// The reason text is always replaced. The recorded decision is only
/// replaced by a definitive verdict: an `Indeterminate` result leaves any
/// earlier `Eligible`/`Ineligible` in place.
pub fn apply_verdict(visit: &mut Visit, verdict: &Verdict) {
    visit.tpa_reason = Some(verdict.reason_text());
    if verdict.eligibility.is_definitive() {
        visit.tpa_eligibility = Some(verdict.eligibility);
    }
}

/// Evaluate a stored visit and persist the verdict onto it.
pub async fn evaluate_and_record(
    store: &dyn VisitStore,
    id: VisitId,
    now: Timestamp,
) -> Result<Verdict, WorkflowError> {
    let mut visit = store.get(id).await?;
    let verdict = evaluate(&visit.snapshot(), now);
    apply_verdict(&mut visit, &verdict);
    store.put(&visit).await?;

    tracing::info!(
        visit_id = %id,
        eligibility = ?verdict.eligibility,
        reasons = verdict.reasons.len(),
        "tpa eligibility recorded"
    );
    Ok(verdict)
}
