use std::collections::HashMap;

use serde::Serialize;

use strokeflow_core::models::nihss::NihssScores;
use strokeflow_core::models::visit::{Visit, VisitId};
use strokeflow_nihss::scoring::{validate_scores, Severity};
use strokeflow_nihss::{scores_from_named_items, translate_raw_exam};
use strokeflow_storage::store::VisitStore;

use crate::error::WorkflowError;

/// NIHSS details as recorded on a visit.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NihssSummary {
    pub visit_id: VisitId,
    pub nihss_total: Option<u32>,
    pub severity: Option<Severity>,
    pub details: Option<NihssScores>,
}

/// Overwrite all 13 items on a visit from a name → value mapping and store
/// the recomputed total.
///
/// Unknown keys fail with `InvalidField` before anything is written.
pub async fn save_scores(
    store: &dyn VisitStore,
    id: VisitId,
    items: &HashMap<String, u32>,
) -> Result<Visit, WorkflowError> {
    let mut visit = store.get(id).await?;
    let scores = scores_from_named_items(items)?;
    write_scores(store, &mut visit, scores).await?;
    Ok(visit)
}

/// Same as [`save_scores`], starting from raw exam-form fields.
pub async fn save_raw_exam(
    store: &dyn VisitStore,
    id: VisitId,
    raw: &HashMap<String, u32>,
) -> Result<Visit, WorkflowError> {
    let mut visit = store.get(id).await?;
    write_scores(store, &mut visit, translate_raw_exam(raw)).await?;
    Ok(visit)
}

async fn write_scores(
    store: &dyn VisitStore,
    visit: &mut Visit,
    scores: NihssScores,
) -> Result<(), WorkflowError> {
    for issue in validate_scores(&scores) {
        tracing::warn!(
            visit_id = %visit.id,
            item = %issue.item,
            value = issue.value,
            "NIHSS item outside clinical range"
        );
    }

    let total = scores.total();
    visit.nihss_items = Some(scores);
    visit.nihss_score = Some(total);
    store.put(visit).await?;

    tracing::info!(visit_id = %visit.id, total, "NIHSS saved");
    Ok(())
}

pub async fn get_scores(store: &dyn VisitStore, id: VisitId) -> Result<NihssSummary, WorkflowError> {
    let visit = store.get(id).await?;
    Ok(NihssSummary {
        visit_id: visit.id,
        nihss_total: visit.nihss_score,
        severity: visit.nihss_score.map(Severity::from_total),
        details: visit.nihss_items,
    })
}
