use std::collections::HashMap;

use jiff::{SignedDuration, Timestamp};
use strokeflow_core::models::eligibility::Eligibility;
use strokeflow_core::models::visit::{VisitId, Vitals};
use strokeflow_storage::memory::MemoryStore;
use strokeflow_storage::store::VisitStore;
use strokeflow_workflow::error::WorkflowError;
use strokeflow_workflow::nihss::save_scores;
use strokeflow_workflow::scan::{record_scan_result, Prediction, ScanResult};
use strokeflow_workflow::tpa::{evaluate_and_record, evaluate_visit};
use strokeflow_workflow::visits::{create_visit, record_vitals, set_onset, OnsetEntry};

fn now() -> Timestamp {
    "2025-06-01T12:00:00Z".parse().unwrap()
}

fn nominal_vitals() -> Vitals {
    Vitals {
        systolic_bp: Some(150),
        diastolic_bp: Some(90),
        glucose: Some(120.0),
        inr: Some(1.2),
        ..Default::default()
    }
}

/// Visit with onset an hour ago, nominal vitals and NIHSS 10, no scan yet.
async fn prepared_visit(store: &MemoryStore) -> VisitId {
    let visit = create_visit(store, "P001", now()).await.unwrap();
    set_onset(
        store,
        visit.id,
        &OnsetEntry::Elapsed {
            hours: 1,
            minutes: 0,
        },
        now(),
    )
    .await
    .unwrap();
    record_vitals(store, visit.id, nominal_vitals()).await.unwrap();
    let items: HashMap<String, u32> = [("consciousness", 2), ("motor_arm_left", 4), ("language", 4)]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v))
        .collect();
    save_scores(store, visit.id, &items).await.unwrap();
    visit.id
}

fn ischemic_scan() -> ScanResult {
    ScanResult {
        scan_path: "data/uploads/scan_1.png".to_string(),
        prediction: Some(Prediction {
            label: "Ischemic Stroke".to_string(),
            confidence: 91.5,
            probabilities: Vec::new(),
        }),
    }
}

#[tokio::test]
async fn missing_visit_is_not_found() {
    let store = MemoryStore::new();
    assert!(matches!(
        evaluate_visit(&store, VisitId(1), now()).await,
        Err(WorkflowError::NotFound(VisitId(1)))
    ));
    assert!(matches!(
        evaluate_and_record(&store, VisitId(1), now()).await,
        Err(WorkflowError::NotFound(_))
    ));
}

#[tokio::test]
async fn evaluate_visit_does_not_write() {
    let store = MemoryStore::new();
    let id = prepared_visit(&store).await;
    let verdict = evaluate_visit(&store, id, now()).await.unwrap();
    assert_eq!(verdict.eligibility, Eligibility::Indeterminate);

    let visit = store.get(id).await.unwrap();
    assert!(visit.tpa_reason.is_none());
    assert!(visit.tpa_eligibility.is_none());
}

#[tokio::test]
async fn indeterminate_records_reason_only() {
    let store = MemoryStore::new();
    let id = prepared_visit(&store).await;

    let verdict = evaluate_and_record(&store, id, now()).await.unwrap();
    assert_eq!(verdict.eligibility, Eligibility::Indeterminate);

    let visit = store.get(id).await.unwrap();
    assert!(visit.tpa_eligibility.is_none());
    assert_eq!(visit.tpa_reason.as_deref(), Some(verdict.reason_text().as_str()));
    assert_eq!(visit.tpa_status(), "Indeterminate/no scan");
}

#[tokio::test]
async fn indeterminate_does_not_overwrite_a_recorded_decision() {
    let store = MemoryStore::new();
    let id = prepared_visit(&store).await;
    record_scan_result(&store, id, ischemic_scan(), now()).await.unwrap();
    assert_eq!(
        store.get(id).await.unwrap().tpa_eligibility,
        Some(Eligibility::Eligible)
    );

    // Scan is later cleared by an external correction.
    let mut visit = store.get(id).await.unwrap();
    visit.scan_path = None;
    store.put(&visit).await.unwrap();

    let verdict = evaluate_and_record(&store, id, now()).await.unwrap();
    assert_eq!(verdict.eligibility, Eligibility::Indeterminate);
    let visit = store.get(id).await.unwrap();
    assert_eq!(visit.tpa_eligibility, Some(Eligibility::Eligible));
    assert!(visit.tpa_reason.unwrap().contains("No scan available"));
}

#[tokio::test]
async fn definitive_verdict_replaces_earlier_one() {
    let store = MemoryStore::new();
    let id = prepared_visit(&store).await;
    record_scan_result(&store, id, ischemic_scan(), now()).await.unwrap();

    let later = now() + SignedDuration::from_hours(5);
    let verdict = evaluate_and_record(&store, id, later).await.unwrap();
    assert_eq!(verdict.eligibility, Eligibility::Ineligible);
    assert!(verdict.reasons[0].contains("6.0 hours"));

    let visit = store.get(id).await.unwrap();
    assert_eq!(visit.tpa_eligibility, Some(Eligibility::Ineligible));
    assert_eq!(visit.tpa_status(), "NOT Eligible");
}

#[tokio::test]
async fn onset_never_entered_is_ineligible() {
    let store = MemoryStore::new();
    let visit = create_visit(&store, "P001", now()).await.unwrap();
    let verdict = evaluate_and_record(&store, visit.id, now()).await.unwrap();
    assert_eq!(verdict.eligibility, Eligibility::Ineligible);
    assert!(verdict.reasons[0].contains("not recorded"));
}
