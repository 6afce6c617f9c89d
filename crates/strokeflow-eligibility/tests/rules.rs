use jiff::{SignedDuration, Timestamp};
use strokeflow_core::models::eligibility::Eligibility;
use strokeflow_core::models::visit::ClinicalSnapshot;
use strokeflow_eligibility::evaluate_with;
use strokeflow_eligibility::rules::*;

fn now() -> Timestamp {
    "2025-06-01T12:00:00Z".parse().unwrap()
}

fn check(rule: &dyn Rule, snapshot: &ClinicalSnapshot) -> Outcome {
    rule.check(&RuleContext {
        snapshot,
        now: now(),
        reasons: &[],
    })
}

#[test]
fn protocol_order_is_fixed() {
    let ids: Vec<String> = protocol_rules().iter().map(|r| r.id().to_string()).collect();
    assert_eq!(
        ids,
        [
            "onset_recorded",
            "treatment_window",
            "imaging_available",
            "hemorrhage_screen",
            "nihss_recorded",
            "nihss_floor",
            "nihss_ceiling",
            "systolic_bp",
            "diastolic_bp",
            "inr",
            "glucose",
        ]
    );
}

#[test]
fn treatment_window_ignores_missing_onset() {
    assert_eq!(check(&TreatmentWindow, &ClinicalSnapshot::default()), Outcome::Continue);
}

#[test]
fn treatment_window_accepts_future_onset() {
    let snapshot = ClinicalSnapshot {
        onset_time: Some(now() + SignedDuration::from_hours(1)),
        ..Default::default()
    };
    assert_eq!(check(&TreatmentWindow, &snapshot), Outcome::Continue);
}

#[test]
fn imaging_missing_is_terminal_indeterminate() {
    match check(&ImagingAvailable, &ClinicalSnapshot::default()) {
        Outcome::Terminal(Eligibility::Indeterminate, reason) => {
            assert!(reason.contains("No scan available"))
        }
        other => panic!("unexpected outcome {other:?}"),
    }
}

#[test]
fn hemorrhage_markers_match_case_insensitively() {
    for label in [
        "Hemorrhagic Stroke",
        "hemorrhagic transformation",
        "Haemorrhagic stroke",
        "Subdural haemorrhage",
        "ACTIVE BLEEDING",
        "Intracerebral",
        "ICH",
        "intraparenchymal hemorrhage",
        "Subarachnoid",
    ] {
        assert!(HemorrhageScreen::indicates_hemorrhage(label), "{label}");
    }
}

#[test]
fn hemorrhagic_label_stops_the_screen() {
    let snapshot = ClinicalSnapshot {
        prediction_label: Some("Hemorrhagic Stroke".to_string()),
        ..Default::default()
    };
    match check(&HemorrhageScreen, &snapshot) {
        Outcome::Terminal(Eligibility::Ineligible, reason) => assert!(reason.contains("hemorrhage")),
        other => panic!("unexpected outcome {other:?}"),
    }
}

#[test]
fn ischemic_and_normal_labels_pass_the_screen() {
    for label in ["Ischemic Stroke", "Normal", "Unknown"] {
        assert!(!HemorrhageScreen::indicates_hemorrhage(label), "{label}");
    }
}

#[test]
fn nihss_ceiling_only_warns() {
    let snapshot = ClinicalSnapshot {
        nihss_score: Some(26),
        ..Default::default()
    };
    assert!(matches!(check(&NihssCeiling, &snapshot), Outcome::Warn(_)));

    let at_limit = ClinicalSnapshot {
        nihss_score: Some(25),
        ..Default::default()
    };
    assert_eq!(check(&NihssCeiling, &at_limit), Outcome::Continue);
}

#[test]
fn pressure_limits_are_exclusive() {
    let at_limit = ClinicalSnapshot {
        systolic_bp: Some(185),
        diastolic_bp: Some(110),
        ..Default::default()
    };
    assert_eq!(check(&SystolicPressure, &at_limit), Outcome::Continue);
    assert_eq!(check(&DiastolicPressure, &at_limit), Outcome::Continue);
}

#[test]
fn inr_at_limit_passes() {
    let snapshot = ClinicalSnapshot {
        inr: Some(1.7),
        ..Default::default()
    };
    assert_eq!(check(&InrLimit, &snapshot), Outcome::Continue);
}

#[test]
fn zero_glucose_is_out_of_range() {
    let snapshot = ClinicalSnapshot {
        glucose: Some(0.0),
        ..Default::default()
    };
    assert!(matches!(
        check(&GlucoseRange, &snapshot),
        Outcome::Terminal(Eligibility::Ineligible, _)
    ));
}

struct WarnOnce;

impl Rule for WarnOnce {
    fn id(&self) -> &str {
        "warn_once"
    }

    fn check(&self, _ctx: &RuleContext<'_>) -> Outcome {
        Outcome::Warn("first warning".to_string())
    }
}

/// Stops once it has seen an earlier warning in the accumulator.
struct StopAfterWarning;

impl Rule for StopAfterWarning {
    fn id(&self) -> &str {
        "stop_after_warning"
    }

    fn check(&self, ctx: &RuleContext<'_>) -> Outcome {
        if ctx.reasons.is_empty() {
            Outcome::Continue
        } else {
            Outcome::Terminal(Eligibility::Ineligible, format!("saw {}", ctx.reasons.len()))
        }
    }
}

#[test]
fn rules_see_the_reason_accumulator() {
    let rules: Vec<Box<dyn Rule>> = vec![Box::new(WarnOnce), Box::new(StopAfterWarning)];
    let verdict = evaluate_with(&rules, &ClinicalSnapshot::default(), now());
    assert_eq!(verdict.eligibility, Eligibility::Ineligible);
    assert_eq!(verdict.reasons, vec!["first warning", "saw 1"]);
}

#[test]
fn empty_chain_is_eligible() {
    let verdict = evaluate_with(&[], &ClinicalSnapshot::default(), now());
    assert_eq!(verdict.eligibility, Eligibility::Eligible);
}
