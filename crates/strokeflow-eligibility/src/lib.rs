//! strokeflow-eligibility
//!
//! tPA eligibility protocol. A pure function of a clinical snapshot and an
//! explicit "now"; never reads the clock or touches storage.

pub mod rules;
pub mod thresholds;

use jiff::Timestamp;

use strokeflow_core::models::eligibility::{Eligibility, Verdict};
use strokeflow_core::models::visit::ClinicalSnapshot;

use rules::{protocol_rules, Outcome, Rule, RuleContext};

pub const ALL_CRITERIA_MET: &str = "All criteria met. Patient is eligible for tPA.";

/// Run the standard protocol against `snapshot` as of `now`.
pub fn evaluate(snapshot: &ClinicalSnapshot, now: Timestamp) -> Verdict {
    evaluate_with(&protocol_rules(), snapshot, now)
}

/// Run an arbitrary rule chain. Stops at the first terminal outcome; the
/// returned reasons are the warnings gathered so far plus the terminal reason.
/// Falling off the end is `Eligible`.
pub fn evaluate_with(rules: &[Box<dyn Rule>], snapshot: &ClinicalSnapshot, now: Timestamp) -> Verdict {
    let mut reasons: Vec<String> = Vec::new();

    for rule in rules {
        let ctx = RuleContext {
            snapshot,
            now,
            reasons: &reasons,
        };
        match rule.check(&ctx) {
            Outcome::Continue => {}
            Outcome::Warn(reason) => {
                tracing::debug!(rule = rule.id(), reason = %reason, "protocol warning");
                reasons.push(reason);
            }
            Outcome::Terminal(eligibility, reason) => {
                tracing::debug!(rule = rule.id(), ?eligibility, "protocol stopped");
                reasons.push(reason);
                return Verdict::new(eligibility, reasons);
            }
        }
    }

    reasons.push(ALL_CRITERIA_MET.to_string());
    Verdict::new(Eligibility::Eligible, reasons)
}
