//! The protocol as an ordered chain of rules.
//!
//! Order is clinically load-bearing: the chain stops at the first terminal
//! outcome, so earlier rules shadow later ones.

use jiff::Timestamp;

use strokeflow_core::models::eligibility::Eligibility;
use strokeflow_core::models::visit::ClinicalSnapshot;
use strokeflow_core::time::hours_between;

use crate::thresholds::*;

/// What a rule sees.
pub struct RuleContext<'a> {
    pub snapshot: &'a ClinicalSnapshot,
    pub now: Timestamp,
    /// Reasons accumulated by earlier rules.
    pub reasons: &'a [String],
}

/// Result of a single rule.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Continue,
    /// Record a non-disqualifying reason and keep going.
    Warn(String),
    /// Stop with this verdict.
    Terminal(Eligibility, String),
}

impl Outcome {
    fn ineligible(reason: impl Into<String>) -> Self {
        Outcome::Terminal(Eligibility::Ineligible, reason.into())
    }
}

/// One check of the tPA eligibility protocol.
pub trait Rule: Send + Sync {
    /// Stable identifier used in logs (e.g. "treatment_window").
    fn id(&self) -> &str;

    fn check(&self, ctx: &RuleContext<'_>) -> Outcome;
}

/// The full protocol, in evaluation order.
pub fn protocol_rules() -> Vec<Box<dyn Rule>> {
    vec![
        Box::new(OnsetRecorded),
        Box::new(TreatmentWindow),
        Box::new(ImagingAvailable),
        Box::new(HemorrhageScreen),
        Box::new(NihssRecorded),
        Box::new(NihssFloor),
        Box::new(NihssCeiling),
        Box::new(SystolicPressure),
        Box::new(DiastolicPressure),
        Box::new(InrLimit),
        Box::new(GlucoseRange),
    ]
}

/// Onset time must be known.
///
/// Missing onset yields `Ineligible` while missing imaging yields
/// `Indeterminate`. Kept as-is pending product-owner clarification.
pub struct OnsetRecorded;

impl Rule for OnsetRecorded {
    fn id(&self) -> &str {
        "onset_recorded"
    }

    fn check(&self, ctx: &RuleContext<'_>) -> Outcome {
        match ctx.snapshot.onset_time {
            Some(_) => Outcome::Continue,
            None => Outcome::ineligible("Time since onset not recorded."),
        }
    }
}

pub struct TreatmentWindow;

impl Rule for TreatmentWindow {
    fn id(&self) -> &str {
        "treatment_window"
    }

    fn check(&self, ctx: &RuleContext<'_>) -> Outcome {
        let Some(onset) = ctx.snapshot.onset_time else {
            return Outcome::Continue;
        };
        let hours = hours_between(onset, ctx.now);
        if hours > TREATMENT_WINDOW_HOURS {
            Outcome::ineligible(format!(
                "Time since onset is {hours:.1} hours (above {TREATMENT_WINDOW_HOURS}h window)."
            ))
        } else {
            Outcome::Continue
        }
    }
}

/// No scan means the stroke type is unknown: the protocol cannot proceed,
/// which is not the same as failing it.
pub struct ImagingAvailable;

impl Rule for ImagingAvailable {
    fn id(&self) -> &str {
        "imaging_available"
    }

    fn check(&self, ctx: &RuleContext<'_>) -> Outcome {
        match ctx.snapshot.scan_path {
            Some(_) => Outcome::Continue,
            None => Outcome::Terminal(
                Eligibility::Indeterminate,
                "No scan available to confirm type of stroke.".to_string(),
            ),
        }
    }
}

pub struct HemorrhageScreen;

impl HemorrhageScreen {
    pub fn indicates_hemorrhage(label: &str) -> bool {
        let label = label.to_lowercase();
        HEMORRHAGE_MARKERS
            .iter()
            .any(|marker| label.contains(marker))
    }
}

impl Rule for HemorrhageScreen {
    fn id(&self) -> &str {
        "hemorrhage_screen"
    }

    fn check(&self, ctx: &RuleContext<'_>) -> Outcome {
        match ctx.snapshot.prediction_label.as_deref() {
            Some(label) if Self::indicates_hemorrhage(label) => Outcome::ineligible(
                "Imaging indicates intracranial hemorrhage/bleeding; tPA contraindicated.",
            ),
            _ => Outcome::Continue,
        }
    }
}

pub struct NihssRecorded;

impl Rule for NihssRecorded {
    fn id(&self) -> &str {
        "nihss_recorded"
    }

    fn check(&self, ctx: &RuleContext<'_>) -> Outcome {
        match ctx.snapshot.nihss_score {
            Some(_) => Outcome::Continue,
            None => Outcome::ineligible("NIHSS score missing, cannot evaluate."),
        }
    }
}

pub struct NihssFloor;

impl Rule for NihssFloor {
    fn id(&self) -> &str {
        "nihss_floor"
    }

    fn check(&self, ctx: &RuleContext<'_>) -> Outcome {
        match ctx.snapshot.nihss_score {
            Some(score) if score < NIHSS_MIN => {
                Outcome::ineligible(format!("NIHSS score {score} is too low (<{NIHSS_MIN})."))
            }
            _ => Outcome::Continue,
        }
    }
}

/// Very high scores raise bleeding risk but the call stays with the physician.
pub struct NihssCeiling;

impl Rule for NihssCeiling {
    fn id(&self) -> &str {
        "nihss_ceiling"
    }

    fn check(&self, ctx: &RuleContext<'_>) -> Outcome {
        match ctx.snapshot.nihss_score {
            Some(score) if score > NIHSS_HIGH_RISK => Outcome::Warn(format!(
                "NIHSS score {score} is very high (>{NIHSS_HIGH_RISK}); tPA risk elevated, physician discretion."
            )),
            _ => Outcome::Continue,
        }
    }
}

pub struct SystolicPressure;

impl Rule for SystolicPressure {
    fn id(&self) -> &str {
        "systolic_bp"
    }

    fn check(&self, ctx: &RuleContext<'_>) -> Outcome {
        match ctx.snapshot.systolic_bp {
            Some(bp) if bp > SYSTOLIC_MAX => {
                Outcome::ineligible(format!("Systolic BP {bp} is above {SYSTOLIC_MAX} mmHg."))
            }
            _ => Outcome::Continue,
        }
    }
}

pub struct DiastolicPressure;

impl Rule for DiastolicPressure {
    fn id(&self) -> &str {
        "diastolic_bp"
    }

    fn check(&self, ctx: &RuleContext<'_>) -> Outcome {
        match ctx.snapshot.diastolic_bp {
            Some(bp) if bp > DIASTOLIC_MAX => {
                Outcome::ineligible(format!("Diastolic BP {bp} is above {DIASTOLIC_MAX} mmHg."))
            }
            _ => Outcome::Continue,
        }
    }
}

pub struct InrLimit;

impl Rule for InrLimit {
    fn id(&self) -> &str {
        "inr"
    }

    fn check(&self, ctx: &RuleContext<'_>) -> Outcome {
        match ctx.snapshot.inr {
            Some(inr) if inr > INR_MAX => Outcome::ineligible(format!(
                "INR {inr} is above {INR_MAX} (bleeding risk too high)."
            )),
            _ => Outcome::Continue,
        }
    }
}

pub struct GlucoseRange;

impl Rule for GlucoseRange {
    fn id(&self) -> &str {
        "glucose"
    }

    fn check(&self, ctx: &RuleContext<'_>) -> Outcome {
        match ctx.snapshot.glucose {
            Some(glucose) if !(GLUCOSE_MIN..=GLUCOSE_MAX).contains(&glucose) => {
                Outcome::ineligible(format!(
                    "Glucose {glucose} mg/dL is outside safe tPA range ({GLUCOSE_MIN}-{GLUCOSE_MAX})."
                ))
            }
            _ => Outcome::Continue,
        }
    }
}
