use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Outcome of the tPA eligibility protocol.
///
/// `Indeterminate` means the protocol could not reach a decision because
/// prerequisite data is missing. It is not a disqualification and must never
/// be rendered or stored as one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Eligibility {
    Eligible,
    Ineligible,
    Indeterminate,
}

impl Eligibility {
    /// Label shown to clinicians.
    pub fn display_status(&self) -> &'static str {
        match self {
            Eligibility::Eligible => "Eligible",
            Eligibility::Ineligible => "NOT Eligible",
            Eligibility::Indeterminate => "Indeterminate/no scan",
        }
    }

    /// Whether this is a definitive decision that may be recorded on a visit.
    pub fn is_definitive(&self) -> bool {
        !matches!(self, Eligibility::Indeterminate)
    }
}

impl fmt::Display for Eligibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_status())
    }
}

/// A verdict plus the ordered clinical statements that led to it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Verdict {
    pub eligibility: Eligibility,
    pub reasons: Vec<String>,
}

impl Verdict {
    pub fn new(eligibility: Eligibility, reasons: Vec<String>) -> Self {
        Self {
            eligibility,
            reasons,
        }
    }

    /// Reasons joined one per line, as stored on the visit record.
    pub fn reason_text(&self) -> String {
        self.reasons.join("\n")
    }

    pub fn is_eligible(&self) -> bool {
        self.eligibility == Eligibility::Eligible
    }
}
