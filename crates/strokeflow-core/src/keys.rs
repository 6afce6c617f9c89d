//! Storage key/path conventions.
//!
//! Pure string functions. These define the canonical layout of visit
//! documents in a file-backed store.

use crate::models::visit::VisitId;

pub const VISITS_PREFIX: &str = "visits/";

pub fn visit(id: VisitId) -> String {
    format!("visits/{id}.json")
}

/// Per-patient visit code, e.g. `P003-V001`.
pub fn visit_code(patient_code: &str, sequence: usize) -> String {
    format!("{patient_code}-V{sequence:03}")
}

/// Parse a visit id back out of a key produced by [`visit`].
pub fn visit_id_from_key(key: &str) -> Option<VisitId> {
    key.strip_prefix(VISITS_PREFIX)?
        .strip_suffix(".json")?
        .parse::<i64>()
        .ok()
        .map(VisitId)
}
