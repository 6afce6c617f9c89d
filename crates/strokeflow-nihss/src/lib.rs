//! strokeflow-nihss
//!
//! NIH Stroke Scale aggregation. Pure data, no storage dependency.
//! Turns itemized exam scores into a single severity total, either from the
//! 13 stored items or from the finer-grained fields of the exam-entry form.

pub mod error;
pub mod raw;
pub mod scoring;

use std::collections::HashMap;

use strokeflow_core::models::nihss::{NihssItem, NihssScores};

use error::NihssError;
use raw::{RawExamField, RAW_FIELD_TABLE};

/// Build the item set from a mapping of stored item names to values.
///
/// Every key must name one of the 13 items; the first offending key (in
/// sorted order) is reported. Absent items are 0.
pub fn scores_from_named_items(items: &HashMap<String, u32>) -> Result<NihssScores, NihssError> {
    let mut keys: Vec<&String> = items.keys().collect();
    keys.sort();

    let mut scores = NihssScores::default();
    for key in keys {
        let item: NihssItem = key
            .parse()
            .map_err(|_| NihssError::InvalidField { field: key.clone() })?;
        scores.set(item, items[key]);
    }
    Ok(scores)
}

/// Total of the 13 named items. Absent items count as 0.
pub fn aggregate_named_items(items: &HashMap<String, u32>) -> Result<u32, NihssError> {
    scores_from_named_items(items).map(|scores| scores.total())
}

/// Translate raw exam-form fields into the stored item set.
///
/// Contributions of fields mapping to the same item are summed. Keys that are
/// not raw exam fields are ignored.
pub fn translate_raw_exam(raw: &HashMap<String, u32>) -> NihssScores {
    let mut fields: HashMap<RawExamField, u32> = HashMap::new();
    for (key, value) in raw {
        match key.parse::<RawExamField>() {
            Ok(field) => {
                let slot = fields.entry(field).or_default();
                *slot = slot.saturating_add(*value);
            }
            Err(_) => tracing::debug!(field = %key, "ignoring unknown raw NIHSS field"),
        }
    }

    let mut scores = NihssScores::default();
    for (field, item) in RAW_FIELD_TABLE {
        let contribution = fields.get(&field).copied().unwrap_or(0);
        let slot = scores.get_mut(item);
        *slot = slot.saturating_add(contribution);
    }
    scores
}

/// Grand total of a raw exam. Absent fields contribute 0.
pub fn aggregate_raw_exam(raw: &HashMap<String, u32>) -> u32 {
    translate_raw_exam(raw).total()
}
