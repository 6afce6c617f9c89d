use serde::{Deserialize, Serialize};
use thiserror::Error;
use ts_rs::TS;

use strokeflow_core::models::nihss::{NihssItem, NihssScores};

/// Clinically valid range of one item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScoreRange {
    pub min: u32,
    pub max: u32,
}

impl ScoreRange {
    pub fn contains(&self, value: u32) -> bool {
        (self.min..=self.max).contains(&value)
    }
}

/// Definition of one stored NIHSS item.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ItemDefinition {
    pub item: NihssItem,
    pub name: String,
    pub range: ScoreRange,
    pub description: Option<String>,
}

/// An item whose value falls outside its clinical range. Advisory only:
/// aggregation still sums the value as entered.
#[derive(Debug, Clone, Serialize, Deserialize, TS, Error)]
#[ts(export)]
#[error("{message}")]
pub struct ValidationError {
    pub item: NihssItem,
    pub value: u32,
    pub expected_range: ScoreRange,
    pub message: String,
}

/// Severity band of a NIHSS total, as used when summarising a case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Severity {
    Mild,
    Moderate,
    Severe,
    VerySevere,
}

impl Severity {
    pub fn from_total(total: u32) -> Self {
        match total {
            0..=5 => Severity::Mild,
            6..=14 => Severity::Moderate,
            15..=24 => Severity::Severe,
            _ => Severity::VerySevere,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Severity::Mild => "mild",
            Severity::Moderate => "moderate",
            Severity::Severe => "severe",
            Severity::VerySevere => "very severe",
        }
    }
}

/// Highest total the scale can produce.
pub const MAX_TOTAL: u32 = 42;

/// The 13 stored items with their clinical ranges, in protocol order.
pub fn item_definitions() -> &'static [ItemDefinition] {
    static ITEMS: std::sync::LazyLock<Vec<ItemDefinition>> = std::sync::LazyLock::new(|| {
        let items = [
            (
                NihssItem::Consciousness,
                "Level of Consciousness",
                7,
                Some("1a LOC (0-3) + 1b LOC questions (0-2) + 1c LOC commands (0-2)"),
            ),
            (NihssItem::Gaze, "Best Gaze", 2, None),
            (NihssItem::Visual, "Visual Fields", 3, None),
            (NihssItem::Facial, "Facial Palsy", 3, None),
            (NihssItem::MotorArmLeft, "Motor Arm, Left", 4, None),
            (NihssItem::MotorArmRight, "Motor Arm, Right", 4, None),
            (NihssItem::MotorLegLeft, "Motor Leg, Left", 4, None),
            (NihssItem::MotorLegRight, "Motor Leg, Right", 4, None),
            (NihssItem::Ataxia, "Limb Ataxia", 2, None),
            (NihssItem::Sensory, "Sensory", 2, None),
            (NihssItem::Language, "Best Language", 3, None),
            (NihssItem::Dysarthria, "Dysarthria", 2, None),
            (
                NihssItem::Extinction,
                "Extinction and Inattention",
                2,
                Some("Formerly neglect"),
            ),
        ];

        items
            .iter()
            .map(|(item, name, max, description)| ItemDefinition {
                item: *item,
                name: name.to_string(),
                range: ScoreRange { min: 0, max: *max },
                description: description.map(str::to_string),
            })
            .collect()
    });
    &ITEMS
}

pub fn item_definition(item: NihssItem) -> Option<&'static ItemDefinition> {
    item_definitions().iter().find(|d| d.item == item)
}

/// Check every item against its clinical range.
pub fn validate_scores(scores: &NihssScores) -> Vec<ValidationError> {
    item_definitions()
        .iter()
        .filter_map(|def| {
            let value = scores.get(def.item);
            (!def.range.contains(value)).then(|| ValidationError {
                item: def.item,
                value,
                expected_range: def.range,
                message: format!(
                    "NIHSS: {} score {} is outside range [{}, {}]",
                    def.name, value, def.range.min, def.range.max,
                ),
            })
        })
        .collect()
}

/// Format scores as structured text for a downstream treatment-plan prompt.
pub fn to_structured_input(scores: &NihssScores) -> String {
    let mut output = String::from("## NIHSS\n\n");
    for def in item_definitions() {
        output.push_str(&format!("- {}: {}\n", def.name, scores.get(def.item)));
    }
    let total = scores.total();
    output.push_str(&format!(
        "\nTotal: {total} ({} stroke)\n",
        Severity::from_total(total).label()
    ));
    output
}
