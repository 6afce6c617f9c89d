//! Raw exam fields as gathered by the exam-entry form.
//!
//! The form records finer-grained fields than the stored item set: the three
//! level-of-consciousness questions roll up into `consciousness`, and the
//! limb ataxia field is named differently. [`RAW_FIELD_TABLE`] is the single
//! translation between the two.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use strokeflow_core::models::nihss::NihssItem;

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS,
)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum RawExamField {
    Loc,
    LocQuestions,
    LocCommands,
    Gaze,
    Visual,
    Facial,
    MotorArmLeft,
    MotorArmRight,
    MotorLegLeft,
    MotorLegRight,
    #[serde(alias = "limb_at")]
    LimbAtaxia,
    Sensory,
    Language,
    Dysarthria,
    Extinction,
}

/// Raw field → stored item it contributes to.
pub const RAW_FIELD_TABLE: [(RawExamField, NihssItem); 15] = [
    (RawExamField::Loc, NihssItem::Consciousness),
    (RawExamField::LocQuestions, NihssItem::Consciousness),
    (RawExamField::LocCommands, NihssItem::Consciousness),
    (RawExamField::Gaze, NihssItem::Gaze),
    (RawExamField::Visual, NihssItem::Visual),
    (RawExamField::Facial, NihssItem::Facial),
    (RawExamField::MotorArmLeft, NihssItem::MotorArmLeft),
    (RawExamField::MotorArmRight, NihssItem::MotorArmRight),
    (RawExamField::MotorLegLeft, NihssItem::MotorLegLeft),
    (RawExamField::MotorLegRight, NihssItem::MotorLegRight),
    (RawExamField::LimbAtaxia, NihssItem::Ataxia),
    (RawExamField::Sensory, NihssItem::Sensory),
    (RawExamField::Language, NihssItem::Language),
    (RawExamField::Dysarthria, NihssItem::Dysarthria),
    (RawExamField::Extinction, NihssItem::Extinction),
];

impl RawExamField {
    pub fn as_str(&self) -> &'static str {
        match self {
            RawExamField::Loc => "loc",
            RawExamField::LocQuestions => "loc_questions",
            RawExamField::LocCommands => "loc_commands",
            RawExamField::Gaze => "gaze",
            RawExamField::Visual => "visual",
            RawExamField::Facial => "facial",
            RawExamField::MotorArmLeft => "motor_arm_left",
            RawExamField::MotorArmRight => "motor_arm_right",
            RawExamField::MotorLegLeft => "motor_leg_left",
            RawExamField::MotorLegRight => "motor_leg_right",
            RawExamField::LimbAtaxia => "limb_ataxia",
            RawExamField::Sensory => "sensory",
            RawExamField::Language => "language",
            RawExamField::Dysarthria => "dysarthria",
            RawExamField::Extinction => "extinction",
        }
    }
}

impl fmt::Display for RawExamField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownRawField(pub String);

impl FromStr for RawExamField {
    type Err = UnknownRawField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "limb_at" {
            return Ok(RawExamField::LimbAtaxia);
        }
        RAW_FIELD_TABLE
            .iter()
            .map(|(field, _)| *field)
            .find(|field| field.as_str() == s)
            .ok_or_else(|| UnknownRawField(s.to_string()))
    }
}
