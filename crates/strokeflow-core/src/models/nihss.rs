use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

/// One of the 13 scored categories of the NIH Stroke Scale, in protocol order.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS,
)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum NihssItem {
    Consciousness,
    Gaze,
    Visual,
    Facial,
    MotorArmLeft,
    MotorArmRight,
    MotorLegLeft,
    MotorLegRight,
    Ataxia,
    Sensory,
    Language,
    Dysarthria,
    Extinction,
}

impl NihssItem {
    pub const ALL: [NihssItem; 13] = [
        NihssItem::Consciousness,
        NihssItem::Gaze,
        NihssItem::Visual,
        NihssItem::Facial,
        NihssItem::MotorArmLeft,
        NihssItem::MotorArmRight,
        NihssItem::MotorLegLeft,
        NihssItem::MotorLegRight,
        NihssItem::Ataxia,
        NihssItem::Sensory,
        NihssItem::Language,
        NihssItem::Dysarthria,
        NihssItem::Extinction,
    ];

    /// The stored field name (e.g. `motor_arm_left`).
    pub fn as_str(&self) -> &'static str {
        match self {
            NihssItem::Consciousness => "consciousness",
            NihssItem::Gaze => "gaze",
            NihssItem::Visual => "visual",
            NihssItem::Facial => "facial",
            NihssItem::MotorArmLeft => "motor_arm_left",
            NihssItem::MotorArmRight => "motor_arm_right",
            NihssItem::MotorLegLeft => "motor_leg_left",
            NihssItem::MotorLegRight => "motor_leg_right",
            NihssItem::Ataxia => "ataxia",
            NihssItem::Sensory => "sensory",
            NihssItem::Language => "language",
            NihssItem::Dysarthria => "dysarthria",
            NihssItem::Extinction => "extinction",
        }
    }
}

impl fmt::Display for NihssItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NihssItem {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NihssItem::ALL
            .into_iter()
            .find(|item| item.as_str() == s)
            .ok_or_else(|| CoreError::UnknownNihssItem(s.to_string()))
    }
}

/// The full set of 13 item values recorded for a visit.
///
/// Values are stored as entered. Range checks are advisory and live with the
/// item definitions, not here.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct NihssScores {
    #[serde(default)]
    pub consciousness: u32,
    #[serde(default)]
    pub gaze: u32,
    #[serde(default)]
    pub visual: u32,
    #[serde(default)]
    pub facial: u32,
    #[serde(default)]
    pub motor_arm_left: u32,
    #[serde(default)]
    pub motor_arm_right: u32,
    #[serde(default)]
    pub motor_leg_left: u32,
    #[serde(default)]
    pub motor_leg_right: u32,
    #[serde(default)]
    pub ataxia: u32,
    #[serde(default)]
    pub sensory: u32,
    #[serde(default)]
    pub language: u32,
    #[serde(default)]
    pub dysarthria: u32,
    #[serde(default)]
    pub extinction: u32,
}

impl NihssScores {
    pub fn get(&self, item: NihssItem) -> u32 {
        match item {
            NihssItem::Consciousness => self.consciousness,
            NihssItem::Gaze => self.gaze,
            NihssItem::Visual => self.visual,
            NihssItem::Facial => self.facial,
            NihssItem::MotorArmLeft => self.motor_arm_left,
            NihssItem::MotorArmRight => self.motor_arm_right,
            NihssItem::MotorLegLeft => self.motor_leg_left,
            NihssItem::MotorLegRight => self.motor_leg_right,
            NihssItem::Ataxia => self.ataxia,
            NihssItem::Sensory => self.sensory,
            NihssItem::Language => self.language,
            NihssItem::Dysarthria => self.dysarthria,
            NihssItem::Extinction => self.extinction,
        }
    }

    pub fn get_mut(&mut self, item: NihssItem) -> &mut u32 {
        match item {
            NihssItem::Consciousness => &mut self.consciousness,
            NihssItem::Gaze => &mut self.gaze,
            NihssItem::Visual => &mut self.visual,
            NihssItem::Facial => &mut self.facial,
            NihssItem::MotorArmLeft => &mut self.motor_arm_left,
            NihssItem::MotorArmRight => &mut self.motor_arm_right,
            NihssItem::MotorLegLeft => &mut self.motor_leg_left,
            NihssItem::MotorLegRight => &mut self.motor_leg_right,
            NihssItem::Ataxia => &mut self.ataxia,
            NihssItem::Sensory => &mut self.sensory,
            NihssItem::Language => &mut self.language,
            NihssItem::Dysarthria => &mut self.dysarthria,
            NihssItem::Extinction => &mut self.extinction,
        }
    }

    pub fn set(&mut self, item: NihssItem, value: u32) {
        *self.get_mut(item) = value;
    }

    /// Item values in protocol order.
    pub fn iter(&self) -> impl Iterator<Item = (NihssItem, u32)> + '_ {
        NihssItem::ALL.into_iter().map(|item| (item, self.get(item)))
    }

    /// Exact sum of all 13 items. Out-of-range values are summed as-is.
    pub fn total(&self) -> u32 {
        self.iter().fold(0u32, |acc, (_, v)| acc.saturating_add(v))
    }
}
