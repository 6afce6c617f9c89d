//! Protocol thresholds for IV thrombolysis.

/// Maximum hours from symptom onset to treatment.
pub const TREATMENT_WINDOW_HOURS: f64 = 4.5;

/// Totals below this are too mild to treat.
pub const NIHSS_MIN: u32 = 4;

/// Totals above this raise a warning but do not disqualify.
pub const NIHSS_HIGH_RISK: u32 = 25;

/// mmHg
pub const SYSTOLIC_MAX: u32 = 185;

/// mmHg
pub const DIASTOLIC_MAX: u32 = 110;

pub const INR_MAX: f64 = 1.7;

/// mg/dL, inclusive
pub const GLUCOSE_MIN: f64 = 50.0;

/// mg/dL, inclusive
pub const GLUCOSE_MAX: f64 = 400.0;

/// Case-insensitive substrings of a scan label that indicate bleeding.
/// Stems, so "hemorrhagic" and the British "haemorrhage" both match.
pub const HEMORRHAGE_MARKERS: [&str; 7] = [
    "hemorrhag",
    "haemorrhag",
    "bleeding",
    "intracerebral",
    "ich",
    "intraparenchymal",
    "subarachnoid",
];
