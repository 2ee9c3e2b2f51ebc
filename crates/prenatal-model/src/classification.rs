//! Per-metric classification results.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::enums::Severity;

/// Blood pressure category, from the hypertension ladder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BpCategory {
    #[serde(rename = "Severe Hypertension")]
    SevereHypertension,
    #[serde(rename = "Stage 2 Hypertension")]
    Stage2Hypertension,
    #[serde(rename = "Stage 1 Hypertension")]
    Stage1Hypertension,
    Elevated,
    Hypotension,
    Normal,
    Unknown,
}

impl BpCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            BpCategory::SevereHypertension => "Severe Hypertension",
            BpCategory::Stage2Hypertension => "Stage 2 Hypertension",
            BpCategory::Stage1Hypertension => "Stage 1 Hypertension",
            BpCategory::Elevated => "Elevated",
            BpCategory::Hypotension => "Hypotension",
            BpCategory::Normal => "Normal",
            BpCategory::Unknown => "Unknown",
        }
    }

    /// Position on the pressure ladder, lowest pressure first.
    /// `Unknown` has no rank.
    pub fn rank(&self) -> Option<u8> {
        match self {
            BpCategory::Hypotension => Some(0),
            BpCategory::Normal => Some(1),
            BpCategory::Elevated => Some(2),
            BpCategory::Stage1Hypertension => Some(3),
            BpCategory::Stage2Hypertension => Some(4),
            BpCategory::SevereHypertension => Some(5),
            BpCategory::Unknown => None,
        }
    }
}

impl fmt::Display for BpCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BpClassification {
    pub category: BpCategory,
    pub severity: Severity,
    /// Mean arterial pressure, absent when either reading is missing.
    pub map: Option<u16>,
    pub action: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FhrStatus {
    Normal,
    Bradycardia,
    Tachycardia,
    #[serde(rename = "Not recorded")]
    NotRecorded,
}

impl FhrStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            FhrStatus::Normal => "Normal",
            FhrStatus::Bradycardia => "Bradycardia",
            FhrStatus::Tachycardia => "Tachycardia",
            FhrStatus::NotRecorded => "Not recorded",
        }
    }
}

impl fmt::Display for FhrStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FhrClassification {
    pub status: FhrStatus,
    pub severity: Severity,
    pub note: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FundalHeightStatus {
    #[serde(rename = "Not measured")]
    NotMeasured,
    #[serde(rename = "Too early")]
    TooEarly,
    Appropriate,
    #[serde(rename = "Large for GA")]
    LargeForGa,
    #[serde(rename = "Small for GA")]
    SmallForGa,
}

impl FundalHeightStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            FundalHeightStatus::NotMeasured => "Not measured",
            FundalHeightStatus::TooEarly => "Too early",
            FundalHeightStatus::Appropriate => "Appropriate",
            FundalHeightStatus::LargeForGa => "Large for GA",
            FundalHeightStatus::SmallForGa => "Small for GA",
        }
    }
}

impl fmt::Display for FundalHeightStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FundalHeightClassification {
    pub status: FundalHeightStatus,
    pub severity: Severity,
    /// Expected fundal height in cm (equal to gestational weeks).
    pub expected: Option<f64>,
    /// Signed measured minus expected, cm.
    pub difference: Option<f64>,
    pub note: String,
}

/// What a [`Finding`] was observed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FindingKind {
    Protein,
    Glucose,
    Ketones,
    Edema,
}

impl FindingKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            FindingKind::Protein => "Urine protein",
            FindingKind::Glucose => "Urine glucose",
            FindingKind::Ketones => "Urine ketones",
            FindingKind::Edema => "Edema",
        }
    }
}

impl fmt::Display for FindingKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A non-negative urinalysis or edema result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Finding {
    pub kind: FindingKind,
    /// Grade as charted, e.g. `"2+"`.
    pub grade: String,
    pub severity: Severity,
    pub note: String,
}

/// Maternal pulse or temperature interpretation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VitalSignClassification {
    pub status: String,
    pub severity: Severity,
    pub note: String,
}

impl VitalSignClassification {
    pub fn new(status: impl Into<String>, severity: Severity, note: impl Into<String>) -> Self {
        Self {
            status: status.into(),
            severity,
            note: note.into(),
        }
    }

    pub fn not_recorded() -> Self {
        Self::new("Not recorded", Severity::None, "")
    }
}
