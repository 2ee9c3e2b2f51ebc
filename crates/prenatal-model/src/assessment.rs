//! Aggregate evaluation output handed to presentation collaborators.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::alert::{Alert, TrendDirection};
use crate::classification::{
    BpClassification, FhrClassification, Finding, FundalHeightClassification,
    VitalSignClassification,
};
use crate::enums::{BmiCategory, EdemaGrade, Severity};
use crate::error::ModelError;
use crate::vitals::{BloodPressure, GestationalAge};

/// Result of a computation that may be skipped or reject its input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", content = "value", rename_all = "camelCase")]
pub enum Outcome<T> {
    Available(T),
    /// Required data was absent; carries the reason.
    NotAvailable(String),
    /// Data was present but out of domain.
    InvalidInput(ModelError),
}

impl<T> Outcome<T> {
    pub fn not_available(reason: impl Into<String>) -> Self {
        Self::NotAvailable(reason.into())
    }

    pub fn available(&self) -> Option<&T> {
        match self {
            Outcome::Available(value) => Some(value),
            _ => None,
        }
    }

    pub fn is_available(&self) -> bool {
        matches!(self, Outcome::Available(_))
    }

    pub fn error(&self) -> Option<&ModelError> {
        match self {
            Outcome::InvalidInput(error) => Some(error),
            _ => None,
        }
    }
}

/// Inclusive weight band in pounds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GainBand {
    pub min: f64,
    pub max: f64,
}

impl GainBand {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum GainPosition {
    Below,
    OnTrack,
    Above,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeightGainStatus {
    pub bmi: f64,
    pub bmi_category: BmiCategory,
    pub gestational_weeks: u32,
    pub pre_pregnancy_weight: f64,
    pub current_weight: f64,
    pub total_gain: f64,
    pub expected_min: f64,
    pub expected_max: f64,
    /// Total gain recommended by delivery for the BMI category.
    pub recommended_total: GainBand,
    pub on_track: bool,
    pub position: GainPosition,
}

/// One weighed visit in the weight history table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeightHistoryRow {
    pub date: NaiveDate,
    pub gestational_age: String,
    pub weight: f64,
    /// Change since the previous weighing, or since pre-pregnancy weight
    /// for the earliest one.
    pub change: Option<f64>,
    pub total_gain: Option<f64>,
}

/// An input rejected while evaluating one visit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InputIssue {
    pub date: Option<NaiveDate>,
    pub error: ModelError,
}

/// Classifications of the most recent visit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LatestClassifications {
    pub date: NaiveDate,
    pub gestational_age: Option<GestationalAge>,
    pub blood_pressure: BpClassification,
    pub fetal_heart_rate: FhrClassification,
    pub fundal_height: FundalHeightClassification,
    pub pulse: VitalSignClassification,
    pub temperature: Outcome<VitalSignClassification>,
    pub findings: Vec<Finding>,
}

impl LatestClassifications {
    /// Most severe severity across every classification.
    pub fn highest_severity(&self) -> Severity {
        let mut highest = self
            .blood_pressure
            .severity
            .max(self.fetal_heart_rate.severity)
            .max(self.fundal_height.severity)
            .max(self.pulse.severity);
        if let Some(temperature) = self.temperature.available() {
            highest = highest.max(temperature.severity);
        }
        self.findings
            .iter()
            .map(|finding| finding.severity)
            .fold(highest, Severity::max)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VitalsSummary {
    pub total_visits: usize,
    /// Visits with severe-range BP or heavy proteinuria, over all history.
    pub critical_alert_count: usize,
    pub surfaced_critical: usize,
    pub surfaced_warning: usize,
    pub latest_blood_pressure: Option<BloodPressure>,
    pub latest_fetal_heart_rate: Option<u16>,
    pub latest_weight_gain: Option<f64>,
    pub latest_edema: Option<EdemaGrade>,
    pub systolic_delta: Option<i32>,
    pub diastolic_delta: Option<i32>,
    pub weight_delta: Option<f64>,
}

/// Everything derived from one patient's visit history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VitalsAssessment {
    pub evaluated_on: NaiveDate,
    pub latest: Option<LatestClassifications>,
    pub weight_gain: Outcome<WeightGainStatus>,
    pub weight_history: Vec<WeightHistoryRow>,
    pub trends: Vec<TrendDirection>,
    pub alerts: Vec<Alert>,
    pub summary: VitalsSummary,
    pub input_issues: Vec<InputIssue>,
}

impl VitalsAssessment {
    pub fn critical_alerts(&self) -> impl Iterator<Item = &Alert> {
        self.alerts.iter().filter(|alert| alert.is_critical())
    }

    pub fn has_critical_alerts(&self) -> bool {
        self.critical_alerts().next().is_some()
    }
}
