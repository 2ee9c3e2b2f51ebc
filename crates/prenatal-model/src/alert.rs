//! Clinical alerts and cross-visit trends.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::enums::Severity;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AlertCategory {
    BloodPressure,
    Proteinuria,
    Glucosuria,
    Ketonuria,
    Edema,
    FetalHeartRate,
    FundalHeight,
    PreeclampsiaRisk,
    WeightGain,
}

impl AlertCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            AlertCategory::BloodPressure => "Blood Pressure",
            AlertCategory::Proteinuria => "Proteinuria",
            AlertCategory::Glucosuria => "Glucosuria",
            AlertCategory::Ketonuria => "Ketonuria",
            AlertCategory::Edema => "Edema",
            AlertCategory::FetalHeartRate => "Fetal Heart Rate",
            AlertCategory::FundalHeight => "Fundal Height",
            AlertCategory::PreeclampsiaRisk => "Preeclampsia Risk",
            AlertCategory::WeightGain => "Weight Gain",
        }
    }
}

impl fmt::Display for AlertCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A clinical alert raised by one visit.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Alert {
    pub severity: Severity,
    pub category: AlertCategory,
    pub message: String,
    /// Recommended action.
    pub action: String,
    /// Date of the visit that raised the alert.
    pub date: NaiveDate,
}

impl Alert {
    pub fn is_critical(&self) -> bool {
        self.severity == Severity::Critical
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TrendMetric {
    SystolicBloodPressure,
    WeightGain,
    FetalHeartRate,
}

impl TrendMetric {
    pub fn as_str(&self) -> &'static str {
        match self {
            TrendMetric::SystolicBloodPressure => "Systolic BP",
            TrendMetric::WeightGain => "Weight gain",
            TrendMetric::FetalHeartRate => "Fetal heart rate",
        }
    }
}

impl fmt::Display for TrendMetric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Rising,
    Falling,
    Stable,
}

impl Direction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Rising => "rising",
            Direction::Falling => "falling",
            Direction::Stable => "stable",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Direction of one metric across the recent visit window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendDirection {
    pub metric: TrendMetric,
    pub direction: Direction,
    /// Most recent minus oldest value in the window.
    pub delta: f64,
    /// Metric-specific wording ("gaining", "reassuring", ...).
    pub label: String,
}
