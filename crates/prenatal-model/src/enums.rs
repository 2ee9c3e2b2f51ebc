//! Type-safe enumerations for coded prenatal observations.
//!
//! Urinalysis dipstick results and edema are ordinal scales. They are
//! modelled as ordered enums so comparisons follow clinical rank rather
//! than string order ("10+" would otherwise sort before "2+").

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ModelError;

/// Dipstick grade for urine protein, glucose and ketones.
///
/// `negative < trace < 1+ < 2+ < 3+ < 4+`. Ketone strips stop at 3+.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum UrineGrade {
    Negative,
    Trace,
    OnePlus,
    TwoPlus,
    ThreePlus,
    FourPlus,
}

impl UrineGrade {
    pub fn as_str(&self) -> &'static str {
        match self {
            UrineGrade::Negative => "negative",
            UrineGrade::Trace => "trace",
            UrineGrade::OnePlus => "1+",
            UrineGrade::TwoPlus => "2+",
            UrineGrade::ThreePlus => "3+",
            UrineGrade::FourPlus => "4+",
        }
    }

    pub fn is_negative(&self) -> bool {
        matches!(self, UrineGrade::Negative)
    }

    /// 3+ and above.
    pub fn is_heavy(&self) -> bool {
        *self >= UrineGrade::ThreePlus
    }
}

impl fmt::Display for UrineGrade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for UrineGrade {
    type Err = ModelError;

    /// Accepts `1+` and `+1` spellings, case-insensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();

        match normalized.as_str() {
            "negative" | "neg" | "-" => Ok(UrineGrade::Negative),
            "trace" | "tr" => Ok(UrineGrade::Trace),
            "1+" | "+1" => Ok(UrineGrade::OnePlus),
            "2+" | "+2" => Ok(UrineGrade::TwoPlus),
            "3+" | "+3" => Ok(UrineGrade::ThreePlus),
            "4+" | "+4" => Ok(UrineGrade::FourPlus),
            _ => Err(ModelError::unknown_value("urine grade", s)),
        }
    }
}

impl TryFrom<String> for UrineGrade {
    type Error = ModelError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<UrineGrade> for String {
    fn from(value: UrineGrade) -> Self {
        value.as_str().to_string()
    }
}

/// Pitting edema grade, `none < trace < 1+ < 2+ < 3+ < 4+`.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(try_from = "String", into = "String")]
pub enum EdemaGrade {
    #[default]
    None,
    Trace,
    OnePlus,
    TwoPlus,
    ThreePlus,
    FourPlus,
}

impl EdemaGrade {
    pub fn as_str(&self) -> &'static str {
        match self {
            EdemaGrade::None => "none",
            EdemaGrade::Trace => "trace",
            EdemaGrade::OnePlus => "1+",
            EdemaGrade::TwoPlus => "2+",
            EdemaGrade::ThreePlus => "3+",
            EdemaGrade::FourPlus => "4+",
        }
    }

    pub fn is_none(&self) -> bool {
        matches!(self, EdemaGrade::None)
    }
}

impl fmt::Display for EdemaGrade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for EdemaGrade {
    type Err = ModelError;

    /// Parse an edema grade.
    /// Descriptive chart wording such as "Trace pedal" or "+2 bilateral" is
    /// reduced to its leading grade token.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        let token = normalized.split_whitespace().next().unwrap_or_default();

        match token {
            "" | "none" | "absent" => Ok(EdemaGrade::None),
            "trace" => Ok(EdemaGrade::Trace),
            "1+" | "+1" => Ok(EdemaGrade::OnePlus),
            "2+" | "+2" => Ok(EdemaGrade::TwoPlus),
            "3+" | "+3" => Ok(EdemaGrade::ThreePlus),
            "4+" | "+4" => Ok(EdemaGrade::FourPlus),
            _ => Err(ModelError::unknown_value("edema grade", s)),
        }
    }
}

impl TryFrom<String> for EdemaGrade {
    type Error = ModelError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<EdemaGrade> for String {
    fn from(value: EdemaGrade) -> Self {
        value.as_str().to_string()
    }
}

/// Fetal presentation recorded at the visit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FetalPosition {
    Vertex,
    Breech,
    Transverse,
    Oblique,
    Unknown,
}

impl FetalPosition {
    pub fn as_str(&self) -> &'static str {
        match self {
            FetalPosition::Vertex => "Vertex",
            FetalPosition::Breech => "Breech",
            FetalPosition::Transverse => "Transverse",
            FetalPosition::Oblique => "Oblique",
            FetalPosition::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for FetalPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeightUnit {
    #[default]
    Lbs,
    Kg,
}

impl WeightUnit {
    pub fn as_str(&self) -> &'static str {
        match self {
            WeightUnit::Lbs => "lbs",
            WeightUnit::Kg => "kg",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TemperatureUnit {
    #[default]
    F,
    C,
}

impl TemperatureUnit {
    pub fn as_str(&self) -> &'static str {
        match self {
            TemperatureUnit::F => "F",
            TemperatureUnit::C => "C",
        }
    }
}

/// Clinical severity, ordered from least to most urgent.
///
/// Classifiers use the full scale; alerts only ever carry
/// `Info`, `Warning` or `Critical`.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    #[default]
    None,
    Info,
    Low,
    Monitor,
    Moderate,
    Warning,
    High,
    Critical,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::None => "none",
            Severity::Info => "info",
            Severity::Low => "low",
            Severity::Monitor => "monitor",
            Severity::Moderate => "moderate",
            Severity::Warning => "warning",
            Severity::High => "high",
            Severity::Critical => "critical",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Pre-pregnancy BMI category used to pick a weight-gain band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BmiCategory {
    Underweight,
    Normal,
    Overweight,
    Obese,
}

impl BmiCategory {
    pub const ALL: [BmiCategory; 4] = [
        BmiCategory::Underweight,
        BmiCategory::Normal,
        BmiCategory::Overweight,
        BmiCategory::Obese,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            BmiCategory::Underweight => "underweight",
            BmiCategory::Normal => "normal",
            BmiCategory::Overweight => "overweight",
            BmiCategory::Obese => "obese",
        }
    }
}

impl fmt::Display for BmiCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_urine_grade_from_str() {
        assert_eq!("Negative".parse::<UrineGrade>().unwrap(), UrineGrade::Negative);
        assert_eq!("+2".parse::<UrineGrade>().unwrap(), UrineGrade::TwoPlus);
        assert_eq!(" 3+ ".parse::<UrineGrade>().unwrap(), UrineGrade::ThreePlus);
        assert!("10+".parse::<UrineGrade>().is_err());
    }

    #[test]
    fn test_urine_grade_order() {
        assert!(UrineGrade::Negative < UrineGrade::Trace);
        assert!(UrineGrade::TwoPlus < UrineGrade::ThreePlus);
        assert!(UrineGrade::FourPlus.is_heavy());
        assert!(!UrineGrade::TwoPlus.is_heavy());
    }

    #[test]
    fn test_edema_descriptive_wording() {
        assert_eq!("Trace pedal".parse::<EdemaGrade>().unwrap(), EdemaGrade::Trace);
        assert_eq!("+2 bilateral".parse::<EdemaGrade>().unwrap(), EdemaGrade::TwoPlus);
        assert_eq!("Absent".parse::<EdemaGrade>().unwrap(), EdemaGrade::None);
    }

    #[test]
    fn test_severity_order() {
        assert!(Severity::Critical > Severity::High);
        assert!(Severity::Warning > Severity::Moderate);
        assert!(Severity::Info > Severity::None);
    }
}
