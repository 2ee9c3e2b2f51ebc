pub mod alert;
pub mod assessment;
pub mod classification;
pub mod enums;
pub mod error;
pub mod vitals;

pub use alert::{Alert, AlertCategory, Direction, TrendDirection, TrendMetric};
pub use assessment::{
    GainBand, GainPosition, InputIssue, LatestClassifications, Outcome, VitalsAssessment,
    VitalsSummary, WeightGainStatus, WeightHistoryRow,
};
pub use classification::{
    BpCategory, BpClassification, FhrClassification, FhrStatus, Finding, FindingKind,
    FundalHeightClassification, FundalHeightStatus, VitalSignClassification,
};
pub use enums::{
    BmiCategory, EdemaGrade, FetalPosition, Severity, TemperatureUnit, UrineGrade, WeightUnit,
};
pub use error::{ModelError, Result};
pub use vitals::{
    BloodPressure, GestationalAge, LBS_PER_KG, PatientBaseline, Temperature, VitalsEntry, Weight,
};

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn outcome_accessors() {
        let ready: Outcome<u8> = Outcome::Available(3);
        assert_eq!(ready.available(), Some(&3));
        assert!(ready.error().is_none());

        let skipped: Outcome<u8> = Outcome::not_available("no baseline");
        assert!(!skipped.is_available());

        let rejected: Outcome<u8> =
            Outcome::InvalidInput(ModelError::invalid_input("height", 0, "must be positive"));
        assert_eq!(rejected.error().map(ModelError::field), Some("height"));
    }

    #[test]
    fn assessment_counts_critical_alerts() {
        let date = NaiveDate::from_ymd_opt(2025, 3, 1).unwrap();
        let alert = |severity| Alert {
            severity,
            category: AlertCategory::BloodPressure,
            message: String::new(),
            action: String::new(),
            date,
        };
        let assessment = VitalsAssessment {
            evaluated_on: date,
            latest: None,
            weight_gain: Outcome::not_available("no visits"),
            weight_history: vec![],
            trends: vec![],
            alerts: vec![alert(Severity::Critical), alert(Severity::Warning)],
            summary: VitalsSummary::default(),
            input_issues: vec![],
        };
        assert_eq!(assessment.critical_alerts().count(), 1);
        assert!(assessment.has_critical_alerts());
    }
}
