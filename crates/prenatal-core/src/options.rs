//! Evaluation tunables.

use serde::{Deserialize, Serialize};

/// Thresholds and limits applied by one evaluation.
///
/// Every field has a default, so a partial TOML or JSON document only needs
/// the keys it overrides.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EvaluationOptions {
    /// Alerts dated more than this many days before the evaluation date are dropped.
    pub alert_window_days: u32,
    /// Maximum number of alerts surfaced.
    pub max_alerts: usize,
    /// Number of most recent visits considered by the trend analyzer.
    pub trend_window: usize,
    /// Systolic change (mmHg) beyond which the trend is rising or falling.
    pub bp_trend_threshold: f64,
    /// FHR change (bpm) beyond which the trend is variable.
    pub fhr_trend_threshold: f64,
    /// Fundal height tolerance (cm) for the latest-visit classification.
    pub fundal_classifier_tolerance_cm: f64,
    /// Fundal height tolerance (cm) for the alert scan.
    pub fundal_alert_tolerance_cm: f64,
    /// Weight gain rate (lbs per week) above which a rapid gain alert is raised.
    pub rapid_gain_lbs_per_week: f64,
}

impl Default for EvaluationOptions {
    fn default() -> Self {
        Self {
            alert_window_days: 30,
            max_alerts: 5,
            trend_window: 5,
            bp_trend_threshold: 5.0,
            fhr_trend_threshold: 10.0,
            fundal_classifier_tolerance_cm: 2.0,
            fundal_alert_tolerance_cm: 3.0,
            rapid_gain_lbs_per_week: 2.2,
        }
    }
}

impl EvaluationOptions {
    pub fn with_alert_window_days(mut self, days: u32) -> Self {
        self.alert_window_days = days;
        self
    }

    pub fn with_max_alerts(mut self, max_alerts: usize) -> Self {
        self.max_alerts = max_alerts;
        self
    }

    pub fn with_trend_window(mut self, visits: usize) -> Self {
        self.trend_window = visits;
        self
    }

    pub fn with_fundal_tolerances(mut self, classifier_cm: f64, alert_cm: f64) -> Self {
        self.fundal_classifier_tolerance_cm = classifier_cm;
        self.fundal_alert_tolerance_cm = alert_cm;
        self
    }

    pub fn with_rapid_gain_threshold(mut self, lbs_per_week: f64) -> Self {
        self.rapid_gain_lbs_per_week = lbs_per_week;
        self
    }
}
