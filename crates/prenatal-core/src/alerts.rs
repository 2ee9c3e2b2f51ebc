//! Alert aggregation across the full visit history.
//!
//! Every visit is scanned by an ordered set of [`AlertRule`]s. Cross-visit
//! checks (rapid weight gain) run after the per-visit rules. The raw alert
//! list is then deduplicated, restricted to the alert window, ordered and
//! truncated by [`finalize_alerts`].

use std::collections::HashSet;

use chrono::{Days, NaiveDate};
use tracing::debug;

use prenatal_model::{
    Alert, AlertCategory, BpCategory, FhrStatus, Finding, FundalHeightStatus, Severity,
    VitalsEntry,
};

use crate::classifiers::{
    classify_blood_pressure, classify_edema, classify_fetal_heart_rate, classify_fundal_height,
    classify_glucose, classify_ketones, classify_protein, entry_has_preeclampsia_risk,
};
use crate::options::EvaluationOptions;
use crate::weight_gain::rapid_gain_intervals;

/// A check applied to one visit.
pub trait AlertRule: Send + Sync {
    /// Name used in diagnostics.
    fn name(&self) -> &'static str;

    /// Append any alerts raised by `entry`.
    fn check(&self, entry: &VitalsEntry, options: &EvaluationOptions, alerts: &mut Vec<Alert>);
}

fn alert(
    entry: &VitalsEntry,
    severity: Severity,
    category: AlertCategory,
    message: String,
    action: impl Into<String>,
) -> Alert {
    Alert {
        severity,
        category,
        message,
        action: action.into(),
        date: entry.date,
    }
}

/// Severe hypertension is critical, stage 2 a warning, stage 1 and
/// hypotension informational. Elevated readings raise no alert; the latest
/// visit classification still reports them.
pub struct BloodPressureRule;

impl AlertRule for BloodPressureRule {
    fn name(&self) -> &'static str {
        "blood_pressure"
    }

    fn check(&self, entry: &VitalsEntry, _options: &EvaluationOptions, alerts: &mut Vec<Alert>) {
        let Some(bp) = entry.blood_pressure else {
            return;
        };
        let classification = classify_blood_pressure(entry.systolic(), entry.diastolic());
        let severity = match classification.category {
            BpCategory::SevereHypertension => Severity::Critical,
            BpCategory::Stage2Hypertension => Severity::Warning,
            BpCategory::Stage1Hypertension | BpCategory::Hypotension => Severity::Info,
            BpCategory::Elevated | BpCategory::Normal | BpCategory::Unknown => return,
        };
        alerts.push(alert(
            entry,
            severity,
            AlertCategory::BloodPressure,
            format!("{}: {bp} mmHg", classification.category),
            classification.action,
        ));
    }
}

pub struct UrinalysisRule;

impl UrinalysisRule {
    fn push(entry: &VitalsEntry, category: AlertCategory, finding: Finding, alerts: &mut Vec<Alert>) {
        alerts.push(alert(
            entry,
            finding.severity,
            category,
            format!("{} {}", finding.kind, finding.grade),
            finding.note,
        ));
    }
}

impl AlertRule for UrinalysisRule {
    fn name(&self) -> &'static str {
        "urinalysis"
    }

    fn check(&self, entry: &VitalsEntry, _options: &EvaluationOptions, alerts: &mut Vec<Alert>) {
        if let Some(finding) = classify_protein(entry.urine_protein) {
            Self::push(entry, AlertCategory::Proteinuria, finding, alerts);
        }
        if let Some(finding) = classify_glucose(entry.urine_glucose) {
            Self::push(entry, AlertCategory::Glucosuria, finding, alerts);
        }
        // Rejected ketone grades are reported as input issues, not alerts.
        if let Ok(Some(finding)) = classify_ketones(entry.urine_ketones) {
            Self::push(entry, AlertCategory::Ketonuria, finding, alerts);
        }
    }
}

pub struct EdemaRule;

impl AlertRule for EdemaRule {
    fn name(&self) -> &'static str {
        "edema"
    }

    fn check(&self, entry: &VitalsEntry, _options: &EvaluationOptions, alerts: &mut Vec<Alert>) {
        if let Some(finding) = classify_edema(entry.edema) {
            alerts.push(alert(
                entry,
                finding.severity,
                AlertCategory::Edema,
                format!("Edema {}", finding.grade),
                finding.note,
            ));
        }
    }
}

pub struct FetalHeartRateRule;

impl AlertRule for FetalHeartRateRule {
    fn name(&self) -> &'static str {
        "fetal_heart_rate"
    }

    fn check(&self, entry: &VitalsEntry, _options: &EvaluationOptions, alerts: &mut Vec<Alert>) {
        let Some(bpm) = entry.fetal_heart_rate else {
            return;
        };
        let classification = classify_fetal_heart_rate(Some(bpm));
        if matches!(
            classification.status,
            FhrStatus::Bradycardia | FhrStatus::Tachycardia
        ) {
            alerts.push(alert(
                entry,
                classification.severity,
                AlertCategory::FetalHeartRate,
                format!("Fetal {}: {bpm} bpm", classification.status),
                classification.note,
            ));
        }
    }
}

pub struct FundalHeightRule;

impl AlertRule for FundalHeightRule {
    fn name(&self) -> &'static str {
        "fundal_height"
    }

    fn check(&self, entry: &VitalsEntry, options: &EvaluationOptions, alerts: &mut Vec<Alert>) {
        let weeks = entry.gestational_weeks();
        let classification = classify_fundal_height(
            entry.fundal_height,
            weeks,
            options.fundal_alert_tolerance_cm,
        );
        if !matches!(
            classification.status,
            FundalHeightStatus::SmallForGa | FundalHeightStatus::LargeForGa
        ) {
            return;
        }
        let difference = classification.difference.unwrap_or_default();
        alerts.push(alert(
            entry,
            classification.severity,
            AlertCategory::FundalHeight,
            format!(
                "Fundal height {}: {:+.1} cm at {weeks} weeks",
                classification.status, difference
            ),
            classification.note,
        ));
    }
}

pub struct PreeclampsiaRule;

impl AlertRule for PreeclampsiaRule {
    fn name(&self) -> &'static str {
        "preeclampsia_risk"
    }

    fn check(&self, entry: &VitalsEntry, _options: &EvaluationOptions, alerts: &mut Vec<Alert>) {
        if entry_has_preeclampsia_risk(entry) {
            alerts.push(alert(
                entry,
                Severity::Critical,
                AlertCategory::PreeclampsiaRisk,
                "Preeclampsia risk: elevated BP with proteinuria".to_string(),
                "Order 24-hour urine protein, LFT, RFT and platelet count",
            ));
        }
    }
}

/// Ordered collection of per-visit rules.
pub struct AlertAggregator {
    rules: Vec<Box<dyn AlertRule>>,
}

impl Default for AlertAggregator {
    fn default() -> Self {
        Self::new()
            .with_rule(Box::new(BloodPressureRule))
            .with_rule(Box::new(UrinalysisRule))
            .with_rule(Box::new(EdemaRule))
            .with_rule(Box::new(FetalHeartRateRule))
            .with_rule(Box::new(FundalHeightRule))
            .with_rule(Box::new(PreeclampsiaRule))
    }
}

impl AlertAggregator {
    /// An aggregator with no rules.
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    pub fn with_rule(mut self, rule: Box<dyn AlertRule>) -> Self {
        self.rules.push(rule);
        self
    }

    pub fn rule_names(&self) -> Vec<&'static str> {
        self.rules.iter().map(|rule| rule.name()).collect()
    }

    /// Every alert raised by any visit, before windowing.
    ///
    /// `entries` must be ordered most recent first.
    pub fn scan(&self, entries: &[&VitalsEntry], options: &EvaluationOptions) -> Vec<Alert> {
        let mut alerts = Vec::new();
        for entry in entries {
            for rule in &self.rules {
                rule.check(entry, options, &mut alerts);
            }
        }
        for rapid in rapid_gain_intervals(entries, options.rapid_gain_lbs_per_week) {
            alerts.push(Alert {
                severity: Severity::Warning,
                category: AlertCategory::WeightGain,
                message: format!("Rapid weight gain: {:.1} lbs/week", rapid.lbs_per_week),
                action: "Assess for fluid retention and preeclampsia".to_string(),
                date: rapid.date,
            });
        }
        alerts
    }
}

/// Deduplicate, keep alerts dated within the window ending `today`, order
/// by date (newest first) then severity (most severe first), and truncate.
pub fn finalize_alerts(
    alerts: Vec<Alert>,
    today: NaiveDate,
    options: &EvaluationOptions,
) -> Vec<Alert> {
    let cutoff = today
        .checked_sub_days(Days::new(u64::from(options.alert_window_days)))
        .unwrap_or(NaiveDate::MIN);

    let raised = alerts.len();
    let mut seen = HashSet::new();
    let mut kept: Vec<Alert> = alerts
        .into_iter()
        .filter(|alert| alert.date >= cutoff)
        .filter(|alert| seen.insert(alert.clone()))
        .collect();

    kept.sort_by(|a, b| b.date.cmp(&a.date).then(b.severity.cmp(&a.severity)));
    kept.truncate(options.max_alerts);
    debug!(raised, surfaced = kept.len(), "alerts finalized");
    kept
}
