//! Top-level evaluation of a visit history.
//!
//! # Stages
//!
//! 1. **Collapse versions** - keep only the highest version of each record id
//! 2. **Order** - most recent visit first by `(date, time)`
//! 3. **Validate** - collect rejected inputs as [`InputIssue`]s
//! 4. **Classify latest** - per-metric classifications of the newest visit
//! 5. **Weight gain** - guideline status and weight history
//! 6. **Trends** - direction across the recent window
//! 7. **Alerts** - scan every visit, then window, order and truncate
//! 8. **Summary** - headline statistics

use std::collections::HashMap;
use std::time::Instant;

use chrono::NaiveDate;
use tracing::{debug, info, info_span, warn};

use prenatal_model::{
    InputIssue, LatestClassifications, Outcome, PatientBaseline, VitalsAssessment, VitalsEntry,
};

use crate::alerts::{AlertAggregator, finalize_alerts};
use crate::classifiers::{
    classify_blood_pressure, classify_edema, classify_fetal_heart_rate, classify_fundal_height,
    classify_glucose, classify_ketones, classify_protein, classify_pulse, classify_temperature,
};
use crate::clock::{Clock, SystemClock};
use crate::options::EvaluationOptions;
use crate::summary::build_summary;
use crate::trend::analyze_trends;
use crate::weight_gain::{baseline_issues, evaluate_weight_gain, weight_history};

/// Evaluate with default options against `clock`.
pub fn evaluate(
    entries: &[VitalsEntry],
    baseline: &PatientBaseline,
    clock: &impl Clock,
) -> VitalsAssessment {
    Evaluator::new(EvaluationOptions::default()).evaluate_on(entries, baseline, clock.today())
}

/// Reusable evaluator holding options, a clock and the alert rules.
///
/// Holds no per-patient state, so one evaluator can serve many charts and
/// be shared across threads.
pub struct Evaluator {
    options: EvaluationOptions,
    clock: Box<dyn Clock>,
    aggregator: AlertAggregator,
}

impl Evaluator {
    pub fn new(options: EvaluationOptions) -> Self {
        Self {
            options,
            clock: Box::new(SystemClock),
            aggregator: AlertAggregator::default(),
        }
    }

    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    pub fn with_aggregator(mut self, aggregator: AlertAggregator) -> Self {
        self.aggregator = aggregator;
        self
    }

    pub fn options(&self) -> &EvaluationOptions {
        &self.options
    }

    pub fn evaluate(&self, entries: &[VitalsEntry], baseline: &PatientBaseline) -> VitalsAssessment {
        self.evaluate_on(entries, baseline, self.clock.today())
    }

    /// Evaluate as of `today`, ignoring the configured clock.
    pub fn evaluate_on(
        &self,
        entries: &[VitalsEntry],
        baseline: &PatientBaseline,
        today: NaiveDate,
    ) -> VitalsAssessment {
        let span = info_span!("evaluate", visits = entries.len());
        let _guard = span.enter();
        let start = Instant::now();

        let visits = ordered_visits(entries);
        if visits.len() < entries.len() {
            debug!(
                superseded = entries.len() - visits.len(),
                "superseded record versions dropped"
            );
        }

        let input_issues = collect_input_issues(&visits, baseline);
        let latest = visits
            .first()
            .map(|entry| classify_latest(entry, &self.options));
        let weight_gain = evaluate_weight_gain(&visits, baseline);
        let weight_history = weight_history(&visits, baseline);
        let trends = analyze_trends(&visits, baseline, &self.options);
        let raised = self.aggregator.scan(&visits, &self.options);
        let alerts = finalize_alerts(raised, today, &self.options);
        let summary = build_summary(&visits, baseline, &alerts);

        info!(
            visits = visits.len(),
            alerts = alerts.len(),
            critical = summary.surfaced_critical,
            input_issues = input_issues.len(),
            weight_gain_available = weight_gain.is_available(),
            duration_ms = start.elapsed().as_millis(),
            "evaluation complete"
        );

        VitalsAssessment {
            evaluated_on: today,
            latest,
            weight_gain,
            weight_history,
            trends,
            alerts,
            summary,
            input_issues,
        }
    }
}

impl Default for Evaluator {
    fn default() -> Self {
        Self::new(EvaluationOptions::default())
    }
}

/// Current versions only, most recent first. Ties keep caller order.
pub fn ordered_visits(entries: &[VitalsEntry]) -> Vec<&VitalsEntry> {
    let mut current: HashMap<&str, &VitalsEntry> = HashMap::new();
    for entry in entries.iter().filter(|entry| !entry.id.is_empty()) {
        current
            .entry(entry.id.as_str())
            .and_modify(|kept| {
                if entry.version > kept.version {
                    *kept = entry;
                }
            })
            .or_insert(entry);
    }

    let mut visits: Vec<&VitalsEntry> = entries
        .iter()
        .filter(|entry| {
            entry.id.is_empty()
                || current
                    .get(entry.id.as_str())
                    .is_some_and(|kept| std::ptr::eq(*kept, *entry))
        })
        .collect();
    visits.sort_by(|a, b| b.sort_key().cmp(&a.sort_key()));
    visits
}

fn collect_input_issues(visits: &[&VitalsEntry], baseline: &PatientBaseline) -> Vec<InputIssue> {
    let mut issues: Vec<InputIssue> = baseline_issues(baseline)
        .into_iter()
        .map(|error| InputIssue { date: None, error })
        .collect();

    for entry in visits {
        let rejected = [
            entry.weight.and_then(|weight| weight.to_lbs().err()),
            entry
                .temperature
                .and_then(|temperature| temperature.to_celsius().err()),
            classify_ketones(entry.urine_ketones).err(),
        ];
        issues.extend(rejected.into_iter().flatten().map(|error| InputIssue {
            date: Some(entry.date),
            error,
        }));
    }

    for issue in &issues {
        warn!(field = issue.error.field(), date = ?issue.date, "input rejected");
    }
    issues
}

fn classify_latest(entry: &VitalsEntry, options: &EvaluationOptions) -> LatestClassifications {
    let ga = entry.parsed_gestational_age();
    let temperature = match classify_temperature(entry.temperature) {
        Ok(classification) => Outcome::Available(classification),
        Err(error) => Outcome::InvalidInput(error),
    };

    let mut findings = Vec::new();
    findings.extend(classify_protein(entry.urine_protein));
    findings.extend(classify_glucose(entry.urine_glucose));
    findings.extend(classify_ketones(entry.urine_ketones).ok().flatten());
    findings.extend(classify_edema(entry.edema));

    LatestClassifications {
        date: entry.date,
        gestational_age: ga,
        blood_pressure: classify_blood_pressure(entry.systolic(), entry.diastolic()),
        fetal_heart_rate: classify_fetal_heart_rate(entry.fetal_heart_rate),
        fundal_height: classify_fundal_height(
            entry.fundal_height,
            ga.map_or(0, |ga| ga.weeks),
            options.fundal_classifier_tolerance_cm,
        ),
        pulse: classify_pulse(entry.pulse),
        temperature,
        findings,
    }
}
