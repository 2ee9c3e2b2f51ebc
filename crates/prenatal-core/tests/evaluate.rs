use chrono::{Days, NaiveDate};

use prenatal_core::{EvaluationOptions, Evaluator, FixedClock, evaluate};
use prenatal_model::{
    Alert, AlertCategory, BpCategory, Direction, FundalHeightStatus, GainPosition, Outcome,
    PatientBaseline, Severity, Temperature, TrendMetric, UrineGrade, VitalsEntry, Weight,
};

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 6, 30).unwrap()
}

fn days_ago(days: u64) -> NaiveDate {
    today().checked_sub_days(Days::new(days)).unwrap()
}

fn clock() -> FixedClock {
    FixedClock::new(today())
}

fn baseline() -> PatientBaseline {
    PatientBaseline::new(Some(140.0), Some(65.0))
}

#[test]
fn old_critical_visit_counts_but_is_not_surfaced() {
    let entries = vec![
        VitalsEntry::new(days_ago(40))
            .with_gestational_age("22w 1d")
            .with_blood_pressure(165, 112),
        VitalsEntry::new(today())
            .with_gestational_age("27w 6d")
            .with_blood_pressure(118, 76),
        VitalsEntry::new(days_ago(10))
            .with_gestational_age("26w 3d")
            .with_blood_pressure(125, 82),
    ];

    let assessment = evaluate(&entries, &baseline(), &clock());

    assert!(
        assessment
            .alerts
            .iter()
            .all(|alert| alert.category != AlertCategory::BloodPressure)
    );
    assert_eq!(assessment.summary.critical_alert_count, 1);
    assert_eq!(assessment.summary.surfaced_critical, 0);
    assert_eq!(assessment.summary.total_visits, 3);
    let latest = assessment.latest.expect("latest visit");
    assert_eq!(latest.date, today());
    assert_eq!(latest.blood_pressure.category, BpCategory::Normal);
}

#[test]
fn evaluation_is_idempotent_and_leaves_inputs_untouched() {
    let entries = vec![
        VitalsEntry::new(days_ago(3))
            .with_gestational_age("30w")
            .with_weight(Weight::lbs(162.0))
            .with_blood_pressure(142, 92)
            .with_urine_protein(UrineGrade::OnePlus),
        VitalsEntry::new(days_ago(20))
            .with_gestational_age("27w 4d")
            .with_weight(Weight::lbs(158.0))
            .with_fetal_heart_rate(150),
    ];
    let snapshot = entries.clone();

    let first = evaluate(&entries, &baseline(), &clock());
    let second = evaluate(&entries, &baseline(), &clock());

    assert_eq!(first, second);
    assert_eq!(entries, snapshot);
}

#[test]
fn systolic_trend_rising() {
    let entries = vec![
        VitalsEntry::new(days_ago(14)).with_blood_pressure(130, 80),
        VitalsEntry::new(days_ago(1)).with_blood_pressure(150, 80),
    ];
    let assessment = evaluate(&entries, &PatientBaseline::default(), &clock());

    let trend = assessment
        .trends
        .iter()
        .find(|trend| trend.metric == TrendMetric::SystolicBloodPressure)
        .expect("systolic trend");
    assert_eq!(trend.delta, 20.0);
    assert_eq!(trend.direction, Direction::Rising);
}

#[test]
fn weight_gain_on_track_in_first_trimester() {
    let entries = vec![
        VitalsEntry::new(days_ago(2))
            .with_gestational_age("13w 0d")
            .with_weight(Weight::lbs(143.0)),
    ];
    let assessment = evaluate(&entries, &baseline(), &clock());

    let status = assessment.weight_gain.available().expect("weight gain");
    assert!(status.on_track);
    assert_eq!(status.total_gain, 3.0);
    assert_eq!(status.expected_min, 1.0);
    assert_eq!(status.expected_max, 5.0);
}

#[test]
fn weight_gain_below_band_later_in_pregnancy() {
    let entries = vec![
        VitalsEntry::new(days_ago(2))
            .with_gestational_age("26w 0d")
            .with_weight(Weight::lbs(150.0)),
    ];
    let assessment = evaluate(&entries, &baseline(), &clock());

    let status = assessment.weight_gain.available().expect("weight gain");
    assert!(!status.on_track);
    assert_eq!(status.position, GainPosition::Below);
    assert_eq!(status.gestational_weeks, 26);
}

#[test]
fn weight_gain_not_available_without_baseline_or_ga() {
    let weighed = VitalsEntry::new(days_ago(2)).with_weight(Weight::lbs(150.0));

    let no_baseline = evaluate(
        std::slice::from_ref(&weighed),
        &PatientBaseline::default(),
        &clock(),
    );
    assert!(matches!(no_baseline.weight_gain, Outcome::NotAvailable(_)));

    let no_ga = evaluate(&[weighed], &baseline(), &clock());
    assert!(matches!(no_ga.weight_gain, Outcome::NotAvailable(_)));
}

#[test]
fn non_positive_height_is_rejected_for_weight_gain_only() {
    let entries = vec![
        VitalsEntry::new(days_ago(2))
            .with_gestational_age("20w")
            .with_weight(Weight::lbs(150.0))
            .with_fetal_heart_rate(145),
    ];
    let assessment = evaluate(&entries, &PatientBaseline::new(Some(140.0), Some(0.0)), &clock());

    let error = assessment.weight_gain.error().expect("invalid height");
    assert_eq!(error.field(), "height");
    assert_eq!(assessment.input_issues.len(), 1);
    assert_eq!(assessment.input_issues[0].date, None);
    assert_eq!(assessment.summary.latest_fetal_heart_rate, Some(145));
}

#[test]
fn out_of_domain_values_are_reported_with_visit_date() {
    let entries = vec![
        VitalsEntry::new(days_ago(1))
            .with_urine_ketones(UrineGrade::FourPlus)
            .with_temperature(Temperature::fahrenheit(200.0))
            .with_blood_pressure(120, 78),
    ];
    let assessment = evaluate(&entries, &PatientBaseline::default(), &clock());

    let fields: Vec<_> = assessment
        .input_issues
        .iter()
        .map(|issue| issue.error.field())
        .collect();
    assert_eq!(fields, vec!["temperature", "urineKetones"]);
    assert!(
        assessment
            .input_issues
            .iter()
            .all(|issue| issue.date == Some(days_ago(1)))
    );
    let latest = assessment.latest.expect("latest visit");
    assert!(latest.temperature.error().is_some());
    assert!(
        assessment
            .alerts
            .iter()
            .all(|alert| alert.category != AlertCategory::Ketonuria)
    );
}

#[test]
fn only_latest_version_of_a_record_is_evaluated() {
    let entries = vec![
        VitalsEntry::new(days_ago(5))
            .with_id("visit-7", 1)
            .with_blood_pressure(170, 112),
        VitalsEntry::new(days_ago(5))
            .with_id("visit-7", 2)
            .with_blood_pressure(122, 78),
    ];
    let assessment = evaluate(&entries, &PatientBaseline::default(), &clock());

    assert_eq!(assessment.summary.total_visits, 1);
    assert_eq!(assessment.summary.critical_alert_count, 0);
    assert!(!assessment.has_critical_alerts());
}

#[test]
fn preeclampsia_risk_surfaces_as_critical() {
    let entries = vec![
        VitalsEntry::new(days_ago(1))
            .with_gestational_age("32w")
            .with_blood_pressure(148, 88)
            .with_urine_protein(UrineGrade::Trace),
    ];
    let assessment = evaluate(&entries, &PatientBaseline::default(), &clock());

    let risk = assessment
        .alerts
        .iter()
        .find(|alert| alert.category == AlertCategory::PreeclampsiaRisk)
        .expect("preeclampsia alert");
    assert_eq!(risk.severity, Severity::Critical);
    assert!(risk.action.contains("24-hour urine"));
}

fn fundal_alerts(alerts: &[Alert]) -> Vec<&Alert> {
    alerts
        .iter()
        .filter(|alert| alert.category == AlertCategory::FundalHeight)
        .collect()
}

#[test]
fn fundal_alert_uses_wider_tolerance_than_classifier() {
    let visit = |fundal_height| {
        vec![
            VitalsEntry::new(days_ago(1))
                .with_gestational_age("30w")
                .with_fundal_height(fundal_height),
        ]
    };

    let borderline = evaluate(&visit(27.5), &PatientBaseline::default(), &clock());
    let latest = borderline.latest.expect("latest visit");
    assert_eq!(latest.fundal_height.status, FundalHeightStatus::SmallForGa);
    assert!(fundal_alerts(&borderline.alerts).is_empty());

    let small = evaluate(&visit(26.5), &PatientBaseline::default(), &clock());
    let alerts = fundal_alerts(&small.alerts);
    assert_eq!(alerts.len(), 1);
    assert_eq!(alerts[0].severity, Severity::Critical);

    let large = evaluate(&visit(33.5), &PatientBaseline::default(), &clock());
    let alerts = fundal_alerts(&large.alerts);
    assert_eq!(alerts.len(), 1);
    assert_eq!(alerts[0].severity, Severity::Warning);
}

#[test]
fn annotated_gestational_age_still_drives_fundal_checks() {
    let entries = vec![
        VitalsEntry::new(days_ago(1))
            .with_gestational_age("Twins 24w 3d")
            .with_fundal_height(19.0),
    ];
    let assessment = evaluate(&entries, &PatientBaseline::default(), &clock());

    let latest = assessment.latest.expect("latest visit");
    assert_eq!(latest.fundal_height.status, FundalHeightStatus::SmallForGa);
    let alerts = fundal_alerts(&assessment.alerts);
    assert_eq!(alerts.len(), 1);
    assert_eq!(alerts[0].severity, Severity::Critical);
}

#[test]
fn rapid_weight_gain_raises_warning() {
    let entries = vec![
        VitalsEntry::new(days_ago(14))
            .with_gestational_age("28w 0d")
            .with_weight(Weight::lbs(160.0)),
        VitalsEntry::new(days_ago(0))
            .with_gestational_age("30w 0d")
            .with_weight(Weight::kg(75.0)),
    ];
    let assessment = evaluate(&entries, &baseline(), &clock());

    let rapid = assessment
        .alerts
        .iter()
        .find(|alert| alert.category == AlertCategory::WeightGain)
        .expect("rapid gain alert");
    assert_eq!(rapid.severity, Severity::Warning);
    assert_eq!(rapid.date, today());
    assert_eq!(assessment.weight_history.len(), 2);
}

#[test]
fn surfaced_alerts_are_ordered_and_capped() {
    let entries: Vec<_> = (0..8)
        .map(|offset| {
            VitalsEntry::new(days_ago(offset))
                .with_blood_pressure(150, 95)
                .with_urine_glucose(UrineGrade::OnePlus)
        })
        .collect();
    let evaluator = Evaluator::new(EvaluationOptions::default().with_max_alerts(5))
        .with_clock(clock());
    let assessment = evaluator.evaluate(&entries, &PatientBaseline::default());

    assert_eq!(assessment.alerts.len(), 5);
    assert!(
        assessment
            .alerts
            .windows(2)
            .all(|pair| pair[0].date >= pair[1].date)
    );
    assert_eq!(assessment.alerts[0].date, today());
}

#[test]
fn latest_visit_alerts_snapshot() {
    let entries = vec![
        VitalsEntry::new(today())
            .with_gestational_age("30w")
            .with_blood_pressure(165, 100)
            .with_fetal_heart_rate(100),
    ];
    let assessment = evaluate(&entries, &PatientBaseline::default(), &clock());

    insta::assert_json_snapshot!(assessment.alerts, @r###"
    [
      {
        "severity": "critical",
        "category": "bloodPressure",
        "message": "Severe Hypertension: 165/100 mmHg",
        "action": "URGENT: Evaluate for preeclampsia, consider antihypertensives, notify provider immediately (MAP 122 mmHg)",
        "date": "2025-06-30"
      },
      {
        "severity": "critical",
        "category": "fetalHeartRate",
        "message": "Fetal Bradycardia: 100 bpm",
        "action": "Rule out heart block or cord compression, perform NST",
        "date": "2025-06-30"
      }
    ]
    "###);
}
