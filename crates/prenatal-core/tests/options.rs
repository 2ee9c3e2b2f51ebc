use prenatal_core::EvaluationOptions;

#[test]
fn partial_toml_falls_back_to_defaults() {
    let options: EvaluationOptions = toml::from_str(
        r#"
alertWindowDays = 14
maxAlerts = 8
rapidGainLbsPerWeek = 2.0
"#,
    )
    .expect("parse options");

    assert_eq!(options.alert_window_days, 14);
    assert_eq!(options.max_alerts, 8);
    assert_eq!(options.rapid_gain_lbs_per_week, 2.0);
    assert_eq!(options.trend_window, 5);
    assert_eq!(options.fundal_classifier_tolerance_cm, 2.0);
    assert_eq!(options.fundal_alert_tolerance_cm, 3.0);
}

#[test]
fn empty_document_is_default() {
    let options: EvaluationOptions = toml::from_str("").expect("parse options");
    assert_eq!(options, EvaluationOptions::default());
}

#[test]
fn options_serialize_with_camel_case_keys() {
    let json = serde_json::to_value(EvaluationOptions::default()).expect("serialize");
    assert_eq!(json["alertWindowDays"], 30);
    assert_eq!(json["maxAlerts"], 5);
    assert_eq!(json["bpTrendThreshold"], 5.0);
}
