//! Integration tests for chart and config loading.

use std::fs;

use chrono::NaiveDate;
use tempfile::TempDir;

use prenatal_cli::input::{load_chart, load_options, parse_chart};
use prenatal_core::{Evaluator, FixedClock};

const CHART: &str = r#"{
    "baseline": {},
    "entries": [
        {
            "date": "2025-06-01",
            "gestationalAge": "28w",
            "bloodPressure": { "systolic": 128, "diastolic": 82 },
            "fetalHeartRate": 148
        },
        {
            "date": "2025-06-15",
            "gestationalAge": "30w",
            "bloodPressure": { "systolic": 142, "diastolic": 91 },
            "fetalHeartRate": 150,
            "urineProtein": "1+"
        }
    ]
}"#;

fn write_file(dir: &TempDir, name: &str, contents: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).expect("write fixture");
    path
}

#[test]
fn chart_file_loads_baseline_and_entries() {
    let dir = TempDir::new().expect("temp dir");
    let path = write_file(&dir, "chart.json", CHART);

    let chart = load_chart(&path).expect("load chart");

    assert_eq!(chart.entries.len(), 2);
    assert_eq!(chart.baseline.pre_pregnancy_weight, None);
    assert_eq!(chart.entries[1].systolic(), Some(142));
}

#[test]
fn missing_chart_reports_path() {
    let dir = TempDir::new().expect("temp dir");
    let missing = dir.path().join("absent.json");

    let error = load_chart(&missing).expect_err("missing file");

    assert!(format!("{error:#}").contains("absent.json"));
}

#[test]
fn malformed_chart_is_an_error() {
    assert!(parse_chart(r#"{"entries": [{"date": "June 1"}]}"#).is_err());
    assert!(parse_chart(r#"{"entries": [{"date": "2025-06-01", "urineProtein": "lots"}]}"#).is_err());
}

#[test]
fn config_file_overrides_thresholds() {
    let dir = TempDir::new().expect("temp dir");
    let path = write_file(&dir, "vitals.toml", "maxAlerts = 2\nalertWindowDays = 7\n");

    let options = load_options(Some(&path)).expect("load options");

    assert_eq!(options.max_alerts, 2);
    assert_eq!(options.alert_window_days, 7);
    assert_eq!(options.trend_window, 5);
    assert_eq!(load_options(None).expect("defaults").max_alerts, 5);
}

#[test]
fn invalid_config_is_an_error() {
    let dir = TempDir::new().expect("temp dir");
    let path = write_file(&dir, "vitals.toml", "maxAlerts = \"many\"\n");

    assert!(load_options(Some(&path)).is_err());
}

#[test]
fn chart_summary_snapshot() {
    let dir = TempDir::new().expect("temp dir");
    let path = write_file(&dir, "chart.json", CHART);
    let chart = load_chart(&path).expect("load chart");
    let as_of = NaiveDate::from_ymd_opt(2025, 6, 20).unwrap();

    let assessment = Evaluator::default()
        .with_clock(FixedClock::new(as_of))
        .evaluate(&chart.entries, &chart.baseline);

    insta::assert_json_snapshot!(assessment.summary, @r###"
    {
      "totalVisits": 2,
      "criticalAlertCount": 0,
      "surfacedCritical": 1,
      "surfacedWarning": 2,
      "latestBloodPressure": {
        "systolic": 142,
        "diastolic": 91
      },
      "latestFetalHeartRate": 150,
      "latestWeightGain": null,
      "latestEdema": "none",
      "systolicDelta": 14,
      "diastolicDelta": 9,
      "weightDelta": null
    }
    "###);
}
