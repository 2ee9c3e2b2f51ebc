use prenatal_model::{Alert, PatientBaseline, Severity, VitalsEntry, VitalsSummary};

/// A visit with severe-range blood pressure or heavy proteinuria.
pub fn is_critical_visit(entry: &VitalsEntry) -> bool {
    let severe_bp = entry
        .blood_pressure
        .is_some_and(|bp| bp.systolic >= 160 || bp.diastolic >= 110);
    let heavy_protein = entry.urine_protein.is_some_and(|grade| grade.is_heavy());
    severe_bp || heavy_protein
}

/// Headline statistics. `entries` must be ordered most recent first;
/// `alerts` are the surfaced alerts.
pub fn build_summary(
    entries: &[&VitalsEntry],
    baseline: &PatientBaseline,
    alerts: &[Alert],
) -> VitalsSummary {
    let count_surfaced =
        |severity: Severity| alerts.iter().filter(|alert| alert.severity == severity).count();

    let latest_weight_gain = baseline.usable_pre_pregnancy_weight().and_then(|pre| {
        entries
            .iter()
            .find_map(|entry| entry.weight?.to_lbs().ok())
            .map(|lbs| lbs - pre)
    });

    let (systolic_delta, diastolic_delta, weight_delta) = match entries {
        [latest, previous, ..] => {
            let bp_delta = |value: fn(&VitalsEntry) -> Option<u16>| {
                Some(i32::from(value(*latest)?) - i32::from(value(*previous)?))
            };
            let lbs = |entry: &VitalsEntry| entry.weight?.to_lbs().ok();
            (
                bp_delta(VitalsEntry::systolic),
                bp_delta(VitalsEntry::diastolic),
                lbs(*latest).zip(lbs(*previous)).map(|(a, b)| a - b),
            )
        }
        _ => (None, None, None),
    };

    VitalsSummary {
        total_visits: entries.len(),
        critical_alert_count: entries
            .iter()
            .filter(|entry| is_critical_visit(entry))
            .count(),
        surfaced_critical: count_surfaced(Severity::Critical),
        surfaced_warning: count_surfaced(Severity::Warning),
        latest_blood_pressure: entries.iter().find_map(|entry| entry.blood_pressure),
        latest_fetal_heart_rate: entries.iter().find_map(|entry| entry.fetal_heart_rate),
        latest_weight_gain,
        latest_edema: entries.first().map(|entry| entry.edema),
        systolic_delta,
        diastolic_delta,
        weight_delta,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use prenatal_model::{BloodPressure, UrineGrade, Weight};

    fn on(day: u32) -> VitalsEntry {
        VitalsEntry::new(NaiveDate::from_ymd_opt(2025, 2, day).unwrap())
    }

    #[test]
    fn test_critical_visit() {
        assert!(is_critical_visit(&on(1).with_blood_pressure(160, 80)));
        assert!(is_critical_visit(&on(1).with_blood_pressure(120, 110)));
        assert!(is_critical_visit(
            &on(1).with_urine_protein(UrineGrade::ThreePlus)
        ));
        assert!(!is_critical_visit(&on(1).with_blood_pressure(159, 109)));
    }

    #[test]
    fn test_deltas_between_two_latest_visits() {
        let latest = on(10)
            .with_blood_pressure(130, 85)
            .with_weight(Weight::lbs(160.0));
        let previous = on(3)
            .with_blood_pressure(124, 88)
            .with_weight(Weight::lbs(158.0));
        let summary = build_summary(
            &[&latest, &previous],
            &PatientBaseline::new(Some(150.0), Some(64.0)),
            &[],
        );
        assert_eq!(summary.total_visits, 2);
        assert_eq!(summary.systolic_delta, Some(6));
        assert_eq!(summary.diastolic_delta, Some(-3));
        assert_eq!(summary.weight_delta, Some(2.0));
        assert_eq!(summary.latest_weight_gain, Some(10.0));
        assert_eq!(summary.latest_blood_pressure, Some(BloodPressure::new(130, 85)));
    }

    #[test]
    fn test_deltas_absent_when_value_missing() {
        let latest = on(10).with_fetal_heart_rate(140);
        let previous = on(3).with_blood_pressure(120, 80);
        let summary = build_summary(&[&latest, &previous], &PatientBaseline::default(), &[]);
        assert_eq!(summary.systolic_delta, None);
        assert_eq!(summary.weight_delta, None);
        assert_eq!(summary.latest_blood_pressure, Some(BloodPressure::new(120, 80)));
        assert_eq!(summary.latest_fetal_heart_rate, Some(140));
    }

    #[test]
    fn test_rejected_baseline_weight_gives_no_gain() {
        let latest = on(10).with_weight(Weight::lbs(160.0));
        for weight in [0.0, -140.0, f64::NAN] {
            let summary = build_summary(
                &[&latest],
                &PatientBaseline::new(Some(weight), Some(64.0)),
                &[],
            );
            assert_eq!(summary.latest_weight_gain, None);
        }
    }
}
