use proptest::prelude::*;

use prenatal_core::{
    classify_blood_pressure, classify_fundal_height, expected_gain_band, mean_arterial_pressure,
};
use prenatal_model::{BmiCategory, BpCategory, FundalHeightStatus, Severity};

fn rank(systolic: u16, diastolic: u16) -> u8 {
    classify_blood_pressure(Some(systolic), Some(diastolic))
        .category
        .rank()
        .expect("complete readings are always ranked")
}

#[test]
fn map_matches_reference_values() {
    assert_eq!(mean_arterial_pressure(120, 80), 93);
    assert_eq!(mean_arterial_pressure(160, 110), 127);
}

#[test]
fn bp_boundaries_are_exact() {
    let category = |sys, dia| classify_blood_pressure(Some(sys), Some(dia)).category;
    assert_eq!(category(160, 70), BpCategory::SevereHypertension);
    assert_eq!(category(139, 89), BpCategory::Stage1Hypertension);
    assert_eq!(category(140, 89), BpCategory::Stage2Hypertension);
    assert_eq!(category(118, 76), BpCategory::Normal);
}

#[test]
fn fundal_height_discordance_small_for_ga() {
    let result = classify_fundal_height(Some(19.0), 24, 2.0);
    assert_eq!(result.status, FundalHeightStatus::SmallForGa);
    assert_eq!(result.severity, Severity::Critical);
    assert_eq!(result.expected, Some(24.0));
}

#[test]
fn weight_gain_band_sanity() {
    let first_trimester = expected_gain_band(BmiCategory::Normal, 13);
    assert!(first_trimester.contains(3.0));

    let week_26 = expected_gain_band(BmiCategory::Normal, 26);
    assert!(!week_26.contains(1.0 + 13.0 * 0.8 - 0.5));
}

proptest! {
    #[test]
    fn raising_systolic_never_lowers_category(
        systolic in 40u16..260,
        diastolic in 20u16..160,
        bump in 0u16..60,
    ) {
        prop_assert!(rank(systolic + bump, diastolic) >= rank(systolic, diastolic));
    }

    #[test]
    fn raising_diastolic_never_lowers_category(
        systolic in 40u16..260,
        diastolic in 20u16..160,
        bump in 0u16..60,
    ) {
        prop_assert!(rank(systolic, diastolic + bump) >= rank(systolic, diastolic));
    }

    #[test]
    fn map_lies_between_diastolic_and_systolic(
        diastolic in 20u16..150,
        spread in 0u16..120,
    ) {
        let systolic = diastolic + spread;
        let map = mean_arterial_pressure(systolic, diastolic);
        prop_assert!(map >= diastolic && map <= systolic);
    }
}
