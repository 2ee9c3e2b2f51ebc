//! Gestational weight gain against the IOM guidelines.
//!
//! Every function here takes visits ordered most recent first.

use chrono::NaiveDate;
use tracing::debug;

use prenatal_model::{
    BmiCategory, GainBand, GainPosition, ModelError, Outcome, PatientBaseline, VitalsEntry,
    WeightGainStatus, WeightHistoryRow,
};

use crate::calculators::{bmi_category, body_mass_index};

/// Last week of the first trimester.
pub const FIRST_TRIMESTER_WEEKS: u32 = 13;

/// Expected cumulative gain (lbs) through the first trimester.
pub const FIRST_TRIMESTER_BAND: GainBand = GainBand::new(1.0, 5.0);

/// IOM recommendation for one pre-pregnancy BMI category.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IomGuideline {
    pub category: BmiCategory,
    /// Total gain by delivery, lbs.
    pub total: GainBand,
    /// Weekly gain in the second and third trimesters, lbs.
    pub weekly: GainBand,
}

pub const IOM_GUIDELINES: [IomGuideline; 4] = [
    IomGuideline {
        category: BmiCategory::Underweight,
        total: GainBand::new(28.0, 40.0),
        weekly: GainBand::new(1.0, 1.3),
    },
    IomGuideline {
        category: BmiCategory::Normal,
        total: GainBand::new(25.0, 35.0),
        weekly: GainBand::new(0.8, 1.0),
    },
    IomGuideline {
        category: BmiCategory::Overweight,
        total: GainBand::new(15.0, 25.0),
        weekly: GainBand::new(0.5, 0.7),
    },
    IomGuideline {
        category: BmiCategory::Obese,
        total: GainBand::new(11.0, 20.0),
        weekly: GainBand::new(0.4, 0.6),
    },
];

pub fn guideline_for(category: BmiCategory) -> &'static IomGuideline {
    match category {
        BmiCategory::Underweight => &IOM_GUIDELINES[0],
        BmiCategory::Normal => &IOM_GUIDELINES[1],
        BmiCategory::Overweight => &IOM_GUIDELINES[2],
        BmiCategory::Obese => &IOM_GUIDELINES[3],
    }
}

/// Cumulative gain expected at `weeks` of gestation.
pub fn expected_gain_band(category: BmiCategory, weeks: u32) -> GainBand {
    if weeks <= FIRST_TRIMESTER_WEEKS {
        return FIRST_TRIMESTER_BAND;
    }
    let weekly = guideline_for(category).weekly;
    let weeks_past = f64::from(weeks - FIRST_TRIMESTER_WEEKS);
    GainBand::new(
        FIRST_TRIMESTER_BAND.min + weeks_past * weekly.min,
        FIRST_TRIMESTER_BAND.max + weeks_past * weekly.max,
    )
}

/// Validate the baseline values that are present.
pub fn baseline_issues(baseline: &PatientBaseline) -> Vec<ModelError> {
    let mut issues = Vec::new();
    if let Some(height) = baseline.height
        && (!height.is_finite() || height <= 0.0)
    {
        issues.push(ModelError::invalid_input(
            "height",
            height,
            "height must be a positive number of inches",
        ));
    }
    if let Some(weight) = baseline.pre_pregnancy_weight
        && (!weight.is_finite() || weight <= 0.0)
    {
        issues.push(ModelError::invalid_input(
            "prePregnancyWeight",
            weight,
            "weight must be a positive number of pounds",
        ));
    }
    issues
}

/// Compare the most recent recorded weight with the expected band.
pub fn evaluate_weight_gain(
    entries: &[&VitalsEntry],
    baseline: &PatientBaseline,
) -> Outcome<WeightGainStatus> {
    let (Some(pre_pregnancy_weight), Some(height)) =
        (baseline.pre_pregnancy_weight, baseline.height)
    else {
        debug!("weight gain skipped: baseline incomplete");
        return Outcome::not_available("pre-pregnancy weight and height are required");
    };
    let bmi = match body_mass_index(pre_pregnancy_weight, height) {
        Ok(bmi) => bmi,
        Err(error) => return Outcome::InvalidInput(error),
    };

    let Some((entry, weight)) = entries
        .iter()
        .find_map(|entry| Some((*entry, entry.weight?)))
    else {
        debug!("weight gain skipped: no recorded weight");
        return Outcome::not_available("no visit has a recorded weight");
    };
    let current_weight = match weight.to_lbs() {
        Ok(lbs) => lbs,
        Err(error) => return Outcome::InvalidInput(error),
    };
    let Some(ga) = entry.parsed_gestational_age() else {
        debug!("weight gain skipped: gestational age unreadable");
        return Outcome::not_available("gestational age of the latest weighed visit is unknown");
    };

    let category = bmi_category(bmi);
    let expected = expected_gain_band(category, ga.weeks);
    let total_gain = current_weight - pre_pregnancy_weight;
    let position = if total_gain < expected.min {
        GainPosition::Below
    } else if total_gain > expected.max {
        GainPosition::Above
    } else {
        GainPosition::OnTrack
    };

    Outcome::Available(WeightGainStatus {
        bmi,
        bmi_category: category,
        gestational_weeks: ga.weeks,
        pre_pregnancy_weight,
        current_weight,
        total_gain,
        expected_min: expected.min,
        expected_max: expected.max,
        recommended_total: guideline_for(category).total,
        on_track: expected.contains(total_gain),
        position,
    })
}

/// Visits with a usable weight, paired with that weight in pounds.
fn weighed<'a>(entries: &[&'a VitalsEntry]) -> Vec<(&'a VitalsEntry, f64)> {
    entries
        .iter()
        .filter_map(|entry| {
            let lbs = entry.weight?.to_lbs().ok()?;
            Some((*entry, lbs))
        })
        .collect()
}

/// One row per weighed visit, most recent first.
pub fn weight_history(
    entries: &[&VitalsEntry],
    baseline: &PatientBaseline,
) -> Vec<WeightHistoryRow> {
    let pre_pregnancy = baseline.usable_pre_pregnancy_weight();
    let weighed = weighed(entries);

    weighed
        .iter()
        .enumerate()
        .map(|(idx, (entry, lbs))| {
            let previous = weighed.get(idx + 1).map(|(_, lbs)| *lbs).or(pre_pregnancy);
            WeightHistoryRow {
                date: entry.date,
                gestational_age: entry.gestational_age.clone(),
                weight: *lbs,
                change: previous.map(|previous| lbs - previous),
                total_gain: pre_pregnancy.map(|pre| lbs - pre),
            }
        })
        .collect()
}

/// An interval between two weighings where gain outpaced the threshold.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RapidGain {
    /// Date of the later weighing.
    pub date: NaiveDate,
    pub lbs_per_week: f64,
}

/// Consecutive weighings, both with a readable gestational age, where the
/// later one falls after the first trimester and the rate of gain exceeds
/// `threshold_lbs_per_week`.
pub fn rapid_gain_intervals(entries: &[&VitalsEntry], threshold_lbs_per_week: f64) -> Vec<RapidGain> {
    let dated: Vec<_> = weighed(entries)
        .into_iter()
        .filter_map(|(entry, lbs)| Some((entry, lbs, entry.parsed_gestational_age()?)))
        .collect();

    dated
        .windows(2)
        .filter_map(|pair| {
            let (later, later_lbs, later_ga) = pair[0];
            let (_, earlier_lbs, earlier_ga) = pair[1];
            if later_ga.weeks <= FIRST_TRIMESTER_WEEKS {
                return None;
            }
            let weeks = later_ga.fractional_weeks() - earlier_ga.fractional_weeks();
            if weeks <= 0.0 {
                return None;
            }
            let lbs_per_week = (later_lbs - earlier_lbs) / weeks;
            (lbs_per_week > threshold_lbs_per_week).then_some(RapidGain {
                date: later.date,
                lbs_per_week,
            })
        })
        .collect()
}
