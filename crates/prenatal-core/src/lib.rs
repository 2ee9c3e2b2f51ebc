pub mod alerts;
pub mod calculators;
pub mod classifiers;
pub mod clock;
pub mod engine;
pub mod options;
pub mod summary;
pub mod trend;
pub mod weight_gain;

pub use alerts::{
    AlertAggregator, AlertRule, BloodPressureRule, EdemaRule, FetalHeartRateRule,
    FundalHeightRule, PreeclampsiaRule, UrinalysisRule, finalize_alerts,
};
pub use calculators::{bmi_category, body_mass_index, mean_arterial_pressure};
pub use classifiers::{
    classify_blood_pressure, classify_edema, classify_fetal_heart_rate, classify_fundal_height,
    classify_glucose, classify_ketones, classify_protein, classify_pulse, classify_temperature,
    is_preeclampsia_risk,
};
pub use clock::{Clock, FixedClock, SystemClock};
pub use engine::{Evaluator, evaluate, ordered_visits};
pub use options::EvaluationOptions;
pub use summary::{build_summary, is_critical_visit};
pub use trend::analyze_trends;
pub use weight_gain::{
    IOM_GUIDELINES, IomGuideline, RapidGain, evaluate_weight_gain, expected_gain_band,
    guideline_for, rapid_gain_intervals, weight_history,
};
