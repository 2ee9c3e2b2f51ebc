//! Single-metric classifiers.
//!
//! Classifiers are total over their input: an absent measurement maps to an
//! explicit "not recorded" outcome. Only out-of-domain values (ketone 4+,
//! implausible temperatures) are reported as errors.

mod bp;
mod fhr;
mod fundal;
mod maternal;
mod preeclampsia;
mod urinalysis;

pub use bp::classify_blood_pressure;
pub use fhr::{FHR_NORMAL_MAX, FHR_NORMAL_MIN, classify_fetal_heart_rate};
pub use fundal::{FUNDAL_MIN_WEEKS, classify_fundal_height};
pub use maternal::{classify_pulse, classify_temperature};
pub use preeclampsia::{PREECLAMPSIA_SYSTOLIC, entry_has_preeclampsia_risk, is_preeclampsia_risk};
pub use urinalysis::{classify_edema, classify_glucose, classify_ketones, classify_protein};
