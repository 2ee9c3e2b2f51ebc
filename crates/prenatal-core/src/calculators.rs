//! Derived physiological quantities.

use prenatal_model::{BmiCategory, ModelError, Result};

/// Conversion factor for BMI computed from pounds and inches.
const BMI_IMPERIAL_FACTOR: f64 = 703.0;

/// Mean arterial pressure, `round((systolic + 2 * diastolic) / 3)`.
///
/// Callers skip MAP entirely when either reading is absent.
pub fn mean_arterial_pressure(systolic: u16, diastolic: u16) -> u16 {
    let sum = f64::from(systolic) + 2.0 * f64::from(diastolic);
    // At most (65535 * 3) / 3, always fits.
    (sum / 3.0).round() as u16
}

/// Body mass index from pounds and inches.
///
/// # Errors
///
/// Returns [`ModelError::InvalidInput`] when either value is non-finite or
/// not strictly positive.
pub fn body_mass_index(weight_lbs: f64, height_in: f64) -> Result<f64> {
    if !height_in.is_finite() || height_in <= 0.0 {
        return Err(ModelError::invalid_input(
            "height",
            height_in,
            "height must be a positive number of inches",
        ));
    }
    if !weight_lbs.is_finite() || weight_lbs <= 0.0 {
        return Err(ModelError::invalid_input(
            "prePregnancyWeight",
            weight_lbs,
            "weight must be a positive number of pounds",
        ));
    }
    Ok(weight_lbs / (height_in * height_in) * BMI_IMPERIAL_FACTOR)
}

pub fn bmi_category(bmi: f64) -> BmiCategory {
    if bmi < 18.5 {
        BmiCategory::Underweight
    } else if bmi < 25.0 {
        BmiCategory::Normal
    } else if bmi < 30.0 {
        BmiCategory::Overweight
    } else {
        BmiCategory::Obese
    }
}
