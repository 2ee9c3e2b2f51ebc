//! Maternal pulse and temperature.

use prenatal_model::{Result, Severity, Temperature, VitalSignClassification};

pub fn classify_pulse(pulse: Option<u16>) -> VitalSignClassification {
    let Some(bpm) = pulse else {
        return VitalSignClassification::not_recorded();
    };
    match bpm {
        b if b > 120 => VitalSignClassification::new(
            "Severe Tachycardia",
            Severity::Critical,
            "Assess for hemorrhage, infection or cardiac cause immediately",
        ),
        b if b < 50 => VitalSignClassification::new(
            "Severe Bradycardia",
            Severity::Critical,
            "Obtain ECG and notify provider",
        ),
        b if b > 100 => VitalSignClassification::new(
            "Tachycardia",
            Severity::High,
            "Check for fever, dehydration, anemia or anxiety",
        ),
        b if b < 60 => VitalSignClassification::new(
            "Bradycardia",
            Severity::Low,
            "Recheck; may be normal in athletic patients",
        ),
        _ => VitalSignClassification::new("Normal", Severity::None, ""),
    }
}

/// # Errors
///
/// Propagates [`prenatal_model::ModelError::InvalidInput`] from unit
/// conversion when the reading is implausible.
pub fn classify_temperature(temperature: Option<Temperature>) -> Result<VitalSignClassification> {
    let Some(temperature) = temperature else {
        return Ok(VitalSignClassification::not_recorded());
    };
    let celsius = temperature.to_celsius()?;
    let classification = if celsius >= 39.5 {
        VitalSignClassification::new(
            "High Fever",
            Severity::Critical,
            "Evaluate for chorioamnionitis or sepsis, start antipyretics",
        )
    } else if celsius < 35.0 {
        VitalSignClassification::new(
            "Hypothermia",
            Severity::Critical,
            "Warm patient and evaluate for sepsis",
        )
    } else if celsius > 38.0 {
        VitalSignClassification::new(
            "Fever",
            Severity::High,
            "Identify infection source, monitor fetal heart rate",
        )
    } else if celsius < 36.0 {
        VitalSignClassification::new("Low Temperature", Severity::Low, "Recheck temperature")
    } else {
        VitalSignClassification::new("Normal", Severity::None, "")
    };
    Ok(classification)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pulse_bands() {
        assert_eq!(classify_pulse(Some(121)).severity, Severity::Critical);
        assert_eq!(classify_pulse(Some(49)).severity, Severity::Critical);
        assert_eq!(classify_pulse(Some(101)).status, "Tachycardia");
        assert_eq!(classify_pulse(Some(55)).status, "Bradycardia");
        assert_eq!(classify_pulse(Some(80)).status, "Normal");
        assert_eq!(classify_pulse(None).status, "Not recorded");
    }

    #[test]
    fn test_temperature_bands() {
        let fever = classify_temperature(Some(Temperature::fahrenheit(101.0))).unwrap();
        assert_eq!(fever.status, "Fever");
        let high = classify_temperature(Some(Temperature::celsius(39.5))).unwrap();
        assert_eq!(high.severity, Severity::Critical);
        let normal = classify_temperature(Some(Temperature::fahrenheit(98.6))).unwrap();
        assert_eq!(normal.status, "Normal");
        assert!(classify_temperature(Some(Temperature::fahrenheit(986.0))).is_err());
    }
}
