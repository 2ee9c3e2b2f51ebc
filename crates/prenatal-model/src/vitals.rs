//! Visit records and the patient baseline.
//!
//! A [`VitalsEntry`] is one prenatal visit as charted. Every measurement is
//! optional; downstream classifiers map absent values to explicit
//! "not recorded" outcomes instead of failing.

use std::fmt;

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::enums::{EdemaGrade, FetalPosition, TemperatureUnit, UrineGrade, WeightUnit};
use crate::error::{ModelError, Result};

/// Pounds per kilogram.
pub const LBS_PER_KG: f64 = 2.20462;

/// Plausible maternal body temperature range in Celsius.
const TEMPERATURE_RANGE_C: (f64, f64) = (25.0, 45.0);

/// Gestational age as charted ("24w 3d").
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct GestationalAge {
    pub weeks: u32,
    pub days: u32,
}

impl GestationalAge {
    /// Parse the integer before the first `w` marker that follows a number,
    /// and the integer before a `d` marker if one follows.
    ///
    /// Letters `w` in free text ("Twins 24w") are skipped. Returns `None`
    /// when no week count can be read or the week count is zero; both
    /// disable gestational-age dependent checks.
    pub fn parse(raw: &str) -> Option<Self> {
        let lower = raw.to_ascii_lowercase();
        let (w_pos, weeks) = lower
            .match_indices('w')
            .find_map(|(pos, _)| Some((pos, trailing_integer(&lower[..pos])?)))?;
        if weeks == 0 {
            return None;
        }
        let rest = &lower[w_pos + 1..];
        let days = rest
            .find('d')
            .and_then(|d_pos| trailing_integer(&rest[..d_pos]))
            .unwrap_or(0);
        Some(Self { weeks, days })
    }

    /// Weeks including the day fraction, used for rate calculations.
    pub fn fractional_weeks(&self) -> f64 {
        f64::from(self.weeks) + f64::from(self.days) / 7.0
    }
}

impl fmt::Display for GestationalAge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}w {}d", self.weeks, self.days)
    }
}

fn trailing_integer(text: &str) -> Option<u32> {
    let trimmed = text.trim_end();
    let digits_start = trimmed
        .char_indices()
        .rev()
        .take_while(|(_, ch)| ch.is_ascii_digit())
        .last()
        .map(|(idx, _)| idx)?;
    trimmed[digits_start..].parse().ok()
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Weight {
    pub value: f64,
    #[serde(default)]
    pub unit: WeightUnit,
}

impl Weight {
    pub fn lbs(value: f64) -> Self {
        Self {
            value,
            unit: WeightUnit::Lbs,
        }
    }

    pub fn kg(value: f64) -> Self {
        Self {
            value,
            unit: WeightUnit::Kg,
        }
    }

    /// Weight normalised to pounds.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::InvalidInput`] for non-finite or non-positive values.
    pub fn to_lbs(&self) -> Result<f64> {
        if !self.value.is_finite() || self.value <= 0.0 {
            return Err(ModelError::invalid_input(
                "weight",
                format!("{} {}", self.value, self.unit.as_str()),
                "weight must be a positive number",
            ));
        }
        Ok(match self.unit {
            WeightUnit::Lbs => self.value,
            WeightUnit::Kg => self.value * LBS_PER_KG,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BloodPressure {
    pub systolic: u16,
    pub diastolic: u16,
}

impl BloodPressure {
    pub fn new(systolic: u16, diastolic: u16) -> Self {
        Self {
            systolic,
            diastolic,
        }
    }
}

impl fmt::Display for BloodPressure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.systolic, self.diastolic)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Temperature {
    pub value: f64,
    #[serde(default)]
    pub unit: TemperatureUnit,
}

impl Temperature {
    pub fn fahrenheit(value: f64) -> Self {
        Self {
            value,
            unit: TemperatureUnit::F,
        }
    }

    pub fn celsius(value: f64) -> Self {
        Self {
            value,
            unit: TemperatureUnit::C,
        }
    }

    /// Temperature normalised to Celsius.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::InvalidInput`] when the value is not finite or
    /// falls outside the plausible range for a living patient.
    pub fn to_celsius(&self) -> Result<f64> {
        let celsius = match self.unit {
            TemperatureUnit::C => self.value,
            TemperatureUnit::F => (self.value - 32.0) * 5.0 / 9.0,
        };
        let (low, high) = TEMPERATURE_RANGE_C;
        if !celsius.is_finite() || celsius < low || celsius > high {
            return Err(ModelError::invalid_input(
                "temperature",
                format!("{} {}", self.value, self.unit.as_str()),
                format!("temperature must be between {low} and {high} C"),
            ));
        }
        Ok(celsius)
    }
}

/// One prenatal visit record.
///
/// Records are never edited in place: an edit produces a new `version`
/// sharing the same `id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VitalsEntry {
    #[serde(default)]
    pub id: String,
    #[serde(default = "default_version")]
    pub version: u32,
    pub date: NaiveDate,
    #[serde(default, with = "clock_time")]
    pub time: Option<NaiveTime>,
    #[serde(default)]
    pub gestational_age: String,
    pub weight: Option<Weight>,
    pub blood_pressure: Option<BloodPressure>,
    pub pulse: Option<u16>,
    pub respiratory_rate: Option<u16>,
    pub temperature: Option<Temperature>,
    /// Fundal height in centimetres.
    pub fundal_height: Option<f64>,
    pub fetal_heart_rate: Option<u16>,
    pub fetal_position: Option<FetalPosition>,
    #[serde(default)]
    pub edema: EdemaGrade,
    pub urine_protein: Option<UrineGrade>,
    pub urine_glucose: Option<UrineGrade>,
    pub urine_ketones: Option<UrineGrade>,
    pub notes: Option<String>,
    pub recorded_by: Option<String>,
}

fn default_version() -> u32 {
    1
}

impl VitalsEntry {
    /// Empty visit on `date`; every measurement absent.
    pub fn new(date: NaiveDate) -> Self {
        Self {
            id: String::new(),
            version: default_version(),
            date,
            time: None,
            gestational_age: String::new(),
            weight: None,
            blood_pressure: None,
            pulse: None,
            respiratory_rate: None,
            temperature: None,
            fundal_height: None,
            fetal_heart_rate: None,
            fetal_position: None,
            edema: EdemaGrade::None,
            urine_protein: None,
            urine_glucose: None,
            urine_ketones: None,
            notes: None,
            recorded_by: None,
        }
    }

    pub fn with_id(mut self, id: impl Into<String>, version: u32) -> Self {
        self.id = id.into();
        self.version = version;
        self
    }

    pub fn with_time(mut self, time: NaiveTime) -> Self {
        self.time = Some(time);
        self
    }

    pub fn with_gestational_age(mut self, gestational_age: impl Into<String>) -> Self {
        self.gestational_age = gestational_age.into();
        self
    }

    pub fn with_weight(mut self, weight: Weight) -> Self {
        self.weight = Some(weight);
        self
    }

    pub fn with_blood_pressure(mut self, systolic: u16, diastolic: u16) -> Self {
        self.blood_pressure = Some(BloodPressure::new(systolic, diastolic));
        self
    }

    pub fn with_pulse(mut self, pulse: u16) -> Self {
        self.pulse = Some(pulse);
        self
    }

    pub fn with_temperature(mut self, temperature: Temperature) -> Self {
        self.temperature = Some(temperature);
        self
    }

    pub fn with_fundal_height(mut self, centimetres: f64) -> Self {
        self.fundal_height = Some(centimetres);
        self
    }

    pub fn with_fetal_heart_rate(mut self, bpm: u16) -> Self {
        self.fetal_heart_rate = Some(bpm);
        self
    }

    pub fn with_edema(mut self, edema: EdemaGrade) -> Self {
        self.edema = edema;
        self
    }

    pub fn with_urine_protein(mut self, grade: UrineGrade) -> Self {
        self.urine_protein = Some(grade);
        self
    }

    pub fn with_urine_glucose(mut self, grade: UrineGrade) -> Self {
        self.urine_glucose = Some(grade);
        self
    }

    pub fn with_urine_ketones(mut self, grade: UrineGrade) -> Self {
        self.urine_ketones = Some(grade);
        self
    }

    /// Parsed gestational age, `None` when missing, malformed or week 0.
    pub fn parsed_gestational_age(&self) -> Option<GestationalAge> {
        GestationalAge::parse(&self.gestational_age)
    }

    /// Completed gestational weeks, 0 when unknown.
    pub fn gestational_weeks(&self) -> u32 {
        self.parsed_gestational_age().map_or(0, |ga| ga.weeks)
    }

    pub fn systolic(&self) -> Option<u16> {
        self.blood_pressure.map(|bp| bp.systolic)
    }

    pub fn diastolic(&self) -> Option<u16> {
        self.blood_pressure.map(|bp| bp.diastolic)
    }

    /// Chronological sort key. Visits without a time sort first within a day.
    pub fn sort_key(&self) -> (NaiveDate, Option<NaiveTime>) {
        (self.date, self.time)
    }
}

/// Pre-pregnancy measurements from the patient profile.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatientBaseline {
    /// Pounds.
    pub pre_pregnancy_weight: Option<f64>,
    /// Inches.
    pub height: Option<f64>,
}

impl PatientBaseline {
    pub fn new(pre_pregnancy_weight: Option<f64>, height: Option<f64>) -> Self {
        Self {
            pre_pregnancy_weight,
            height,
        }
    }

    /// Pre-pregnancy weight when it is finite and positive.
    pub fn usable_pre_pregnancy_weight(&self) -> Option<f64> {
        self.pre_pregnancy_weight.filter(|weight| weight.is_finite() && *weight > 0.0)
    }
}

/// `HH:MM` or `HH:MM:SS` visit times.
mod clock_time {
    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer, Serializer, de::Error};

    const FORMATS: [&str; 2] = ["%H:%M", "%H:%M:%S"];

    pub fn serialize<S>(value: &Option<NaiveTime>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(time) => serializer.serialize_str(&time.format("%H:%M").to_string()),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<NaiveTime>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw: Option<String> = Option::deserialize(deserializer)?;
        let Some(raw) = raw else {
            return Ok(None);
        };
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Ok(None);
        }
        FORMATS
            .iter()
            .find_map(|format| NaiveTime::parse_from_str(trimmed, format).ok())
            .map(Some)
            .ok_or_else(|| D::Error::custom(format!("invalid visit time '{trimmed}'")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gestational_age_parse() {
        assert_eq!(
            GestationalAge::parse("24w 3d"),
            Some(GestationalAge { weeks: 24, days: 3 })
        );
        assert_eq!(
            GestationalAge::parse("36w"),
            Some(GestationalAge { weeks: 36, days: 0 })
        );
        assert_eq!(
            GestationalAge::parse("GA 18 W 2 d"),
            Some(GestationalAge { weeks: 18, days: 2 })
        );
    }

    #[test]
    fn test_gestational_age_skips_words_containing_w() {
        assert_eq!(
            GestationalAge::parse("Twins 24w 3d"),
            Some(GestationalAge { weeks: 24, days: 3 })
        );
        assert_eq!(
            GestationalAge::parse("new 24w"),
            Some(GestationalAge { weeks: 24, days: 0 })
        );
        assert_eq!(
            GestationalAge::parse("wk 24w 3d"),
            Some(GestationalAge { weeks: 24, days: 3 })
        );
    }

    #[test]
    fn test_gestational_age_unparsable_is_none() {
        assert_eq!(GestationalAge::parse(""), None);
        assert_eq!(GestationalAge::parse("unknown"), None);
        assert_eq!(GestationalAge::parse("w3d"), None);
        assert_eq!(GestationalAge::parse("0w 4d"), None);
    }

    #[test]
    fn test_weight_to_lbs() {
        assert_eq!(Weight::lbs(150.0).to_lbs().unwrap(), 150.0);
        let kg = Weight::kg(70.0).to_lbs().unwrap();
        assert!((kg - 154.3234).abs() < 1e-4);
        assert!(Weight::lbs(-3.0).to_lbs().is_err());
        assert!(Weight::kg(0.0).to_lbs().is_err());
    }

    #[test]
    fn test_temperature_to_celsius() {
        let c = Temperature::fahrenheit(98.6).to_celsius().unwrap();
        assert!((c - 37.0).abs() < 1e-9);
        assert!(Temperature::celsius(60.0).to_celsius().is_err());
        assert!(Temperature::celsius(f64::NAN).to_celsius().is_err());
    }
}
