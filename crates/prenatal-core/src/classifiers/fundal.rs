use prenatal_model::{FundalHeightClassification, FundalHeightStatus, Severity};

/// Fundal height tracks gestational weeks only from week 20 on.
pub const FUNDAL_MIN_WEEKS: u32 = 20;

/// Compare fundal height (cm) against gestational weeks.
///
/// `weeks` is 0 when gestational age could not be read, which reports
/// [`FundalHeightStatus::TooEarly`]. `tolerance_cm` is the allowed
/// absolute discordance.
pub fn classify_fundal_height(
    fundal_height: Option<f64>,
    weeks: u32,
    tolerance_cm: f64,
) -> FundalHeightClassification {
    let Some(measured) = fundal_height else {
        return unscored(FundalHeightStatus::NotMeasured, "Fundal height not documented");
    };
    if weeks < FUNDAL_MIN_WEEKS {
        return unscored(
            FundalHeightStatus::TooEarly,
            "Fundal height correlates with gestational age from 20 weeks",
        );
    }

    let expected = f64::from(weeks);
    let difference = measured - expected;
    let (status, severity, note) = if difference.abs() <= tolerance_cm {
        (
            FundalHeightStatus::Appropriate,
            Severity::None,
            format!("Within {tolerance_cm} cm of expected"),
        )
    } else if measured > expected + tolerance_cm {
        (
            FundalHeightStatus::LargeForGa,
            Severity::Warning,
            "Consider macrosomia, polyhydramnios, multiples or incorrect dating; ultrasound recommended"
                .to_string(),
        )
    } else {
        (
            FundalHeightStatus::SmallForGa,
            Severity::Critical,
            "Rule out IUGR, oligohydramnios or incorrect dating; urgent ultrasound with Doppler"
                .to_string(),
        )
    };

    FundalHeightClassification {
        status,
        severity,
        expected: Some(expected),
        difference: Some(difference),
        note,
    }
}

fn unscored(status: FundalHeightStatus, note: &str) -> FundalHeightClassification {
    FundalHeightClassification {
        status,
        severity: Severity::None,
        expected: None,
        difference: None,
        note: note.to_string(),
    }
}
