//! Dipstick urinalysis and edema findings.
//!
//! Each classifier returns `None` for a negative (or absent) result, so the
//! caller only ever sees positive findings.

use prenatal_model::{EdemaGrade, Finding, FindingKind, ModelError, Result, Severity, UrineGrade};

fn finding(kind: FindingKind, grade: &str, severity: Severity, note: &str) -> Finding {
    Finding {
        kind,
        grade: grade.to_string(),
        severity,
        note: note.to_string(),
    }
}

pub fn classify_protein(grade: Option<UrineGrade>) -> Option<Finding> {
    let grade = grade.filter(|g| !g.is_negative())?;
    Some(if grade.is_heavy() {
        finding(
            FindingKind::Protein,
            grade.as_str(),
            Severity::Critical,
            "Significant proteinuria: rule out preeclampsia immediately",
        )
    } else {
        finding(
            FindingKind::Protein,
            grade.as_str(),
            Severity::Warning,
            "Proteinuria: monitor BP and repeat urinalysis",
        )
    })
}

pub fn classify_glucose(grade: Option<UrineGrade>) -> Option<Finding> {
    let grade = grade.filter(|g| !g.is_negative())?;
    Some(finding(
        FindingKind::Glucose,
        grade.as_str(),
        Severity::Warning,
        "Glucosuria: screen for gestational diabetes",
    ))
}

/// # Errors
///
/// Ketone strips read up to 3+; a 4+ grade is rejected as
/// [`ModelError::InvalidInput`].
pub fn classify_ketones(grade: Option<UrineGrade>) -> Result<Option<Finding>> {
    let Some(grade) = grade.filter(|g| !g.is_negative()) else {
        return Ok(None);
    };
    if grade == UrineGrade::FourPlus {
        return Err(ModelError::invalid_input(
            "urineKetones",
            grade,
            "ketone grades stop at 3+",
        ));
    }
    Ok(Some(finding(
        FindingKind::Ketones,
        grade.as_str(),
        Severity::Info,
        "Ketonuria: assess hydration and nutritional intake",
    )))
}

pub fn classify_edema(grade: EdemaGrade) -> Option<Finding> {
    if grade.is_none() {
        return None;
    }
    Some(if grade >= EdemaGrade::TwoPlus {
        finding(
            FindingKind::Edema,
            grade.as_str(),
            Severity::Warning,
            "Significant edema: evaluate for preeclampsia",
        )
    } else {
        finding(
            FindingKind::Edema,
            grade.as_str(),
            Severity::Info,
            "Mild edema, common in pregnancy",
        )
    })
}
