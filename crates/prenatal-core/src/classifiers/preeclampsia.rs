use prenatal_model::{UrineGrade, VitalsEntry};

/// Systolic pressure at which proteinuria signals preeclampsia risk.
pub const PREECLAMPSIA_SYSTOLIC: u16 = 140;

/// Any positive urine protein together with a systolic reading of
/// [`PREECLAMPSIA_SYSTOLIC`] or more.
pub fn is_preeclampsia_risk(protein: Option<UrineGrade>, systolic: Option<u16>) -> bool {
    let positive_protein = protein.is_some_and(|grade| !grade.is_negative());
    positive_protein && systolic.is_some_and(|sys| sys >= PREECLAMPSIA_SYSTOLIC)
}

pub fn entry_has_preeclampsia_risk(entry: &VitalsEntry) -> bool {
    is_preeclampsia_risk(entry.urine_protein, entry.systolic())
}
