use prenatal_model::{FhrClassification, FhrStatus, Severity};

/// Lower bound of the normal baseline, bpm.
pub const FHR_NORMAL_MIN: u16 = 110;
/// Upper bound of the normal baseline, bpm.
pub const FHR_NORMAL_MAX: u16 = 160;

pub fn classify_fetal_heart_rate(fhr: Option<u16>) -> FhrClassification {
    let Some(bpm) = fhr else {
        return FhrClassification {
            status: FhrStatus::NotRecorded,
            severity: Severity::None,
            note: "Doppler or auscultation not documented".to_string(),
        };
    };

    if bpm < FHR_NORMAL_MIN {
        FhrClassification {
            status: FhrStatus::Bradycardia,
            severity: Severity::Critical,
            note: "Rule out heart block or cord compression, perform NST".to_string(),
        }
    } else if bpm > FHR_NORMAL_MAX {
        FhrClassification {
            status: FhrStatus::Tachycardia,
            severity: Severity::Warning,
            note: "Rule out maternal fever, infection, fetal anemia or arrhythmia".to_string(),
        }
    } else {
        FhrClassification {
            status: FhrStatus::Normal,
            severity: Severity::None,
            note: format!("Within normal range ({FHR_NORMAL_MIN}-{FHR_NORMAL_MAX} bpm)"),
        }
    }
}
