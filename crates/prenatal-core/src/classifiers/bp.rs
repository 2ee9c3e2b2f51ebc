//! Blood pressure ladder.

use prenatal_model::{BpCategory, BpClassification, Severity};

use crate::calculators::mean_arterial_pressure;

/// One rung of the ladder.
struct BpRule {
    category: BpCategory,
    severity: Severity,
    matches: fn(u16, u16) -> bool,
    action: &'static str,
}

/// Ordered from most to least severe; the first matching rung wins, so a
/// reading on a boundary lands in the more severe bucket.
const BP_LADDER: &[BpRule] = &[
    BpRule {
        category: BpCategory::SevereHypertension,
        severity: Severity::Critical,
        matches: |sys, dia| sys >= 160 || dia >= 110,
        action: "URGENT: Evaluate for preeclampsia, consider antihypertensives, notify provider immediately",
    },
    BpRule {
        category: BpCategory::Stage2Hypertension,
        severity: Severity::High,
        matches: |sys, dia| sys >= 140 || dia >= 90,
        action: "Evaluate for gestational hypertension or preeclampsia, check urine protein and labs",
    },
    BpRule {
        category: BpCategory::Stage1Hypertension,
        severity: Severity::Moderate,
        matches: |sys, dia| sys >= 130 || dia >= 85,
        action: "Increase BP monitoring frequency, review preeclampsia symptoms",
    },
    BpRule {
        category: BpCategory::Elevated,
        severity: Severity::Low,
        matches: |sys, dia| sys >= 120 || dia >= 80,
        action: "Continue routine monitoring",
    },
    BpRule {
        category: BpCategory::Hypotension,
        severity: Severity::Monitor,
        matches: |sys, dia| sys < 90 || dia < 60,
        action: "Assess hydration and symptoms of dizziness",
    },
];

const NORMAL_ACTION: &str = "Continue routine prenatal care";

/// Classify one reading. A missing systolic or diastolic value yields
/// [`BpCategory::Unknown`].
pub fn classify_blood_pressure(systolic: Option<u16>, diastolic: Option<u16>) -> BpClassification {
    let (Some(sys), Some(dia)) = (systolic, diastolic) else {
        return BpClassification {
            category: BpCategory::Unknown,
            severity: Severity::None,
            map: None,
            action: "Measure BP".to_string(),
        };
    };

    let map = mean_arterial_pressure(sys, dia);
    let (category, severity, action) = BP_LADDER
        .iter()
        .find(|rule| (rule.matches)(sys, dia))
        .map_or((BpCategory::Normal, Severity::Low, NORMAL_ACTION), |rule| {
            (rule.category, rule.severity, rule.action)
        });

    BpClassification {
        category,
        severity,
        map: Some(map),
        action: format!("{action} (MAP {map} mmHg)"),
    }
}
