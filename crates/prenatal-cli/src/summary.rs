use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use prenatal_core::IOM_GUIDELINES;
use prenatal_core::weight_gain::FIRST_TRIMESTER_BAND;
use prenatal_model::{
    GainBand, LatestClassifications, Outcome, Severity, VitalsAssessment, WeightGainStatus,
};

pub fn print_assessment(assessment: &VitalsAssessment) {
    println!("Evaluated on: {}", assessment.evaluated_on);
    println!("{}", summary_table(assessment));
    if let Some(latest) = &assessment.latest {
        println!();
        println!("Latest visit ({}):", latest.date);
        println!("{}", latest_table(latest));
    }
    println!();
    print_weight_gain(&assessment.weight_gain);
    if !assessment.trends.is_empty() {
        println!();
        println!("Trends:");
        println!("{}", trends_table(assessment));
    }
    println!();
    if assessment.alerts.is_empty() {
        println!("No alerts in the current window.");
    } else {
        println!("Alerts:");
        println!("{}", alerts_table(assessment));
    }
    if !assessment.input_issues.is_empty() {
        eprintln!("Rejected inputs:");
        for issue in &assessment.input_issues {
            match issue.date {
                Some(date) => eprintln!("- {date}: {}", issue.error),
                None => eprintln!("- baseline: {}", issue.error),
            }
        }
    }
}

pub fn summary_table(assessment: &VitalsAssessment) -> Table {
    let summary = &assessment.summary;
    let mut table = Table::new();
    table.set_header(vec![header_cell("Statistic"), header_cell("Value")]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);

    let signed = |value: Option<i32>| value.map_or("-".to_string(), |v| format!("{v:+}"));
    table.add_row(vec![Cell::new("Visits"), Cell::new(summary.total_visits)]);
    table.add_row(vec![
        Cell::new("Critical visits (all history)"),
        count_cell(summary.critical_alert_count, Color::Red),
    ]);
    table.add_row(vec![
        Cell::new("Critical alerts"),
        count_cell(summary.surfaced_critical, Color::Red),
    ]);
    table.add_row(vec![
        Cell::new("Warning alerts"),
        count_cell(summary.surfaced_warning, Color::Yellow),
    ]);
    table.add_row(vec![
        Cell::new("Latest BP"),
        optional_cell(summary.latest_blood_pressure.map(|bp| format!("{bp} mmHg"))),
    ]);
    table.add_row(vec![
        Cell::new("Latest FHR"),
        optional_cell(summary.latest_fetal_heart_rate.map(|bpm| format!("{bpm} bpm"))),
    ]);
    table.add_row(vec![
        Cell::new("Weight gain"),
        optional_cell(summary.latest_weight_gain.map(|lbs| format!("{lbs:+.1} lbs"))),
    ]);
    table.add_row(vec![
        Cell::new("Edema"),
        optional_cell(summary.latest_edema.map(|grade| grade.to_string())),
    ]);
    table.add_row(vec![
        Cell::new("Change since previous visit"),
        Cell::new(format!(
            "BP {}/{} mmHg, weight {}",
            signed(summary.systolic_delta),
            signed(summary.diastolic_delta),
            summary
                .weight_delta
                .map_or("-".to_string(), |lbs| format!("{lbs:+.1} lbs")),
        )),
    ]);
    table
}

pub fn latest_table(latest: &LatestClassifications) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Metric"),
        header_cell("Status"),
        header_cell("Severity"),
        header_cell("Note"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Center);

    let bp = &latest.blood_pressure;
    table.add_row(vec![
        Cell::new("Blood pressure"),
        Cell::new(bp.category),
        severity_cell(bp.severity),
        Cell::new(&bp.action),
    ]);
    let fhr = &latest.fetal_heart_rate;
    table.add_row(vec![
        Cell::new("Fetal heart rate"),
        Cell::new(fhr.status),
        severity_cell(fhr.severity),
        Cell::new(&fhr.note),
    ]);
    let fundal = &latest.fundal_height;
    table.add_row(vec![
        Cell::new("Fundal height"),
        Cell::new(fundal.status),
        severity_cell(fundal.severity),
        Cell::new(&fundal.note),
    ]);
    table.add_row(vec![
        Cell::new("Pulse"),
        Cell::new(&latest.pulse.status),
        severity_cell(latest.pulse.severity),
        Cell::new(&latest.pulse.note),
    ]);
    match &latest.temperature {
        Outcome::Available(temperature) => table.add_row(vec![
            Cell::new("Temperature"),
            Cell::new(&temperature.status),
            severity_cell(temperature.severity),
            Cell::new(&temperature.note),
        ]),
        Outcome::NotAvailable(reason) => table.add_row(vec![
            Cell::new("Temperature"),
            dim_cell("-"),
            dim_cell("-"),
            Cell::new(reason),
        ]),
        Outcome::InvalidInput(error) => table.add_row(vec![
            Cell::new("Temperature"),
            Cell::new("Rejected").fg(Color::Magenta),
            dim_cell("-"),
            Cell::new(error),
        ]),
    };
    for finding in &latest.findings {
        table.add_row(vec![
            Cell::new(finding.kind),
            Cell::new(&finding.grade),
            severity_cell(finding.severity),
            Cell::new(&finding.note),
        ]);
    }
    table
}

fn print_weight_gain(outcome: &Outcome<WeightGainStatus>) {
    match outcome {
        Outcome::Available(status) => {
            println!("Weight gain:");
            println!("{}", weight_gain_table(status));
        }
        Outcome::NotAvailable(reason) => println!("Weight gain: not available ({reason})"),
        Outcome::InvalidInput(error) => println!("Weight gain: rejected ({error})"),
    }
}

pub fn weight_gain_table(status: &WeightGainStatus) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("BMI"),
        header_cell("Category"),
        header_cell("Week"),
        header_cell("Gain"),
        header_cell("Expected"),
        header_cell("By delivery"),
        header_cell("On track"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Right);
    align_column(&mut table, 6, CellAlignment::Center);

    let on_track = if status.on_track {
        Cell::new("✓")
            .fg(Color::Green)
            .add_attribute(Attribute::Bold)
    } else {
        Cell::new("✗")
            .fg(Color::Yellow)
            .add_attribute(Attribute::Bold)
    };
    table.add_row(vec![
        Cell::new(format!("{:.1}", status.bmi)),
        Cell::new(status.bmi_category),
        Cell::new(status.gestational_weeks),
        Cell::new(format!("{:+.1} lbs", status.total_gain)),
        Cell::new(band_text(GainBand::new(status.expected_min, status.expected_max))),
        Cell::new(band_text(status.recommended_total)),
        on_track,
    ]);
    table
}

pub fn trends_table(assessment: &VitalsAssessment) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Metric"),
        header_cell("Direction"),
        header_cell("Change"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Right);
    for trend in &assessment.trends {
        table.add_row(vec![
            Cell::new(trend.metric),
            Cell::new(&trend.label),
            Cell::new(format!("{:+.1}", trend.delta)),
        ]);
    }
    table
}

pub fn alerts_table(assessment: &VitalsAssessment) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Date"),
        header_cell("Severity"),
        header_cell("Category"),
        header_cell("Finding"),
        header_cell("Action"),
    ]);
    apply_alert_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Center);
    for alert in &assessment.alerts {
        table.add_row(vec![
            Cell::new(alert.date),
            severity_cell(alert.severity),
            Cell::new(alert.category),
            Cell::new(&alert.message),
            Cell::new(&alert.action),
        ]);
    }
    table
}

pub fn guidelines_table() -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("BMI category"),
        header_cell("Total gain (lbs)"),
        header_cell("Weekly, 2nd-3rd trimester (lbs)"),
    ]);
    apply_table_style(&mut table);
    for guideline in &IOM_GUIDELINES {
        table.add_row(vec![
            Cell::new(guideline.category)
                .fg(Color::Blue)
                .add_attribute(Attribute::Bold),
            Cell::new(band_text(guideline.total)),
            Cell::new(band_text(guideline.weekly)),
        ]);
    }
    table
}

pub fn print_guidelines() {
    println!("{}", guidelines_table());
    println!(
        "First trimester (through week 13): {} lbs for every category.",
        band_text(FIRST_TRIMESTER_BAND)
    );
}

fn band_text(band: GainBand) -> String {
    format!("{}-{}", trim_float(band.min), trim_float(band.max))
}

fn trim_float(value: f64) -> String {
    let text = format!("{value:.1}");
    text.strip_suffix(".0").map_or(text.clone(), str::to_string)
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn apply_alert_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::DynamicFullWidth)
        .set_width(160);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn severity_color(severity: Severity) -> Color {
    match severity {
        Severity::Critical => Color::Red,
        Severity::High | Severity::Warning => Color::Yellow,
        Severity::Moderate | Severity::Monitor => Color::Magenta,
        Severity::Low | Severity::Info => Color::Blue,
        Severity::None => Color::DarkGrey,
    }
}

fn severity_cell(severity: Severity) -> Cell {
    let cell = Cell::new(severity.as_str().to_uppercase()).fg(severity_color(severity));
    if severity == Severity::Critical {
        cell.add_attribute(Attribute::Bold)
    } else {
        cell
    }
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color).add_attribute(Attribute::Bold)
    } else {
        dim_cell(count)
    }
}

fn optional_cell(value: Option<String>) -> Cell {
    value.map_or_else(|| dim_cell("-"), Cell::new)
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn band_text_trims_whole_numbers() {
        assert_eq!(band_text(GainBand::new(25.0, 35.0)), "25-35");
        assert_eq!(band_text(GainBand::new(0.8, 1.0)), "0.8-1");
    }

    #[test]
    fn guidelines_table_lists_every_category() {
        let rendered = guidelines_table().to_string();
        for label in ["underweight", "normal", "overweight", "obese"] {
            assert!(rendered.contains(label), "missing {label}");
        }
        assert!(rendered.contains("28-40"));
    }
}
