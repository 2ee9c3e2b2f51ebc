use std::time::Instant;

use anyhow::{Context, Result};
use tracing::{info, info_span};

use prenatal_cli::input::{load_chart, load_options};
use prenatal_core::{Clock, Evaluator, FixedClock, SystemClock};
use prenatal_model::VitalsAssessment;

use crate::cli::{EvaluateArgs, OutputFormatArg};
use crate::summary::{print_assessment, print_guidelines};

/// Load, evaluate and return the assessment for one chart.
pub fn evaluate_chart(args: &EvaluateArgs) -> Result<VitalsAssessment> {
    let span = info_span!("chart", chart = %args.chart.display());
    let _guard = span.enter();
    let start = Instant::now();

    let options = load_options(args.config.as_deref())?;
    let chart = load_chart(&args.chart)?;
    let today = args.as_of.unwrap_or_else(|| SystemClock.today());
    let evaluator = Evaluator::new(options).with_clock(FixedClock::new(today));
    let assessment = evaluator.evaluate(&chart.entries, &chart.baseline);

    info!(
        evaluated_on = %assessment.evaluated_on,
        alerts = assessment.alerts.len(),
        duration_ms = start.elapsed().as_millis(),
        "chart evaluated"
    );
    Ok(assessment)
}

pub fn run_evaluate(args: &EvaluateArgs) -> Result<VitalsAssessment> {
    let assessment = evaluate_chart(args)?;
    match args.format {
        OutputFormatArg::Table => print_assessment(&assessment),
        OutputFormatArg::Json => {
            let json =
                serde_json::to_string_pretty(&assessment).context("serialize assessment")?;
            println!("{json}");
        }
    }
    Ok(assessment)
}

pub fn run_guidelines() -> Result<()> {
    print_guidelines();
    Ok(())
}
