//! Chart and configuration files.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use prenatal_core::EvaluationOptions;
use prenatal_model::{PatientBaseline, VitalsEntry};

/// A patient's chart as exported by the host record system.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Chart {
    #[serde(default)]
    pub baseline: PatientBaseline,
    #[serde(default)]
    pub entries: Vec<VitalsEntry>,
}

pub fn parse_chart(json: &str) -> Result<Chart> {
    serde_json::from_str(json).context("parse chart JSON")
}

pub fn load_chart(path: &Path) -> Result<Chart> {
    let content =
        fs::read_to_string(path).with_context(|| format!("read chart {}", path.display()))?;
    let chart = parse_chart(&content).with_context(|| format!("load {}", path.display()))?;
    info!(entries = chart.entries.len(), "chart loaded");
    Ok(chart)
}

pub fn parse_options(toml_text: &str) -> Result<EvaluationOptions> {
    toml::from_str(toml_text).context("parse evaluation options TOML")
}

/// Options from `path`, or the defaults when no file is given.
pub fn load_options(path: Option<&Path>) -> Result<EvaluationOptions> {
    let Some(path) = path else {
        debug!("no config file given, using default thresholds");
        return Ok(EvaluationOptions::default());
    };
    let content =
        fs::read_to_string(path).with_context(|| format!("read config {}", path.display()))?;
    let options = parse_options(&content).with_context(|| format!("load {}", path.display()))?;
    info!(config = %path.display(), "evaluation options loaded");
    Ok(options)
}
