//! Direction of key metrics across the most recent visits.

use prenatal_model::{Direction, PatientBaseline, TrendDirection, TrendMetric, VitalsEntry};

use crate::options::EvaluationOptions;

/// Trends over the first `options.trend_window` visits of `entries`, which
/// must be ordered most recent first.
///
/// A metric needs at least two visits recording it inside the window;
/// otherwise it is omitted.
pub fn analyze_trends(
    entries: &[&VitalsEntry],
    baseline: &PatientBaseline,
    options: &EvaluationOptions,
) -> Vec<TrendDirection> {
    let window = &entries[..entries.len().min(options.trend_window)];
    let mut trends = Vec::new();

    if let Some(delta) = window_delta(window, |entry| entry.systolic().map(f64::from)) {
        let direction = threshold_direction(delta, options.bp_trend_threshold);
        trends.push(TrendDirection {
            metric: TrendMetric::SystolicBloodPressure,
            direction,
            delta,
            label: direction.as_str().to_string(),
        });
    }

    if let Some(pre_pregnancy) = baseline.usable_pre_pregnancy_weight()
        && let Some(delta) = window_delta(window, |entry| {
            let lbs = entry.weight?.to_lbs().ok()?;
            Some(lbs - pre_pregnancy)
        })
    {
        let (direction, label) = if delta > 0.0 {
            (Direction::Rising, "gaining")
        } else if delta < 0.0 {
            (Direction::Falling, "losing")
        } else {
            (Direction::Stable, "stable")
        };
        trends.push(TrendDirection {
            metric: TrendMetric::WeightGain,
            direction,
            delta,
            label: label.to_string(),
        });
    }

    if let Some(delta) = window_delta(window, |entry| entry.fetal_heart_rate.map(f64::from)) {
        let direction = threshold_direction(delta, options.fhr_trend_threshold);
        let label = match direction {
            Direction::Stable => "reassuring".to_string(),
            moving => format!("variable ({moving})"),
        };
        trends.push(TrendDirection {
            metric: TrendMetric::FetalHeartRate,
            direction,
            delta,
            label,
        });
    }

    trends
}

/// Most recent minus oldest value among visits recording the metric.
fn window_delta(
    window: &[&VitalsEntry],
    value: impl Fn(&VitalsEntry) -> Option<f64>,
) -> Option<f64> {
    let values: Vec<f64> = window.iter().filter_map(|entry| value(*entry)).collect();
    match values.as_slice() {
        [latest, .., oldest] => Some(latest - oldest),
        _ => None,
    }
}

fn threshold_direction(delta: f64, threshold: f64) -> Direction {
    if delta > threshold {
        Direction::Rising
    } else if delta < -threshold {
        Direction::Falling
    } else {
        Direction::Stable
    }
}
