use serde::Serialize;
use tracing::debug;

use crate::series::SeriesError;

/// Scalar usage summary over the forecast horizon.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SummaryStats {
    pub average: f64,
    pub peak: f64,
    pub total: f64,
}

/// Compute average, peak and total over a value sequence.
///
/// Empty input is rejected up front: average and peak are undefined over
/// zero values, and the check must run before the division so an
/// undefined average can never surface as NaN.
pub fn summarize(values: &[f64]) -> Result<SummaryStats, SeriesError> {
    if values.is_empty() {
        return Err(SeriesError::EmptySeries { operation: "summarize" });
    }

    let total: f64 = values.iter().sum();
    let average = total / values.len() as f64;
    let peak = values.iter().copied().fold(values[0], f64::max);

    debug!(
        "Summarized {} values: average={}, peak={}, total={}",
        values.len(),
        average,
        peak,
        total
    );

    Ok(SummaryStats {
        average,
        peak,
        total: normalize_zero(total),
    })
}

/// Normalize -0.0 to 0.0 for cleaner API responses
fn normalize_zero(value: f64) -> f64 {
    if value == 0.0 {
        0.0 // Converts both 0.0 and -0.0 to 0.0
    } else {
        value
    }
}
