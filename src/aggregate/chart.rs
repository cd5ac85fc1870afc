use chrono::NaiveDate;
use serde::Serialize;
use tracing::debug;

use crate::series::{SeriesError, TimePoint};

/// One chart-ready record. Exactly one of `usage` / `predicted_usage` is
/// set, marking the record as observed or predicted; the absent field is
/// omitted from the serialized payload so the rendering layer can key off
/// field presence.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartPoint {
    pub date: NaiveDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub usage: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub predicted_usage: Option<f64>,
}

impl ChartPoint {
    fn observed(point: &TimePoint) -> Self {
        Self {
            date: point.date,
            usage: Some(point.value),
            predicted_usage: None,
        }
    }

    fn predicted(point: &TimePoint) -> Self {
        Self {
            date: point.date,
            usage: None,
            predicted_usage: Some(point.value),
        }
    }
}

/// Merge historical and predicted usage into one chart-ready series.
///
/// The historical block comes first, then the predicted block, each in
/// its source order; nothing is re-sorted or deduplicated, so a date
/// present on both sides yields two separate records. A forecast with no
/// points on either side is meaningless and is rejected, but a single
/// empty side degenerates to one-sided output.
pub fn merge_series(
    historical: &[TimePoint],
    forecast: &[TimePoint],
) -> Result<Vec<ChartPoint>, SeriesError> {
    if historical.is_empty() && forecast.is_empty() {
        return Err(SeriesError::EmptySeries { operation: "merge_series" });
    }

    let mut chart = Vec::with_capacity(historical.len() + forecast.len());
    chart.extend(historical.iter().map(ChartPoint::observed));
    chart.extend(forecast.iter().map(ChartPoint::predicted));

    debug!(
        "Merged {} historical and {} predicted points into chart series",
        historical.len(),
        forecast.len()
    );

    Ok(chart)
}
