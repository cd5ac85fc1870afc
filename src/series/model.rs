use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::series::aligner;
use crate::series::error::SeriesError;

/// A single dated observation or prediction.
///
/// Dates serialize as ISO-8601 calendar dates; values are whatever unit
/// the series carries (liters, m³/s, mm). Points are built once by the
/// input provider and never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimePoint {
    pub date: NaiveDate,
    pub value: f64,
}

impl TimePoint {
    pub fn new(date: NaiveDate, value: f64) -> Self {
        Self { date, value }
    }
}

/// Extract the value column of a series.
pub fn values(points: &[TimePoint]) -> Vec<f64> {
    points.iter().map(|p| p.value).collect()
}

/// Complete input for one forecast result: observed usage, predicted
/// usage, and the weather-model series for the same forecast horizon.
///
/// Predicted usage and precipitation must share the forecast date axis
/// (one entry per forecast day, same dates, strictly increasing).
/// Historical usage is expected to precede the horizon; an overlap is
/// tolerated and logged rather than rejected, since the merged chart is a
/// plain concatenation either way.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HydroForecast {
    pub historical_usage: Vec<TimePoint>,
    pub predicted_usage: Vec<TimePoint>,
    pub precipitation: Vec<TimePoint>,
    pub river_discharge: Vec<TimePoint>,
}

impl HydroForecast {
    /// Validate the date-axis invariants at the engine boundary.
    pub fn validate(&self) -> Result<(), SeriesError> {
        check_strictly_increasing("predicted_usage", &self.predicted_usage)?;

        let date_pairs = aligner::align_records(
            "predicted_usage",
            &self.predicted_usage,
            "precipitation",
            &self.precipitation,
            |usage, precip| (usage.date, precip.date),
        )?;

        for (index, (usage_date, precipitation_date)) in date_pairs.into_iter().enumerate() {
            if usage_date != precipitation_date {
                return Err(SeriesError::DateAxisMismatch {
                    index,
                    usage_date,
                    precipitation_date,
                });
            }
        }

        if let (Some(last_observed), Some(first_predicted)) =
            (self.historical_usage.last(), self.predicted_usage.first())
        {
            if last_observed.date >= first_predicted.date {
                warn!(
                    "historical usage overlaps the forecast horizon ({} >= {})",
                    last_observed.date, first_predicted.date
                );
            }
        }

        Ok(())
    }
}

fn check_strictly_increasing(
    series: &'static str,
    points: &[TimePoint],
) -> Result<(), SeriesError> {
    for (index, pair) in points.windows(2).enumerate() {
        if pair[1].date <= pair[0].date {
            return Err(SeriesError::UnsortedDates {
                series,
                index: index + 1,
                date: pair[1].date,
            });
        }
    }
    Ok(())
}
