use chrono::{Duration, NaiveDate};
use tracing::debug;

use crate::forecast::error::ForecastError;
use crate::series::TimePoint;

/// Ordinary least squares fit of usage against days elapsed since the
/// first observation.
///
/// The regressor is the day offset from the first observed date, so
/// gaps in the historical record weight the fit correctly; the series is
/// expected chronological per the usage-series contract.
#[derive(Debug, Clone)]
pub struct LinearTrendModel {
    slope: f64,
    intercept: f64,
    origin: NaiveDate,
    last_observed: NaiveDate,
}

impl LinearTrendModel {
    /// Fit the trend on a historical usage series.
    ///
    /// Requires at least two observations on distinct dates; a single day
    /// of data has no defined slope, and the fit refuses rather than
    /// emitting NaN coefficients.
    pub fn fit(history: &[TimePoint]) -> Result<Self, ForecastError> {
        if history.len() < 2 {
            return Err(ForecastError::InsufficientData {
                required: 2,
                actual: history.len(),
            });
        }

        let origin = history[0].date;
        let day_offsets: Vec<f64> = history
            .iter()
            .map(|p| (p.date - origin).num_days() as f64)
            .collect();

        let n = day_offsets.len() as f64;
        let mean_day = day_offsets.iter().sum::<f64>() / n;
        let mean_usage = history.iter().map(|p| p.value).sum::<f64>() / n;

        let mut covariance = 0.0;
        let mut variance = 0.0;
        for (day, point) in day_offsets.iter().zip(history.iter()) {
            covariance += (day - mean_day) * (point.value - mean_usage);
            variance += (day - mean_day) * (day - mean_day);
        }

        if variance == 0.0 {
            // every observation falls on the same date
            return Err(ForecastError::InsufficientData {
                required: 2,
                actual: 1,
            });
        }

        let slope = covariance / variance;
        let intercept = mean_usage - slope * mean_day;
        let last_observed = history[history.len() - 1].date;

        debug!(
            "Fitted linear trend over {} observations: slope={}, intercept={}, origin={}",
            history.len(),
            slope,
            intercept,
            origin
        );

        Ok(Self {
            slope,
            intercept,
            origin,
            last_observed,
        })
    }

    /// Usage estimate for an arbitrary date.
    pub fn value_at(&self, date: NaiveDate) -> f64 {
        let day = (date - self.origin).num_days() as f64;
        self.intercept + self.slope * day
    }

    /// Predict daily usage for the next `horizon_days` days after the
    /// last observed date.
    pub fn predict(&self, horizon_days: u32) -> Vec<TimePoint> {
        (1..=i64::from(horizon_days))
            .map(|offset| {
                let date = self.last_observed + Duration::days(offset);
                TimePoint::new(date, self.value_at(date))
            })
            .collect()
    }
}
