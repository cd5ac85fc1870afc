use std::collections::HashMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::forecast::error::ForecastError;
use crate::series::TimePoint;

/// One day of weather model output: daily maximum temperature (°C) and
/// precipitation total (mm).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherPoint {
    pub date: NaiveDate,
    pub temp_max: f64,
    pub precipitation: f64,
}

/// Least-squares regression of usage against daily max temperature and
/// precipitation.
///
/// Training rows are the inner join of the usage and weather series on
/// date: usage days without a weather observation (and vice versa) are
/// ignored. Prediction maps a forecast-horizon weather series to one
/// predicted usage point per day.
#[derive(Debug, Clone)]
pub struct WeatherForecastModel {
    intercept: f64,
    temp_coefficient: f64,
    precipitation_coefficient: f64,
}

impl WeatherForecastModel {
    /// Fit the regression on historical usage and matching weather.
    pub fn fit(usage: &[TimePoint], weather: &[WeatherPoint]) -> Result<Self, ForecastError> {
        let usage_by_date: HashMap<NaiveDate, f64> =
            usage.iter().map(|p| (p.date, p.value)).collect();

        let mut rows: Vec<([f64; 3], f64)> = Vec::new();
        for day in weather {
            if let Some(&observed) = usage_by_date.get(&day.date) {
                rows.push(([1.0, day.temp_max, day.precipitation], observed));
            }
        }

        if rows.is_empty() {
            return Err(ForecastError::NoOverlappingDates);
        }
        if rows.len() < 3 {
            return Err(ForecastError::InsufficientData {
                required: 3,
                actual: rows.len(),
            });
        }

        debug!(
            "Training weather regression on {} joined rows ({} usage, {} weather)",
            rows.len(),
            usage.len(),
            weather.len()
        );

        // Normal equations (XᵀX)b = Xᵀy with X rows [1, temp_max, precipitation].
        let mut xtx = [[0.0f64; 3]; 3];
        let mut xty = [0.0f64; 3];
        for (features, observed) in &rows {
            for i in 0..3 {
                xty[i] += features[i] * observed;
                for j in 0..3 {
                    xtx[i][j] += features[i] * features[j];
                }
            }
        }

        let [intercept, temp_coefficient, precipitation_coefficient] = solve_3x3(xtx, xty)?;

        debug!(
            "Fitted weather regression: intercept={}, temp={}, precipitation={}",
            intercept, temp_coefficient, precipitation_coefficient
        );

        Ok(Self {
            intercept,
            temp_coefficient,
            precipitation_coefficient,
        })
    }

    /// Predicted usage for one day of forecast weather.
    pub fn value_for(&self, day: &WeatherPoint) -> f64 {
        self.intercept
            + self.temp_coefficient * day.temp_max
            + self.precipitation_coefficient * day.precipitation
    }

    /// Predict usage over a forecast-horizon weather series, one point
    /// per input day.
    pub fn predict(&self, horizon: &[WeatherPoint]) -> Vec<TimePoint> {
        horizon
            .iter()
            .map(|day| TimePoint::new(day.date, self.value_for(day)))
            .collect()
    }
}

/// Gaussian elimination with partial pivoting on a 3×3 system.
///
/// A vanishing pivot means the feature columns are constant or collinear
/// and the regression has no unique solution.
fn solve_3x3(mut a: [[f64; 3]; 3], mut b: [f64; 3]) -> Result<[f64; 3], ForecastError> {
    const PIVOT_EPSILON: f64 = 1e-9;

    for col in 0..3 {
        let mut pivot_row = col;
        for row in (col + 1)..3 {
            if a[row][col].abs() > a[pivot_row][col].abs() {
                pivot_row = row;
            }
        }
        if a[pivot_row][col].abs() < PIVOT_EPSILON {
            return Err(ForecastError::DegenerateFeatures);
        }
        a.swap(col, pivot_row);
        b.swap(col, pivot_row);

        for row in (col + 1)..3 {
            let factor = a[row][col] / a[col][col];
            for k in col..3 {
                a[row][k] -= factor * a[col][k];
            }
            b[row] -= factor * b[col];
        }
    }

    let mut solution = [0.0f64; 3];
    for row in (0..3).rev() {
        let mut value = b[row];
        for col in (row + 1)..3 {
            value -= a[row][col] * solution[col];
        }
        solution[row] = value / a[row][row];
    }

    Ok(solution)
}
