use serde::Serialize;
use tracing::{info, instrument};

use crate::aggregate::{self, ChartPoint, SummaryStats};
use crate::risk::{RiskClassifier, RiskThresholds, RiskVerdict};
use crate::series::{model, HydroForecast, SeriesError};

/// Complete results payload for one forecast: chart-ready series, usage
/// summary, and both risk verdicts. Everything the rendering layer needs
/// to draw the results page.
#[derive(Debug, Clone, Serialize)]
pub struct ForecastReport {
    pub chart: Vec<ChartPoint>,
    pub summary: SummaryStats,
    pub flood_risk: RiskVerdict,
    pub drought_risk: RiskVerdict,
}

/// Assembles forecast results with business logic
#[derive(Debug, Clone, Default)]
pub struct ReportService {
    classifier: RiskClassifier,
}

impl ReportService {
    pub fn new(thresholds: RiskThresholds) -> Self {
        Self {
            classifier: RiskClassifier::new(thresholds),
        }
    }

    /// Build the full results payload from one forecast input.
    ///
    /// Summary statistics cover the forecast horizon only; historical
    /// usage contributes to the chart but never to the summary. Any
    /// failure is terminal for this call, and the caller surfaces a
    /// "forecast unavailable" state instead of a partial chart.
    #[instrument(skip(self, forecast), fields(
        historical = forecast.historical_usage.len(),
        predicted = forecast.predicted_usage.len()
    ))]
    pub fn build_report(&self, forecast: &HydroForecast) -> Result<ForecastReport, SeriesError> {
        forecast.validate()?;

        let chart =
            aggregate::merge_series(&forecast.historical_usage, &forecast.predicted_usage)?;
        let summary = aggregate::summarize(&model::values(&forecast.predicted_usage))?;

        let flood_risk = self
            .classifier
            .classify_flood_risk(&model::values(&forecast.river_discharge))?;
        let drought_risk = self
            .classifier
            .classify_drought_risk(&model::values(&forecast.precipitation));

        info!(
            "Built forecast report: {} chart points, flood={:?}, drought={:?}",
            chart.len(),
            flood_risk.level,
            drought_risk.level
        );

        Ok(ForecastReport {
            chart,
            summary,
            flood_risk,
            drought_risk,
        })
    }
}
