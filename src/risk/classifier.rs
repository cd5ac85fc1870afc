use serde::Serialize;
use tracing::debug;

use crate::risk::thresholds::RiskThresholds;
use crate::series::SeriesError;

/// Categorical risk levels, in ascending order of severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Warning,
    High,
}

/// A categorical judgment derived from a single scalar metric.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RiskVerdict {
    pub level: RiskLevel,
    pub metric_value: f64,
    pub message: String,
}

/// Stateless threshold classifier for flood and drought risk.
#[derive(Debug, Clone, Default)]
pub struct RiskClassifier {
    thresholds: RiskThresholds,
}

impl RiskClassifier {
    pub fn new(thresholds: RiskThresholds) -> Self {
        Self { thresholds }
    }

    /// Classify flood risk from a river discharge series (m³/s).
    ///
    /// Thresholds are checked in descending order of severity, first match
    /// wins. Both intervals are half-open: a peak exactly at a threshold
    /// falls into the lower tier.
    pub fn classify_flood_risk(&self, discharge: &[f64]) -> Result<RiskVerdict, SeriesError> {
        if discharge.is_empty() {
            return Err(SeriesError::EmptySeries {
                operation: "classify_flood_risk",
            });
        }

        let peak = discharge.iter().copied().fold(discharge[0], f64::max);
        debug!("Peak discharge {} m³/s over {} readings", peak, discharge.len());

        let (level, message) = if peak > self.thresholds.flood_high_m3s {
            (
                RiskLevel::High,
                "High flood risk detected. River discharge is significantly above normal.",
            )
        } else if peak > self.thresholds.flood_warning_m3s {
            (RiskLevel::Warning, "Moderate flood risk. Monitor local alerts.")
        } else {
            (RiskLevel::Low, "Low risk of flooding detected.")
        };

        Ok(RiskVerdict {
            level,
            metric_value: peak,
            message: message.to_string(),
        })
    }

    /// Classify drought risk from a precipitation series (mm per day).
    ///
    /// An empty horizon is a legitimate zero total and classifies Low:
    /// with no forecast days there is no rainfall deficit to warn about.
    /// Deliberately asymmetric with flood classification, which has no
    /// defined peak over an empty series.
    pub fn classify_drought_risk(&self, precipitation: &[f64]) -> RiskVerdict {
        let total: f64 = precipitation.iter().sum();
        debug!(
            "Total precipitation {} mm over {} readings",
            total,
            precipitation.len()
        );

        let (level, message) =
            if !precipitation.is_empty() && total < self.thresholds.drought_total_mm {
                (
                    RiskLevel::Warning,
                    "Potential drought conditions. Very low rainfall predicted.",
                )
            } else {
                (RiskLevel::Low, "Sufficient rainfall predicted.")
            };

        RiskVerdict {
            level,
            metric_value: total,
            message: message.to_string(),
        }
    }
}
