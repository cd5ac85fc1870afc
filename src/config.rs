use std::env;

use crate::risk::RiskThresholds;

/// Engine configuration, sourced from the environment with defaults.
///
/// Thresholds fall back to the built-in screening values when a variable
/// is unset or unparseable; the horizon default matches the product's
/// seven-day forecast.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    pub thresholds: RiskThresholds,
    pub forecast_horizon_days: u32,
}

impl EngineConfig {
    pub fn from_env() -> Self {
        let defaults = RiskThresholds::default();

        EngineConfig {
            thresholds: RiskThresholds {
                flood_high_m3s: env::var("FLOOD_HIGH_THRESHOLD_M3S")
                    .unwrap_or_else(|_| defaults.flood_high_m3s.to_string())
                    .parse()
                    .unwrap_or(defaults.flood_high_m3s),
                flood_warning_m3s: env::var("FLOOD_WARNING_THRESHOLD_M3S")
                    .unwrap_or_else(|_| defaults.flood_warning_m3s.to_string())
                    .parse()
                    .unwrap_or(defaults.flood_warning_m3s),
                drought_total_mm: env::var("DROUGHT_THRESHOLD_MM")
                    .unwrap_or_else(|_| defaults.drought_total_mm.to_string())
                    .parse()
                    .unwrap_or(defaults.drought_total_mm),
            },
            forecast_horizon_days: env::var("FORECAST_HORIZON_DAYS")
                .unwrap_or_else(|_| "7".to_string())
                .parse()
                .unwrap_or(7),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_env_defaults() {
        // No engine variables are set in the test environment
        let config = EngineConfig::from_env();

        assert_eq!(config.thresholds, RiskThresholds::default());
        assert_eq!(config.forecast_horizon_days, 7);
    }
}
