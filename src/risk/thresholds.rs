use serde::{Deserialize, Serialize};

/// Classification thresholds for the hydro-climatic risk verdicts.
///
/// The defaults are regional screening values, not site-calibrated
/// hydrology; embedders with calibrated stage data should override them
/// (see `config::EngineConfig::from_env`).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RiskThresholds {
    /// Peak discharge (m³/s) above which flood risk is High.
    pub flood_high_m3s: f64,
    /// Peak discharge (m³/s) above which flood risk is at least Warning.
    pub flood_warning_m3s: f64,
    /// Total forecast-horizon precipitation (mm) below which drought risk
    /// is Warning.
    pub drought_total_mm: f64,
}

impl Default for RiskThresholds {
    fn default() -> Self {
        Self {
            flood_high_m3s: 4000.0,
            flood_warning_m3s: 2000.0,
            drought_total_mm: 1.0,
        }
    }
}
