pub mod classifier;
pub mod thresholds;

pub use classifier::{RiskClassifier, RiskLevel, RiskVerdict};
pub use thresholds::RiskThresholds;
