// Forecast result aggregation: chart-ready series assembly and usage
// summary statistics. Rounding and unit formatting belong to the
// rendering layer, not here.

pub mod chart;
pub mod stats;

pub use chart::{merge_series, ChartPoint};
pub use stats::{summarize, SummaryStats};
