pub mod aligner;
pub mod error;
pub mod model;

pub use error::SeriesError;
pub use model::{HydroForecast, TimePoint};
