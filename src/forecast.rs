// Usage forecasting models
//
// Two regressions produce the predicted-usage series the aggregation
// layer consumes:
// - LinearTrendModel: usage against days elapsed since the first
//   observation, extrapolated over the forecast horizon
// - WeatherForecastModel: usage against daily max temperature and
//   precipitation, predicting from forecast weather

pub mod error;
pub mod trend;
pub mod weather;

pub use error::ForecastError;
pub use trend::LinearTrendModel;
pub use weather::{WeatherForecastModel, WeatherPoint};
