#[derive(Debug, thiserror::Error)]
pub enum ForecastError {
    #[error("model requires at least {required} observations on distinct dates, got {actual}")]
    InsufficientData { required: usize, actual: usize },

    #[error("usage and weather series share no dates; check the upload's date range")]
    NoOverlappingDates,

    #[error("weather features are degenerate (constant or collinear); regression is undefined")]
    DegenerateFeatures,
}
