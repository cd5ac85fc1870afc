use chrono::NaiveDate;

#[derive(Debug, thiserror::Error)]
pub enum SeriesError {
    #[error("parallel series have mismatched lengths: {left_name} has {left_len} entries, {right_name} has {right_len}")]
    LengthMismatch {
        left_name: &'static str,
        left_len: usize,
        right_name: &'static str,
        right_len: usize,
    },

    #[error("{operation} requires a non-empty series")]
    EmptySeries { operation: &'static str },

    #[error("forecast date axes disagree at index {index}: predicted usage has {usage_date}, precipitation has {precipitation_date}")]
    DateAxisMismatch {
        index: usize,
        usage_date: NaiveDate,
        precipitation_date: NaiveDate,
    },

    #[error("{series} dates are not strictly increasing at index {index} ({date})")]
    UnsortedDates {
        series: &'static str,
        index: usize,
        date: NaiveDate,
    },
}
