//! Positional alignment of parallel arrays.
//!
//! Upstream sources deliver dates and metric values as separate arrays of
//! equal length. The aligner zips them into records by index, with the
//! record shape fixed per call site. Alignment is purely positional;
//! chronological ordering is the producer's responsibility.

use chrono::NaiveDate;

use crate::series::error::SeriesError;
use crate::series::model::TimePoint;

/// Align two equal-length slices into records by positional index.
///
/// The `*_name` arguments identify the slices in the error when the
/// lengths disagree; silently truncating to the shorter side would hide
/// malformed upstream data.
pub fn align_records<L, R, T, F>(
    left_name: &'static str,
    left: &[L],
    right_name: &'static str,
    right: &[R],
    mut build: F,
) -> Result<Vec<T>, SeriesError>
where
    F: FnMut(&L, &R) -> T,
{
    if left.len() != right.len() {
        return Err(SeriesError::LengthMismatch {
            left_name,
            left_len: left.len(),
            right_name,
            right_len: right.len(),
        });
    }

    Ok(left
        .iter()
        .zip(right.iter())
        .map(|(l, r)| build(l, r))
        .collect())
}

/// Align a date array with a value array into a series of [`TimePoint`]s.
pub fn align_points(dates: &[NaiveDate], values: &[f64]) -> Result<Vec<TimePoint>, SeriesError> {
    align_records("dates", dates, "values", values, |date, value| TimePoint {
        date: *date,
        value: *value,
    })
}
