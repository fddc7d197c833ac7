use chrono::{DateTime, NaiveDate, Utc};

use crate::error::{ChartError, ChartResult};

#[must_use]
pub fn datetime_to_unix_millis(time: DateTime<Utc>) -> f64 {
    time.timestamp_millis() as f64
}

pub fn unix_millis_to_datetime(millis: f64) -> ChartResult<DateTime<Utc>> {
    if !millis.is_finite() {
        return Err(ChartError::InvalidData(
            "timestamp must be finite".to_owned(),
        ));
    }
    DateTime::from_timestamp_millis(millis.round() as i64).ok_or_else(|| {
        ChartError::InvalidData(format!("timestamp {millis} is out of range"))
    })
}

/// First instant (UTC midnight, January 1st) of `year`.
pub fn year_start(year: i32) -> ChartResult<DateTime<Utc>> {
    NaiveDate::from_ymd_opt(year, 1, 1)
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
        .ok_or_else(|| ChartError::InvalidData(format!("year {year} is out of range")))
}
