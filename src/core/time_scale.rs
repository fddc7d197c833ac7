use chrono::{DateTime, Utc};

use crate::core::primitives::{datetime_to_unix_millis, unix_millis_to_datetime};
use crate::core::scale::{DegeneratePolicy, LinearScale};
use crate::error::{ChartError, ChartResult};

/// Linear scale over calendar instants.
///
/// Dates are compared and interpolated as millisecond Unix timestamps.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TemporalScale {
    start: DateTime<Utc>,
    end: DateTime<Utc>,
    linear: LinearScale,
}

impl TemporalScale {
    pub fn new(domain: (DateTime<Utc>, DateTime<Utc>), range: (f64, f64)) -> ChartResult<Self> {
        Self::with_policy(domain, range, DegeneratePolicy::Reject)
    }

    pub fn with_policy(
        domain: (DateTime<Utc>, DateTime<Utc>),
        range: (f64, f64),
        policy: DegeneratePolicy,
    ) -> ChartResult<Self> {
        let (start, end) = domain;
        let linear = LinearScale::with_policy(
            (datetime_to_unix_millis(start), datetime_to_unix_millis(end)),
            range,
            policy,
        )?;
        Ok(Self { start, end, linear })
    }

    /// Builds the scale over the earliest and latest of `dates`.
    pub fn from_dates<I>(dates: I, range: (f64, f64)) -> ChartResult<Self>
    where
        I: IntoIterator<Item = DateTime<Utc>>,
    {
        let mut bounds: Option<(DateTime<Utc>, DateTime<Utc>)> = None;
        for date in dates {
            bounds = Some(match bounds {
                None => (date, date),
                Some((min, max)) => (min.min(date), max.max(date)),
            });
        }
        let domain = bounds.ok_or(ChartError::EmptyInput(
            "temporal domain needs at least one date",
        ))?;
        Self::new(domain, range)
    }

    #[must_use]
    pub fn clamped(mut self, clamp: bool) -> Self {
        self.linear = self.linear.clamped(clamp);
        self
    }

    #[must_use]
    pub fn domain(self) -> (DateTime<Utc>, DateTime<Utc>) {
        (self.start, self.end)
    }

    #[must_use]
    pub fn range(self) -> (f64, f64) {
        self.linear.range()
    }

    pub fn map(self, date: DateTime<Utc>) -> ChartResult<f64> {
        self.linear.map(datetime_to_unix_millis(date))
    }

    pub fn invert(self, pixel: f64) -> ChartResult<DateTime<Utc>> {
        unix_millis_to_datetime(self.linear.invert(pixel)?)
    }
}
