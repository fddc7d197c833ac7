use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{
    ContinuousDomain, LinearScale, Metric, Movie, TemporalScale, aggregate, sorted_by_key,
    year_start,
};
use crate::error::ChartResult;

use super::ChartConfig;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinePoint {
    pub year: i32,
    pub date: DateTime<Utc>,
    pub value: f64,
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineSeries {
    pub metric: Metric,
    pub points: Vec<LinePoint>,
}

/// Scales plus projected series for the yearly totals line chart.
#[derive(Debug, Clone, PartialEq)]
pub struct LineChartFrame {
    pub x_scale: TemporalScale,
    pub y_scale: LinearScale,
    pub y_max: f64,
    pub series: Vec<LineSeries>,
}

impl LineChartFrame {
    #[must_use]
    pub fn series(&self, metric: Metric) -> Option<&LineSeries> {
        self.series.iter().find(|s| s.metric == metric)
    }
}

/// Revenue and budget summed per release year, one line each.
///
/// Both lines share a y axis running from zero (bottom) to the largest
/// yearly total of either series (top).
pub fn yearly_line_chart(movies: &[Movie], config: &ChartConfig) -> ChartResult<LineChartFrame> {
    let config = config.validate()?;
    let metrics = [Metric::Revenue, Metric::Budget];

    let mut totals = Vec::with_capacity(metrics.len());
    for metric in metrics {
        let groups = aggregate(movies, |m| m.release_year, |m| metric.value(m))?;
        totals.push((metric, sorted_by_key(groups)));
    }

    let mut dates = Vec::new();
    for (_, entries) in &totals {
        for (year, _) in entries {
            dates.push(year_start(*year)?);
        }
    }
    let x_scale = TemporalScale::from_dates(dates, (0.0, config.inner_width()))?;

    let y_domain = ContinuousDomain::zero_to_max(
        totals
            .iter()
            .flat_map(|(_, entries)| entries.iter().map(|(_, value)| *value)),
    )?;
    let y_scale = LinearScale::from_domain(y_domain, (config.inner_height(), 0.0))?;

    let mut series = Vec::with_capacity(totals.len());
    for (metric, entries) in totals {
        let mut points = Vec::with_capacity(entries.len());
        for (year, value) in entries {
            let date = year_start(year)?;
            points.push(LinePoint {
                year,
                date,
                value,
                x: x_scale.map(date)?,
                y: y_scale.map(value)?,
            });
        }
        series.push(LineSeries { metric, points });
    }

    debug!(
        movies = movies.len(),
        years = series.first().map_or(0, |s| s.points.len()),
        y_max = y_domain.max(),
        "yearly line chart"
    );
    Ok(LineChartFrame {
        x_scale,
        y_scale,
        y_max: y_domain.max(),
        series,
    })
}
