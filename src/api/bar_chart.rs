use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{
    BandOptions, BandScale, ContinuousDomain, LinearScale, Metric, Movie, OrdinalDomain,
    aggregate, sorted_by_value_desc,
};
use crate::error::ChartResult;

use super::ChartConfig;

/// Pixel rectangle of one horizontal bar, relative to the plot area.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarMark {
    pub key: String,
    pub value: f64,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// Scales plus laid-out bars for one horizontal bar chart render.
#[derive(Debug, Clone, PartialEq)]
pub struct BarChartFrame {
    pub metric: Metric,
    pub x_scale: LinearScale,
    pub y_scale: BandScale<String>,
    pub bars: Vec<BarMark>,
}

/// Total revenue per genre, largest genre first.
pub fn genre_revenue_bars(movies: &[Movie], config: &ChartConfig) -> ChartResult<BarChartFrame> {
    let config = config.validate()?;
    let groups = aggregate(movies, |m| m.genre.clone(), |m| m.revenue)?;
    let entries = sorted_by_value_desc(groups);
    debug!(
        movies = movies.len(),
        genres = entries.len(),
        "genre revenue bar chart"
    );
    layout_bars(entries, Metric::Revenue, &config)
}

/// Lays out `(label, value)` entries top to bottom in the given order.
///
/// Bar length runs over `[0, max value]` and the band axis over the entry
/// labels. Repeated labels share a band.
pub(crate) fn layout_bars(
    entries: Vec<(String, f64)>,
    metric: Metric,
    config: &ChartConfig,
) -> ChartResult<BarChartFrame> {
    let x_domain = ContinuousDomain::zero_to_max(entries.iter().map(|(_, value)| *value))?;
    let x_scale = LinearScale::from_domain(x_domain, (0.0, config.inner_width()))?;

    let y_domain = OrdinalDomain::from_keys(entries.iter().map(|(key, _)| key.clone()))?;
    let options = BandOptions::default()
        .with_padding_inner(config.bar_padding_inner)
        .with_round(config.round_bands);
    let y_scale = BandScale::new(y_domain, (0.0, config.inner_height()), options)?;

    let origin = x_scale.map(0.0)?;
    let height = y_scale.bandwidth();
    let mut bars = Vec::with_capacity(entries.len());
    for (key, value) in entries {
        let y = y_scale.map(&key)?;
        let end = x_scale.map(value)?;
        bars.push(BarMark {
            key,
            value,
            x: origin.min(end),
            y,
            width: (end - origin).abs(),
            height,
        });
    }

    Ok(BarChartFrame {
        metric,
        x_scale,
        y_scale,
        bars,
    })
}
