use tracing::{debug, warn};

use crate::core::{Metric, Movie, top_n_by};
use crate::error::ChartResult;

use super::ChartConfig;
use super::bar_chart::{BarChartFrame, layout_bars};

/// State of one interactive "top movies" bar chart.
///
/// The session owns its records, the active metric and the last good frame.
/// Event handlers (metric buttons, data reloads) go through `&mut self` and
/// rebuild the frame from scratch. A failed rebuild leaves the previous
/// metric and frame in place.
#[derive(Debug, Clone)]
pub struct ChartSession {
    movies: Vec<Movie>,
    config: ChartConfig,
    metric: Metric,
    frame: Option<BarChartFrame>,
}

impl ChartSession {
    pub fn new(movies: Vec<Movie>, config: ChartConfig) -> ChartResult<Self> {
        let config = config.validate()?;
        Ok(Self {
            movies,
            config,
            metric: Metric::default(),
            frame: None,
        })
    }

    #[must_use]
    pub fn metric(&self) -> Metric {
        self.metric
    }

    #[must_use]
    pub fn movies(&self) -> &[Movie] {
        &self.movies
    }

    #[must_use]
    pub fn config(&self) -> &ChartConfig {
        &self.config
    }

    /// Last successfully built frame, if any.
    #[must_use]
    pub fn frame(&self) -> Option<&BarChartFrame> {
        self.frame.as_ref()
    }

    /// Builds the frame for the active metric.
    pub fn render(&mut self) -> ChartResult<&BarChartFrame> {
        self.switch_metric(self.metric)
    }

    /// Metric button handler: re-ranks the movies by `metric` and relays out.
    pub fn switch_metric(&mut self, metric: Metric) -> ChartResult<&BarChartFrame> {
        match build_ranked_frame(&self.movies, metric, &self.config) {
            Ok(frame) => {
                self.metric = metric;
                Ok(&*self.frame.insert(frame))
            }
            Err(err) => {
                warn!(
                    error = %err,
                    metric = metric.name(),
                    "keeping previous frame after failed metric switch"
                );
                Err(err)
            }
        }
    }

    /// Replaces the record set (a re-fetch) and rebuilds for the active metric.
    ///
    /// On failure the previous records and frame are kept.
    pub fn replace_movies(&mut self, movies: Vec<Movie>) -> ChartResult<&BarChartFrame> {
        match build_ranked_frame(&movies, self.metric, &self.config) {
            Ok(frame) => {
                self.movies = movies;
                Ok(&*self.frame.insert(frame))
            }
            Err(err) => {
                warn!(
                    error = %err,
                    movies = movies.len(),
                    "keeping previous records after failed reload"
                );
                Err(err)
            }
        }
    }
}

fn build_ranked_frame(
    movies: &[Movie],
    metric: Metric,
    config: &ChartConfig,
) -> ChartResult<BarChartFrame> {
    let ranked = top_n_by(movies, |m| metric.value(m), config.top_n)?;
    debug!(
        movies = movies.len(),
        ranked = ranked.len(),
        metric = metric.name(),
        "ranked bar chart"
    );
    let entries = ranked
        .into_iter()
        .map(|movie| (movie.title.clone(), metric.value(movie)))
        .collect();
    layout_bars(entries, metric, config)
}
