use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::core::{ContinuousDomain, LinearScale, Movie, top_n_by};
use crate::error::{ChartError, ChartResult};

use super::ChartConfig;

/// Rectangle swept by a brush gesture, in plot-area pixels.
///
/// Containment is half-open: `x0 <= x < x1` and `y0 <= y < y1`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BrushSelection {
    pub x0: f64,
    pub y0: f64,
    pub x1: f64,
    pub y1: f64,
}

impl BrushSelection {
    /// Builds a selection from two opposite corners in any order.
    pub fn from_corners(a: (f64, f64), b: (f64, f64)) -> ChartResult<Self> {
        if ![a.0, a.1, b.0, b.1].iter().all(|v| v.is_finite()) {
            return Err(ChartError::InvalidData(
                "brush corners must be finite".to_owned(),
            ));
        }
        Ok(Self {
            x0: a.0.min(b.0),
            y0: a.1.min(b.1),
            x1: a.0.max(b.0),
            y1: a.1.max(b.1),
        })
    }

    #[must_use]
    pub fn contains(self, x: f64, y: f64) -> bool {
        self.x0 <= x && x < self.x1 && self.y0 <= y && y < self.y1
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScatterPoint {
    /// Position of the movie in [`ScatterPlot::sample`].
    pub index: usize,
    pub x: f64,
    pub y: f64,
}

/// Budget (x) against revenue (y) for the biggest-budget movies.
#[derive(Debug, Clone, PartialEq)]
pub struct ScatterPlot {
    sample: Vec<Movie>,
    x_scale: LinearScale,
    y_scale: LinearScale,
}

impl ScatterPlot {
    /// Keeps the `scatter_sample_size` largest budgets and fits both axes to
    /// the sample's extents. The y axis grows upwards.
    pub fn new(movies: &[Movie], config: &ChartConfig) -> ChartResult<Self> {
        let config = config.validate()?;
        let sample: Vec<Movie> = top_n_by(movies, |m| m.budget, config.scatter_sample_size)?
            .into_iter()
            .cloned()
            .collect();

        let x_domain = ContinuousDomain::extent(sample.iter().map(|m| m.budget))?;
        let y_domain = ContinuousDomain::extent(sample.iter().map(|m| m.revenue))?;
        let x_scale = LinearScale::from_domain(x_domain, (0.0, config.inner_width()))?;
        let y_scale = LinearScale::from_domain(y_domain, (config.inner_height(), 0.0))?;

        debug!(
            movies = movies.len(),
            sample = sample.len(),
            "scatter plot"
        );
        Ok(Self {
            sample,
            x_scale,
            y_scale,
        })
    }

    #[must_use]
    pub fn sample(&self) -> &[Movie] {
        &self.sample
    }

    #[must_use]
    pub fn x_scale(&self) -> LinearScale {
        self.x_scale
    }

    #[must_use]
    pub fn y_scale(&self) -> LinearScale {
        self.y_scale
    }

    pub fn points(&self) -> ChartResult<Vec<ScatterPoint>> {
        self.sample
            .iter()
            .enumerate()
            .map(|(index, movie)| -> ChartResult<ScatterPoint> {
                Ok(ScatterPoint {
                    index,
                    x: self.x_scale.map(movie.budget)?,
                    y: self.y_scale.map(movie.revenue)?,
                })
            })
            .collect()
    }

    /// Movies whose plotted position falls inside `selection`.
    pub fn brush(&self, selection: BrushSelection) -> ChartResult<Vec<&Movie>> {
        let mut selected = Vec::new();
        for movie in &self.sample {
            let x = self.x_scale.map(movie.budget)?;
            let y = self.y_scale.map(movie.revenue)?;
            if selection.contains(x, y) {
                selected.push(movie);
            }
        }
        trace!(selected = selected.len(), "brush selection");
        Ok(selected)
    }
}
