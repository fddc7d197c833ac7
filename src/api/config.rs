use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// Space reserved around the plot area for axes and labels, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Margin {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Margin {
    #[must_use]
    pub fn new(top: f64, right: f64, bottom: f64, left: f64) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }
}

/// Frame and layout settings shared by every chart pipeline.
///
/// Serializable so hosts can keep chart setup next to their page config.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartConfig {
    pub width: f64,
    pub height: f64,
    #[serde(default = "default_margin")]
    pub margin: Margin,
    #[serde(default = "default_bar_padding_inner")]
    pub bar_padding_inner: f64,
    #[serde(default = "default_round_bands")]
    pub round_bands: bool,
    #[serde(default = "default_top_n")]
    pub top_n: usize,
    #[serde(default = "default_scatter_sample_size")]
    pub scatter_sample_size: usize,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self::ranked_bar()
    }
}

impl ChartConfig {
    /// Creates a config with the given outer frame and default layout settings.
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            margin: default_margin(),
            bar_padding_inner: default_bar_padding_inner(),
            round_bands: default_round_bands(),
            top_n: default_top_n(),
            scatter_sample_size: default_scatter_sample_size(),
        }
    }

    /// 600x500 frame with a wide left margin for movie titles.
    #[must_use]
    pub fn ranked_bar() -> Self {
        Self::new(600.0, 500.0).with_margin(Margin::new(40.0, 40.0, 40.0, 200.0))
    }

    /// 400x500 frame for the per-genre revenue chart.
    #[must_use]
    pub fn genre_bar() -> Self {
        Self::new(400.0, 500.0).with_margin(Margin::new(40.0, 40.0, 40.0, 80.0))
    }

    /// 500x500 frame for line and scatter charts.
    #[must_use]
    pub fn xy_plot() -> Self {
        Self::new(500.0, 500.0).with_margin(Margin::new(40.0, 40.0, 40.0, 80.0))
    }

    #[must_use]
    pub fn with_margin(mut self, margin: Margin) -> Self {
        self.margin = margin;
        self
    }

    #[must_use]
    pub fn with_bar_padding_inner(mut self, padding: f64) -> Self {
        self.bar_padding_inner = padding;
        self
    }

    #[must_use]
    pub fn with_round_bands(mut self, round: bool) -> Self {
        self.round_bands = round;
        self
    }

    #[must_use]
    pub fn with_top_n(mut self, top_n: usize) -> Self {
        self.top_n = top_n;
        self
    }

    #[must_use]
    pub fn with_scatter_sample_size(mut self, size: usize) -> Self {
        self.scatter_sample_size = size;
        self
    }

    /// Width of the plot area inside the margins.
    #[must_use]
    pub fn inner_width(self) -> f64 {
        self.width - self.margin.left - self.margin.right
    }

    /// Height of the plot area inside the margins.
    #[must_use]
    pub fn inner_height(self) -> f64 {
        self.height - self.margin.top - self.margin.bottom
    }

    pub fn validate(self) -> ChartResult<Self> {
        let margin = self.margin;
        let all_finite = [
            self.width,
            self.height,
            margin.top,
            margin.right,
            margin.bottom,
            margin.left,
        ]
        .iter()
        .all(|v| v.is_finite());
        if !all_finite {
            return Err(ChartError::Config(
                "frame size and margins must be finite".to_owned(),
            ));
        }
        if margin.top < 0.0 || margin.right < 0.0 || margin.bottom < 0.0 || margin.left < 0.0 {
            return Err(ChartError::Config("margins must be >= 0".to_owned()));
        }
        if self.inner_width() <= 0.0 || self.inner_height() <= 0.0 {
            return Err(ChartError::Config(format!(
                "plot area must be positive: inner_width={}, inner_height={}",
                self.inner_width(),
                self.inner_height()
            )));
        }
        if !self.bar_padding_inner.is_finite() || !(0.0..1.0).contains(&self.bar_padding_inner) {
            return Err(ChartError::Config(format!(
                "bar padding must be in [0, 1), got {}",
                self.bar_padding_inner
            )));
        }
        if self.top_n == 0 {
            return Err(ChartError::Config("top_n must be > 0".to_owned()));
        }
        if self.scatter_sample_size == 0 {
            return Err(ChartError::Config(
                "scatter_sample_size must be > 0".to_owned(),
            ));
        }
        Ok(self)
    }

    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        let config: Self = serde_json::from_str(input)
            .map_err(|e| ChartError::Config(format!("failed to parse chart config json: {e}")))?;
        config.validate()
    }

    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ChartError::Config(format!("failed to serialize chart config: {e}")))
    }
}

fn default_margin() -> Margin {
    Margin::new(40.0, 40.0, 40.0, 40.0)
}

fn default_bar_padding_inner() -> f64 {
    0.25
}

fn default_round_bands() -> bool {
    true
}

fn default_top_n() -> usize {
    15
}

fn default_scatter_sample_size() -> usize {
    100
}
