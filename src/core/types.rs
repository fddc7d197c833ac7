use serde::{Deserialize, Serialize};

/// One cleaned movie row as handed over by the data loader.
///
/// The loader is expected to have dropped rows with non-positive budget or
/// revenue, a missing genre or title, or a release year outside 2000-2009.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    pub title: String,
    pub genre: String,
    pub release_year: i32,
    pub budget: f64,
    pub revenue: f64,
}

impl Movie {
    #[must_use]
    pub fn new(
        title: impl Into<String>,
        genre: impl Into<String>,
        release_year: i32,
        budget: f64,
        revenue: f64,
    ) -> Self {
        Self {
            title: title.into(),
            genre: genre.into(),
            release_year,
            budget,
            revenue,
        }
    }
}

/// Numeric measure a chart can be driven by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Metric {
    #[default]
    Revenue,
    Budget,
}

impl Metric {
    #[must_use]
    pub fn value(self, movie: &Movie) -> f64 {
        match self {
            Self::Revenue => movie.revenue,
            Self::Budget => movie.budget,
        }
    }

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Revenue => "revenue",
            Self::Budget => "budget",
        }
    }
}
