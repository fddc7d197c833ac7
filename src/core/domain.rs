use std::hash::Hash;

use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// Closed numeric interval used as the input side of continuous scales.
///
/// Invariants:
/// - both bounds are finite
/// - `min <= max` (equal bounds form a degenerate domain)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawContinuousDomain")]
pub struct ContinuousDomain {
    min: f64,
    max: f64,
}

#[derive(Deserialize)]
struct RawContinuousDomain {
    min: f64,
    max: f64,
}

impl TryFrom<RawContinuousDomain> for ContinuousDomain {
    type Error = ChartError;

    fn try_from(raw: RawContinuousDomain) -> ChartResult<Self> {
        Self::new(raw.min, raw.max)
    }
}

impl ContinuousDomain {
    pub fn new(min: f64, max: f64) -> ChartResult<Self> {
        if !min.is_finite() || !max.is_finite() || min > max {
            return Err(ChartError::InvalidDomain { min, max });
        }
        Ok(Self { min, max })
    }

    /// Smallest interval containing every value.
    pub fn extent<I>(values: I) -> ChartResult<Self>
    where
        I: IntoIterator<Item = f64>,
    {
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        let mut seen = 0usize;

        for (index, value) in values.into_iter().enumerate() {
            if !value.is_finite() {
                return Err(ChartError::InvalidMeasure { index, value });
            }
            min = min.min(value);
            max = max.max(value);
            seen += 1;
        }

        if seen == 0 {
            return Err(ChartError::EmptyInput("domain extent needs at least one value"));
        }
        Ok(Self { min, max })
    }

    /// `[0, max]` over the values, the usual domain for bar lengths.
    ///
    /// A maximum below zero yields `[max, 0]` so the invariant holds.
    pub fn zero_to_max<I>(values: I) -> ChartResult<Self>
    where
        I: IntoIterator<Item = f64>,
    {
        let extent = Self::extent(values)?;
        Ok(Self {
            min: extent.max.min(0.0),
            max: extent.max.max(0.0),
        })
    }

    #[must_use]
    pub fn min(self) -> f64 {
        self.min
    }

    #[must_use]
    pub fn max(self) -> f64 {
        self.max
    }

    #[must_use]
    pub fn bounds(self) -> (f64, f64) {
        (self.min, self.max)
    }

    #[must_use]
    pub fn span(self) -> f64 {
        self.max - self.min
    }

    #[must_use]
    pub fn is_degenerate(self) -> bool {
        self.min == self.max
    }

    #[must_use]
    pub fn contains(self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}

/// Ordered set of distinct keys used by band scales.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrdinalDomain<K: Hash + Eq> {
    keys: IndexSet<K>,
}

impl<K: Hash + Eq> OrdinalDomain<K> {
    /// Collects keys in order, dropping repeats after their first appearance.
    pub fn from_keys<I>(keys: I) -> ChartResult<Self>
    where
        I: IntoIterator<Item = K>,
    {
        let keys: IndexSet<K> = keys.into_iter().collect();
        if keys.is_empty() {
            return Err(ChartError::EmptyInput("ordinal domain needs at least one key"));
        }
        Ok(Self { keys })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    #[must_use]
    pub fn index_of(&self, key: &K) -> Option<usize> {
        self.keys.get_index_of(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.keys.iter()
    }
}
