use std::fmt::Display;
use std::hash::Hash;

use serde::{Deserialize, Serialize};

use crate::core::domain::OrdinalDomain;
use crate::error::{ChartError, ChartResult};

/// Layout knobs for [`BandScale`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BandOptions {
    /// Gap between neighbouring bands as a fraction of the step, in `[0, 1)`.
    pub padding_inner: f64,
    /// Gap before the first and after the last band, in steps.
    pub padding_outer: f64,
    /// Where leftover outer space goes, `0` = start, `1` = end.
    pub align: f64,
    /// Snap step, start and bandwidth to whole pixels.
    pub round: bool,
}

impl Default for BandOptions {
    fn default() -> Self {
        Self {
            padding_inner: 0.0,
            padding_outer: 0.0,
            align: 0.5,
            round: false,
        }
    }
}

impl BandOptions {
    #[must_use]
    pub fn with_padding_inner(mut self, padding_inner: f64) -> Self {
        self.padding_inner = padding_inner;
        self
    }

    #[must_use]
    pub fn with_padding_outer(mut self, padding_outer: f64) -> Self {
        self.padding_outer = padding_outer;
        self
    }

    #[must_use]
    pub fn with_align(mut self, align: f64) -> Self {
        self.align = align;
        self
    }

    #[must_use]
    pub fn with_round(mut self, round: bool) -> Self {
        self.round = round;
        self
    }

    fn validate(self) -> ChartResult<Self> {
        if !self.padding_inner.is_finite() || !(0.0..1.0).contains(&self.padding_inner) {
            return Err(ChartError::InvalidPadding(format!(
                "inner padding must be in [0, 1), got {}",
                self.padding_inner
            )));
        }
        if !self.padding_outer.is_finite() || self.padding_outer < 0.0 {
            return Err(ChartError::InvalidPadding(format!(
                "outer padding must be finite and >= 0, got {}",
                self.padding_outer
            )));
        }
        if !self.align.is_finite() || !(0.0..=1.0).contains(&self.align) {
            return Err(ChartError::InvalidPadding(format!(
                "align must be in [0, 1], got {}",
                self.align
            )));
        }
        Ok(self)
    }
}

/// Ordinal scale that splits a pixel range into equal bands, one per key.
///
/// With `n` keys the step is `width / (n - padding_inner + 2 * padding_outer)`
/// and each band is `step * (1 - padding_inner)` wide. Without outer padding
/// the bands and the gaps between them cover the range exactly. A reversed
/// range puts the first key at the high end.
#[derive(Debug, Clone, PartialEq)]
pub struct BandScale<K: Hash + Eq> {
    domain: OrdinalDomain<K>,
    range: (f64, f64),
    options: BandOptions,
    step: f64,
    bandwidth: f64,
    start: f64,
    reversed: bool,
}

impl<K: Hash + Eq + Display> BandScale<K> {
    pub fn new(
        domain: OrdinalDomain<K>,
        range: (f64, f64),
        options: BandOptions,
    ) -> ChartResult<Self> {
        let (r0, r1) = range;
        if !r0.is_finite() || !r1.is_finite() {
            return Err(ChartError::InvalidRange { start: r0, end: r1 });
        }
        let options = options.validate()?;

        let reversed = r1 < r0;
        let (lo, hi) = if reversed { (r1, r0) } else { (r0, r1) };
        let n = domain.len() as f64;

        let mut step = (hi - lo) / (n - options.padding_inner + 2.0 * options.padding_outer);
        if options.round {
            step = step.floor();
        }
        let mut start = lo + (hi - lo - step * (n - options.padding_inner)) * options.align;
        let mut bandwidth = step * (1.0 - options.padding_inner);
        if options.round {
            start = start.round();
            bandwidth = bandwidth.round();
        }

        Ok(Self {
            domain,
            range,
            options,
            step,
            bandwidth,
            start,
            reversed,
        })
    }

    /// Start offset of the band assigned to `key`.
    pub fn map(&self, key: &K) -> ChartResult<f64> {
        let index = self
            .domain
            .index_of(key)
            .ok_or_else(|| ChartError::UnknownKey {
                key: key.to_string(),
            })?;
        let slot = if self.reversed {
            self.domain.len() - 1 - index
        } else {
            index
        };
        Ok(self.start + self.step * slot as f64)
    }

    /// Midpoint of the band assigned to `key`.
    pub fn center(&self, key: &K) -> ChartResult<f64> {
        Ok(self.map(key)? + self.bandwidth * 0.5)
    }

    #[must_use]
    pub fn bandwidth(&self) -> f64 {
        self.bandwidth
    }

    #[must_use]
    pub fn step(&self) -> f64 {
        self.step
    }

    #[must_use]
    pub fn range(&self) -> (f64, f64) {
        self.range
    }

    #[must_use]
    pub fn options(&self) -> BandOptions {
        self.options
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.domain.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.domain.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.domain.keys()
    }
}
