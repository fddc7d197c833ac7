use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::core::domain::ContinuousDomain;
use crate::error::{ChartError, ChartResult};

/// What a continuous scale does when its domain has zero width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DegeneratePolicy {
    /// Construction fails with [`ChartError::DegenerateDomain`].
    #[default]
    Reject,
    /// Every value maps to the range start; `invert` still fails.
    ConstantStart,
}

/// Linear mapping from a numeric domain to a pixel range.
///
/// `map(v) = r0 + (v - d0) / (d1 - d0) * (r1 - r0)`. Either side may be
/// reversed. Values outside the domain extrapolate unless clamping is on.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    domain_start: f64,
    domain_end: f64,
    range_start: f64,
    range_end: f64,
    clamp: bool,
    policy: DegeneratePolicy,
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> ChartResult<Self> {
        Self::with_policy(domain, range, DegeneratePolicy::Reject)
    }

    pub fn with_policy(
        domain: (f64, f64),
        range: (f64, f64),
        policy: DegeneratePolicy,
    ) -> ChartResult<Self> {
        let (domain_start, domain_end) = domain;
        let (range_start, range_end) = range;

        if !domain_start.is_finite() || !domain_end.is_finite() {
            return Err(ChartError::InvalidDomain {
                min: domain_start,
                max: domain_end,
            });
        }
        if !range_start.is_finite() || !range_end.is_finite() {
            return Err(ChartError::InvalidRange {
                start: range_start,
                end: range_end,
            });
        }
        if domain_start == domain_end && policy == DegeneratePolicy::Reject {
            return Err(ChartError::DegenerateDomain {
                value: domain_start,
            });
        }

        Ok(Self {
            domain_start,
            domain_end,
            range_start,
            range_end,
            clamp: false,
            policy,
        })
    }

    pub fn from_domain(domain: ContinuousDomain, range: (f64, f64)) -> ChartResult<Self> {
        Self::new(domain.bounds(), range)
    }

    /// Enables or disables clamping of mapped output to the range.
    #[must_use]
    pub fn clamped(mut self, clamp: bool) -> Self {
        self.clamp = clamp;
        self
    }

    #[must_use]
    pub fn domain(self) -> (f64, f64) {
        (self.domain_start, self.domain_end)
    }

    #[must_use]
    pub fn range(self) -> (f64, f64) {
        (self.range_start, self.range_end)
    }

    #[must_use]
    pub fn is_clamped(self) -> bool {
        self.clamp
    }

    #[must_use]
    pub fn policy(self) -> DegeneratePolicy {
        self.policy
    }

    #[must_use]
    pub fn is_degenerate(self) -> bool {
        self.domain_start == self.domain_end
    }

    pub fn map(self, value: f64) -> ChartResult<f64> {
        if !value.is_finite() {
            return Err(ChartError::InvalidData("value must be finite".to_owned()));
        }
        if self.is_degenerate() {
            trace!(value, "degenerate domain maps to range start");
            return Ok(self.range_start);
        }

        let mut normalized = (value - self.domain_start) / (self.domain_end - self.domain_start);
        if self.clamp {
            normalized = normalized.clamp(0.0, 1.0);
        }
        Ok(self.range_start + normalized * (self.range_end - self.range_start))
    }

    pub fn invert(self, pixel: f64) -> ChartResult<f64> {
        if !pixel.is_finite() {
            return Err(ChartError::InvalidData("pixel must be finite".to_owned()));
        }
        if self.is_degenerate() {
            return Err(ChartError::DegenerateDomain {
                value: self.domain_start,
            });
        }
        if self.range_start == self.range_end {
            return Err(ChartError::InvalidRange {
                start: self.range_start,
                end: self.range_end,
            });
        }

        let mut normalized = (pixel - self.range_start) / (self.range_end - self.range_start);
        if self.clamp {
            normalized = normalized.clamp(0.0, 1.0);
        }
        Ok(self.domain_start + normalized * (self.domain_end - self.domain_start))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reversed_range_maps_domain_top_to_zero() {
        let scale = LinearScale::new((0.0, 10.0), (300.0, 0.0)).expect("scale");
        assert_eq!(scale.map(10.0).expect("map"), 0.0);
        assert_eq!(scale.map(0.0).expect("map"), 300.0);
    }

    #[test]
    fn constant_policy_rejects_invert() {
        let scale =
            LinearScale::with_policy((1.0, 1.0), (0.0, 5.0), DegeneratePolicy::ConstantStart)
                .expect("scale");
        assert!(matches!(
            scale.invert(2.0),
            Err(ChartError::DegenerateDomain { .. })
        ));
    }
}
