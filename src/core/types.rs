use serde::{Deserialize, Serialize};

use crate::error::{LogoError, LogoResult};

/// Pixel size of a raster drawing target.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width > 0 && self.height > 0
    }
}

/// Closed interval on one axis, in data coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisLimits {
    pub min: f64,
    pub max: f64,
}

impl AxisLimits {
    pub fn new(min: f64, max: f64) -> LogoResult<Self> {
        if !min.is_finite() || !max.is_finite() {
            return Err(LogoError::InvalidConfig(
                "axis limits must be finite".to_owned(),
            ));
        }
        if min > max {
            return Err(LogoError::InvalidRange(format!(
                "axis limits require min <= max, got [{min}, {max}]"
            )));
        }
        Ok(Self { min, max })
    }

    #[must_use]
    pub fn span(self) -> f64 {
        self.max - self.min
    }

    #[must_use]
    pub fn contains(self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }

    /// Smallest interval covering every `(low, high)` pair, or `None` when
    /// the iterator is empty.
    #[must_use]
    pub fn enclosing(extents: impl IntoIterator<Item = (f64, f64)>) -> Option<Self> {
        extents.into_iter().fold(None, |acc, (low, high)| {
            Some(match acc {
                None => Self {
                    min: low,
                    max: high,
                },
                Some(limits) => Self {
                    min: limits.min.min(low),
                    max: limits.max.max(high),
                },
            })
        })
    }
}
