use crate::core::types::AxisLimits;
use crate::error::{LogoError, LogoResult};

/// Affine map from a data-space domain onto a pixel span.
///
/// `inverted` flips the pixel direction, which raster backends use for the
/// vertical axis (data grows upward, pixels grow downward).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    domain_start: f64,
    domain_end: f64,
    inverted: bool,
}

impl LinearScale {
    pub fn new(domain_start: f64, domain_end: f64) -> LogoResult<Self> {
        if !domain_start.is_finite() || !domain_end.is_finite() || domain_start == domain_end {
            return Err(LogoError::InvalidConfig(
                "scale domain must be finite and non-zero".to_owned(),
            ));
        }

        Ok(Self {
            domain_start,
            domain_end,
            inverted: false,
        })
    }

    /// Builds a scale over axis limits, widening a degenerate interval by
    /// `fallback_half_span` on each side.
    pub fn from_limits(limits: AxisLimits, fallback_half_span: f64) -> LogoResult<Self> {
        if limits.span() > 0.0 {
            return Self::new(limits.min, limits.max);
        }
        Self::new(limits.min - fallback_half_span, limits.max + fallback_half_span)
    }

    #[must_use]
    pub fn with_inverted(mut self, inverted: bool) -> Self {
        self.inverted = inverted;
        self
    }

    #[must_use]
    pub fn domain(self) -> (f64, f64) {
        (self.domain_start, self.domain_end)
    }

    pub fn to_pixel(self, value: f64, pixel_span: f64) -> LogoResult<f64> {
        if !value.is_finite() {
            return Err(LogoError::InvalidConfig("value must be finite".to_owned()));
        }
        if !pixel_span.is_finite() || pixel_span <= 0.0 {
            return Err(LogoError::InvalidConfig(
                "pixel span must be finite and > 0".to_owned(),
            ));
        }

        let normalized = (value - self.domain_start) / (self.domain_end - self.domain_start);
        let normalized = if self.inverted {
            1.0 - normalized
        } else {
            normalized
        };
        Ok(normalized * pixel_span)
    }

    /// Pixel length of a data-space distance.
    #[must_use]
    pub fn length_to_pixels(self, length: f64, pixel_span: f64) -> f64 {
        length.abs() / (self.domain_end - self.domain_start).abs() * pixel_span
    }
}
