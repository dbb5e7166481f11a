use serde::{Deserialize, Serialize};

use crate::error::{LogoError, LogoResult};

/// RGBA color in normalized 0..=1 channel values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

impl Color {
    pub const BLACK: Self = Self::rgb(0.0, 0.0, 0.0);
    pub const WHITE: Self = Self::rgb(1.0, 1.0, 1.0);

    #[must_use]
    pub const fn rgba(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    #[must_use]
    pub const fn rgb(red: f64, green: f64, blue: f64) -> Self {
        Self::rgba(red, green, blue, 1.0)
    }

    /// Parses `#rrggbb` or `#rrggbbaa`.
    #[must_use]
    pub fn from_hex(hex: &str) -> Option<Self> {
        let digits = hex.strip_prefix('#')?;
        if !(digits.len() == 6 || digits.len() == 8) || !digits.is_ascii() {
            return None;
        }
        let channel = |index: usize| -> Option<f64> {
            u8::from_str_radix(&digits[index..index + 2], 16)
                .ok()
                .map(|byte| f64::from(byte) / 255.0)
        };
        let alpha = if digits.len() == 8 { channel(6)? } else { 1.0 };
        Some(Self::rgba(channel(0)?, channel(2)?, channel(4)?, alpha))
    }

    #[must_use]
    pub fn with_alpha(self, alpha: f64) -> Self {
        Self { alpha, ..self }
    }

    /// Darkens toward black: every RGB channel is scaled by `1 - fraction`.
    #[must_use]
    pub fn shaded(self, fraction: f64) -> Self {
        let keep = 1.0 - fraction;
        Self::rgba(self.red * keep, self.green * keep, self.blue * keep, self.alpha)
    }

    /// Reduces opacity: alpha is scaled by `1 - fraction`.
    #[must_use]
    pub fn faded(self, fraction: f64) -> Self {
        self.with_alpha(self.alpha * (1.0 - fraction))
    }

    /// Channel-wise linear interpolation, `t` in `[0, 1]`.
    #[must_use]
    pub fn lerp(self, other: Self, t: f64) -> Self {
        let mix = |from: f64, to: f64| from + (to - from) * t;
        Self::rgba(
            mix(self.red, other.red),
            mix(self.green, other.green),
            mix(self.blue, other.blue),
            mix(self.alpha, other.alpha),
        )
    }

    pub fn validate(self) -> LogoResult<()> {
        for (channel, value) in [
            ("red", self.red),
            ("green", self.green),
            ("blue", self.blue),
            ("alpha", self.alpha),
        ] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(LogoError::InvalidConfig(format!(
                    "color channel `{channel}` must be finite and in [0, 1]"
                )));
            }
        }
        Ok(())
    }
}

/// Draw command for one character glyph in data space.
///
/// The glyph occupies `[position - width/2, position + width/2]` horizontally
/// and `[floor, ceiling]` vertically. `vpad` shrinks the inked area by that
/// fraction of the height, split evenly above and below.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GlyphPrimitive {
    pub character: String,
    pub position: f64,
    pub width: f64,
    pub floor: f64,
    pub ceiling: f64,
    pub color: Color,
    pub edge_color: Option<Color>,
    pub edge_width: f64,
    pub flip: bool,
    pub mirror: bool,
    pub vpad: f64,
    pub font_family: Option<String>,
    pub zorder: i32,
}

impl GlyphPrimitive {
    #[must_use]
    pub fn x_extent(&self) -> (f64, f64) {
        let half = self.width / 2.0;
        (self.position - half, self.position + half)
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.ceiling - self.floor
    }

    /// Vertical extent left after applying `vpad`.
    #[must_use]
    pub fn ink_extent(&self) -> (f64, f64) {
        let pad = self.height() * self.vpad / 2.0;
        (self.floor + pad, self.ceiling - pad)
    }

    pub fn validate(&self) -> LogoResult<()> {
        if self.character.is_empty() {
            return Err(LogoError::InvalidConfig(
                "glyph character must not be empty".to_owned(),
            ));
        }
        if !self.position.is_finite() || !self.floor.is_finite() || !self.ceiling.is_finite() {
            return Err(LogoError::InvalidConfig(
                "glyph coordinates must be finite".to_owned(),
            ));
        }
        if self.ceiling < self.floor {
            return Err(LogoError::InvalidConfig(format!(
                "glyph `{}` at {} has ceiling below floor",
                self.character, self.position
            )));
        }
        if !self.width.is_finite() || self.width <= 0.0 {
            return Err(LogoError::InvalidConfig(
                "glyph width must be finite and > 0".to_owned(),
            ));
        }
        if !(0.0..1.0).contains(&self.vpad) {
            return Err(LogoError::InvalidConfig(
                "glyph vpad must be in [0, 1)".to_owned(),
            ));
        }
        if !self.edge_width.is_finite() || self.edge_width < 0.0 {
            return Err(LogoError::InvalidConfig(
                "glyph edge width must be finite and >= 0".to_owned(),
            ));
        }
        if let Some(edge_color) = self.edge_color {
            edge_color.validate()?;
        }
        self.color.validate()
    }
}

/// Filled overlay rectangle in data space, anchored at its lower-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RectPrimitive {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub fill_color: Color,
    pub edge_color: Option<Color>,
    pub edge_width: f64,
    pub zorder: i32,
}

impl RectPrimitive {
    #[must_use]
    pub fn x_extent(self) -> (f64, f64) {
        (self.x, self.x + self.width)
    }

    #[must_use]
    pub fn y_extent(self) -> (f64, f64) {
        (self.y, self.y + self.height)
    }

    pub fn validate(self) -> LogoResult<()> {
        if !self.x.is_finite()
            || !self.y.is_finite()
            || !self.width.is_finite()
            || !self.height.is_finite()
        {
            return Err(LogoError::InvalidConfig(
                "rect geometry must be finite".to_owned(),
            ));
        }
        if self.width < 0.0 || self.height < 0.0 {
            return Err(LogoError::InvalidConfig(
                "rect width and height must be >= 0".to_owned(),
            ));
        }
        if !self.edge_width.is_finite() || self.edge_width < 0.0 {
            return Err(LogoError::InvalidConfig(
                "rect edge width must be finite and >= 0".to_owned(),
            ));
        }
        if let Some(edge_color) = self.edge_color {
            edge_color.validate()?;
        }
        self.fill_color.validate()
    }
}

/// Horizontal reference line at data height `y`, spanning the full x range.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HorizontalLinePrimitive {
    pub y: f64,
    pub stroke_width: f64,
    pub color: Color,
    pub zorder: i32,
}

impl HorizontalLinePrimitive {
    pub fn validate(self) -> LogoResult<()> {
        if !self.y.is_finite() {
            return Err(LogoError::InvalidConfig(
                "line height must be finite".to_owned(),
            ));
        }
        if !self.stroke_width.is_finite() || self.stroke_width < 0.0 {
            return Err(LogoError::InvalidConfig(
                "line stroke width must be finite and >= 0".to_owned(),
            ));
        }
        self.color.validate()
    }
}

/// One labelled tick on the position axis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TickMark {
    pub position: f64,
    pub label: String,
}

/// Plot boundary line identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SpineSide {
    Top,
    Bottom,
    Left,
    Right,
}

impl SpineSide {
    pub const ALL: [Self; 4] = [Self::Top, Self::Bottom, Self::Left, Self::Right];
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpineStyle {
    pub visible: bool,
    pub line_width: f64,
    pub color: Color,
    /// Drawn sub-range along the spine's own axis; `None` spans the full axis.
    pub bounds: Option<(f64, f64)>,
}

impl Default for SpineStyle {
    fn default() -> Self {
        Self {
            visible: true,
            line_width: 1.0,
            color: Color::BLACK,
            bounds: None,
        }
    }
}

impl SpineStyle {
    pub fn validate(self) -> LogoResult<()> {
        if !self.line_width.is_finite() || self.line_width < 0.0 {
            return Err(LogoError::InvalidConfig(
                "spine line width must be finite and >= 0".to_owned(),
            ));
        }
        if let Some((low, high)) = self.bounds {
            if !low.is_finite() || !high.is_finite() {
                return Err(LogoError::InvalidConfig(
                    "spine bounds must be finite".to_owned(),
                ));
            }
        }
        self.color.validate()
    }
}
