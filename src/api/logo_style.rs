use serde::{Deserialize, Serialize};

use crate::core::GlyphStyle;
use crate::render::Color;

use super::TickLabelFormat;

/// Styling for glyphs whose source value is negative.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BelowGlyphStyle {
    /// Fraction in `[0, 1]` by which RGB channels are darkened toward black.
    pub shade: f64,
    /// Fraction in `[0, 1]` by which opacity is reduced.
    pub fade: f64,
    /// Forced flip state; `None` keeps each glyph's current flip.
    pub flip: Option<bool>,
    /// Further overrides applied after shade and fade.
    pub overrides: GlyphStyle,
}

impl Default for BelowGlyphStyle {
    fn default() -> Self {
        Self {
            shade: 0.0,
            fade: 0.0,
            flip: Some(true),
            overrides: GlyphStyle::default(),
        }
    }
}

impl BelowGlyphStyle {
    #[must_use]
    pub fn new(shade: f64, fade: f64) -> Self {
        Self {
            shade,
            fade,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_flip(mut self, flip: Option<bool>) -> Self {
        self.flip = flip;
        self
    }

    #[must_use]
    pub fn with_overrides(mut self, overrides: GlyphStyle) -> Self {
        self.overrides = overrides;
        self
    }
}

/// Overlay rectangle drawn behind a range of positions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HighlightStyle {
    /// Extra width on each side, in position units; must be >= -0.5.
    pub padding: f64,
    pub color: Color,
    pub edge_color: Option<Color>,
    pub edge_width: f64,
    /// Lower edge; `None` uses the current lower y limit.
    pub floor: Option<f64>,
    /// Upper edge; `None` uses the current upper y limit.
    pub ceiling: Option<f64>,
    pub zorder: i32,
}

impl Default for HighlightStyle {
    fn default() -> Self {
        Self {
            padding: 0.0,
            color: Color::rgb(1.0, 1.0, 0.0),
            edge_color: None,
            edge_width: 1.0,
            floor: None,
            ceiling: None,
            zorder: -2,
        }
    }
}

impl HighlightStyle {
    #[must_use]
    pub fn with_padding(mut self, padding: f64) -> Self {
        self.padding = padding;
        self
    }

    #[must_use]
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    #[must_use]
    pub fn with_edge(mut self, color: Color, width: f64) -> Self {
        self.edge_color = Some(color);
        self.edge_width = width;
        self
    }

    #[must_use]
    pub fn with_vertical_extent(mut self, floor: f64, ceiling: f64) -> Self {
        self.floor = Some(floor);
        self.ceiling = Some(ceiling);
        self
    }

    #[must_use]
    pub fn with_zorder(mut self, zorder: i32) -> Self {
        self.zorder = zorder;
        self
    }
}

/// Horizontal line along y = 0.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BaselineStyle {
    pub zorder: i32,
    pub color: Color,
    pub line_width: f64,
}

impl Default for BaselineStyle {
    fn default() -> Self {
        Self {
            zorder: -1,
            color: Color::BLACK,
            line_width: 0.5,
        }
    }
}

/// Position-axis tick placement and labelling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct XTickStyle {
    /// Fixes the tick register, even when outside the position range.
    pub anchor: f64,
    /// Distance between adjacent ticks, > 0.
    pub spacing: f64,
    pub format: TickLabelFormat,
    /// Label rotation in degrees.
    pub rotation: f64,
}

impl Default for XTickStyle {
    fn default() -> Self {
        Self {
            anchor: 0.0,
            spacing: 1.0,
            format: TickLabelFormat::integer(),
            rotation: 0.0,
        }
    }
}

impl XTickStyle {
    #[must_use]
    pub fn new(anchor: f64, spacing: f64) -> Self {
        Self {
            anchor,
            spacing,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_format(mut self, format: TickLabelFormat) -> Self {
        self.format = format;
        self
    }

    #[must_use]
    pub fn with_rotation(mut self, rotation: f64) -> Self {
        self.rotation = rotation;
        self
    }
}
