use serde::{Deserialize, Serialize};

use crate::color::ColorSpec;
use crate::core::GlyphPlacement;
use crate::error::{LogoError, LogoResult};
use crate::render::{Color, GlyphPrimitive};

pub const DEFAULT_GLYPH_WIDTH: f64 = 0.95;

/// Recognized per-glyph attribute overrides. `None` leaves an attribute as is.
///
/// `color` replaces the RGB channels and keeps the current opacity; `alpha`
/// sets the opacity. Deserialization rejects unknown keys.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GlyphStyle {
    pub color: Option<ColorSpec>,
    pub alpha: Option<f64>,
    pub flip: Option<bool>,
    pub mirror: Option<bool>,
    pub edge_color: Option<ColorSpec>,
    pub edge_width: Option<f64>,
    pub width: Option<f64>,
    pub vpad: Option<f64>,
    pub font_family: Option<String>,
    pub zorder: Option<i32>,
    pub visible: Option<bool>,
}

impl GlyphStyle {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a JSON object of style attributes.
    pub fn from_json_str(input: &str) -> LogoResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| LogoError::InvalidConfig(format!("invalid glyph style: {e}")))
    }

    #[must_use]
    pub fn with_color(mut self, color: impl Into<ColorSpec>) -> Self {
        self.color = Some(color.into());
        self
    }

    #[must_use]
    pub fn with_alpha(mut self, alpha: f64) -> Self {
        self.alpha = Some(alpha);
        self
    }

    #[must_use]
    pub fn with_flip(mut self, flip: bool) -> Self {
        self.flip = Some(flip);
        self
    }

    #[must_use]
    pub fn with_mirror(mut self, mirror: bool) -> Self {
        self.mirror = Some(mirror);
        self
    }

    #[must_use]
    pub fn with_edge(mut self, color: impl Into<ColorSpec>, width: f64) -> Self {
        self.edge_color = Some(color.into());
        self.edge_width = Some(width);
        self
    }

    #[must_use]
    pub fn with_width(mut self, width: f64) -> Self {
        self.width = Some(width);
        self
    }

    #[must_use]
    pub fn with_vpad(mut self, vpad: f64) -> Self {
        self.vpad = Some(vpad);
        self
    }

    #[must_use]
    pub fn with_font_family(mut self, font_family: impl Into<String>) -> Self {
        self.font_family = Some(font_family.into());
        self
    }

    #[must_use]
    pub fn with_zorder(mut self, zorder: i32) -> Self {
        self.zorder = Some(zorder);
        self
    }

    #[must_use]
    pub fn with_visible(mut self, visible: bool) -> Self {
        self.visible = Some(visible);
        self
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Checks every attribute and resolves colors, so applying the result
    /// cannot fail halfway.
    pub fn resolve(&self) -> LogoResult<ResolvedGlyphStyle> {
        let color = self.color.as_ref().map(ColorSpec::to_color).transpose()?;
        let edge_color = self
            .edge_color
            .as_ref()
            .map(ColorSpec::to_color)
            .transpose()?;

        if let Some(alpha) = self.alpha {
            if !alpha.is_finite() || !(0.0..=1.0).contains(&alpha) {
                return Err(LogoError::InvalidConfig(
                    "glyph alpha must be in [0, 1]".to_owned(),
                ));
            }
        }
        if let Some(width) = self.width {
            if !width.is_finite() || width <= 0.0 {
                return Err(LogoError::InvalidConfig(
                    "glyph width must be finite and > 0".to_owned(),
                ));
            }
        }
        if let Some(vpad) = self.vpad {
            if !(0.0..1.0).contains(&vpad) {
                return Err(LogoError::InvalidConfig(
                    "glyph vpad must be in [0, 1)".to_owned(),
                ));
            }
        }
        if let Some(edge_width) = self.edge_width {
            if !edge_width.is_finite() || edge_width < 0.0 {
                return Err(LogoError::InvalidConfig(
                    "glyph edge width must be finite and >= 0".to_owned(),
                ));
            }
        }
        if let Some(font_family) = &self.font_family {
            if font_family.trim().is_empty() {
                return Err(LogoError::InvalidConfig(
                    "glyph font family must not be blank".to_owned(),
                ));
            }
        }

        Ok(ResolvedGlyphStyle {
            color,
            alpha: self.alpha,
            flip: self.flip,
            mirror: self.mirror,
            edge_color,
            edge_width: self.edge_width,
            width: self.width,
            vpad: self.vpad,
            font_family: self.font_family.clone(),
            zorder: self.zorder,
            visible: self.visible,
        })
    }
}

/// A validated [`GlyphStyle`] with colors already resolved.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ResolvedGlyphStyle {
    pub color: Option<Color>,
    pub alpha: Option<f64>,
    pub flip: Option<bool>,
    pub mirror: Option<bool>,
    pub edge_color: Option<Color>,
    pub edge_width: Option<f64>,
    pub width: Option<f64>,
    pub vpad: Option<f64>,
    pub font_family: Option<String>,
    pub zorder: Option<i32>,
    pub visible: Option<bool>,
}

/// One placed, styleable character glyph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Glyph {
    pub position: f64,
    pub character: String,
    /// Matrix value the glyph was stacked from.
    pub value: f64,
    pub floor: f64,
    pub ceiling: f64,
    /// Fill color; its alpha channel is the glyph opacity.
    pub color: Color,
    pub flip: bool,
    pub mirror: bool,
    pub width: f64,
    pub vpad: f64,
    pub edge_color: Option<Color>,
    pub edge_width: f64,
    pub font_family: Option<String>,
    pub zorder: i32,
    pub visible: bool,
}

impl Glyph {
    #[must_use]
    pub fn from_placement(placement: &GlyphPlacement, width: f64, zorder: i32) -> Self {
        Self {
            position: placement.position,
            character: placement.character.clone(),
            value: placement.value,
            floor: placement.floor,
            ceiling: placement.ceiling,
            color: placement.color,
            flip: placement.flip,
            mirror: false,
            width,
            vpad: 0.0,
            edge_color: None,
            edge_width: 0.0,
            font_family: None,
            zorder,
            visible: true,
        }
    }

    #[must_use]
    pub fn alpha(&self) -> f64 {
        self.color.alpha
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.ceiling - self.floor
    }

    #[must_use]
    pub fn x_extent(&self) -> (f64, f64) {
        let half = self.width / 2.0;
        (self.position - half, self.position + half)
    }

    /// Validates `style` and applies it; on error the glyph is unchanged.
    pub fn set_attributes(&mut self, style: &GlyphStyle) -> LogoResult<()> {
        let resolved = style.resolve()?;
        self.apply(&resolved);
        Ok(())
    }

    pub fn apply(&mut self, style: &ResolvedGlyphStyle) {
        if let Some(color) = style.color {
            self.color = color.with_alpha(self.color.alpha);
        }
        if let Some(alpha) = style.alpha {
            self.color = self.color.with_alpha(alpha);
        }
        if let Some(flip) = style.flip {
            self.flip = flip;
        }
        if let Some(mirror) = style.mirror {
            self.mirror = mirror;
        }
        if let Some(edge_color) = style.edge_color {
            self.edge_color = Some(edge_color);
        }
        if let Some(edge_width) = style.edge_width {
            self.edge_width = edge_width;
        }
        if let Some(width) = style.width {
            self.width = width;
        }
        if let Some(vpad) = style.vpad {
            self.vpad = vpad;
        }
        if let Some(font_family) = &style.font_family {
            self.font_family = Some(font_family.clone());
        }
        if let Some(zorder) = style.zorder {
            self.zorder = zorder;
        }
        if let Some(visible) = style.visible {
            self.visible = visible;
        }
    }

    /// Draw command for this glyph, or `None` when it is hidden.
    #[must_use]
    pub fn to_primitive(&self) -> Option<GlyphPrimitive> {
        self.visible.then(|| GlyphPrimitive {
            character: self.character.clone(),
            position: self.position,
            width: self.width,
            floor: self.floor,
            ceiling: self.ceiling,
            color: self.color,
            edge_color: self.edge_color,
            edge_width: self.edge_width,
            flip: self.flip,
            mirror: self.mirror,
            vpad: self.vpad,
            font_family: self.font_family.clone(),
            zorder: self.zorder,
        })
    }
}
