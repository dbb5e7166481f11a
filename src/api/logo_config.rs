use serde::{Deserialize, Serialize};

use crate::color::ColorScheme;
use crate::core::{DEFAULT_GLYPH_WIDTH, LayoutConfig, MatrixTransform};
use crate::error::{LogoError, LogoResult};

/// Whether a styling call pushes a fresh render to the surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Redraw {
    #[default]
    Now,
    Deferred,
}

impl From<bool> for Redraw {
    fn from(draw_now: bool) -> Self {
        if draw_now { Self::Now } else { Self::Deferred }
    }
}

/// Public logo bootstrap configuration.
///
/// Serializable so host applications can persist a logo setup next to the
/// matrix it was built from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogoConfig {
    /// Multiply every matrix value by -1 before layout.
    pub negate: bool,
    /// Subtract each row's mean before layout (after negation).
    pub center: bool,
    /// `None` picks a scheme from the character set.
    pub color_scheme: Option<ColorScheme>,
    pub flip_below: bool,
    /// Vertical whitespace between stacked glyphs (vsep), >= 0.
    pub gap: f64,
    pub zorder: i32,
    pub draw_now: bool,
    pub glyph_width: f64,
}

impl Default for LogoConfig {
    fn default() -> Self {
        Self {
            negate: false,
            center: false,
            color_scheme: None,
            flip_below: true,
            gap: 0.0,
            zorder: 0,
            draw_now: true,
            glyph_width: DEFAULT_GLYPH_WIDTH,
        }
    }
}

impl LogoConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_json_str(input: &str) -> LogoResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| LogoError::InvalidConfig(format!("failed to parse logo config: {e}")))
    }

    #[must_use]
    pub fn with_negate(mut self, negate: bool) -> Self {
        self.negate = negate;
        self
    }

    #[must_use]
    pub fn with_center(mut self, center: bool) -> Self {
        self.center = center;
        self
    }

    #[must_use]
    pub fn with_color_scheme(mut self, scheme: ColorScheme) -> Self {
        self.color_scheme = Some(scheme);
        self
    }

    #[must_use]
    pub fn with_flip_below(mut self, flip_below: bool) -> Self {
        self.flip_below = flip_below;
        self
    }

    #[must_use]
    pub fn with_gap(mut self, gap: f64) -> Self {
        self.gap = gap;
        self
    }

    #[must_use]
    pub fn with_zorder(mut self, zorder: i32) -> Self {
        self.zorder = zorder;
        self
    }

    #[must_use]
    pub fn with_draw_now(mut self, draw_now: bool) -> Self {
        self.draw_now = draw_now;
        self
    }

    #[must_use]
    pub fn with_glyph_width(mut self, glyph_width: f64) -> Self {
        self.glyph_width = glyph_width;
        self
    }

    #[must_use]
    pub fn transform(&self) -> MatrixTransform {
        MatrixTransform::new(self.negate, self.center)
    }

    #[must_use]
    pub fn layout(&self) -> LayoutConfig {
        LayoutConfig::new(self.gap, self.flip_below)
    }
}
