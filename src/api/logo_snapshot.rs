use serde::{Deserialize, Serialize};

use crate::color::ColorScheme;
use crate::core::{Glyph, LogoMatrix};
use crate::render::{AxesState, Renderer};

use super::{Logo, LogoConfig};

/// Serializable deterministic state of a logo, used by regression tests and
/// debugging tooling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogoSnapshot {
    pub config: LogoConfig,
    /// Scheme in effect, including a defaulted one.
    pub color_scheme: ColorScheme,
    /// Matrix after negation/centering.
    pub matrix: LogoMatrix,
    /// Glyphs in layout order: positions in matrix order, each stack bottom
    /// to top.
    pub glyphs: Vec<Glyph>,
    pub has_been_drawn: bool,
    /// Axis state of the last committed surface; `None` before the first draw.
    pub axes: Option<AxesState>,
}

impl<R: Renderer> Logo<R> {
    #[must_use]
    pub fn snapshot(&self) -> LogoSnapshot {
        LogoSnapshot {
            config: self.config.clone(),
            color_scheme: self.color_scheme.clone(),
            matrix: self.matrix.clone(),
            glyphs: self.glyphs.iter().cloned().collect(),
            has_been_drawn: self.has_been_drawn,
            axes: self.has_been_drawn.then(|| self.frame.axes.clone()),
        }
    }
}
