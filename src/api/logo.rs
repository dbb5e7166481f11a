use crate::color::{ColorResolver, ColorScheme, ColorTable};
use crate::core::{Glyph, GlyphStore, LogoMatrix};
use crate::error::{LogoError, LogoResult};
use crate::render::{LogoFrame, Renderer};

use super::LogoConfig;
use super::render_coordinator::RenderCoordinator;

/// Sequence logo controller.
///
/// `Logo` owns the transformed matrix, every glyph placement produced by the
/// layout engine, and the drawing surface. Styling calls mutate glyphs in
/// place; `draw` regenerates the surface contents from the glyphs.
pub struct Logo<R: Renderer> {
    pub(super) renderer: R,
    pub(super) matrix: LogoMatrix,
    pub(super) config: LogoConfig,
    pub(super) color_scheme: ColorScheme,
    pub(super) colors: ColorTable,
    pub(super) resolver: Box<dyn ColorResolver>,
    pub(super) glyphs: GlyphStore,
    pub(super) frame: LogoFrame,
    pub(super) has_been_drawn: bool,
}

impl<R: Renderer> Logo<R> {
    /// Matrix after negation/centering.
    #[must_use]
    pub fn matrix(&self) -> &LogoMatrix {
        &self.matrix
    }

    #[must_use]
    pub fn config(&self) -> &LogoConfig {
        &self.config
    }

    /// Scheme in effect, including the one picked when none was configured.
    #[must_use]
    pub fn color_scheme(&self) -> &ColorScheme {
        &self.color_scheme
    }

    #[must_use]
    pub fn colors(&self) -> &ColorTable {
        &self.colors
    }

    #[must_use]
    pub fn glyphs(&self) -> &GlyphStore {
        &self.glyphs
    }

    /// Number of positions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.matrix.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.matrix.is_empty()
    }

    pub fn glyph(&self, position: f64, character: &str) -> LogoResult<&Glyph> {
        let (row, column) = self.cell(position, character)?;
        self.glyphs
            .get(row, column)
            .ok_or_else(|| LogoError::MissingGlyph {
                position,
                character: character.to_owned(),
            })
    }

    /// Current surface contents. Empty until the first `draw`.
    #[must_use]
    pub fn frame(&self) -> &LogoFrame {
        &self.frame
    }

    #[must_use]
    pub fn has_been_drawn(&self) -> bool {
        self.has_been_drawn
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    /// Swaps in another surface and returns the previous one. The logo counts
    /// as not drawn until the next `draw`.
    pub fn replace_renderer(&mut self, renderer: R) -> R {
        self.has_been_drawn = false;
        self.frame = LogoFrame::default();
        std::mem::replace(&mut self.renderer, renderer)
    }

    /// Clears the surface, draws every glyph and fits the axis limits to the
    /// glyph extents.
    pub fn draw(&mut self) -> LogoResult<()> {
        RenderCoordinator::draw(self)
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }

    pub(super) fn cell(&self, position: f64, character: &str) -> LogoResult<(usize, usize)> {
        let row = self
            .matrix
            .position_index(position)
            .ok_or(LogoError::UnknownPosition(position))?;
        let column = self
            .matrix
            .character_index(character)
            .ok_or_else(|| LogoError::UnknownCharacter(character.to_owned()))?;
        Ok((row, column))
    }

    pub(super) fn require_drawn(&self, operation: &'static str) -> LogoResult<()> {
        if self.has_been_drawn {
            Ok(())
        } else {
            Err(LogoError::NotDrawn { operation })
        }
    }
}
