#[cfg(feature = "cairo-backend")]
use tracing::debug;

#[cfg(feature = "cairo-backend")]
use crate::error::LogoResult;
#[cfg(feature = "cairo-backend")]
use crate::render::{CairoContextRenderer, Renderer};

#[cfg(feature = "cairo-backend")]
use super::Logo;
#[cfg(feature = "cairo-backend")]
use super::render_coordinator::build_glyph_frame;

#[cfg(feature = "cairo-backend")]
impl<R: Renderer + CairoContextRenderer> Logo<R> {
    /// Paints the logo onto an external Cairo context (for example a GTK
    /// `DrawingArea` callback). A logo that has not been drawn yet is drawn
    /// from its glyphs first; otherwise the current surface, decorations
    /// included, is repainted.
    pub fn render_on_cairo_context(&mut self, context: &cairo::Context) -> LogoResult<()> {
        if self.has_been_drawn {
            return self.renderer.render_on_cairo_context(context, &self.frame);
        }
        let frame = build_glyph_frame(&self.glyphs, &self.matrix);
        self.renderer.render_on_cairo_context(context, &frame)?;
        debug!(glyphs = frame.glyphs.len(), "drew logo on external cairo context");
        self.frame = frame;
        self.has_been_drawn = true;
        Ok(())
    }
}
