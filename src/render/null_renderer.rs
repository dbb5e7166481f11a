use crate::error::LogoResult;
use crate::render::{LogoFrame, Renderer};

/// No-op renderer used by tests and headless usage.
///
/// It still validates frame content so invalid geometry is caught without a
/// raster backend.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub render_count: usize,
    pub last_glyph_count: usize,
    pub last_rect_count: usize,
    pub last_line_count: usize,
}

impl Renderer for NullRenderer {
    fn render(&mut self, frame: &LogoFrame) -> LogoResult<()> {
        frame.validate()?;
        self.render_count += 1;
        self.last_glyph_count = frame.glyphs.len();
        self.last_rect_count = frame.rects.len();
        self.last_line_count = frame.lines.len();
        Ok(())
    }
}
