mod frame;
mod null_renderer;
mod primitives;

pub use frame::{AxesState, DrawItem, LogoFrame};
pub use null_renderer::NullRenderer;
pub use primitives::{
    Color, GlyphPrimitive, HorizontalLinePrimitive, RectPrimitive, SpineSide, SpineStyle,
    TickMark,
};

use crate::error::LogoResult;

/// Contract implemented by any drawing surface.
///
/// Backends receive the complete surface contents on every update, so a
/// backend never has to track partial state between calls.
pub trait Renderer {
    fn render(&mut self, frame: &LogoFrame) -> LogoResult<()>;
}

impl<R: Renderer + ?Sized> Renderer for &mut R {
    fn render(&mut self, frame: &LogoFrame) -> LogoResult<()> {
        (**self).render(frame)
    }
}

#[cfg(feature = "cairo-backend")]
mod cairo_backend;
#[cfg(feature = "cairo-backend")]
pub use cairo_backend::{CairoContextRenderer, CairoRenderStats, CairoRenderer, PlotMargins};
