use tracing::{debug, warn};

use crate::core::{AxisLimits, GlyphStore, LogoMatrix};
use crate::error::LogoResult;
use crate::render::{AxesState, LogoFrame, Renderer};

use super::Logo;

pub(super) struct RenderCoordinator;

impl RenderCoordinator {
    pub(super) fn draw<R: Renderer>(logo: &mut Logo<R>) -> LogoResult<()> {
        logo.has_been_drawn = false;
        let frame = build_glyph_frame(&logo.glyphs, &logo.matrix);
        if let Err(err) = logo.renderer.render(&frame) {
            warn!(error = %err, "logo draw failed");
            return Err(err);
        }
        debug!(
            glyphs = frame.glyphs.len(),
            x_min = frame.axes.x_limits.min,
            x_max = frame.axes.x_limits.max,
            y_min = frame.axes.y_limits.min,
            y_max = frame.axes.y_limits.max,
            "drew logo"
        );
        logo.frame = frame;
        logo.has_been_drawn = true;
        Ok(())
    }

    /// Renders an edited copy of the current surface and commits it only if
    /// the backend accepts it.
    pub(super) fn update_surface<R: Renderer>(
        logo: &mut Logo<R>,
        edit: impl FnOnce(&mut LogoFrame),
    ) -> LogoResult<()> {
        let mut frame = logo.frame.clone();
        edit(&mut frame);
        logo.renderer.render(&frame)?;
        logo.frame = frame;
        Ok(())
    }
}

/// Fresh surface holding every visible glyph, with limits fitted to all
/// glyph extents.
pub(super) fn build_glyph_frame(glyphs: &GlyphStore, matrix: &LogoMatrix) -> LogoFrame {
    let (x_limits, y_limits) = glyph_limits(glyphs, matrix);
    let mut frame = LogoFrame::new(AxesState::new(x_limits, y_limits));
    frame.glyphs = glyphs.iter().filter_map(|glyph| glyph.to_primitive()).collect();
    frame
}

/// Horizontal limits span `position ± width/2`, vertical limits span
/// `[floor, ceiling]`, over all glyphs. Without glyphs the positions are
/// padded by half a unit and the vertical range collapses to zero.
pub(super) fn glyph_limits(glyphs: &GlyphStore, matrix: &LogoMatrix) -> (AxisLimits, AxisLimits) {
    let x_limits = AxisLimits::enclosing(glyphs.iter().map(|glyph| glyph.x_extent()))
        .unwrap_or_else(|| {
            let (p_min, p_max) = matrix.position_range();
            AxisLimits {
                min: p_min - 0.5,
                max: p_max + 0.5,
            }
        });
    let y_limits = AxisLimits::enclosing(glyphs.iter().map(|glyph| (glyph.floor, glyph.ceiling)))
        .unwrap_or(AxisLimits { min: 0.0, max: 0.0 });
    (x_limits, y_limits)
}
