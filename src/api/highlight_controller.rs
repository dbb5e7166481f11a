use tracing::{trace, warn};

use crate::error::LogoResult;
use crate::render::{HorizontalLinePrimitive, RectPrimitive, Renderer};

use super::render_coordinator::RenderCoordinator;
use super::validation::{validate_baseline, validate_highlight};
use super::{BaselineStyle, HighlightStyle, Logo};

impl<R: Renderer> Logo<R> {
    /// Highlights a single position. Same as
    /// `highlight_position_range(position, position, style)`.
    pub fn highlight_position(&mut self, position: f64, style: &HighlightStyle) -> LogoResult<()> {
        self.highlight_position_range(position, position, style)
    }

    /// Adds a rectangle spanning `[pmin - 0.5 - padding, pmax + 0.5 + padding]`
    /// horizontally. The vertical extent defaults to the current y limits.
    pub fn highlight_position_range(
        &mut self,
        pmin: f64,
        pmax: f64,
        style: &HighlightStyle,
    ) -> LogoResult<()> {
        self.require_drawn("highlight_position_range")?;
        let y_limits = self.frame.axes.y_limits;
        let (floor, ceiling) =
            validate_highlight(pmin, pmax, style, y_limits.min, y_limits.max).inspect_err(|err| {
                warn!(error = %err, pmin, pmax, "rejecting highlight");
            })?;

        let rect = RectPrimitive {
            x: pmin - 0.5 - style.padding,
            y: floor,
            width: pmax - pmin + 1.0 + 2.0 * style.padding,
            height: ceiling - floor,
            fill_color: style.color,
            edge_color: style.edge_color,
            edge_width: style.edge_width,
            zorder: style.zorder,
        };
        trace!(pmin, pmax, floor, ceiling, zorder = style.zorder, "highlighting positions");
        RenderCoordinator::update_surface(self, |frame| frame.rects.push(rect))
    }

    /// Draws a horizontal line at y = 0.
    pub fn draw_baseline(&mut self, style: &BaselineStyle) -> LogoResult<()> {
        self.require_drawn("draw_baseline")?;
        validate_baseline(style)?;
        let line = HorizontalLinePrimitive {
            y: 0.0,
            stroke_width: style.line_width,
            color: style.color,
            zorder: style.zorder,
        };
        trace!(zorder = style.zorder, "drawing baseline");
        RenderCoordinator::update_surface(self, |frame| frame.lines.push(line))
    }
}
