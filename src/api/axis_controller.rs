use tracing::{trace, warn};

use crate::error::LogoResult;
use crate::render::{Renderer, SpineSide, SpineStyle};

use super::axis_ticks::registered_ticks;
use super::render_coordinator::RenderCoordinator;
use super::validation::validate_xtick_style;
use super::{Logo, XTickStyle};

impl<R: Renderer> Logo<R> {
    /// Places position-axis ticks on `anchor + k * spacing` within the
    /// position range and labels them with `style.format`.
    pub fn style_xticks(&mut self, style: &XTickStyle) -> LogoResult<()> {
        self.require_drawn("style_xticks")?;
        if let Err(err) = validate_xtick_style(style) {
            warn!(error = %err, "rejecting tick style");
            return Err(err);
        }
        let ticks = registered_ticks(
            self.matrix.position_range(),
            style.anchor,
            style.spacing,
            &style.format,
        )
        .inspect_err(|err| warn!(error = %err, "rejecting tick style"))?;
        trace!(
            ticks = ticks.len(),
            anchor = style.anchor,
            spacing = style.spacing,
            "styled position ticks"
        );
        let rotation = style.rotation;
        RenderCoordinator::update_surface(self, |frame| {
            frame.axes.x_ticks = Some(ticks);
            frame.axes.x_tick_rotation = rotation;
        })
    }

    /// Restyles the given spines. Spines keep their current bounds when
    /// `style.bounds` is `None`.
    pub fn style_spines(&mut self, sides: &[SpineSide], style: SpineStyle) -> LogoResult<()> {
        self.require_drawn("style_spines")?;
        style.validate()?;
        trace!(?sides, visible = style.visible, "styling spines");
        RenderCoordinator::update_surface(self, |frame| {
            for &side in sides {
                let current = frame.axes.spine(side);
                frame.axes.spines.insert(
                    side,
                    SpineStyle {
                        bounds: style.bounds.or(current.bounds),
                        ..style
                    },
                );
            }
        })
    }
}
