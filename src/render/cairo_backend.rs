use cairo::{Context, Format, ImageSurface};
use pango::FontDescription;
use tracing::trace;

use crate::core::{LinearScale, Viewport};
use crate::error::{LogoError, LogoResult};
use crate::render::{
    Color, DrawItem, GlyphPrimitive, HorizontalLinePrimitive, LogoFrame, RectPrimitive, Renderer,
    SpineSide, SpineStyle, TickMark,
};

const GLYPH_FONT_SIZE: &str = "100";
const DEFAULT_GLYPH_FONT: &str = "Sans Bold";
const TICK_FONT: &str = "Sans 10";
const TICK_LENGTH_PX: f64 = 4.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CairoRenderStats {
    pub glyphs_drawn: usize,
    pub rects_drawn: usize,
    pub lines_drawn: usize,
    pub ticks_drawn: usize,
}

/// Pixel padding between the surface border and the plot area.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotMargins {
    pub left: f64,
    pub right: f64,
    pub top: f64,
    pub bottom: f64,
}

impl Default for PlotMargins {
    fn default() -> Self {
        Self {
            left: 40.0,
            right: 10.0,
            top: 10.0,
            bottom: 30.0,
        }
    }
}

/// Optional extension trait for renderers that can draw into an external Cairo
/// context (for example a GTK `DrawingArea` callback).
pub trait CairoContextRenderer {
    fn render_on_cairo_context(&mut self, context: &Context, frame: &LogoFrame) -> LogoResult<()>;
}

/// Cairo + Pango + PangoCairo renderer backend.
///
/// Glyphs are drawn as text outlines whose ink extents are stretched to fill
/// each glyph box; flipped glyphs are mirrored vertically and mirrored glyphs
/// horizontally.
#[derive(Debug)]
pub struct CairoRenderer {
    surface: ImageSurface,
    viewport: Viewport,
    margins: PlotMargins,
    clear_color: Color,
    last_stats: CairoRenderStats,
}

impl CairoRenderer {
    pub fn new(width: u32, height: u32) -> LogoResult<Self> {
        let viewport = Viewport::new(width, height);
        if !viewport.is_valid() {
            return Err(LogoError::InvalidConfig(
                "cairo surface size must be > 0".to_owned(),
            ));
        }
        let (Ok(surface_width), Ok(surface_height)) = (i32::try_from(width), i32::try_from(height))
        else {
            return Err(LogoError::InvalidConfig(
                "cairo surface size exceeds i32".to_owned(),
            ));
        };

        let surface = ImageSurface::create(Format::ARgb32, surface_width, surface_height)
            .map_err(|err| map_backend_error("failed to create cairo surface", err))?;
        Ok(Self {
            surface,
            viewport,
            margins: PlotMargins::default(),
            clear_color: Color::WHITE,
            last_stats: CairoRenderStats::default(),
        })
    }

    #[must_use]
    pub fn with_margins(mut self, margins: PlotMargins) -> Self {
        self.margins = margins;
        self
    }

    #[must_use]
    pub fn backend_name(&self) -> &'static str {
        "cairo+pango+pangocairo"
    }

    #[must_use]
    pub fn surface(&self) -> &ImageSurface {
        &self.surface
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    #[must_use]
    pub fn clear_color(&self) -> Color {
        self.clear_color
    }

    pub fn set_clear_color(&mut self, color: Color) -> LogoResult<()> {
        color.validate()?;
        self.clear_color = color;
        Ok(())
    }

    #[must_use]
    pub fn last_stats(&self) -> CairoRenderStats {
        self.last_stats
    }

    /// Encodes the current surface as PNG.
    pub fn write_png(&self, out: &mut impl std::io::Write) -> LogoResult<()> {
        self.surface
            .write_to_png(out)
            .map_err(|err| LogoError::Backend(format!("failed to encode png: {err}")))
    }

    fn render_with_context(&mut self, context: &Context, frame: &LogoFrame) -> LogoResult<()> {
        frame.validate()?;
        self.clear_color.validate()?;

        apply_color(context, self.clear_color);
        context
            .paint()
            .map_err(|err| map_backend_error("failed to clear surface", err))?;

        let plot = PlotArea::new(self.viewport, self.margins, frame)?;
        let mut stats = CairoRenderStats::default();

        for item in frame.items_by_zorder() {
            match item {
                DrawItem::Rect(rect) => {
                    draw_rect(context, &plot, rect)?;
                    stats.rects_drawn += 1;
                }
                DrawItem::Line(line) => {
                    draw_line(context, &plot, line)?;
                    stats.lines_drawn += 1;
                }
                DrawItem::Glyph(glyph) => {
                    if draw_glyph(context, &plot, glyph)? {
                        stats.glyphs_drawn += 1;
                    }
                }
            }
        }

        for (&side, &spine) in &frame.axes.spines {
            draw_spine(context, &plot, side, spine)?;
        }
        if let Some(ticks) = &frame.axes.x_ticks {
            for tick in ticks {
                draw_tick(context, &plot, tick, frame.axes.x_tick_rotation)?;
                stats.ticks_drawn += 1;
            }
        }

        trace!(
            glyphs = stats.glyphs_drawn,
            rects = stats.rects_drawn,
            lines = stats.lines_drawn,
            ticks = stats.ticks_drawn,
            "cairo frame rendered"
        );
        self.last_stats = stats;
        Ok(())
    }
}

impl Renderer for CairoRenderer {
    fn render(&mut self, frame: &LogoFrame) -> LogoResult<()> {
        let context = Context::new(&self.surface)
            .map_err(|err| map_backend_error("failed to create cairo context", err))?;
        self.render_with_context(&context, frame)
    }
}

impl CairoContextRenderer for CairoRenderer {
    fn render_on_cairo_context(&mut self, context: &Context, frame: &LogoFrame) -> LogoResult<()> {
        self.render_with_context(context, frame)
    }
}

/// Plot rectangle in pixels plus the data-to-pixel scales for both axes.
struct PlotArea {
    left: f64,
    top: f64,
    width: f64,
    height: f64,
    x_scale: LinearScale,
    y_scale: LinearScale,
}

impl PlotArea {
    fn new(viewport: Viewport, margins: PlotMargins, frame: &LogoFrame) -> LogoResult<Self> {
        let width = f64::from(viewport.width) - margins.left - margins.right;
        let height = f64::from(viewport.height) - margins.top - margins.bottom;
        if width <= 0.0 || height <= 0.0 {
            return Err(LogoError::InvalidConfig(
                "plot margins leave no drawable area".to_owned(),
            ));
        }
        Ok(Self {
            left: margins.left,
            top: margins.top,
            width,
            height,
            x_scale: LinearScale::from_limits(frame.axes.x_limits, 0.5)?,
            y_scale: LinearScale::from_limits(frame.axes.y_limits, 0.5)?.with_inverted(true),
        })
    }

    fn x(&self, value: f64) -> LogoResult<f64> {
        Ok(self.left + self.x_scale.to_pixel(value, self.width)?)
    }

    fn y(&self, value: f64) -> LogoResult<f64> {
        Ok(self.top + self.y_scale.to_pixel(value, self.height)?)
    }

    fn bottom(&self) -> f64 {
        self.top + self.height
    }

    fn right(&self) -> f64 {
        self.left + self.width
    }
}

fn draw_rect(context: &Context, plot: &PlotArea, rect: &RectPrimitive) -> LogoResult<()> {
    let left = plot.x(rect.x)?;
    let right = plot.x(rect.x + rect.width)?;
    let top = plot.y(rect.y + rect.height)?;
    let bottom = plot.y(rect.y)?;
    context.rectangle(left, top, right - left, bottom - top);
    apply_color(context, rect.fill_color);
    match rect.edge_color {
        Some(edge_color) if rect.edge_width > 0.0 => {
            context
                .fill_preserve()
                .map_err(|err| map_backend_error("failed to fill rectangle", err))?;
            apply_color(context, edge_color);
            context.set_line_width(rect.edge_width);
            context
                .stroke()
                .map_err(|err| map_backend_error("failed to stroke rectangle edge", err))
        }
        _ => context
            .fill()
            .map_err(|err| map_backend_error("failed to fill rectangle", err)),
    }
}

fn draw_line(context: &Context, plot: &PlotArea, line: &HorizontalLinePrimitive) -> LogoResult<()> {
    let y = plot.y(line.y)?;
    apply_color(context, line.color);
    context.set_line_width(line.stroke_width);
    context.move_to(plot.left, y);
    context.line_to(plot.right(), y);
    context
        .stroke()
        .map_err(|err| map_backend_error("failed to stroke line", err))
}

/// Returns `false` when the glyph has no drawable area.
fn draw_glyph(context: &Context, plot: &PlotArea, glyph: &GlyphPrimitive) -> LogoResult<bool> {
    let (x_low, x_high) = glyph.x_extent();
    let (ink_floor, ink_ceiling) = glyph.ink_extent();
    let left = plot.x(x_low)?;
    let right = plot.x(x_high)?;
    let top = plot.y(ink_ceiling)?;
    let bottom = plot.y(ink_floor)?;
    let box_width = right - left;
    let box_height = bottom - top;
    if box_width <= 0.0 || box_height <= 0.0 {
        return Ok(false);
    }

    let layout = pangocairo::functions::create_layout(context);
    let family = glyph.font_family.as_deref().unwrap_or(DEFAULT_GLYPH_FONT);
    let font_description = FontDescription::from_string(&format!("{family} {GLYPH_FONT_SIZE}"));
    layout.set_font_description(Some(&font_description));
    layout.set_text(&glyph.character);
    let (ink, _logical) = layout.pixel_extents();
    if ink.width() <= 0 || ink.height() <= 0 {
        return Ok(false);
    }

    let x_sign = if glyph.mirror { -1.0 } else { 1.0 };
    let y_sign = if glyph.flip { -1.0 } else { 1.0 };
    context
        .save()
        .map_err(|err| map_backend_error("failed to save cairo state", err))?;
    context.translate((left + right) / 2.0, (top + bottom) / 2.0);
    context.scale(
        x_sign * box_width / f64::from(ink.width()),
        y_sign * box_height / f64::from(ink.height()),
    );
    context.translate(
        -(f64::from(ink.x()) + f64::from(ink.width()) / 2.0),
        -(f64::from(ink.y()) + f64::from(ink.height()) / 2.0),
    );
    context.new_path();
    pangocairo::functions::layout_path(context, &layout);
    // The path is kept in device space, so edges are stroked unscaled.
    context
        .restore()
        .map_err(|err| map_backend_error("failed to restore cairo state", err))?;

    apply_color(context, glyph.color);
    match glyph.edge_color {
        Some(edge_color) if glyph.edge_width > 0.0 => {
            context
                .fill_preserve()
                .map_err(|err| map_backend_error("failed to fill glyph", err))?;
            apply_color(context, edge_color);
            context.set_line_width(glyph.edge_width);
            context
                .stroke()
                .map_err(|err| map_backend_error("failed to stroke glyph edge", err))?;
        }
        _ => context
            .fill()
            .map_err(|err| map_backend_error("failed to fill glyph", err))?,
    }
    Ok(true)
}

fn draw_spine(
    context: &Context,
    plot: &PlotArea,
    side: SpineSide,
    spine: SpineStyle,
) -> LogoResult<()> {
    if !spine.visible || spine.line_width <= 0.0 {
        return Ok(());
    }
    let ((x1, y1), (x2, y2)) = match side {
        SpineSide::Left | SpineSide::Right => {
            let x = if side == SpineSide::Left {
                plot.left
            } else {
                plot.right()
            };
            let (start, end) = match spine.bounds {
                Some((low, high)) => (plot.y(low)?, plot.y(high)?),
                None => (plot.bottom(), plot.top),
            };
            ((x, start), (x, end))
        }
        SpineSide::Top | SpineSide::Bottom => {
            let y = if side == SpineSide::Top {
                plot.top
            } else {
                plot.bottom()
            };
            let (start, end) = match spine.bounds {
                Some((low, high)) => (plot.x(low)?, plot.x(high)?),
                None => (plot.left, plot.right()),
            };
            ((start, y), (end, y))
        }
    };
    apply_color(context, spine.color);
    context.set_line_width(spine.line_width);
    context.move_to(x1, y1);
    context.line_to(x2, y2);
    context
        .stroke()
        .map_err(|err| map_backend_error("failed to stroke spine", err))
}

fn draw_tick(context: &Context, plot: &PlotArea, tick: &TickMark, rotation: f64) -> LogoResult<()> {
    let x = plot.x(tick.position)?;
    let y = plot.bottom();
    apply_color(context, Color::BLACK);
    context.set_line_width(1.0);
    context.move_to(x, y);
    context.line_to(x, y + TICK_LENGTH_PX);
    context
        .stroke()
        .map_err(|err| map_backend_error("failed to stroke tick", err))?;

    let layout = pangocairo::functions::create_layout(context);
    layout.set_font_description(Some(&FontDescription::from_string(TICK_FONT)));
    layout.set_text(&tick.label);
    let (label_width, _label_height) = layout.pixel_size();

    context
        .save()
        .map_err(|err| map_backend_error("failed to save cairo state", err))?;
    context.translate(x, y + TICK_LENGTH_PX + 2.0);
    context.rotate(-rotation.to_radians());
    context.move_to(-f64::from(label_width) / 2.0, 0.0);
    pangocairo::functions::show_layout(context, &layout);
    context
        .restore()
        .map_err(|err| map_backend_error("failed to restore cairo state", err))
}

fn apply_color(context: &Context, color: Color) {
    context.set_source_rgba(color.red, color.green, color.blue, color.alpha);
}

fn map_backend_error(prefix: &str, err: cairo::Error) -> LogoError {
    LogoError::Backend(format!("{prefix}: {err}"))
}
