use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::core::AxisLimits;
use crate::error::{LogoError, LogoResult};
use crate::render::{
    GlyphPrimitive, HorizontalLinePrimitive, RectPrimitive, SpineSide, SpineStyle, TickMark,
};

/// Axis decoration state of the drawing surface.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxesState {
    pub x_limits: AxisLimits,
    pub y_limits: AxisLimits,
    /// Explicit position-axis ticks; `None` leaves tick placement to the backend.
    pub x_ticks: Option<Vec<TickMark>>,
    /// Label rotation in degrees.
    pub x_tick_rotation: f64,
    pub spines: IndexMap<SpineSide, SpineStyle>,
}

impl AxesState {
    #[must_use]
    pub fn new(x_limits: AxisLimits, y_limits: AxisLimits) -> Self {
        Self {
            x_limits,
            y_limits,
            x_ticks: None,
            x_tick_rotation: 0.0,
            spines: SpineSide::ALL
                .into_iter()
                .map(|side| (side, SpineStyle::default()))
                .collect(),
        }
    }

    #[must_use]
    pub fn spine(&self, side: SpineSide) -> SpineStyle {
        self.spines.get(&side).copied().unwrap_or_default()
    }
}

impl Default for AxesState {
    fn default() -> Self {
        let unit = AxisLimits { min: 0.0, max: 1.0 };
        Self::new(unit, unit)
    }
}

/// Borrowed view of one primitive, used for z-ordered traversal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DrawItem<'a> {
    Rect(&'a RectPrimitive),
    Line(&'a HorizontalLinePrimitive),
    Glyph(&'a GlyphPrimitive),
}

impl DrawItem<'_> {
    #[must_use]
    pub fn zorder(&self) -> i32 {
        match self {
            Self::Rect(rect) => rect.zorder,
            Self::Line(line) => line.zorder,
            Self::Glyph(glyph) => glyph.zorder,
        }
    }
}

/// Backend-agnostic contents of the drawing surface for one logo.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct LogoFrame {
    pub glyphs: Vec<GlyphPrimitive>,
    pub rects: Vec<RectPrimitive>,
    pub lines: Vec<HorizontalLinePrimitive>,
    pub axes: AxesState,
}

impl LogoFrame {
    #[must_use]
    pub fn new(axes: AxesState) -> Self {
        Self {
            glyphs: Vec::new(),
            rects: Vec::new(),
            lines: Vec::new(),
            axes,
        }
    }

    #[must_use]
    pub fn with_glyph(mut self, glyph: GlyphPrimitive) -> Self {
        self.glyphs.push(glyph);
        self
    }

    #[must_use]
    pub fn with_rect(mut self, rect: RectPrimitive) -> Self {
        self.rects.push(rect);
        self
    }

    #[must_use]
    pub fn with_line(mut self, line: HorizontalLinePrimitive) -> Self {
        self.lines.push(line);
        self
    }

    /// Every primitive in ascending z-order. Equal z-orders keep
    /// rects, then lines, then glyphs, each in insertion order.
    #[must_use]
    pub fn items_by_zorder(&self) -> Vec<DrawItem<'_>> {
        let mut items: Vec<DrawItem<'_>> = self
            .rects
            .iter()
            .map(DrawItem::Rect)
            .chain(self.lines.iter().map(DrawItem::Line))
            .chain(self.glyphs.iter().map(DrawItem::Glyph))
            .collect();
        items.sort_by_key(|item| item.zorder());
        items
    }

    pub fn validate(&self) -> LogoResult<()> {
        if self.axes.x_limits.min > self.axes.x_limits.max
            || self.axes.y_limits.min > self.axes.y_limits.max
        {
            return Err(LogoError::InvalidRange(
                "frame axis limits must satisfy min <= max".to_owned(),
            ));
        }
        if !self.axes.x_tick_rotation.is_finite() {
            return Err(LogoError::InvalidConfig(
                "tick rotation must be finite".to_owned(),
            ));
        }

        for glyph in &self.glyphs {
            glyph.validate()?;
        }
        for rect in &self.rects {
            rect.validate()?;
        }
        for line in &self.lines {
            line.validate()?;
        }
        for spine in self.axes.spines.values() {
            spine.validate()?;
        }

        Ok(())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty() && self.rects.is_empty() && self.lines.is_empty()
    }
}
