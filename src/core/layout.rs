use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::debug;

#[cfg(feature = "parallel-layout")]
use rayon::prelude::*;

use crate::color::ColorTable;
use crate::core::LogoMatrix;
use crate::error::{LogoError, LogoResult};
use crate::render::Color;

/// Inline capacity covers the protein alphabet without spilling.
pub type PositionStack = SmallVec<[StackedGlyph; 20]>;

/// Stacking parameters shared by every position.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LayoutConfig {
    /// Vertical whitespace between adjacent glyphs (vsep).
    pub gap: f64,
    /// Mark glyphs with negative source values as flipped.
    pub flip_below: bool,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            gap: 0.0,
            flip_below: true,
        }
    }
}

impl LayoutConfig {
    #[must_use]
    pub fn new(gap: f64, flip_below: bool) -> Self {
        Self { gap, flip_below }
    }

    pub fn validate(self) -> LogoResult<Self> {
        if !self.gap.is_finite() || self.gap < 0.0 {
            return Err(LogoError::InvalidConfig(format!(
                "glyph gap must be finite and >= 0, got {}",
                self.gap
            )));
        }
        Ok(self)
    }
}

/// Vertical extent of one glyph inside a single position's stack.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StackedGlyph {
    /// Column of the source value in the matrix row.
    pub column: usize,
    pub value: f64,
    pub floor: f64,
    pub ceiling: f64,
    pub flip: bool,
}

impl StackedGlyph {
    #[must_use]
    pub fn height(self) -> f64 {
        self.ceiling - self.floor
    }
}

/// Placement record for one (position, character) pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GlyphPlacement {
    /// Matrix row of `position`.
    pub row: usize,
    /// Matrix column of `character`.
    pub column: usize,
    pub position: f64,
    pub character: String,
    /// Source value after negation/centering.
    pub value: f64,
    pub floor: f64,
    pub ceiling: f64,
    pub color: Color,
    pub flip: bool,
    /// Index of this glyph in its position's bottom-to-top stack.
    pub stack_index: usize,
}

/// Stacks one matrix row into non-overlapping vertical extents.
///
/// Present values are ordered ascending, ties keeping column order. Negative
/// values stack below the baseline and positive ones above it; with a gap `g`
/// the topmost negative glyph ends at `-g/2` and the next glyph starts at
/// `g/2`. `NaN` cells are skipped.
#[must_use]
pub fn stack_position(values: &[f64], config: LayoutConfig) -> PositionStack {
    let gap = config.gap;
    let mut order: SmallVec<[usize; 20]> = (0..values.len())
        .filter(|&column| !values[column].is_nan())
        .collect();
    order.sort_by_key(|&column| OrderedFloat(values[column]));

    let mut floor = order
        .iter()
        .map(|&column| values[column])
        .filter(|value| *value < 0.0)
        .map(|value| value - gap)
        .sum::<f64>()
        + gap / 2.0;

    let mut stack = PositionStack::with_capacity(order.len());
    for column in order {
        let value = values[column];
        let ceiling = floor + value.abs();
        stack.push(StackedGlyph {
            column,
            value,
            floor,
            ceiling,
            flip: config.flip_below && value < 0.0,
        });
        floor = ceiling + gap;
    }
    stack
}

/// Runs [`stack_position`] over every matrix row and attaches characters and
/// colors.
///
/// Output is grouped by position in matrix order, each group bottom to top.
pub fn compute_layout(
    matrix: &LogoMatrix,
    colors: &ColorTable,
    config: LayoutConfig,
) -> LogoResult<Vec<GlyphPlacement>> {
    let config = config.validate()?;
    let characters = matrix.characters();
    let palette = characters
        .iter()
        .map(|character| colors.require(character))
        .collect::<LogoResult<Vec<Color>>>()?;

    // Rows are independent, so the parallel path only changes scheduling.
    #[cfg(feature = "parallel-layout")]
    let stacks: Vec<PositionStack> = matrix
        .rows()
        .collect::<Vec<_>>()
        .into_par_iter()
        .map(|row| stack_position(row, config))
        .collect();

    #[cfg(not(feature = "parallel-layout"))]
    let stacks: Vec<PositionStack> = matrix
        .rows()
        .map(|row| stack_position(row, config))
        .collect();

    let mut placements = Vec::with_capacity(matrix.present_cell_count());
    for (row, (position, stack)) in matrix.positions().zip(stacks).enumerate() {
        for (stack_index, glyph) in stack.into_iter().enumerate() {
            let character = characters
                .get_index(glyph.column)
                .cloned()
                .unwrap_or_default();
            placements.push(GlyphPlacement {
                row,
                column: glyph.column,
                position,
                character,
                value: glyph.value,
                floor: glyph.floor,
                ceiling: glyph.ceiling,
                color: palette[glyph.column],
                flip: glyph.flip,
                stack_index,
            });
        }
    }

    debug!(
        positions = matrix.len(),
        characters = characters.len(),
        glyphs = placements.len(),
        gap = config.gap,
        "computed glyph layout"
    );
    Ok(placements)
}
