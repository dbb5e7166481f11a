use std::collections::HashMap;

use crate::core::{Glyph, GlyphPlacement};

/// Arena of glyphs indexed by matrix cell `(row, column)`.
///
/// Iteration follows layout order: positions in matrix order, each stack
/// bottom to top.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GlyphStore {
    glyphs: Vec<Glyph>,
    cells: HashMap<(usize, usize), usize>,
}

impl GlyphStore {
    #[must_use]
    pub fn from_layout(placements: &[GlyphPlacement], width: f64, zorder: i32) -> Self {
        let mut glyphs = Vec::with_capacity(placements.len());
        let mut cells = HashMap::with_capacity(placements.len());
        for placement in placements {
            cells.insert((placement.row, placement.column), glyphs.len());
            glyphs.push(Glyph::from_placement(placement, width, zorder));
        }
        Self { glyphs, cells }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }

    #[must_use]
    pub fn get(&self, row: usize, column: usize) -> Option<&Glyph> {
        self.cells.get(&(row, column)).map(|&slot| &self.glyphs[slot])
    }

    pub fn get_mut(&mut self, row: usize, column: usize) -> Option<&mut Glyph> {
        let slot = *self.cells.get(&(row, column))?;
        self.glyphs.get_mut(slot)
    }

    #[must_use]
    pub fn contains(&self, row: usize, column: usize) -> bool {
        self.cells.contains_key(&(row, column))
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Glyph> {
        self.glyphs.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, Glyph> {
        self.glyphs.iter_mut()
    }
}

impl<'a> IntoIterator for &'a GlyphStore {
    type Item = &'a Glyph;
    type IntoIter = std::slice::Iter<'a, Glyph>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
