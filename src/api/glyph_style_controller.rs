use tracing::{trace, warn};

use crate::color::ColorScheme;
use crate::core::GlyphStyle;
use crate::error::{LogoError, LogoResult};
use crate::render::Renderer;

use super::validation::validate_fraction;
use super::{BelowGlyphStyle, Logo, Redraw};

impl<R: Renderer> Logo<R> {
    /// Applies `style` to every glyph. A new color scheme, when given, is
    /// resolved per character and overrides any `style.color`.
    pub fn style_glyphs(
        &mut self,
        colors: Option<ColorScheme>,
        style: &GlyphStyle,
        redraw: Redraw,
    ) -> LogoResult<()> {
        let resolved = style.resolve()?;
        let recolor = match colors {
            Some(scheme) => {
                let table = self.resolver.resolve(&scheme, self.matrix.characters())?;
                for character in self.matrix.characters() {
                    table.require(character)?;
                }
                Some((scheme, table))
            }
            None => None,
        };

        for glyph in self.glyphs.iter_mut() {
            glyph.apply(&resolved);
            if let Some(color) = recolor
                .as_ref()
                .and_then(|(_, table)| table.get(&glyph.character))
            {
                glyph.color = color.with_alpha(glyph.color.alpha);
            }
        }
        if let Some(zorder) = style.zorder {
            self.config.zorder = zorder;
        }
        if let Some((scheme, table)) = recolor {
            trace!(?scheme, "re-colored logo");
            self.config.color_scheme = Some(scheme.clone());
            self.color_scheme = scheme;
            self.colors = table;
        }
        trace!(glyphs = self.glyphs.len(), "styled all glyphs");
        self.finish_styling(redraw)
    }

    /// Shades, fades and optionally flips every glyph whose source value is
    /// negative, then applies `below.overrides` to those glyphs.
    pub fn style_glyphs_below(&mut self, below: &BelowGlyphStyle, redraw: Redraw) -> LogoResult<()> {
        let shade = validate_fraction("shade", below.shade)?;
        let fade = validate_fraction("fade", below.fade)?;
        let resolved = below.overrides.resolve()?;

        let mut styled = 0usize;
        for glyph in self.glyphs.iter_mut().filter(|glyph| glyph.value < 0.0) {
            glyph.color = glyph.color.shaded(shade).faded(fade);
            if let Some(flip) = below.flip {
                glyph.flip = flip;
            }
            glyph.apply(&resolved);
            styled += 1;
        }
        trace!(styled, shade, fade, "styled glyphs below baseline");
        self.finish_styling(redraw)
    }

    /// Applies `style` to the glyph of `character` at `position`.
    pub fn style_single_glyph(
        &mut self,
        position: f64,
        character: &str,
        style: &GlyphStyle,
        redraw: Redraw,
    ) -> LogoResult<()> {
        let (row, column) = self.cell(position, character).inspect_err(|err| {
            warn!(error = %err, position, character, "cannot style glyph");
        })?;
        let resolved = style.resolve()?;
        let glyph = self
            .glyphs
            .get_mut(row, column)
            .ok_or_else(|| LogoError::MissingGlyph {
                position,
                character: character.to_owned(),
            })?;
        glyph.apply(&resolved);
        trace!(position, character, "styled single glyph");
        self.finish_styling(redraw)
    }

    /// Applies `style` to one glyph per position: the glyph of the sequence's
    /// i-th character at the i-th position. The sequence must be exactly as
    /// long as the logo and use only matrix characters; nothing is changed
    /// otherwise.
    pub fn style_glyphs_in_sequence(
        &mut self,
        sequence: &str,
        style: &GlyphStyle,
        redraw: Redraw,
    ) -> LogoResult<()> {
        let length = sequence.chars().count();
        if length != self.matrix.len() {
            warn!(
                expected = self.matrix.len(),
                actual = length,
                "sequence length does not match logo"
            );
            return Err(LogoError::SequenceLength {
                expected: self.matrix.len(),
                actual: length,
            });
        }

        let mut cells = Vec::with_capacity(length);
        for (row, letter) in sequence.chars().enumerate() {
            let character = letter.to_string();
            let column = self
                .matrix
                .character_index(&character)
                .ok_or_else(|| LogoError::UnknownCharacter(character.clone()))?;
            if !self.glyphs.contains(row, column) {
                return Err(LogoError::MissingGlyph {
                    position: self.matrix.position_at(row).unwrap_or(f64::NAN),
                    character,
                });
            }
            cells.push((row, column));
        }
        let resolved = style.resolve()?;

        for (row, column) in cells {
            if let Some(glyph) = self.glyphs.get_mut(row, column) {
                glyph.apply(&resolved);
            }
        }
        trace!(sequence, "styled glyphs along sequence");
        self.finish_styling(redraw)
    }

    fn finish_styling(&mut self, redraw: Redraw) -> LogoResult<()> {
        match redraw {
            Redraw::Now => self.draw(),
            Redraw::Deferred => Ok(()),
        }
    }
}
