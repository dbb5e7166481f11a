use tracing::{debug, warn};

use crate::color::{BuiltinColorResolver, ColorResolver, default_scheme_for};
use crate::core::{GlyphStore, LogoMatrix, compute_layout};
use crate::error::LogoResult;
use crate::render::{LogoFrame, Renderer};

use super::validation::validate_logo_config;
use super::{Logo, LogoConfig};

impl<R: Renderer> Logo<R> {
    /// Builds a logo with the built-in color resolver.
    ///
    /// The matrix is negated/centered as configured, colors are resolved for
    /// every character, and the layout engine places every present cell. When
    /// `config.draw_now` is set the logo is drawn before returning.
    pub fn new(renderer: R, matrix: LogoMatrix, config: LogoConfig) -> LogoResult<Self> {
        Self::with_color_resolver(renderer, matrix, config, BuiltinColorResolver)
    }

    /// Same as [`Logo::new`] with a caller-provided color resolver, which is
    /// also used by later re-coloring calls.
    pub fn with_color_resolver(
        renderer: R,
        matrix: LogoMatrix,
        config: LogoConfig,
        resolver: impl ColorResolver + 'static,
    ) -> LogoResult<Self> {
        if let Err(err) = validate_logo_config(&config) {
            warn!(error = %err, "rejecting logo config");
            return Err(err);
        }

        let matrix = config.transform().apply(matrix);
        let color_scheme = config
            .color_scheme
            .clone()
            .unwrap_or_else(|| default_scheme_for(matrix.characters()));
        let colors = resolver.resolve(&color_scheme, matrix.characters())?;
        let placements = compute_layout(&matrix, &colors, config.layout())?;
        let glyphs = GlyphStore::from_layout(&placements, config.glyph_width, config.zorder);

        debug!(
            positions = matrix.len(),
            characters = matrix.character_count(),
            glyphs = glyphs.len(),
            negate = config.negate,
            center = config.center,
            ?color_scheme,
            "constructed logo"
        );

        let draw_now = config.draw_now;
        let mut logo = Self {
            renderer,
            matrix,
            config,
            color_scheme,
            colors,
            resolver: Box::new(resolver),
            glyphs,
            frame: LogoFrame::default(),
            has_been_drawn: false,
        };
        if draw_now {
            logo.draw()?;
        }
        Ok(logo)
    }
}
