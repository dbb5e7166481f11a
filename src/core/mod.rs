pub mod glyph;
pub mod glyph_store;
pub mod layout;
pub mod matrix;
pub mod scale;
pub mod transform;
pub mod types;

pub use glyph::{DEFAULT_GLYPH_WIDTH, Glyph, GlyphStyle, ResolvedGlyphStyle};
pub use glyph_store::GlyphStore;
pub use layout::{
    GlyphPlacement, LayoutConfig, PositionStack, StackedGlyph, compute_layout, stack_position,
};
pub use matrix::{LogoMatrix, MatrixData};
pub use scale::LinearScale;
pub use transform::MatrixTransform;
pub use types::{AxisLimits, Viewport};
