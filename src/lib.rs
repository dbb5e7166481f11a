//! seqlogo-rs: sequence logo layout and rendering.
//!
//! A [`LogoMatrix`] of per-position, per-character values is stacked into
//! glyph placements by the layout engine in [`core`]. The [`Logo`]
//! controller owns those glyphs, applies styling, and pushes complete frames
//! to any [`render::Renderer`].

pub mod api;
pub mod color;
pub mod core;
pub mod error;
pub mod render;
pub mod telemetry;

pub use api::{Logo, LogoConfig};
pub use core::LogoMatrix;
pub use error::{LogoError, LogoResult};
