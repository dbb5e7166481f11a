//! Color-scheme resolution: from a [`ColorScheme`] to a per-character [`ColorTable`].

mod resolver;
mod scheme;
mod tables;

pub use resolver::{BuiltinColorResolver, ColorResolver, ColorTable, default_scheme_for};
pub use scheme::{ColorScheme, ColorSpec};
