mod axis_controller;
mod axis_label_format;
mod axis_ticks;
mod glyph_style_controller;
mod highlight_controller;
mod json_contract;
mod logo;
mod logo_config;
mod logo_init;
mod logo_snapshot;
mod logo_style;
mod render_cairo_coordinator;
mod render_coordinator;
mod validation;

pub use axis_label_format::{TickConversion, TickLabelFormat};
pub use json_contract::{LOGO_SNAPSHOT_JSON_SCHEMA_V1, LogoSnapshotJsonContractV1};
pub use logo::Logo;
pub use logo_config::{LogoConfig, Redraw};
pub use logo_snapshot::LogoSnapshot;
pub use logo_style::{BaselineStyle, BelowGlyphStyle, HighlightStyle, XTickStyle};

pub use crate::core::GlyphStyle;
