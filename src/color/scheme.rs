use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::color::tables::{colormap_stops, named_color, scheme_table};
use crate::error::{LogoError, LogoResult};
use crate::render::Color;

/// A single color: a name (`"tomato"`, `"k"`, `"#ff8800"`) or channels in `[0, 1]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ColorSpec {
    Rgba([f64; 4]),
    Rgb([f64; 3]),
    Name(String),
}

impl ColorSpec {
    #[must_use]
    pub fn name(name: impl Into<String>) -> Self {
        Self::Name(name.into())
    }

    pub fn to_color(&self) -> LogoResult<Color> {
        let color = match self {
            Self::Rgba([red, green, blue, alpha]) => Color::rgba(*red, *green, *blue, *alpha),
            Self::Rgb([red, green, blue]) => Color::rgb(*red, *green, *blue),
            Self::Name(name) => named_color(name)
                .or_else(|| Color::from_hex(name))
                .ok_or_else(|| LogoError::InvalidConfig(format!("unknown color `{name}`")))?,
        };
        color.validate()?;
        Ok(color)
    }
}

impl From<Color> for ColorSpec {
    fn from(color: Color) -> Self {
        Self::Rgba([color.red, color.green, color.blue, color.alpha])
    }
}

/// Rule assigning a color to every character of a logo.
///
/// The variant is chosen once when the scheme is built; resolution turns it
/// into a uniform [`ColorTable`](crate::color::ColorTable).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColorScheme {
    /// Built-in per-character scheme, e.g. `classic` or `hydrophobicity`.
    Named(String),
    /// One color for every character.
    Uniform(ColorSpec),
    /// Colormap sampled evenly across the characters in column order.
    Colormap(String),
    /// Explicit mapping; a multi-character key colors each of its characters,
    /// and an exact key takes precedence over such an expansion.
    Mapping(IndexMap<String, ColorSpec>),
}

impl ColorScheme {
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self::Named(name.into())
    }

    #[must_use]
    pub fn uniform(color: impl Into<ColorSpec>) -> Self {
        Self::Uniform(color.into())
    }

    #[must_use]
    pub fn colormap(name: impl Into<String>) -> Self {
        Self::Colormap(name.into())
    }

    /// Interprets a bare string: built-in scheme name first, then colormap
    /// name, then a single color.
    pub fn parse(input: &str) -> LogoResult<Self> {
        if scheme_table(input).is_some() {
            return Ok(Self::Named(input.to_owned()));
        }
        if colormap_stops(input).is_some() {
            return Ok(Self::Colormap(input.to_owned()));
        }
        let spec = ColorSpec::Name(input.to_owned());
        spec.to_color()?;
        Ok(Self::Uniform(spec))
    }

    /// Builds an explicit mapping from `(key, color)` pairs.
    pub fn mapping<K, C>(entries: impl IntoIterator<Item = (K, C)>) -> Self
    where
        K: Into<String>,
        C: Into<ColorSpec>,
    {
        Self::Mapping(
            entries
                .into_iter()
                .map(|(key, color)| (key.into(), color.into()))
                .collect(),
        )
    }
}

impl From<&str> for ColorSpec {
    fn from(name: &str) -> Self {
        Self::Name(name.to_owned())
    }
}
