use std::collections::HashMap;
use std::fmt;

use indexmap::{IndexMap, IndexSet};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::color::tables::{
    DNA_ALPHABET, PROTEIN_ALPHABET, RNA_ALPHABET, colormap_stops, sample_colormap, scheme_table,
};
use crate::color::{ColorScheme, ColorSpec};
use crate::error::{LogoError, LogoResult};
use crate::render::Color;

/// Resolved character -> RGBA mapping, in matrix column order.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ColorTable {
    colors: IndexMap<String, Color>,
}

impl ColorTable {
    #[must_use]
    pub fn get(&self, character: &str) -> Option<Color> {
        self.colors.get(character).copied()
    }

    /// Like [`ColorTable::get`], failing with a configuration error.
    pub fn require(&self, character: &str) -> LogoResult<Color> {
        self.get(character).ok_or_else(|| {
            LogoError::InvalidConfig(format!("no color resolved for character `{character}`"))
        })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Color)> + '_ {
        self.colors
            .iter()
            .map(|(character, color)| (character.as_str(), *color))
    }
}

impl FromIterator<(String, Color)> for ColorTable {
    fn from_iter<T: IntoIterator<Item = (String, Color)>>(iter: T) -> Self {
        Self {
            colors: iter.into_iter().collect(),
        }
    }
}

/// Turns a color scheme into a color for every character of a logo.
///
/// Implementations must fail with a configuration error when any character
/// cannot be colored.
pub trait ColorResolver: fmt::Debug {
    fn resolve(&self, scheme: &ColorScheme, characters: &IndexSet<String>)
    -> LogoResult<ColorTable>;
}

/// Resolver backed by the built-in scheme, colormap and color-name tables.
///
/// Resolved colors are opaque. An alpha channel in a uniform or mapped color
/// is dropped; glyph opacity is set through the `alpha` style.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinColorResolver;

impl ColorResolver for BuiltinColorResolver {
    fn resolve(
        &self,
        scheme: &ColorScheme,
        characters: &IndexSet<String>,
    ) -> LogoResult<ColorTable> {
        match scheme {
            ColorScheme::Uniform(spec) => {
                let color = spec.to_color()?.with_alpha(1.0);
                Ok(characters
                    .iter()
                    .map(|character| (character.clone(), color))
                    .collect())
            }
            ColorScheme::Named(name) => {
                let table = scheme_table(name).ok_or_else(|| {
                    LogoError::InvalidConfig(format!("unknown color scheme `{name}`"))
                })?;
                let lookup = expand_groups(table.iter().map(|(group, color)| (*group, *color)));
                collect_for(characters, &lookup, name)
            }
            ColorScheme::Colormap(name) => {
                let stops = colormap_stops(name).ok_or_else(|| {
                    LogoError::InvalidConfig(format!("unknown colormap `{name}`"))
                })?;
                let denominator = characters.len().saturating_sub(1).max(1) as f64;
                Ok(characters
                    .iter()
                    .enumerate()
                    .map(|(index, character)| {
                        let t = index as f64 / denominator;
                        (character.clone(), sample_colormap(stops, t))
                    })
                    .collect())
            }
            ColorScheme::Mapping(entries) => {
                let resolved = entries
                    .iter()
                    .map(|(key, spec)| {
                        spec.to_color()
                            .map(|color| (key.as_str(), color.with_alpha(1.0)))
                    })
                    .collect::<LogoResult<Vec<_>>>()?;
                let lookup = expand_groups(resolved.into_iter());
                collect_for(characters, &lookup, "mapping")
            }
        }
    }
}

/// Scheme used when none is configured: `classic` for DNA/RNA, `hydrophobicity`
/// for the 20 amino acids, uniform gray otherwise.
#[must_use]
pub fn default_scheme_for(characters: &IndexSet<String>) -> ColorScheme {
    let is_alphabet = |alphabet: &str| {
        characters.len() == alphabet.len()
            && alphabet
                .chars()
                .all(|letter| characters.contains(letter.encode_utf8(&mut [0; 4]) as &str))
    };
    if is_alphabet(DNA_ALPHABET) || is_alphabet(RNA_ALPHABET) {
        ColorScheme::named("classic")
    } else if is_alphabet(PROTEIN_ALPHABET) {
        ColorScheme::named("hydrophobicity")
    } else {
        ColorScheme::Uniform(ColorSpec::name("gray"))
    }
}

fn expand_groups<'a>(groups: impl Iterator<Item = (&'a str, Color)>) -> HashMap<String, Color> {
    let groups: Vec<_> = groups.collect();
    let mut lookup = HashMap::new();
    for (group, color) in &groups {
        if group.chars().count() > 1 {
            for letter in group.chars() {
                lookup.insert(letter.to_string(), *color);
            }
        }
    }
    for (group, color) in groups {
        lookup.insert(group.to_owned(), color);
    }
    lookup
}

fn collect_for(
    characters: &IndexSet<String>,
    lookup: &HashMap<String, Color>,
    scheme_name: &str,
) -> LogoResult<ColorTable> {
    characters
        .iter()
        .map(|character| match lookup.get(character) {
            Some(color) => Ok((character.clone(), *color)),
            None => {
                warn!(%character, scheme = scheme_name, "character has no color");
                Err(LogoError::InvalidConfig(format!(
                    "color scheme `{scheme_name}` has no color for character `{character}`"
                )))
            }
        })
        .collect()
}
