//! Built-in color data: named colors, per-character schemes and colormaps.

use crate::render::Color;

const fn hex(rgb: u32) -> Color {
    Color::rgb(
        ((rgb >> 16) & 0xff) as f64 / 255.0,
        ((rgb >> 8) & 0xff) as f64 / 255.0,
        (rgb & 0xff) as f64 / 255.0,
    )
}

const NAMED_COLORS: &[(&str, Color)] = &[
    ("k", Color::BLACK),
    ("black", Color::BLACK),
    ("w", Color::WHITE),
    ("white", Color::WHITE),
    ("r", Color::rgb(1.0, 0.0, 0.0)),
    ("red", Color::rgb(1.0, 0.0, 0.0)),
    ("g", Color::rgb(0.0, 0.5, 0.0)),
    ("green", hex(0x008000)),
    ("b", Color::rgb(0.0, 0.0, 1.0)),
    ("blue", Color::rgb(0.0, 0.0, 1.0)),
    ("c", Color::rgb(0.0, 0.75, 0.75)),
    ("cyan", Color::rgb(0.0, 1.0, 1.0)),
    ("m", Color::rgb(0.75, 0.0, 0.75)),
    ("magenta", Color::rgb(1.0, 0.0, 1.0)),
    ("y", Color::rgb(0.75, 0.75, 0.0)),
    ("yellow", Color::rgb(1.0, 1.0, 0.0)),
    ("gray", hex(0x808080)),
    ("grey", hex(0x808080)),
    ("lightgray", hex(0xd3d3d3)),
    ("lightgrey", hex(0xd3d3d3)),
    ("darkgray", hex(0xa9a9a9)),
    ("darkgrey", hex(0xa9a9a9)),
    ("orange", hex(0xffa500)),
    ("darkorange", hex(0xff8c00)),
    ("purple", hex(0x800080)),
    ("tomato", hex(0xff6347)),
    ("dodgerblue", hex(0x1e90ff)),
    ("navy", hex(0x000080)),
    ("teal", hex(0x008080)),
    ("gold", hex(0xffd700)),
    ("brown", hex(0xa52a2a)),
    ("pink", hex(0xffc0cb)),
    ("olive", hex(0x808000)),
];

/// Per-character scheme as (character group, color) pairs. Every character
/// of a group receives the group's color.
type SchemeTable = &'static [(&'static str, Color)];

const CLASSIC: SchemeTable = &[
    ("G", Color::rgb(1.0, 0.65, 0.0)),
    ("TU", Color::rgb(1.0, 0.0, 0.0)),
    ("C", Color::rgb(0.0, 0.0, 1.0)),
    ("A", Color::rgb(0.0, 0.5, 0.0)),
];

const GRAYS: SchemeTable = &[
    ("A", Color::rgb(0.0, 0.0, 0.0)),
    ("C", Color::rgb(0.6, 0.6, 0.6)),
    ("G", Color::rgb(0.2, 0.2, 0.2)),
    ("TU", Color::rgb(0.8, 0.8, 0.8)),
];

const BASE_PAIRING: SchemeTable = &[
    ("TAU", Color::rgb(1.0, 0.55, 0.0)),
    ("GC", Color::rgb(0.0, 0.0, 1.0)),
];

const HYDROPHOBICITY: SchemeTable = &[
    ("RKDENQ", Color::rgb(0.0, 0.0, 1.0)),
    ("SGHTAP", Color::rgb(0.0, 0.5, 0.0)),
    ("YVMCLFIW", Color::rgb(0.0, 0.0, 0.0)),
];

const CHEMISTRY: SchemeTable = &[
    ("GSTYC", Color::rgb(0.0, 0.5, 0.0)),
    ("QN", Color::rgb(0.5, 0.0, 0.5)),
    ("KRH", Color::rgb(0.0, 0.0, 1.0)),
    ("DE", Color::rgb(1.0, 0.0, 0.0)),
    ("AVLIPWFM", Color::rgb(0.0, 0.0, 0.0)),
];

const CHARGE: SchemeTable = &[
    ("KRH", Color::rgb(0.0, 0.0, 1.0)),
    ("DE", Color::rgb(1.0, 0.0, 0.0)),
    ("GSTYCQNAVLIPWFM", Color::rgb(0.5, 0.5, 0.5)),
];

const SCHEMES: &[(&str, SchemeTable)] = &[
    ("classic", CLASSIC),
    ("grays", GRAYS),
    ("base_pairing", BASE_PAIRING),
    ("hydrophobicity", HYDROPHOBICITY),
    ("chemistry", CHEMISTRY),
    ("charge", CHARGE),
];

/// Colormaps as evenly spaced color stops from t = 0 to t = 1.
const COLORMAPS: &[(&str, &[Color])] = &[
    (
        "viridis",
        &[
            hex(0x440154),
            hex(0x3b528b),
            hex(0x21918c),
            hex(0x5ec962),
            hex(0xfde725),
        ],
    ),
    ("greys", &[hex(0xffffff), hex(0x000000)]),
    ("blues", &[hex(0xf7fbff), hex(0x08306b)]),
    ("greens", &[hex(0xf7fcf5), hex(0x00441b)]),
    ("reds", &[hex(0xfff5f0), hex(0x67000d)]),
    ("purples", &[hex(0xfcfbfd), hex(0x3f007d)]),
    ("oranges", &[hex(0xfff5eb), hex(0x7f2704)]),
];

pub(crate) const DNA_ALPHABET: &str = "ACGT";
pub(crate) const RNA_ALPHABET: &str = "ACGU";
pub(crate) const PROTEIN_ALPHABET: &str = "ACDEFGHIKLMNPQRSTVWY";

/// Looks up a named color, case-insensitively for the long names.
pub(crate) fn named_color(name: &str) -> Option<Color> {
    let lowered;
    let key = if name.len() == 1 {
        name
    } else {
        lowered = name.to_ascii_lowercase();
        lowered.as_str()
    };
    NAMED_COLORS
        .iter()
        .find(|(candidate, _)| *candidate == key)
        .map(|(_, color)| *color)
}

pub(crate) fn scheme_table(name: &str) -> Option<SchemeTable> {
    SCHEMES
        .iter()
        .find(|(candidate, _)| candidate.eq_ignore_ascii_case(name))
        .map(|(_, table)| *table)
}

pub(crate) fn colormap_stops(name: &str) -> Option<&'static [Color]> {
    let name = if name.eq_ignore_ascii_case("gray") || name.eq_ignore_ascii_case("grey") {
        "greys"
    } else {
        name
    };
    COLORMAPS
        .iter()
        .find(|(candidate, _)| candidate.eq_ignore_ascii_case(name))
        .map(|(_, stops)| *stops)
}

/// Samples piecewise-linear colormap stops at `t` in `[0, 1]`.
pub(crate) fn sample_colormap(stops: &[Color], t: f64) -> Color {
    match stops {
        [] => Color::BLACK,
        [only] => *only,
        _ => {
            let scaled = t.clamp(0.0, 1.0) * (stops.len() - 1) as f64;
            let lower = (scaled.floor() as usize).min(stops.len() - 2);
            stops[lower].lerp(stops[lower + 1], scaled - lower as f64)
        }
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::{colormap_stops, named_color, sample_colormap, scheme_table};

    #[test]
    fn single_letter_color_codes_are_case_sensitive() {
        assert!(named_color("k").is_some());
        assert!(named_color("K").is_none());
        assert!(named_color("Tomato").is_some());
    }

    #[test]
    fn colormap_endpoints_match_stops() {
        let stops = colormap_stops("Blues").expect("blues");
        let start = sample_colormap(stops, 0.0);
        let end = sample_colormap(stops, 1.0);
        assert_eq!(start, stops[0]);
        assert_relative_eq!(end.blue, stops[1].blue);
    }

    #[test]
    fn scheme_lookup_ignores_case() {
        assert!(scheme_table("Classic").is_some());
        assert!(scheme_table("rainbow").is_none());
    }
}
