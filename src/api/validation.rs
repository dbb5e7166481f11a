use crate::error::{LogoError, LogoResult};

use super::{BaselineStyle, HighlightStyle, LogoConfig, XTickStyle};

pub(super) fn validate_logo_config(config: &LogoConfig) -> LogoResult<()> {
    config.layout().validate()?;
    if !config.glyph_width.is_finite() || config.glyph_width <= 0.0 {
        return Err(LogoError::InvalidConfig(
            "glyph width must be finite and > 0".to_owned(),
        ));
    }
    Ok(())
}

pub(super) fn validate_fraction(name: &str, value: f64) -> LogoResult<f64> {
    if !value.is_finite() || !(0.0..=1.0).contains(&value) {
        return Err(LogoError::InvalidConfig(format!(
            "`{name}` must be in [0, 1], got {value}"
        )));
    }
    Ok(value)
}

/// Checks a highlight request and returns its `(floor, ceiling)` once
/// defaults have been filled in from the current y limits.
pub(super) fn validate_highlight(
    pmin: f64,
    pmax: f64,
    style: &HighlightStyle,
    default_floor: f64,
    default_ceiling: f64,
) -> LogoResult<(f64, f64)> {
    for (name, value) in [
        ("pmin", pmin),
        ("pmax", pmax),
        ("padding", style.padding),
        ("edge_width", style.edge_width),
    ] {
        if !value.is_finite() {
            return Err(LogoError::InvalidConfig(format!(
                "highlight `{name}` must be finite"
            )));
        }
    }
    if pmin > pmax {
        return Err(LogoError::InvalidRange(format!(
            "highlight requires pmin <= pmax, got pmin={pmin}, pmax={pmax}"
        )));
    }
    if style.padding < -0.5 {
        return Err(LogoError::InvalidRange(format!(
            "highlight padding must be >= -0.5, got {}",
            style.padding
        )));
    }
    if style.edge_width < 0.0 {
        return Err(LogoError::InvalidConfig(
            "highlight edge width must be >= 0".to_owned(),
        ));
    }

    let floor = style.floor.unwrap_or(default_floor);
    let ceiling = style.ceiling.unwrap_or(default_ceiling);
    if !floor.is_finite() || !ceiling.is_finite() {
        return Err(LogoError::InvalidConfig(
            "highlight floor and ceiling must be finite".to_owned(),
        ));
    }
    if floor >= ceiling {
        return Err(LogoError::InvalidRange(format!(
            "highlight requires floor < ceiling, got floor={floor}, ceiling={ceiling}"
        )));
    }

    style.color.validate()?;
    if let Some(edge_color) = style.edge_color {
        edge_color.validate()?;
    }
    Ok((floor, ceiling))
}

pub(super) fn validate_baseline(style: &BaselineStyle) -> LogoResult<()> {
    if !style.line_width.is_finite() || style.line_width < 0.0 {
        return Err(LogoError::InvalidConfig(
            "baseline width must be finite and >= 0".to_owned(),
        ));
    }
    style.color.validate()
}

pub(super) fn validate_xtick_style(style: &XTickStyle) -> LogoResult<()> {
    if !style.anchor.is_finite() {
        return Err(LogoError::InvalidConfig(
            "tick anchor must be finite".to_owned(),
        ));
    }
    if !style.spacing.is_finite() || style.spacing <= 0.0 {
        return Err(LogoError::InvalidRange(format!(
            "tick spacing must be > 0, got {}",
            style.spacing
        )));
    }
    if !style.rotation.is_finite() {
        return Err(LogoError::InvalidConfig(
            "tick rotation must be finite".to_owned(),
        ));
    }
    Ok(())
}
