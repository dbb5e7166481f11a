use crate::error::{LogoError, LogoResult};
use crate::render::TickMark;

use super::TickLabelFormat;

const TICK_REGISTER_EPSILON: f64 = 1e-9;
const MAX_TICK_CANDIDATES: f64 = 1_000_000.0;

/// Whether `value` lies on the grid `anchor + k * spacing` for some integer `k`.
pub(super) fn on_tick_register(value: f64, anchor: f64, spacing: f64) -> bool {
    let offset = (value - anchor).rem_euclid(spacing);
    offset <= TICK_REGISTER_EPSILON || spacing - offset <= TICK_REGISTER_EPSILON
}

/// Snaps `value` to `p_min + n` for a whole `n`, if it lies on that grid.
fn unit_offset_from(value: f64, p_min: f64) -> Option<f64> {
    let offset = value - p_min;
    let whole = offset.round();
    ((offset - whole).abs() <= TICK_REGISTER_EPSILON && whole >= 0.0).then_some(p_min + whole)
}

/// Tick positions are the unit steps `p_min, p_min + 1, ..., <= p_max` that
/// also lie on `anchor + k * spacing`. Only the sparser of the two grids is
/// walked.
pub(super) fn registered_ticks(
    position_range: (f64, f64),
    anchor: f64,
    spacing: f64,
    format: &TickLabelFormat,
) -> LogoResult<Vec<TickMark>> {
    let (p_min, p_max) = position_range;
    if !p_min.is_finite() || !p_max.is_finite() || p_max < p_min {
        return Ok(Vec::new());
    }

    let walk_register = spacing >= 1.0;
    let (origin, step) = if walk_register {
        (anchor, spacing)
    } else {
        (p_min, 1.0)
    };
    let first = ((p_min - origin) / step - TICK_REGISTER_EPSILON).ceil();
    let count = ((p_max - origin) / step + TICK_REGISTER_EPSILON).floor() - first + 1.0;
    if count <= 0.0 {
        return Ok(Vec::new());
    }
    if count > MAX_TICK_CANDIDATES {
        return Err(LogoError::InvalidConfig(format!(
            "tick spacing {spacing} over positions [{p_min}, {p_max}] yields too many ticks"
        )));
    }

    let mut ticks = Vec::new();
    for index in 0..count as u64 {
        let value = origin + (first + index as f64) * step;
        let position = if walk_register {
            unit_offset_from(value, p_min)
        } else {
            on_tick_register(value, anchor, spacing).then_some(value)
        };
        let Some(position) = position else {
            continue;
        };
        if position <= p_max + TICK_REGISTER_EPSILON {
            ticks.push(TickMark {
                position,
                label: format.format(position),
            });
        }
    }
    Ok(ticks)
}

#[cfg(test)]
mod tests {
    use super::{on_tick_register, registered_ticks};
    use crate::api::TickLabelFormat;

    fn positions(range: (f64, f64), anchor: f64, spacing: f64) -> Vec<f64> {
        registered_ticks(range, anchor, spacing, &TickLabelFormat::integer())
            .expect("ticks")
            .iter()
            .map(|tick| tick.position)
            .collect()
    }

    #[test]
    fn unit_spacing_covers_the_inclusive_range() {
        assert_eq!(positions((-2.0, 1.0), 0.0, 1.0), vec![-2.0, -1.0, 0.0, 1.0]);
        assert_eq!(positions((3.0, 3.0), 0.0, 1.0), vec![3.0]);
        assert!(positions((3.0, 2.0), 0.0, 1.0).is_empty());
    }

    #[test]
    fn anchor_outside_range_still_fixes_register() {
        assert_eq!(positions((0.0, 10.0), 13.0, 5.0), vec![3.0, 8.0]);
    }

    #[test]
    fn register_values_off_the_unit_grid_are_dropped() {
        assert_eq!(positions((0.0, 4.0), 0.5, 1.5), vec![2.0]);
        assert_eq!(positions((0.5, 3.5), 0.0, 1.0), Vec::<f64>::new());
    }

    #[test]
    fn fractional_spacing_walks_unit_steps() {
        assert_eq!(positions((0.0, 3.0), 0.0, 0.5), vec![0.0, 1.0, 2.0, 3.0]);
    }

    #[test]
    fn far_apart_positions_only_visit_registered_ticks() {
        let ticks = positions((0.0, 1e19), 0.0, 1e18);
        assert_eq!(ticks.len(), 11);
        assert_eq!(ticks[0], 0.0);
        assert_eq!(ticks[10], 1e19);
    }

    #[test]
    fn unbounded_tick_counts_are_rejected() {
        let err = registered_ticks((0.0, 1e12), 0.0, 1.0, &TickLabelFormat::integer())
            .expect_err("too many ticks");
        assert!(err.to_string().contains("too many ticks"));
    }

    #[test]
    fn negative_offsets_use_euclidean_remainder() {
        assert!(on_tick_register(-4.0, 0.0, 2.0));
        assert!(!on_tick_register(-3.0, 0.0, 2.0));
    }
}
