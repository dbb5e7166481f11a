use approx::assert_relative_eq;
use seqlogo_rs::api::{BaselineStyle, HighlightStyle};
use seqlogo_rs::error::LogoErrorKind;
use seqlogo_rs::render::{Color, NullRenderer};
use seqlogo_rs::{Logo, LogoConfig, LogoError, LogoMatrix};

fn logo(draw_now: bool) -> Logo<NullRenderer> {
    let matrix = LogoMatrix::new(
        vec![1.0, 2.0, 3.0],
        ["A", "C"],
        vec![vec![1.0, -0.5], vec![0.5, 0.5], vec![2.0, 0.0]],
    )
    .expect("matrix");
    Logo::new(
        NullRenderer::default(),
        matrix,
        LogoConfig::default().with_draw_now(draw_now),
    )
    .expect("logo")
}

#[test]
fn single_position_highlight_spans_one_unit() {
    let mut logo = logo(true);
    logo.highlight_position_range(2.0, 2.0, &HighlightStyle::default())
        .expect("highlight");

    let rect = logo.frame().rects[0];
    let (x_min, x_max) = rect.x_extent();
    assert_relative_eq!(x_min, 1.5);
    assert_relative_eq!(x_max, 2.5);
    assert_eq!(rect.zorder, -2);
    assert_eq!(logo.renderer().last_rect_count, 1);
}

#[test]
fn highlight_defaults_to_current_vertical_limits() {
    let mut logo = logo(true);
    logo.highlight_position(1.0, &HighlightStyle::default().with_padding(0.25))
        .expect("highlight");

    let rect = logo.frame().rects[0];
    let limits = logo.frame().axes.y_limits;
    assert_relative_eq!(rect.x, 0.25);
    assert_relative_eq!(rect.width, 1.5);
    assert_relative_eq!(rect.y, limits.min);
    assert_relative_eq!(rect.y + rect.height, limits.max);
    assert_relative_eq!(limits.min, -0.5);
    assert_relative_eq!(limits.max, 2.0);
}

#[test]
fn explicit_extent_and_edge_are_kept() {
    let mut logo = logo(true);
    let style = HighlightStyle::default()
        .with_vertical_extent(0.0, 1.0)
        .with_edge(Color::BLACK, 2.0)
        .with_color(Color::rgba(0.0, 1.0, 0.0, 0.5))
        .with_zorder(-5);
    logo.highlight_position_range(1.0, 3.0, &style).expect("highlight");

    let rect = logo.frame().rects[0];
    assert_relative_eq!(rect.width, 3.0);
    assert_relative_eq!(rect.height, 1.0);
    assert_eq!(rect.edge_color, Some(Color::BLACK));
    assert_eq!(rect.fill_color.alpha, 0.5);
    assert_eq!(rect.zorder, -5);
}

#[test]
fn highlight_requires_a_drawn_logo() {
    let mut logo = logo(false);
    let err = logo
        .highlight_position(1.0, &HighlightStyle::default())
        .expect_err("not drawn yet");
    assert!(matches!(err, LogoError::NotDrawn { .. }));
    assert_eq!(err.kind(), LogoErrorKind::Precondition);
}

#[test]
fn highlight_ordering_violations_are_rejected() {
    let mut logo = logo(true);

    let err = logo
        .highlight_position_range(3.0, 1.0, &HighlightStyle::default())
        .expect_err("pmin > pmax");
    assert_eq!(err.kind(), LogoErrorKind::Ordering);

    let err = logo
        .highlight_position_range(1.0, 2.0, &HighlightStyle::default().with_padding(-0.6))
        .expect_err("padding below -0.5");
    assert_eq!(err.kind(), LogoErrorKind::Ordering);

    let err = logo
        .highlight_position_range(
            1.0,
            2.0,
            &HighlightStyle::default().with_vertical_extent(1.0, 1.0),
        )
        .expect_err("empty vertical extent");
    assert_eq!(err.kind(), LogoErrorKind::Ordering);

    assert!(logo.frame().rects.is_empty());
    assert_eq!(logo.renderer().render_count, 1);
}

#[test]
fn baseline_is_a_line_at_zero() {
    let mut logo = logo(true);
    logo.draw_baseline(&BaselineStyle::default()).expect("baseline");

    let line = logo.frame().lines[0];
    assert_eq!(line.y, 0.0);
    assert_eq!(line.zorder, -1);
    assert_relative_eq!(line.stroke_width, 0.5);
    assert_eq!(logo.renderer().last_line_count, 1);
}

#[test]
fn baseline_requires_a_drawn_logo() {
    let mut logo = logo(false);
    let err = logo
        .draw_baseline(&BaselineStyle::default())
        .expect_err("not drawn");
    assert!(matches!(
        err,
        LogoError::NotDrawn {
            operation: "draw_baseline"
        }
    ));
}

#[test]
fn redraw_clears_decorations() {
    let mut logo = logo(true);
    logo.highlight_position(2.0, &HighlightStyle::default())
        .expect("highlight");
    logo.draw_baseline(&BaselineStyle::default()).expect("baseline");
    assert_eq!(logo.frame().rects.len(), 1);

    logo.draw().expect("redraw");
    assert!(logo.frame().rects.is_empty());
    assert!(logo.frame().lines.is_empty());
    assert_eq!(logo.renderer().last_rect_count, 0);
}
