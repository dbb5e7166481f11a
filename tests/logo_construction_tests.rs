use approx::assert_relative_eq;
use seqlogo_rs::color::ColorScheme;
use seqlogo_rs::error::LogoErrorKind;
use seqlogo_rs::render::{Color, NullRenderer};
use seqlogo_rs::{Logo, LogoConfig, LogoError, LogoMatrix};

fn dna() -> LogoMatrix {
    LogoMatrix::new(
        vec![0.0, 1.0],
        ["A", "C", "G", "T"],
        vec![vec![0.1, 0.2, 0.3, 0.4], vec![0.0; 4]],
    )
    .expect("matrix")
}

#[test]
fn construction_draws_immediately_by_default() {
    let logo = Logo::new(NullRenderer::default(), dna(), LogoConfig::default()).expect("logo");

    assert!(logo.has_been_drawn());
    assert_eq!(logo.renderer().render_count, 1);
    assert_eq!(logo.renderer().last_glyph_count, 8);
    assert_eq!(logo.glyphs().len(), 8);
    assert_eq!(logo.len(), 2);
}

#[test]
fn deferred_construction_leaves_surface_untouched() {
    let config = LogoConfig::default().with_draw_now(false);
    let mut logo = Logo::new(NullRenderer::default(), dna(), config).expect("logo");

    assert!(!logo.has_been_drawn());
    assert_eq!(logo.renderer().render_count, 0);
    assert!(logo.frame().is_empty());

    logo.draw().expect("draw");
    assert!(logo.has_been_drawn());
    assert_eq!(logo.renderer().render_count, 1);
}

#[test]
fn tallest_glyph_sits_on_top_and_zero_row_is_flat() {
    let logo = Logo::new(NullRenderer::default(), dna(), LogoConfig::default()).expect("logo");

    let t = logo.glyph(0.0, "T").expect("T at 0");
    assert_relative_eq!(t.height(), 0.4, epsilon = 1e-12);
    for character in ["A", "C", "G"] {
        let other = logo.glyph(0.0, character).expect("glyph");
        assert!(other.ceiling <= t.floor + 1e-12);
    }
    for character in ["A", "C", "G", "T"] {
        let flat = logo.glyph(1.0, character).expect("glyph");
        assert_eq!(flat.floor, 0.0);
        assert_eq!(flat.ceiling, 0.0);
    }
}

#[test]
fn axis_limits_enclose_every_glyph() {
    let logo = Logo::new(NullRenderer::default(), dna(), LogoConfig::default()).expect("logo");
    let axes = &logo.frame().axes;

    assert_relative_eq!(axes.x_limits.min, -0.475);
    assert_relative_eq!(axes.x_limits.max, 1.475);
    assert_relative_eq!(axes.y_limits.min, 0.0);
    assert_relative_eq!(axes.y_limits.max, 1.0, epsilon = 1e-12);
}

#[test]
fn dna_defaults_to_classic_colors() {
    let logo = Logo::new(NullRenderer::default(), dna(), LogoConfig::default()).expect("logo");
    assert_eq!(logo.color_scheme(), &ColorScheme::named("classic"));
    assert_eq!(
        logo.glyph(0.0, "T").expect("glyph").color,
        Color::rgb(1.0, 0.0, 0.0)
    );
}

#[test]
fn negate_and_center_are_applied_before_layout() {
    let matrix =
        LogoMatrix::with_default_positions(["A", "C"], vec![vec![1.0, 3.0]]).expect("matrix");
    let config = LogoConfig::default()
        .with_negate(true)
        .with_center(true)
        .with_color_scheme(ColorScheme::uniform("black"));
    let logo = Logo::new(NullRenderer::default(), matrix, config).expect("logo");

    assert_eq!(logo.matrix().row(0), Some(&[1.0, -1.0][..]));
    let c = logo.glyph(0.0, "C").expect("C");
    assert!(c.flip);
    assert_relative_eq!(c.floor, -1.0);
    assert_relative_eq!(c.ceiling, 0.0);
}

#[test]
fn unresolvable_color_is_a_configuration_error() {
    let matrix = LogoMatrix::with_default_positions(["A", "Z"], vec![vec![1.0, 1.0]])
        .expect("matrix");
    let config = LogoConfig::default().with_color_scheme(ColorScheme::named("classic"));
    let err = Logo::new(NullRenderer::default(), matrix, config)
        .err()
        .expect("Z has no classic color");
    assert_eq!(err.kind(), LogoErrorKind::Configuration);
}

#[test]
fn invalid_config_values_are_rejected() {
    for config in [
        LogoConfig::default().with_gap(-0.5),
        LogoConfig::default().with_gap(f64::NAN),
        LogoConfig::default().with_glyph_width(0.0),
    ] {
        let err = Logo::new(NullRenderer::default(), dna(), config)
            .err()
            .expect("invalid config must fail");
        assert!(matches!(err, LogoError::InvalidConfig(_)));
    }
}

#[test]
fn fully_absent_matrix_falls_back_to_padded_positions() {
    let matrix = LogoMatrix::new(vec![2.0, 4.0], ["A"], vec![vec![f64::NAN], vec![f64::NAN]])
        .expect("matrix");
    let logo = Logo::new(NullRenderer::default(), matrix, LogoConfig::default()).expect("logo");

    assert!(logo.glyphs().is_empty());
    let axes = &logo.frame().axes;
    assert_relative_eq!(axes.x_limits.min, 1.5);
    assert_relative_eq!(axes.x_limits.max, 4.5);
    assert_eq!((axes.y_limits.min, axes.y_limits.max), (0.0, 0.0));
}

#[test]
fn config_json_uses_defaults_for_missing_fields() {
    let config = LogoConfig::from_json_str(r#"{ "gap": 0.1, "color_scheme": { "named": "classic" } }"#)
        .expect("config json");
    assert_eq!(config.gap, 0.1);
    assert!(config.flip_below);
    assert!(config.draw_now);
    assert_eq!(config.color_scheme, Some(ColorScheme::named("classic")));
}

#[test]
fn replacing_the_renderer_resets_drawn_state() {
    let mut logo =
        Logo::new(NullRenderer::default(), dna(), LogoConfig::default()).expect("logo");
    let previous = logo.replace_renderer(NullRenderer::default());

    assert_eq!(previous.render_count, 1);
    assert!(!logo.has_been_drawn());
    assert!(logo.frame().is_empty());
}
