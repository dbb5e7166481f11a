use approx::assert_relative_eq;
use seqlogo_rs::api::{BelowGlyphStyle, GlyphStyle, Redraw};
use seqlogo_rs::color::ColorScheme;
use seqlogo_rs::core::Glyph;
use seqlogo_rs::error::LogoErrorKind;
use seqlogo_rs::render::{Color, NullRenderer};
use seqlogo_rs::{Logo, LogoConfig, LogoError, LogoMatrix};

fn logo() -> Logo<NullRenderer> {
    let matrix = LogoMatrix::new(
        vec![1.0, 2.0, 3.0],
        ["A", "C", "G", "T"],
        vec![
            vec![0.5, -0.25, 0.25, -0.5],
            vec![1.0, 0.0, 0.0, 0.0],
            vec![f64::NAN, 0.25, 0.5, 0.25],
        ],
    )
    .expect("matrix");
    let config = LogoConfig::default().with_color_scheme(ColorScheme::uniform(Color::rgb(0.5, 0.5, 1.0)));
    Logo::new(NullRenderer::default(), matrix, config).expect("logo")
}

fn glyphs(logo: &Logo<NullRenderer>) -> Vec<Glyph> {
    logo.glyphs().iter().cloned().collect()
}

#[test]
fn bulk_style_touches_every_glyph_and_redraws() {
    let mut logo = logo();
    let style = GlyphStyle::new().with_alpha(0.5).with_edge("black", 1.0);
    logo.style_glyphs(None, &style, Redraw::Now).expect("style");

    assert!(logo.glyphs().iter().all(|glyph| glyph.alpha() == 0.5));
    assert!(logo.glyphs().iter().all(|glyph| glyph.edge_color == Some(Color::BLACK)));
    assert_eq!(logo.renderer().render_count, 2);
}

#[test]
fn bulk_recolor_keeps_opacity_and_updates_scheme() {
    let mut logo = logo();
    logo.style_glyphs(None, &GlyphStyle::new().with_alpha(0.25), Redraw::Deferred)
        .expect("fade");
    logo.style_glyphs(
        Some(ColorScheme::named("classic")),
        &GlyphStyle::new(),
        Redraw::Deferred,
    )
    .expect("recolor");

    let t = logo.glyph(1.0, "T").expect("T");
    assert_eq!(t.color, Color::rgba(1.0, 0.0, 0.0, 0.25));
    assert_eq!(logo.color_scheme(), &ColorScheme::named("classic"));
    assert_eq!(logo.renderer().render_count, 1);
}

#[test]
fn failed_recolor_changes_nothing() {
    let mut logo = logo();
    let before = glyphs(&logo);
    let err = logo
        .style_glyphs(
            Some(ColorScheme::mapping([("A", "red")])),
            &GlyphStyle::new().with_alpha(0.1),
            Redraw::Now,
        )
        .expect_err("C, G, T have no color");

    assert_eq!(err.kind(), LogoErrorKind::Configuration);
    assert_eq!(glyphs(&logo), before);
}

#[test]
fn style_below_shades_fades_and_flips_negative_glyphs() {
    let mut logo = logo();
    logo.style_glyphs(None, &GlyphStyle::new().with_flip(false), Redraw::Deferred)
        .expect("unflip");
    logo.style_glyphs_below(&BelowGlyphStyle::new(0.5, 0.5), Redraw::Now)
        .expect("style below");

    let c = logo.glyph(1.0, "C").expect("C");
    assert_relative_eq!(c.color.red, 0.25);
    assert_relative_eq!(c.color.blue, 0.5);
    assert_relative_eq!(c.alpha(), 0.5);
    assert!(c.flip);

    let a = logo.glyph(1.0, "A").expect("A");
    assert_eq!(a.color, Color::rgb(0.5, 0.5, 1.0));
    assert!(!a.flip);
}

#[test]
fn style_below_rejects_fractions_outside_unit_interval() {
    let mut logo = logo();
    let before = glyphs(&logo);
    for below in [BelowGlyphStyle::new(1.5, 0.0), BelowGlyphStyle::new(0.0, -0.1)] {
        let err = logo
            .style_glyphs_below(&below, Redraw::Now)
            .expect_err("fraction out of range");
        assert!(matches!(err, LogoError::InvalidConfig(_)));
    }
    assert_eq!(glyphs(&logo), before);
}

#[test]
fn single_glyph_style_changes_only_that_glyph() {
    let mut logo = logo();
    let before = glyphs(&logo);
    logo.style_single_glyph(2.0, "A", &GlyphStyle::new().with_color("tomato"), Redraw::Now)
        .expect("style A at 2");

    let changed: Vec<_> = glyphs(&logo)
        .into_iter()
        .zip(before)
        .filter(|(after, before)| after != before)
        .map(|(after, _)| (after.position, after.character))
        .collect();
    assert_eq!(changed, vec![(2.0, "A".to_owned())]);
}

#[test]
fn single_glyph_lookup_failures_leave_glyphs_unchanged() {
    let mut logo = logo();
    let before = glyphs(&logo);
    let style = GlyphStyle::new().with_color("red");

    let err = logo
        .style_single_glyph(9.0, "A", &style, Redraw::Now)
        .expect_err("unknown position");
    assert!(matches!(err, LogoError::UnknownPosition(_)));

    let err = logo
        .style_single_glyph(1.0, "X", &style, Redraw::Now)
        .expect_err("unknown character");
    assert!(matches!(err, LogoError::UnknownCharacter(_)));

    let err = logo
        .style_single_glyph(3.0, "A", &style, Redraw::Now)
        .expect_err("absent cell");
    assert!(matches!(err, LogoError::MissingGlyph { .. }));
    assert_eq!(err.kind(), LogoErrorKind::Lookup);

    assert_eq!(glyphs(&logo), before);
    assert_eq!(logo.renderer().render_count, 1);
}

#[test]
fn invalid_style_values_are_configuration_errors() {
    let mut logo = logo();
    for style in [
        GlyphStyle::new().with_alpha(1.5),
        GlyphStyle::new().with_width(0.0),
        GlyphStyle::new().with_vpad(1.0),
        GlyphStyle::new().with_color("not-a-color"),
    ] {
        let err = logo
            .style_single_glyph(1.0, "A", &style, Redraw::Now)
            .expect_err("invalid style");
        assert!(matches!(err, LogoError::InvalidConfig(_)));
    }
}

#[test]
fn sequence_style_marks_one_glyph_per_position() {
    let mut logo = logo();
    logo.style_glyphs_in_sequence("TAG", &GlyphStyle::new().with_color("black"), Redraw::Now)
        .expect("style sequence");

    for (position, character) in [(1.0, "T"), (2.0, "A"), (3.0, "G")] {
        let glyph = logo.glyph(position, character).expect("glyph");
        assert_eq!(glyph.color, Color::BLACK);
    }
    let untouched = logo.glyph(1.0, "A").expect("A at 1");
    assert_eq!(untouched.color, Color::rgb(0.5, 0.5, 1.0));
}

#[test]
fn short_sequence_fails_without_mutation() {
    let mut logo = logo();
    let before = glyphs(&logo);
    let err = logo
        .style_glyphs_in_sequence("TA", &GlyphStyle::new().with_color("black"), Redraw::Now)
        .expect_err("too short");

    assert!(matches!(
        err,
        LogoError::SequenceLength {
            expected: 3,
            actual: 2
        }
    ));
    assert_eq!(glyphs(&logo), before);
}

#[test]
fn sequence_with_unknown_or_absent_characters_fails_without_mutation() {
    let mut logo = logo();
    let before = glyphs(&logo);
    let style = GlyphStyle::new().with_color("black");

    let err = logo
        .style_glyphs_in_sequence("TXG", &style, Redraw::Now)
        .expect_err("X is unknown");
    assert!(matches!(err, LogoError::UnknownCharacter(ref c) if c == "X"));

    let err = logo
        .style_glyphs_in_sequence("TCA", &style, Redraw::Now)
        .expect_err("A at 3 is absent");
    assert!(matches!(err, LogoError::MissingGlyph { .. }));

    assert_eq!(glyphs(&logo), before);
}

#[test]
fn hidden_glyphs_are_not_drawn() {
    let mut logo = logo();
    logo.style_single_glyph(1.0, "A", &GlyphStyle::new().with_visible(false), Redraw::Now)
        .expect("hide");
    assert_eq!(logo.renderer().last_glyph_count, 10);
    assert_eq!(logo.glyphs().len(), 11);
}

#[test]
fn glyph_style_json_rejects_unknown_keys() {
    let style = GlyphStyle::from_json_str(r#"{ "color": "red", "alpha": 0.5 }"#).expect("style");
    assert_eq!(style.alpha, Some(0.5));

    let err = GlyphStyle::from_json_str(r#"{ "colour": "red" }"#).expect_err("unknown key");
    assert!(matches!(err, LogoError::InvalidConfig(_)));
}
