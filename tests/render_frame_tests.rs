use seqlogo_rs::api::{BaselineStyle, GlyphStyle, HighlightStyle, Redraw};
use seqlogo_rs::color::ColorScheme;
use seqlogo_rs::core::AxisLimits;
use seqlogo_rs::error::LogoResult;
use seqlogo_rs::render::{AxesState, DrawItem, LogoFrame, NullRenderer, Renderer};
use seqlogo_rs::{Logo, LogoConfig, LogoError, LogoMatrix};

fn matrix() -> LogoMatrix {
    LogoMatrix::with_default_positions(["A", "C"], vec![vec![1.0, -1.0], vec![0.5, 0.5]])
        .expect("matrix")
}

#[derive(Default)]
struct RecordingRenderer {
    frames: Vec<LogoFrame>,
}

impl Renderer for RecordingRenderer {
    fn render(&mut self, frame: &LogoFrame) -> LogoResult<()> {
        self.frames.push(frame.clone());
        Ok(())
    }
}

/// Accepts the first `budget` frames and fails afterwards.
struct FailingRenderer {
    budget: usize,
}

impl Renderer for FailingRenderer {
    fn render(&mut self, _frame: &LogoFrame) -> LogoResult<()> {
        if self.budget == 0 {
            return Err(LogoError::Backend("surface lost".to_owned()));
        }
        self.budget -= 1;
        Ok(())
    }
}

#[test]
fn every_surface_mutation_pushes_a_complete_frame() {
    let mut logo =
        Logo::new(RecordingRenderer::default(), matrix(), LogoConfig::default()).expect("logo");
    logo.highlight_position(1.0, &HighlightStyle::default())
        .expect("highlight");
    logo.draw_baseline(&BaselineStyle::default()).expect("baseline");

    let frames = &logo.renderer().frames;
    assert_eq!(frames.len(), 3);
    assert_eq!(frames[2].glyphs.len(), 4);
    assert_eq!(frames[2].rects.len(), 1);
    assert_eq!(frames[2].lines.len(), 1);
    assert_eq!(&frames[2], logo.frame());
}

#[test]
fn frame_items_come_out_in_zorder() {
    let config = LogoConfig::default().with_zorder(3);
    let mut logo = Logo::new(NullRenderer::default(), matrix(), config).expect("logo");
    logo.highlight_position(0.0, &HighlightStyle::default())
        .expect("highlight");
    logo.draw_baseline(&BaselineStyle::default()).expect("baseline");

    let order: Vec<i32> = logo
        .frame()
        .items_by_zorder()
        .iter()
        .map(|item| item.zorder())
        .collect();
    assert_eq!(order, vec![-2, -1, 3, 3, 3, 3]);
    assert!(matches!(logo.frame().items_by_zorder()[0], DrawItem::Rect(_)));
}

#[test]
fn glyph_zorder_style_updates_config_for_later_glyphs() {
    let mut logo = Logo::new(NullRenderer::default(), matrix(), LogoConfig::default())
        .expect("logo");
    logo.style_glyphs(None, &GlyphStyle::new().with_zorder(7), Redraw::Now)
        .expect("zorder");

    assert_eq!(logo.config().zorder, 7);
    assert!(logo.frame().glyphs.iter().all(|glyph| glyph.zorder == 7));
}

#[test]
fn failed_draw_keeps_logo_undrawn() {
    let config = LogoConfig::default().with_draw_now(false);
    let mut logo = Logo::new(FailingRenderer { budget: 0 }, matrix(), config).expect("logo");

    let err = logo.draw().expect_err("backend failure");
    assert!(matches!(err, LogoError::Backend(_)));
    assert!(!logo.has_been_drawn());
}

#[test]
fn failed_decoration_keeps_previous_surface() {
    let mut logo =
        Logo::new(FailingRenderer { budget: 1 }, matrix(), LogoConfig::default()).expect("logo");
    let before = logo.frame().clone();

    logo.highlight_position(0.0, &HighlightStyle::default())
        .expect_err("backend failure");
    assert_eq!(logo.frame(), &before);
    assert!(logo.has_been_drawn());
}

#[test]
fn null_renderer_rejects_invalid_frames() {
    let mut renderer = NullRenderer::default();
    let unit = AxisLimits { min: 0.0, max: 1.0 };
    let inverted = AxisLimits { min: 1.0, max: 0.0 };

    renderer
        .render(&LogoFrame::new(AxesState::new(unit, unit)))
        .expect("empty frame is valid");
    let err = renderer
        .render(&LogoFrame::new(AxesState::new(inverted, unit)))
        .expect_err("inverted limits");
    assert!(matches!(err, LogoError::InvalidRange(_)));
    assert_eq!(renderer.render_count, 1);
}

#[test]
fn renderer_can_be_borrowed_mutably() {
    let mut renderer = NullRenderer::default();
    {
        let config = LogoConfig::default().with_color_scheme(ColorScheme::uniform("gray"));
        let _logo = Logo::new(&mut renderer, matrix(), config).expect("logo");
    }
    assert_eq!(renderer.render_count, 1);
}
