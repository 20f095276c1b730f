use pretty_assertions::assert_eq;
use statbar_ir::Color;

use super::*;

fn op(window: usize, x: i64, text: &str) -> DrawOp {
    DrawOp {
        window,
        x,
        width: u32::try_from(text.chars().count()).unwrap_or(u32::MAX),
        text: text.to_string(),
        font: 0,
        foreground: Color::WHITE,
        background: Color::BLACK,
    }
}

fn frame_window(index: usize, width: u32) -> FrameWindow {
    FrameWindow {
        index,
        width,
        height: 1,
        background: Color::BLACK,
    }
}

#[test]
fn test_cell_measure_counts_chars() {
    let font = FontSpec::fallback();
    assert_eq!(CellMeasure.measure(&font, "abc"), 3);
    assert_eq!(CellMeasure.measure(&font, "ünï"), 3);
    assert_eq!(CellMeasure.measure(&font, ""), 0);
}

#[test]
fn test_paint_places_characters() {
    let mut surface = CellSurface::new(10);
    surface.paint(&op(0, 2, "ab"));
    surface.paint(&op(0, 7, "xyz"));
    assert_eq!(surface.width(), 10);
    assert_eq!(surface.contents(), "  ab   xyz");
}

#[test]
fn test_paint_clips_both_edges() {
    let mut surface = CellSurface::new(4);
    surface.paint(&op(0, -2, "abcd"));
    surface.paint(&op(0, 3, "xyz"));
    assert_eq!(surface.contents(), "cd x");
}

#[test]
fn test_later_ops_overwrite() {
    let mut surface = CellSurface::new(5);
    surface.paint(&op(0, 0, "aaaaa"));
    surface.paint(&op(0, 1, "bb"));
    assert_eq!(surface.contents(), "abbaa");
}

#[test]
fn test_render_text_prefixes_window_index() {
    let frame = Frame {
        windows: vec![frame_window(0, 8), frame_window(1, 4)],
        ops: vec![op(0, 0, "left"), op(1, 1, "r"), op(0, 6, "zz")],
    };
    assert_eq!(
        render_text(&frame),
        vec!["0: left  zz".to_string(), "1:  r".to_string()]
    );
}

#[test]
fn test_empty_window_renders_prefix_only() {
    let frame = Frame {
        windows: vec![frame_window(0, 3)],
        ops: vec![],
    };
    assert_eq!(render_text(&frame), vec!["0: ".to_string()]);
}
