use pretty_assertions::assert_eq;

use super::*;

fn geom(width: u16, height: u16, x: u16, y: u16) -> Option<Geometry> {
    Some(Geometry {
        width,
        height,
        x,
        y,
    })
}

const HEAD_A: Rect = Rect::new(0, 0, 1920, 1080);
const HEAD_B: Rect = Rect::new(1920, 0, 1280, 1024);

#[test]
fn test_root_height_spans_heads() {
    assert_eq!(root_height(&[HEAD_A, HEAD_B]), 1080);
    assert_eq!(root_height(&[Rect::new(0, 1080, 800, 600)]), 1680);
    assert_eq!(root_height(&[]), 0);
}

#[test]
fn test_empty_geometries_use_default_on_every_head() {
    let windows = plan_windows(&[HEAD_A, HEAD_B], &[], Position::Top, 1080);
    assert_eq!(
        windows,
        vec![
            BarWindow {
                head: 0,
                rect: Rect::new(0, 0, 1920, 16),
                strut: Strut {
                    top: 16,
                    bottom: 0,
                    start_x: 0,
                    end_x: 1920,
                },
            },
            BarWindow {
                head: 1,
                rect: Rect::new(1920, 0, 1280, 16),
                strut: Strut {
                    top: 16,
                    bottom: 0,
                    start_x: 0,
                    end_x: 1280,
                },
            },
        ]
    );
}

#[test]
fn test_top_window_uses_offsets() {
    let windows = plan_windows(&[HEAD_B], &[geom(300, 20, 10, 5)], Position::Top, 1080);
    assert_eq!(windows.len(), 1);
    assert_eq!(windows[0].rect, Rect::new(1930, 5, 300, 20));
    assert_eq!(
        windows[0].strut,
        Strut {
            top: 20,
            bottom: 0,
            start_x: 10,
            end_x: 310,
        }
    );
}

#[test]
fn test_bottom_window_position_and_strut() {
    let windows = plan_windows(&[HEAD_A], &[geom(0, 16, 0, 4)], Position::Bottom, 1080);
    // y = 1080 - 16 - 4
    assert_eq!(windows[0].rect, Rect::new(0, 1060, 1920, 16));
    assert_eq!(
        windows[0].strut,
        Strut {
            top: 0,
            bottom: 20,
            start_x: 0,
            end_x: 1920,
        }
    );
}

#[test]
fn test_bottom_strut_measures_from_root_bottom() {
    // A shorter head next to a taller one reserves the gap below it too.
    let windows = plan_windows(&[HEAD_B], &[geom(0, 16, 0, 0)], Position::Bottom, 1080);
    assert_eq!(windows[0].rect, Rect::new(1920, 1008, 1280, 16));
    assert_eq!(windows[0].strut.bottom, 72);
}

#[test]
fn test_zero_height_takes_head_height() {
    let windows = plan_windows(&[HEAD_A], &[geom(100, 0, 0, 0)], Position::Top, 1080);
    assert_eq!(windows[0].rect, Rect::new(0, 0, 100, 1080));
}

#[test]
fn test_none_entry_skips_head() {
    let heads = [HEAD_A, HEAD_B, HEAD_A];
    let windows = plan_windows(&heads, &[None, geom(0, 16, 0, 0)], Position::Top, 1080);
    let planned: Vec<_> = windows.iter().map(|w| w.head).collect();
    // Head 2 reuses the last entry.
    assert_eq!(planned, vec![1, 2]);
}

#[test]
fn test_trailing_none_stops_planning() {
    let heads = [HEAD_A, HEAD_B, HEAD_A];
    let windows = plan_windows(&heads, &[geom(0, 16, 0, 0), None], Position::Top, 1080);
    let planned: Vec<_> = windows.iter().map(|w| w.head).collect();
    assert_eq!(planned, vec![0]);
}

#[test]
fn test_extra_geometries_are_ignored() {
    let windows = plan_windows(
        &[HEAD_A],
        &[geom(0, 16, 0, 0), geom(0, 32, 0, 0)],
        Position::Top,
        1080,
    );
    assert_eq!(windows.len(), 1);
    assert_eq!(windows[0].rect.height, 16);
}
