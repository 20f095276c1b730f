//! Piece placement.
//!
//! Every window keeps two cursors. Left-aligned pieces start at the left
//! cursor and push it right; right-aligned pieces end at the right cursor
//! and pull it left. Pieces arrive in rendering order, which is why the
//! scanner puts later right-aligned text first.

use serde::Serialize;
use statbar_diagnostic::{Diagnostic, DiagnosticSink, ErrorCode};
use statbar_ir::{Align, Color, Piece, Style};

use crate::config::{BarConfig, FontSpec};
use crate::window::BarWindow;

/// Measures rendered text.
pub trait TextMeasure {
    /// Advance width of `text` set in `font`.
    fn measure(&self, font: &FontSpec, text: &str) -> u32;
}

impl<M: TextMeasure + ?Sized> TextMeasure for &M {
    fn measure(&self, font: &FontSpec, text: &str) -> u32 {
        (**self).measure(font, text)
    }
}

/// Draw one piece into one window.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct DrawOp {
    pub window: usize,
    /// Left edge, relative to the window. Negative when right-aligned
    /// content overflows the window.
    pub x: i64,
    pub width: u32,
    pub text: String,
    pub font: u32,
    pub foreground: Color,
    pub background: Color,
}

/// A window as the renderer needs it for one frame.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize)]
pub struct FrameWindow {
    pub index: usize,
    pub width: u32,
    pub height: u32,
    pub background: Color,
}

/// Everything needed to draw one input line.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize)]
pub struct Frame {
    pub windows: Vec<FrameWindow>,
    pub ops: Vec<DrawOp>,
}

impl Frame {
    /// Draw ops for one window, in drawing order.
    pub fn ops_for(&self, window: usize) -> impl Iterator<Item = &DrawOp> + '_ {
        self.ops.iter().filter(move |op| op.window == window)
    }
}

/// Places pieces into a fixed set of windows.
pub struct Layout<'a, M> {
    config: &'a BarConfig,
    windows: &'a [BarWindow],
    measure: M,
    fallback_font: FontSpec,
}

impl<'a, M: TextMeasure> Layout<'a, M> {
    pub fn new(config: &'a BarConfig, windows: &'a [BarWindow], measure: M) -> Self {
        Layout {
            config,
            windows,
            measure,
            fallback_font: FontSpec::fallback(),
        }
    }

    pub fn windows(&self) -> &'a [BarWindow] {
        self.windows
    }

    /// Lay out one line's pieces.
    pub fn frame(&self, pieces: &[Piece], mut sink: impl DiagnosticSink) -> Frame {
        let windows: Vec<FrameWindow> = self
            .windows
            .iter()
            .enumerate()
            .map(|(index, window)| FrameWindow {
                index,
                width: window.rect.width,
                height: window.rect.height,
                background: self.config.background,
            })
            .collect();
        let mut left = vec![0_i64; windows.len()];
        let mut right: Vec<i64> = windows.iter().map(|w| i64::from(w.width)).collect();
        let mut ops = Vec::new();

        for piece in pieces {
            let font = self.font_index(piece.style.font, &mut sink);
            let spec = self
                .config
                .fonts
                .get(font as usize)
                .unwrap_or(&self.fallback_font);
            let width = self.measure.measure(spec, &piece.text);
            let foreground = piece.style.foreground.unwrap_or(self.config.foreground);
            let background = piece.style.background.unwrap_or(self.config.background);

            for window in target_windows(&piece.style, windows.len()) {
                let x = match piece.style.align {
                    Align::Left => {
                        let x = left[window];
                        left[window] += i64::from(width);
                        x
                    }
                    Align::Right => {
                        right[window] -= i64::from(width);
                        right[window]
                    }
                };
                tracing::trace!(window, x, width, text = %piece.text, "placed piece");
                ops.push(DrawOp {
                    window,
                    x,
                    width,
                    text: piece.text.clone(),
                    font,
                    foreground,
                    background,
                });
            }
        }

        Frame { windows, ops }
    }

    /// The font index to draw with; out-of-range indices fall back to 0.
    fn font_index(&self, font: u32, sink: &mut impl DiagnosticSink) -> u32 {
        let loaded = self.config.fonts.len();
        if (font as usize) < loaded {
            return font;
        }
        sink.emit(
            Diagnostic::warning(ErrorCode::L0001)
                .with_message(format!("invalid font index `{font}`, using `0`"))
                .with_note(format!("{loaded} font(s) loaded")),
        );
        0
    }
}

/// Windows a piece is drawn on.
///
/// With no screens listed, every window not excluded. Otherwise the listed
/// screens that exist and are not excluded, in listed order.
fn target_windows(style: &Style, count: usize) -> Vec<usize> {
    if style.screens.is_empty() {
        return (0..count)
            .filter(|&index| u32::try_from(index).is_ok_and(|screen| style.shows_on(screen)))
            .collect();
    }
    style
        .screens
        .iter()
        .filter(|&screen| !style.not_screens.contains(screen))
        .filter_map(|screen| usize::try_from(screen).ok())
        .filter(|&index| index < count)
        .collect()
}
