//! Character-cell rendering of a frame.
//!
//! Stands in for a pixel surface: every `char` is one unit wide and each
//! window is one row of cells.

use statbar_layout::{DrawOp, FontSpec, Frame, FrameWindow, TextMeasure};

/// Measures text in character cells.
#[derive(Copy, Clone, Debug, Default)]
pub struct CellMeasure;

impl TextMeasure for CellMeasure {
    fn measure(&self, _font: &FontSpec, text: &str) -> u32 {
        u32::try_from(text.chars().count()).unwrap_or(u32::MAX)
    }
}

/// One window's row of cells.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CellSurface {
    cells: Vec<char>,
}

impl CellSurface {
    pub fn new(width: u32) -> Self {
        CellSurface {
            cells: vec![' '; width as usize],
        }
    }

    pub fn width(&self) -> usize {
        self.cells.len()
    }

    /// Paint an op's characters, clipped to the surface.
    pub fn paint(&mut self, op: &DrawOp) {
        for (offset, ch) in op.text.chars().enumerate() {
            let Ok(offset) = i64::try_from(offset) else {
                break;
            };
            let Ok(x) = usize::try_from(op.x + offset) else {
                continue;
            };
            match self.cells.get_mut(x) {
                Some(cell) => *cell = ch,
                None => break,
            }
        }
    }

    /// The row's contents without trailing blanks.
    pub fn contents(&self) -> String {
        let row: String = self.cells.iter().collect();
        row.trim_end().to_string()
    }
}

/// Paint every op of `frame` onto its window's surface.
pub fn paint_frame(frame: &Frame) -> Vec<(FrameWindow, CellSurface)> {
    frame
        .windows
        .iter()
        .map(|window| {
            let mut surface = CellSurface::new(window.width);
            for op in frame.ops_for(window.index) {
                surface.paint(op);
            }
            (*window, surface)
        })
        .collect()
}

/// One output line per window, prefixed by the window index.
pub fn render_text(frame: &Frame) -> Vec<String> {
    paint_frame(frame)
        .into_iter()
        .map(|(window, surface)| format!("{}: {}", window.index, surface.contents()))
        .collect()
}

#[cfg(test)]
mod tests;
