//! The stdin loop.

use std::io::{BufRead, Write};

use statbar_diagnostic::TracingSink;
use statbar_layout::{plan_windows, root_height, BarConfig, BarWindow, Frame, Layout};
use statbar_markup::parse_line;

use crate::cli::OutputFormat;
use crate::render::{render_text, CellMeasure};

/// Errors that end the program.
#[derive(Debug, thiserror::Error)]
pub enum RunError {
    #[error("failed to write output: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to encode frame: {0}")]
    Json(#[from] serde_json::Error),
}

/// A configured bar with its planned windows.
#[derive(Clone, Debug)]
pub struct Bar {
    config: BarConfig,
    windows: Vec<BarWindow>,
}

impl Bar {
    pub fn new(config: BarConfig) -> Self {
        let windows = plan_windows(
            &config.heads,
            &config.geometries,
            config.position,
            root_height(&config.heads),
        );
        tracing::debug!(windows = windows.len(), "bar created");
        Bar { config, windows }
    }

    pub fn config(&self) -> &BarConfig {
        &self.config
    }

    pub fn windows(&self) -> &[BarWindow] {
        &self.windows
    }

    /// Scan and lay out one input line.
    pub fn frame(&self, line: &str) -> Frame {
        let pieces = parse_line(line);
        Layout::new(&self.config, &self.windows, CellMeasure).frame(&pieces, TracingSink::new())
    }
}

/// Write one frame in `format`.
pub fn emit(frame: &Frame, output: &mut impl Write, format: OutputFormat) -> Result<(), RunError> {
    match format {
        OutputFormat::Text => {
            for line in render_text(frame) {
                writeln!(output, "{line}")?;
            }
        }
        OutputFormat::Plan => {
            serde_json::to_writer(&mut *output, frame)?;
            writeln!(output)?;
        }
    }
    output.flush()?;
    Ok(())
}

/// Draw every line of `input` until it ends.
///
/// Lines are raw bytes; invalid UTF-8 is replaced rather than rejected. A
/// read error is logged and ends the loop; write errors are returned.
pub fn run(
    bar: &Bar,
    mut input: impl BufRead,
    mut output: impl Write,
    format: OutputFormat,
) -> Result<(), RunError> {
    let mut buf = Vec::new();
    loop {
        buf.clear();
        match input.read_until(b'\n', &mut buf) {
            Ok(0) => break,
            Ok(_) => {}
            Err(err) => {
                tracing::error!(%err, "error reading input");
                break;
            }
        }
        let line = String::from_utf8_lossy(trim_line_end(&buf));
        let frame = bar.frame(&line);
        emit(&frame, &mut output, format)?;
    }
    Ok(())
}

/// Strip one trailing `\n` or `\r\n`.
fn trim_line_end(line: &[u8]) -> &[u8] {
    let line = line.strip_suffix(b"\n").unwrap_or(line);
    line.strip_suffix(b"\r").unwrap_or(line)
}
