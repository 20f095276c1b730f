//! Command-line options.

use clap::{Parser, ValueEnum};
use statbar_diagnostic::DiagnosticSink;
use statbar_ir::Color;
use statbar_layout::{
    parse_color, parse_fonts, parse_geometries, parse_heads, BarConfig, Position, Rect,
};

/// How each input line is written out.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, ValueEnum)]
pub enum OutputFormat {
    /// One row of character cells per window
    #[default]
    Text,
    /// One JSON object per line with windows and draw ops
    Plan,
}

#[derive(Debug, Parser)]
#[command(name = "statbar")]
#[command(version)]
#[command(about = "Read formatted status lines on stdin and lay them out on every monitor")]
pub struct Cli {
    /// Place bars at the bottom of the screen
    #[arg(long)]
    pub bottom: bool,

    /// Default foreground color (0xAARRGGBB)
    #[arg(long, default_value = "0xFFFFFFFF", value_parser = parse_color)]
    pub fg: Color,

    /// Default background color (0xAARRGGBB)
    #[arg(long, default_value = "0xFF000000", value_parser = parse_color)]
    pub bg: Color,

    /// Comma separated list of fonts in form of name[:size]
    #[arg(long, default_value = "")]
    pub fonts: String,

    /// Comma separated list of monitor geometries (<w>x<h>+<x>+<y>);
    /// for <w> and <h>, 0 means 100%
    #[arg(long, default_value = "")]
    pub geometries: String,

    /// Comma separated list of monitor rectangles (<w>x<h>+<x>+<y>)
    // Qualified so clap parses the whole list as one value.
    #[arg(long, default_value = "120x24+0+0", value_parser = parse_heads)]
    pub heads: ::std::vec::Vec<Rect>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub output: OutputFormat,
}

impl Cli {
    pub fn position(&self) -> Position {
        if self.bottom {
            Position::Bottom
        } else {
            Position::Top
        }
    }

    /// Build the bar configuration, reporting recovered problems to `sink`.
    pub fn to_config(&self, mut sink: impl DiagnosticSink) -> BarConfig {
        BarConfig {
            position: self.position(),
            foreground: self.fg,
            background: self.bg,
            fonts: parse_fonts(&self.fonts, &mut sink),
            geometries: parse_geometries(&self.geometries, &mut sink),
            heads: self.heads.clone(),
        }
    }
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    reason = "tests use unwrap to panic on unexpected state"
)]
