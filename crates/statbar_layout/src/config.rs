//! Option values and the bar configuration they build.
//!
//! Strict parsers ([`FromStr`] impls, [`parse_color`], [`parse_heads`])
//! return [`ConfigError`]. The list parsers for geometries and fonts are
//! lenient: a bad entry is replaced by a default and reported to a
//! [`DiagnosticSink`], so one typo does not keep the bar from starting.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use statbar_diagnostic::{Diagnostic, DiagnosticSink, ErrorCode};
use statbar_ir::Color;

/// Size used when a font spec has none, or an unusable one.
pub const DEFAULT_FONT_SIZE: f32 = 12.0;

/// Errors from parsing option values.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid color `{0}`, expected 0xAARRGGBB")]
    InvalidColor(String),
    #[error("invalid geometry `{0}`, expected <w>x<h>+<x>+<y>")]
    InvalidGeometry(String),
    #[error("invalid head `{0}`, expected <w>x<h>+<x>+<y>")]
    InvalidHead(String),
    #[error("at least one head is required")]
    NoHeads,
    #[error("invalid font size `{size}` for `{name}`")]
    InvalidFontSize { name: String, size: String },
}

/// Where bars sit on their monitor.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Position {
    #[default]
    Top,
    Bottom,
}

/// Requested bar size and offset on one monitor.
///
/// A width or height of 0 means the full width or height of the monitor.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize)]
pub struct Geometry {
    pub width: u16,
    pub height: u16,
    pub x: u16,
    pub y: u16,
}

impl Geometry {
    /// Full width, 16 pixels high, at the monitor's edge.
    pub const DEFAULT: Geometry = Geometry {
        width: 0,
        height: 16,
        x: 0,
        y: 0,
    };
}

impl Default for Geometry {
    fn default() -> Self {
        Geometry::DEFAULT
    }
}

impl FromStr for Geometry {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let [width, height, x, y] =
            split_rect(s).ok_or_else(|| ConfigError::InvalidGeometry(s.to_string()))?;
        Ok(Geometry {
            width,
            height,
            x,
            y,
        })
    }
}

impl fmt::Display for Geometry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}+{}+{}", self.width, self.height, self.x, self.y)
    }
}

/// A monitor or window rectangle in root-window coordinates.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash, Serialize)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, width: u32, height: u32) -> Self {
        Rect {
            x,
            y,
            width,
            height,
        }
    }

    /// Bottom edge, exclusive.
    pub fn bottom(&self) -> i64 {
        i64::from(self.y) + i64::from(self.height)
    }
}

impl FromStr for Rect {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let [width, height, x, y] =
            split_rect::<u16>(s).ok_or_else(|| ConfigError::InvalidHead(s.to_string()))?;
        Ok(Rect::new(
            i32::from(x),
            i32::from(y),
            u32::from(width),
            u32::from(height),
        ))
    }
}

impl fmt::Display for Rect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}+{}+{}", self.width, self.height, self.x, self.y)
    }
}

/// Split `<w>x<h>+<x>+<y>` into its four fields.
fn split_rect<T: FromStr>(s: &str) -> Option<[T; 4]> {
    let (size, offset) = s.split_once('+')?;
    let (width, height) = size.split_once('x')?;
    let (x, y) = offset.split_once('+')?;
    Some([field(width)?, field(height)?, field(x)?, field(y)?])
}

/// Parse a field made only of ASCII digits.
fn field<T: FromStr>(text: &str) -> Option<T> {
    if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    text.parse().ok()
}

/// A font request: a family name or path, and a point size.
///
/// An empty name asks for whatever fallback font the renderer has.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct FontSpec {
    pub name: String,
    pub size: f32,
}

impl FontSpec {
    pub fn new(name: impl Into<String>, size: f32) -> Self {
        FontSpec {
            name: name.into(),
            size,
        }
    }

    /// The renderer's fallback font at the default size.
    pub fn fallback() -> Self {
        FontSpec::new(String::new(), DEFAULT_FONT_SIZE)
    }

    pub fn is_fallback(&self) -> bool {
        self.name.is_empty()
    }
}

impl FromStr for FontSpec {
    type Err = ConfigError;

    /// Parse `name[:size]`, splitting at the last `:`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.rsplit_once(':') {
            None => Ok(FontSpec::new(s, DEFAULT_FONT_SIZE)),
            Some((name, size)) => match parse_size(size) {
                Some(size) => Ok(FontSpec::new(name, size)),
                None => Err(ConfigError::InvalidFontSize {
                    name: name.to_string(),
                    size: size.to_string(),
                }),
            },
        }
    }
}

impl fmt::Display for FontSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_fallback() {
            write!(f, "<fallback>:{}", self.size)
        } else {
            write!(f, "{}:{}", self.name, self.size)
        }
    }
}

fn parse_size(text: &str) -> Option<f32> {
    text.parse::<f32>()
        .ok()
        .filter(|size| size.is_finite() && *size > 0.0)
}

/// Parse `0xAARRGGBB`, `0XAARRGGBB` or bare hex digits.
pub fn parse_color(s: &str) -> Result<Color, ConfigError> {
    let digits = s
        .strip_prefix("0x")
        .or_else(|| s.strip_prefix("0X"))
        .unwrap_or(s);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(ConfigError::InvalidColor(s.to_string()));
    }
    u32::from_str_radix(digits, 16)
        .map(Color::from_argb)
        .map_err(|_| ConfigError::InvalidColor(s.to_string()))
}

/// Parse a comma separated geometry list.
///
/// An empty entry yields `None`, which skips that monitor. A bad entry is
/// replaced by [`Geometry::DEFAULT`] and reported as `C0001`.
pub fn parse_geometries(value: &str, mut sink: impl DiagnosticSink) -> Vec<Option<Geometry>> {
    if value.is_empty() {
        return Vec::new();
    }
    value
        .split(',')
        .map(|entry| {
            if entry.is_empty() {
                return None;
            }
            match entry.parse::<Geometry>() {
                Ok(geometry) => Some(geometry),
                Err(err) => {
                    sink.emit(
                        Diagnostic::warning(ErrorCode::C0001)
                            .with_message(err.to_string())
                            .with_note(format!("using `{}`", Geometry::DEFAULT)),
                    );
                    Some(Geometry::DEFAULT)
                }
            }
        })
        .collect()
}

/// Parse one `name[:size]` font spec, falling back to the default size.
pub fn parse_font(def: &str, mut sink: impl DiagnosticSink) -> FontSpec {
    match def.parse::<FontSpec>() {
        Ok(spec) => {
            if !def.contains(':') {
                sink.emit(
                    Diagnostic::note(ErrorCode::C0002)
                        .with_message(format!("font size not specified for `{def}`"))
                        .with_note(format!("using `{DEFAULT_FONT_SIZE}`")),
                );
            }
            spec
        }
        Err(err) => {
            let name = def.rsplit_once(':').map_or(def, |(name, _)| name);
            sink.emit(
                Diagnostic::warning(ErrorCode::C0002)
                    .with_message(err.to_string())
                    .with_note(format!("using `{DEFAULT_FONT_SIZE}`")),
            );
            FontSpec::new(name, DEFAULT_FONT_SIZE)
        }
    }
}

/// Parse a comma separated font list.
///
/// Never returns an empty list: with no fonts given, the fallback font is
/// used and `C0003` is reported.
pub fn parse_fonts(value: &str, mut sink: impl DiagnosticSink) -> Vec<FontSpec> {
    if value.is_empty() {
        sink.emit(
            Diagnostic::note(ErrorCode::C0003)
                .with_note(format!("using `{}`", FontSpec::fallback())),
        );
        return vec![FontSpec::fallback()];
    }
    value
        .split(',')
        .map(|def| parse_font(def, &mut sink))
        .collect()
}

/// Parse a comma separated list of monitor rectangles.
pub fn parse_heads(value: &str) -> Result<Vec<Rect>, ConfigError> {
    if value.is_empty() {
        return Err(ConfigError::NoHeads);
    }
    value.split(',').map(str::parse).collect()
}

/// Everything the layout stages need to know about the bar.
#[derive(Clone, Debug, PartialEq)]
pub struct BarConfig {
    pub position: Position,
    pub foreground: Color,
    pub background: Color,
    /// Never empty once built by the option parsers.
    pub fonts: Vec<FontSpec>,
    /// One entry per monitor; `None` leaves that monitor without a bar.
    pub geometries: Vec<Option<Geometry>>,
    /// Monitor rectangles, in screen-index order.
    pub heads: Vec<Rect>,
}

impl Default for BarConfig {
    fn default() -> Self {
        BarConfig {
            position: Position::Top,
            foreground: Color::WHITE,
            background: Color::BLACK,
            fonts: vec![FontSpec::fallback()],
            geometries: Vec::new(),
            heads: vec![Rect::new(0, 0, 120, 24)],
        }
    }
}
