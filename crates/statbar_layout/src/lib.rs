//! Turns scanned pieces into positioned draw operations.
//!
//! Three stages, each usable on its own:
//! - [`config`]: option values (colors, geometries, fonts, heads) and the
//!   [`BarConfig`] they assemble into
//! - [`window`]: one bar window per monitor, with its dock strut
//! - [`place`]: left and right cursors per window, producing a [`Frame`]
//!
//! Nothing here talks to a display server. Monitors come in as plain
//! rectangles and text width comes from a [`TextMeasure`] implementation.

pub mod config;
pub mod place;
pub mod window;

pub use config::{
    parse_color, parse_font, parse_fonts, parse_geometries, parse_heads, BarConfig, ConfigError,
    FontSpec, Geometry, Position, Rect, DEFAULT_FONT_SIZE,
};
pub use place::{DrawOp, Frame, FrameWindow, Layout, TextMeasure};
pub use window::{plan_windows, root_height, BarWindow, Strut};
