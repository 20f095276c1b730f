//! statbar: a status bar fed by formatted lines on stdin.
//!
//! Each input line goes through three stages:
//! 1. [`statbar_markup`] scans it into styled pieces
//! 2. [`statbar_layout`] places the pieces into one window per monitor
//! 3. the frame is written out, as character cells or as a JSON plan
//!
//! Monitors are given on the command line; there is no display server.

pub mod cli;
pub mod render;
pub mod run;
pub mod telemetry;

pub use cli::{Cli, OutputFormat};
pub use render::{paint_frame, render_text, CellMeasure, CellSurface};
pub use run::{emit, run, Bar, RunError};
pub use telemetry::init_tracing;
