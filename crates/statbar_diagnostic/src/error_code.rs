//! Error codes for all statbar diagnostics.
//!
//! Format: a letter naming the stage followed by four digits:
//! - M0xxx: markup scanning
//! - C0xxx: option and configuration parsing
//! - L0xxx: layout

use std::fmt;

/// Error codes for all statbar diagnostics.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorCode {
    // Markup (M0xxx)
    /// `{F` not followed by a font index
    M0001,
    /// `{S` or a chained `,` not followed by a screen index
    M0002,
    /// `{CF`/`{CB` not followed by a `0xAARRGGBB` literal
    M0003,

    // Configuration (C0xxx)
    /// Unparseable bar geometry, default used
    C0001,
    /// Missing or unparseable font size, default used
    C0002,
    /// No fonts configured, fallback used
    C0003,

    // Layout (L0xxx)
    /// Piece references a font index that is not loaded
    L0001,
}

impl ErrorCode {
    /// All variants, for exhaustive testing.
    pub const ALL: &[ErrorCode] = &[
        ErrorCode::M0001,
        ErrorCode::M0002,
        ErrorCode::M0003,
        ErrorCode::C0001,
        ErrorCode::C0002,
        ErrorCode::C0003,
        ErrorCode::L0001,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::M0001 => "M0001",
            ErrorCode::M0002 => "M0002",
            ErrorCode::M0003 => "M0003",
            ErrorCode::C0001 => "C0001",
            ErrorCode::C0002 => "C0002",
            ErrorCode::C0003 => "C0003",
            ErrorCode::L0001 => "L0001",
        }
    }

    /// One-line explanation of what the code means.
    pub fn description(&self) -> &'static str {
        match self {
            ErrorCode::M0001 => "font directive without a valid font index",
            ErrorCode::M0002 => "screen directive without a valid screen index",
            ErrorCode::M0003 => "color directive without a valid 0xAARRGGBB color",
            ErrorCode::C0001 => "invalid bar geometry",
            ErrorCode::C0002 => "invalid or missing font size",
            ErrorCode::C0003 => "no fonts configured",
            ErrorCode::L0001 => "font index out of range",
        }
    }

    /// Whether the code belongs to the markup scanner.
    pub fn is_markup(&self) -> bool {
        self.as_str().starts_with('M')
    }

    /// Parse a code from its string form, e.g. `"M0002"`.
    pub fn parse(s: &str) -> Option<ErrorCode> {
        ErrorCode::ALL
            .iter()
            .copied()
            .find(|code| code.as_str().eq_ignore_ascii_case(s))
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
