//! Channel-decomposed colors.

use std::fmt;

use serde::Serialize;

/// A color with 8-bit alpha, red, green and blue channels.
///
/// Status-line markup and command-line options both spell colors as a
/// single `0xAARRGGBB` word; [`Color::from_argb`] splits it.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default, Serialize)]
pub struct Color {
    pub alpha: u8,
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl Color {
    /// Opaque white, the default foreground.
    pub const WHITE: Color = Color::from_argb(0xFFFF_FFFF);
    /// Opaque black, the default background.
    pub const BLACK: Color = Color::from_argb(0xFF00_0000);

    /// Decompose a packed `0xAARRGGBB` word.
    #[inline]
    pub const fn from_argb(argb: u32) -> Self {
        let [alpha, red, green, blue] = argb.to_be_bytes();
        Color {
            alpha,
            red,
            green,
            blue,
        }
    }

    /// Pack back into `0xAARRGGBB`.
    #[inline]
    pub const fn to_argb(self) -> u32 {
        u32::from_be_bytes([self.alpha, self.red, self.green, self.blue])
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:08X}", self.to_argb())
    }
}
