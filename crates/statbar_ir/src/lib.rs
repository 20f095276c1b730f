//! Shared data types for statbar.
//!
//! This crate holds the values that cross crate boundaries:
//! - [`Span`] byte ranges within one input line
//! - [`Color`] channel-decomposed `0xAARRGGBB` colors
//! - [`Style`] and [`Piece`], the output of the markup scanner
//!
//! Everything here is plain data. Behavior lives in `statbar_markup`
//! (producing pieces) and `statbar_layout` (placing them).

/// Compile-time assertion that a type has a specific size.
#[macro_export]
macro_rules! static_assert_size {
    ($ty:ty, $size:expr) => {
        const _: [(); $size] = [(); ::std::mem::size_of::<$ty>()];
    };
}

mod color;
mod piece;
mod span;

pub use color::Color;
pub use piece::{Align, Piece, ScreenList, Style};
pub use span::{Span, SpanError};
