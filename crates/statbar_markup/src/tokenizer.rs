//! Splits a status line into markup tokens.
//!
//! Matching follows a fixed priority, longest relevant prefix first:
//!
//! 1. line feed: [`EndOfLine`]
//! 2. fewer than 2 bytes left: one byte
//! 3. `{F`, `{S`
//! 4. fewer than 3 bytes left: one byte
//! 5. `{CF`, `{CB`, `{AR`
//! 6. `0x`/`0X` followed by 8 hex digits (color literal)
//! 7. optional `-` followed by a run of decimal digits
//! 8. anything else: one byte
//!
//! The short-input rules come before the numeric rule, so a number in the
//! last two bytes of a line is split into single digits.

use std::sync::LazyLock;

use regex::bytes::Regex;
use statbar_ir::Span;

/// Length of a `0xAARRGGBB` color literal.
const COLOR_LITERAL_LEN: usize = 10;

#[allow(
    clippy::expect_used,
    reason = "the pattern is a constant; failure would be a programming error"
)]
static COLOR_LITERAL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^0[xX][0-9a-fA-F]{8}$").expect("color literal pattern is valid")
});

/// Raised when the tokenizer reaches a line feed or runs out of input.
///
/// Not a failure: the caller stops scanning the current line.
#[derive(Copy, Clone, Debug, Eq, PartialEq, thiserror::Error)]
#[error("end of line")]
pub struct EndOfLine;

/// Classification of a token's bytes.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum TokenKind {
    /// `{F`
    FontOpen,
    /// `{S`
    ScreenOpen,
    /// `{CF`
    ForegroundOpen,
    /// `{CB`
    BackgroundOpen,
    /// `{AR`
    AlignRight,
    /// `0xAARRGGBB`
    Color,
    /// `-?[0-9]+`, or a single digit near the end of the line
    Number,
    LeftBrace,
    RightBrace,
    Comma,
    Backslash,
    /// Any other single byte.
    Char,
}

impl TokenKind {
    /// Whether this token opens a style directive.
    pub fn is_directive(self) -> bool {
        matches!(
            self,
            TokenKind::FontOpen
                | TokenKind::ScreenOpen
                | TokenKind::ForegroundOpen
                | TokenKind::BackgroundOpen
                | TokenKind::AlignRight
        )
    }
}

/// One token: its kind, its bytes, and where the bytes sit in the line.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Token<'a> {
    pub kind: TokenKind,
    pub text: &'a [u8],
    pub span: Span,
}

/// Classify a one-byte token.
fn single(byte: u8) -> TokenKind {
    match byte {
        b'{' => TokenKind::LeftBrace,
        b'}' => TokenKind::RightBrace,
        b',' => TokenKind::Comma,
        b'\\' => TokenKind::Backslash,
        b'0'..=b'9' => TokenKind::Number,
        _ => TokenKind::Char,
    }
}

/// Length of `-?[0-9]*` at the start of `data`, and whether it held a digit.
fn number_len(data: &[u8]) -> (usize, bool) {
    let sign = usize::from(data.first() == Some(&b'-'));
    let digits = data[sign..].iter().take_while(|b| b.is_ascii_digit()).count();
    (sign + digits, digits > 0)
}

/// Find the next token at the start of `data`.
///
/// Returns the number of bytes the token consumes (the token's bytes are
/// `&data[..len]`) together with its kind.
pub fn split_token(data: &[u8]) -> Result<(usize, TokenKind), EndOfLine> {
    let found = match data {
        [] | [b'\n', ..] => return Err(EndOfLine),
        [only] => (1, single(*only)),
        [b'{', b'F', ..] => (2, TokenKind::FontOpen),
        [b'{', b'S', ..] => (2, TokenKind::ScreenOpen),
        [first, _] => (1, single(*first)),
        [b'{', b'C', b'F', ..] => (3, TokenKind::ForegroundOpen),
        [b'{', b'C', b'B', ..] => (3, TokenKind::BackgroundOpen),
        [b'{', b'A', b'R', ..] => (3, TokenKind::AlignRight),
        _ if data.len() >= COLOR_LITERAL_LEN
            && COLOR_LITERAL.is_match(&data[..COLOR_LITERAL_LEN]) =>
        {
            (COLOR_LITERAL_LEN, TokenKind::Color)
        }
        [b'0'..=b'9' | b'-', ..] => match number_len(data) {
            (len, true) => (len, TokenKind::Number),
            (_, false) => (1, single(data[0])),
        },
        [first, ..] => (1, single(*first)),
    };
    Ok(found)
}

/// Pull-style tokenizer over one line.
///
/// Holds only a position; the color pattern it uses is shared and
/// read-only, so independent tokenizers may run on different threads.
#[derive(Clone, Debug)]
pub struct Tokenizer<'a> {
    src: &'a [u8],
    pos: usize,
}

impl<'a> Tokenizer<'a> {
    pub fn new(line: &'a str) -> Self {
        Tokenizer {
            src: line.as_bytes(),
            pos: 0,
        }
    }

    /// Produce the next token.
    ///
    /// Once [`EndOfLine`] is returned, every later call returns it too.
    pub fn next_token(&mut self) -> Result<Token<'a>, EndOfLine> {
        let rest = &self.src[self.pos..];
        let (len, kind) = split_token(rest)?;
        let start = self.pos;
        self.pos += len;
        tracing::trace!(?kind, start, len, "token");
        Ok(Token {
            kind,
            text: &rest[..len],
            span: Span::saturating_from_range(start..self.pos),
        })
    }
}

impl<'a> Iterator for Tokenizer<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Token<'a>> {
        self.next_token().ok()
    }
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    reason = "tests use unwrap to panic on unexpected state"
)]
