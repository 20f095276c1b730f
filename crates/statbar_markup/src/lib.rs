//! Parser for statbar's one-line formatting markup.
//!
//! A status line such as `{F1cpu}{AR{CF0xFFFF0000load}}` is split by the
//! [`tokenizer`] into directive prefixes, numbers, color literals and
//! single characters, then folded by the [`scanner`] into an ordered list
//! of [`Piece`]s, each carrying one [`statbar_ir::Style`].
//!
//! # Grammar
//!
//! ```text
//! line      := segment*
//! segment   := literal_char | directive | escape
//! directive := "{F" int | "{S" signed_int ("," int)* | "{CF" hexcolor
//!            | "{CB" hexcolor | "{AR" | "{" segment* "}"
//! escape    := "\" any_token
//! ```
//!
//! Directive scopes end at the matching `}`. Plain `{ }` pairs group text
//! without changing style and are stripped from the output.
//!
//! Malformed input never fails: bad directive arguments are reported to a
//! [`statbar_diagnostic::DiagnosticSink`] and kept as literal text.

pub mod scanner;
pub mod tokenizer;

pub use scanner::{parse_line, scan_line, Scanner};
pub use statbar_ir::Piece;
pub use tokenizer::{split_token, EndOfLine, Token, TokenKind, Tokenizer};
