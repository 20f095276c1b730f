//! Folds markup tokens into styled pieces.
//!
//! The scanner pulls tokens one at a time and keeps:
//! - `escaping`: the previous token was `\`, so this one is literal
//! - `screening`: inside `{S…`, where `,` chains another screen index
//! - `bracket_depth`: unmatched plain `{` that are stripped from output
//! - the piece list, in rendering order, and the index of the current piece
//!
//! # Scopes
//!
//! Opening a directive copies the current style into a new piece and
//! records a [`Snapshot`] of the piece being left. Closing the scope builds
//! yet another piece from that snapshot. Snapshots live in an arena and
//! point at their own parent snapshot, so restoring through any depth of
//! nesting is an index walk, never a reference into the piece list.
//!
//! # Ordering
//!
//! A new piece normally goes to the end of the list. When the piece being
//! left is right-aligned, the new piece is inserted at that piece's index
//! instead, pushing it one slot later. Right-aligned content is drawn from
//! the right edge inwards, so later text must come earlier in the list.

use statbar_diagnostic::{Diagnostic, DiagnosticSink, ErrorCode, TracingSink};
use statbar_ir::{Align, Color, Piece, Span, Style};

use crate::tokenizer::{Token, TokenKind, Tokenizer};

/// Scan one line and return its non-empty pieces in rendering order.
///
/// Problems with directive arguments are reported to `sink`.
pub fn scan_line(line: &str, sink: impl DiagnosticSink) -> Vec<Piece> {
    Scanner::new(line, sink).run()
}

/// Scan one line, logging problems through `tracing`.
pub fn parse_line(line: &str) -> Vec<Piece> {
    scan_line(line, TracingSink::with_source(line))
}

/// Index of a [`Snapshot`] in the scanner's arena.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
struct SnapshotId(u32);

impl SnapshotId {
    #[inline]
    fn index(self) -> usize {
        self.0 as usize
    }
}

/// The state to return to when a directive scope closes.
#[derive(Clone, Debug)]
struct Snapshot {
    style: Style,
    origin: Option<SnapshotId>,
}

/// A piece under construction.
#[derive(Clone, Debug)]
struct Slot {
    /// Raw bytes; multi-byte characters arrive one byte per token.
    text: Vec<u8>,
    style: Style,
    /// Set when a directive opened this piece's scope.
    origin: Option<SnapshotId>,
}

impl Slot {
    fn root() -> Self {
        Slot {
            text: Vec::new(),
            style: Style::default(),
            origin: None,
        }
    }
}

/// Which color attribute a `{CF`/`{CB` directive sets.
#[derive(Copy, Clone, Debug)]
enum ColorTarget {
    Foreground,
    Background,
}

/// Single-use scanner over one line.
pub struct Scanner<'src, S> {
    tokens: Tokenizer<'src>,
    sink: S,
    slots: Vec<Slot>,
    snapshots: Vec<Snapshot>,
    current: usize,
    escaping: bool,
    screening: bool,
    bracket_depth: u32,
}

impl<'src, S: DiagnosticSink> Scanner<'src, S> {
    pub fn new(line: &'src str, sink: S) -> Self {
        Scanner {
            tokens: Tokenizer::new(line),
            sink,
            slots: vec![Slot::root()],
            snapshots: Vec::new(),
            current: 0,
            escaping: false,
            screening: false,
            bracket_depth: 0,
        }
    }

    /// Consume the line and return the non-empty pieces.
    pub fn run(mut self) -> Vec<Piece> {
        while let Ok(token) = self.tokens.next_token() {
            self.step(token);
        }
        self.slots
            .into_iter()
            .filter(|slot| !slot.text.is_empty())
            .map(|slot| Piece {
                text: String::from_utf8_lossy(&slot.text).into_owned(),
                style: slot.style,
            })
            .collect()
    }

    fn step(&mut self, token: Token<'src>) {
        if self.escaping {
            self.escaping = false;
            self.push_text(token.text);
            return;
        }
        match token.kind {
            TokenKind::Backslash => self.escaping = true,
            TokenKind::FontOpen => self.font_directive(token),
            TokenKind::ScreenOpen => self.screen_directive(token),
            TokenKind::ForegroundOpen => self.color_directive(token, ColorTarget::Foreground),
            TokenKind::BackgroundOpen => self.color_directive(token, ColorTarget::Background),
            TokenKind::AlignRight => self.enter(|style| style.align = Align::Right),
            TokenKind::LeftBrace => self.bracket_depth += 1,
            TokenKind::RightBrace => self.right_brace(token),
            TokenKind::Comma if self.screening => self.chained_screen(token),
            TokenKind::Comma
            | TokenKind::Color
            | TokenKind::Number
            | TokenKind::Char => self.push_text(token.text),
        }
    }

    // ─── Directives ─────────────────────────────────────────────

    fn font_directive(&mut self, open: Token<'src>) {
        let arg = self.tokens.next_token().ok();
        match arg.and_then(|t| parse_index(t.text)) {
            Some(font) => self.enter(|style| style.font = font),
            None => self.malformed(ErrorCode::M0001, open, arg, "expected a font index"),
        }
    }

    fn screen_directive(&mut self, open: Token<'src>) {
        let arg = self.tokens.next_token().ok();
        match arg.and_then(|t| parse_signed_index(t.text)) {
            Some((true, screen)) => self.enter(|style| style.not_screens.insert(screen)),
            Some((false, screen)) => self.enter(|style| style.screens.insert(screen)),
            None => {
                self.malformed(ErrorCode::M0002, open, arg, "expected a screen index");
                return;
            }
        }
        self.screening = true;
    }

    /// `,` while screening: one more screen for the current piece.
    ///
    /// A leading `-` is not honored here; the magnitude is always included.
    fn chained_screen(&mut self, comma: Token<'src>) {
        let arg = self.tokens.next_token().ok();
        match arg.and_then(|t| parse_signed_index(t.text)) {
            Some((_, screen)) => self.slots[self.current].style.screens.insert(screen),
            None => self.malformed(ErrorCode::M0002, comma, arg, "expected a screen index"),
        }
    }

    fn color_directive(&mut self, open: Token<'src>, target: ColorTarget) {
        let arg = self.tokens.next_token().ok();
        let color = arg
            .filter(|t| t.kind == TokenKind::Color)
            .and_then(|t| parse_color(t.text));
        match (color, target) {
            (Some(color), ColorTarget::Foreground) => {
                self.enter(|style| style.foreground = Some(color));
            }
            (Some(color), ColorTarget::Background) => {
                self.enter(|style| style.background = Some(color));
            }
            (None, _) => self.malformed(ErrorCode::M0003, open, arg, "expected 0xAARRGGBB"),
        }
    }

    /// Report a bad argument and keep the directive text as literal text.
    fn malformed(
        &mut self,
        code: ErrorCode,
        open: Token<'src>,
        arg: Option<Token<'src>>,
        label: &str,
    ) {
        let span = arg.map_or(open.span, |arg| open.span.merge(arg.span));
        let found = arg.map_or_else(
            || "end of line".to_string(),
            |arg| format!("`{}`", String::from_utf8_lossy(arg.text)),
        );
        self.sink.emit(
            Diagnostic::warning(code)
                .with_label(span, label)
                .with_note(format!("found {found}; the text was kept literally")),
        );
        self.push_text(open.text);
        if let Some(arg) = arg {
            self.push_text(arg.text);
        }
    }

    fn right_brace(&mut self, token: Token<'src>) {
        self.screening = false;
        if self.bracket_depth > 0 {
            self.bracket_depth -= 1;
            return;
        }
        match self.slots[self.current].origin {
            Some(origin) => self.leave(origin, token.span),
            None => self.push_text(token.text),
        }
    }

    // ─── Scope transitions ──────────────────────────────────────

    /// Open a directive scope whose style is the current one plus `apply`.
    fn enter(&mut self, apply: impl FnOnce(&mut Style)) {
        let leaving = &self.slots[self.current];
        let snapshot = Snapshot {
            style: leaving.style.clone(),
            origin: leaving.origin,
        };
        let mut style = leaving.style.clone();
        apply(&mut style);

        let id = SnapshotId(u32::try_from(self.snapshots.len()).unwrap_or(u32::MAX));
        self.snapshots.push(snapshot);
        tracing::debug!(depth = self.depth(Some(id)), ?style, "enter scope");
        self.place(Slot {
            text: Vec::new(),
            style,
            origin: Some(id),
        });
    }

    /// Close the current scope, restoring the snapshot taken on entry.
    fn leave(&mut self, origin: SnapshotId, at: Span) {
        let Some(snapshot) = self.snapshots.get(origin.index()) else {
            return;
        };
        let slot = Slot {
            text: Vec::new(),
            style: snapshot.style.clone(),
            origin: snapshot.origin,
        };
        tracing::debug!(depth = self.depth(slot.origin), %at, "leave scope");
        self.place(slot);
    }

    /// Insert a new current piece next to the piece being left.
    fn place(&mut self, slot: Slot) {
        if self.slots[self.current].style.align == Align::Right {
            // The new piece takes the old one's index.
            self.slots.insert(self.current, slot);
        } else {
            self.slots.push(slot);
            self.current = self.slots.len() - 1;
        }
    }

    /// Number of open directive scopes above a piece with this origin.
    fn depth(&self, mut origin: Option<SnapshotId>) -> usize {
        let mut depth = 0;
        while let Some(id) = origin {
            depth += 1;
            origin = self.snapshots.get(id.index()).and_then(|s| s.origin);
        }
        depth
    }

    fn push_text(&mut self, bytes: &[u8]) {
        self.slots[self.current].text.extend_from_slice(bytes);
    }
}

/// Parse an unsigned decimal index.
fn parse_index(text: &[u8]) -> Option<u32> {
    if text.is_empty() || !text.iter().all(u8::is_ascii_digit) {
        return None;
    }
    std::str::from_utf8(text).ok()?.parse().ok()
}

/// Parse `-?digits` into `(negative, magnitude)`.
fn parse_signed_index(text: &[u8]) -> Option<(bool, u32)> {
    match text.strip_prefix(b"-") {
        Some(magnitude) => parse_index(magnitude).map(|n| (true, n)),
        None => parse_index(text).map(|n| (false, n)),
    }
}

/// Parse a `0xAARRGGBB` literal.
fn parse_color(text: &[u8]) -> Option<Color> {
    let digits = text
        .strip_prefix(b"0x")
        .or_else(|| text.strip_prefix(b"0X"))?;
    let digits = std::str::from_utf8(digits).ok()?;
    u32::from_str_radix(digits, 16).ok().map(Color::from_argb)
}
