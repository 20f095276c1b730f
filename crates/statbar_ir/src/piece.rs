//! Styled text runs produced by the markup scanner.

use serde::Serialize;
use smallvec::SmallVec;

use crate::Color;

/// Which edge of the bar a piece is anchored to.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Align {
    #[default]
    Left,
    Right,
}

/// An insertion-ordered set of monitor indices.
///
/// Most lines name zero or one screen, so the inline capacity keeps
/// the common case allocation-free.
#[derive(Clone, Eq, PartialEq, Hash, Debug, Default, Serialize)]
#[serde(transparent)]
pub struct ScreenList(SmallVec<[u32; 4]>);

impl ScreenList {
    pub fn new() -> Self {
        ScreenList(SmallVec::new())
    }

    /// Add `screen` unless it is already present.
    pub fn insert(&mut self, screen: u32) {
        if !self.contains(screen) {
            self.0.push(screen);
        }
    }

    pub fn contains(&self, screen: u32) -> bool {
        self.0.contains(&screen)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = u32> + '_ {
        self.0.iter().copied()
    }
}

impl FromIterator<u32> for ScreenList {
    fn from_iter<I: IntoIterator<Item = u32>>(iter: I) -> Self {
        let mut list = ScreenList::new();
        for screen in iter {
            list.insert(screen);
        }
        list
    }
}

impl<const N: usize> From<[u32; N]> for ScreenList {
    fn from(screens: [u32; N]) -> Self {
        screens.into_iter().collect()
    }
}

/// The attribute set shared by every character of a piece.
///
/// Opening a directive scope copies the enclosing style and changes one
/// attribute; closing the scope restores the copy taken on entry.
#[derive(Clone, Eq, PartialEq, Hash, Debug, Default, Serialize)]
pub struct Style {
    /// Index into the renderer's font list.
    pub font: u32,
    pub align: Align,
    /// `None` inherits the renderer's default foreground.
    pub foreground: Option<Color>,
    /// `None` inherits the renderer's default background.
    pub background: Option<Color>,
    /// Screens to render on. Empty means every screen not excluded.
    pub screens: ScreenList,
    /// Screens never to render on.
    pub not_screens: ScreenList,
}

impl Style {
    #[must_use]
    pub fn with_font(mut self, font: u32) -> Self {
        self.font = font;
        self
    }

    #[must_use]
    pub fn with_align(mut self, align: Align) -> Self {
        self.align = align;
        self
    }

    #[must_use]
    pub fn with_foreground(mut self, color: Color) -> Self {
        self.foreground = Some(color);
        self
    }

    #[must_use]
    pub fn with_background(mut self, color: Color) -> Self {
        self.background = Some(color);
        self
    }

    #[must_use]
    pub fn with_screens(mut self, screens: impl Into<ScreenList>) -> Self {
        self.screens = screens.into();
        self
    }

    #[must_use]
    pub fn with_not_screens(mut self, screens: impl Into<ScreenList>) -> Self {
        self.not_screens = screens.into();
        self
    }

    /// Whether this piece should be drawn on `screen`.
    ///
    /// Does not check that `screen` exists; that is up to the caller.
    pub fn shows_on(&self, screen: u32) -> bool {
        if self.not_screens.contains(screen) {
            return false;
        }
        self.screens.is_empty() || self.screens.contains(screen)
    }
}

/// One contiguous run of text with a single [`Style`].
#[derive(Clone, Eq, PartialEq, Hash, Debug, Default, Serialize)]
pub struct Piece {
    pub text: String,
    #[serde(flatten)]
    pub style: Style,
}

impl Piece {
    /// A piece with the default style.
    pub fn plain(text: impl Into<String>) -> Self {
        Piece {
            text: text.into(),
            style: Style::default(),
        }
    }

    pub fn styled(text: impl Into<String>, style: Style) -> Self {
        Piece {
            text: text.into(),
            style,
        }
    }
}
