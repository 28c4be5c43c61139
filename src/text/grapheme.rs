//! The styled grapheme: one renderable cell's worth of text.

use crate::style::{Style, Styled};
use crate::unicode::{display_width, is_whitespace_symbol};

/// A single grapheme cluster paired with the style it is drawn with.
///
/// Produced by flattening [`Span`](crate::Span)s and [`Line`](crate::Line)s,
/// consumed by [`Buffer::set_grapheme`](crate::Buffer::set_grapheme).
///
/// `symbol` is not validated: callers supply exactly one grapheme cluster
/// (or the empty string as a zero-column placeholder). Classification and
/// rendering never re-segment it.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct StyledGrapheme<'a> {
    pub symbol: &'a str,
    pub style: Style,
}

impl<'a> StyledGrapheme<'a> {
    /// Create a new styled grapheme.
    #[must_use]
    pub const fn new(symbol: &'a str, style: Style) -> Self {
        Self { symbol, style }
    }

    /// Create an unstyled grapheme.
    #[must_use]
    pub const fn plain(symbol: &'a str) -> Self {
        Self::new(symbol, Style::NONE)
    }

    /// Whether this grapheme is a break opportunity for wrapping and trimming.
    ///
    /// See [`is_whitespace_symbol`] for the rule: ZWSP is whitespace, NBSP
    /// is not, everything else defers to `char::is_whitespace`.
    #[must_use]
    pub fn is_whitespace(&self) -> bool {
        is_whitespace_symbol(self.symbol)
    }

    /// Display width in terminal columns under the global width method.
    ///
    /// Graphemes containing control characters (tab, line breaks) are 0:
    /// they never occupy a cell.
    #[must_use]
    pub fn width(&self) -> usize {
        if self.symbol.contains(char::is_control) {
            return 0;
        }
        display_width(self.symbol)
    }
}

impl<'a> Styled for StyledGrapheme<'a> {
    type Item = StyledGrapheme<'a>;

    fn style(&self) -> Style {
        self.style
    }

    fn set_style(self, style: Style) -> Self::Item {
        Self {
            symbol: self.symbol,
            style,
        }
    }
}

impl<'a> From<&'a str> for StyledGrapheme<'a> {
    fn from(symbol: &'a str) -> Self {
        Self::plain(symbol)
    }
}
