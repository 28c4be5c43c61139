//! A run of text sharing one style.

use std::borrow::Cow;

use crate::style::{Style, Styled};
use crate::text::StyledGrapheme;
use crate::unicode::graphemes;

/// A string with a single style, the leaf of the text hierarchy.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Span<'a> {
    /// The text content.
    pub content: Cow<'a, str>,
    /// The style applied to every grapheme of `content`.
    pub style: Style,
}

impl<'a> Span<'a> {
    /// Create an unstyled span.
    pub fn raw(content: impl Into<Cow<'a, str>>) -> Self {
        Self {
            content: content.into(),
            style: Style::NONE,
        }
    }

    /// Create a span with the given style.
    pub fn styled(content: impl Into<Cow<'a, str>>, style: Style) -> Self {
        Self {
            content: content.into(),
            style,
        }
    }

    /// Display width of the content in terminal columns.
    ///
    /// Summed per grapheme, so it matches what a buffer advances when the
    /// span is drawn (control characters count 0).
    #[must_use]
    pub fn width(&self) -> usize {
        graphemes(&self.content)
            .map(|g| StyledGrapheme::plain(g).width())
            .sum()
    }

    /// Flatten into styled graphemes.
    ///
    /// Each grapheme's style is `base_style` patched with the span's own
    /// style. Line breaks are dropped; a span renders on a single row.
    pub fn styled_graphemes(
        &'a self,
        base_style: Style,
    ) -> impl Iterator<Item = StyledGrapheme<'a>> + 'a {
        let style = base_style.merge(self.style);
        graphemes(&self.content)
            .filter(|g| *g != "\n" && *g != "\r\n")
            .map(move |g| StyledGrapheme::new(g, style))
    }
}

impl<'a> Styled for Span<'a> {
    type Item = Span<'a>;

    fn style(&self) -> Style {
        self.style
    }

    fn set_style(self, style: Style) -> Self::Item {
        Self { style, ..self }
    }
}

impl<'a> From<&'a str> for Span<'a> {
    fn from(s: &'a str) -> Self {
        Self::raw(s)
    }
}

impl From<String> for Span<'_> {
    fn from(s: String) -> Self {
        Self::raw(s)
    }
}
