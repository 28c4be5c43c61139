//! A single row of spans.

use std::borrow::Cow;

use crate::style::{Style, Styled};
use crate::text::{Span, StyledGrapheme};

/// A sequence of spans rendered on one row, with a style applied under them.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Line<'a> {
    pub spans: Vec<Span<'a>>,
    pub style: Style,
}

impl<'a> Line<'a> {
    /// Create a line from one unstyled span.
    pub fn raw(content: impl Into<Cow<'a, str>>) -> Self {
        Self {
            spans: vec![Span::raw(content)],
            style: Style::NONE,
        }
    }

    /// Create a line from one span carrying `style`.
    pub fn styled(content: impl Into<Cow<'a, str>>, style: Style) -> Self {
        Self {
            spans: vec![Span::styled(content, style)],
            style: Style::NONE,
        }
    }

    /// Display width of all spans in terminal columns.
    #[must_use]
    pub fn width(&self) -> usize {
        self.spans.iter().map(Span::width).sum()
    }

    /// Flatten into styled graphemes.
    ///
    /// Styles layer as `base_style`, then the line style, then each span's style.
    pub fn styled_graphemes(
        &'a self,
        base_style: Style,
    ) -> impl Iterator<Item = StyledGrapheme<'a>> + 'a {
        let style = base_style.merge(self.style);
        self.spans
            .iter()
            .flat_map(move |span| span.styled_graphemes(style))
    }
}

impl<'a> Styled for Line<'a> {
    type Item = Line<'a>;

    fn style(&self) -> Style {
        self.style
    }

    fn set_style(self, style: Style) -> Self::Item {
        Self { style, ..self }
    }
}

impl<'a> From<Vec<Span<'a>>> for Line<'a> {
    fn from(spans: Vec<Span<'a>>) -> Self {
        Self {
            spans,
            style: Style::NONE,
        }
    }
}

impl<'a> From<Span<'a>> for Line<'a> {
    fn from(span: Span<'a>) -> Self {
        Self::from(vec![span])
    }
}

impl<'a> From<&'a str> for Line<'a> {
    fn from(s: &'a str) -> Self {
        Self::raw(s)
    }
}

impl From<String> for Line<'_> {
    fn from(s: String) -> Self {
        Self::raw(s)
    }
}
