//! Multi-line text, the generic renderable text type.

use std::borrow::Cow;

use crate::style::{Style, Styled};
use crate::text::Line;

/// A list of lines with a style applied under all of them.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Text<'a> {
    pub lines: Vec<Line<'a>>,
    pub style: Style,
}

impl<'a> Text<'a> {
    /// Create unstyled text, one [`Line`] per `\n`-separated row.
    ///
    /// The empty string yields a single empty line.
    pub fn raw(content: impl Into<Cow<'a, str>>) -> Self {
        let lines = match content.into() {
            Cow::Borrowed("") => vec![Line::raw("")],
            Cow::Borrowed(s) => s.lines().map(Line::raw).collect(),
            Cow::Owned(s) if s.is_empty() => vec![Line::raw("")],
            Cow::Owned(s) => s.lines().map(|l| Line::raw(l.to_owned())).collect(),
        };
        Self::from(lines)
    }

    /// Create unstyled lines with `style` applied under all of them.
    pub fn styled(content: impl Into<Cow<'a, str>>, style: Style) -> Self {
        Self::raw(content).set_style(style)
    }

    /// Number of lines.
    #[must_use]
    pub fn height(&self) -> usize {
        self.lines.len()
    }

    /// Width of the widest line in terminal columns.
    #[must_use]
    pub fn width(&self) -> usize {
        self.lines.iter().map(Line::width).max().unwrap_or(0)
    }
}

impl<'a> Styled for Text<'a> {
    type Item = Text<'a>;

    fn style(&self) -> Style {
        self.style
    }

    fn set_style(self, style: Style) -> Self::Item {
        Self { style, ..self }
    }
}

impl<'a> From<Vec<Line<'a>>> for Text<'a> {
    fn from(lines: Vec<Line<'a>>) -> Self {
        Self {
            lines,
            style: Style::NONE,
        }
    }
}

impl<'a> From<&'a str> for Text<'a> {
    fn from(s: &'a str) -> Self {
        Self::raw(s)
    }
}

impl From<String> for Text<'_> {
    fn from(s: String) -> Self {
        Self::raw(s)
    }
}
