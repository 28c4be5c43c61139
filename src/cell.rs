//! Terminal cell type representing a single character position.
//!
//! A terminal display is a grid of cells, where each cell holds one grapheme
//! cluster along with styling information. A [`StyledGrapheme`] maps onto a
//! cell through [`Cell::from_grapheme`].
//!
//! # Wide Characters
//!
//! Some graphemes (CJK, emoji) have display width 2. When one is placed in a
//! cell, the following cell becomes a continuation (empty symbol) to mark
//! that it is covered by the previous one.
//!
//! # Examples
//!
//! ```
//! use opentui_grapheme::{Cell, Rgba, Style, StyledGrapheme};
//!
//! let cell = Cell::from_grapheme(&StyledGrapheme::new("👍", Style::fg(Rgba::GREEN)));
//! assert_eq!(cell.display_width(), 2);
//! assert_eq!(cell.fg, Rgba::GREEN);
//! ```

use crate::color::Rgba;
use crate::style::{Style, TextAttributes};
use crate::text::StyledGrapheme;
use crate::unicode::display_width;

/// A single terminal cell with content and styling.
#[derive(Clone, Debug, PartialEq)]
pub struct Cell {
    /// The grapheme drawn in this cell. Empty for continuation cells.
    pub symbol: String,
    /// Foreground color.
    pub fg: Rgba,
    /// Background color.
    pub bg: Rgba,
    /// Text rendering attributes.
    pub attributes: TextAttributes,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            symbol: " ".to_string(),
            fg: Rgba::WHITE,
            bg: Rgba::TRANSPARENT,
            attributes: TextAttributes::empty(),
        }
    }
}

impl Cell {
    /// Create a cell holding a styled grapheme.
    ///
    /// Unset style colors fall back to white on transparent.
    #[must_use]
    pub fn from_grapheme(grapheme: &StyledGrapheme<'_>) -> Self {
        let style = grapheme.style;
        Self {
            symbol: grapheme.symbol.to_string(),
            fg: style.fg.unwrap_or(Rgba::WHITE),
            bg: style.bg.unwrap_or(Rgba::TRANSPARENT),
            attributes: style.attributes,
        }
    }

    /// Create a continuation cell (placeholder behind a wide grapheme).
    #[must_use]
    pub fn continuation(bg: Rgba) -> Self {
        Self {
            symbol: String::new(),
            bg,
            ..Self::default()
        }
    }

    /// Apply a style: set colors override, attributes accumulate.
    pub fn set_style(&mut self, style: Style) {
        if let Some(fg) = style.fg {
            self.fg = fg;
        }
        if let Some(bg) = style.bg {
            self.bg = bg;
        }
        self.attributes |= style.attributes;
    }

    /// Reset to a blank cell.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Get the display width of this cell.
    #[must_use]
    pub fn display_width(&self) -> usize {
        display_width(&self.symbol)
    }

    /// Check if this is a continuation cell.
    #[must_use]
    pub fn is_continuation(&self) -> bool {
        self.symbol.is_empty()
    }
}
