//! Text styling with attributes and colors.
//!
//! This module provides types for styling text in the terminal:
//!
//! - [`TextAttributes`]: Bitflags for bold, italic, underline, etc.
//! - [`Style`]: Colors plus attributes, the value carried by every grapheme
//! - [`StyleBuilder`]: Fluent builder for constructing styles
//! - [`Styled`]: Capability shared by everything that carries a replaceable style
//!
//! # Examples
//!
//! ```
//! use opentui_grapheme::{Rgba, Style, Styled, StyledGrapheme};
//!
//! let title_style = Style::fg(Rgba::WHITE).with_bold();
//! let highlight = Style::builder().fg(Rgba::RED).underline().build();
//!
//! let g = StyledGrapheme::new("a", title_style);
//! let restyled = g.set_style(highlight);
//! assert_eq!(g.style, title_style);
//! assert_eq!(restyled.style, highlight);
//! ```

use crate::color::Rgba;
use bitflags::bitflags;

bitflags! {
    /// Text rendering attributes (bold, italic, underline, etc.).
    ///
    /// Attributes are represented as bitflags and can be combined using
    /// bitwise OR. Not all terminals support all attributes.
    #[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
    pub struct TextAttributes: u8 {
        /// Bold/increased intensity.
        const BOLD          = 0x01;
        /// Dim/decreased intensity.
        const DIM           = 0x02;
        /// Italic (not widely supported).
        const ITALIC        = 0x04;
        /// Underlined text.
        const UNDERLINE     = 0x08;
        /// Blinking text (rarely supported).
        const BLINK         = 0x10;
        /// Swapped foreground/background.
        const INVERSE       = 0x20;
        /// Hidden/invisible text.
        const HIDDEN        = 0x40;
        /// Strikethrough text.
        const STRIKETHROUGH = 0x80;
    }
}

/// Complete text style: optional colors plus attributes.
///
/// Styles are immutable and cheap to copy. Use the builder methods to create
/// modified versions, or [`Style::merge`] to combine multiple styles.
///
/// # Default Values
///
/// `None` for colors means "use terminal default" rather than a specific color.
/// [`Style::default`] is [`Style::NONE`]: no style applied.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Style {
    /// Foreground color (None = terminal default).
    pub fg: Option<Rgba>,
    /// Background color (None = terminal default).
    pub bg: Option<Rgba>,
    /// Text rendering attributes.
    pub attributes: TextAttributes,
}

impl Style {
    /// Empty style with no colors or attributes.
    pub const NONE: Self = Self {
        fg: None,
        bg: None,
        attributes: TextAttributes::empty(),
    };

    /// Create a new style builder.
    #[must_use]
    pub fn builder() -> StyleBuilder {
        StyleBuilder::default()
    }

    /// Create a style with only foreground color.
    #[must_use]
    pub const fn fg(color: Rgba) -> Self {
        Self {
            fg: Some(color),
            ..Self::NONE
        }
    }

    /// Create a style with only background color.
    #[must_use]
    pub const fn bg(color: Rgba) -> Self {
        Self {
            bg: Some(color),
            ..Self::NONE
        }
    }

    /// Create a style with only the given attributes.
    #[must_use]
    pub const fn attrs(attributes: TextAttributes) -> Self {
        Self {
            attributes,
            ..Self::NONE
        }
    }

    /// Create a bold style.
    #[must_use]
    pub const fn bold() -> Self {
        Self::attrs(TextAttributes::BOLD)
    }

    /// Create an italic style.
    #[must_use]
    pub const fn italic() -> Self {
        Self::attrs(TextAttributes::ITALIC)
    }

    /// Return a new style with the specified foreground color.
    #[must_use]
    pub const fn with_fg(self, color: Rgba) -> Self {
        Self {
            fg: Some(color),
            ..self
        }
    }

    /// Return a new style with the specified background color.
    #[must_use]
    pub const fn with_bg(self, color: Rgba) -> Self {
        Self {
            bg: Some(color),
            ..self
        }
    }

    /// Return a new style with the specified attributes added.
    #[must_use]
    pub const fn with_attributes(self, attrs: TextAttributes) -> Self {
        Self {
            attributes: self.attributes.union(attrs),
            ..self
        }
    }

    /// Return a new style with the bold attribute added.
    #[must_use]
    pub const fn with_bold(self) -> Self {
        self.with_attributes(TextAttributes::BOLD)
    }

    /// Return a new style with the italic attribute added.
    #[must_use]
    pub const fn with_italic(self) -> Self {
        self.with_attributes(TextAttributes::ITALIC)
    }

    /// Check if this style has any non-default properties.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fg.is_none() && self.bg.is_none() && self.attributes.is_empty()
    }

    /// Merge two styles, with `other` taking precedence for set values.
    #[must_use]
    pub fn merge(self, other: Self) -> Self {
        Self {
            fg: other.fg.or(self.fg),
            bg: other.bg.or(self.bg),
            attributes: self.attributes | other.attributes,
        }
    }
}

/// Builder for creating styles fluently.
#[derive(Clone, Debug, Default)]
pub struct StyleBuilder {
    style: Style,
}

impl StyleBuilder {
    /// Set foreground color.
    #[must_use]
    pub fn fg(mut self, color: Rgba) -> Self {
        self.style.fg = Some(color);
        self
    }

    /// Set background color.
    #[must_use]
    pub fn bg(mut self, color: Rgba) -> Self {
        self.style.bg = Some(color);
        self
    }

    /// Add bold attribute.
    #[must_use]
    pub fn bold(mut self) -> Self {
        self.style.attributes |= TextAttributes::BOLD;
        self
    }

    /// Add italic attribute.
    #[must_use]
    pub fn italic(mut self) -> Self {
        self.style.attributes |= TextAttributes::ITALIC;
        self
    }

    /// Add underline attribute.
    #[must_use]
    pub fn underline(mut self) -> Self {
        self.style.attributes |= TextAttributes::UNDERLINE;
        self
    }

    /// Add hidden attribute.
    #[must_use]
    pub fn hidden(mut self) -> Self {
        self.style.attributes |= TextAttributes::HIDDEN;
        self
    }

    /// Build the final style.
    #[must_use]
    pub fn build(self) -> Style {
        self.style
    }
}

/// A value that carries a [`Style`] and can produce a copy with another one.
///
/// Implemented separately by each styled type (graphemes, spans, lines);
/// there is no shared base. `set_style` consumes the receiver and returns a
/// new value, so a caller holding the original (or a `Copy` of it) keeps
/// the old style.
pub trait Styled {
    /// The type produced by [`Styled::set_style`].
    type Item;

    /// The style currently carried by this value.
    fn style(&self) -> Style;

    /// Return this value with its style replaced by `style`.
    fn set_style(self, style: Style) -> Self::Item;
}
