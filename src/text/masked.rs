//! Masked text for secure display (password fields and the like).

use std::borrow::Cow;
use std::fmt;

use crate::text::Text;
use crate::unicode::grapheme_count;

/// A string whose every grapheme is displayed as the same mask character.
///
/// `Debug` and `Display` both print the masked value, so a `Masked` can be
/// logged or formatted without leaking its content. The real content is
/// only reachable through [`Masked::expose_secret`].
///
/// # Examples
///
/// ```
/// use opentui_grapheme::{Masked, Text};
///
/// let password = Masked::new("12345", 'x');
/// assert_eq!(password.value(), "xxxxx");
/// assert_eq!(format!("{password:?}"), "xxxxx");
///
/// let text = Text::from(&password);
/// assert_eq!(text.height(), 1);
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Masked<'a> {
    inner: Cow<'a, str>,
    mask_char: char,
}

impl<'a> Masked<'a> {
    /// Wrap `s`, to be displayed as one `mask_char` per grapheme.
    pub fn new(s: impl Into<Cow<'a, str>>, mask_char: char) -> Self {
        Self {
            inner: s.into(),
            mask_char,
        }
    }

    /// The character used for every masked position.
    #[must_use]
    pub const fn mask_char(&self) -> char {
        self.mask_char
    }

    /// The masked value: `mask_char` repeated once per grapheme cluster.
    ///
    /// Recomputed on every call.
    #[must_use]
    pub fn value(&self) -> Cow<'a, str> {
        let count = grapheme_count(&self.inner);
        let mut masked = String::with_capacity(count * self.mask_char.len_utf8());
        masked.extend(std::iter::repeat_n(self.mask_char, count));
        Cow::Owned(masked)
    }

    /// Number of grapheme clusters, which is also the length of [`Masked::value`].
    #[must_use]
    pub fn len(&self) -> usize {
        grapheme_count(&self.inner)
    }

    /// Whether the content is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// The unmasked content. Never route this to a log or a renderer.
    #[must_use]
    pub fn expose_secret(&self) -> &str {
        &self.inner
    }
}

impl fmt::Debug for Masked<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.value(), f)
    }
}

impl fmt::Display for Masked<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.value(), f)
    }
}

impl<'a> From<&'a Masked<'_>> for Cow<'a, str> {
    fn from(masked: &'a Masked<'_>) -> Cow<'a, str> {
        masked.value()
    }
}

impl<'a> From<Masked<'a>> for Cow<'a, str> {
    fn from(masked: Masked<'a>) -> Cow<'a, str> {
        masked.value()
    }
}

impl<'a> From<&'a Masked<'_>> for Text<'a> {
    fn from(masked: &'a Masked<'_>) -> Text<'a> {
        Text::raw(masked.value())
    }
}

impl<'a> From<Masked<'a>> for Text<'a> {
    fn from(masked: Masked<'a>) -> Text<'a> {
        Text::raw(masked.value())
    }
}
