//! Grapheme cluster iteration and whitespace classification.

use unicode_segmentation::UnicodeSegmentation;

/// Zero-width space. Renders as nothing but is a break opportunity.
pub const ZWSP: &str = "\u{200b}";

/// Non-breaking space. Looks like a space but never allows a break.
pub const NBSP: &str = "\u{00a0}";

/// Iterator over grapheme clusters in a string.
pub struct GraphemeIterator<'a> {
    inner: unicode_segmentation::Graphemes<'a>,
}

impl<'a> Iterator for GraphemeIterator<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl DoubleEndedIterator for GraphemeIterator<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

/// Iterate over extended grapheme clusters in a string.
#[must_use]
pub fn graphemes(s: &str) -> GraphemeIterator<'_> {
    GraphemeIterator {
        inner: s.graphemes(true),
    }
}

/// Number of extended grapheme clusters (user-perceived characters) in `s`.
///
/// ASCII strings skip segmentation: every byte is its own cluster except
/// `"\r\n"`, which UAX #29 keeps together.
#[must_use]
pub fn grapheme_count(s: &str) -> usize {
    if s.is_ascii() {
        return s.len() - s.matches("\r\n").count();
    }
    graphemes(s).count()
}

/// Classify a grapheme symbol as whitespace for wrapping and trimming.
///
/// [`ZWSP`] counts as whitespace. [`NBSP`] does not, even though
/// `char::is_whitespace` accepts it. Anything else is whitespace when every
/// char in it is; the empty symbol is therefore whitespace.
///
/// Other no-break separators (U+2007, U+202F) are not special-cased.
#[must_use]
pub fn is_whitespace_symbol(symbol: &str) -> bool {
    symbol == ZWSP || symbol.chars().all(char::is_whitespace) && symbol != NBSP
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_graphemes_ascii() {
        let g: Vec<_> = graphemes("hello").collect();
        assert_eq!(g, vec!["h", "e", "l", "l", "o"]);
    }

    #[test]
    fn test_graphemes_emoji() {
        // Family emoji (ZWJ sequence)
        assert_eq!(graphemes("👨‍👩‍👧").count(), 1);
        assert_eq!(grapheme_count("👨‍👩‍👧"), 1);
    }

    #[test]
    fn test_graphemes_combining() {
        // e + combining acute accent
        assert_eq!(grapheme_count("e\u{0301}"), 1);
        assert_eq!("e\u{0301}".chars().count(), 2);
    }

    #[test]
    fn test_grapheme_count_ascii_fast_path_matches_segmenter() {
        for s in ["", "abc", "a\r\nb", "\r\n\r\n", "\n\r", "\r\r\n"] {
            assert_eq!(grapheme_count(s), s.graphemes(true).count(), "{s:?}");
        }
    }

    #[test]
    fn test_graphemes_reverse() {
        let g: Vec<_> = graphemes("ab🇺🇸").rev().collect();
        assert_eq!(g, vec!["🇺🇸", "b", "a"]);
    }

    #[test]
    fn test_zwsp_is_whitespace() {
        assert!(is_whitespace_symbol(ZWSP));
        // not whitespace according to std
        assert!(!'\u{200b}'.is_whitespace());
    }

    #[test]
    fn test_nbsp_is_not_whitespace() {
        assert!(!is_whitespace_symbol(NBSP));
        assert!('\u{00a0}'.is_whitespace());
    }

    #[test]
    fn test_ordinary_whitespace() {
        for ws in [" ", "\t", "\n", "\r\n", "\u{3000}", "  "] {
            assert!(is_whitespace_symbol(ws), "{ws:?}");
        }
        for not_ws in ["a", " a", "\u{00a0}", "é", "😀"] {
            assert!(!is_whitespace_symbol(not_ws), "{not_ws:?}");
        }
    }

    #[test]
    fn test_empty_symbol_is_whitespace() {
        assert!(is_whitespace_symbol(""));
    }

    #[test]
    fn test_other_no_break_spaces_are_not_special() {
        // figure space and narrow no-break space fall through to std
        assert_eq!(is_whitespace_symbol("\u{2007}"), '\u{2007}'.is_whitespace());
        assert_eq!(is_whitespace_symbol("\u{202f}"), '\u{202f}'.is_whitespace());
    }
}
