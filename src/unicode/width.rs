//! Display width calculation for terminal rendering.

use std::sync::atomic::{AtomicU8, Ordering};
use unicode_width::UnicodeWidthStr;

/// Width calculation method for ambiguous-width characters.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum WidthMethod {
    /// POSIX-like wcwidth: ambiguous width = 1.
    #[default]
    WcWidth,
    /// Unicode East Asian Width: ambiguous width = 2.
    Unicode,
}

const WIDTH_METHOD_WCWIDTH: u8 = 0;
const WIDTH_METHOD_UNICODE: u8 = 1;

static WIDTH_METHOD: AtomicU8 = AtomicU8::new(WIDTH_METHOD_WCWIDTH);

/// Set the global width method used by `display_width` helpers.
pub fn set_width_method(method: WidthMethod) {
    let value = match method {
        WidthMethod::WcWidth => WIDTH_METHOD_WCWIDTH,
        WidthMethod::Unicode => WIDTH_METHOD_UNICODE,
    };
    WIDTH_METHOD.store(value, Ordering::Relaxed);
}

/// Get the global width method.
#[must_use]
pub fn width_method() -> WidthMethod {
    match WIDTH_METHOD.load(Ordering::Relaxed) {
        WIDTH_METHOD_UNICODE => WidthMethod::Unicode,
        _ => WidthMethod::WcWidth,
    }
}

/// Get the display width of a string in terminal columns (global method).
#[must_use]
pub fn display_width(s: &str) -> usize {
    display_width_with_method(s, width_method())
}

/// Get the display width of a string in terminal columns using a specific method.
#[must_use]
pub fn display_width_with_method(s: &str, method: WidthMethod) -> usize {
    match method {
        WidthMethod::WcWidth => UnicodeWidthStr::width(s),
        WidthMethod::Unicode => UnicodeWidthStr::width_cjk(s),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ascii_width() {
        assert_eq!(display_width_with_method("hello", WidthMethod::WcWidth), 5);
        assert_eq!(display_width_with_method("a", WidthMethod::Unicode), 1);
    }

    #[test]
    fn test_cjk_width() {
        assert_eq!(display_width_with_method("漢字", WidthMethod::WcWidth), 4);
        assert_eq!(display_width_with_method("漢", WidthMethod::Unicode), 2);
    }

    #[test]
    fn test_zero_width_space_has_no_columns() {
        assert_eq!(display_width_with_method("\u{200b}", WidthMethod::WcWidth), 0);
        assert_eq!(display_width_with_method("\u{00a0}", WidthMethod::WcWidth), 1);
    }

    #[test]
    fn test_width_methods() {
        // Circled digit one (U+2460) is East Asian ambiguous
        assert_eq!(display_width_with_method("①", WidthMethod::WcWidth), 1);
        assert_eq!(display_width_with_method("①", WidthMethod::Unicode), 2);
    }
}
