//! Global width method. Kept in its own binary: the setting is process-wide.

use opentui_grapheme::unicode::width_method;
use opentui_grapheme::{Buffer, Span, StyledGrapheme, WidthMethod, set_width_method};

#[test]
fn test_width_method_drives_grapheme_width_and_buffer_advance() {
    // U+2460 CIRCLED DIGIT ONE is East Asian ambiguous
    let circled = StyledGrapheme::plain("①");

    set_width_method(WidthMethod::Unicode);
    assert_eq!(width_method(), WidthMethod::Unicode);
    assert_eq!(circled.width(), 2);
    assert_eq!(Span::raw("①a").width(), 3);

    let mut buf = Buffer::new(3, 1).unwrap();
    assert_eq!(buf.set_grapheme(0, 0, &circled).unwrap(), 2);
    assert!(buf.get(1, 0).unwrap().is_continuation());

    set_width_method(WidthMethod::WcWidth);
    assert_eq!(width_method(), WidthMethod::WcWidth);
    assert_eq!(circled.width(), 1);

    let mut buf = Buffer::new(3, 1).unwrap();
    assert_eq!(buf.set_grapheme(0, 0, &circled).unwrap(), 1);
    assert!(!buf.get(1, 0).unwrap().is_continuation());
}
