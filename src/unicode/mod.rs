//! Unicode utilities for grapheme handling and display width.

mod grapheme;
mod width;

pub use grapheme::{
    GraphemeIterator, NBSP, ZWSP, grapheme_count, graphemes, is_whitespace_symbol,
};
pub use width::{
    WidthMethod, display_width, display_width_with_method, set_width_method, width_method,
};
