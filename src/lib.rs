//! Grapheme-level styled text for terminal UI rendering.
//!
//! The smallest unit of displayable text is a [`StyledGrapheme`]: one
//! grapheme cluster and the [`Style`] it is drawn with. Text flattens into
//! styled graphemes, and a [`Buffer`] writes each one into a cell.
//!
//! [`Masked`] wraps a secret (a password, a token) so that every display
//! and formatting path shows one mask character per grapheme instead.
//!
//! ```
//! use opentui_grapheme::{Masked, Style, StyledGrapheme, Styled};
//!
//! assert!(StyledGrapheme::plain("\u{200b}").is_whitespace());
//! assert!(!StyledGrapheme::plain("\u{00a0}").is_whitespace());
//!
//! let g = StyledGrapheme::plain("a").set_style(Style::bold());
//! assert_eq!(g.style, Style::bold());
//!
//! assert_eq!(Masked::new("12345", 'x').value(), "xxxxx");
//! ```

// Crate-level lint configuration
#![forbid(unsafe_code)]
#![allow(clippy::cast_possible_truncation)] // Intentional width/coordinate casts
#![allow(clippy::module_name_repetitions)] // Allow style::StyleBuilder etc
#![allow(clippy::must_use_candidate)] // Not every accessor needs #[must_use]
#![allow(clippy::missing_errors_doc)] // Error variants are self-describing
#![allow(clippy::doc_markdown)] // Allow technical names without backticks
#![allow(clippy::use_self)] // Allow explicit type names in impl blocks
#![allow(clippy::needless_pass_by_value)] // Allow pass by value for small Copy types
#![allow(clippy::collapsible_if)] // Sometimes nested ifs are clearer

pub mod buffer;
pub mod cell;
pub mod color;
pub mod error;
pub mod event;
pub mod style;
pub mod text;
pub mod unicode;

// Re-export core types at crate root
pub use buffer::Buffer;
pub use cell::Cell;
pub use color::Rgba;
pub use error::{Error, Result};
pub use event::{LogLevel, clear_log_callback, emit_log, set_log_callback};
pub use style::{Style, StyleBuilder, Styled, TextAttributes};
pub use text::{Line, Masked, Span, StyledGrapheme, Text};
pub use unicode::{WidthMethod, set_width_method};
