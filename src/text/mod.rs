//! Styled text, from multi-line [`Text`] down to single [`StyledGrapheme`]s.
//!
//! Key types:
//!
//! - [`StyledGrapheme`]: one grapheme cluster plus its style, written per cell
//! - [`Masked`]: a secret shown as one mask character per grapheme
//! - [`Span`], [`Line`], [`Text`]: the hierarchy that flattens into graphemes
//!
//! # Examples
//!
//! ```
//! use opentui_grapheme::{Line, Span, Style, Rgba};
//!
//! let line = Line::from(vec![
//!     Span::raw("user: "),
//!     Span::styled("alice", Style::fg(Rgba::GREEN)),
//! ]);
//!
//! let symbols: String = line
//!     .styled_graphemes(Style::NONE)
//!     .map(|g| g.symbol)
//!     .collect();
//! assert_eq!(symbols, "user: alice");
//! ```

mod grapheme;
mod line;
mod masked;
mod span;
#[allow(clippy::module_inception)]
mod text;

pub use grapheme::StyledGrapheme;
pub use line::Line;
pub use masked::Masked;
pub use span::Span;
pub use text::Text;
