//! Error types for the rendering surface and color parsing.
//!
//! The grapheme and masking types never fail; errors only come from the
//! seams where values are validated against a grid or parsed from text.

use std::fmt;

/// Result type alias for crate operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for crate operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Invalid color format (e.g., malformed hex string).
    InvalidColor(String),
    /// Buffer dimension error (e.g., zero width/height).
    InvalidDimensions { width: u32, height: u32 },
    /// Position out of bounds.
    OutOfBounds {
        x: u32,
        y: u32,
        width: u32,
        height: u32,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidColor(s) => write!(f, "invalid color format: {s}"),
            Self::InvalidDimensions { width, height } => {
                write!(f, "invalid dimensions: {width}x{height}")
            }
            Self::OutOfBounds {
                x,
                y,
                width,
                height,
            } => {
                write!(
                    f,
                    "position ({x}, {y}) out of bounds for {width}x{height} buffer"
                )
            }
        }
    }
}

impl std::error::Error for Error {}
