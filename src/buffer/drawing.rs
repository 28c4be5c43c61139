//! Text drawing operations.

use crate::buffer::Buffer;
use crate::error::Result;
use crate::style::{Style, Styled};
use crate::text::{Line, Masked, Text};

/// Draw a line at position, flattening it into styled graphemes.
///
/// `(x, y)` must lie inside the buffer. Stops at the first grapheme that
/// would exceed `max_width` columns or the right edge of the buffer.
/// Returns the number of columns used.
pub fn draw_line(
    buffer: &mut Buffer,
    x: u32,
    y: u32,
    line: &Line<'_>,
    base_style: Style,
    max_width: u32,
) -> Result<u32> {
    buffer.checked_index(x, y)?;
    let max_width = max_width.min(buffer.width().saturating_sub(x));
    let mut used = 0u32;

    for grapheme in line.styled_graphemes(base_style) {
        if used + grapheme.width() as u32 > max_width {
            break;
        }
        used += buffer.set_grapheme(x + used, y, &grapheme)?;
    }

    Ok(used)
}

/// Draw multi-line text, one line per row, with the text style underneath.
///
/// Returns the number of rows written.
pub fn draw_text(
    buffer: &mut Buffer,
    x: u32,
    y: u32,
    text: &Text<'_>,
    max_width: u32,
) -> Result<u32> {
    let rows = buffer.height().saturating_sub(y);
    let mut written = 0u32;

    for line in text.lines.iter().take(rows as usize) {
        draw_line(buffer, x, y + written, line, text.style(), max_width)?;
        written += 1;
    }

    Ok(written)
}

/// Draw the masked value of a secret on one row.
///
/// Goes through the generic [`Text`] conversion, so only the masked value
/// reaches the cells. Returns the number of columns used.
pub fn draw_masked(
    buffer: &mut Buffer,
    x: u32,
    y: u32,
    masked: &Masked<'_>,
    style: Style,
    max_width: u32,
) -> Result<u32> {
    let text = Text::from(masked).set_style(style);
    match text.lines.first() {
        Some(line) => draw_line(buffer, x, y, line, text.style(), max_width),
        None => Ok(0),
    }
}
