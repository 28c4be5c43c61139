//! Cell-based frame buffer, the surface styled graphemes are written to.
//!
//! [`Buffer`] is a 2D grid of [`Cell`]s. It consumes [`StyledGrapheme`]s one
//! at a time and higher-level text through the drawing helpers:
//!
//! - [`Buffer::set_grapheme`]: one grapheme, with wide-char continuations
//! - [`Buffer::set_line`] / [`Buffer::set_text`]: flattened text, clipped
//! - [`Buffer::set_masked`]: a [`Masked`] secret, never its real content
//!
//! # Examples
//!
//! ```
//! use opentui_grapheme::{Buffer, Line, Masked, Style};
//!
//! let mut buf = Buffer::new(10, 2).unwrap();
//! buf.set_line(0, 0, &Line::raw("user"), 10).unwrap();
//! buf.set_masked(0, 1, &Masked::new("hunter2", '*'), Style::NONE, 10).unwrap();
//!
//! assert_eq!(buf.to_plain_lines(), vec!["user      ", "*******   "]);
//! ```

mod drawing;

use crate::cell::Cell;
use crate::error::{Error, Result};
use crate::event::{LogLevel, emit_log};
use crate::style::Style;
use crate::text::{Line, Masked, StyledGrapheme, Text};

/// Grid of cells that styled graphemes are written into.
///
/// # Coordinate System
///
/// Coordinates are (x, y) where (0, 0) is the top-left corner. X increases
/// to the right, Y increases downward.
#[derive(Clone, Debug, PartialEq)]
pub struct Buffer {
    width: u32,
    height: u32,
    cells: Vec<Cell>,
}

impl Buffer {
    /// Create a blank buffer. Both dimensions must be non-zero.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimensions { width, height });
        }
        let size = (width as usize).saturating_mul(height as usize);
        Ok(Self {
            width,
            height,
            cells: vec![Cell::default(); size],
        })
    }

    /// Get buffer width.
    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Get buffer height.
    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    fn cell_index(&self, x: u32, y: u32) -> Option<usize> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let row_offset = (y as usize).checked_mul(self.width as usize)?;
        let idx = row_offset.checked_add(x as usize)?;
        (idx < self.cells.len()).then_some(idx)
    }

    fn checked_index(&self, x: u32, y: u32) -> Result<usize> {
        self.cell_index(x, y).ok_or(Error::OutOfBounds {
            x,
            y,
            width: self.width,
            height: self.height,
        })
    }

    /// Get cell at position.
    #[must_use]
    pub fn get(&self, x: u32, y: u32) -> Option<&Cell> {
        self.cell_index(x, y).map(|idx| &self.cells[idx])
    }

    /// All cells in row-major order.
    #[must_use]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Write one styled grapheme at `(x, y)`.
    ///
    /// Returns the number of columns advanced. A wide grapheme fills its
    /// first cell and turns the following ones into continuations.
    /// Zero-width graphemes (including control characters) occupy no cell
    /// and advance 0. Wide graphemes partly covered by the write are blanked.
    /// A grapheme that would cross the right edge is not written and also
    /// advances 0.
    pub fn set_grapheme(&mut self, x: u32, y: u32, grapheme: &StyledGrapheme<'_>) -> Result<u32> {
        let idx = self.checked_index(x, y)?;

        let width = grapheme.width() as u32;
        if width == 0 {
            return Ok(0);
        }
        if x.saturating_add(width) > self.width {
            emit_log(
                LogLevel::Debug,
                &format!("clipped grapheme of width {width} at ({x}, {y})"),
            );
            return Ok(0);
        }

        self.blank_wide_overlap(x, y, width);

        let cell = Cell::from_grapheme(grapheme);
        let bg = cell.bg;
        self.cells[idx] = cell;
        for offset in 1..width as usize {
            self.cells[idx + offset] = Cell::continuation(bg);
        }
        Ok(width)
    }

    /// Blank the parts of wide graphemes that `[x, x + width)` would split.
    ///
    /// A continuation at `x` loses its head to the left; continuations right
    /// after the range lose the head being overwritten.
    fn blank_wide_overlap(&mut self, x: u32, y: u32, width: u32) {
        let row = y as usize * self.width as usize;
        let row_width = self.width as usize;

        if self.cells[row + x as usize].is_continuation() {
            let mut col = x as usize;
            while col > 0 {
                col -= 1;
                let was_continuation = self.cells[row + col].is_continuation();
                self.cells[row + col].reset();
                if !was_continuation {
                    break;
                }
            }
        }

        let mut col = (x + width) as usize;
        while col < row_width && self.cells[row + col].is_continuation() {
            self.cells[row + col].reset();
            col += 1;
        }
    }

    /// Write a line at `(x, y)`, using at most `max_width` columns.
    ///
    /// Returns the number of columns used.
    pub fn set_line(&mut self, x: u32, y: u32, line: &Line<'_>, max_width: u32) -> Result<u32> {
        drawing::draw_line(self, x, y, line, Style::NONE, max_width)
    }

    /// Write text starting at `(x, y)`, one line per row.
    ///
    /// Lines past the bottom edge are dropped. Returns the number of rows
    /// written.
    pub fn set_text(&mut self, x: u32, y: u32, text: &Text<'_>, max_width: u32) -> Result<u32> {
        drawing::draw_text(self, x, y, text, max_width)
    }

    /// Write the masked value of `masked` at `(x, y)` with `style`.
    ///
    /// Returns the number of columns used.
    pub fn set_masked(
        &mut self,
        x: u32,
        y: u32,
        masked: &Masked<'_>,
        style: Style,
        max_width: u32,
    ) -> Result<u32> {
        drawing::draw_masked(self, x, y, masked, style, max_width)
    }

    /// Reset every cell to blank.
    pub fn clear(&mut self) {
        self.cells.iter_mut().for_each(Cell::reset);
    }

    /// Row contents as plain strings, continuation cells skipped.
    #[must_use]
    pub fn to_plain_lines(&self) -> Vec<String> {
        self.cells
            .chunks(self.width as usize)
            .map(|row| row.iter().map(|cell| cell.symbol.as_str()).collect())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Rgba;

    #[test]
    fn test_new_rejects_zero_dimensions() {
        assert_eq!(
            Buffer::new(0, 3),
            Err(Error::InvalidDimensions {
                width: 0,
                height: 3
            })
        );
        assert!(Buffer::new(3, 0).is_err());
    }

    #[test]
    fn test_set_grapheme() {
        let mut buf = Buffer::new(4, 1).unwrap();
        let advanced = buf
            .set_grapheme(1, 0, &StyledGrapheme::new("a", Style::fg(Rgba::RED)))
            .unwrap();

        assert_eq!(advanced, 1);
        let cell = buf.get(1, 0).unwrap();
        assert_eq!(cell.symbol, "a");
        assert_eq!(cell.fg, Rgba::RED);
    }

    #[test]
    fn test_set_grapheme_out_of_bounds() {
        let mut buf = Buffer::new(4, 2).unwrap();
        let err = buf.set_grapheme(4, 0, &StyledGrapheme::plain("a")).unwrap_err();
        assert_eq!(
            err,
            Error::OutOfBounds {
                x: 4,
                y: 0,
                width: 4,
                height: 2
            }
        );
        assert!(buf.set_grapheme(0, 2, &StyledGrapheme::plain("a")).is_err());
    }

    #[test]
    fn test_wide_grapheme_writes_continuation() {
        let mut buf = Buffer::new(4, 1).unwrap();
        let style = Style::bg(Rgba::BLUE);
        let advanced = buf.set_grapheme(0, 0, &StyledGrapheme::new("漢", style)).unwrap();

        assert_eq!(advanced, 2);
        assert!(buf.get(1, 0).unwrap().is_continuation());
        assert_eq!(buf.get(1, 0).unwrap().bg, Rgba::BLUE);
        assert_eq!(buf.to_plain_lines(), vec!["漢  "]);
    }

    #[test]
    fn test_wide_grapheme_at_edge_is_clipped() {
        let mut buf = Buffer::new(3, 1).unwrap();
        let advanced = buf.set_grapheme(2, 0, &StyledGrapheme::plain("漢")).unwrap();
        assert_eq!(advanced, 0);
        assert_eq!(buf.get(2, 0).unwrap(), &Cell::default());
    }

    #[test]
    fn test_zero_width_and_control_graphemes_take_no_cell() {
        let mut buf = Buffer::new(3, 1).unwrap();
        assert_eq!(buf.set_grapheme(0, 0, &StyledGrapheme::plain("\u{200b}")).unwrap(), 0);
        assert_eq!(buf.set_grapheme(0, 0, &StyledGrapheme::plain("")).unwrap(), 0);
        assert_eq!(buf.set_grapheme(0, 0, &StyledGrapheme::plain("\t")).unwrap(), 0);
        assert_eq!(buf, Buffer::new(3, 1).unwrap());
    }

    #[test]
    fn test_overwrite_continuation_blanks_wide_head() {
        let mut buf = Buffer::new(3, 1).unwrap();
        buf.set_grapheme(0, 0, &StyledGrapheme::plain("漢")).unwrap();
        buf.set_grapheme(1, 0, &StyledGrapheme::plain("a")).unwrap();

        assert_eq!(buf.to_plain_lines(), vec![" a "]);
        assert!(buf.cells().iter().all(|c| c.display_width() == 1));
    }

    #[test]
    fn test_overwrite_wide_head_blanks_continuation() {
        let mut buf = Buffer::new(3, 1).unwrap();
        buf.set_grapheme(0, 0, &StyledGrapheme::plain("漢")).unwrap();
        buf.set_grapheme(0, 0, &StyledGrapheme::plain("a")).unwrap();

        assert_eq!(buf.to_plain_lines(), vec!["a  "]);
        assert!(!buf.get(1, 0).unwrap().is_continuation());
    }

    #[test]
    fn test_wide_over_shifted_wide() {
        let mut buf = Buffer::new(4, 1).unwrap();
        buf.set_grapheme(1, 0, &StyledGrapheme::plain("漢")).unwrap();
        buf.set_grapheme(0, 0, &StyledGrapheme::plain("字")).unwrap();

        assert_eq!(buf.to_plain_lines(), vec!["字  "]);
        let row_width: usize = buf.cells().iter().map(Cell::display_width).sum();
        assert_eq!(row_width, 4);
    }

    #[test]
    fn test_advance_matches_grapheme_width() {
        let mut buf = Buffer::new(4, 1).unwrap();
        for symbol in ["a", "漢", "\t", "\u{200b}", "", "\u{00a0}"] {
            let grapheme = StyledGrapheme::plain(symbol);
            let advanced = buf.set_grapheme(0, 0, &grapheme).unwrap();
            assert_eq!(advanced as usize, grapheme.width(), "{symbol:?}");
        }
    }

    #[test]
    fn test_clear() {
        let mut buf = Buffer::new(2, 1).unwrap();
        buf.set_grapheme(0, 0, &StyledGrapheme::plain("x")).unwrap();
        buf.clear();
        assert_eq!(buf.to_plain_lines(), vec!["  "]);
    }
}
