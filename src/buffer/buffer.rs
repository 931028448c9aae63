//! Buffer: The frame the dashboard draws into.
//!
//! Cells are stored row-major in one contiguous `Vec`. Drawing never
//! panics on out-of-range coordinates; writes outside the grid are dropped.

use super::cell::{Cell, Style};
use crate::layout::Rect;
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// A grid of cells representing one terminal frame.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Buffer {
    cells: Vec<Cell>,
    width: u16,
    height: u16,
}

impl Buffer {
    /// Create a blank buffer. Zero dimensions are raised to 1.
    pub fn new(width: u16, height: u16) -> Self {
        let width = width.max(1);
        let height = height.max(1);
        Self {
            cells: vec![Cell::EMPTY; usize::from(width) * usize::from(height)],
            width,
            height,
        }
    }

    /// Buffer width in columns.
    #[inline]
    pub const fn width(&self) -> u16 {
        self.width
    }

    /// Buffer height in rows.
    #[inline]
    pub const fn height(&self) -> u16 {
        self.height
    }

    /// The full-buffer rectangle.
    #[inline]
    pub const fn area(&self) -> Rect {
        Rect::from_size(self.width, self.height)
    }

    /// All cells, row-major.
    #[inline]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    #[inline]
    fn index_of(&self, x: u16, y: u16) -> Option<usize> {
        (x < self.width && y < self.height)
            .then(|| usize::from(y) * usize::from(self.width) + usize::from(x))
    }

    /// Get the cell at (x, y).
    #[inline]
    pub fn get(&self, x: u16, y: u16) -> Option<&Cell> {
        self.index_of(x, y).map(|i| &self.cells[i])
    }

    /// Set the cell at (x, y). Returns `false` if out of bounds.
    #[inline]
    pub fn set(&mut self, x: u16, y: u16, cell: Cell) -> bool {
        match self.index_of(x, y) {
            Some(i) => {
                self.cells[i] = cell;
                true
            }
            None => false,
        }
    }

    /// Fill a rectangle with blanks in the given style.
    pub fn fill(&mut self, rect: Rect, style: Style) {
        let blank = Cell::EMPTY.with_style(style);
        let right = rect.right().min(self.width);
        let bottom = rect.bottom().min(self.height);
        for y in rect.y..bottom {
            for x in rect.x..right {
                self.set(x, y, blank);
            }
        }
    }

    /// Reset every cell to blank.
    pub fn clear(&mut self) {
        self.cells.fill(Cell::EMPTY);
    }

    /// Resize, discarding content.
    pub fn resize(&mut self, width: u16, height: u16) {
        *self = Self::new(width, height);
    }

    /// Draw `text` starting at (x, y), clipped to `max_width` columns.
    ///
    /// Returns the number of columns used. A wide grapheme that would only
    /// half fit is not drawn.
    pub fn draw_text(&mut self, x: u16, y: u16, text: &str, style: Style, max_width: u16) -> u16 {
        let limit = x.saturating_add(max_width).min(self.width);
        let mut col = x;
        for grapheme in text.graphemes(true) {
            let width = match UnicodeWidthStr::width(grapheme) {
                0 => continue,
                1 => 1u16,
                _ => 2u16,
            };
            if col + width > limit {
                break;
            }
            let symbol = grapheme.chars().next().unwrap_or(' ');
            self.set(col, y, Cell::new(symbol).with_style(style));
            if width == 2 {
                self.set(col + 1, y, Cell::wide_continuation(style));
            }
            col += width;
        }
        col - x
    }

    /// Draw `text` right-aligned so it ends at the right edge of `rect`'s first row.
    pub fn draw_text_right(&mut self, rect: Rect, text: &str, style: Style) -> u16 {
        let width = u16::try_from(UnicodeWidthStr::width(text)).unwrap_or(u16::MAX);
        let width = width.min(rect.width);
        self.draw_text(rect.right() - width, rect.y, text, style, width)
    }

    /// The symbols of row `y` as a string, continuation cells skipped.
    pub fn row_text(&self, y: u16) -> String {
        (0..self.width)
            .filter_map(|x| self.get(x, y))
            .filter(|cell| !cell.is_wide_continuation())
            .map(Cell::symbol)
            .collect()
    }
}
