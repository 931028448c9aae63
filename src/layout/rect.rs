//! Rect: Screen-space rectangle used for widget bounds.

/// A rectangle defined by its top-left corner and size, in cells.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rect {
    /// Column of the top-left corner.
    pub x: u16,
    /// Row of the top-left corner.
    pub y: u16,
    /// Width in columns.
    pub width: u16,
    /// Height in rows.
    pub height: u16,
}

impl Rect {
    /// Zero-sized rectangle.
    pub const ZERO: Self = Self::new(0, 0, 0, 0);

    /// Create a new rectangle.
    #[inline]
    pub const fn new(x: u16, y: u16, width: u16, height: u16) -> Self {
        Self { x, y, width, height }
    }

    /// Full-screen rectangle for a terminal size.
    #[inline]
    pub const fn from_size(width: u16, height: u16) -> Self {
        Self::new(0, 0, width, height)
    }

    /// Whether the rectangle covers no cells.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Right edge (exclusive).
    #[inline]
    pub const fn right(&self) -> u16 {
        self.x.saturating_add(self.width)
    }

    /// Bottom edge (exclusive).
    #[inline]
    pub const fn bottom(&self) -> u16 {
        self.y.saturating_add(self.height)
    }

    /// The single-row rectangle at `offset` rows from the top, or
    /// [`Rect::ZERO`] when `offset` is outside.
    #[inline]
    pub const fn row(&self, offset: u16) -> Self {
        if offset >= self.height {
            return Self::ZERO;
        }
        Self::new(self.x, self.y + offset, self.width, 1)
    }

    /// Shrink by `dx` columns on the left and right and `dy` rows on the
    /// top and bottom. Collapses to an empty rect instead of underflowing.
    #[inline]
    #[must_use]
    pub const fn inset(&self, dx: u16, dy: u16) -> Self {
        Self::new(
            self.x.saturating_add(dx),
            self.y.saturating_add(dy),
            self.width.saturating_sub(dx.saturating_mul(2)),
            self.height.saturating_sub(dy.saturating_mul(2)),
        )
    }

    /// Split into a top part of `rows` rows and the remainder.
    pub fn take_top(&self, rows: u16) -> (Self, Self) {
        let rows = rows.min(self.height);
        (
            Self::new(self.x, self.y, self.width, rows),
            Self::new(self.x, self.y + rows, self.width, self.height - rows),
        )
    }

    /// Split into a bottom part of `rows` rows and the remainder above it.
    pub fn take_bottom(&self, rows: u16) -> (Self, Self) {
        let rows = rows.min(self.height);
        let rest = self.height - rows;
        (
            Self::new(self.x, self.y + rest, self.width, rows),
            Self::new(self.x, self.y, self.width, rest),
        )
    }

    /// Split into left and right columns at `cols` from the left.
    pub fn split_columns(&self, cols: u16) -> (Self, Self) {
        let cols = cols.min(self.width);
        (
            Self::new(self.x, self.y, cols, self.height),
            Self::new(self.x + cols, self.y, self.width - cols, self.height),
        )
    }
}

impl std::fmt::Debug for Rect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Rect({}, {} {}x{})", self.x, self.y, self.width, self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_take_top_and_bottom() {
        let area = Rect::new(0, 0, 80, 24);
        let (header, rest) = area.take_top(1);
        assert_eq!(header, Rect::new(0, 0, 80, 1));
        assert_eq!(rest, Rect::new(0, 1, 80, 23));

        let (footer, body) = rest.take_bottom(1);
        assert_eq!(footer, Rect::new(0, 23, 80, 1));
        assert_eq!(body, Rect::new(0, 1, 80, 22));
    }

    #[test]
    fn test_splits_clamp() {
        let area = Rect::new(2, 2, 10, 3);
        let (top, rest) = area.take_top(9);
        assert_eq!(top, area);
        assert!(rest.is_empty());

        let (left, right) = area.split_columns(4);
        assert_eq!(left, Rect::new(2, 2, 4, 3));
        assert_eq!(right, Rect::new(6, 2, 6, 3));
    }

    #[test]
    fn test_row_and_inset() {
        let area = Rect::new(1, 1, 10, 4);
        assert_eq!(area.row(2), Rect::new(1, 3, 10, 1));
        assert_eq!(area.row(4), Rect::ZERO);
        assert_eq!(area.inset(2, 1), Rect::new(3, 2, 6, 2));
        assert!(area.inset(6, 0).is_empty());
    }
}
