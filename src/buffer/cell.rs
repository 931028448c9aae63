//! Cell: One terminal grid position.
//!
//! A cell holds a single display symbol plus its style. Wide symbols
//! (CJK, most emoji) occupy two cells: the symbol cell and a trailing
//! continuation cell that is never emitted on its own.

use bitflags::bitflags;

/// True-color RGB representation.
#[derive(Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Rgb {
    /// Red channel (0-255)
    pub r: u8,
    /// Green channel (0-255)
    pub g: u8,
    /// Blue channel (0-255)
    pub b: u8,
}

impl Rgb {
    /// Create a new RGB color.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Create from a 24-bit hex color (e.g., `0xF5A524`).
    #[inline]
    pub const fn from_u32(hex: u32) -> Self {
        Self::new(
            ((hex >> 16) & 0xFF) as u8,
            ((hex >> 8) & 0xFF) as u8,
            (hex & 0xFF) as u8,
        )
    }

    /// Black (0, 0, 0)
    pub const BLACK: Self = Self::new(0, 0, 0);
    /// White (255, 255, 255)
    pub const WHITE: Self = Self::new(255, 255, 255);
}

impl std::fmt::Debug for Rgb {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

bitflags! {
    /// Text style modifiers.
    ///
    /// ```
    /// use sunscan::Modifiers;
    /// let heading = Modifiers::BOLD | Modifiers::UNDERLINE;
    /// assert!(heading.contains(Modifiers::BOLD));
    /// ```
    #[derive(Clone, Copy, PartialEq, Eq, Hash, Default, Debug)]
    pub struct Modifiers: u8 {
        /// Bold text
        const BOLD = 0b0000_0001;
        /// Dim/faint text
        const DIM = 0b0000_0010;
        /// Italic text
        const ITALIC = 0b0000_0100;
        /// Underlined text
        const UNDERLINE = 0b0000_1000;
        /// Reversed colors (fg/bg swapped)
        const REVERSED = 0b0001_0000;
    }
}

bitflags! {
    /// Cell-level flags.
    #[derive(Clone, Copy, PartialEq, Eq, Hash, Default, Debug)]
    pub struct CellFlags: u8 {
        /// Right half of a wide symbol; skipped when emitting.
        const WIDE_CONTINUATION = 0b0000_0001;
    }
}

/// Foreground, background and modifiers applied together.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Style {
    /// Foreground color.
    pub fg: Rgb,
    /// Background color.
    pub bg: Rgb,
    /// Text modifiers.
    pub modifiers: Modifiers,
}

impl Style {
    /// Terminal default look: light text on the dashboard background.
    pub const DEFAULT: Self = Self::new(Rgb::new(220, 220, 220), Rgb::new(16, 18, 24));

    /// Create a style without modifiers.
    pub const fn new(fg: Rgb, bg: Rgb) -> Self {
        Self {
            fg,
            bg,
            modifiers: Modifiers::empty(),
        }
    }

    /// Replace the foreground color.
    #[must_use]
    pub const fn fg(mut self, fg: Rgb) -> Self {
        self.fg = fg;
        self
    }

    /// Replace the background color.
    #[must_use]
    pub const fn bg(mut self, bg: Rgb) -> Self {
        self.bg = bg;
        self
    }

    /// Add modifiers on top of the current ones.
    #[must_use]
    pub const fn add(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = self.modifiers.union(modifiers);
        self
    }
}

impl Default for Style {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// A single terminal cell.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Cell {
    symbol: char,
    width: u8,
    style: Style,
    flags: CellFlags,
}

impl Default for Cell {
    fn default() -> Self {
        Self::EMPTY
    }
}

impl Cell {
    /// A blank cell in the default style.
    pub const EMPTY: Self = Self {
        symbol: ' ',
        width: 1,
        style: Style::DEFAULT,
        flags: CellFlags::empty(),
    };

    /// Create a cell for `symbol` in the default style.
    ///
    /// Control and zero-width characters are replaced by a space so that
    /// every emitted cell advances the cursor.
    pub fn new(symbol: char) -> Self {
        let width = unicode_width::UnicodeWidthChar::width(symbol).unwrap_or(0);
        if width == 0 {
            return Self::EMPTY;
        }
        Self {
            symbol,
            width: if width >= 2 { 2 } else { 1 },
            ..Self::EMPTY
        }
    }

    /// Continuation marker for the right half of a wide symbol.
    pub const fn wide_continuation(style: Style) -> Self {
        Self {
            symbol: ' ',
            width: 0,
            style,
            flags: CellFlags::WIDE_CONTINUATION,
        }
    }

    /// Builder: set the whole style.
    #[must_use]
    pub const fn with_style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    /// The displayed symbol.
    #[inline]
    pub const fn symbol(&self) -> char {
        self.symbol
    }

    /// Display width in columns (0 for continuation cells).
    #[inline]
    pub const fn width(&self) -> u8 {
        self.width
    }

    /// The cell style.
    #[inline]
    pub const fn style(&self) -> Style {
        self.style
    }

    /// Whether this is the right half of a wide symbol.
    #[inline]
    pub const fn is_wide_continuation(&self) -> bool {
        self.flags.contains(CellFlags::WIDE_CONTINUATION)
    }
}
