//! Diffing: turn the change between two frames into ANSI output.
//!
//! Only cells that differ are emitted. The cursor position and the last
//! emitted style are tracked so adjacent cells in the same style cost one
//! byte each. Everything is appended to a single `Vec<u8>` that the render
//! thread flushes with one write.

use super::{Buffer, Cell, Modifiers, Style};
use std::io::Write;

/// What the terminal is known to be showing between frames.
#[derive(Debug, Clone, Default)]
pub struct DiffState {
    cursor: Option<(u16, u16)>,
    style: Option<Style>,
}

impl DiffState {
    /// Unknown terminal state.
    pub const fn new() -> Self {
        Self {
            cursor: None,
            style: None,
        }
    }

    /// Forget everything, e.g. after a resize or a full clear.
    pub const fn reset(&mut self) {
        self.cursor = None;
        self.style = None;
    }
}

/// Counters from one diff pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DiffResult {
    /// Cells whose content or style changed.
    pub cells_changed: usize,
    /// Explicit cursor positioning sequences emitted.
    pub cursor_moves: usize,
    /// SGR style sequences emitted.
    pub style_changes: usize,
}

/// Emit the sequences that turn `current` into `next`.
///
/// Both buffers must have the same dimensions; callers fall back to
/// [`render_full`] when they do not.
pub fn render_diff(
    current: &Buffer,
    next: &Buffer,
    output: &mut Vec<u8>,
    state: &mut DiffState,
) -> DiffResult {
    debug_assert_eq!(current.width(), next.width());
    debug_assert_eq!(current.height(), next.height());

    let mut result = DiffResult::default();
    let width = usize::from(next.width());

    for (idx, (old, new)) in current.cells().iter().zip(next.cells()).enumerate() {
        if old == new || new.is_wide_continuation() {
            continue;
        }
        #[allow(clippy::cast_possible_truncation)]
        let (x, y) = ((idx % width) as u16, (idx / width) as u16);

        result.cells_changed += 1;
        if state.cursor != Some((x, y)) {
            emit_cursor_move(output, x, y);
            result.cursor_moves += 1;
        }
        if state.style != Some(new.style()) {
            emit_style(output, new.style());
            state.style = Some(new.style());
            result.style_changes += 1;
        }
        emit_symbol(output, new);
        state.cursor = Some((x + u16::from(new.width().max(1)), y));
    }

    result
}

/// Redraw every cell, ignoring what is on screen.
pub fn render_full(buffer: &Buffer, output: &mut Vec<u8>, state: &mut DiffState) {
    output.extend_from_slice(b"\x1b[?25l\x1b[0m\x1b[2J");
    state.reset();

    for y in 0..buffer.height() {
        emit_cursor_move(output, 0, y);
        for x in 0..buffer.width() {
            let Some(cell) = buffer.get(x, y) else {
                continue;
            };
            if cell.is_wide_continuation() {
                continue;
            }
            if state.style != Some(cell.style()) {
                emit_style(output, cell.style());
                state.style = Some(cell.style());
            }
            emit_symbol(output, cell);
        }
    }
    // Row wrapping leaves the real cursor position unknown.
    state.cursor = None;
}

const SGR_MODIFIERS: [(Modifiers, &str); 5] = [
    (Modifiers::BOLD, ";1"),
    (Modifiers::DIM, ";2"),
    (Modifiers::ITALIC, ";3"),
    (Modifiers::UNDERLINE, ";4"),
    (Modifiers::REVERSED, ";7"),
];

/// ANSI positions are 1-indexed.
#[inline]
fn emit_cursor_move(output: &mut Vec<u8>, x: u16, y: u16) {
    let _ = write!(output, "\x1b[{};{}H", y + 1, x + 1);
}

/// Reset, then apply modifiers and both colors in one SGR sequence.
fn emit_style(output: &mut Vec<u8>, style: Style) {
    output.extend_from_slice(b"\x1b[0");
    for (flag, code) in SGR_MODIFIERS {
        if style.modifiers.contains(flag) {
            output.extend_from_slice(code.as_bytes());
        }
    }
    let _ = write!(
        output,
        ";38;2;{};{};{};48;2;{};{};{}m",
        style.fg.r, style.fg.g, style.fg.b, style.bg.r, style.bg.g, style.bg.b
    );
}

#[inline]
fn emit_symbol(output: &mut Vec<u8>, cell: &Cell) {
    let mut utf8 = [0u8; 4];
    output.extend_from_slice(cell.symbol().encode_utf8(&mut utf8).as_bytes());
}
