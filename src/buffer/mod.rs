//! Buffer module: Frame storage for the double-buffered renderer.
//!
//! - [`Cell`]: one grid position (symbol + [`Style`])
//! - [`Buffer`]: a frame of cells
//! - [`diff`]: minimal ANSI output between two frames

mod cell;
#[allow(clippy::module_inception)]
mod buffer;
pub mod diff;

pub use buffer::Buffer;
pub use cell::{Cell, CellFlags, Modifiers, Rgb, Style};
