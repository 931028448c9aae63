//! Dashboard palette.

use crate::buffer::{Modifiers, Rgb, Style};

/// Screen background.
pub const BG: Rgb = Rgb::from_u32(0x10_12_18);
/// Header and footer bars.
pub const BAR_BG: Rgb = Rgb::from_u32(0x1c_1f_2a);
/// Sunchain orange, used for titles and highlights.
pub const ACCENT: Rgb = Rgb::from_u32(0xf5_a6_23);
/// Secondary text.
pub const MUTED: Rgb = Rgb::from_u32(0x8a_90_a0);
/// Success messages and connected indicators.
pub const GOOD: Rgb = Rgb::from_u32(0x4c_d9_7b);
/// Warnings and fallback indicators.
pub const WARN: Rgb = Rgb::from_u32(0xe8_5d_5d);

/// Plain body text.
pub const TEXT: Style = Style::DEFAULT;
/// Section titles.
pub const TITLE: Style = Style::DEFAULT.fg(ACCENT).add(Modifiers::BOLD);
/// Secondary text.
pub const DIM: Style = Style::DEFAULT.fg(MUTED);
/// Header and footer text.
pub const BAR: Style = Style::DEFAULT.bg(BAR_BG);
