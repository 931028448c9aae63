//! Header bar: title on the left, connection status in the middle, wallet
//! label on the right.

use super::theme;
use super::traits::Widget;
use crate::buffer::Buffer;
use crate::layout::Rect;
use unicode_width::UnicodeWidthStr;

/// Dashboard title.
pub const TITLE: &str = "Sunscan • Sunchain devnet";

/// One-row header.
#[derive(Debug)]
pub struct HeaderBar {
    status: Option<&'static str>,
    status_ok: bool,
    wallet: String,
    bounds: Rect,
}

impl HeaderBar {
    /// Create a header with no status yet.
    pub const fn new(bounds: Rect) -> Self {
        Self {
            status: None,
            status_ok: false,
            wallet: String::new(),
            bounds,
        }
    }

    /// Show a connection status. `ok` picks the colour.
    pub const fn set_status(&mut self, status: Option<&'static str>, ok: bool) {
        self.status = status;
        self.status_ok = ok;
    }

    /// Current connection status text.
    pub const fn status(&self) -> Option<&'static str> {
        self.status
    }

    /// Show the wallet label.
    pub fn set_wallet(&mut self, label: impl Into<String>) {
        self.wallet = label.into();
    }
}

impl Widget for HeaderBar {
    fn bounds(&self) -> Rect {
        self.bounds
    }

    fn set_bounds(&mut self, bounds: Rect) {
        self.bounds = bounds;
    }

    fn render(&self, buffer: &mut Buffer) {
        let area = self.bounds;
        if area.is_empty() {
            return;
        }
        buffer.fill(area, theme::BAR);

        let inner = area.inset(1, 0);
        let title_end = inner.x + buffer.draw_text(inner.x, inner.y, TITLE, theme::BAR.fg(theme::ACCENT), inner.width);
        let wallet_start = inner.right() - buffer.draw_text_right(inner, &self.wallet, theme::BAR.fg(theme::MUTED));

        // Status is centred in whatever the title and wallet leave free.
        let Some(status) = self.status else {
            return;
        };
        let free = Rect::new(title_end, area.y, wallet_start.saturating_sub(title_end), 1).inset(2, 0);
        if free.is_empty() {
            return;
        }
        let colour = if self.status_ok { theme::GOOD } else { theme::WARN };
        let text = format!("● {status}");
        let width = u16::try_from(text.width()).unwrap_or(u16::MAX).min(free.width);
        let start = free.x + (free.width - width) / 2;
        buffer.draw_text(start, area.y, &text, theme::BAR.fg(colour), width);
    }
}
