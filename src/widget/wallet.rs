//! Wallet toggle. No real wallet is involved; the address is fixed.

use super::theme;
use super::traits::Widget;
use crate::actor::{InputEvent, KeyCode};
use crate::buffer::{Buffer, Modifiers};
use crate::layout::Rect;

/// Abbreviated address shown while connected.
pub const WALLET_ADDRESS: &str = "9xDk...e7A";

/// Connect/disconnect button plus status line.
#[derive(Debug)]
pub struct WalletButton {
    connected: bool,
    bounds: Rect,
}

impl WalletButton {
    /// Create a disconnected wallet.
    pub const fn new(bounds: Rect) -> Self {
        Self {
            connected: false,
            bounds,
        }
    }

    /// Whether the wallet is connected.
    pub const fn is_connected(&self) -> bool {
        self.connected
    }

    /// Flip between connected and disconnected.
    pub const fn toggle(&mut self) {
        self.connected = !self.connected;
    }

    /// Status line, e.g. for the header.
    pub fn status_label(&self) -> String {
        if self.connected {
            format!("Wallet connected: {WALLET_ADDRESS}")
        } else {
            "Not connected".to_string()
        }
    }

    /// Button caption.
    pub const fn button_label(&self) -> &'static str {
        if self.connected {
            "Disconnect"
        } else {
            "Connect Wallet"
        }
    }
}

impl Widget for WalletButton {
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
        let button = format!("[ {} ]", self.button_label());
        let used = buffer.draw_text(area.x, area.y, &button, theme::TITLE.add(Modifiers::REVERSED), area.width);
        let hint = "(w)";
        let x = area.x + used + 1;
        buffer.draw_text(x, area.y, hint, theme::DIM, area.right().saturating_sub(x));

        if area.height > 1 {
            let style = if self.connected { theme::TEXT.fg(theme::GOOD) } else { theme::DIM };
            buffer.draw_text(area.x, area.y + 1, &self.status_label(), style, area.width);
        }
    }

    fn handle_input(&mut self, event: &InputEvent) -> bool {
        if let InputEvent::Key {
            code: KeyCode::Char('w'),
            modifiers,
        } = event
        {
            if !modifiers.control && !modifiers.alt {
                self.toggle();
                return true;
            }
        }
        false
    }
}
