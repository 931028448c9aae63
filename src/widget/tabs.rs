//! Tab bar.

use super::theme;
use super::traits::Widget;
use crate::actor::{InputEvent, KeyCode};
use crate::buffer::{Buffer, Modifiers};
use crate::layout::Rect;

/// Dashboard tabs, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TabId {
    /// Latest block, metrics and the block feed.
    #[default]
    Blocks,
    /// Wallet and staking form.
    Staking,
}

impl TabId {
    /// All tabs, in display order.
    pub const ALL: [Self; 2] = [Self::Blocks, Self::Staking];

    /// Label shown in the bar.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Blocks => "Blocks",
            Self::Staking => "Staking",
        }
    }

    const fn index(self) -> usize {
        match self {
            Self::Blocks => 0,
            Self::Staking => 1,
        }
    }
}

/// Row of tab labels with one active tab.
#[derive(Debug)]
pub struct TabBar {
    active: TabId,
    bounds: Rect,
}

impl TabBar {
    /// Create a bar with the first tab active.
    pub fn new(bounds: Rect) -> Self {
        Self {
            active: TabId::default(),
            bounds,
        }
    }

    /// The active tab.
    pub const fn active(&self) -> TabId {
        self.active
    }

    /// Activate the next tab, wrapping around.
    pub const fn next(&mut self) {
        self.active = TabId::ALL[(self.active.index() + 1) % TabId::ALL.len()];
    }

    /// Activate the previous tab, wrapping around.
    pub const fn previous(&mut self) {
        let len = TabId::ALL.len();
        self.active = TabId::ALL[(self.active.index() + len - 1) % len];
    }
}

impl Widget for TabBar {
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
        let mut x = area.x + 1;
        for tab in TabId::ALL {
            let style = if tab == self.active {
                theme::TITLE.add(Modifiers::REVERSED)
            } else {
                theme::DIM
            };
            let label = format!(" {} ", tab.label());
            x += buffer.draw_text(x, area.y, &label, style, area.right().saturating_sub(x));
            x += 1;
        }
    }

    fn handle_input(&mut self, event: &InputEvent) -> bool {
        match event {
            InputEvent::Key {
                code: KeyCode::Tab, ..
            } => self.next(),
            InputEvent::Key {
                code: KeyCode::BackTab,
                ..
            } => self.previous(),
            _ => return false,
        }
        true
    }
}
