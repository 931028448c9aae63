//! Dashboard regions, computed once per terminal size.
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │ header                                       │
//! │ tabs                                         │
//! │ ┌ hero ────────────┐┌ metrics ─────────────┐ │
//! │ └──────────────────┘└──────────────────────┘ │
//! │ feed / staking (whichever tab is active)     │
//! │ footer                                       │
//! └──────────────────────────────────────────────┘
//! ```

use super::rect::Rect;

/// Rows reserved for the latest-block and metrics panels.
const SUMMARY_ROWS: u16 = 4;

/// Pre-computed widget bounds for the dashboard.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DashboardLayout {
    /// Title, connection status and wallet label.
    pub header: Rect,
    /// Tab bar.
    pub tabs: Rect,
    /// Latest-block summary (Blocks tab).
    pub hero: Rect,
    /// Network metrics (Blocks tab).
    pub metrics: Rect,
    /// Heading row above the feed (Blocks tab).
    pub feed_title: Rect,
    /// Block feed list (Blocks tab).
    pub feed: Rect,
    /// Wallet and staking form (Staking tab).
    pub staking: Rect,
    /// Key hints.
    pub footer: Rect,
}

impl DashboardLayout {
    /// Compute the regions for a `width` x `height` terminal.
    ///
    /// Small terminals yield empty rects for whatever does not fit; widgets
    /// skip drawing into empty bounds.
    pub fn compute(width: u16, height: u16) -> Self {
        let screen = Rect::from_size(width, height);
        let (header, rest) = screen.take_top(1);
        let (tabs, rest) = rest.take_top(1);
        let (footer, body) = rest.take_bottom(1);
        let body = body.inset(1, 0);
        let (_, body) = body.take_top(1);

        let (summary, feed_area) = body.take_top(SUMMARY_ROWS);
        let (hero, metrics) = summary.split_columns(summary.width / 2);
        let (feed_title, feed) = feed_area.take_top(1);

        Self {
            header,
            tabs,
            hero,
            metrics,
            feed_title,
            feed,
            staking: body,
            footer,
        }
    }
}
