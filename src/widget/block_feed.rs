//! Block feed: bounded list of recent blocks, newest first.
//!
//! Insertion is O(1): push at the head, evict at the tail. Entries are
//! immutable once inserted.

use super::theme;
use super::traits::Widget;
use crate::buffer::Buffer;
use crate::chain::{short_hash, BlockRecord};
use crate::layout::Rect;
use serde_json::Number;
use std::collections::VecDeque;

/// Most entries the feed keeps.
pub const MAX_FEED_ITEMS: usize = 8;

/// Rows each entry occupies when drawn.
const ROWS_PER_ENTRY: u16 = 2;

/// One row of the feed, as displayed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedEntry {
    /// Block height, as received.
    pub height: Number,
    /// Full hash; shortened when drawn.
    pub hash: String,
    /// Number of transactions.
    pub tx_count: Number,
    /// Producing validator.
    pub leader: String,
}

impl From<&BlockRecord> for FeedEntry {
    fn from(record: &BlockRecord) -> Self {
        Self {
            height: record.height.clone(),
            hash: record.hash.clone(),
            tx_count: record.tx_count.clone(),
            leader: record.leader.clone(),
        }
    }
}

/// The recent-blocks list.
#[derive(Debug)]
pub struct BlockFeed {
    entries: VecDeque<FeedEntry>,
    bounds: Rect,
}

impl BlockFeed {
    /// Create an empty feed.
    pub fn new(bounds: Rect) -> Self {
        Self {
            entries: VecDeque::with_capacity(MAX_FEED_ITEMS + 1),
            bounds,
        }
    }

    /// Insert `record` at the head, dropping the oldest entry past the limit.
    pub fn render_block(&mut self, record: &BlockRecord) {
        self.entries.push_front(FeedEntry::from(record));
        if self.entries.len() > MAX_FEED_ITEMS {
            self.entries.pop_back();
        }
    }

    /// Entries, newest first.
    pub fn entries(&self) -> impl ExactSizeIterator<Item = &FeedEntry> {
        self.entries.iter()
    }

    /// Number of entries held.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no block has arrived yet.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Widget for BlockFeed {
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
        if self.entries.is_empty() {
            buffer.draw_text(area.x, area.y, "Waiting for blocks...", theme::DIM, area.width);
            return;
        }

        let mut y = area.y;
        for entry in &self.entries {
            if y + ROWS_PER_ENTRY > area.bottom() {
                break;
            }
            let used = buffer.draw_text(area.x, y, &format!("Block #{}", entry.height), theme::TITLE, area.width);
            let hash = short_hash(&entry.hash);
            if used + 2 < area.width {
                buffer.draw_text(area.x + used + 2, y, &hash, theme::DIM, area.width - used - 2);
            }

            let details = format!("{} txns • {}", entry.tx_count, entry.leader);
            buffer.draw_text(area.x, y + 1, &details, theme::TEXT, area.width);
            y += ROWS_PER_ENTRY;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(height: u64) -> BlockRecord {
        BlockRecord {
            height: height.into(),
            hash: format!("{height:032x}"),
            tx_count: 1_400.into(),
            leader: "Lumen".into(),
        }
    }

    #[test]
    fn test_keeps_last_eight_newest_first() {
        let mut feed = BlockFeed::new(Rect::ZERO);
        for height in 1..=20 {
            feed.render_block(&record(height));
            assert!(feed.len() <= MAX_FEED_ITEMS);
        }

        let heights: Vec<u64> = feed.entries().filter_map(|e| e.height.as_u64()).collect();
        assert_eq!(heights, vec![20, 19, 18, 17, 16, 15, 14, 13]);
    }

    #[test]
    fn test_under_capacity() {
        let mut feed = BlockFeed::new(Rect::ZERO);
        assert!(feed.is_empty());
        feed.render_block(&record(1));
        feed.render_block(&record(2));
        assert_eq!(feed.len(), 2);
        assert_eq!(feed.entries().next().and_then(|e| e.height.as_u64()), Some(2));
    }

    #[test]
    fn test_live_heights_kept_in_arrival_order() {
        let mut feed = BlockFeed::new(Rect::ZERO);
        feed.render_block(&record(50));
        feed.render_block(&record(10));
        let heights: Vec<u64> = feed.entries().filter_map(|e| e.height.as_u64()).collect();
        assert_eq!(heights, vec![10, 50]);
    }

    #[test]
    fn test_render_two_rows_per_entry() {
        let mut feed = BlockFeed::new(Rect::new(0, 0, 60, 4));
        feed.render_block(&record(982_341));
        feed.render_block(&record(982_343));
        let mut buffer = Buffer::new(60, 4);

        feed.render(&mut buffer);

        assert!(buffer.row_text(0).starts_with("Block #982343  0000000000...0efd47"));
        assert!(buffer.row_text(1).starts_with("1400 txns • Lumen"));
        assert!(buffer.row_text(2).starts_with("Block #982341"));
    }

    #[test]
    fn test_render_live_numbers_as_sent() {
        let mut feed = BlockFeed::new(Rect::new(0, 0, 40, 2));
        feed.render_block(&BlockRecord {
            height: Number::from(-5),
            hash: "x".into(),
            tx_count: Number::from(-1),
            leader: "Nova".into(),
        });
        let mut buffer = Buffer::new(40, 2);

        feed.render(&mut buffer);

        assert!(buffer.row_text(0).starts_with("Block #-5  x"));
        assert!(buffer.row_text(1).starts_with("-1 txns • Nova"));
    }

    #[test]
    fn test_render_clips_to_bounds() {
        let mut feed = BlockFeed::new(Rect::new(0, 0, 40, 3));
        for height in 0..8 {
            feed.render_block(&record(height));
        }
        let mut buffer = Buffer::new(40, 4);

        feed.render(&mut buffer);

        assert!(buffer.row_text(0).starts_with("Block #7"));
        assert!(buffer.row_text(2).trim().is_empty());
        assert!(buffer.row_text(3).trim().is_empty());
    }

    #[test]
    fn test_render_placeholder_when_empty() {
        let feed = BlockFeed::new(Rect::new(0, 0, 40, 2));
        let mut buffer = Buffer::new(40, 2);
        feed.render(&mut buffer);
        assert!(buffer.row_text(0).starts_with("Waiting for blocks"));
    }
}
