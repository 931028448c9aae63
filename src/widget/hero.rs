//! Latest-block summary panel.

use super::theme;
use super::traits::Widget;
use crate::buffer::Buffer;
use crate::chain::BlockRecord;
use crate::layout::Rect;
use serde_json::Number;

/// What the summary shows for the most recent block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeroUpdate {
    /// Block height, as received.
    pub height: Number,
    /// Shortened hash.
    pub short_hash: String,
}

/// Panel showing the most recently received block.
#[derive(Debug)]
pub struct LatestBlock {
    latest: Option<HeroUpdate>,
    bounds: Rect,
}

impl LatestBlock {
    /// Create an empty panel.
    pub const fn new(bounds: Rect) -> Self {
        Self {
            latest: None,
            bounds,
        }
    }

    /// Replace the summary with `record`.
    pub fn update_hero(&mut self, record: &BlockRecord) {
        self.latest = Some(HeroUpdate {
            height: record.height.clone(),
            short_hash: record.short_hash(),
        });
    }

    /// The current summary, if any block has arrived.
    pub const fn latest(&self) -> Option<&HeroUpdate> {
        self.latest.as_ref()
    }
}

impl Widget for LatestBlock {
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
        buffer.draw_text(area.x, area.y, "Latest Block", theme::DIM, area.width);

        let (height, hash) = match &self.latest {
            Some(latest) => (format!("#{}", latest.height), latest.short_hash.as_str()),
            None => ("#-".to_string(), "--"),
        };
        if area.height > 1 {
            buffer.draw_text(area.x, area.y + 1, &height, theme::TITLE, area.width);
        }
        if area.height > 2 {
            buffer.draw_text(area.x, area.y + 2, hash, theme::TEXT, area.width);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_hero_tracks_last_record() {
        let mut hero = LatestBlock::new(Rect::ZERO);
        assert!(hero.latest().is_none());

        for (height, hash) in [(982_343, "aaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa"), (982_345, "0123456789abcdef0123456789abcdef")] {
            hero.update_hero(&BlockRecord {
                height: Number::from(height),
                hash: hash.into(),
                tx_count: 1_250.into(),
                leader: "Helios".into(),
            });
        }

        assert_eq!(
            hero.latest(),
            Some(&HeroUpdate {
                height: 982_345.into(),
                short_hash: "0123456789...abcdef".into(),
            })
        );
    }

    #[test]
    fn test_render() {
        let mut hero = LatestBlock::new(Rect::new(0, 0, 30, 4));
        let mut buffer = Buffer::new(30, 4);
        hero.render(&mut buffer);
        assert!(buffer.row_text(1).starts_with("#-"));

        hero.update_hero(&BlockRecord {
            height: 7.into(),
            hash: "short".into(),
            tx_count: 1.into(),
            leader: "Nova".into(),
        });
        hero.render(&mut buffer);
        assert!(buffer.row_text(0).starts_with("Latest Block"));
        assert!(buffer.row_text(1).starts_with("#7 "));
        assert!(buffer.row_text(2).starts_with("short"));
    }
}
