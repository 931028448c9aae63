//! Synthetic block generator.
//!
//! Used whenever the live channel is unavailable and to substitute for
//! undecodable live messages. The height counter is private and only moves
//! forward.

use super::block::{BlockRecord, LEADERS};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::fmt::Write;
use std::ops::{Range, RangeInclusive};

/// Height advance per synthetic block.
pub const HEIGHT_STEP: RangeInclusive<u64> = 1..=4;
/// Transaction count range per synthetic block.
pub const TX_COUNT: Range<u64> = 1200..1700;
/// Random bytes per hash; rendered as twice as many hex digits.
pub const HASH_BYTES: usize = 16;

/// Produces plausible-looking blocks from a random source.
#[derive(Debug)]
pub struct BlockGenerator<R = StdRng> {
    height: u64,
    rng: R,
}

impl BlockGenerator<StdRng> {
    /// Generator seeded from the operating system.
    pub fn from_os_rng(start_height: u64) -> Self {
        Self::with_rng(start_height, StdRng::from_os_rng())
    }
}

impl<R: Rng> BlockGenerator<R> {
    /// Generator starting at `start_height` and drawing from `rng`.
    pub const fn with_rng(start_height: u64, rng: R) -> Self {
        Self {
            height: start_height,
            rng,
        }
    }

    /// Height of the last generated block (or the start height).
    pub const fn height(&self) -> u64 {
        self.height
    }

    /// Generate the next block, advancing the height by 1 to 4.
    pub fn next_block(&mut self) -> BlockRecord {
        let step = self.rng.random_range(HEIGHT_STEP);
        self.height = self.height.saturating_add(step);

        BlockRecord {
            height: self.height.into(),
            hash: self.random_hash(),
            tx_count: self.rng.random_range(TX_COUNT).into(),
            leader: LEADERS[self.rng.random_range(0..LEADERS.len())].to_string(),
        }
    }

    fn random_hash(&mut self) -> String {
        let bytes: [u8; HASH_BYTES] = self.rng.random();
        let mut hash = String::with_capacity(HASH_BYTES * 2);
        for byte in bytes {
            let _ = write!(hash, "{byte:02x}");
        }
        hash
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn seeded(start: u64, seed: u64) -> BlockGenerator {
        BlockGenerator::with_rng(start, StdRng::seed_from_u64(seed))
    }

    #[test]
    fn test_height_strictly_increases_in_small_steps() {
        let mut generator = seeded(982_341, 7);
        let mut previous = generator.height();
        for _ in 0..1_000 {
            let block = generator.next_block();
            let height = block.height.as_u64().unwrap();
            let step = height - previous;
            assert!(HEIGHT_STEP.contains(&step), "step {step}");
            assert_eq!(height, generator.height());
            previous = height;
        }
    }

    #[test]
    fn test_hash_shape_and_uniqueness() {
        let mut generator = seeded(0, 11);
        let mut seen = HashSet::new();
        for _ in 0..1_000 {
            let block = generator.next_block();
            assert_eq!(block.hash.len(), HASH_BYTES * 2);
            assert!(block
                .hash
                .chars()
                .all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c)));
            assert!(seen.insert(block.hash));
        }
    }

    #[test]
    fn test_tx_count_and_leader_ranges() {
        let mut generator = seeded(0, 3);
        let mut leaders = HashSet::new();
        for _ in 0..500 {
            let block = generator.next_block();
            assert!(TX_COUNT.contains(&block.tx_count.as_u64().unwrap()));
            assert!(LEADERS.contains(&block.leader.as_str()));
            leaders.insert(block.leader);
        }
        assert_eq!(leaders.len(), LEADERS.len());
    }

    #[test]
    fn test_same_seed_same_blocks() {
        let mut a = seeded(100, 42);
        let mut b = seeded(100, 42);
        for _ in 0..10 {
            assert_eq!(a.next_block(), b.next_block());
        }
    }

    #[test]
    fn test_height_saturates() {
        let mut generator = seeded(u64::MAX - 1, 1);
        generator.next_block();
        assert_eq!(generator.next_block().height.as_u64(), Some(u64::MAX));
    }
}
