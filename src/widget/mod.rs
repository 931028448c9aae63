//! Dashboard widgets.
//!
//! Each widget owns its bounds and draws into a shared
//! [`Buffer`](crate::buffer::Buffer). Stateful widgets expose the operations the
//! dashboard drives, e.g. [`BlockFeed::render_block`] and
//! [`LatestBlock::update_hero`].

mod amount_input;
mod block_feed;
mod header;
mod hero;
mod metrics;
mod stake_form;
mod tabs;
pub mod theme;
mod traits;
mod wallet;

pub use amount_input::AmountInput;
pub use block_feed::{BlockFeed, FeedEntry, MAX_FEED_ITEMS};
pub use header::{HeaderBar, TITLE};
pub use hero::{HeroUpdate, LatestBlock};
pub use metrics::{Metrics, MetricsPanel, MetricsSampler, EPOCH_RANGE, TPS_RANGE, VALIDATOR_RANGE};
pub use stake_form::{parse_amount, StakeForm, StakeOutcome};
pub use tabs::{TabBar, TabId};
pub use traits::Widget;
pub use wallet::{WalletButton, WALLET_ADDRESS};
