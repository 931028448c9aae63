//! # Sunscan
//!
//! A terminal block explorer for the Sunchain devnet.
//!
//! Blocks arrive from an optional WebSocket feed. When the feed is missing
//! or fails, a synthetic generator takes over for the rest of the session.
//! The dashboard shows the latest block, decorative network metrics, a
//! bounded list of recent blocks, and a simulated staking form.
//!
//! ## Core Concepts
//!
//! - **Block source**: a small state machine that picks live or synthetic
//!   blocks and never goes back once it falls back
//! - **Actor model**: input, rendering, the live socket and timers each run
//!   on their own thread and only send messages
//! - **Double-buffered rendering**: every frame is diffed against the one on
//!   screen and flushed in a single write
//!
//! ## Example
//!
//! ```rust
//! use sunscan::chain::BlockGenerator;
//! use sunscan::widget::BlockFeed;
//! use sunscan::layout::Rect;
//!
//! let mut generator = BlockGenerator::from_os_rng(982_341);
//! let mut feed = BlockFeed::new(Rect::new(0, 0, 80, 16));
//! for _ in 0..10 {
//!     feed.render_block(&generator.next_block());
//! }
//! assert_eq!(feed.len(), 8);
//! ```

#![warn(missing_docs)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod actor;
pub mod buffer;
pub mod chain;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod layout;
pub mod logging;
pub mod widget;

// Re-exports for convenience
pub use buffer::{Buffer, Cell, Modifiers, Rgb, Style};
pub use chain::{BlockRecord, BlockSource, ConnectionState};
pub use config::{DashboardConfig, SourceConfig};
pub use dashboard::{run, Dashboard};
pub use error::{Error, Result};
pub use layout::Rect;
