//! Actor Model: Message-passing concurrency for the dashboard.
//!
//! Every helper thread only sends messages; all state lives on the
//! dashboard loop.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐     InputEvent      ┌──────────────┐
//! │ Input Thread │ ─────────────────▶  │              │
//! └──────────────┘                     │              │
//! ┌──────────────┐     LiveEvent       │              │
//! │ Live Thread  │ ─────────────────▶  │  Dashboard   │
//! └──────────────┘                     │    Loop      │
//! ┌──────────────┐       Tick          │  (select!)   │
//! │ Tickers (2)  │ ─────────────────▶  │              │
//! └──────────────┘                     │              │
//! ┌──────────────┐    RenderCommand    │              │
//! │Render Thread │ ◀─────────────────  │              │
//! └──────────────┘                     └──────────────┘
//! ```

mod engine;
mod input;
mod messages;
mod renderer;
mod ticker;

pub use engine::{restore_terminal, Engine, EngineConfig};
pub use input::{convert_event, InputActor};
pub use messages::{InputEvent, KeyCode, KeyModifiers, RenderCommand};
pub use renderer::{RenderStats, Renderer, RendererActor};
pub use ticker::{Tick, TickerActor};
