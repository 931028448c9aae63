//! Block Source: decides where block records come from.
//!
//! ```text
//! Disconnected ──connect()──▶ LiveConnecting ──Opened──▶ LiveConnected
//!      │                           │                          │
//!      │ no endpoint / bad URL     │ Closed / Error           │ Closed / Error
//!      ▼                           ▼                          ▼
//!   Fallback ◀─────────────────────┴──────────────────────────┘
//! ```
//!
//! `Fallback` is terminal for the session. Once there, the live actor is
//! dropped, live events are ignored and a single synthetic ticker drives
//! generation.

use super::block::BlockRecord;
use super::generator::BlockGenerator;
use super::live::{LiveActor, LiveEvent};
use crate::actor::{Tick, TickerActor};
use crate::config::SourceConfig;
use crossbeam_channel::{bounded, never, Receiver};
use rand::rngs::StdRng;
use rand::Rng;
use tracing::{debug, error, info, warn};
use tungstenite::client::IntoClientRequest;

/// Status text while generating without ever having a live channel.
pub const STATUS_SIMULATED: &str = "Streaming (simulated)";
/// Status text once the live channel is open.
pub const STATUS_CONNECTED: &str = "WebSocket connected";
/// Status text after the live channel closed.
pub const STATUS_LOST: &str = "Connection lost — using fallback";
/// Status text after a live transport error.
pub const STATUS_ERROR: &str = "WebSocket error — using fallback";

/// Where block records currently come from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectionState {
    /// `connect` has not been called.
    Disconnected,
    /// The live actor is connecting.
    LiveConnecting,
    /// Records arrive from the live channel.
    LiveConnected,
    /// Records come from the synthetic generator, for good.
    Fallback,
}

/// Why the source entered [`ConnectionState::Fallback`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FallbackCause {
    /// No endpoint, an invalid endpoint, or the live thread could not start.
    ConnectFailed,
    /// The live channel closed.
    Closed,
    /// The live channel reported an error.
    Errored,
}

impl FallbackCause {
    /// Status text shown for this cause.
    pub const fn status(self) -> &'static str {
        match self {
            Self::ConnectFailed => STATUS_SIMULATED,
            Self::Closed => STATUS_LOST,
            Self::Errored => STATUS_ERROR,
        }
    }
}

/// Owner of the connection state machine and the synthetic generator.
pub struct BlockSource<R = StdRng> {
    config: SourceConfig,
    state: ConnectionState,
    status: Option<&'static str>,
    generator: BlockGenerator<R>,
    live: Option<(LiveActor, Receiver<LiveEvent>)>,
    synthetic: Option<TickerActor>,
}

impl BlockSource<StdRng> {
    /// Source with an OS-seeded generator.
    pub fn new(config: SourceConfig) -> Self {
        let generator = BlockGenerator::from_os_rng(config.start_height);
        Self::with_generator(config, generator)
    }
}

impl<R: Rng> BlockSource<R> {
    /// Source using an explicit generator, e.g. a seeded one in tests.
    pub const fn with_generator(config: SourceConfig, generator: BlockGenerator<R>) -> Self {
        Self {
            config,
            state: ConnectionState::Disconnected,
            status: None,
            generator,
            live: None,
            synthetic: None,
        }
    }

    /// Current connection state.
    pub const fn state(&self) -> ConnectionState {
        self.state
    }

    /// Status text for display; `None` until the first transition that sets one.
    pub const fn status(&self) -> Option<&'static str> {
        self.status
    }

    /// Whether the synthetic ticker is running.
    pub const fn is_generating(&self) -> bool {
        self.synthetic.is_some()
    }

    /// Start the live channel, or fall back immediately if it cannot start.
    ///
    /// Only the first call has an effect; there is no reconnection.
    pub fn connect(&mut self) {
        if self.state != ConnectionState::Disconnected {
            debug!(state = ?self.state, "connect ignored, source already started");
            return;
        }

        let Some(endpoint) = self.config.endpoint.clone() else {
            info!("no live endpoint configured, streaming simulated blocks");
            self.enter_fallback(FallbackCause::ConnectFailed);
            return;
        };

        let request = match endpoint.as_str().into_client_request() {
            Ok(request) => request,
            Err(e) => {
                warn!(%endpoint, error = %e, "invalid live endpoint");
                self.enter_fallback(FallbackCause::ConnectFailed);
                return;
            }
        };

        let (tx, rx) = bounded(64);
        match LiveActor::spawn(request, tx, self.config.live_poll_timeout) {
            Ok(actor) => {
                info!(%endpoint, "connecting to live block feed");
                self.live = Some((actor, rx));
                self.state = ConnectionState::LiveConnecting;
            }
            Err(e) => {
                error!(error = %e, "failed to spawn live channel thread");
                self.enter_fallback(FallbackCause::ConnectFailed);
            }
        }
    }

    /// Receiver for live events; never ready unless the live channel is active.
    pub fn live_events(&self) -> Receiver<LiveEvent> {
        self.live.as_ref().map_or_else(never, |(_, rx)| rx.clone())
    }

    /// Receiver for synthetic ticks; never ready before fallback.
    pub fn synthetic_ticks(&self) -> Receiver<Tick> {
        self.synthetic
            .as_ref()
            .map_or_else(never, |ticker| ticker.receiver().clone())
    }

    /// Apply a live event. Returns the record to display, if any.
    ///
    /// Every `Message` yields exactly one record: the decoded one, or a
    /// synthetic substitute when decoding fails.
    pub fn handle_live(&mut self, event: LiveEvent) -> Option<BlockRecord> {
        if self.state == ConnectionState::Fallback {
            debug!(?event, "live event after fallback ignored");
            return None;
        }

        match event {
            LiveEvent::Opened => {
                self.state = ConnectionState::LiveConnected;
                self.status = Some(STATUS_CONNECTED);
                None
            }
            LiveEvent::Message(payload) => match BlockRecord::from_json(&payload) {
                Ok(record) => Some(record),
                Err(e) => {
                    warn!(error = %e, "undecodable live block, substituting a synthetic one");
                    Some(self.generator.next_block())
                }
            },
            LiveEvent::Closed => {
                self.enter_fallback(FallbackCause::Closed);
                None
            }
            LiveEvent::Error(reason) => {
                debug!(%reason, "live channel error");
                self.enter_fallback(FallbackCause::Errored);
                None
            }
        }
    }

    /// Produce the record for one synthetic tick.
    pub fn next_synthetic(&mut self) -> BlockRecord {
        self.generator.next_block()
    }

    /// Switch to synthetic generation. Repeated calls keep the first cause.
    pub fn enter_fallback(&mut self, cause: FallbackCause) {
        if self.state == ConnectionState::Fallback {
            return;
        }
        info!(?cause, "switching to synthetic blocks");
        self.state = ConnectionState::Fallback;
        self.status = Some(cause.status());
        self.live = None;
        self.start_synthetic();
    }

    /// Start the synthetic ticker unless one is already running.
    fn start_synthetic(&mut self) {
        if self.synthetic.is_some() {
            return;
        }
        match TickerActor::spawn("sunscan-blocks", self.config.block_interval) {
            Ok(ticker) => self.synthetic = Some(ticker),
            Err(e) => error!(error = %e, "failed to spawn block ticker"),
        }
    }

    /// Cancel the synthetic ticker, if any.
    pub fn stop_synthetic(&mut self) {
        if let Some(ticker) = self.synthetic.take() {
            ticker.join();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use std::time::Duration;

    fn source(endpoint: Option<&str>) -> BlockSource {
        let config = SourceConfig {
            endpoint: endpoint.map(str::to_string),
            block_interval: Duration::from_millis(20),
            ..SourceConfig::default()
        };
        let generator = BlockGenerator::with_rng(config.start_height, StdRng::seed_from_u64(9));
        BlockSource::with_generator(config, generator)
    }

    /// A source that believes it is connected, without any socket.
    fn connected() -> BlockSource {
        let mut source = source(None);
        source.state = ConnectionState::LiveConnecting;
        assert_eq!(source.handle_live(LiveEvent::Opened), None);
        source
    }

    #[test]
    fn test_no_endpoint_falls_back() {
        let mut source = source(None);
        assert_eq!(source.state(), ConnectionState::Disconnected);
        assert_eq!(source.status(), None);

        source.connect();

        assert_eq!(source.state(), ConnectionState::Fallback);
        assert_eq!(source.status(), Some(STATUS_SIMULATED));
        assert!(source.is_generating());
    }

    #[test]
    fn test_invalid_endpoint_falls_back_without_panicking() {
        let mut source = source(Some("not a url"));
        source.connect();
        assert_eq!(source.state(), ConnectionState::Fallback);
        assert_eq!(source.status(), Some(STATUS_SIMULATED));
    }

    #[test]
    fn test_opened_then_messages() {
        let mut source = connected();
        assert_eq!(source.state(), ConnectionState::LiveConnected);
        assert_eq!(source.status(), Some(STATUS_CONNECTED));

        let payload = br#"{"height":5,"hash":"feedfacefeedface00","txCount":1,"leader":"Nova"}"#;
        let record = source.handle_live(LiveEvent::Message(payload.to_vec())).unwrap();
        assert_eq!(record.height.as_u64(), Some(5));
        assert_eq!(record.leader, "Nova");
        assert!(!source.is_generating());
    }

    #[test]
    fn test_out_of_range_live_numbers_pass_through() {
        let mut source = connected();
        let before = source.generator.height();

        for (payload, height, tx_count) in [
            (r#"{"height":-5,"hash":"x","txCount":3,"leader":"Nova"}"#, "-5", "3"),
            (r#"{"height":5,"hash":"x","txCount":-1,"leader":"Nova"}"#, "5", "-1"),
            (r#"{"height":7.0,"hash":"x","txCount":3,"leader":"Nova"}"#, "7.0", "3"),
        ] {
            let record = source.handle_live(LiveEvent::Message(payload.as_bytes().to_vec())).unwrap();
            assert_eq!(record.height.to_string(), height);
            assert_eq!(record.tx_count.to_string(), tx_count);
            assert_eq!(record.leader, "Nova");
        }

        // None of them were replaced by generated blocks.
        assert_eq!(source.generator.height(), before);
    }

    #[test]
    fn test_bad_message_yields_one_substitute() {
        let mut source = connected();
        let before = source.generator.height();

        let record = source.handle_live(LiveEvent::Message(b"{oops".to_vec()));

        let record = record.expect("a substitute record");
        let height = record.height.as_u64().unwrap();
        assert!(height > before);
        assert_eq!(source.generator.height(), height);
        assert_eq!(source.state(), ConnectionState::LiveConnected);
    }

    #[test]
    fn test_close_and_error_status() {
        let mut closed = connected();
        assert_eq!(closed.handle_live(LiveEvent::Closed), None);
        assert_eq!(closed.state(), ConnectionState::Fallback);
        assert_eq!(closed.status(), Some(STATUS_LOST));

        let mut errored = connected();
        errored.handle_live(LiveEvent::Error("reset by peer".into()));
        assert_eq!(errored.status(), Some(STATUS_ERROR));
        assert!(errored.is_generating());
    }

    #[test]
    fn test_fallback_is_idempotent_and_terminal() {
        let mut source = connected();
        source.handle_live(LiveEvent::Error("boom".into()));
        let ticks = source.synthetic_ticks();

        source.handle_live(LiveEvent::Closed);
        source.enter_fallback(FallbackCause::Closed);
        source.connect();

        // First cause wins, the ticker was not replaced.
        assert_eq!(source.status(), Some(STATUS_ERROR));
        assert!(ticks.same_channel(&source.synthetic_ticks()));

        // Late live data is dropped.
        let payload = br#"{"height":1,"hash":"x","txCount":1,"leader":"Nova"}"#;
        assert_eq!(source.handle_live(LiveEvent::Message(payload.to_vec())), None);
    }

    #[test]
    fn test_synthetic_ticks_arrive_within_interval() {
        let mut source = connected();
        source.handle_live(LiveEvent::Closed);

        let tick = source.synthetic_ticks().recv_timeout(Duration::from_millis(1_800));
        assert!(tick.is_ok());
        let first = source.next_synthetic();
        let second = source.next_synthetic();
        assert!(second.height.as_u64() > first.height.as_u64());
    }

    #[test]
    fn test_receivers_idle_before_fallback() {
        let source = source(None);
        assert!(source
            .synthetic_ticks()
            .recv_timeout(Duration::from_millis(50))
            .is_err());
        assert!(source
            .live_events()
            .recv_timeout(Duration::from_millis(50))
            .is_err());
    }

    #[test]
    fn test_stop_synthetic() {
        let mut source = source(None);
        source.connect();
        source.stop_synthetic();
        assert!(!source.is_generating());
        assert_eq!(source.state(), ConnectionState::Fallback);
    }
}
