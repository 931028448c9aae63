//! Dashboard: the application state and the event loop that drives it.
//!
//! [`Dashboard`] holds every widget and knows how to route input and block
//! records to them; it never touches the terminal, so it is tested with a
//! plain [`Buffer`]. [`run`] wires it to the [`Engine`], the
//! [`BlockSource`] and the metrics ticker.

use crate::actor::{Engine, InputEvent, KeyCode, TickerActor};
use crate::buffer::Buffer;
use crate::chain::{BlockRecord, BlockSource, ConnectionState, LiveEvent};
use crate::config::DashboardConfig;
use crate::error::Result;
use crate::layout::{DashboardLayout, Rect};
use crate::widget::{
    theme, BlockFeed, HeaderBar, LatestBlock, MetricsPanel, MetricsSampler, StakeForm, TabBar,
    TabId, WalletButton, Widget,
};
use crossbeam_channel::{never, select};
use rand::rngs::StdRng;
use rand::Rng;
use tracing::{debug, error, info};

/// Key hints shown in the footer.
const FOOTER: &str = "q quit • Tab switch view • w wallet • ↑/↓ validator • Enter stake";

/// Rows of the staking area taken by the wallet button and status.
const WALLET_ROWS: u16 = 2;

/// All dashboard widgets plus the metrics sampler.
pub struct Dashboard<R = StdRng> {
    layout: DashboardLayout,
    header: HeaderBar,
    tabs: TabBar,
    hero: LatestBlock,
    metrics: MetricsPanel,
    feed: BlockFeed,
    wallet: WalletButton,
    stake_form: StakeForm,
    sampler: MetricsSampler<R>,
    running: bool,
}

impl<R: Rng> Dashboard<R> {
    /// Create a dashboard for a `width` x `height` screen.
    pub fn new(width: u16, height: u16, sampler: MetricsSampler<R>) -> Self {
        let mut dashboard = Self {
            layout: DashboardLayout::compute(width, height),
            header: HeaderBar::new(Rect::ZERO),
            tabs: TabBar::new(Rect::ZERO),
            hero: LatestBlock::new(Rect::ZERO),
            metrics: MetricsPanel::new(Rect::ZERO),
            feed: BlockFeed::new(Rect::ZERO),
            wallet: WalletButton::new(Rect::ZERO),
            stake_form: StakeForm::new(Rect::ZERO),
            sampler,
            running: true,
        };
        dashboard.header.set_wallet(dashboard.wallet.status_label());
        dashboard.resize(width, height);
        dashboard.sync_focus();
        dashboard
    }

    /// The amount field only takes keys while the staking tab is shown.
    fn sync_focus(&mut self) {
        self.stake_form.set_focused(self.tabs.active() == TabId::Staking);
    }

    /// Recompute the layout and hand every widget its new bounds.
    pub fn resize(&mut self, width: u16, height: u16) {
        let layout = DashboardLayout::compute(width, height);
        self.header.set_bounds(layout.header);
        self.tabs.set_bounds(layout.tabs);
        self.hero.set_bounds(layout.hero);
        self.metrics.set_bounds(layout.metrics);
        self.feed.set_bounds(layout.feed);

        let (wallet, form) = layout.staking.take_top(WALLET_ROWS);
        self.wallet.set_bounds(wallet);
        self.stake_form.set_bounds(form.take_top(1).1);
        self.layout = layout;
    }

    /// Whether the loop should keep going.
    pub const fn is_running(&self) -> bool {
        self.running
    }

    /// Stop the loop after the current iteration.
    pub const fn quit(&mut self) {
        self.running = false;
    }

    /// Show a new block in the feed and the summary.
    pub fn on_block(&mut self, record: &BlockRecord) {
        self.feed.render_block(record);
        self.hero.update_hero(record);
    }

    /// Show the block source's status.
    pub const fn set_status(&mut self, status: Option<&'static str>, state: ConnectionState) {
        self.header
            .set_status(status, matches!(state, ConnectionState::LiveConnected));
    }

    /// Draw a fresh metrics sample.
    pub fn refresh_metrics(&mut self) {
        let metrics = self.sampler.sample();
        self.metrics.update(metrics);
    }

    /// Route a key press. Resize and thread events are handled by the loop.
    pub fn handle_input(&mut self, event: &InputEvent) {
        let InputEvent::Key { code, modifiers } = event else {
            return;
        };
        match code {
            KeyCode::Char('q') | KeyCode::Esc => return self.quit(),
            KeyCode::Char('c') if modifiers.control => return self.quit(),
            _ => {}
        }

        if self.tabs.handle_input(event) {
            self.sync_focus();
            return;
        }
        if self.wallet.handle_input(event) {
            self.header.set_wallet(self.wallet.status_label());
            return;
        }
        if *code == KeyCode::Enter && self.stake_form.amount().is_focused() {
            let outcome = self.stake_form.submit(self.wallet.is_connected());
            info!(%outcome, "stake submitted");
        } else {
            self.stake_form.handle_input(event);
        }
    }

    /// Compose a full frame.
    pub fn render(&self, buffer: &mut Buffer) {
        buffer.fill(buffer.area(), theme::TEXT);
        self.header.render(buffer);
        self.tabs.render(buffer);

        match self.tabs.active() {
            TabId::Blocks => {
                self.hero.render(buffer);
                self.metrics.render(buffer);
                let title = self.layout.feed_title;
                buffer.draw_text(title.x, title.y, "Recent Blocks", theme::DIM, title.width);
                self.feed.render(buffer);
            }
            TabId::Staking => {
                self.wallet.render(buffer);
                self.stake_form.render(buffer);
            }
        }

        let footer = self.layout.footer;
        if !footer.is_empty() {
            buffer.fill(footer, theme::BAR);
            let inner = footer.inset(1, 0);
            buffer.draw_text(inner.x, inner.y, FOOTER, theme::BAR.fg(theme::MUTED), inner.width);
        }
    }

    /// The block feed.
    pub const fn feed(&self) -> &BlockFeed {
        &self.feed
    }

    /// The latest-block summary.
    pub const fn hero(&self) -> &LatestBlock {
        &self.hero
    }

    /// The metrics panel.
    pub const fn metrics(&self) -> &MetricsPanel {
        &self.metrics
    }

    /// The header bar.
    pub const fn header(&self) -> &HeaderBar {
        &self.header
    }

    /// The wallet toggle.
    pub const fn wallet(&self) -> &WalletButton {
        &self.wallet
    }

    /// The staking form.
    pub const fn stake_form(&self) -> &StakeForm {
        &self.stake_form
    }

    /// The active tab.
    pub const fn active_tab(&self) -> TabId {
        self.tabs.active()
    }
}

/// Take over the terminal and run the dashboard until the user quits.
///
/// # Errors
///
/// Returns an error if the terminal cannot be set up. Live-channel and
/// timer failures are logged and never end the loop.
pub fn run(config: &DashboardConfig) -> Result<()> {
    let mut engine = Engine::with_config(config.engine.clone())?;
    let mut dashboard = Dashboard::new(engine.width(), engine.height(), MetricsSampler::from_os_rng());

    let mut source = BlockSource::new(config.source.clone());
    source.connect();
    dashboard.set_status(source.status(), source.state());

    let mut metrics_ticker = TickerActor::spawn("sunscan-metrics", config.metrics_interval)
        .inspect_err(|e| error!(error = %e, "failed to spawn metrics ticker"))
        .ok();
    dashboard.refresh_metrics();

    info!(state = ?source.state(), "dashboard started");
    draw(&mut engine, &dashboard);

    while dashboard.is_running() {
        let input_rx = engine.input_receiver().clone();
        let live_rx = source.live_events();
        let synthetic_rx = source.synthetic_ticks();
        let metrics_rx = metrics_ticker
            .as_ref()
            .map_or_else(never, |ticker| ticker.receiver().clone());

        select! {
            recv(input_rx) -> event => match event {
                Ok(InputEvent::Resize { width, height }) => {
                    engine.handle_resize(width, height);
                    dashboard.resize(width, height);
                }
                Ok(InputEvent::Error(_)) => {}
                Ok(InputEvent::Shutdown) | Err(_) => dashboard.quit(),
                Ok(event) => dashboard.handle_input(&event),
            },
            recv(live_rx) -> event => {
                // A vanished live thread counts as a transport error.
                let event = event.unwrap_or_else(|_| LiveEvent::Error("live channel thread exited".into()));
                if let Some(record) = source.handle_live(event) {
                    dashboard.on_block(&record);
                }
                dashboard.set_status(source.status(), source.state());
            },
            recv(synthetic_rx) -> tick => match tick {
                Ok(_) => {
                    let record = source.next_synthetic();
                    debug!(height = %record.height, "synthetic block");
                    dashboard.on_block(&record);
                }
                Err(_) => {
                    error!("block ticker stopped");
                    source.stop_synthetic();
                }
            },
            recv(metrics_rx) -> tick => match tick {
                Ok(_) => dashboard.refresh_metrics(),
                Err(_) => {
                    error!("metrics ticker stopped");
                    metrics_ticker = None;
                }
            },
        }

        draw(&mut engine, &dashboard);
    }

    info!("dashboard stopped");
    source.stop_synthetic();
    drop(metrics_ticker);
    Ok(())
}

fn draw<R: Rng>(engine: &mut Engine, dashboard: &Dashboard<R>) {
    dashboard.render(engine.buffer_mut());
    engine.present();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actor::KeyModifiers;
    use crate::widget::MAX_FEED_ITEMS;
    use rand::SeedableRng;

    fn dashboard() -> Dashboard {
        Dashboard::new(100, 30, MetricsSampler::new(StdRng::seed_from_u64(1)))
    }

    fn press(dashboard: &mut Dashboard, code: KeyCode) {
        dashboard.handle_input(&InputEvent::key(code));
    }

    fn block(height: u64) -> BlockRecord {
        BlockRecord {
            height: height.into(),
            hash: "0123456789abcdef0123456789abcdef".into(),
            tx_count: 1_500.into(),
            leader: "Pulse".into(),
        }
    }

    fn screen(dashboard: &Dashboard) -> String {
        let mut buffer = Buffer::new(100, 30);
        dashboard.render(&mut buffer);
        (0..buffer.height())
            .map(|y| buffer.row_text(y))
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_blocks_reach_feed_and_hero() {
        let mut dashboard = dashboard();
        for height in 0..12 {
            dashboard.on_block(&block(height));
        }
        assert_eq!(dashboard.feed().len(), MAX_FEED_ITEMS);
        assert_eq!(dashboard.hero().latest().and_then(|h| h.height.as_u64()), Some(11));

        let screen = screen(&dashboard);
        assert!(screen.contains("#11"));
        assert!(screen.contains("Block #11  0123456789...abcdef"));
        assert!(screen.contains("Recent Blocks"));
    }

    #[test]
    fn test_quit_keys() {
        for event in [
            InputEvent::key(KeyCode::Char('q')),
            InputEvent::key(KeyCode::Esc),
            InputEvent::Key {
                code: KeyCode::Char('c'),
                modifiers: KeyModifiers::CONTROL,
            },
        ] {
            let mut dashboard = dashboard();
            dashboard.handle_input(&event);
            assert!(!dashboard.is_running(), "{event:?}");
        }

        let mut dashboard = dashboard();
        press(&mut dashboard, KeyCode::Char('c'));
        assert!(dashboard.is_running());
    }

    #[test]
    fn test_wallet_toggle_updates_header() {
        let mut dashboard = dashboard();
        assert!(screen(&dashboard).lines().next().unwrap().contains("Not connected"));

        press(&mut dashboard, KeyCode::Char('w'));

        assert!(dashboard.wallet().is_connected());
        assert!(screen(&dashboard)
            .lines()
            .next()
            .unwrap()
            .contains("Wallet connected: 9xDk...e7A"));
    }

    #[test]
    fn test_staking_flow() {
        let mut dashboard = dashboard();
        for height in 0..3 {
            dashboard.on_block(&block(height));
        }
        let feed_before: Vec<_> = dashboard.feed().entries().cloned().collect();

        press(&mut dashboard, KeyCode::Tab);
        assert_eq!(dashboard.active_tab(), TabId::Staking);

        press(&mut dashboard, KeyCode::Char('1'));
        press(&mut dashboard, KeyCode::Char('0'));
        press(&mut dashboard, KeyCode::Enter);
        assert_eq!(
            dashboard.stake_form().outcome().map(ToString::to_string).as_deref(),
            Some("Connect your wallet before staking.")
        );
        assert_eq!(dashboard.stake_form().amount().content(), "10");
        let feed_after: Vec<_> = dashboard.feed().entries().cloned().collect();
        assert_eq!(feed_after, feed_before);
        assert_eq!(dashboard.hero().latest().and_then(|h| h.height.as_u64()), Some(2));

        press(&mut dashboard, KeyCode::Char('w'));
        press(&mut dashboard, KeyCode::Down);
        press(&mut dashboard, KeyCode::Enter);

        assert_eq!(
            dashboard.stake_form().outcome().map(ToString::to_string).as_deref(),
            Some("Staked 10 SUNC to Nova.")
        );
        assert!(screen(&dashboard).contains("Staked 10 SUNC to Nova."));
    }

    #[test]
    fn test_typing_ignored_on_blocks_tab() {
        let mut dashboard = dashboard();
        assert!(!dashboard.stake_form().amount().is_focused());
        press(&mut dashboard, KeyCode::Char('5'));
        press(&mut dashboard, KeyCode::Down);
        press(&mut dashboard, KeyCode::Enter);
        assert!(dashboard.stake_form().amount().is_empty());
        assert_eq!(dashboard.stake_form().validator(), "Helios");
        assert!(dashboard.stake_form().outcome().is_none());
    }

    #[test]
    fn test_amount_focus_follows_tab() {
        let mut dashboard = dashboard();
        press(&mut dashboard, KeyCode::Tab);
        assert!(dashboard.stake_form().amount().is_focused());
        press(&mut dashboard, KeyCode::Char('7'));

        press(&mut dashboard, KeyCode::BackTab);
        assert_eq!(dashboard.active_tab(), TabId::Blocks);
        assert!(!dashboard.stake_form().amount().is_focused());
        press(&mut dashboard, KeyCode::Char('8'));

        press(&mut dashboard, KeyCode::Tab);
        assert_eq!(dashboard.stake_form().amount().content(), "7");
    }

    #[test]
    fn test_status_and_metrics_on_screen() {
        let mut dashboard = dashboard();
        dashboard.set_status(Some(crate::chain::STATUS_SIMULATED), ConnectionState::Fallback);
        dashboard.refresh_metrics();

        let screen = screen(&dashboard);
        assert!(screen.contains("● Streaming (simulated)"));
        assert!(screen.contains("TPS "));
        assert!(screen.contains("Epoch "));
        assert!(dashboard.metrics().metrics().is_some());
        assert_eq!(dashboard.header().status(), Some("Streaming (simulated)"));
    }

    #[test]
    fn test_resize_to_tiny_does_not_panic() {
        let mut dashboard = dashboard();
        dashboard.on_block(&block(1));
        dashboard.resize(4, 2);
        let mut buffer = Buffer::new(4, 2);
        dashboard.render(&mut buffer);
        press(&mut dashboard, KeyCode::Tab);
        dashboard.render(&mut buffer);
    }
}
