//! `sunscan` binary: parse flags, set up logging, run the dashboard.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use sunscan::actor::restore_terminal;
use sunscan::config::{DashboardConfig, DEFAULT_ENDPOINT, DEFAULT_START_HEIGHT};
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "sunscan")]
#[command(about = "Terminal block explorer for the Sunchain devnet")]
#[command(version)]
struct Args {
    /// WebSocket endpoint streaming block records
    #[arg(long, default_value = DEFAULT_ENDPOINT)]
    endpoint: String,

    /// Skip the live feed and stream simulated blocks only
    #[arg(long)]
    offline: bool,

    /// Height the simulated chain starts counting from
    #[arg(long, default_value_t = DEFAULT_START_HEIGHT)]
    start_height: u64,

    /// Interval between simulated blocks, in milliseconds
    #[arg(long, default_value_t = 1_800, value_parser = clap::value_parser!(u64).range(1..))]
    block_interval_ms: u64,

    /// Interval between metric refreshes, in milliseconds
    #[arg(long, default_value_t = 2_000, value_parser = clap::value_parser!(u64).range(1..))]
    metrics_interval_ms: u64,

    /// Append logs to this file (filter with RUST_LOG)
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Draw on the main screen instead of the alternate screen
    #[arg(long)]
    no_alt_screen: bool,
}

impl Args {
    fn into_config(self) -> DashboardConfig {
        let mut config = DashboardConfig::default();
        config.source.endpoint = (!self.offline).then_some(self.endpoint);
        config.source.start_height = self.start_height;
        config.source.block_interval = Duration::from_millis(self.block_interval_ms);
        config.metrics_interval = Duration::from_millis(self.metrics_interval_ms);
        config.engine.alternate_screen = !self.no_alt_screen;
        config.log_file = self.log_file;
        config
    }
}

fn main() -> Result<()> {
    let config = Args::parse().into_config();

    sunscan::logging::init(config.log_file.as_deref()).context("failed to set up logging")?;
    info!(?config, "starting sunscan");

    // Setup panic hook to restore terminal
    let alternate_screen = config.engine.alternate_screen;
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic| {
        restore_terminal(alternate_screen);
        original_hook(panic);
    }));

    sunscan::run(&config).context("dashboard failed")?;
    Ok(())
}
