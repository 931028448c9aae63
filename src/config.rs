//! Runtime configuration.
//!
//! Every setting has a default; the binary overrides individual fields from
//! command-line flags.

use crate::actor::EngineConfig;
use std::path::PathBuf;
use std::time::Duration;

/// Live endpoint used when none is given on the command line.
pub const DEFAULT_ENDPOINT: &str = "ws://localhost:8080/blocks";
/// Height the synthetic generator counts up from.
pub const DEFAULT_START_HEIGHT: u64 = 982_341;
/// Interval between synthetic blocks.
pub const DEFAULT_BLOCK_INTERVAL: Duration = Duration::from_millis(1_800);
/// Interval between metric refreshes.
pub const DEFAULT_METRICS_INTERVAL: Duration = Duration::from_millis(2_000);
/// How long a live socket read blocks before checking for shutdown.
pub const DEFAULT_LIVE_POLL_TIMEOUT: Duration = Duration::from_millis(100);

/// Block source settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceConfig {
    /// Live channel URL; `None` streams simulated blocks only.
    pub endpoint: Option<String>,
    /// Starting height for synthetic blocks.
    pub start_height: u64,
    /// Synthetic block interval.
    pub block_interval: Duration,
    /// Socket read timeout on the live thread.
    pub live_poll_timeout: Duration,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            endpoint: Some(DEFAULT_ENDPOINT.to_string()),
            start_height: DEFAULT_START_HEIGHT,
            block_interval: DEFAULT_BLOCK_INTERVAL,
            live_poll_timeout: DEFAULT_LIVE_POLL_TIMEOUT,
        }
    }
}

/// Everything the dashboard needs to start.
#[derive(Debug, Clone)]
pub struct DashboardConfig {
    /// Block source settings.
    pub source: SourceConfig,
    /// Terminal engine settings.
    pub engine: EngineConfig,
    /// Metric refresh interval.
    pub metrics_interval: Duration,
    /// Where to write logs; `None` disables logging.
    pub log_file: Option<PathBuf>,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            source: SourceConfig::default(),
            engine: EngineConfig::default(),
            metrics_interval: DEFAULT_METRICS_INTERVAL,
            log_file: None,
        }
    }
}
