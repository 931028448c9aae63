//! Network metrics panel and the sampler that feeds it.
//!
//! The figures are decorative: each refresh draws fresh uniform values.

use super::theme;
use super::traits::Widget;
use crate::buffer::Buffer;
use crate::layout::Rect;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Base and spread of the transactions-per-second figure.
pub const TPS_RANGE: (f64, f64) = (4_200.0, 1_800.0);
/// Base and spread of the active validator count.
pub const VALIDATOR_RANGE: (f64, f64) = (128.0, 32.0);
/// Base and spread of the epoch progress percentage.
pub const EPOCH_RANGE: (f64, f64) = (42.0, 40.0);

/// Gauge glyphs: filled, empty.
const GAUGE: (char, char) = ('▓', '░');

/// One sample of network figures.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Metrics {
    /// Transactions per second.
    pub tps: u32,
    /// Active validators.
    pub validators: u32,
    /// Epoch progress in percent.
    pub epoch_progress: f64,
}

impl Metrics {
    /// Epoch progress with one decimal, e.g. `63.4%`.
    pub fn epoch_label(&self) -> String {
        format!("{:.1}%", self.epoch_progress)
    }
}

/// Draws [`Metrics`] from a random source.
#[derive(Debug)]
pub struct MetricsSampler<R = StdRng> {
    rng: R,
}

impl MetricsSampler<StdRng> {
    /// Sampler seeded from the operating system.
    pub fn from_os_rng() -> Self {
        Self::new(StdRng::from_os_rng())
    }
}

impl<R: Rng> MetricsSampler<R> {
    /// Sampler drawing from `rng`.
    pub const fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Draw a fresh sample.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn sample(&mut self) -> Metrics {
        let mut draw = |(base, spread): (f64, f64)| base + self.rng.random::<f64>() * spread;
        Metrics {
            tps: draw(TPS_RANGE).round() as u32,
            validators: draw(VALIDATOR_RANGE).round() as u32,
            epoch_progress: draw(EPOCH_RANGE),
        }
    }
}

/// Panel showing the latest [`Metrics`] sample.
#[derive(Debug)]
pub struct MetricsPanel {
    metrics: Option<Metrics>,
    bounds: Rect,
}

impl MetricsPanel {
    /// Create a panel with no sample yet.
    pub const fn new(bounds: Rect) -> Self {
        Self {
            metrics: None,
            bounds,
        }
    }

    /// Show `metrics`.
    pub const fn update(&mut self, metrics: Metrics) {
        self.metrics = Some(metrics);
    }

    /// The sample on display.
    pub const fn metrics(&self) -> Option<&Metrics> {
        self.metrics.as_ref()
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn draw_gauge(buffer: &mut Buffer, x: u16, y: u16, width: u16, percent: f64) {
        let filled = ((percent / 100.0).clamp(0.0, 1.0) * f64::from(width)).round() as u16;
        for i in 0..width {
            let (glyph, colour) = if i < filled {
                (GAUGE.0, theme::ACCENT)
            } else {
                (GAUGE.1, theme::MUTED)
            };
            let mut tmp = [0u8; 4];
            buffer.draw_text(x + i, y, glyph.encode_utf8(&mut tmp), theme::TEXT.fg(colour), 1);
        }
    }
}

impl Widget for MetricsPanel {
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
        buffer.draw_text(area.x, area.y, "Network", theme::DIM, area.width);
        let Some(metrics) = self.metrics else {
            return;
        };

        if area.height > 1 {
            let line = format!("TPS {}   Validators {}", metrics.tps, metrics.validators);
            buffer.draw_text(area.x, area.y + 1, &line, theme::TITLE, area.width);
        }
        if area.height > 2 {
            let y = area.y + 2;
            let used = buffer.draw_text(area.x, y, "Epoch ", theme::TEXT, area.width);
            let label = format!(" {}", metrics.epoch_label());
            let label_width = u16::try_from(label.len()).unwrap_or(u16::MAX);
            let gauge_width = area.width.saturating_sub(used + label_width).min(24);
            Self::draw_gauge(buffer, area.x + used, y, gauge_width, metrics.epoch_progress);
            let x = area.x + used + gauge_width;
            buffer.draw_text(x, y, &label, theme::TEXT, area.right().saturating_sub(x));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_samples_within_ranges() {
        let mut sampler = MetricsSampler::new(StdRng::seed_from_u64(5));
        for _ in 0..1_000 {
            let m = sampler.sample();
            assert!((4_200..=6_000).contains(&m.tps), "tps {}", m.tps);
            assert!((128..=160).contains(&m.validators), "validators {}", m.validators);
            assert!((42.0..82.0).contains(&m.epoch_progress), "epoch {}", m.epoch_progress);
        }
    }

    #[test]
    fn test_epoch_label_one_decimal() {
        let metrics = Metrics {
            tps: 5_000,
            validators: 140,
            epoch_progress: 63.449,
        };
        assert_eq!(metrics.epoch_label(), "63.4%");
    }

    #[test]
    fn test_render_gauge() {
        let mut panel = MetricsPanel::new(Rect::new(0, 0, 40, 4));
        panel.update(Metrics {
            tps: 4_871,
            validators: 142,
            epoch_progress: 50.0,
        });
        let mut buffer = Buffer::new(40, 4);

        panel.render(&mut buffer);

        assert!(buffer.row_text(1).starts_with("TPS 4871   Validators 142"));
        let gauge = buffer.row_text(2);
        assert!(gauge.starts_with("Epoch ▓▓▓▓▓▓▓▓▓▓▓▓░░░░░░░░░░░░ 50.0%"), "{gauge}");
    }

    #[test]
    fn test_render_before_first_sample() {
        let panel = MetricsPanel::new(Rect::new(0, 0, 40, 4));
        let mut buffer = Buffer::new(40, 4);
        panel.render(&mut buffer);
        assert!(buffer.row_text(0).starts_with("Network"));
        assert!(buffer.row_text(1).trim().is_empty());
    }
}
