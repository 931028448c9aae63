//! Ticker Actor: Dedicated thread that emits ticks at a fixed interval.
//!
//! Drives synthetic block generation and metric refreshes. Each ticker is
//! an owned handle: cancelling or dropping it stops the thread right away
//! (the thread waits on a cancel channel rather than sleeping), so a holder
//! that keeps at most one handle can never leak a timer.

use crossbeam_channel::{bounded, Receiver, RecvTimeoutError, Sender, TrySendError};
use std::io;
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

/// A tick event sent at regular intervals.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tick {
    /// Tick number, starting at 0.
    pub seq: u64,
    /// Time elapsed since the ticker was started.
    pub elapsed: Duration,
}

/// Interval timer running on its own thread.
pub struct TickerActor {
    handle: Option<JoinHandle<()>>,
    /// Dropping the sender cancels the ticker.
    cancel: Option<Sender<()>>,
    tick_rx: Receiver<Tick>,
}

impl TickerActor {
    /// Spawn a ticker whose first tick fires one `interval` after start.
    pub fn spawn(name: &str, interval: Duration) -> io::Result<Self> {
        let (cancel_tx, cancel_rx) = bounded::<()>(0);
        // Small buffer: a slow consumer skips ticks instead of queueing them.
        let (tick_tx, tick_rx) = bounded(2);

        let handle = thread::Builder::new()
            .name(name.to_string())
            .spawn(move || Self::run_loop(&tick_tx, &cancel_rx, interval))?;

        Ok(Self {
            handle: Some(handle),
            cancel: Some(cancel_tx),
            tick_rx,
        })
    }

    /// The tick receiver, for use in `select!`.
    #[inline]
    pub const fn receiver(&self) -> &Receiver<Tick> {
        &self.tick_rx
    }

    /// Stop emitting ticks. Idempotent.
    fn cancel(&mut self) {
        self.cancel.take();
    }

    /// Cancel and wait for the thread to finish.
    pub fn join(mut self) {
        self.cancel();
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }

    fn run_loop(tick_tx: &Sender<Tick>, cancel_rx: &Receiver<()>, interval: Duration) {
        let start = Instant::now();
        let mut next_tick = start + interval;
        let mut seq = 0u64;

        loop {
            let wait = next_tick.saturating_duration_since(Instant::now());
            match cancel_rx.recv_timeout(wait) {
                Err(RecvTimeoutError::Timeout) => {}
                Ok(()) | Err(RecvTimeoutError::Disconnected) => return,
            }

            let now = Instant::now();
            let tick = Tick {
                seq,
                elapsed: now - start,
            };
            if let Err(TrySendError::Disconnected(_)) = tick_tx.try_send(tick) {
                return;
            }

            seq += 1;
            next_tick += interval;
            // Behind schedule: skip missed ticks rather than bursting.
            if next_tick < now {
                next_tick = now + interval;
            }
        }
    }
}

impl Drop for TickerActor {
    fn drop(&mut self) {
        self.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ticker_basic() {
        let ticker = TickerActor::spawn("test-ticker", Duration::from_millis(10)).unwrap();

        let tick = ticker.receiver().recv_timeout(Duration::from_millis(500)).unwrap();
        assert_eq!(tick.seq, 0);
        assert!(tick.elapsed >= Duration::from_millis(10));

        let tick2 = ticker.receiver().recv_timeout(Duration::from_millis(500)).unwrap();
        assert_eq!(tick2.seq, 1);

        ticker.join();
    }

    #[test]
    fn test_first_tick_waits_one_interval() {
        let ticker = TickerActor::spawn("test-ticker", Duration::from_millis(300)).unwrap();
        assert!(ticker.receiver().recv_timeout(Duration::from_millis(100)).is_err());
        assert!(ticker.receiver().recv_timeout(Duration::from_millis(1_000)).is_ok());
    }

    #[test]
    fn test_cancel_stops_ticks() {
        let mut ticker = TickerActor::spawn("test-ticker", Duration::from_millis(5)).unwrap();
        ticker.cancel();
        assert!(ticker.cancel.is_none());

        // At most the buffered ticks drain, then the channel disconnects.
        let mut received = 0;
        while ticker.receiver().recv_timeout(Duration::from_millis(200)).is_ok() {
            received += 1;
            assert!(received <= 2);
        }
    }
}
