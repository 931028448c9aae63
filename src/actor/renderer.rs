//! Renderer Actor: Dedicated thread for writing frames to the terminal.
//!
//! The actor owns the frame that is currently on screen. Each incoming frame
//! is diffed against it and flushed in a single write.

use super::messages::RenderCommand;
use crate::buffer::diff::{render_diff, render_full, DiffState};
use crate::buffer::Buffer;
use crossbeam_channel::Receiver;
use std::io::{self, Write};
use std::thread::{self, JoinHandle};
use std::time::Instant;
use tracing::{debug, error};

/// Render statistics.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderStats {
    /// Total frames rendered.
    pub frames: u64,
    /// Total cells changed across diffed frames.
    pub cells_changed: u64,
    /// Total bytes written to the terminal.
    pub bytes_written: u64,
    /// Last render time in microseconds.
    pub last_render_us: u64,
}

/// Frame presenter over any writer.
pub struct Renderer<W: Write> {
    /// Frame currently on screen; `None` before the first frame.
    current: Option<Buffer>,
    diff_state: DiffState,
    /// Pre-allocated output buffer.
    output: Vec<u8>,
    writer: W,
    stats: RenderStats,
}

impl<W: Write> Renderer<W> {
    /// Create a renderer that writes to `writer`.
    pub fn new(writer: W) -> Self {
        Self {
            current: None,
            diff_state: DiffState::new(),
            output: Vec::with_capacity(64 * 1024),
            writer,
            stats: RenderStats::default(),
        }
    }

    /// Statistics so far.
    pub const fn stats(&self) -> RenderStats {
        self.stats
    }

    /// The underlying writer.
    pub const fn writer(&self) -> &W {
        &self.writer
    }

    /// Present `next`.
    ///
    /// Falls back to a full redraw when `full` is set, on the first frame,
    /// or when the size changed since the last frame.
    pub fn present(&mut self, next: Buffer, full: bool) -> io::Result<()> {
        let start = Instant::now();
        self.output.clear();

        match &self.current {
            Some(current)
                if !full && current.width() == next.width() && current.height() == next.height() =>
            {
                let result = render_diff(current, &next, &mut self.output, &mut self.diff_state);
                self.stats.cells_changed += result.cells_changed as u64;
            }
            _ => render_full(&next, &mut self.output, &mut self.diff_state),
        }

        if !self.output.is_empty() {
            self.writer.write_all(&self.output)?;
            self.writer.flush()?;
        }

        self.current = Some(next);
        self.stats.frames += 1;
        self.stats.bytes_written += self.output.len() as u64;
        self.stats.last_render_us = u64::try_from(start.elapsed().as_micros()).unwrap_or(u64::MAX);
        Ok(())
    }
}

/// Renderer actor that handles terminal output.
pub struct RendererActor {
    handle: Option<JoinHandle<()>>,
}

impl RendererActor {
    /// Spawn the renderer thread, writing to stdout.
    pub fn spawn(receiver: Receiver<RenderCommand>) -> io::Result<Self> {
        let handle = thread::Builder::new()
            .name("sunscan-render".to_string())
            .spawn(move || {
                let mut renderer = Renderer::new(io::stdout());
                if let Err(e) = Self::run_loop(&receiver, &mut renderer) {
                    error!(error = %e, "render thread failed");
                }
                debug!(stats = ?renderer.stats(), "render thread finished");
            })?;

        Ok(Self {
            handle: Some(handle),
        })
    }

    /// Wait for the render thread to finish. Send `Shutdown` first.
    pub fn join(mut self) {
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }

    /// Runs until `Shutdown` arrives or every sender is gone.
    fn run_loop<W: Write>(receiver: &Receiver<RenderCommand>, renderer: &mut Renderer<W>) -> io::Result<()> {
        while let Ok(command) = receiver.recv() {
            match command {
                RenderCommand::FullRedraw(buffer) => renderer.present(*buffer, true)?,
                RenderCommand::Update(buffer) => renderer.present(*buffer, false)?,
                RenderCommand::Shutdown => break,
            }
        }
        Ok(())
    }
}
