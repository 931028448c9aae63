//! Engine: Terminal session that ties the input and render actors together.
//!
//! Creating an [`Engine`] takes over the terminal (raw mode, optional
//! alternate screen, hidden cursor); dropping it gives the terminal back.

use super::messages::{InputEvent, RenderCommand};
use super::{InputActor, RendererActor};
use crate::buffer::Buffer;
use crate::error::Result;
use crossbeam_channel::{bounded, Receiver, Sender};
use crossterm::{
    cursor, execute,
    terminal::{self, EnterAlternateScreen, LeaveAlternateScreen},
};
use std::io;
use std::time::Duration;
use tracing::{debug, warn};

/// Configuration for the Engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    /// Input poll timeout.
    pub input_poll_timeout: Duration,
    /// Whether to use the alternate screen buffer.
    pub alternate_screen: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            input_poll_timeout: Duration::from_millis(50),
            alternate_screen: true,
        }
    }
}

/// The terminal session.
pub struct Engine {
    config: EngineConfig,
    input_rx: Receiver<InputEvent>,
    render_tx: Sender<RenderCommand>,
    input_actor: Option<InputActor>,
    renderer_actor: Option<RendererActor>,
    /// Frame being composed.
    buffer: Buffer,
    width: u16,
    height: u16,
    /// Next present must redraw every cell.
    needs_full_redraw: bool,
}

impl Engine {
    /// Take over the terminal and start the input and render threads.
    ///
    /// # Errors
    ///
    /// Returns an error if terminal setup fails or a thread cannot be spawned.
    /// The terminal is restored before returning an error.
    pub fn with_config(config: EngineConfig) -> Result<Self> {
        let (width, height) = terminal::size()?;

        terminal::enable_raw_mode()?;
        let mut stdout = io::stdout();
        let entered = if config.alternate_screen {
            execute!(stdout, EnterAlternateScreen, cursor::Hide)
        } else {
            execute!(stdout, cursor::Hide)
        };
        if let Err(e) = entered {
            restore_terminal(config.alternate_screen);
            return Err(e.into());
        }

        let (input_tx, input_rx) = bounded::<InputEvent>(64);
        let (render_tx, render_rx) = bounded::<RenderCommand>(4);

        let actors = InputActor::spawn(input_tx, config.input_poll_timeout)
            .and_then(|input| RendererActor::spawn(render_rx).map(|render| (input, render)));
        let (input_actor, renderer_actor) = match actors {
            Ok(actors) => actors,
            Err(e) => {
                restore_terminal(config.alternate_screen);
                return Err(e.into());
            }
        };

        debug!(width, height, "terminal session started");
        Ok(Self {
            config,
            input_rx,
            render_tx,
            input_actor: Some(input_actor),
            renderer_actor: Some(renderer_actor),
            buffer: Buffer::new(width, height),
            width,
            height,
            needs_full_redraw: true,
        })
    }

    /// Terminal width.
    pub const fn width(&self) -> u16 {
        self.width
    }

    /// Terminal height.
    pub const fn height(&self) -> u16 {
        self.height
    }

    /// Input events, for use in `select!`.
    pub const fn input_receiver(&self) -> &Receiver<InputEvent> {
        &self.input_rx
    }

    /// The frame being composed.
    pub const fn buffer_mut(&mut self) -> &mut Buffer {
        &mut self.buffer
    }

    /// Adopt a new terminal size. The next present redraws everything.
    pub fn handle_resize(&mut self, width: u16, height: u16) {
        self.width = width;
        self.height = height;
        self.buffer.resize(width, height);
        self.needs_full_redraw = true;
    }

    /// Send the composed frame to the render thread.
    pub fn present(&mut self) {
        let frame = Box::new(self.buffer.clone());
        let command = if std::mem::take(&mut self.needs_full_redraw) {
            RenderCommand::FullRedraw(frame)
        } else {
            RenderCommand::Update(frame)
        };
        if self.render_tx.send(command).is_err() {
            warn!("render thread is gone, frame dropped");
        }
    }
}

impl Drop for Engine {
    fn drop(&mut self) {
        if let Some(actor) = self.input_actor.take() {
            actor.join();
        }
        let _ = self.render_tx.send(RenderCommand::Shutdown);
        if let Some(actor) = self.renderer_actor.take() {
            actor.join();
        }
        restore_terminal(self.config.alternate_screen);
        debug!("terminal session ended");
    }
}

/// Undo everything [`Engine::with_config`] did to the terminal.
///
/// Safe to call more than once; the panic hook calls it too.
pub fn restore_terminal(alternate_screen: bool) {
    let mut stdout = io::stdout();
    let _ = execute!(stdout, crossterm::style::ResetColor, cursor::Show);
    if alternate_screen {
        let _ = execute!(stdout, LeaveAlternateScreen);
    }
    let _ = terminal::disable_raw_mode();
}
