//! Live Actor: Dedicated thread for the optional WebSocket block feed.
//!
//! The actor owns the socket. It reports connection lifecycle and inbound
//! payloads as [`LiveEvent`]s and never interprets them; decoding and the
//! fallback decision belong to [`BlockSource`](super::BlockSource).

use crossbeam_channel::Sender;
use std::io;
use std::net::TcpStream;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;
use tracing::{debug, info, warn};
use tungstenite::handshake::client::Request;
use tungstenite::stream::MaybeTlsStream;
use tungstenite::{Message, WebSocket};

/// Lifecycle and data events from the live channel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LiveEvent {
    /// The WebSocket handshake completed.
    Opened,
    /// A text or binary frame arrived.
    Message(Vec<u8>),
    /// The peer closed the connection in an orderly way.
    Closed,
    /// Connecting failed or the transport broke.
    Error(String),
}

/// Handle to the live-channel thread.
pub struct LiveActor {
    handle: Option<JoinHandle<()>>,
    shutdown: Arc<AtomicBool>,
}

impl LiveActor {
    /// Spawn the thread and start connecting to `request`.
    ///
    /// `poll_timeout` bounds how long a socket read blocks before the thread
    /// checks for shutdown.
    pub fn spawn(request: Request, sender: Sender<LiveEvent>, poll_timeout: Duration) -> io::Result<Self> {
        let shutdown = Arc::new(AtomicBool::new(false));
        let shutdown_clone = shutdown.clone();

        let handle = thread::Builder::new()
            .name("sunscan-live".to_string())
            .spawn(move || Self::run_loop(request, &sender, &shutdown_clone, poll_timeout))?;

        Ok(Self {
            handle: Some(handle),
            shutdown,
        })
    }

    /// Ask the thread to close the socket and exit.
    pub fn shutdown(&self) {
        self.shutdown.store(true, Ordering::Relaxed);
    }

    /// Signal shutdown and wait for the thread to finish.
    pub fn join(mut self) {
        self.shutdown();
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }

    fn run_loop(request: Request, sender: &Sender<LiveEvent>, shutdown: &AtomicBool, poll_timeout: Duration) {
        let uri = request.uri().clone();
        let mut socket = match tungstenite::connect(request) {
            Ok((socket, _response)) => socket,
            Err(e) => {
                warn!(%uri, error = %e, "live channel connect failed");
                let _ = sender.send(LiveEvent::Error(e.to_string()));
                return;
            }
        };
        info!(%uri, "live channel connected");
        if let Err(e) = set_read_timeout(&socket, poll_timeout) {
            warn!(error = %e, "could not set live socket read timeout");
        }
        if sender.send(LiveEvent::Opened).is_err() {
            return;
        }

        loop {
            if shutdown.load(Ordering::Relaxed) {
                debug!("live channel shutting down");
                let _ = socket.close(None);
                let _ = socket.flush();
                return;
            }

            let event = match socket.read() {
                Ok(Message::Text(text)) => LiveEvent::Message(text.into_bytes()),
                Ok(Message::Binary(bytes)) => LiveEvent::Message(bytes),
                Ok(Message::Close(frame)) => {
                    info!(?frame, "live channel closed by peer");
                    LiveEvent::Closed
                }
                Ok(Message::Ping(_) | Message::Pong(_) | Message::Frame(_)) => continue,
                Err(tungstenite::Error::Io(e))
                    if matches!(e.kind(), io::ErrorKind::WouldBlock | io::ErrorKind::TimedOut) =>
                {
                    continue;
                }
                Err(tungstenite::Error::ConnectionClosed | tungstenite::Error::AlreadyClosed) => {
                    LiveEvent::Closed
                }
                Err(e) => {
                    warn!(error = %e, "live channel transport error");
                    LiveEvent::Error(e.to_string())
                }
            };

            let terminal = matches!(event, LiveEvent::Closed | LiveEvent::Error(_));
            if sender.send(event).is_err() || terminal {
                return;
            }
        }
    }
}

fn set_read_timeout(socket: &WebSocket<MaybeTlsStream<TcpStream>>, timeout: Duration) -> io::Result<()> {
    match socket.get_ref() {
        MaybeTlsStream::Plain(stream) => stream.set_read_timeout(Some(timeout)),
        _ => Ok(()),
    }
}

impl Drop for LiveActor {
    fn drop(&mut self) {
        self.shutdown();
    }
}
