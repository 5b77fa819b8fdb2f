use std::io;
use std::thread;
use std::time::Duration;

use crossterm::event::{self, Event, KeyEvent, KeyEventKind};
use tokio::sync::mpsc;

use crate::shutdown::ShutdownHandle;

/// Poll timeout; bounds how long the reader thread takes to notice shutdown.
const POLL_INTERVAL: Duration = Duration::from_millis(50);

pub enum AppEvent {
    Key(KeyEvent),
    Resize(u16, u16),
}

/// Reads terminal events on a dedicated thread and forwards them to the
/// async UI loop.
pub struct EventHandler {
    rx: mpsc::UnboundedReceiver<AppEvent>,
}

impl EventHandler {
    pub fn new(shutdown: ShutdownHandle) -> io::Result<Self> {
        let (tx, rx) = mpsc::unbounded_channel();

        thread::Builder::new()
            .name("terminal-events".to_string())
            .spawn(move || read_loop(tx, shutdown))?;

        Ok(Self { rx })
    }

    /// Next terminal event, or `None` once the reader thread has stopped.
    pub async fn next(&mut self) -> Option<AppEvent> {
        self.rx.recv().await
    }
}

fn read_loop(tx: mpsc::UnboundedSender<AppEvent>, shutdown: ShutdownHandle) {
    loop {
        if shutdown.is_shutting_down() {
            break;
        }

        match event::poll(POLL_INTERVAL) {
            Ok(true) => {}
            Ok(false) => continue,
            Err(err) => {
                tracing::error!("Terminal poll failed: {}", err);
                break;
            }
        }

        let app_event = match event::read() {
            Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => AppEvent::Key(key),
            Ok(Event::Resize(cols, rows)) => AppEvent::Resize(cols, rows),
            Ok(_) => continue,
            Err(err) => {
                tracing::error!("Terminal read failed: {}", err);
                break;
            }
        };

        if tx.send(app_event).is_err() {
            break;
        }
    }
    tracing::debug!("Terminal event reader stopped");
}
