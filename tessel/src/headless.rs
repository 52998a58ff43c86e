//! A display server without a display. Events are read as JSON lines, one `DisplayEvent` per
//! line, and actions are only logged. Lines that are empty or start with `#` are skipped.
//!
//! ```text
//! {"OutputAdded":{"name":"HDMI-A-1","geometry":{"x":0,"y":0,"w":1920,"h":1080}}}
//! {"SurfaceCreated":{"handle":1,"kind":"XdgToplevel","title":"foot"}}
//! {"SurfaceMapped":1}
//! {"SendCommand":"Zoom"}
//! ```
use serde::{Deserialize, Serialize};
use std::future::Future;
use std::pin::Pin;
use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::Arc;
use tessel_core::models::Handle;
use tessel_core::{Command, Config, DisplayAction, DisplayEvent, DisplayServer};
use tokio::io::{AsyncBufReadExt, AsyncRead, BufReader};
use tokio::sync::Notify;

/// Surfaces are named by plain numbers in scripts.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct SurfaceId(pub u32);

impl Handle for SurfaceId {}

pub struct HeadlessDisplayServer {
    events: Receiver<DisplayEvent<SurfaceId>>,
    task_notify: Arc<Notify>,
    executed: usize,
}

impl HeadlessDisplayServer {
    /// Read events from `reader` until it ends. The end of the input quits the window manager.
    pub fn from_reader(reader: impl AsyncRead + Unpin + Send + 'static) -> Self {
        let (sender, events) = mpsc::channel();
        let task_notify = Arc::new(Notify::new());
        tokio::spawn(read_events(reader, sender, task_notify.clone()));
        Self {
            events,
            task_notify,
            executed: 0,
        }
    }

    /// Number of actions carried out so far.
    pub fn executed(&self) -> usize {
        self.executed
    }
}

async fn read_events(
    reader: impl AsyncRead + Unpin,
    sender: Sender<DisplayEvent<SurfaceId>>,
    notify: Arc<Notify>,
) {
    let mut lines = BufReader::new(reader).lines();
    let mut line_number = 0;
    loop {
        let event = match lines.next_line().await {
            Ok(Some(line)) => {
                line_number += 1;
                let line = line.trim();
                if line.is_empty() || line.starts_with('#') {
                    continue;
                }
                match serde_json::from_str(line) {
                    Ok(event) => event,
                    Err(err) => {
                        tracing::error!("Ignoring line {}: {}", line_number, err);
                        continue;
                    }
                }
            }
            Ok(None) => {
                tracing::info!("End of input, quitting");
                DisplayEvent::SendCommand(Command::Quit)
            }
            Err(err) => {
                tracing::error!("Unable to read events: {}", err);
                DisplayEvent::SendCommand(Command::Quit)
            }
        };
        let quit = matches!(event, DisplayEvent::SendCommand(Command::Quit));
        if sender.send(event).is_err() {
            return;
        }
        notify.notify_one();
        if quit {
            return;
        }
    }
}

impl DisplayServer<SurfaceId> for HeadlessDisplayServer {
    fn new(_config: &impl Config) -> Self {
        Self::from_reader(tokio::io::stdin())
    }

    fn get_next_events(&mut self) -> Vec<DisplayEvent<SurfaceId>> {
        self.events.try_iter().collect()
    }

    fn execute_action(&mut self, act: DisplayAction<SurfaceId>) -> Option<DisplayEvent<SurfaceId>> {
        tracing::debug!("DisplayAction: {:?}", act);
        self.executed += 1;
        match act {
            // Nothing draws here, so every configure is acknowledged right away.
            DisplayAction::SetSize { handle, serial, .. } => {
                Some(DisplayEvent::SurfaceCommitted(handle, serial))
            }
            _ => None,
        }
    }

    fn wait_readable(&self) -> Pin<Box<dyn Future<Output = ()>>> {
        let task_notify = self.task_notify.clone();
        Box::pin(async move {
            task_notify.notified().await;
        })
    }

    fn flush(&self) {}
}
