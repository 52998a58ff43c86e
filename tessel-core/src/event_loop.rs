use crate::config::Config;
use crate::errors::{Result, TesselError};
use crate::models::Handle;
use crate::{DisplayServer, Manager};
use std::io::Write;
use std::sync::atomic::Ordering;

impl<H: Handle, C: Config, SERVER: DisplayServer<H>> Manager<H, C, SERVER> {
    /// Process display events until a quit command. Status lines are written to `status` as
    /// they are produced.
    ///
    /// # Errors
    ///
    /// Returns `TesselError::NoOutputs` when the first batch of events did not announce a
    /// single output.
    pub async fn event_loop(mut self, mut status: impl Write) -> Result<()> {
        let mut event_buffer = vec![];
        let mut first_batch = true;
        loop {
            self.display_server.flush();

            tokio::select! {
                () = self.display_server.wait_readable(), if event_buffer.is_empty() => {
                    event_buffer.append(&mut self.display_server.get_next_events());
                    continue;
                }
                else => {
                    for event in event_buffer.drain(..) {
                        self.display_event_handler(event);
                    }
                }
            }

            if first_batch {
                first_batch = false;
                if self.state.monitors.is_empty() {
                    self.shutdown();
                    return Err(TesselError::NoOutputs);
                }
            }

            // Perform any actions requested by the handlers.
            while let Some(act) = self.state.actions.pop_front() {
                if let Some(event) = self.display_server.execute_action(act) {
                    event_buffer.push(event);
                }
            }

            if let Err(err) = write_status(&mut status, self.state.status.take()) {
                tracing::warn!("Unable to write status: {}", err);
            }

            if self.reap_requested.swap(false, Ordering::SeqCst) {
                self.children.remove_finished_children();
            }

            if self.quit_requested {
                break;
            }
        }
        self.display_server.flush();
        self.shutdown();
        Ok(())
    }

    fn shutdown(&mut self) {
        if let Some(pid) = self.startup.take() {
            tracing::debug!("Stopping startup command {}", pid);
            self.children.kill(pid);
        }
    }
}

fn write_status(out: &mut impl Write, lines: Vec<String>) -> std::io::Result<()> {
    if lines.is_empty() {
        return Ok(());
    }
    for line in lines {
        writeln!(out, "{line}")?;
    }
    out.flush()
}

#[cfg(test)]
mod tests {
    use crate::config::TestConfig;
    use crate::display_event::OutputInfo;
    use crate::display_servers::MockDisplayServer;
    use crate::errors::TesselError;
    use crate::models::{Manager, MockHandle, SurfaceInfo, SurfaceKind, Xyhw};
    use crate::{Command, DisplayEvent};

    type TestManager = Manager<MockHandle, TestConfig, MockDisplayServer<MockHandle>>;

    fn output() -> DisplayEvent<MockHandle> {
        DisplayEvent::OutputAdded(OutputInfo {
            name: "TEST-1".to_owned(),
            geometry: Xyhw::new(0, 0, 1920, 1080),
        })
    }

    #[tokio::test]
    async fn runs_a_script_until_quit() {
        let mut manager = TestManager::new(&TestConfig::default());
        manager.display_server.events.extend([
            output(),
            DisplayEvent::SurfaceCreated(SurfaceInfo::new(1, SurfaceKind::XdgToplevel)),
            DisplayEvent::TitleChanged(1, "htop".to_owned()),
            DisplayEvent::SurfaceMapped(1),
            DisplayEvent::SendCommand(Command::Quit),
        ]);
        let mut status = vec![];
        let result = manager.event_loop(&mut status).await;
        assert!(result.is_ok());
        let status = String::from_utf8(status).unwrap_or_default();
        assert!(status.lines().any(|l| l == "TEST-1 title htop"), "{status}");
        assert!(status.lines().any(|l| l == "TEST-1 selmon 1"), "{status}");
    }

    #[tokio::test]
    async fn fails_without_outputs() {
        let mut manager = TestManager::new(&TestConfig::default());
        manager
            .display_server
            .events
            .push_back(DisplayEvent::SendCommand(Command::Quit));
        let result = manager.event_loop(std::io::sink()).await;
        assert!(matches!(result, Err(TesselError::NoOutputs)));
    }
}
