//! Status lines for bars.
//!
//! Every line has the form `<output> <attribute> <value...>`. One block of six lines is written
//! per monitor whenever something a bar shows may have changed.
use crate::models::Handle;
use crate::state::State;

/// Lines waiting to be written by the event loop.
#[derive(Debug, Default)]
pub struct Status {
    pending: Vec<String>,
}

impl Status {
    pub fn push(&mut self, line: String) {
        self.pending.push(line);
    }

    /// Hand out the pending lines, leaving nothing behind.
    pub fn take(&mut self) -> Vec<String> {
        std::mem::take(&mut self.pending)
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

impl<H: Handle> State<H> {
    pub fn print_status(&mut self) {
        let mut lines = vec![];
        for monitor in &self.monitors {
            let name = &monitor.name;
            let mut occupied = 0;
            let mut urgent = 0;
            for client in self.clients.tiled_clients() {
                if client.monitor != Some(monitor.id) {
                    continue;
                }
                occupied |= client.tags;
                if client.is_urgent {
                    urgent |= client.tags;
                }
            }
            let top = self
                .clients
                .topmost_visible(monitor)
                .and_then(|id| self.clients.get(id));
            let selected_tags = if let Some(client) = top {
                lines.push(format!(
                    "{name} title {}",
                    client.surface.title().unwrap_or("broken")
                ));
                lines.push(format!("{name} fullscreen {}", u8::from(client.is_fullscreen)));
                lines.push(format!("{name} floating {}", u8::from(client.is_floating)));
                client.tags
            } else {
                lines.push(format!("{name} title "));
                lines.push(format!("{name} fullscreen "));
                lines.push(format!("{name} floating "));
                0
            };
            let selected = self.selected_monitor == Some(monitor.id);
            lines.push(format!("{name} selmon {}", u8::from(selected)));
            lines.push(format!(
                "{name} tags {occupied} {} {selected_tags} {urgent}",
                monitor.active_tags()
            ));
            lines.push(format!("{name} layout {}", monitor.active_layout().symbol()));
        }
        for line in lines {
            self.status.push(line);
        }
    }
}
