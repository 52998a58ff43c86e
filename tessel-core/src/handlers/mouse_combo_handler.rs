#![allow(clippy::wildcard_imports)]

use super::*;
use crate::models::GrabMode;
use crate::utils::modmask_lookup::clean_mask;
use crate::{Button, ModMask};

impl<H: Handle, C: Config, SERVER: DisplayServer<H>> Manager<H, C, SERVER> {
    /// Clicking focuses and raises the managed client under the cursor. A matching button
    /// binding then runs; only the first one does. Unbound buttons go to the client.
    /// Returns true if a binding ran.
    pub fn button_press(&mut self, modmask: ModMask, button: Button) -> bool {
        let (x, y) = self.state.seat.cursor;
        let clicked = self
            .state
            .client_at(x, y)
            .filter(|id| self.state.clients.get(*id).is_some_and(|c| !c.is_unmanaged()));
        if clicked.is_some() {
            self.state.focus_client(clicked, true);
        }
        let mods = clean_mask(modmask);
        let command = self
            .state
            .mousebinds
            .iter()
            .find(|b| b.button == button && clean_mask(b.modmask) == mods)
            .map(|b| b.command.clone());
        if let Some(command) = command {
            return self.command_handler(&command);
        }
        self.state
            .actions
            .push_back(DisplayAction::ForwardButton { button, pressed: true });
        false
    }
}

impl<H: Handle> State<H> {
    /// Releasing a button ends a grab and drops the client on the monitor under the cursor.
    pub fn button_release(&mut self, button: Button) {
        let Some(grabbed) = self.seat.mode.grabbed() else {
            self.actions
                .push_back(DisplayAction::ForwardButton { button, pressed: false });
            return;
        };
        self.seat.mode = GrabMode::Normal;
        if self.seat.pointer.take().is_some() {
            self.actions.push_back(DisplayAction::PointerClear);
        }
        let (x, y) = self.seat.cursor;
        self.pointer_motion(x, y);
        if let Some(monitor) = self.monitor_at(x, y) {
            self.selected_monitor = Some(monitor);
        }
        let monitor = self.selected_monitor;
        self.set_monitor(grabbed, monitor, 0);
    }

    /// Start moving (or resizing) the client under the cursor with the pointer. Only the client
    /// that has pointer focus can be grabbed, and grabbing makes it float.
    pub fn move_resize(&mut self, resize: bool) {
        if self.seat.mode != GrabMode::Normal {
            return;
        }
        let (x, y) = self.seat.cursor;
        let Some(id) = self.client_at(x, y) else {
            return;
        };
        let Some(client) = self.clients.get(id) else {
            return;
        };
        if client.is_unmanaged() || client.is_fullscreen {
            return;
        }
        if self.seat.pointer != Some(client.handle()) {
            tracing::debug!("Denied grab of {}, it does not have the pointer", id);
            return;
        }
        if !client.is_floating {
            self.set_floating(id, true);
        }
        let Some(g) = self.clients.get(id).map(|c| c.geometry) else {
            return;
        };
        if resize {
            let corner = (g.x + g.w, g.y + g.h);
            self.seat.cursor = corner;
            self.seat.mode = GrabMode::Resizing(id);
            self.actions.push_back(DisplayAction::WarpPointer(corner.0, corner.1));
            self.set_cursor("bottom_right_corner");
        } else {
            self.seat.grab_offset = (x - g.x, y - g.y);
            self.seat.mode = GrabMode::Moving(id);
            self.set_cursor("fleur");
        }
    }
}
