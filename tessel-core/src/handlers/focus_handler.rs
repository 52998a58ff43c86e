#![allow(clippy::wildcard_imports)]

use super::*;
use crate::utils::helpers::walk_from;

impl<H: Handle> State<H> {
    /// Give `id` the keyboard, or clear keyboard focus for `None`.
    ///
    /// With `lift` the client is also raised to the top of the stacking order. While a keyboard
    /// interactive overlay holds the keyboard the client only moves up the focus history, so it
    /// gets the keyboard back once the overlay goes away.
    pub fn focus_client(&mut self, id: Option<ClientId>, lift: bool) {
        let id = id.filter(|id| self.clients.get(*id).is_some_and(|c| c.is_mapped()));
        if let (Some(id), true) = (id, lift) {
            self.raise(id);
        }
        let old = self.seat.keyboard;
        if id.is_some() && old == id.map(KeyboardTarget::Client) {
            return;
        }

        if let Some(id) = id {
            if let Some(client) = self.clients.get_mut(id).filter(|c| !c.is_unmanaged()) {
                client.is_urgent = false;
                let border = DisplayAction::SetBorder {
                    handle: client.handle(),
                    width: client.border_width,
                    focused: true,
                };
                if client.monitor.is_some() {
                    self.selected_monitor = client.monitor;
                }
                self.clients.touch_focus(id);
                self.actions.push_back(border);
            }
        }

        match old {
            Some(KeyboardTarget::Overlay(_)) => return,
            Some(KeyboardTarget::Client(old_id)) if Some(old_id) != id => {
                let old_client = self
                    .clients
                    .get(old_id)
                    .filter(|c| c.is_mapped() && !c.is_unmanaged());
                if let Some(old_client) = old_client {
                    let border = DisplayAction::SetBorder {
                        handle: old_client.handle(),
                        width: old_client.border_width,
                        focused: false,
                    };
                    let deactivate = old_client.surface.activate(false);
                    self.actions.push_back(border);
                    self.actions.push_back(deactivate);
                }
            }
            _ => {}
        }

        self.print_status();

        let Some(client) = id.and_then(|id| self.clients.get(id)) else {
            self.seat.keyboard = None;
            self.actions.push_back(DisplayAction::KeyboardClear);
            return;
        };
        let enter = DisplayAction::KeyboardEnter(client.handle());
        let activate = client.surface.activate(true);
        self.seat.keyboard = Some(KeyboardTarget::Client(client.id));
        self.actions.push_back(enter);
        self.actions.push_back(activate);
    }

    /// Focus the most recently focused client that is still visible on the selected monitor.
    pub fn refocus(&mut self) {
        let top = self.selected_client();
        self.focus_client(top, true);
    }

    /// Move focus to the next (positive `direction`) or previous visible client in tiling order.
    /// The walk stops at the ends of the list.
    pub fn focus_stack(&mut self, direction: i32) {
        let Some(selected) = self.selected_client() else {
            return;
        };
        let Some(monitor) = self.selected_monitor() else {
            return;
        };
        let fullscreen = self.clients.get(selected).is_some_and(|c| c.is_fullscreen);
        if fullscreen && self.lock_fullscreen {
            tracing::debug!("Not leaving fullscreen {}", selected);
            return;
        }
        let next = walk_from(self.clients.tiling(), &selected, direction, |id| {
            self.clients.get(*id).is_some_and(|c| c.is_visible_on(monitor))
        })
        .copied()
        .unwrap_or(selected);
        self.focus_client(Some(next), true);
    }

    /// Put a client on top of the stacking order.
    pub fn raise(&mut self, id: ClientId) {
        if self.clients.stacking().first() == Some(&id) || !self.clients.raise(id) {
            return;
        }
        let order = self
            .clients
            .stacking()
            .iter()
            .filter_map(|id| self.clients.get(*id))
            .map(crate::Client::handle)
            .collect();
        self.actions.push_back(DisplayAction::Restack(order));
        if let Some(action) = self.clients.get(id).and_then(|c| c.surface.restack()) {
            self.actions.push_back(action);
        }
    }

    /// A keyboard interactive overlay grabbed (`Some`) or released (`None`) the keyboard.
    pub fn overlay_focus(&mut self, handle: Option<H>) {
        match handle {
            Some(handle) => {
                if let Some(id) = self.seat.focused_client() {
                    if let Some(client) = self.clients.get(id) {
                        let deactivate = client.surface.activate(false);
                        self.actions.push_back(deactivate);
                    }
                }
                self.seat.keyboard = Some(KeyboardTarget::Overlay(handle));
                self.actions.push_back(DisplayAction::KeyboardEnter(handle));
            }
            None => {
                if matches!(self.seat.keyboard, Some(KeyboardTarget::Overlay(_))) {
                    self.seat.keyboard = None;
                    self.refocus();
                }
            }
        }
    }
}
