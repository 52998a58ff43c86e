#![allow(clippy::wildcard_imports)]

use super::*;
use crate::display_action::Edges;
use crate::models::{SizeHints, Surface, SurfaceInfo};

impl<H: Handle> State<H> {
    /// A new surface exists. It is not shown, tiled or focused until it maps.
    pub fn surface_created(&mut self, info: SurfaceInfo<H>) -> ClientId {
        let surface = Surface::from(info);
        let border_width = if surface.is_unmanaged() { 0 } else { self.border_width };
        let id = self.clients.create(surface, border_width);
        tracing::debug!("Created {}", id);
        id
    }

    pub fn surface_mapped(&mut self, handle: &H) {
        let Some(id) = self.clients.id_for(handle) else {
            tracing::warn!("Map of unknown surface {:?}", handle);
            return;
        };
        if !self.clients.map(id) {
            return;
        }
        let Some(client) = self.clients.get_mut(id) else {
            return;
        };
        let bw = client.border_width;
        let mut geometry = client.surface.geometry();
        geometry.w += 2 * bw;
        geometry.h += 2 * bw;
        client.geometry = geometry;
        client.prev_geometry = geometry;
        if client.is_unmanaged() {
            let place = DisplayAction::MoveSurface {
                handle: client.handle(),
                x: geometry.x,
                y: geometry.y,
            };
            self.actions.push_back(place);
            return;
        }
        client.is_fullscreen = client.surface.wants_fullscreen();
        if let Some(action) = client.surface.set_tiled(Edges::all()) {
            self.actions.push_back(action);
        }
        self.apply_rules(id);
        self.print_status();
    }

    pub fn surface_unmapped(&mut self, handle: &H) {
        let Some(id) = self.clients.id_for(handle) else {
            return;
        };
        if self.seat.release_grab_of(id) {
            tracing::debug!("{} unmapped during a grab", id);
        }
        if self.seat.pointer == Some(*handle) {
            self.seat.pointer = None;
        }
        if !self.clients.unmap(id) {
            return;
        }
        if self.clients.get(id).is_some_and(crate::Client::is_unmanaged) {
            return;
        }
        self.set_monitor(id, None, 0);
    }

    pub fn surface_destroyed(&mut self, handle: &H) {
        let Some(id) = self.clients.id_for(handle) else {
            return;
        };
        if self.clients.is_linked(id) {
            tracing::warn!("{} destroyed without being unmapped first", id);
            self.surface_unmapped(handle);
        }
        if self.seat.keyboard == Some(KeyboardTarget::Client(id)) {
            self.seat.keyboard = None;
        }
        self.clients.destroy(id);
    }

    pub fn title_changed(&mut self, handle: &H, title: String) {
        let Some(id) = self.clients.id_for(handle) else {
            return;
        };
        let Some(client) = self.clients.get_mut(id) else {
            return;
        };
        client.surface.set_title(title);
        let monitor = client.monitor;
        if monitor.and_then(|m| self.focus_top(m)) == Some(id) {
            self.print_status();
        }
    }

    pub fn app_id_changed(&mut self, handle: &H, app_id: String) {
        if let Some(client) = self.clients.id_for(handle).and_then(|id| self.clients.get_mut(id)) {
            client.surface.set_app_id(app_id);
        }
    }

    /// Before the client has a monitor only the wish is remembered; it is honoured on map.
    pub fn fullscreen_requested(&mut self, handle: &H, fullscreen: bool) {
        let Some(id) = self.clients.id_for(handle) else {
            return;
        };
        let Some(client) = self.clients.get_mut(id) else {
            return;
        };
        client.surface.set_wants_fullscreen(fullscreen);
        if client.monitor.is_none() {
            client.is_fullscreen = fullscreen;
            return;
        }
        self.set_fullscreen(id, fullscreen);
    }

    /// The client committed a buffer answering the configure `serial`.
    pub fn surface_committed(&mut self, handle: &H, serial: u32) {
        let Some(client) = self.clients.id_for(handle).and_then(|id| self.clients.get_mut(id)) else {
            return;
        };
        if client.pending_resize.is_some_and(|pending| pending <= serial) {
            client.pending_resize = None;
        }
    }

    pub fn size_hints_changed(&mut self, handle: &H, hints: SizeHints) {
        if let Some(client) = self.clients.id_for(handle).and_then(|id| self.clients.get_mut(id)) {
            client.surface.set_size_hints(hints);
        }
    }

    /// The focused client can not become urgent.
    pub fn urgency_changed(&mut self, handle: &H, urgent: bool) {
        let Some(id) = self.clients.id_for(handle) else {
            return;
        };
        if urgent && self.seat.focused_client() == Some(id) {
            return;
        }
        if let Some(client) = self.clients.get_mut(id) {
            client.is_urgent = urgent;
            self.print_status();
        }
    }
}
