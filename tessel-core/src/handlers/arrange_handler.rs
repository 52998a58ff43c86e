#![allow(clippy::wildcard_imports)]

use super::*;

impl<H: Handle> State<H> {
    /// Show the clients of `monitor` that are on its active tags, hide the rest and let the
    /// active layout place the tiled ones.
    pub fn arrange(&mut self, monitor: MonitorId) {
        let Some(mon) = self.monitor(monitor) else {
            return;
        };
        let visibility: Vec<(H, bool)> = self
            .clients
            .tiled_clients()
            .filter(|c| c.monitor == Some(monitor))
            .map(|c| (c.handle(), c.is_visible_on(mon)))
            .collect();
        let tiled = self.tiled_on(mon);
        let placements = mon.active_layout().arrange(mon, &tiled);

        for (handle, visible) in visibility {
            self.actions.push_back(DisplayAction::SetVisible(handle, visible));
        }
        for (id, geometry) in placements.unwrap_or_default() {
            self.resize(id, geometry, false);
        }
    }

    pub fn arrange_all(&mut self) {
        let ids: Vec<MonitorId> = self.monitors.iter().map(|m| m.id).collect();
        for id in ids {
            self.arrange(id);
        }
    }

    /// Ask a client to take `geometry`. The geometry is fitted to the client's size hints and
    /// kept inside its monitor's usable area, or inside the whole layout for interactive
    /// (pointer driven) requests.
    pub fn resize(&mut self, id: ClientId, geometry: Xyhw, interactive: bool) {
        let Some(client) = self.clients.get(id) else {
            return;
        };
        let bounds = match client.monitor.and_then(|m| self.monitor(m)) {
            Some(monitor) if !interactive => monitor.w,
            _ => self.layout_bounds(),
        };
        let serial = self.next_serial();
        let Some(client) = self.clients.get_mut(id) else {
            return;
        };
        let geometry = client.constrain(geometry, &bounds);
        client.geometry = geometry;
        let (actions, pending) = client
            .surface
            .request_geometry(geometry, client.border_width, serial);
        // An unchanged size keeps waiting for the serial that is already in flight.
        if pending.is_some() {
            client.pending_resize = pending;
        }
        self.actions.extend(actions);
    }

    pub fn set_floating(&mut self, id: ClientId, floating: bool) {
        let Some(client) = self.clients.get_mut(id) else {
            return;
        };
        client.is_floating = floating;
        if let Some(monitor) = client.monitor {
            self.arrange(monitor);
        }
        self.print_status();
    }

    /// Entering fullscreen remembers the geometry, drops the border and covers the whole
    /// output. Leaving restores both.
    pub fn set_fullscreen(&mut self, id: ClientId, fullscreen: bool) {
        let border_width = self.border_width;
        let focused = self.seat.focused_client() == Some(id);
        let Some(client) = self.clients.get_mut(id) else {
            return;
        };
        client.is_fullscreen = fullscreen;
        let Some(monitor) = client.monitor else {
            return;
        };
        client.border_width = if fullscreen { 0 } else { border_width };
        let border = DisplayAction::SetBorder {
            handle: client.handle(),
            width: client.border_width,
            focused,
        };
        let request = client.surface.set_fullscreen(fullscreen);
        let target = if fullscreen {
            client.prev_geometry = client.geometry;
            self.monitor(monitor).map(|m| m.m)
        } else {
            Some(client.prev_geometry)
        };
        self.actions.push_back(border);
        self.actions.push_back(request);
        if let Some(target) = target {
            self.resize(id, target, false);
        }
        if fullscreen {
            self.raise(id);
        }
        self.arrange(monitor);
        self.print_status();
    }
}
