//! Everything the window manager knows, in one place.

use crate::config::{Config, Keybind, MonitorRule, Mousebind, Rule};
use crate::layouts::{Layout, TiledClient};
use crate::models::{
    all_tags, ClientId, ClientRegistry, Handle, Monitor, MonitorId, Seat, TagMask, Xyhw,
};
use crate::status::Status;
use crate::DisplayAction;
use std::collections::VecDeque;

#[derive(Debug)]
pub struct State<H: Handle> {
    pub clients: ClientRegistry<H>,
    /// In the order outputs appeared.
    pub monitors: Vec<Monitor>,
    pub selected_monitor: Option<MonitorId>,
    pub seat: Seat<H>,
    pub actions: VecDeque<DisplayAction<H>>,
    pub status: Status,
    pub rules: Vec<Rule>,
    pub monitor_rules: Vec<MonitorRule>,
    pub keybinds: Vec<Keybind>,
    pub mousebinds: Vec<Mousebind>,
    pub default_layout: Layout,
    pub tag_mask: TagMask,
    pub border_width: i32,
    pub focus_follows_mouse: bool,
    pub lock_fullscreen: bool,
    next_serial: u32,
    next_monitor_id: u32,
}

impl<H: Handle> State<H> {
    pub(crate) fn new(config: &impl Config) -> Self {
        Self {
            clients: ClientRegistry::default(),
            monitors: vec![],
            selected_monitor: None,
            seat: Seat::default(),
            actions: VecDeque::new(),
            status: Status::default(),
            rules: config.rules(),
            monitor_rules: config.monitor_rules(),
            keybinds: config.keybinds(),
            mousebinds: config.mousebinds(),
            default_layout: config.default_layout(),
            tag_mask: all_tags(config.tag_count()),
            border_width: config.border_width(),
            focus_follows_mouse: config.focus_follows_mouse(),
            lock_fullscreen: config.lock_fullscreen(),
            next_serial: 1,
            next_monitor_id: 0,
        }
    }

    pub fn monitor(&self, id: MonitorId) -> Option<&Monitor> {
        self.monitors.iter().find(|m| m.id == id)
    }

    pub fn monitor_mut(&mut self, id: MonitorId) -> Option<&mut Monitor> {
        self.monitors.iter_mut().find(|m| m.id == id)
    }

    pub fn monitor_by_name(&self, name: &str) -> Option<&Monitor> {
        self.monitors.iter().find(|m| m.name == name)
    }

    pub fn selected_monitor(&self) -> Option<&Monitor> {
        self.monitor(self.selected_monitor?)
    }

    /// The output under a point of the layout.
    pub fn monitor_at(&self, x: i32, y: i32) -> Option<MonitorId> {
        self.monitors
            .iter()
            .find(|m| m.m.contains_point(x, y))
            .map(|m| m.id)
    }

    /// The bounding box of every output.
    pub fn layout_bounds(&self) -> Xyhw {
        self.monitors
            .iter()
            .map(|m| m.m)
            .reduce(|acc, m| acc.union(&m))
            .unwrap_or_default()
    }

    pub(crate) fn next_monitor_id(&mut self) -> MonitorId {
        let id = MonitorId(self.next_monitor_id);
        self.next_monitor_id += 1;
        id
    }

    /// Serials for size requests, always increasing.
    pub(crate) fn next_serial(&mut self) -> u32 {
        let serial = self.next_serial;
        self.next_serial = self.next_serial.wrapping_add(1).max(1);
        serial
    }

    /// The client with keyboard focus on the selected monitor, i.e. the one commands act on.
    pub fn selected_client(&self) -> Option<ClientId> {
        self.focus_top(self.selected_monitor?)
    }

    /// Most recently focused client visible on `monitor`.
    pub fn focus_top(&self, monitor: MonitorId) -> Option<ClientId> {
        self.clients.topmost_visible(self.monitor(monitor)?)
    }

    /// Clients a layout arranges on `monitor`, in tiling order.
    pub fn tiled_on(&self, monitor: &Monitor) -> Vec<TiledClient> {
        self.clients
            .tiled_clients()
            .filter(|c| c.is_visible_on(monitor) && c.is_tiled())
            .map(|c| {
                let min_w = c.surface.size_hints().min_w;
                TiledClient {
                    id: c.id,
                    min_w: if min_w > 0 { min_w + 2 * c.border_width } else { 0 },
                    is_left: c.is_left,
                }
            })
            .collect()
    }

    /// The first client in stacking order that is visible and under the point, borders included.
    pub fn client_at(&self, x: i32, y: i32) -> Option<ClientId> {
        self.clients.stacking().iter().copied().find(|id| {
            self.clients.get(*id).is_some_and(|c| {
                c.monitor
                    .and_then(|m| self.monitor(m))
                    .is_some_and(|m| c.is_visible_on(m))
                    && c.geometry.contains_point(x, y)
            })
        })
    }

    /// An unmanaged surface under the point. These sit above every managed client.
    pub fn independent_at(&self, x: i32, y: i32) -> Option<ClientId> {
        self.clients
            .independents()
            .iter()
            .copied()
            .find(|id| {
                self.clients
                    .get(*id)
                    .is_some_and(|c| c.geometry.contains_point(x, y))
            })
    }
}
