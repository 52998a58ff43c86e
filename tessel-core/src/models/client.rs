//! Client information
#![allow(clippy::module_name_repetitions)]

use super::{intersects, Handle, Monitor, MonitorId, Surface, TagMask, Xyhw};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::NonZeroU32;

/// Stable handle of a client in the registry. Never reused while the registry lives.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ClientId(NonZeroU32);

impl ClientId {
    pub(crate) const fn from_raw(id: NonZeroU32) -> Self {
        Self(id)
    }

    pub const fn get(self) -> u32 {
        self.0.get()
    }
}

impl fmt::Display for ClientId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "client-{}", self.0)
    }
}

/// A managed window.
// The flags mirror independent protocol states, there is nothing to merge.
#[allow(clippy::struct_excessive_bools)]
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Client<H: Handle> {
    pub id: ClientId,
    #[serde(bound = "")]
    pub surface: Surface<H>,
    /// Position and size in layout coordinates, borders included.
    pub geometry: Xyhw,
    /// Geometry to restore when leaving fullscreen.
    pub prev_geometry: Xyhw,
    pub border_width: i32,
    pub tags: TagMask,
    pub monitor: Option<MonitorId>,
    pub is_floating: bool,
    pub is_fullscreen: bool,
    pub is_urgent: bool,
    /// Pinned to the left column of the variable column layout.
    pub is_left: bool,
    /// Configure serial the client still has to acknowledge.
    pub pending_resize: Option<u32>,
    pub(crate) mapped: bool,
}

impl<H: Handle> Client<H> {
    #[must_use]
    pub fn new(id: ClientId, surface: Surface<H>, border_width: i32) -> Self {
        Self {
            id,
            surface,
            geometry: Xyhw::default(),
            prev_geometry: Xyhw::default(),
            border_width,
            tags: 0,
            monitor: None,
            is_floating: false,
            is_fullscreen: false,
            is_urgent: false,
            is_left: false,
            pending_resize: None,
            mapped: false,
        }
    }

    pub fn handle(&self) -> H {
        self.surface.handle()
    }

    pub fn is_unmanaged(&self) -> bool {
        self.surface.is_unmanaged()
    }

    pub const fn is_mapped(&self) -> bool {
        self.mapped
    }

    /// Takes part in tiling layouts.
    pub const fn is_tiled(&self) -> bool {
        !self.is_floating && !self.is_fullscreen
    }

    /// Assigned to `monitor` and tagged with one of its active tags.
    pub fn is_visible_on(&self, monitor: &Monitor) -> bool {
        self.monitor == Some(monitor.id) && intersects(self.tags, monitor.tagset.current())
    }

    /// Fit `geometry` to the client's size hints and pull it back inside `bbox`.
    ///
    /// Fullscreen clients ignore their size hints.
    #[must_use]
    pub fn constrain(&self, mut geometry: Xyhw, bbox: &Xyhw) -> Xyhw {
        let bw = self.border_width;
        if !self.is_fullscreen {
            let hints = self.surface.size_hints();
            geometry.w = geometry.w.max(hints.min_w + 2 * bw);
            geometry.h = geometry.h.max(hints.min_h + 2 * bw);
            // Some clients advertise i32::MAX as their maximum.
            if hints.max_w > 0 && hints.max_w.checked_add(2 * bw).is_some() {
                geometry.w = geometry.w.min(hints.max_w + 2 * bw);
            }
            if hints.max_h > 0 && hints.max_h.checked_add(2 * bw).is_some() {
                geometry.h = geometry.h.min(hints.max_h + 2 * bw);
            }
        }
        // A zero size asks the client to pick one, so never send it.
        geometry.w = geometry.w.max(1 + 2 * bw);
        geometry.h = geometry.h.max(1 + 2 * bw);
        geometry.apply_bounds(bbox, bw);
        geometry
    }
}
