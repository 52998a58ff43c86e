//! Objects (such as clients and monitors) the window manager operates on.
mod client;
mod client_registry;
mod manager;
mod monitor;
mod seat;
mod slots;
mod surface;
mod tags;
mod xyhw;

pub use client::{Client, ClientId};
pub use client_registry::{ClientRegistry, TilingPosition};
pub use manager::Manager;
pub use monitor::{Monitor, MonitorId, DEFAULT_COLFACT, DEFAULT_MFACT, MAX_FACTOR, MIN_FACTOR};
pub use seat::{GrabMode, KeyboardTarget, Seat, DEFAULT_CURSOR};
pub use slots::Slots;
pub use surface::{
    Handle, SizeHints, Surface, SurfaceInfo, SurfaceKind, WindowType, XdgToplevel, X11Surface,
};
#[cfg(test)]
pub(crate) use surface::MockHandle;
pub use tags::{all_tags, intersects, tag_for_index, TagMask, MAX_TAGS};
pub use xyhw::Xyhw;
