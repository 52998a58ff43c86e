//! The surfaces a client can be backed by.
//!
//! Every kind of surface exposes the same capabilities (geometry, title, app id, sizing,
//! fullscreen, ...) but each protocol implements them differently. `Surface` is the closed set of
//! kinds, and each capability is a single `match` over it.
#![allow(clippy::module_name_repetitions)]

use crate::display_action::{DisplayAction, Edges};
use crate::models::Xyhw;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fmt::Debug;
use std::hash::Hash;

/// A trait which backend specific surface handles need to implement
pub trait Handle:
    Serialize + DeserializeOwned + Debug + Clone + Copy + PartialEq + Eq + Hash + Default + Send + 'static
{
}

/// Handle for testing purposes
pub type MockHandle = i32;
impl Handle for MockHandle {}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SurfaceKind {
    XdgToplevel,
    X11Managed,
    /// Override redirect windows. They are never tiled, focused or stacked by us.
    X11Unmanaged,
}

/// X11 `_NET_WM_WINDOW_TYPE` values we care about.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowType {
    Normal,
    Dialog,
    Splash,
    Toolbar,
    Utility,
    Menu,
}

/// Minimum and maximum content size requested by a surface. Zero means unset.
#[derive(Serialize, Deserialize, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SizeHints {
    pub min_w: i32,
    pub min_h: i32,
    pub max_w: i32,
    pub max_h: i32,
}

impl SizeHints {
    /// A surface asking for a fixed size in at least one dimension.
    #[must_use]
    pub const fn is_fixed(&self) -> bool {
        (self.min_w > 0 || self.min_h > 0 || self.max_w > 0 || self.max_h > 0)
            && (self.min_w == self.max_w || self.min_h == self.max_h)
    }
}

/// Everything the surface layer tells us about a newly created surface.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct SurfaceInfo<H: Handle> {
    #[serde(bound = "")]
    pub handle: H,
    pub kind: SurfaceKind,
    #[serde(default)]
    pub app_id: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub size_hints: SizeHints,
    #[serde(default, bound = "")]
    pub parent: Option<H>,
    #[serde(default)]
    pub modal: bool,
    #[serde(default)]
    pub window_types: Vec<WindowType>,
    #[serde(default)]
    pub geometry: Xyhw,
    #[serde(default)]
    pub wants_fullscreen: bool,
}

impl<H: Handle> SurfaceInfo<H> {
    #[must_use]
    pub fn new(handle: H, kind: SurfaceKind) -> Self {
        Self {
            handle,
            kind,
            app_id: None,
            title: None,
            size_hints: SizeHints::default(),
            parent: None,
            modal: false,
            window_types: vec![],
            geometry: Xyhw::default(),
            wants_fullscreen: false,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct XdgToplevel<H: Handle> {
    #[serde(bound = "")]
    pub handle: H,
    pub app_id: Option<String>,
    pub title: Option<String>,
    pub size_hints: SizeHints,
    #[serde(bound = "")]
    pub parent: Option<H>,
    pub wants_fullscreen: bool,
    pub geometry: Xyhw,
    /// Last content size sent with a configure.
    pub configured: Option<(i32, i32)>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct X11Surface<H: Handle> {
    #[serde(bound = "")]
    pub handle: H,
    pub class: Option<String>,
    pub title: Option<String>,
    pub size_hints: SizeHints,
    #[serde(bound = "")]
    pub parent: Option<H>,
    pub modal: bool,
    pub window_types: Vec<WindowType>,
    pub wants_fullscreen: bool,
    pub geometry: Xyhw,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub enum Surface<H: Handle> {
    #[serde(bound = "")]
    Xdg(XdgToplevel<H>),
    #[serde(bound = "")]
    X11Managed(X11Surface<H>),
    #[serde(bound = "")]
    X11Unmanaged(X11Surface<H>),
}

impl<H: Handle> From<SurfaceInfo<H>> for Surface<H> {
    fn from(info: SurfaceInfo<H>) -> Self {
        match info.kind {
            SurfaceKind::XdgToplevel => Self::Xdg(XdgToplevel {
                handle: info.handle,
                app_id: info.app_id,
                title: info.title,
                size_hints: info.size_hints,
                parent: info.parent,
                wants_fullscreen: info.wants_fullscreen,
                geometry: info.geometry,
                configured: None,
            }),
            kind => {
                let x11 = X11Surface {
                    handle: info.handle,
                    class: info.app_id,
                    title: info.title,
                    size_hints: info.size_hints,
                    parent: info.parent,
                    modal: info.modal,
                    window_types: info.window_types,
                    wants_fullscreen: info.wants_fullscreen,
                    geometry: info.geometry,
                };
                if kind == SurfaceKind::X11Unmanaged {
                    Self::X11Unmanaged(x11)
                } else {
                    Self::X11Managed(x11)
                }
            }
        }
    }
}

impl<H: Handle> Surface<H> {
    pub fn handle(&self) -> H {
        match self {
            Self::Xdg(s) => s.handle,
            Self::X11Managed(s) | Self::X11Unmanaged(s) => s.handle,
        }
    }

    pub fn kind(&self) -> SurfaceKind {
        match self {
            Self::Xdg(_) => SurfaceKind::XdgToplevel,
            Self::X11Managed(_) => SurfaceKind::X11Managed,
            Self::X11Unmanaged(_) => SurfaceKind::X11Unmanaged,
        }
    }

    pub fn is_unmanaged(&self) -> bool {
        matches!(self, Self::X11Unmanaged(_))
    }

    /// The xdg app id, or the X11 class.
    pub fn app_id(&self) -> Option<&str> {
        match self {
            Self::Xdg(s) => s.app_id.as_deref(),
            Self::X11Managed(s) | Self::X11Unmanaged(s) => s.class.as_deref(),
        }
    }

    pub fn set_app_id(&mut self, app_id: String) {
        match self {
            Self::Xdg(s) => s.app_id = Some(app_id),
            Self::X11Managed(s) | Self::X11Unmanaged(s) => s.class = Some(app_id),
        }
    }

    pub fn title(&self) -> Option<&str> {
        match self {
            Self::Xdg(s) => s.title.as_deref(),
            Self::X11Managed(s) | Self::X11Unmanaged(s) => s.title.as_deref(),
        }
    }

    pub fn set_title(&mut self, title: String) {
        match self {
            Self::Xdg(s) => s.title = Some(title),
            Self::X11Managed(s) | Self::X11Unmanaged(s) => s.title = Some(title),
        }
    }

    pub fn size_hints(&self) -> SizeHints {
        match self {
            Self::Xdg(s) => s.size_hints,
            Self::X11Managed(s) | Self::X11Unmanaged(s) => s.size_hints,
        }
    }

    pub fn set_size_hints(&mut self, hints: SizeHints) {
        match self {
            Self::Xdg(s) => s.size_hints = hints,
            Self::X11Managed(s) | Self::X11Unmanaged(s) => s.size_hints = hints,
        }
    }

    /// The geometry the surface reported itself, without borders.
    pub fn geometry(&self) -> Xyhw {
        match self {
            Self::Xdg(s) => s.geometry,
            Self::X11Managed(s) | Self::X11Unmanaged(s) => s.geometry,
        }
    }

    pub fn parent(&self) -> Option<H> {
        match self {
            Self::Xdg(s) => s.parent,
            Self::X11Managed(s) | Self::X11Unmanaged(s) => s.parent,
        }
    }

    pub fn wants_fullscreen(&self) -> bool {
        match self {
            Self::Xdg(s) => s.wants_fullscreen,
            Self::X11Managed(s) | Self::X11Unmanaged(s) => s.wants_fullscreen,
        }
    }

    pub fn set_wants_fullscreen(&mut self, fullscreen: bool) {
        match self {
            Self::Xdg(s) => s.wants_fullscreen = fullscreen,
            Self::X11Managed(s) | Self::X11Unmanaged(s) => s.wants_fullscreen = fullscreen,
        }
    }

    /// Surfaces that float unless a rule says otherwise: fixed size hints, transients, and
    /// (X11 only) modal windows or dialog like window types.
    pub fn is_float_type(&self) -> bool {
        match self {
            Self::Xdg(s) => s.size_hints.is_fixed() || s.parent.is_some(),
            Self::X11Managed(s) | Self::X11Unmanaged(s) => {
                s.modal
                    || s.window_types.iter().any(|t| {
                        matches!(
                            t,
                            WindowType::Dialog
                                | WindowType::Splash
                                | WindowType::Toolbar
                                | WindowType::Utility
                        )
                    })
                    || s.size_hints.is_fixed()
                    || s.parent.is_some()
            }
        }
    }

    /// Ask the surface to take `geometry` (which includes `border`).
    ///
    /// Returns the actions to send and, for xdg toplevels, the configure serial the client has
    /// to acknowledge before the new size is on screen. X11 surfaces are configured
    /// synchronously and never produce a serial. An xdg toplevel that already has the requested
    /// content size is only moved.
    pub fn request_geometry(
        &mut self,
        geometry: Xyhw,
        border: i32,
        serial: u32,
    ) -> (Vec<DisplayAction<H>>, Option<u32>) {
        let inner = Xyhw::new(
            geometry.x + border,
            geometry.y + border,
            geometry.w - 2 * border,
            geometry.h - 2 * border,
        );
        match self {
            Self::Xdg(s) => {
                s.geometry = inner;
                let mut actions = vec![DisplayAction::MoveSurface {
                    handle: s.handle,
                    x: inner.x,
                    y: inner.y,
                }];
                if s.configured == Some((inner.w, inner.h)) {
                    return (actions, None);
                }
                s.configured = Some((inner.w, inner.h));
                actions.push(DisplayAction::SetSize {
                    handle: s.handle,
                    w: inner.w,
                    h: inner.h,
                    serial,
                });
                (actions, Some(serial))
            }
            Self::X11Managed(s) | Self::X11Unmanaged(s) => {
                s.geometry = inner;
                let action = DisplayAction::Configure {
                    handle: s.handle,
                    geometry: inner,
                };
                (vec![action], None)
            }
        }
    }

    /// Tell the surface which of its edges touch a neighbour. X11 has no such concept.
    pub fn set_tiled(&self, edges: Edges) -> Option<DisplayAction<H>> {
        match self {
            Self::Xdg(s) => Some(DisplayAction::SetTiledEdges(s.handle, edges)),
            Self::X11Managed(_) | Self::X11Unmanaged(_) => None,
        }
    }

    /// X11 keeps its own stacking order which has to follow ours.
    pub fn restack(&self) -> Option<DisplayAction<H>> {
        match self {
            Self::Xdg(_) => None,
            Self::X11Managed(s) | Self::X11Unmanaged(s) => Some(DisplayAction::RaiseX11(s.handle)),
        }
    }

    pub fn activate(&self, activated: bool) -> DisplayAction<H> {
        DisplayAction::SetActivated(self.handle(), activated)
    }

    pub fn set_fullscreen(&self, fullscreen: bool) -> DisplayAction<H> {
        DisplayAction::SetFullscreen(self.handle(), fullscreen)
    }

    pub fn close(&self) -> DisplayAction<H> {
        DisplayAction::CloseSurface(self.handle())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_size_hints_make_a_surface_float() {
        let mut info = SurfaceInfo::<MockHandle>::new(1, SurfaceKind::XdgToplevel);
        info.size_hints = SizeHints {
            min_w: 400,
            min_h: 300,
            max_w: 400,
            max_h: 300,
        };
        assert!(Surface::from(info).is_float_type());
    }

    #[test]
    fn transient_and_dialog_surfaces_float() {
        let mut transient = SurfaceInfo::<MockHandle>::new(1, SurfaceKind::XdgToplevel);
        transient.parent = Some(7);
        assert!(Surface::from(transient).is_float_type());

        let mut dialog = SurfaceInfo::<MockHandle>::new(2, SurfaceKind::X11Managed);
        dialog.window_types = vec![WindowType::Dialog];
        assert!(Surface::from(dialog).is_float_type());

        let plain = SurfaceInfo::<MockHandle>::new(3, SurfaceKind::X11Managed);
        assert!(!Surface::from(plain).is_float_type());
    }

    #[test]
    fn xdg_surfaces_get_a_serial_only_when_their_size_changes() {
        let mut surface = Surface::from(SurfaceInfo::<MockHandle>::new(1, SurfaceKind::XdgToplevel));
        let (actions, token) = surface.request_geometry(Xyhw::new(0, 0, 100, 100), 1, 5);
        assert_eq!(token, Some(5));
        assert_eq!(actions.len(), 2);
        let (actions, token) = surface.request_geometry(Xyhw::new(10, 0, 100, 100), 1, 6);
        assert_eq!(token, None, "same size must not need a new acknowledgement");
        assert_eq!(
            actions,
            vec![DisplayAction::MoveSurface {
                handle: 1,
                x: 11,
                y: 1
            }]
        );
    }

    #[test]
    fn x11_surfaces_are_configured_without_a_serial() {
        let mut surface = Surface::from(SurfaceInfo::<MockHandle>::new(1, SurfaceKind::X11Managed));
        let (actions, token) = surface.request_geometry(Xyhw::new(0, 0, 100, 50), 2, 9);
        assert_eq!(token, None);
        assert_eq!(
            actions,
            vec![DisplayAction::Configure {
                handle: 1,
                geometry: Xyhw::new(2, 2, 96, 46)
            }]
        );
        assert!(surface.set_tiled(Edges::all()).is_none());
    }
}
