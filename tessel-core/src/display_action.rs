use crate::models::Handle;
use crate::models::Xyhw;
use crate::utils::modmask_lookup::Button;
use bitflags::bitflags;
use serde::{Deserialize, Serialize};

bitflags! {
    /// Edges of a surface that touch a neighbour or the output border.
    #[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
    pub struct Edges: u8 {
        const Top = 1;
        const Bottom = 1 << 1;
        const Left = 1 << 2;
        const Right = 1 << 3;
    }
}

/// These are responses from the window manager.
/// The display server should act on these actions.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub enum DisplayAction<H: Handle> {
    /// Ask an xdg toplevel to take a new content size. The client acknowledges `serial` when it
    /// commits a buffer of that size.
    #[serde(bound = "")]
    SetSize { handle: H, w: i32, h: i32, serial: u32 },

    /// Place an X11 surface. X11 has no acknowledgement.
    #[serde(bound = "")]
    Configure { handle: H, geometry: Xyhw },

    /// Move the scene node of a surface, in layout coordinates.
    #[serde(bound = "")]
    MoveSurface { handle: H, x: i32, y: i32 },

    #[serde(bound = "")]
    SetBorder { handle: H, width: i32, focused: bool },

    /// Show or hide the scene node of a surface.
    #[serde(bound = "")]
    SetVisible(H, bool),

    #[serde(bound = "")]
    SetActivated(H, bool),

    #[serde(bound = "")]
    SetFullscreen(H, bool),

    #[serde(bound = "")]
    SetTiledEdges(H, Edges),

    /// Sets the "z-index" order of the surfaces
    /// first in the array is top most
    #[serde(bound = "")]
    Restack(Vec<H>),

    /// X11 surfaces have to be restacked through the X server as well.
    #[serde(bound = "")]
    RaiseX11(H),

    /// Nicely ask a surface if it would please close at its convenience.
    #[serde(bound = "")]
    CloseSurface(H),

    #[serde(bound = "")]
    KeyboardEnter(H),

    KeyboardClear,

    /// Pointer entered a surface at surface local coordinates.
    #[serde(bound = "")]
    PointerEnter { handle: H, x: i32, y: i32 },

    #[serde(bound = "")]
    PointerMotion { handle: H, x: i32, y: i32 },

    PointerClear,

    /// Warp the cursor to a point in layout coordinates.
    WarpPointer(i32, i32),

    SetCursor(String),

    /// Key event nobody bound, hand it to the focused surface.
    ForwardKey { keycode: u32, pressed: bool },

    /// Button event nobody bound, hand it to the surface with pointer focus.
    ForwardButton { button: Button, pressed: bool },

    /// All clients on the output are in sync; draw a frame.
    PresentFrame(String),

    ChangeVt(u32),

    /// Leave the event loop and tear the display down.
    Terminate,
}
