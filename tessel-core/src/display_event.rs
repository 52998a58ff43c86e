use super::{Button, ModMask};
use crate::models::{Handle, SizeHints, SurfaceInfo, Xyhw};
use crate::Command;
use serde::{Deserialize, Serialize};

/// Keysyms are passed through untouched from the keymap layer.
pub type Keysym = u32;

/// An output appearing or changing its place in the layout.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct OutputInfo {
    pub name: String,
    pub geometry: Xyhw,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub enum DisplayEvent<H: Handle> {
    #[serde(bound = "")]
    SurfaceCreated(SurfaceInfo<H>),
    #[serde(bound = "")]
    SurfaceMapped(H),
    #[serde(bound = "")]
    SurfaceUnmapped(H),
    #[serde(bound = "")]
    SurfaceDestroyed(H),
    #[serde(bound = "")]
    TitleChanged(H, String),
    #[serde(bound = "")]
    AppIdChanged(H, String),
    #[serde(bound = "")]
    FullscreenRequested(H, bool),
    /// The surface committed a buffer in response to the configure `serial`.
    #[serde(bound = "")]
    SurfaceCommitted(H, u32),
    #[serde(bound = "")]
    SizeHintsChanged(H, SizeHints),
    #[serde(bound = "")]
    UrgencyChanged(H, bool),
    OutputAdded(OutputInfo),
    OutputRemoved(String),
    /// The output moved or changed mode.
    OutputChanged(OutputInfo),
    /// Panels reserved part of the output; this is what is left.
    UsableAreaChanged(String, Xyhw),
    /// The output can draw a new frame.
    FrameTick(String),
    KeyPress {
        modmask: ModMask,
        keysyms: Vec<Keysym>,
        keycode: u32,
    },
    KeyRelease {
        keycode: u32,
    },
    ButtonPress {
        modmask: ModMask,
        button: Button,
    },
    ButtonRelease {
        button: Button,
    },
    /// Absolute cursor position in layout coordinates.
    PointerMotion {
        x: i32,
        y: i32,
    },
    /// A keyboard interactive overlay took (`Some`) or gave up (`None`) the keyboard.
    #[serde(bound = "")]
    OverlayFocus(Option<H>),
    SendCommand(Command),
}
