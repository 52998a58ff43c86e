use super::{ClientId, Handle};
use serde::{Deserialize, Serialize};

pub const DEFAULT_CURSOR: &str = "left_ptr";

/// Interactive pointer grab. The grabbed client travels with the mode, so resetting the mode
/// also drops the reference.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum GrabMode {
    #[default]
    Normal,
    Moving(ClientId),
    Resizing(ClientId),
}

impl GrabMode {
    pub const fn grabbed(self) -> Option<ClientId> {
        match self {
            Self::Normal => None,
            Self::Moving(id) | Self::Resizing(id) => Some(id),
        }
    }
}

/// Who receives keyboard input.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyboardTarget<H: Handle> {
    Client(ClientId),
    /// A keyboard interactive surface on the top or overlay layer (lock screens, launchers).
    #[serde(bound = "")]
    Overlay(H),
}

/// The single seat: one keyboard focus, one pointer focus and one grab.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct Seat<H: Handle> {
    #[serde(bound = "")]
    pub keyboard: Option<KeyboardTarget<H>>,
    #[serde(bound = "")]
    pub pointer: Option<H>,
    pub cursor: (i32, i32),
    pub cursor_image: Option<String>,
    pub mode: GrabMode,
    /// Cursor position relative to the grabbed client's origin when a move started.
    pub grab_offset: (i32, i32),
}

impl<H: Handle> Default for Seat<H> {
    fn default() -> Self {
        Self {
            keyboard: None,
            pointer: None,
            cursor: (0, 0),
            cursor_image: None,
            mode: GrabMode::Normal,
            grab_offset: (0, 0),
        }
    }
}

impl<H: Handle> Seat<H> {
    pub fn focused_client(&self) -> Option<ClientId> {
        match self.keyboard {
            Some(KeyboardTarget::Client(id)) => Some(id),
            _ => None,
        }
    }

    /// Drop the grab if it refers to `id`. Returns true if a grab was cancelled.
    pub fn release_grab_of(&mut self, id: ClientId) -> bool {
        if self.mode.grabbed() == Some(id) {
            self.mode = GrabMode::Normal;
            return true;
        }
        false
    }
}
