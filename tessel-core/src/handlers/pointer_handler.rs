#![allow(clippy::wildcard_imports)]

use super::*;
use crate::models::{GrabMode, DEFAULT_CURSOR};

impl<H: Handle> State<H> {
    /// The cursor moved to `(x, y)` in layout coordinates.
    pub fn pointer_motion(&mut self, x: i32, y: i32) {
        self.seat.cursor = (x, y);
        match self.seat.mode {
            GrabMode::Moving(id) => {
                let (dx, dy) = self.seat.grab_offset;
                if let Some(g) = self.clients.get(id).map(|c| c.geometry) {
                    self.resize(id, Xyhw::new(x - dx, y - dy, g.w, g.h), true);
                }
                return;
            }
            GrabMode::Resizing(id) => {
                if let Some(g) = self.clients.get(id).map(|c| c.geometry) {
                    self.resize(id, Xyhw::new(g.x, g.y, x - g.x, y - g.y), true);
                }
                return;
            }
            GrabMode::Normal => {}
        }

        let target = self.independent_at(x, y).or_else(|| self.client_at(x, y));
        if target.is_none() {
            self.set_cursor(DEFAULT_CURSOR);
        }
        self.pointer_focus(target, x, y);
    }

    /// Send pointer enter or motion to the client under the cursor, focusing it when focus
    /// follows the mouse.
    fn pointer_focus(&mut self, target: Option<ClientId>, x: i32, y: i32) {
        let target = target.and_then(|id| self.clients.get(id)).map(|c| {
            let bw = c.border_width;
            (c.id, c.handle(), c.is_unmanaged(), x - c.geometry.x - bw, y - c.geometry.y - bw)
        });
        let Some((id, handle, unmanaged, sx, sy)) = target else {
            if self.seat.pointer.take().is_some() {
                self.actions.push_back(DisplayAction::PointerClear);
            }
            return;
        };
        if self.focus_follows_mouse && !unmanaged {
            self.focus_client(Some(id), false);
        }
        let action = if self.seat.pointer == Some(handle) {
            DisplayAction::PointerMotion { handle, x: sx, y: sy }
        } else {
            self.seat.pointer = Some(handle);
            DisplayAction::PointerEnter { handle, x: sx, y: sy }
        };
        self.actions.push_back(action);
    }

    pub(crate) fn set_cursor(&mut self, name: &str) {
        if self.seat.cursor_image.as_deref() == Some(name) {
            return;
        }
        self.seat.cursor_image = Some(name.to_owned());
        self.actions.push_back(DisplayAction::SetCursor(name.to_owned()));
    }
}
