use serde::{Deserialize, Serialize};

/// Two remembered values and which one is active. Swapping makes the other value active, which
/// gives the "back to the last selection" behaviour for tagsets and layouts.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slots<T> {
    slots: [T; 2],
    active: usize,
}

impl<T: Copy> Slots<T> {
    pub const fn new(value: T) -> Self {
        Self {
            slots: [value, value],
            active: 0,
        }
    }

    pub const fn current(&self) -> T {
        self.slots[self.active]
    }

    pub const fn previous(&self) -> T {
        self.slots[self.active ^ 1]
    }

    pub fn set(&mut self, value: T) {
        self.slots[self.active] = value;
    }

    pub fn swap(&mut self) {
        self.active ^= 1;
    }

    pub const fn active_slot(&self) -> usize {
        self.active
    }
}
