//! Rectangles in global layout coordinates.
#![allow(clippy::module_name_repetitions)]
use serde::{Deserialize, Serialize};
use std::cmp;

/// Position and size of a rectangle. x,y from top left.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq, Copy)]
pub struct Xyhw {
    pub x: i32,
    pub y: i32,
    pub h: i32,
    pub w: i32,
}

impl Xyhw {
    #[must_use]
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, h, w }
    }

    /// Whether the point lies inside the rectangle. The right and bottom edges are exclusive so
    /// that two adjacent rectangles never both claim the same point.
    #[must_use]
    pub const fn contains_point(&self, x: i32, y: i32) -> bool {
        x >= self.x && x < self.x + self.w && y >= self.y && y < self.y + self.h
    }

    #[must_use]
    pub const fn center(&self) -> (i32, i32) {
        let x = self.x + (self.w / 2);
        let y = self.y + (self.h / 2);
        (x, y)
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.w <= 0 || self.h <= 0
    }

    /// Smallest rectangle containing both rectangles. An empty rectangle is ignored.
    #[must_use]
    pub fn union(&self, other: &Self) -> Self {
        if self.is_empty() {
            return *other;
        }
        if other.is_empty() {
            return *self;
        }
        let x = cmp::min(self.x, other.x);
        let y = cmp::min(self.y, other.y);
        let right = cmp::max(self.x + self.w, other.x + other.w);
        let bottom = cmp::max(self.y + self.h, other.y + other.h);
        Self::new(x, y, right - x, bottom - y)
    }

    /// Pull the rectangle back inside `bbox` when it lies entirely outside of it.
    ///
    /// Only the position is touched. A rectangle that still overlaps `bbox` by at least a pixel
    /// is left where it is. `border` is added to the far edges, matching how clients store their
    /// geometry.
    pub fn apply_bounds(&mut self, bbox: &Self, border: i32) {
        if self.x >= bbox.x + bbox.w {
            self.x = bbox.x + bbox.w - self.w;
        }
        if self.y >= bbox.y + bbox.h {
            self.y = bbox.y + bbox.h - self.h;
        }
        if self.x + self.w + 2 * border <= bbox.x {
            self.x = bbox.x;
        }
        if self.y + self.h + 2 * border <= bbox.y {
            self.y = bbox.y;
        }
    }
}
