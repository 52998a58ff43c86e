//! Layouts compute geometry for the tiled clients of one monitor.
//!
//! The set of layouts is closed, so a layout is a plain enum and each variant has one `update`
//! function. Layouts never touch ordering, tags or monitor assignment; they only return the
//! geometry every client should get.
mod monocle;
mod tile;
mod varcol;

use crate::models::{ClientId, Monitor, Xyhw};
pub(crate) use varcol::{group_of, Group};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

/// Outputs at most this wide never show the left column of [`Layout::VarCol`].
pub const LEFT_COLUMN_MIN_OUTPUT_WIDTH: i32 = 2000;

#[derive(Serialize, Deserialize, Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Layout {
    #[default]
    Tile,
    Monocle,
    VarCol,
    /// No arrange function: clients keep whatever geometry they have.
    Floating,
}

/// What a layout needs to know about an eligible client.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TiledClient {
    pub id: ClientId,
    /// Minimum width including borders, 0 when unset.
    pub min_w: i32,
    pub is_left: bool,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("Could not parse layout: {0}")]
pub struct ParseLayoutError(String);

impl Layout {
    pub const ALL: [Self; 4] = [Self::Tile, Self::Monocle, Self::VarCol, Self::Floating];

    /// Short symbol shown by status bars.
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Tile => "[]=",
            Self::Monocle => "[M]",
            Self::VarCol => "||",
            Self::Floating => "><>",
        }
    }

    pub const fn has_arrange(self) -> bool {
        !matches!(self, Self::Floating)
    }

    /// Geometry for each client in `clients`, which must be the monitor's eligible clients in
    /// tiling order. `None` for the floating layout.
    pub fn arrange(self, monitor: &Monitor, clients: &[TiledClient]) -> Option<Vec<(ClientId, Xyhw)>> {
        let placements = match self {
            Self::Tile => tile::update(monitor, clients),
            Self::Monocle => monocle::update(monitor, clients),
            Self::VarCol => varcol::update(monitor, clients),
            Self::Floating => return None,
        };
        Some(placements)
    }
}

impl FromStr for Layout {
    type Err = ParseLayoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Tile" | "[]=" => Ok(Self::Tile),
            "Monocle" | "[M]" => Ok(Self::Monocle),
            "VarCol" | "||" => Ok(Self::VarCol),
            "Floating" | "><>" => Ok(Self::Floating),
            _ => Err(ParseLayoutError(s.to_owned())),
        }
    }
}
