use crate::layouts::Layout;
use crate::models::TagMask;
use serde::{Deserialize, Serialize};

/// Everything a binding (or a script sent to the worker) can ask the window manager to do.
#[derive(Serialize, Deserialize, Clone, PartialEq, Debug)]
pub enum Command {
    Spawn(Vec<String>),
    /// Focus the next (positive) or previous (negative) visible client in tiling order.
    FocusStack(i32),
    PushUp,
    PushDown,
    Zoom,
    MoveMouse,
    ResizeMouse,
    /// `None` toggles back to the previously used layout.
    SetLayout(Option<Layout>),
    /// Values below 1.0 are added to the master factor, larger values minus one replace it.
    SetMFact(f32),
    IncNMaster(i32),
    /// Same convention as [`Command::SetMFact`], applied to the selection's column.
    SetColFact(f32),
    PushLeft,
    IncNCols(i32),
    View(TagMask),
    ToggleView(TagMask),
    Tag(TagMask),
    ToggleTag(TagMask),
    ToggleFloating,
    ToggleFullscreen,
    KillClient,
    FocusMon(i32),
    TagMon(i32),
    ChangeVt(u32),
    Quit,
}
