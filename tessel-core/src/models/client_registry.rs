//! Owner of every client record and of the three orders over them.
//!
//! Clients live in an arena addressed by [`ClientId`]. The tiling order, the focus history and
//! the stacking order are plain sequences of ids. A managed client is in all three exactly when
//! it is mapped; unmanaged (override redirect) clients are kept in a separate sequence and never
//! take part in tiling or focus.
#![allow(clippy::module_name_repetitions)]

use super::{Client, ClientId, Handle, Monitor, Surface};
use std::collections::HashMap;
use std::num::NonZeroU32;

/// Where to put a client when reordering the tiling list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TilingPosition {
    Front,
    Back,
    Before(ClientId),
    After(ClientId),
}

#[derive(Debug)]
pub struct ClientRegistry<H: Handle> {
    clients: HashMap<ClientId, Client<H>>,
    by_handle: HashMap<H, ClientId>,
    tiling: Vec<ClientId>,
    focus: Vec<ClientId>,
    stacking: Vec<ClientId>,
    independents: Vec<ClientId>,
    next_id: NonZeroU32,
}

impl<H: Handle> Default for ClientRegistry<H> {
    fn default() -> Self {
        Self {
            clients: HashMap::new(),
            by_handle: HashMap::new(),
            tiling: vec![],
            focus: vec![],
            stacking: vec![],
            independents: vec![],
            next_id: NonZeroU32::MIN,
        }
    }
}

impl<H: Handle> ClientRegistry<H> {
    /// Allocate a record for a new surface. The client is not part of any order yet.
    pub fn create(&mut self, surface: Surface<H>, border_width: i32) -> ClientId {
        let handle = surface.handle();
        if let Some(id) = self.by_handle.get(&handle) {
            tracing::warn!("Surface {:?} was created twice, keeping {}", handle, id);
            return *id;
        }
        let id = ClientId::from_raw(self.next_id);
        self.next_id = self.next_id.saturating_add(1);
        let mut client = Client::new(id, surface, border_width);
        client.geometry = client.surface.geometry();
        self.clients.insert(id, client);
        self.by_handle.insert(handle, id);
        id
    }

    /// Link a client at the front of every order. Returns false if it was already mapped.
    pub fn map(&mut self, id: ClientId) -> bool {
        let Some(client) = self.clients.get_mut(&id) else {
            return false;
        };
        if client.mapped {
            return false;
        }
        client.mapped = true;
        if client.is_unmanaged() {
            self.independents.insert(0, id);
        } else {
            self.tiling.insert(0, id);
            self.focus.insert(0, id);
            self.stacking.insert(0, id);
        }
        true
    }

    /// Unlink a client from every order at once. Returns false if it was not mapped.
    pub fn unmap(&mut self, id: ClientId) -> bool {
        let Some(client) = self.clients.get_mut(&id) else {
            return false;
        };
        if !client.mapped {
            return false;
        }
        client.mapped = false;
        self.unlink(id);
        true
    }

    fn unlink(&mut self, id: ClientId) {
        self.tiling.retain(|c| *c != id);
        self.focus.retain(|c| *c != id);
        self.stacking.retain(|c| *c != id);
        self.independents.retain(|c| *c != id);
    }

    /// Release a client record.
    ///
    /// Destroying a client that is still linked is a bug in the caller. Debug builds panic,
    /// release builds unlink it first.
    pub fn destroy(&mut self, id: ClientId) -> Option<Client<H>> {
        let linked = self.is_linked(id);
        debug_assert!(!linked, "{id} destroyed while still mapped");
        if linked {
            tracing::error!("{} destroyed while still mapped, unlinking it", id);
            self.unlink(id);
        }
        let client = self.clients.remove(&id)?;
        self.by_handle.remove(&client.handle());
        Some(client)
    }

    pub fn is_linked(&self, id: ClientId) -> bool {
        self.tiling.contains(&id)
            || self.focus.contains(&id)
            || self.stacking.contains(&id)
            || self.independents.contains(&id)
    }

    pub fn id_for(&self, handle: &H) -> Option<ClientId> {
        self.by_handle.get(handle).copied()
    }

    pub fn get(&self, id: ClientId) -> Option<&Client<H>> {
        self.clients.get(&id)
    }

    pub fn get_mut(&mut self, id: ClientId) -> Option<&mut Client<H>> {
        self.clients.get_mut(&id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Client<H>> {
        self.clients.values()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Client<H>> {
        self.clients.values_mut()
    }

    pub fn len(&self) -> usize {
        self.clients.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clients.is_empty()
    }

    /// Creation/placement order used by layouts and cycling.
    pub fn tiling(&self) -> &[ClientId] {
        &self.tiling
    }

    /// Most recently focused first.
    pub fn focus_history(&self) -> &[ClientId] {
        &self.focus
    }

    /// Front (top) first.
    pub fn stacking(&self) -> &[ClientId] {
        &self.stacking
    }

    pub fn independents(&self) -> &[ClientId] {
        &self.independents
    }

    /// Tiling order as client records.
    pub fn tiled_clients(&self) -> impl Iterator<Item = &Client<H>> {
        self.tiling.iter().filter_map(|id| self.clients.get(id))
    }

    /// Move a client to the top of the stacking order.
    pub fn raise(&mut self, id: ClientId) -> bool {
        move_to_front(&mut self.stacking, id)
    }

    /// Move a client to the front of the focus history.
    pub fn touch_focus(&mut self, id: ClientId) -> bool {
        move_to_front(&mut self.focus, id)
    }

    /// Reposition a mapped client in the tiling order.
    pub fn place_in_tiling(&mut self, id: ClientId, position: TilingPosition) -> bool {
        let Some(index) = self.tiling.iter().position(|c| *c == id) else {
            return false;
        };
        self.tiling.remove(index);
        let target = match position {
            TilingPosition::Front => Some(0),
            TilingPosition::Back => Some(self.tiling.len()),
            TilingPosition::Before(other) => self.tiling.iter().position(|c| *c == other),
            TilingPosition::After(other) => {
                self.tiling.iter().position(|c| *c == other).map(|i| i + 1)
            }
        };
        // An unknown neighbour puts the client back where it was.
        self.tiling.insert(target.unwrap_or(index), id);
        target.is_some()
    }

    /// The first client in the focus history that is visible on `monitor`.
    pub fn topmost_visible(&self, monitor: &Monitor) -> Option<ClientId> {
        self.focus
            .iter()
            .copied()
            .find(|id| self.clients.get(id).is_some_and(|c| c.is_visible_on(monitor)))
    }

    /// Every managed client is in all three orders exactly when it is mapped.
    pub fn is_consistent(&self) -> bool {
        let managed_linked = |id: &ClientId| {
            let t = self.tiling.contains(id);
            let f = self.focus.contains(id);
            let s = self.stacking.contains(id);
            t == f && f == s
        };
        self.clients.values().all(|c| {
            if c.is_unmanaged() {
                c.mapped == self.independents.contains(&c.id)
            } else {
                managed_linked(&c.id) && c.mapped == self.tiling.contains(&c.id)
            }
        }) && self.tiling.len() == self.focus.len()
            && self.focus.len() == self.stacking.len()
    }
}

fn move_to_front(list: &mut Vec<ClientId>, id: ClientId) -> bool {
    let Some(index) = list.iter().position(|c| *c == id) else {
        return false;
    };
    let id = list.remove(index);
    list.insert(0, id);
    true
}
