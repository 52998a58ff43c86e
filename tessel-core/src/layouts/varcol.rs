//! Variable column layout.
//!
//! Up to three groups side by side: an optional narrow left column for clients pinned there,
//! one or more master columns and one or more right columns. Each group's width comes from the
//! monitor's column factors, normalised over the groups that have clients.
use super::{TiledClient, LEFT_COLUMN_MIN_OUTPUT_WIDTH};
use crate::models::{ClientId, Monitor, Xyhw};

/// Which of the three column groups a client lands in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Group {
    Left,
    Master,
    Right,
}

pub(crate) fn group_of(monitor: &Monitor, index: usize, client: &TiledClient) -> Group {
    if index < monitor.nmaster {
        Group::Master
    } else if client.is_left && monitor.output_width() > LEFT_COLUMN_MIN_OUTPUT_WIDTH {
        Group::Left
    } else {
        Group::Right
    }
}

pub fn update(monitor: &Monitor, clients: &[TiledClient]) -> Vec<(ClientId, Xyhw)> {
    let groups: Vec<Group> = clients
        .iter()
        .enumerate()
        .map(|(i, c)| group_of(monitor, i, c))
        .collect();
    let count = |g: Group| groups.iter().filter(|x| **x == g).count();
    let (leftn, mastern, rightn) = (count(Group::Left), count(Group::Master), count(Group::Right));
    if mastern == 0 {
        return vec![];
    }
    let master_cols = monitor.nmastercols.min(mastern).max(1);
    let right_cols = monitor.nrightcols.min(rightn).max(1);

    let [left_fact, master_fact, right_fact] = monitor.colfact;
    let mut total = master_cols as f32 * master_fact;
    if leftn > 0 {
        total += left_fact;
    }
    if rightn > 0 {
        total += right_cols as f32 * right_fact;
    }
    let area = monitor.w;
    let unit = area.w as f32 / total;
    let mut leftw = (unit * left_fact) as i32;
    let mut masterw = (unit * master_fact) as i32;
    let mut rightw = (unit * right_fact) as i32;

    // Side columns grow to their widest client's minimum, at the cost of the master columns.
    for (client, group) in clients.iter().zip(&groups) {
        let column = match group {
            Group::Master => continue,
            Group::Left => &mut leftw,
            Group::Right => &mut rightw,
        };
        let excess = client.min_w - *column;
        if excess > 0 {
            *column += excess;
            masterw -= excess;
        }
    }
    // Several clients can each steal from the master columns; they never go below nothing.
    masterw = masterw.max(0);

    let master_x = if leftn > 0 { area.x + leftw } else { area.x };
    let right_x = master_x + master_cols as i32 * masterw;
    let master_cap = mastern.div_ceil(master_cols);
    let right_cap = rightn.div_ceil(right_cols).max(1);

    let mut offsets = [0usize; 3];
    clients
        .iter()
        .zip(&groups)
        .map(|(client, group)| {
            let (slot, width, x, cap) = match group {
                Group::Master => (0, masterw, master_x, master_cap),
                Group::Right => (1, rightw, right_x, right_cap),
                Group::Left => (2, leftw, area.x, leftn),
            };
            let offset = offsets[slot];
            offsets[slot] += 1;
            let column = (offset / cap) as i32;
            let height = area.h / cap as i32;
            let geometry = Xyhw::new(
                x + column * width,
                area.y + (offset % cap) as i32 * height,
                width,
                height,
            );
            (client.id, geometry)
        })
        .collect()
}
