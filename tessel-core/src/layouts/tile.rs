use super::TiledClient;
use crate::models::{ClientId, Monitor, Xyhw};

/// Master and stack: the first `nmaster` clients share the master column, the others share the
/// stack column. Each client gets an equal part of what is left in its column, so rounding
/// remainders go to the last client.
pub fn update(monitor: &Monitor, clients: &[TiledClient]) -> Vec<(ClientId, Xyhw)> {
    let n = clients.len();
    if n == 0 {
        return vec![];
    }
    let area = monitor.w;
    let nmaster = monitor.nmaster;

    let master_width = if n > nmaster {
        if nmaster > 0 {
            (area.w as f32 * monitor.mfact) as i32
        } else {
            0
        }
    } else {
        area.w
    };

    let masters = n.min(nmaster);
    let mut master_y = 0;
    let mut stack_y = 0;
    clients
        .iter()
        .enumerate()
        .map(|(i, client)| {
            let geometry = if i < nmaster {
                let h = (area.h - master_y) / (masters - i) as i32;
                let geometry = Xyhw::new(area.x, area.y + master_y, master_width, h);
                master_y += h;
                geometry
            } else {
                let h = (area.h - stack_y) / (n - i) as i32;
                let geometry = Xyhw::new(
                    area.x + master_width,
                    area.y + stack_y,
                    area.w - master_width,
                    h,
                );
                stack_y += h;
                geometry
            };
            (client.id, geometry)
        })
        .collect()
}
