use super::TiledClient;
use crate::models::{ClientId, Monitor, Xyhw};

/// Layout which gives every client the full usable area. The stacking order decides which one
/// is seen.
pub fn update(monitor: &Monitor, clients: &[TiledClient]) -> Vec<(ClientId, Xyhw)> {
    clients.iter().map(|c| (c.id, monitor.w)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layouts::tests::{clients, monitor};

    #[test]
    fn every_client_fills_the_usable_area() {
        let mut monitor = monitor(1920, 1080);
        monitor.w = Xyhw::new(0, 24, 1920, 1056);
        let placed = update(&monitor, &clients(3));
        assert_eq!(placed.len(), 3);
        assert!(placed.iter().all(|(_, g)| *g == monitor.w));
    }
}
