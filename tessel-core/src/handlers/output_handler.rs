#![allow(clippy::wildcard_imports)]

use super::*;
use crate::display_event::OutputInfo;
use crate::models::Monitor;

impl<H: Handle> State<H> {
    /// A new output appeared. It is appended to the monitor list and becomes the selected
    /// monitor if there was none; clients without a monitor move onto the selected one.
    pub fn output_added(&mut self, info: OutputInfo) {
        if self.monitor_by_name(&info.name).is_some() {
            tracing::warn!("Output {} added twice", info.name);
            return;
        }
        let id = self.next_monitor_id();
        let mut monitor = Monitor::new(id, info.name, info.geometry);
        monitor.layout = crate::models::Slots::new(self.default_layout);
        monitor.apply_rules(&self.monitor_rules);
        tracing::debug!("Output {} is {:?}", monitor.name, monitor.m);
        self.monitors.push(monitor);
        if self.selected_monitor.is_none() {
            self.selected_monitor = Some(id);
        }
        self.adopt_orphans();
        self.arrange(id);
        self.print_status();
    }

    /// Put mapped clients that lost their monitor on the selected one.
    fn adopt_orphans(&mut self) {
        let Some(selected) = self.selected_monitor else {
            return;
        };
        let orphans: Vec<(ClientId, u32)> = self
            .clients
            .tiled_clients()
            .filter(|c| c.monitor.is_none())
            .map(|c| (c.id, c.tags))
            .collect();
        for (id, tags) in orphans {
            self.set_monitor(id, Some(selected), tags);
        }
    }

    /// An output went away. Its clients move to the selected monitor, keeping their tags.
    pub fn output_removed(&mut self, name: &str) {
        let Some(index) = self.monitors.iter().position(|m| m.name == name) else {
            return;
        };
        let removed = self.monitors.remove(index);
        if self.selected_monitor == Some(removed.id) {
            self.selected_monitor = self.monitors.first().map(|m| m.id);
        }

        let floating_beyond: Vec<(ClientId, Xyhw)> = self
            .clients
            .tiled_clients()
            .filter(|c| c.is_floating && c.geometry.x > removed.m.w)
            .map(|c| {
                let mut geometry = c.geometry;
                geometry.x -= removed.w.w;
                (c.id, geometry)
            })
            .collect();
        for (id, geometry) in floating_beyond {
            self.resize(id, geometry, false);
        }

        let stranded: Vec<(ClientId, u32)> = self
            .clients
            .tiled_clients()
            .filter(|c| c.monitor == Some(removed.id))
            .map(|c| (c.id, c.tags))
            .collect();
        let target = self.selected_monitor;
        for (id, tags) in stranded {
            self.set_monitor(id, target, tags);
        }
        self.refocus();
        self.print_status();
    }

    /// The output moved or changed mode. Panels have to report their exclusive zones again.
    pub fn output_changed(&mut self, info: &OutputInfo) {
        let Some(monitor) = self.monitors.iter_mut().find(|m| m.name == info.name) else {
            return;
        };
        monitor.m = info.geometry;
        monitor.w = info.geometry;
        let id = monitor.id;
        self.arrange(id);
    }

    pub fn usable_area_changed(&mut self, name: &str, area: Xyhw) {
        let Some(monitor) = self.monitors.iter_mut().find(|m| m.name == name) else {
            return;
        };
        monitor.w = area;
        let id = monitor.id;
        self.arrange(id);
    }

    /// Present a frame unless a tiled client on the output still has to catch up with its
    /// last configure. Drawing now would show it at its old size.
    pub fn frame_tick(&mut self, name: &str) {
        let Some(monitor) = self.monitor_by_name(name) else {
            return;
        };
        let waiting = self
            .clients
            .tiled_clients()
            .find(|c| c.pending_resize.is_some() && !c.is_floating && c.is_visible_on(monitor));
        if let Some(client) = waiting {
            tracing::trace!("Skipping frame on {name}, waiting for {}", client.id);
            return;
        }
        self.actions.push_back(DisplayAction::PresentFrame(name.to_owned()));
    }
}

#[cfg(test)]
mod tests {
    use crate::config::{MonitorRule, TestConfig};
    use crate::display_event::OutputInfo;
    use crate::layouts::Layout;
    use crate::models::{Manager, Xyhw};
    use crate::{Command, DisplayAction, DisplayEvent};

    fn hdmi() -> OutputInfo {
        OutputInfo {
            name: "HDMI-A-1".to_owned(),
            geometry: Xyhw::new(1920, 0, 1920, 1080),
        }
    }

    #[test]
    fn the_first_output_becomes_the_selected_monitor() {
        let mut manager = Manager::new_test_with_output();
        manager.display_event_handler(DisplayEvent::OutputAdded(hdmi()));
        let first = manager.state.monitors[0].id;
        assert_eq!(manager.state.selected_monitor, Some(first));
        assert_eq!(manager.state.monitors.len(), 2);
    }

    #[test]
    fn monitor_rules_are_matched_by_output_name() {
        let config = TestConfig {
            monitor_rules: vec![
                MonitorRule {
                    name: Some("HDMI".to_owned()),
                    mfact: 0.6,
                    nmaster: 2,
                    scale: 1.0,
                    layout: Layout::Monocle,
                },
                MonitorRule::default(),
            ],
            ..TestConfig::default()
        };
        let mut manager = Manager::new_test_with_output_and(config);
        manager.display_event_handler(DisplayEvent::OutputAdded(hdmi()));
        let hdmi = &manager.state.monitors[1];
        assert_eq!(hdmi.active_layout(), Layout::Monocle);
        assert_eq!(hdmi.nmaster, 2);
        assert_eq!(manager.state.monitors[0].active_layout(), Layout::Tile);
    }

    #[test]
    fn clients_of_a_removed_output_move_to_the_selected_monitor() {
        let mut manager = Manager::new_test_with_output();
        manager.display_event_handler(DisplayEvent::OutputAdded(hdmi()));
        let first = manager.state.monitors[0].id;
        let second = manager.state.monitors[1].id;
        let ids = manager.map_test_clients(2);
        manager.command_handler(&Command::TagMon(1));
        assert_eq!(manager.state.clients.get(ids[1]).map(|c| c.monitor), Some(Some(second)));

        manager.display_event_handler(DisplayEvent::OutputRemoved("HDMI-A-1".to_owned()));
        assert_eq!(manager.state.monitors.len(), 1);
        assert!(ids
            .iter()
            .all(|id| manager.state.clients.get(*id).map(|c| c.monitor) == Some(Some(first))));
        assert!(manager.state.clients.is_consistent());
    }

    #[test]
    fn removing_the_selected_output_selects_another() {
        let mut manager = Manager::new_test_with_output();
        manager.display_event_handler(DisplayEvent::OutputAdded(hdmi()));
        let second = manager.state.monitors[1].id;
        manager.map_test_clients(1);
        manager.display_event_handler(DisplayEvent::OutputRemoved("TEST-1".to_owned()));
        assert_eq!(manager.state.selected_monitor, Some(second));
        assert!(manager.state.selected_client().is_some());
    }

    #[test]
    fn clients_wait_for_an_output_and_move_onto_it() {
        let mut manager = Manager::new_test_with_output();
        let ids = manager.map_test_clients(1);
        manager.display_event_handler(DisplayEvent::OutputRemoved("TEST-1".to_owned()));
        assert_eq!(manager.state.selected_monitor, None);
        assert_eq!(manager.state.clients.get(ids[0]).map(|c| c.monitor), Some(None));
        manager.display_event_handler(DisplayEvent::OutputAdded(hdmi()));
        let monitor = manager.state.monitors[0].id;
        assert_eq!(manager.state.clients.get(ids[0]).map(|c| c.monitor), Some(Some(monitor)));
        assert_eq!(manager.state.selected_client(), Some(ids[0]));
    }

    #[test]
    fn usable_area_shrinks_the_tiling_area() {
        let mut manager = Manager::new_test_with_output();
        let ids = manager.map_test_clients(1);
        manager.display_event_handler(DisplayEvent::UsableAreaChanged(
            "TEST-1".to_owned(),
            Xyhw::new(0, 30, 1920, 1050),
        ));
        assert_eq!(
            manager.state.clients.get(ids[0]).map(|c| c.geometry),
            Some(Xyhw::new(0, 30, 1920, 1050))
        );
    }

    #[test]
    fn frames_wait_for_pending_resizes() {
        let mut manager = Manager::new_test_with_output();
        let ids = manager.map_test_clients(1);
        let presented = |state: &crate::State<i32>| {
            state
                .actions
                .iter()
                .any(|a| matches!(a, DisplayAction::PresentFrame(_)))
        };
        manager.state.actions.clear();
        manager.display_event_handler(DisplayEvent::FrameTick("TEST-1".to_owned()));
        assert!(!presented(&manager.state), "the mapped client has not committed yet");

        let serial = manager.state.clients.get(ids[0]).and_then(|c| c.pending_resize);
        manager.display_event_handler(DisplayEvent::SurfaceCommitted(1, serial.unwrap_or_default()));
        manager.display_event_handler(DisplayEvent::FrameTick("TEST-1".to_owned()));
        assert!(presented(&manager.state));
    }
}
