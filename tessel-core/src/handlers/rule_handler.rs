#![allow(clippy::wildcard_imports)]

use super::*;
use crate::models::{Monitor, TagMask};

impl<H: Handle> State<H> {
    /// Decide where a newly mapped client goes. The surface's own hints give the default
    /// floating state, then every matching rule is applied in order.
    pub fn apply_rules(&mut self, id: ClientId) {
        let Some(client) = self.clients.get(id) else {
            return;
        };
        let app_id = client.surface.app_id().unwrap_or("broken");
        let title = client.surface.title().unwrap_or("broken");
        let mut floating = client.surface.is_float_type();
        let mut tags: TagMask = 0;
        let mut monitor = self.selected_monitor;
        for rule in self.rules.iter().filter(|r| r.matches(app_id, title)) {
            floating = rule.floating;
            tags |= rule.tags;
            if let Some(m) = rule.monitor.and_then(|index| self.monitors.get(index)) {
                monitor = Some(m.id);
            }
        }
        tracing::debug!("Rules put {} on {:?} with tags {}", id, monitor, tags);
        let tags = tags & self.tag_mask;
        if let Some(client) = self.clients.get_mut(id) {
            client.is_floating = floating;
        }
        self.set_monitor(id, monitor, tags);
    }

    /// Move a client to another monitor, or take it off every monitor with `None`.
    ///
    /// `tags` of zero means the client takes the active tags of its new monitor.
    pub fn set_monitor(&mut self, id: ClientId, monitor: Option<MonitorId>, tags: TagMask) {
        let Some(client) = self.clients.get_mut(id) else {
            return;
        };
        let old = client.monitor;
        if old == monitor {
            return;
        }
        client.monitor = monitor;
        if let Some(old) = old {
            self.arrange(old);
        }
        let active = monitor.and_then(|m| self.monitor(m)).map(Monitor::active_tags);
        if let Some(active) = active {
            let geometry = self.clients.get(id).map(|c| c.geometry).unwrap_or_default();
            // Pull the client onto its new monitor.
            self.resize(id, geometry, false);
            let fullscreen = self.clients.get_mut(id).map_or(false, |c| {
                c.tags = if tags == 0 { active } else { tags };
                c.is_fullscreen
            });
            self.set_fullscreen(id, fullscreen);
        }
        self.refocus();
    }
}

#[cfg(test)]
mod tests {
    use crate::config::{Rule, TestConfig};
    use crate::display_event::OutputInfo;
    use crate::models::{Manager, SizeHints, SurfaceInfo, SurfaceKind, Xyhw};
    use crate::DisplayEvent;
    use regex::Regex;

    fn mpv_rule() -> Rule {
        Rule {
            app_id: Regex::new("mpv").ok(),
            floating: true,
            ..Rule::default()
        }
    }

    #[test]
    fn a_floating_rule_overrides_the_surface_default() {
        let config = TestConfig {
            rules: vec![mpv_rule()],
            ..TestConfig::default()
        };
        let mut manager = Manager::new_test_with_output_and(config);
        let mut info = SurfaceInfo::new(1, SurfaceKind::XdgToplevel);
        info.app_id = Some("mpv".to_owned());
        manager.display_event_handler(DisplayEvent::SurfaceCreated(info));
        manager.display_event_handler(DisplayEvent::SurfaceMapped(1));
        let id = manager.state.clients.id_for(&1);
        let client = id.and_then(|id| manager.state.clients.get(id));
        assert_eq!(client.map(|c| c.is_floating), Some(true));
    }

    #[test]
    fn a_tiling_rule_overrides_fixed_size_hints() {
        let config = TestConfig {
            rules: vec![Rule {
                app_id: Regex::new("^calc$").ok(),
                floating: false,
                ..Rule::default()
            }],
            ..TestConfig::default()
        };
        let mut manager = Manager::new_test_with_output_and(config);
        let mut info = SurfaceInfo::new(1, SurfaceKind::XdgToplevel);
        info.app_id = Some("calc".to_owned());
        info.size_hints = SizeHints {
            min_w: 300,
            min_h: 200,
            max_w: 300,
            max_h: 200,
        };
        manager.display_event_handler(DisplayEvent::SurfaceCreated(info));
        manager.display_event_handler(DisplayEvent::SurfaceMapped(1));
        let client = manager.state.clients.id_for(&1).and_then(|id| manager.state.clients.get(id));
        assert_eq!(client.map(|c| c.is_floating), Some(false));
    }

    #[test]
    fn every_matching_rule_adds_its_tags() {
        let config = TestConfig {
            rules: vec![
                Rule {
                    app_id: Regex::new("chat").ok(),
                    tags: 1 << 3,
                    ..Rule::default()
                },
                Rule {
                    title: Regex::new("work").ok(),
                    tags: 1 << 5,
                    ..Rule::default()
                },
            ],
            ..TestConfig::default()
        };
        let mut manager = Manager::new_test_with_output_and(config);
        let mut info = SurfaceInfo::new(1, SurfaceKind::XdgToplevel);
        info.app_id = Some("chat-app".to_owned());
        info.title = Some("work channel".to_owned());
        manager.display_event_handler(DisplayEvent::SurfaceCreated(info));
        manager.display_event_handler(DisplayEvent::SurfaceMapped(1));
        let client = manager.state.clients.id_for(&1).and_then(|id| manager.state.clients.get(id));
        assert_eq!(client.map(|c| c.tags), Some((1 << 3) | (1 << 5)));
        assert_eq!(manager.state.selected_client(), None, "not visible on the active tags");
    }

    #[test]
    fn rules_can_pick_a_monitor_by_index() {
        let config = TestConfig {
            rules: vec![Rule {
                app_id: Regex::new("slack").ok(),
                monitor: Some(1),
                ..Rule::default()
            }],
            ..TestConfig::default()
        };
        let mut manager = Manager::new_test_with_output_and(config);
        manager.display_event_handler(DisplayEvent::OutputAdded(OutputInfo {
            name: "HDMI-A-1".to_owned(),
            geometry: Xyhw::new(1920, 0, 1280, 1024),
        }));
        let first = manager.state.monitors[0].id;
        let second = manager.state.monitors[1].id;
        let mut info = SurfaceInfo::new(1, SurfaceKind::XdgToplevel);
        info.app_id = Some("slack".to_owned());
        manager.display_event_handler(DisplayEvent::SurfaceCreated(info));
        manager.display_event_handler(DisplayEvent::SurfaceMapped(1));
        let client = manager.state.clients.id_for(&1).and_then(|id| manager.state.clients.get(id));
        assert_eq!(client.map(|c| c.monitor), Some(Some(second)));
        assert_eq!(client.map(|c| c.geometry), Some(Xyhw::new(1920, 0, 1280, 1024)));
        assert_eq!(manager.state.selected_monitor, Some(first), "focus stays where it was");
    }
}
