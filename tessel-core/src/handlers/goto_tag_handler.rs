#![allow(clippy::wildcard_imports)]

use super::*;
use crate::models::TagMask;

impl<H: Handle> State<H> {
    /// Show `tags` on the selected monitor. The previous tagset is remembered, and `view(0)`
    /// goes back to it.
    pub fn view(&mut self, tags: TagMask) {
        let tags = tags & self.tag_mask;
        let Some(id) = self.selected_monitor else {
            return;
        };
        let Some(monitor) = self.monitor_mut(id) else {
            return;
        };
        if tags == monitor.active_tags() {
            return;
        }
        monitor.tagset.swap();
        if tags != 0 {
            monitor.tagset.set(tags);
        }
        self.refocus();
        self.arrange(id);
        self.print_status();
    }

    pub fn toggle_view(&mut self, tags: TagMask) {
        let Some(id) = self.selected_monitor else {
            return;
        };
        let mask = self.tag_mask;
        let Some(monitor) = self.monitor_mut(id) else {
            return;
        };
        let toggled = monitor.active_tags() ^ (tags & mask);
        if toggled == 0 {
            return;
        }
        monitor.tagset.set(toggled);
        self.refocus();
        self.arrange(id);
        self.print_status();
    }

    /// Move the selected client to `tags`.
    pub fn tag(&mut self, tags: TagMask) {
        let tags = tags & self.tag_mask;
        if tags == 0 {
            return;
        }
        self.retag_selected(|_| tags);
    }

    pub fn toggle_tag(&mut self, tags: TagMask) {
        let mask = self.tag_mask;
        self.retag_selected(|current| current ^ (tags & mask));
    }

    fn retag_selected(&mut self, retag: impl FnOnce(TagMask) -> TagMask) {
        let (Some(selected), Some(monitor)) = (self.selected_client(), self.selected_monitor) else {
            return;
        };
        let Some(client) = self.clients.get_mut(selected) else {
            return;
        };
        let tags = retag(client.tags);
        if tags == 0 {
            return;
        }
        client.tags = tags;
        self.refocus();
        self.arrange(monitor);
        self.print_status();
    }
}
