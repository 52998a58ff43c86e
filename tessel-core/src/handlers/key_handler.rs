#![allow(clippy::wildcard_imports)]

use super::*;
use crate::display_event::Keysym;
use crate::utils::modmask_lookup::clean_mask;
use crate::ModMask;

impl<H: Handle, C: Config, SERVER: DisplayServer<H>> Manager<H, C, SERVER> {
    /// Run every binding matching one of the translated `keysyms`. A key nobody bound goes to
    /// the focused surface.
    pub fn key_press(&mut self, modmask: ModMask, keysyms: &[Keysym], keycode: u32) -> bool {
        let mods = clean_mask(modmask);
        let commands: Vec<_> = self
            .state
            .keybinds
            .iter()
            .filter(|k| keysyms.contains(&k.keysym) && clean_mask(k.modmask) == mods)
            .map(|k| k.command.clone())
            .collect();
        if commands.is_empty() {
            self.state
                .actions
                .push_back(DisplayAction::ForwardKey { keycode, pressed: true });
            return false;
        }
        commands
            .iter()
            .fold(false, |handled, command| self.command_handler(command) || handled)
    }
}

#[cfg(test)]
mod tests {
    use crate::config::{Keybind, TestConfig};
    use crate::models::Manager;
    use crate::utils::keysym_lookup::into_keysym;
    use crate::{Command, DisplayAction, DisplayEvent, ModMask};

    fn keybind(modmask: ModMask, key: &str, command: Command) -> Keybind {
        Keybind {
            modmask,
            keysym: into_keysym(key).unwrap_or_default(),
            command,
        }
    }

    fn config() -> TestConfig {
        TestConfig {
            keybinds: vec![
                keybind(ModMask::Alt, "j", Command::FocusStack(1)),
                keybind(ModMask::Alt, "k", Command::FocusStack(-1)),
                keybind(ModMask::Alt | ModMask::Shift, "Return", Command::Zoom),
                keybind(ModMask::Alt, "2", Command::View(2)),
                keybind(ModMask::Alt, "2", Command::SetLayout(Some(crate::layouts::Layout::Monocle))),
            ],
            ..TestConfig::default()
        }
    }

    fn press(modmask: ModMask, key: &str) -> DisplayEvent<i32> {
        DisplayEvent::KeyPress {
            modmask,
            keysyms: into_keysym(key).into_iter().collect(),
            keycode: 42,
        }
    }

    #[test]
    fn a_bound_key_runs_its_command() {
        let mut manager = Manager::new_test_with_output_and(config());
        let ids = manager.map_test_clients(2);
        manager.display_event_handler(press(ModMask::Alt, "j"));
        assert_eq!(manager.state.seat.focused_client(), Some(ids[0]));
        manager.display_event_handler(press(ModMask::Alt | ModMask::CapsLock, "k"));
        assert_eq!(manager.state.seat.focused_client(), Some(ids[1]));
    }

    #[test]
    fn modifiers_have_to_match_exactly() {
        let mut manager = Manager::new_test_with_output_and(config());
        let ids = manager.map_test_clients(2);
        manager.state.actions.clear();
        manager.display_event_handler(press(ModMask::Alt | ModMask::Control, "j"));
        assert_eq!(manager.state.seat.focused_client(), Some(ids[1]));
        assert_eq!(
            manager.state.actions.back(),
            Some(&DisplayAction::ForwardKey {
                keycode: 42,
                pressed: true
            })
        );
    }

    #[test]
    fn every_matching_binding_fires() {
        let mut manager = Manager::new_test_with_output_and(config());
        manager.display_event_handler(press(ModMask::Alt, "2"));
        let monitor = manager.state.selected_monitor().cloned();
        assert_eq!(monitor.as_ref().map(crate::Monitor::active_tags), Some(2));
        assert_eq!(
            monitor.map(|m| m.active_layout()),
            Some(crate::layouts::Layout::Monocle)
        );
    }

    #[test]
    fn releases_are_forwarded() {
        let mut manager = Manager::new_test_with_output_and(config());
        manager.display_event_handler(DisplayEvent::KeyRelease { keycode: 7 });
        assert_eq!(
            manager.state.actions.back(),
            Some(&DisplayAction::ForwardKey {
                keycode: 7,
                pressed: false
            })
        );
    }
}
