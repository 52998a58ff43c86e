#![allow(clippy::wildcard_imports)]

use super::*;
use crate::child_process::{self, Children};
use crate::layouts::{group_of, Group, Layout};
use crate::models::{TilingPosition, MAX_FACTOR, MIN_FACTOR};
use crate::utils::helpers;
use crate::Command;

impl<H: Handle, C: Config, SERVER: DisplayServer<H>> Manager<H, C, SERVER> {
    /* Please also update tessel/src/bin/tessel-check if any of the following apply after your update:
     * - a command now requires a value
     * - a command no longer requires a value
     * - a new command is introduced that requires a value
     *  */
    /// Processes a command and invokes the associated function.
    /// Returns true if the command changed anything.
    pub fn command_handler(&mut self, command: &Command) -> bool {
        tracing::debug!("Command: {:?}", command);
        process_internal(self, command).unwrap_or(false)
    }
}

fn process_internal<H: Handle, C: Config, SERVER: DisplayServer<H>>(
    manager: &mut Manager<H, C, SERVER>,
    command: &Command,
) -> Option<bool> {
    let state = &mut manager.state;
    match command {
        Command::Spawn(argv) => spawn(&mut manager.children, argv),
        Command::Quit => {
            manager.quit_requested = true;
            state.actions.push_back(DisplayAction::Terminate);
            Some(true)
        }
        Command::ChangeVt(vt) => {
            state.actions.push_back(DisplayAction::ChangeVt(*vt));
            Some(true)
        }

        Command::FocusStack(direction) => {
            state.focus_stack(*direction);
            Some(true)
        }
        Command::PushUp => push(state, -1),
        Command::PushDown => push(state, 1),
        Command::Zoom => zoom(state),
        Command::MoveMouse => {
            state.move_resize(false);
            Some(true)
        }
        Command::ResizeMouse => {
            state.move_resize(true);
            Some(true)
        }

        Command::SetLayout(layout) => set_layout(state, *layout),
        Command::SetMFact(factor) => set_mfact(state, *factor),
        Command::IncNMaster(delta) => inc_nmaster(state, *delta),
        Command::SetColFact(factor) => set_colfact(state, *factor),
        Command::PushLeft => push_left(state),
        Command::IncNCols(delta) => inc_ncols(state, *delta),

        Command::View(tags) => {
            state.view(*tags);
            Some(true)
        }
        Command::ToggleView(tags) => {
            state.toggle_view(*tags);
            Some(true)
        }
        Command::Tag(tags) => {
            state.tag(*tags);
            Some(true)
        }
        Command::ToggleTag(tags) => {
            state.toggle_tag(*tags);
            Some(true)
        }

        Command::ToggleFloating => {
            let id = state.selected_client()?;
            let client = state.clients.get(id)?;
            if client.is_fullscreen {
                return None;
            }
            let floating = client.is_floating;
            state.set_floating(id, !floating);
            Some(true)
        }
        Command::ToggleFullscreen => {
            let id = state.selected_client()?;
            let fullscreen = state.clients.get(id)?.is_fullscreen;
            state.set_fullscreen(id, !fullscreen);
            Some(true)
        }
        Command::KillClient => {
            let id = state.selected_client()?;
            let handle = state.clients.get(id)?.handle();
            state.actions.push_back(DisplayAction::CloseSurface(handle));
            Some(true)
        }

        Command::FocusMon(direction) => focus_mon(state, *direction),
        Command::TagMon(direction) => tag_mon(state, *direction),
    }
}

fn spawn(children: &mut Children, argv: &[String]) -> Option<bool> {
    match child_process::spawn(argv, children) {
        Ok(_) => Some(true),
        Err(err) => {
            tracing::error!("Spawn failed: {}", err);
            None
        }
    }
}

/// The selected client when it takes part in the active layout.
fn selected_tiled<H: Handle>(state: &State<H>) -> Option<ClientId> {
    let id = state.selected_client()?;
    let client = state.clients.get(id)?;
    let layout = state.selected_monitor()?.active_layout();
    (layout.has_arrange() && client.is_tiled()).then_some(id)
}

/// Column group of the selected client in the variable column layout.
fn selected_group<H: Handle>(state: &State<H>) -> Option<(ClientId, Group)> {
    let id = state.selected_client()?;
    let monitor = state.selected_monitor()?;
    let tiled = state.tiled_on(monitor);
    let index = tiled.iter().position(|c| c.id == id)?;
    Some((id, group_of(monitor, index, &tiled[index])))
}

fn arrange_selected<H: Handle>(state: &mut State<H>) {
    if let Some(monitor) = state.selected_monitor {
        state.arrange(monitor);
    }
}

/// `count + delta`, saturating, and never below `floor`.
fn add_count(count: usize, delta: i32, floor: i32) -> usize {
    let count = i32::try_from(count).unwrap_or(i32::MAX);
    count.saturating_add(delta).max(floor) as usize
}

/// `f` below 1.0 is a step added to `current`, anything else minus one is the new value.
fn apply_factor(current: f32, f: f32) -> f32 {
    if f < 1.0 {
        current + f
    } else {
        f - 1.0
    }
}

fn zoom<H: Handle>(state: &mut State<H>) -> Option<bool> {
    let selected = selected_tiled(state)?;
    let tiled = state.tiled_on(state.selected_monitor()?);
    // The head of the list swaps with the next tiled client instead.
    let promote = if tiled.first()?.id == selected {
        tiled.get(1)?.id
    } else {
        selected
    };
    state.clients.place_in_tiling(promote, TilingPosition::Front);
    state.focus_client(Some(promote), true);
    arrange_selected(state);
    Some(true)
}

/// Move the selection one place up (negative) or down the visible tiled clients. Without a
/// neighbour in that direction it goes to the other end of the tiling list.
fn push<H: Handle>(state: &mut State<H>, direction: i32) -> Option<bool> {
    let selected = state.selected_client()?;
    if state.clients.get(selected)?.is_floating {
        return None;
    }
    let monitor = state.selected_monitor()?;
    // Fullscreen clients keep their place in the list, so they count as neighbours.
    let tiled: Vec<ClientId> = state
        .clients
        .tiled_clients()
        .filter(|c| !c.is_floating && c.is_visible_on(monitor))
        .map(|c| c.id)
        .collect();
    let neighbour = helpers::walk_from(&tiled, &selected, direction, |_| true).copied();
    let position = match (neighbour, direction < 0) {
        (Some(other), true) => TilingPosition::Before(other),
        (Some(other), false) => TilingPosition::After(other),
        (None, true) => TilingPosition::Back,
        (None, false) => TilingPosition::Front,
    };
    state.clients.place_in_tiling(selected, position);
    state.focus_client(Some(selected), true);
    arrange_selected(state);
    Some(true)
}

fn set_layout<H: Handle>(state: &mut State<H>, layout: Option<Layout>) -> Option<bool> {
    let id = state.selected_monitor?;
    let monitor = state.monitor_mut(id)?;
    match layout {
        Some(layout) => {
            if layout != monitor.active_layout() {
                monitor.layout.swap();
            }
            monitor.layout.set(layout);
        }
        None => monitor.layout.swap(),
    }
    state.arrange(id);
    state.print_status();
    Some(true)
}

fn set_mfact<H: Handle>(state: &mut State<H>, factor: f32) -> Option<bool> {
    let id = state.selected_monitor?;
    let monitor = state.monitor_mut(id)?;
    if !monitor.active_layout().has_arrange() {
        return None;
    }
    let mfact = apply_factor(monitor.mfact, factor);
    if !(MIN_FACTOR..=MAX_FACTOR).contains(&mfact) {
        tracing::debug!("Ignoring master factor {}", mfact);
        return None;
    }
    monitor.mfact = mfact;
    state.arrange(id);
    Some(true)
}

fn inc_nmaster<H: Handle>(state: &mut State<H>, delta: i32) -> Option<bool> {
    let id = state.selected_monitor?;
    let monitor = state.monitor_mut(id)?;
    monitor.nmaster = add_count(monitor.nmaster, delta, 0);
    state.arrange(id);
    Some(true)
}

fn set_colfact<H: Handle>(state: &mut State<H>, factor: f32) -> Option<bool> {
    selected_tiled(state)?;
    let (_, group) = selected_group(state)?;
    let index = match group {
        Group::Left => 0,
        Group::Master => 1,
        Group::Right => 2,
    };
    let id = state.selected_monitor?;
    let monitor = state.monitor_mut(id)?;
    let colfact = apply_factor(monitor.colfact[index], factor);
    monitor.colfact[index] = colfact.clamp(MIN_FACTOR, MAX_FACTOR);
    state.arrange(id);
    Some(true)
}

fn push_left<H: Handle>(state: &mut State<H>) -> Option<bool> {
    let selected = selected_tiled(state)?;
    let client = state.clients.get_mut(selected)?;
    client.is_left = !client.is_left;
    state.focus_client(Some(selected), true);
    arrange_selected(state);
    Some(true)
}

fn inc_ncols<H: Handle>(state: &mut State<H>, delta: i32) -> Option<bool> {
    selected_tiled(state)?;
    let (_, group) = selected_group(state)?;
    let id = state.selected_monitor?;
    let monitor = state.monitor_mut(id)?;
    let grow = |count: usize| add_count(count, delta, 1);
    match group {
        Group::Left => return None,
        Group::Master => {
            monitor.nmastercols = grow(monitor.nmastercols);
            monitor.nmaster = monitor.nmastercols;
        }
        Group::Right => monitor.nrightcols = grow(monitor.nrightcols),
    }
    state.arrange(id);
    Some(true)
}

/// The monitor `direction` places away from the selected one, wrapping around.
fn monitor_towards<H: Handle>(state: &State<H>, direction: i32) -> Option<MonitorId> {
    let selected = state.selected_monitor?;
    let ids: Vec<MonitorId> = state
        .monitors
        .iter()
        .filter(|m| m.enabled)
        .map(|m| m.id)
        .collect();
    helpers::relative_find(&ids, |id| *id == selected, direction, true).copied()
}

fn focus_mon<H: Handle>(state: &mut State<H>, direction: i32) -> Option<bool> {
    let target = monitor_towards(state, direction)?;
    state.selected_monitor = Some(target);
    let top = state.focus_top(target);
    state.focus_client(top, true);
    state.print_status();
    Some(true)
}

fn tag_mon<H: Handle>(state: &mut State<H>, direction: i32) -> Option<bool> {
    let selected = state.selected_client()?;
    let target = monitor_towards(state, direction)?;
    state.set_monitor(selected, Some(target), 0);
    Some(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TestConfig;
    use crate::display_event::OutputInfo;
    use crate::models::{Manager, MockHandle, DEFAULT_MFACT};
    use crate::DisplayEvent;

    type TestManager =
        Manager<MockHandle, TestConfig, crate::display_servers::MockDisplayServer<MockHandle>>;

    fn add_second_output(manager: &mut TestManager) -> MonitorId {
        manager.display_event_handler(DisplayEvent::OutputAdded(OutputInfo {
            name: "HDMI-A-1".to_owned(),
            geometry: Xyhw::new(1920, 0, 1920, 1080),
        }));
        manager.state.monitors[1].id
    }

    fn mfact(manager: &TestManager) -> f32 {
        manager.state.selected_monitor().map_or(0.0, |m| m.mfact)
    }

    #[test]
    fn set_mfact_adds_small_values_and_sets_large_ones() {
        let mut manager = Manager::new_test_with_output();
        assert!(manager.command_handler(&Command::SetMFact(0.25)));
        assert!((mfact(&manager) - (DEFAULT_MFACT + 0.25)).abs() < f32::EPSILON);
        assert!(manager.command_handler(&Command::SetMFact(1.3)));
        assert!((mfact(&manager) - 0.3).abs() < 1e-6);
    }

    #[test]
    fn set_mfact_ignores_values_out_of_bounds() {
        let mut manager = Manager::new_test_with_output();
        assert!(!manager.command_handler(&Command::SetMFact(0.5)));
        assert!(!manager.command_handler(&Command::SetMFact(1.05)));
        assert!(!manager.command_handler(&Command::SetMFact(1.95)));
        assert!((mfact(&manager) - DEFAULT_MFACT).abs() < f32::EPSILON);
    }

    #[test]
    fn set_mfact_needs_a_layout_that_arranges() {
        let mut manager = Manager::new_test_with_output();
        manager.command_handler(&Command::SetLayout(Some(Layout::Floating)));
        assert!(!manager.command_handler(&Command::SetMFact(0.05)));
    }

    #[test]
    fn set_layout_swaps_slots_and_none_goes_back() {
        let mut manager = Manager::new_test_with_output();
        manager.command_handler(&Command::SetLayout(Some(Layout::Monocle)));
        let layout = |m: &TestManager| m.state.selected_monitor().map(|m| m.active_layout());
        assert_eq!(layout(&manager), Some(Layout::Monocle));
        manager.command_handler(&Command::SetLayout(None));
        assert_eq!(layout(&manager), Some(Layout::Tile));
        manager.command_handler(&Command::SetLayout(None));
        assert_eq!(layout(&manager), Some(Layout::Monocle));
        assert_eq!(manager.state.status.take().last().map(String::as_str), Some("TEST-1 layout [M]"));
    }

    #[test]
    fn inc_nmaster_floors_at_zero() {
        let mut manager = Manager::new_test_with_output();
        manager.command_handler(&Command::IncNMaster(-3));
        assert_eq!(manager.state.selected_monitor().map(|m| m.nmaster), Some(0));
        manager.command_handler(&Command::IncNMaster(2));
        assert_eq!(manager.state.selected_monitor().map(|m| m.nmaster), Some(2));
    }

    #[test]
    fn count_commands_saturate_on_huge_steps() {
        let mut manager = Manager::new_test_with_output();
        manager.command_handler(&Command::IncNMaster(i32::MAX));
        manager.command_handler(&Command::IncNMaster(i32::MAX));
        let nmaster = manager.state.selected_monitor().map(|m| m.nmaster);
        assert_eq!(nmaster, Some(i32::MAX as usize));
        manager.command_handler(&Command::IncNMaster(i32::MIN));
        assert_eq!(manager.state.selected_monitor().map(|m| m.nmaster), Some(0));

        manager.map_test_clients(2);
        manager.command_handler(&Command::SetLayout(Some(Layout::VarCol)));
        manager.command_handler(&Command::IncNCols(i32::MAX));
        manager.command_handler(&Command::IncNCols(i32::MAX));
        let monitor = manager.state.selected_monitor().cloned();
        assert_eq!(monitor.map(|m| m.nmastercols), Some(i32::MAX as usize));
    }

    #[test]
    fn zoom_moves_the_selection_to_the_front() {
        let mut manager = Manager::new_test_with_output();
        let ids = manager.map_test_clients(3);
        // Newest first: ids[2], ids[1], ids[0]
        manager.state.focus_client(Some(ids[0]), true);
        manager.command_handler(&Command::Zoom);
        assert_eq!(manager.state.clients.tiling(), &[ids[0], ids[2], ids[1]]);
        assert_eq!(manager.state.seat.focused_client(), Some(ids[0]));
    }

    #[test]
    fn zoom_on_the_head_promotes_the_next_client() {
        let mut manager = Manager::new_test_with_output();
        let ids = manager.map_test_clients(3);
        manager.command_handler(&Command::Zoom);
        assert_eq!(manager.state.clients.tiling(), &[ids[1], ids[2], ids[0]]);
        assert_eq!(manager.state.seat.focused_client(), Some(ids[1]));
    }

    #[test]
    fn zoom_ignores_floating_clients() {
        let mut manager = Manager::new_test_with_output();
        let ids = manager.map_test_clients(2);
        manager.state.focus_client(Some(ids[0]), true);
        manager.command_handler(&Command::ToggleFloating);
        assert!(!manager.command_handler(&Command::Zoom));
        assert_eq!(manager.state.clients.tiling(), &[ids[1], ids[0]]);
    }

    #[test]
    fn push_moves_past_the_neighbour_and_wraps_to_the_other_end() {
        let mut manager = Manager::new_test_with_output();
        let ids = manager.map_test_clients(3);
        // ids[2] is selected and first.
        manager.command_handler(&Command::PushDown);
        assert_eq!(manager.state.clients.tiling(), &[ids[1], ids[2], ids[0]]);
        manager.command_handler(&Command::PushUp);
        assert_eq!(manager.state.clients.tiling(), &[ids[2], ids[1], ids[0]]);
        manager.command_handler(&Command::PushUp);
        assert_eq!(manager.state.clients.tiling(), &[ids[1], ids[0], ids[2]]);
        manager.command_handler(&Command::PushDown);
        assert_eq!(manager.state.clients.tiling(), &[ids[2], ids[1], ids[0]]);
    }

    #[test]
    fn push_moves_a_fullscreen_selection_in_place() {
        let mut manager = Manager::new_test_with_output();
        let ids = manager.map_test_clients(3);
        manager.state.focus_client(Some(ids[1]), true);
        manager.state.set_fullscreen(ids[1], true);
        manager.command_handler(&Command::PushUp);
        assert_eq!(manager.state.clients.tiling(), &[ids[1], ids[2], ids[0]]);
    }

    #[test]
    fn push_counts_fullscreen_clients_as_neighbours() {
        let mut manager = Manager::new_test_with_output();
        let ids = manager.map_test_clients(3);
        manager.state.set_fullscreen(ids[1], true);
        manager.state.focus_client(Some(ids[0]), true);
        manager.command_handler(&Command::PushUp);
        assert_eq!(manager.state.clients.tiling(), &[ids[2], ids[0], ids[1]]);
    }

    #[test]
    fn fullscreen_clients_do_not_toggle_floating() {
        let mut manager = Manager::new_test_with_output();
        let ids = manager.map_test_clients(1);
        manager.state.set_fullscreen(ids[0], true);
        assert!(!manager.command_handler(&Command::ToggleFloating));
        let client = manager.state.clients.get(ids[0]);
        assert_eq!(client.map(|c| (c.is_fullscreen, c.is_floating)), Some((true, false)));
    }

    #[test]
    fn column_commands_ignore_floating_selections() {
        let mut manager = Manager::new_test_with_output();
        let ids = manager.map_test_clients(2);
        manager.command_handler(&Command::SetLayout(Some(Layout::VarCol)));
        manager.state.set_floating(ids[1], true);
        manager.state.focus_client(Some(ids[1]), true);
        assert!(!manager.command_handler(&Command::PushLeft));
        assert_eq!(manager.state.clients.get(ids[1]).map(|c| c.is_left), Some(false));
        assert!(!manager.command_handler(&Command::IncNCols(1)));
        let monitor = manager.state.selected_monitor().cloned();
        assert_eq!(monitor.map(|m| m.nmastercols), Some(1));
    }

    #[test]
    fn push_skips_clients_on_other_tags() {
        let mut manager = Manager::new_test_with_output();
        let ids = manager.map_test_clients(3);
        manager.state.focus_client(Some(ids[1]), true);
        manager.command_handler(&Command::Tag(2));
        manager.state.focus_client(Some(ids[2]), true);
        manager.command_handler(&Command::PushDown);
        assert_eq!(manager.state.clients.tiling(), &[ids[1], ids[0], ids[2]]);
    }

    #[test]
    fn set_colfact_targets_the_column_of_the_selection() {
        let mut manager = Manager::new_test_with_output();
        let ids = manager.map_test_clients(2);
        manager.command_handler(&Command::SetLayout(Some(Layout::VarCol)));
        let colfact = |m: &TestManager| m.state.selected_monitor().map(|m| m.colfact);

        manager.command_handler(&Command::SetColFact(0.1));
        let master = colfact(&manager).map_or(0.0, |c| c[1]);
        assert!((master - 0.7).abs() < 1e-6);

        manager.state.focus_client(Some(ids[0]), true);
        manager.command_handler(&Command::SetColFact(1.5));
        assert_eq!(colfact(&manager).map(|c| c[2]), Some(0.5));

        manager.command_handler(&Command::SetColFact(0.9));
        assert_eq!(colfact(&manager).map(|c| c[2]), Some(0.9));
        manager.command_handler(&Command::SetColFact(1.0));
        assert_eq!(colfact(&manager).map(|c| c[2]), Some(0.1));
    }

    #[test]
    fn inc_ncols_changes_the_column_count_of_the_selection() {
        let mut manager = Manager::new_test_with_output();
        let ids = manager.map_test_clients(3);
        manager.command_handler(&Command::SetLayout(Some(Layout::VarCol)));
        manager.command_handler(&Command::IncNCols(1));
        let monitor = manager.state.selected_monitor().cloned();
        assert_eq!(monitor.as_ref().map(|m| (m.nmastercols, m.nmaster)), Some((2, 2)));

        // ids[0] is the last client and stays in the right group.
        manager.state.focus_client(Some(ids[0]), true);
        manager.command_handler(&Command::IncNCols(-5));
        let monitor = manager.state.selected_monitor().cloned();
        assert_eq!(monitor.map(|m| m.nrightcols), Some(1));
    }

    #[test]
    fn push_left_toggles_the_pin() {
        let mut manager = Manager::new_test_with_output();
        let ids = manager.map_test_clients(1);
        manager.command_handler(&Command::PushLeft);
        assert_eq!(manager.state.clients.get(ids[0]).map(|c| c.is_left), Some(true));
        manager.command_handler(&Command::PushLeft);
        assert_eq!(manager.state.clients.get(ids[0]).map(|c| c.is_left), Some(false));
    }

    #[test]
    fn kill_client_asks_the_selection_to_close() {
        let mut manager = Manager::new_test_with_output();
        manager.map_test_clients(2);
        manager.state.actions.clear();
        manager.command_handler(&Command::KillClient);
        assert_eq!(manager.state.actions.back(), Some(&DisplayAction::CloseSurface(2)));
    }

    #[test]
    fn kill_client_without_a_selection_does_nothing() {
        let mut manager = Manager::new_test_with_output();
        manager.state.actions.clear();
        assert!(!manager.command_handler(&Command::KillClient));
        assert!(manager.state.actions.is_empty());
    }

    #[test]
    fn focus_mon_wraps_around() {
        let mut manager = Manager::new_test_with_output();
        let first = manager.state.monitors[0].id;
        let second = add_second_output(&mut manager);
        manager.command_handler(&Command::FocusMon(1));
        assert_eq!(manager.state.selected_monitor, Some(second));
        manager.command_handler(&Command::FocusMon(1));
        assert_eq!(manager.state.selected_monitor, Some(first));
        manager.command_handler(&Command::FocusMon(-1));
        assert_eq!(manager.state.selected_monitor, Some(second));
    }

    #[test]
    fn tag_mon_sends_the_selection_to_the_next_monitor() {
        let mut manager = Manager::new_test_with_output();
        let second = add_second_output(&mut manager);
        let ids = manager.map_test_clients(2);
        manager.command_handler(&Command::TagMon(1));
        let moved = manager.state.clients.get(ids[1]).cloned();
        assert_eq!(moved.as_ref().and_then(|c| c.monitor), Some(second));
        assert_eq!(moved.map(|c| c.geometry.x), Some(1920));
        assert_eq!(manager.state.seat.focused_client(), Some(ids[0]));
    }

    #[test]
    fn quit_terminates_the_display() {
        let mut manager = Manager::new_test_with_output();
        manager.command_handler(&Command::Quit);
        assert!(manager.is_quitting());
        assert_eq!(manager.state.actions.back(), Some(&DisplayAction::Terminate));
    }

    #[test]
    fn spawning_nothing_fails() {
        let mut manager = Manager::new_test_with_output();
        assert!(!manager.command_handler(&Command::Spawn(vec![])));
    }
}
