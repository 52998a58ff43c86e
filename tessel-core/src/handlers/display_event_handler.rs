use super::{Config, DisplayAction, DisplayServer, Handle, Manager};
use crate::DisplayEvent;

impl<H: Handle, C: Config, SERVER: DisplayServer<H>> Manager<H, C, SERVER> {
    /// Apply one event from the display server to the manager.
    /// Returns true if a command ran because of it.
    pub fn display_event_handler(&mut self, event: DisplayEvent<H>) -> bool {
        tracing::trace!("Event: {:?}", event);
        let state = &mut self.state;
        match event {
            DisplayEvent::SurfaceCreated(info) => {
                state.surface_created(info);
            }
            DisplayEvent::SurfaceMapped(handle) => state.surface_mapped(&handle),
            DisplayEvent::SurfaceUnmapped(handle) => state.surface_unmapped(&handle),
            DisplayEvent::SurfaceDestroyed(handle) => state.surface_destroyed(&handle),
            DisplayEvent::TitleChanged(handle, title) => state.title_changed(&handle, title),
            DisplayEvent::AppIdChanged(handle, app_id) => state.app_id_changed(&handle, app_id),
            DisplayEvent::FullscreenRequested(handle, fullscreen) => {
                state.fullscreen_requested(&handle, fullscreen);
            }
            DisplayEvent::SurfaceCommitted(handle, serial) => {
                state.surface_committed(&handle, serial);
            }
            DisplayEvent::SizeHintsChanged(handle, hints) => {
                state.size_hints_changed(&handle, hints);
            }
            DisplayEvent::UrgencyChanged(handle, urgent) => state.urgency_changed(&handle, urgent),

            DisplayEvent::OutputAdded(info) => state.output_added(info),
            DisplayEvent::OutputRemoved(name) => state.output_removed(&name),
            DisplayEvent::OutputChanged(info) => state.output_changed(&info),
            DisplayEvent::UsableAreaChanged(name, area) => state.usable_area_changed(&name, area),
            DisplayEvent::FrameTick(name) => state.frame_tick(&name),

            DisplayEvent::KeyPress {
                modmask,
                keysyms,
                keycode,
            } => return self.key_press(modmask, &keysyms, keycode),
            DisplayEvent::KeyRelease { keycode } => {
                state
                    .actions
                    .push_back(DisplayAction::ForwardKey { keycode, pressed: false });
            }
            DisplayEvent::ButtonPress { modmask, button } => {
                return self.button_press(modmask, button);
            }
            DisplayEvent::ButtonRelease { button } => state.button_release(button),
            DisplayEvent::PointerMotion { x, y } => state.pointer_motion(x, y),
            DisplayEvent::OverlayFocus(handle) => state.overlay_focus(handle),

            DisplayEvent::SendCommand(command) => return self.command_handler(&command),
        }
        false
    }
}
