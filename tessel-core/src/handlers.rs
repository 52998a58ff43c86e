mod arrange_handler;
pub mod command_handler;
mod display_event_handler;
mod focus_handler;
mod goto_tag_handler;
mod key_handler;
mod mouse_combo_handler;
mod output_handler;
mod pointer_handler;
mod rule_handler;
mod window_handler;

use crate::config::Config;
use crate::display_action::DisplayAction;
use crate::display_servers::DisplayServer;
use crate::models::{ClientId, Handle, KeyboardTarget, Manager, MonitorId, Xyhw};
use crate::state::State;
