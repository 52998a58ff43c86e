//! Window management core of the tessel tiling compositor.
// We deny clippy pedantic lints, primarily to keep code as correct as possible
// Remember, the goal of tessel is to do one thing and to do that one thing
// well: arrange windows.
#![warn(clippy::pedantic)]
// Each of these lints are globally allowed because they otherwise make a lot
// of noise. However, work to ensure that each use of one of these is correct
// would be very much appreciated.
#![allow(
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_possible_wrap,
    clippy::cast_sign_loss,
    clippy::must_use_candidate,
    clippy::default_trait_access
)]
mod command;
pub mod config;
mod display_action;
mod display_event;
pub mod display_servers;
pub mod errors;
mod event_loop;
mod handlers;
pub mod layouts;
pub mod models;
pub mod state;
pub mod status;
pub mod utils;

use utils::modmask_lookup::Button;
use utils::modmask_lookup::ModMask;

pub use command::Command;
pub use config::Config;
pub use display_action::{DisplayAction, Edges};
pub use display_event::{DisplayEvent, Keysym, OutputInfo};
pub use display_servers::DisplayServer;
pub use models::Client;
pub use models::Manager;
pub use models::Monitor;
pub use state::State;
pub use utils::child_process;
