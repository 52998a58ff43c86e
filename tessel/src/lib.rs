//! Configuration and the headless display server of the tessel compositor.
mod command;
mod config;
mod headless;
pub mod utils;

pub use command::BaseCommand;
pub use config::*;
pub use headless::{HeadlessDisplayServer, SurfaceId};
