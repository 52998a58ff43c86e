//! Various shared functions that tessel uses.
pub mod child_process;
pub mod helpers;
pub mod keysym_lookup;
pub mod modmask_lookup;
