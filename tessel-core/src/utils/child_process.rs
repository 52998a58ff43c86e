//! Launches user programs and keeps track of them until they exit.
use std::collections::HashMap;
use std::iter::{Extend, FromIterator};
use std::os::unix::process::CommandExt;
use std::process::{Child, ChildStdin, Command, Stdio};
use std::sync::{atomic::AtomicBool, Arc};

use crate::errors::{Result, TesselError};

pub type ChildID = u32;

/// A struct managing children processes.
#[derive(Debug, Default)]
pub struct Children {
    inner: HashMap<ChildID, Child>,
}

impl Children {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.len()
    }
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
    /// Insert a `Child` in the `Children`.
    ///
    /// # Returns
    /// - `true` if `child` is a new child-process
    /// - `false` if `child` is already known
    pub fn insert(&mut self, child: Child) -> bool {
        self.inner.insert(child.id(), child).is_none()
    }

    /// Remove all children processes which finished
    pub fn remove_finished_children(&mut self) {
        self.inner
            .retain(|_, child| child.try_wait().map_or(true, |ret| ret.is_none()));
    }

    /// Kill a single tracked child and wait for it, e.g. the startup command on shutdown.
    pub fn kill(&mut self, pid: ChildID) {
        if let Some(mut child) = self.inner.remove(&pid) {
            if let Err(err) = child.kill() {
                tracing::warn!("Unable to kill child {pid}: {err}");
            }
            _ = child.wait();
        }
    }
}

impl FromIterator<Child> for Children {
    fn from_iter<T: IntoIterator<Item = Child>>(iter: T) -> Self {
        Self {
            inner: iter.into_iter().map(|child| (child.id(), child)).collect(),
        }
    }
}

impl Extend<Child> for Children {
    fn extend<T: IntoIterator<Item = Child>>(&mut self, iter: T) {
        self.inner
            .extend(iter.into_iter().map(|child| (child.id(), child)));
    }
}

/// Register the `SIGCHLD` signal handler. Once the signal is received,
/// the flag will be set true. User needs to manually clear the flag.
pub fn register_child_hook(flag: Arc<AtomicBool>) {
    _ = signal_hook::flag::register(signal_hook::consts::signal::SIGCHLD, flag)
        .map_err(|err| tracing::error!("Cannot register SIGCHLD signal handler: {:?}", err));
}

/// Start `argv` detached in its own session group. Output is discarded.
///
/// # Errors
///
/// Returns `TesselError::SpawnFailed` when `argv` is empty or the program cannot be executed.
pub fn spawn(argv: &[String], children: &mut Children) -> Result<ChildID> {
    let (program, args) = argv
        .split_first()
        .ok_or_else(|| TesselError::SpawnFailed("empty command".to_owned()))?;
    let child = Command::new(program)
        .args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .process_group(0)
        .spawn()
        .map_err(|err| TesselError::SpawnFailed(format!("{program}: {err}")))?;
    let pid = child.id();
    children.insert(child);
    Ok(pid)
}

/// Sends command to shell for execution.
/// Returns the pid and the writing end of a pipe connected to the command's stdin.
pub fn exec_shell(command: &str, children: &mut Children) -> Option<(ChildID, ChildStdin)> {
    let mut child = Command::new("sh")
        .arg("-c")
        .arg(command)
        .stdin(Stdio::piped())
        .spawn()
        .map_err(|err| tracing::error!("Unable to start `{command}`: {err}"))
        .ok()?;
    let stdin = child.stdin.take()?;
    let pid = child.id();
    children.insert(child);
    Some((pid, stdin))
}
