use crate::config::Config;
use crate::display_servers::DisplayServer;
use crate::models::Handle;
use crate::state::State;
use crate::utils::child_process::{exec_shell, ChildID, Children};
use std::marker::PhantomData;
use std::process::ChildStdin;
use std::sync::{atomic::AtomicBool, Arc};

/// Maintains current program state.
#[derive(Debug)]
pub struct Manager<H: Handle, C, SERVER> {
    pub state: State<H>,
    pub(crate) config: PhantomData<C>,

    pub(crate) children: Children,
    pub(crate) startup: Option<ChildID>,
    pub(crate) reap_requested: Arc<AtomicBool>,
    pub(crate) quit_requested: bool,
    pub display_server: SERVER,
}

impl<H, C, SERVER> Manager<H, C, SERVER>
where
    H: Handle,
    C: Config,
    SERVER: DisplayServer<H>,
{
    pub fn new(config: &C) -> Self {
        Self::with_display_server(config, SERVER::new(config))
    }

    /// Drive an already constructed display server.
    pub fn with_display_server(config: &C, display_server: SERVER) -> Self {
        Self {
            state: State::new(config),
            config: PhantomData,
            children: Children::default(),
            startup: None,
            reap_requested: Arc::default(),
            quit_requested: false,
            display_server,
        }
    }

    pub fn register_child_hook(&self) {
        crate::child_process::register_child_hook(self.reap_requested.clone());
    }

    /// Run `command` through the shell. Status lines can be written to the returned pipe, and
    /// the command is killed when the event loop ends.
    pub fn run_startup_command(&mut self, command: &str) -> Option<ChildStdin> {
        let (pid, stdin) = exec_shell(command, &mut self.children)?;
        tracing::info!("Started `{}` as {}", command, pid);
        self.startup = Some(pid);
        Some(stdin)
    }

    pub fn is_quitting(&self) -> bool {
        self.quit_requested
    }
}

#[cfg(test)]
type TestManager = Manager<
    crate::models::MockHandle,
    crate::config::TestConfig,
    crate::display_servers::MockDisplayServer<crate::models::MockHandle>,
>;

#[cfg(test)]
impl TestManager {
    /// A manager with a single 1920x1080 output named `TEST-1`.
    pub fn new_test_with_output() -> Self {
        Self::new_test_with_output_and(crate::config::TestConfig::default())
    }

    pub fn new_test_with_output_and(config: crate::config::TestConfig) -> Self {
        let mut manager = Self::new(&config);
        manager.display_event_handler(crate::DisplayEvent::OutputAdded(
            crate::display_event::OutputInfo {
                name: "TEST-1".to_owned(),
                geometry: crate::models::Xyhw::new(0, 0, 1920, 1080),
            },
        ));
        manager
    }

    /// Create and map `count` xdg toplevels with handles `1..=count`, in that order.
    pub fn map_test_clients(&mut self, count: i32) -> Vec<crate::models::ClientId> {
        use crate::models::{SurfaceInfo, SurfaceKind};
        (1..=count)
            .filter_map(|handle| {
                self.display_event_handler(crate::DisplayEvent::SurfaceCreated(SurfaceInfo::new(
                    handle,
                    SurfaceKind::XdgToplevel,
                )));
                self.display_event_handler(crate::DisplayEvent::SurfaceMapped(handle));
                self.state.clients.id_for(&handle)
            })
            .collect()
    }
}
