use anyhow::{Context, Result};
use clap::{arg, command};
use std::fs::OpenOptions;
use std::io::{self, Write};
use tessel::{HeadlessDisplayServer, SurfaceId};
use tessel_core::Manager;

fn main() -> Result<()> {
    let matches = command!("tessel worker")
        .about("Runs the window manager over display events read as JSON lines from stdin")
        .help_template(tessel::utils::get_help_template())
        .args(&[arg!(-s --startup <COMMAND> "Runs COMMAND with `sh -c` after startup. Status lines are written to its stdin.")])
        .get_matches();

    let config = tessel::load();
    tessel::utils::log::setup_logging(&config.log_level);
    tracing::info!("tessel-worker booting...");

    let rt = tokio::runtime::Runtime::new().context("couldn't init Tokio runtime")?;
    let _rt_guard = rt.enter();

    let mut manager = Manager::<SurfaceId, tessel::Config, HeadlessDisplayServer>::new(&config);
    manager.register_child_hook();

    let startup_stdin = matches
        .get_one::<String>("startup")
        .and_then(|command| manager.run_startup_command(command));

    // The startup command reads the status when there is one, then the configured file.
    let status: Box<dyn Write> = if let Some(stdin) = startup_stdin {
        Box::new(stdin)
    } else if let Some(path) = &config.status_output {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("could not open status output {}", path.display()))?;
        Box::new(file)
    } else {
        Box::new(io::stdout())
    };

    let result = rt.block_on(manager.event_loop(status));
    match &result {
        Ok(()) => tracing::info!("Completed"),
        Err(err) => tracing::error!("Completed with event loop error: {}", err),
    }
    Ok(result?)
}
