use anyhow::{bail, Result};
use clap::{arg, command};
use std::path::Path;
use tessel::Config;

fn main() -> Result<()> {
    let matches = command!("tessel check")
        .about("Checks syntax of the configuration file")
        .help_template(tessel::utils::get_help_template())
        .args(&[
            arg!(-v --verbose "Outputs received configuration file."),
            arg!([INPUT] "Sets the input file to use. Uses the XDG config file otherwise."),
        ])
        .get_matches();

    let config_file = matches.get_one::<String>("INPUT").map(String::as_str);
    let verbose = matches.get_flag("verbose");

    println!(
        "\x1b[0;94m::\x1b[0m tessel version: {}",
        env!("CARGO_PKG_VERSION")
    );
    println!(
        "\x1b[0;94m::\x1b[0m tessel git hash: {}",
        git_version::git_version!(fallback = option_env!("GIT_HASH").unwrap_or("NONE"))
    );

    println!("\x1b[0;94m::\x1b[0m Loading configuration . . .");
    let config = match check_config_file(config_file, verbose) {
        Ok(config) => {
            println!("\x1b[0;92m    -> Configuration loaded OK \x1b[0m");
            config
        }
        Err(err) => {
            println!("\x1b[1;91mERROR:\x1b[0m\x1b[1m {err:#} \x1b[0m");
            bail!("configuration could not be loaded");
        }
    };

    if verbose {
        dbg!(&config);
    }

    let keybinds_ok = config.check_keybinds(verbose);
    let rules_ok = config.check_rules(verbose);
    let log_level_ok = config.check_log_level(verbose);
    if !(keybinds_ok && rules_ok && log_level_ok) {
        bail!("configuration has errors");
    }
    Ok(())
}

fn check_config_file(config_file: Option<&str>, verbose: bool) -> Result<Config> {
    let path = match config_file {
        Some(file) => Path::new(file).to_path_buf(),
        None => {
            let ron = tessel::default_config_path()?;
            let toml = ron.with_extension("toml");
            if !ron.exists() && toml.exists() {
                toml
            } else {
                ron
            }
        }
    };
    if verbose {
        println!("Reading {}", path.display());
    }
    if !path.exists() {
        bail!("configuration file {} does not exist", path.display());
    }
    tessel::load_from_path(&path)
}
