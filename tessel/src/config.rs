//! tessel general configuration

mod checks;
mod default;
mod keybind;

pub use self::keybind::{Keybind, Modifier, Mousebind};

use anyhow::{Context, Result};
use regex::Regex;
use ron::{
    extensions::Extensions,
    ser::{to_string_pretty, PrettyConfig},
    Options,
};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::env;
use std::fs;
use std::fs::File;
use std::io::prelude::Write;
use std::path::{Path, PathBuf};
use tessel_core::config::{MonitorRule, Rule};
use tessel_core::layouts::Layout;
use tessel_core::models::{TagMask, MAX_TAGS};
use xdg::BaseDirectories;

/// Initial placement of clients, matched by app id and/or title.
///
/// # Example
///
/// In `config.ron`
///
/// ```ron
/// rules: [
///     (app_id: "mpv", floating: true),
///     (title: "^Picture-in-Picture$", floating: true, tags: 256),
/// ]
/// ```
///
/// Every matching rule applies, in order.
#[derive(Serialize, Deserialize, Default, Debug, Clone)]
pub struct WindowRule {
    // Use serde default field attribute to fallback to None option in case of missing field in
    // config. Without this attribute deserializer will fail on missing field due to it's inability
    // to treat missing value as Option::None
    #[serde(
        default,
        deserialize_with = "from_regex",
        serialize_with = "to_config_string"
    )]
    pub app_id: Option<Regex>,
    #[serde(
        default,
        deserialize_with = "from_regex",
        serialize_with = "to_config_string"
    )]
    pub title: Option<Regex>,
    /// Tag bitmask, 0 keeps the tags of the monitor the client lands on.
    #[serde(default)]
    pub tags: TagMask,
    #[serde(default)]
    pub floating: bool,
    /// Index into the monitor list, in the order outputs appeared.
    #[serde(default)]
    pub monitor: Option<usize>,
}

impl From<&WindowRule> for Rule {
    fn from(rule: &WindowRule) -> Self {
        Self {
            app_id: rule.app_id.clone(),
            title: rule.title.clone(),
            tags: rule.tags,
            floating: rule.floating,
            monitor: rule.monitor,
        }
    }
}

/// General configuration
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(default)]
pub struct Config {
    pub modkey: String,
    /// Started by `Spawn` bindings without a value.
    pub terminal: String,
    pub tag_count: u32,
    /// The first layout is the default of outputs no monitor rule matches.
    pub layouts: Vec<Layout>,
    pub rules: Vec<WindowRule>,
    pub monitor_rules: Vec<MonitorRule>,
    pub focus_follows_mouse: bool,
    pub lock_fullscreen: bool,
    pub border_width: i32,
    pub log_level: String,
    /// Where status lines go when no startup command reads them. Standard output if unset.
    pub status_output: Option<PathBuf>,
    // NOTE: any newly added parameters must be inserted before `pub keybind: Vec<Keybind>,`
    //       at least when `TOML` is used as config language
    pub keybind: Vec<Keybind>,
    pub mousebind: Vec<Mousebind>,
}

#[must_use]
pub fn load() -> Config {
    load_from_file()
        .map_err(|err| eprintln!("ERROR LOADING CONFIG: {err:?}"))
        .unwrap_or_default()
}

/// The `config.ron` path under the XDG config directory.
///
/// # Errors
///
/// Fails when the XDG base directories cannot be determined or created.
pub fn default_config_path() -> Result<PathBuf> {
    let path = BaseDirectories::with_prefix("tessel")?;
    Ok(path.place_config_file("config.ron")?)
}

/// # Errors
///
/// Function will throw an error if `BaseDirectories` doesn't exist, if user doesn't have
/// permissions to place config.ron, if the config file cannot be read (access rights, malformed
/// file, etc.).
/// Function can also error from inability to save config.ron (if it is the first time running
/// tessel).
pub fn load_from_file() -> Result<Config> {
    tracing::debug!("Loading config file");

    let config_file_ron = default_config_path()?;
    let config_file_toml = config_file_ron.with_extension("toml");

    if config_file_ron.exists() {
        load_from_path(&config_file_ron)
    } else if config_file_toml.exists() {
        load_from_path(&config_file_toml)
    } else {
        tracing::debug!("Config file not found. Using default config file.");
        let config = Config::default();
        write_to_path(&config, &config_file_ron)?;
        Ok(config)
    }
}

/// Load a RON file, or a TOML file when the extension says so.
///
/// # Errors
///
/// Fails when the file cannot be read or does not parse.
pub fn load_from_path(path: &Path) -> Result<Config> {
    tracing::debug!("Config file '{}' found.", path.to_string_lossy());
    let contents = fs::read_to_string(path)
        .with_context(|| format!("could not read {}", path.display()))?;
    if path.extension().is_some_and(|ext| ext == "toml") {
        return Ok(toml::from_str(&contents)?);
    }
    let ron = Options::default().with_default_extension(Extensions::IMPLICIT_SOME);
    Ok(ron.from_str(&contents)?)
}

/// Write `config` as commented RON.
///
/// # Errors
///
/// Fails when the file cannot be created or written.
pub fn write_to_path(config: &Config, path: &Path) -> Result<()> {
    let ron_pretty_conf = PrettyConfig::new()
        .depth_limit(2)
        .extensions(Extensions::IMPLICIT_SOME);
    let ron = to_string_pretty(config, ron_pretty_conf)?;
    let comment_header = String::from(
        r"// tessel configuration
// Bindings take a `command`, an optional `value` for it, a `modifier` (`modkey` is replaced by
// the `modkey` setting) and a `key` or `button`.

",
    );
    let mut file = File::create(path)?;
    file.write_all((comment_header + &ron).as_bytes())?;
    Ok(())
}

#[must_use]
pub fn is_program_in_path(program: &str) -> bool {
    if let Ok(path) = env::var("PATH") {
        for p in path.split(':') {
            let p_str = format!("{p}/{program}");
            if fs::metadata(p_str).is_ok() {
                return true;
            }
        }
    }
    false
}

/// Returns a terminal to set for the default mod+shift+enter keybind.
fn default_terminal() -> String {
    // order from least common to most common.
    // the thinking is if a machine has an uncommon terminal installed, it is intentional
    let terms = &["wezterm", "kitty", "alacritty", "foot"];

    // If no terminal found in path, default to a good one
    terms
        .iter()
        .find(|terminal| is_program_in_path(terminal))
        .unwrap_or(&"foot")
        .to_string()
}

impl tessel_core::Config for Config {
    fn tag_count(&self) -> u32 {
        self.tag_count.min(MAX_TAGS)
    }

    fn rules(&self) -> Vec<Rule> {
        self.rules.iter().map(Rule::from).collect()
    }

    fn monitor_rules(&self) -> Vec<MonitorRule> {
        self.monitor_rules.clone()
    }

    fn keybinds(&self) -> Vec<tessel_core::config::Keybind> {
        self.keybind
            .iter()
            .filter_map(|keybind| match keybind.try_convert_to_core_keybind(self) {
                Ok(core_keybind) => Some(core_keybind),
                Err(err) => {
                    tracing::error!("Invalid key binding: {}\n{:?}", err, keybind);
                    None
                }
            })
            .collect()
    }

    fn mousebinds(&self) -> Vec<tessel_core::config::Mousebind> {
        self.mousebind
            .iter()
            .filter_map(|mousebind| match mousebind.try_convert_to_core_mousebind(self) {
                Ok(core_mousebind) => Some(core_mousebind),
                Err(err) => {
                    tracing::error!("Invalid mouse binding: {}\n{:?}", err, mousebind);
                    None
                }
            })
            .collect()
    }

    fn default_layout(&self) -> Layout {
        self.layouts.first().copied().unwrap_or_default()
    }

    fn border_width(&self) -> i32 {
        self.border_width
    }

    fn focus_follows_mouse(&self) -> bool {
        self.focus_follows_mouse
    }

    fn lock_fullscreen(&self) -> bool {
        self.lock_fullscreen
    }
}

// Regular expressions in tessel config use the syntax of the `regex` crate.
// An empty pattern matches everything, like an absent one.
fn from_regex<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<Regex>, D::Error> {
    let res: Option<String> = Deserialize::deserialize(deserializer)?;
    match res {
        Some(s) if !s.is_empty() => Regex::new(&s).map(Some).map_err(serde::de::Error::custom),
        _ => Ok(None),
    }
}

fn to_config_string<S: Serializer>(wc: &Option<Regex>, s: S) -> Result<S::Ok, S::Error> {
    match wc {
        Some(ref re) => s.serialize_some(re.as_str()),
        None => s.serialize_none(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tessel_core::Command;

    #[test]
    fn config_serializes_to_valid_ron_test() {
        let config = Config::default();

        let ron_pretty_conf = ron::ser::PrettyConfig::new()
            .depth_limit(2)
            .extensions(ron::extensions::Extensions::IMPLICIT_SOME);
        let ron = ron::ser::to_string_pretty(&config, ron_pretty_conf);
        assert!(ron.is_ok(), "Could not serialize default config");

        let ron_config = ron::from_str::<'_, Config>(ron.unwrap().as_str());
        assert!(ron_config.is_ok(), "Could not deserialize default config");
    }

    #[test]
    fn the_default_file_loads_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.ron");
        write_to_path(&Config::default(), &path).unwrap();
        let config = load_from_path(&path).unwrap();
        assert_eq!(config.keybind.len(), Config::default().keybind.len());
        assert_eq!(config.tag_count, 9);
    }

    #[test]
    fn a_partial_ron_file_keeps_the_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.ron");
        fs::write(
            &path,
            r#"(
                modkey: "Mod4",
                border_width: 3,
                rules: [(app_id: "mpv", floating: true), (title: "", tags: 4, monitor: 1)],
                monitor_rules: [(name: "HDMI", layout: Monocle)],
            )"#,
        )
        .unwrap();
        let config = load_from_path(&path).unwrap();
        assert_eq!(config.modkey, "Mod4");
        assert_eq!(config.border_width, 3);
        assert!(config.focus_follows_mouse);
        assert_eq!(config.monitor_rules[0].name.as_deref(), Some("HDMI"));
        assert_eq!(config.monitor_rules[0].layout, Layout::Monocle);
        assert_eq!(config.monitor_rules[0].nmaster, 1);

        let rules = tessel_core::Config::rules(&config);
        assert_eq!(rules.len(), 2);
        assert!(rules[0].matches("mpv", "video.mkv"));
        assert!(!rules[0].matches("foot", "video.mkv"));
        assert!(rules[1].title.is_none(), "an empty pattern is a wildcard");
        assert_eq!(rules[1].monitor, Some(1));
    }

    #[test]
    fn toml_files_are_supported() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(
            &path,
            r#"
modkey = "Mod4"
layouts = ["Monocle", "Tile"]

[[keybind]]
command = "Zoom"
modifier = ["modkey"]
key = "Return"
"#,
        )
        .unwrap();
        let config = load_from_path(&path).unwrap();
        assert_eq!(tessel_core::Config::default_layout(&config), Layout::Monocle);
        let keybinds = tessel_core::Config::keybinds(&config);
        assert_eq!(keybinds.len(), 1);
        assert_eq!(keybinds[0].command, Command::Zoom);
        assert_eq!(
            keybinds[0].modmask,
            tessel_core::utils::modmask_lookup::ModMask::Super
        );
    }

    #[test]
    fn invalid_patterns_fail_to_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.ron");
        fs::write(&path, r#"(rules: [(app_id: "(unclosed")])"#).unwrap();
        assert!(load_from_path(&path).is_err());
    }

    #[test]
    fn invalid_bindings_are_skipped() {
        let config = Config {
            keybind: vec![
                Keybind {
                    command: crate::BaseCommand::Zoom,
                    value: String::new(),
                    modifier: Some("modkey".into()),
                    key: "NotAKey".to_owned(),
                },
                Keybind {
                    command: crate::BaseCommand::IncNMaster,
                    value: "1".to_owned(),
                    modifier: Some("modkey".into()),
                    key: "i".to_owned(),
                },
            ],
            ..Config::default()
        };
        let keybinds = tessel_core::Config::keybinds(&config);
        assert_eq!(keybinds.len(), 1);
        assert_eq!(keybinds[0].command, Command::IncNMaster(1));
    }
}
