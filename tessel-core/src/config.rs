use crate::command::Command;
use crate::display_event::Keysym;
use crate::layouts::Layout;
use crate::models::{TagMask, DEFAULT_MFACT};
use crate::{Button, ModMask};
use regex::Regex;
use serde::{Deserialize, Serialize};

pub trait Config {
    /// Number of usable tags, at most [`crate::models::MAX_TAGS`].
    fn tag_count(&self) -> u32;

    /// Placement rules, applied in order to every newly mapped client.
    fn rules(&self) -> Vec<Rule>;

    fn monitor_rules(&self) -> Vec<MonitorRule>;

    /// Key bindings with the mod key already resolved.
    fn keybinds(&self) -> Vec<Keybind>;

    fn mousebinds(&self) -> Vec<Mousebind>;

    /// Layout used by outputs no monitor rule matches.
    fn default_layout(&self) -> Layout;

    fn border_width(&self) -> i32;

    /// Focus clients when the pointer enters them.
    fn focus_follows_mouse(&self) -> bool;

    /// Refuse to move focus away from a fullscreen client.
    fn lock_fullscreen(&self) -> bool;
}

/// Initial placement of clients. Every matching rule is applied, in order.
#[derive(Debug, Clone, Default)]
pub struct Rule {
    /// `None` matches any app id.
    pub app_id: Option<Regex>,
    /// `None` matches any title.
    pub title: Option<Regex>,
    pub tags: TagMask,
    pub floating: bool,
    /// Index into the monitor list.
    pub monitor: Option<usize>,
}

impl Rule {
    pub fn matches(&self, app_id: &str, title: &str) -> bool {
        self.app_id.as_ref().map_or(true, |r| r.is_match(app_id))
            && self.title.as_ref().map_or(true, |r| r.is_match(title))
    }
}

/// Settings for outputs whose name contains `name`. A rule without a name matches any output.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct MonitorRule {
    pub name: Option<String>,
    pub mfact: f32,
    pub nmaster: usize,
    pub scale: f32,
    pub layout: Layout,
}

impl Default for MonitorRule {
    fn default() -> Self {
        Self {
            name: None,
            mfact: DEFAULT_MFACT,
            nmaster: 1,
            scale: 1.0,
            layout: Layout::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Keybind {
    pub modmask: ModMask,
    pub keysym: Keysym,
    pub command: Command,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Mousebind {
    pub modmask: ModMask,
    pub button: Button,
    pub command: Command,
}

#[cfg(test)]
#[allow(clippy::module_name_repetitions)]
#[derive(Debug, Clone)]
pub struct TestConfig {
    pub tag_count: u32,
    pub rules: Vec<Rule>,
    pub monitor_rules: Vec<MonitorRule>,
    pub keybinds: Vec<Keybind>,
    pub mousebinds: Vec<Mousebind>,
    pub border_width: i32,
    pub focus_follows_mouse: bool,
    pub lock_fullscreen: bool,
}

#[cfg(test)]
impl Default for TestConfig {
    fn default() -> Self {
        Self {
            tag_count: 9,
            rules: vec![],
            monitor_rules: vec![MonitorRule::default()],
            keybinds: vec![],
            mousebinds: vec![],
            border_width: 1,
            focus_follows_mouse: true,
            lock_fullscreen: true,
        }
    }
}

#[cfg(test)]
impl Config for TestConfig {
    fn tag_count(&self) -> u32 {
        self.tag_count
    }
    fn rules(&self) -> Vec<Rule> {
        self.rules.clone()
    }
    fn monitor_rules(&self) -> Vec<MonitorRule> {
        self.monitor_rules.clone()
    }
    fn keybinds(&self) -> Vec<Keybind> {
        self.keybinds.clone()
    }
    fn mousebinds(&self) -> Vec<Mousebind> {
        self.mousebinds.clone()
    }
    fn default_layout(&self) -> Layout {
        Layout::Tile
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
