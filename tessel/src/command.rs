use crate::Config;
use anyhow::{ensure, Context, Result};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tessel_core::layouts::Layout;
use tessel_core::models::{all_tags, tag_for_index, MAX_TAGS};
use tessel_core::Command;

/// Commands as they are written in the configuration file. The argument of a command lives in
/// the `value` field of its binding and is parsed by [`BaseCommand::into_command`].
#[allow(clippy::module_name_repetitions)]
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BaseCommand {
    Spawn,
    FocusStack,
    PushUp,
    PushDown,
    Zoom,
    MoveMouse,
    ResizeMouse,
    SetLayout,
    SetMFact,
    IncNMaster,
    SetColFact,
    PushLeft,
    IncNCols,
    View,
    ToggleView,
    Tag,
    ToggleTag,
    ToggleFloating,
    ToggleFullscreen,
    KillClient,
    FocusMon,
    TagMon,
    ChangeVt,
    Quit,
}

impl BaseCommand {
    /// Build the core command from the binding's `value`.
    ///
    /// # Errors
    ///
    /// Fails when a command that needs a value has none, or the value does not parse.
    pub fn into_command(self, value: &str, config: &Config) -> Result<Command> {
        let value = value.trim();
        let int = |name: &str| -> Result<i32> {
            i32::from_str(value).with_context(|| format!("invalid number `{value}` for {name}"))
        };
        let factor = |name: &str| -> Result<f32> {
            f32::from_str(value).with_context(|| format!("invalid factor `{value}` for {name}"))
        };
        let command = match self {
            Self::Spawn => {
                let line = if value.is_empty() { config.terminal.as_str() } else { value };
                let argv: Vec<String> = line.split_whitespace().map(ToOwned::to_owned).collect();
                ensure!(!argv.is_empty(), "Spawn needs a program to run");
                Command::Spawn(argv)
            }
            Self::FocusStack => Command::FocusStack(int("FocusStack")?),
            Self::PushUp => Command::PushUp,
            Self::PushDown => Command::PushDown,
            Self::Zoom => Command::Zoom,
            Self::MoveMouse => Command::MoveMouse,
            Self::ResizeMouse => Command::ResizeMouse,
            Self::SetLayout if value.is_empty() => Command::SetLayout(None),
            Self::SetLayout => Command::SetLayout(Some(
                Layout::from_str(value).context("could not parse layout for command SetLayout")?,
            )),
            Self::SetMFact => Command::SetMFact(factor("SetMFact")?),
            Self::IncNMaster => Command::IncNMaster(int("IncNMaster")?),
            Self::SetColFact => Command::SetColFact(factor("SetColFact")?),
            Self::PushLeft => Command::PushLeft,
            Self::IncNCols => Command::IncNCols(int("IncNCols")?),
            Self::View => Command::View(parse_tags(value)?),
            Self::ToggleView => Command::ToggleView(parse_tags(value)?),
            Self::Tag => Command::Tag(parse_tags(value)?),
            Self::ToggleTag => Command::ToggleTag(parse_tags(value)?),
            Self::ToggleFloating => Command::ToggleFloating,
            Self::ToggleFullscreen => Command::ToggleFullscreen,
            Self::KillClient => Command::KillClient,
            Self::FocusMon => Command::FocusMon(int("FocusMon")?),
            Self::TagMon => Command::TagMon(int("TagMon")?),
            Self::ChangeVt => Command::ChangeVt(
                u32::from_str(value).with_context(|| format!("invalid VT `{value}`"))?,
            ),
            Self::Quit => Command::Quit,
        };
        Ok(command)
    }
}

/// A one based tag number, or `all`.
fn parse_tags(value: &str) -> Result<u32> {
    if value == "all" {
        return Ok(all_tags(MAX_TAGS));
    }
    let index = usize::from_str(value).with_context(|| format!("invalid tag `{value}`"))?;
    ensure!(
        (1..=MAX_TAGS as usize).contains(&index),
        "tag {index} is out of range"
    );
    Ok(tag_for_index(index - 1))
}
