use super::{default_terminal, Config, Keybind, Mousebind};
use crate::BaseCommand;
use tessel_core::config::MonitorRule;
use tessel_core::layouts::Layout;

// Keysyms produced by shift + 1..9 on a US layout.
const SHIFTED_DIGITS: [&str; 9] = [
    "exclam",
    "at",
    "numbersign",
    "dollar",
    "percent",
    "asciicircum",
    "ampersand",
    "asterisk",
    "parenleft",
];

fn bind(modifier: &[&str], key: &str, command: BaseCommand, value: &str) -> Keybind {
    Keybind {
        command,
        value: value.to_owned(),
        modifier: Some(
            modifier
                .iter()
                .map(|m| (*m).to_owned())
                .collect::<Vec<String>>()
                .into(),
        ),
        key: key.to_owned(),
    }
}

impl Default for Config {
    // We allow this because this function would be difficult to reduce. The bindings read best
    // as one flat table.
    #[allow(clippy::too_many_lines)]
    fn default() -> Self {
        const M: &[&str] = &["modkey"];
        const MS: &[&str] = &["modkey", "Shift"];
        const MC: &[&str] = &["modkey", "Control"];
        const MCS: &[&str] = &["modkey", "Control", "Shift"];

        let mut keybind = vec![
            bind(MS, "Return", BaseCommand::Spawn, ""),
            bind(M, "j", BaseCommand::FocusStack, "1"),
            bind(M, "k", BaseCommand::FocusStack, "-1"),
            bind(MS, "J", BaseCommand::PushDown, ""),
            bind(MS, "K", BaseCommand::PushUp, ""),
            bind(M, "i", BaseCommand::IncNMaster, "1"),
            bind(M, "d", BaseCommand::IncNMaster, "-1"),
            bind(M, "h", BaseCommand::SetMFact, "-0.05"),
            bind(M, "l", BaseCommand::SetMFact, "0.05"),
            bind(M, "Return", BaseCommand::Zoom, ""),
            bind(MS, "C", BaseCommand::KillClient, ""),
            bind(M, "t", BaseCommand::SetLayout, "Tile"),
            bind(M, "f", BaseCommand::SetLayout, "Floating"),
            bind(M, "m", BaseCommand::SetLayout, "Monocle"),
            bind(M, "v", BaseCommand::SetLayout, "VarCol"),
            bind(M, "space", BaseCommand::SetLayout, ""),
            bind(MS, "space", BaseCommand::ToggleFloating, ""),
            bind(M, "e", BaseCommand::ToggleFullscreen, ""),
            bind(M, "a", BaseCommand::PushLeft, ""),
            bind(M, "bracketleft", BaseCommand::IncNCols, "-1"),
            bind(M, "bracketright", BaseCommand::IncNCols, "1"),
            bind(M, "0", BaseCommand::View, "all"),
            bind(MS, "parenright", BaseCommand::Tag, "all"),
            bind(M, "comma", BaseCommand::FocusMon, "-1"),
            bind(M, "period", BaseCommand::FocusMon, "1"),
            bind(MS, "less", BaseCommand::TagMon, "-1"),
            bind(MS, "greater", BaseCommand::TagMon, "1"),
            bind(MS, "Q", BaseCommand::Quit, ""),
        ];

        for (i, shifted) in SHIFTED_DIGITS.iter().enumerate() {
            let digit = (i + 1).to_string();
            keybind.push(bind(M, &digit, BaseCommand::View, &digit));
            keybind.push(bind(MC, &digit, BaseCommand::ToggleView, &digit));
            keybind.push(bind(MS, shifted, BaseCommand::Tag, &digit));
            keybind.push(bind(MCS, shifted, BaseCommand::ToggleTag, &digit));
        }

        for vt in 1..=12 {
            let key = format!("F{vt}");
            keybind.push(bind(
                &["Control", "Alt"],
                &key,
                BaseCommand::ChangeVt,
                &vt.to_string(),
            ));
        }

        let mousebind = [
            ("Left", BaseCommand::MoveMouse),
            ("Middle", BaseCommand::ToggleFloating),
            ("Right", BaseCommand::ResizeMouse),
        ]
        .into_iter()
        .map(|(button, command)| Mousebind {
            command,
            value: String::new(),
            modifier: Some("modkey".into()),
            button: button.to_owned(),
        })
        .collect();

        Self {
            modkey: "Alt".to_owned(),
            terminal: default_terminal(),
            tag_count: 9,
            layouts: vec![Layout::Tile, Layout::Floating, Layout::Monocle, Layout::VarCol],
            rules: vec![],
            monitor_rules: vec![MonitorRule::default()],
            focus_follows_mouse: true,
            lock_fullscreen: true,
            border_width: 1,
            log_level: "info".to_owned(),
            status_output: None,
            keybind,
            mousebind,
        }
    }
}
