use super::Config;
use crate::BaseCommand;
use anyhow::{bail, ensure, Result};
use serde::{Deserialize, Serialize};
use tessel_core::config;
use tessel_core::utils::keysym_lookup::into_keysym;
use tessel_core::utils::modmask_lookup::{into_button, into_mod, ModMask};

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Keybind {
    pub command: BaseCommand,
    #[serde(default)]
    pub value: String,
    pub modifier: Option<Modifier>,
    pub key: String,
}

impl Keybind {
    /// # Errors
    ///
    /// Fails when the key, a modifier or the command value is invalid.
    pub fn try_convert_to_core_keybind(&self, config: &Config) -> Result<config::Keybind> {
        let Some(keysym) = into_keysym(&self.key) else {
            bail!("Key `{}` is not valid", self.key);
        };
        Ok(config::Keybind {
            modmask: resolve_modifier(self.modifier.as_ref(), config)?,
            keysym,
            command: self.command.into_command(&self.value, config)?,
        })
    }
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Mousebind {
    pub command: BaseCommand,
    #[serde(default)]
    pub value: String,
    pub modifier: Option<Modifier>,
    pub button: String,
}

impl Mousebind {
    /// # Errors
    ///
    /// Fails when the button, a modifier or the command value is invalid.
    pub fn try_convert_to_core_mousebind(&self, config: &Config) -> Result<config::Mousebind> {
        let Some(button) = into_button(&self.button) else {
            bail!("Button `{}` is not valid", self.button);
        };
        Ok(config::Mousebind {
            modmask: resolve_modifier(self.modifier.as_ref(), config)?,
            button,
            command: self.command.into_command(&self.value, config)?,
        })
    }
}

/// Combine the modifier names of a binding, with `modkey` standing for the configured mod key.
pub(crate) fn resolve_modifier(modifier: Option<&Modifier>, config: &Config) -> Result<ModMask> {
    let mut mask = ModMask::Zero;
    for name in modifier.into_iter().flatten() {
        let name = if name == "modkey" { config.modkey.as_str() } else { name.as_str() };
        if name == "None" {
            continue;
        }
        let m = into_mod(name);
        ensure!(m != ModMask::Zero, "Modifier `{name}` is not valid");
        mask |= m;
    }
    Ok(mask)
}

#[derive(Serialize, Deserialize, Debug, Clone, Hash, Eq, PartialEq)]
#[serde(untagged)]
pub enum Modifier {
    Single(String),
    List(Vec<String>),
}

impl Modifier {
    pub fn is_empty(&self) -> bool {
        match self {
            Modifier::Single(single) => single.is_empty(),
            Modifier::List(list) => list.is_empty(),
        }
    }

    pub fn sort_unstable(&mut self) {
        match self {
            Self::Single(_) => {}
            Self::List(modifiers) => modifiers.sort_unstable(),
        }
    }
}

impl<'a> IntoIterator for &'a Modifier {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        match self {
            Modifier::Single(m) => std::slice::from_ref(m).iter(),
            Modifier::List(ms) => ms.iter(),
        }
    }
}

impl std::convert::From<Vec<String>> for Modifier {
    fn from(l: Vec<String>) -> Self {
        Self::List(l)
    }
}

impl std::convert::From<&str> for Modifier {
    fn from(m: &str) -> Self {
        Self::Single(m.to_owned())
    }
}

impl std::fmt::Display for Modifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Single(modifier) => write!(f, "{modifier}"),
            Self::List(modifiers) => write!(f, "{}", modifiers.join("+")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tessel_core::Command;

    fn config_with_modkey(modkey: &str) -> Config {
        Config {
            modkey: modkey.to_owned(),
            ..Config::default()
        }
    }

    #[test]
    fn modkey_is_replaced_by_the_configured_key() {
        let config = config_with_modkey("Super");
        let modifier: Modifier = vec!["modkey".to_owned(), "Shift".to_owned()].into();
        assert_eq!(
            resolve_modifier(Some(&modifier), &config).ok(),
            Some(ModMask::Super | ModMask::Shift)
        );
        assert_eq!(resolve_modifier(None, &config).ok(), Some(ModMask::Zero));
        assert_eq!(
            resolve_modifier(Some(&"None".into()), &config).ok(),
            Some(ModMask::Zero)
        );
        assert!(resolve_modifier(Some(&"Hyper".into()), &config).is_err());
    }

    #[test]
    fn keybinds_convert_with_their_values() {
        let config = config_with_modkey("Alt");
        let keybind = Keybind {
            command: BaseCommand::View,
            value: "2".to_owned(),
            modifier: Some("modkey".into()),
            key: "2".to_owned(),
        };
        let core = keybind.try_convert_to_core_keybind(&config).unwrap();
        assert_eq!(core.modmask, ModMask::Alt);
        assert_eq!(core.keysym, u32::from('2'));
        assert_eq!(core.command, Command::View(0b10));

        let bad_key = Keybind {
            key: "NoSuchKey".to_owned(),
            ..keybind
        };
        assert!(bad_key.try_convert_to_core_keybind(&config).is_err());
    }

    #[test]
    fn mousebinds_need_a_known_button() {
        let config = config_with_modkey("Alt");
        let mut mousebind = Mousebind {
            command: BaseCommand::MoveMouse,
            value: String::new(),
            modifier: Some("modkey".into()),
            button: "Left".to_owned(),
        };
        let core = mousebind.try_convert_to_core_mousebind(&config).unwrap();
        assert_eq!(core.button, tessel_core::utils::modmask_lookup::Button::Button1);
        assert_eq!(core.command, Command::MoveMouse);

        mousebind.button = "Button9".to_owned();
        assert!(mousebind.try_convert_to_core_mousebind(&config).is_err());
    }

    #[test]
    fn modifiers_display_joined() {
        let modifier: Modifier = vec!["Alt".to_owned(), "Shift".to_owned()].into();
        assert_eq!(modifier.to_string(), "Alt+Shift");
        assert!(!modifier.is_empty());
        assert!(Modifier::Single(String::new()).is_empty());
    }
}
