use super::keybind::resolve_modifier;
use super::Config;
use std::collections::HashMap;
use tracing_subscriber::EnvFilter;

impl Config {
    pub fn check_log_level(&self, verbose: bool) -> bool {
        if verbose {
            println!("Trying to parse log_level.");
        }
        match EnvFilter::builder().parse(&self.log_level) {
            Ok(_) => {
                if verbose {
                    println!("Log level is ok.");
                }
                true
            }
            Err(err) => {
                println!("Log level is invalid: {err}");
                false
            }
        }
    }

    /// Check all key and mouse bindings. A binding is valid when its key or button exists, its
    /// modifiers are known and its value parses for the command. Two bindings on the same
    /// combination are reported too.
    pub fn check_keybinds(&self, verbose: bool) -> bool {
        println!("\x1b[0;94m::\x1b[0m Checking keybinds . . .");
        let errors = self.binding_errors(verbose);
        if errors.is_empty() {
            println!("\x1b[0;92m    -> All keybinds OK\x1b[0m");
        }
        for error in &errors {
            println!("\x1b[1;91mERROR: {error}\x1b[0m");
        }
        errors.is_empty()
    }

    pub fn check_rules(&self, verbose: bool) -> bool {
        println!("\x1b[0;94m::\x1b[0m Checking rules . . .");
        let errors = self.rule_errors();
        if errors.is_empty() {
            println!("\x1b[0;92m    -> All rules OK\x1b[0m");
        } else if verbose {
            println!("{} of {} rules are invalid", errors.len(), self.rules.len());
        }
        for error in &errors {
            println!("\x1b[1;91mERROR: {error}\x1b[0m");
        }
        errors.is_empty()
    }

    fn binding_errors(&self, verbose: bool) -> Vec<String> {
        let mut errors = Vec::new();
        let mut bound = HashMap::new();
        for keybind in &self.keybind {
            if verbose {
                println!(
                    "Keybind: {:?} value field is empty: {}",
                    keybind,
                    keybind.value.is_empty()
                );
            }
            if let Err(err) = keybind.try_convert_to_core_keybind(self) {
                errors.push(format!("{err} for keybind {keybind:?}"));
                continue;
            }
            // Duplicates are compared on the resolved mask so `modkey` and its value collide.
            if let Ok(mask) = resolve_modifier(keybind.modifier.as_ref(), self) {
                if let Some(other) = bound.insert((mask, keybind.key.clone()), keybind.command) {
                    errors.push(format!(
                        "Multiple commands bound to key combination {} + {}: {other:?} and {:?}",
                        keybind.modifier.as_ref().map_or_else(String::new, ToString::to_string),
                        keybind.key,
                        keybind.command,
                    ));
                }
            }
        }
        for mousebind in &self.mousebind {
            if let Err(err) = mousebind.try_convert_to_core_mousebind(self) {
                errors.push(format!("{err} for mousebind {mousebind:?}"));
            }
        }
        errors
    }

    fn rule_errors(&self) -> Vec<String> {
        let tag_count = tessel_core::Config::tag_count(self);
        let mut errors = Vec::new();
        for (i, rule) in self.rules.iter().enumerate() {
            if rule.tags >> tag_count != 0 {
                errors.push(format!(
                    "rule {i} uses tags beyond the {tag_count} configured, they are ignored"
                ));
            }
        }
        errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Keybind, WindowRule};
    use crate::BaseCommand;

    #[test]
    fn the_default_config_passes_every_check() {
        let config = Config::default();
        assert!(config.binding_errors(false).is_empty());
        assert!(config.rule_errors().is_empty());
        assert!(config.check_log_level(false));
    }

    #[test]
    fn duplicate_combinations_are_reported() {
        let mut config = Config::default();
        config.keybind = vec![
            Keybind {
                command: BaseCommand::Zoom,
                value: String::new(),
                modifier: Some("modkey".into()),
                key: "z".to_owned(),
            },
            Keybind {
                command: BaseCommand::Quit,
                value: String::new(),
                modifier: Some("Alt".into()),
                key: "z".to_owned(),
            },
        ];
        let errors = config.binding_errors(false);
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("Multiple commands"));
    }

    #[test]
    fn rules_with_unused_tags_are_reported() {
        let mut config = Config::default();
        config.rules = vec![WindowRule {
            tags: 1 << 12,
            ..WindowRule::default()
        }];
        assert_eq!(config.rule_errors().len(), 1);
    }

    #[test]
    fn bad_log_levels_are_reported() {
        let mut config = Config::default();
        config.log_level = "tessel=loud".to_owned();
        assert!(!config.check_log_level(false));
    }
}
