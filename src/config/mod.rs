//! Runtime configuration resolved once at startup.

use std::{
    env,
    io::{self, IsTerminal},
    path::PathBuf,
};

pub const DEFAULT_STORE_FILE: &str = "pb.yaml";

pub const STORE_FILE_VAR: &str = "PB_FILE";
pub const COLOR_VAR: &str = "PB_COLOR";
pub const NO_COLOR_VAR: &str = "NO_COLOR";
pub const SCRIPT_VAR: &str = "PB_CLI_SCRIPT";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliMode {
    Interactive,
    Script,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub store_path: PathBuf,
    pub color: bool,
    pub mode: CliMode,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            store_path: PathBuf::from(DEFAULT_STORE_FILE),
            color: false,
            mode: CliMode::Interactive,
        }
    }
}

impl Config {
    /// Reads the process environment and probes whether stdout is a terminal.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| env::var(name).ok(), io::stdout().is_terminal())
    }

    /// Builds the configuration from an arbitrary variable lookup.
    ///
    /// Color is on only for a terminal, and only while neither `PB_COLOR=0`
    /// nor a non-empty `NO_COLOR` is set.
    pub fn from_lookup<F>(lookup: F, stdout_is_tty: bool) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let store_path = lookup(STORE_FILE_VAR)
            .map(|raw| raw.trim().to_string())
            .filter(|raw| !raw.is_empty())
            .map(|raw| expand_home(&raw))
            .unwrap_or_else(|| PathBuf::from(DEFAULT_STORE_FILE));

        let color_disabled = lookup(COLOR_VAR).as_deref().map(str::trim) == Some("0");
        let no_color = lookup(NO_COLOR_VAR).is_some_and(|value| !value.is_empty());
        let color = stdout_is_tty && !color_disabled && !no_color;

        let mode = if lookup(SCRIPT_VAR).is_some() {
            CliMode::Script
        } else {
            CliMode::Interactive
        };

        Self {
            store_path,
            color,
            mode,
        }
    }
}

fn expand_home(raw: &str) -> PathBuf {
    match raw.strip_prefix("~/") {
        Some(rest) => dirs::home_dir()
            .map(|home| home.join(rest))
            .unwrap_or_else(|| PathBuf::from(raw)),
        None => PathBuf::from(raw),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_with(vars: &[(&str, &str)], tty: bool) -> Config {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|name| vars.get(name).cloned(), tty)
    }

    #[test]
    fn defaults_follow_terminal() {
        let config = config_with(&[], true);
        assert!(config.color);
        assert_eq!(config.store_path, PathBuf::from(DEFAULT_STORE_FILE));
        assert_eq!(config.mode, CliMode::Interactive);
        assert!(!config_with(&[], false).color);
    }

    #[test]
    fn both_toggles_disable_color() {
        assert!(!config_with(&[(COLOR_VAR, "0")], true).color);
        assert!(!config_with(&[(NO_COLOR_VAR, "1")], true).color);
        assert!(config_with(&[(NO_COLOR_VAR, "")], true).color);
        assert!(config_with(&[(COLOR_VAR, "1")], true).color);
    }

    #[test]
    fn store_path_and_script_mode_are_configurable() {
        let config = config_with(&[(STORE_FILE_VAR, "data/things.yaml"), (SCRIPT_VAR, "1")], false);
        assert_eq!(config.store_path, PathBuf::from("data/things.yaml"));
        assert_eq!(config.mode, CliMode::Script);
    }

    #[test]
    fn home_prefix_expands() {
        let config = config_with(&[(STORE_FILE_VAR, "~/pb.yaml")], false);
        if let Some(home) = dirs::home_dir() {
            assert_eq!(config.store_path, home.join("pb.yaml"));
        }
    }
}
