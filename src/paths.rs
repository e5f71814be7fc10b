//! Well-known file locations for the profile store and Claude Code settings.
//!
//! Each resolver has a `_with` variant taking an env lookup and a home
//! directory so tests never depend on the real user environment.

use std::io;
use std::path::PathBuf;

/// Directory name under the config root holding `config.json`.
pub const APP_DIR_NAME: &str = "ccs";
/// Store file name inside the app config directory.
pub const STORE_FILE_NAME: &str = "config.json";
/// Claude Code settings file name.
pub const SETTINGS_FILE_NAME: &str = "settings.json";

/// Return the default store path (`~/.config/ccs/config.json`).
pub fn default_store_path() -> io::Result<PathBuf> {
    store_path_with(|name| std::env::var(name).ok(), dirs::home_dir())
}

/// Return the default Claude Code settings path (`~/.claude/settings.json`).
pub fn default_settings_path() -> io::Result<PathBuf> {
    settings_path_with(|name| std::env::var(name).ok(), dirs::home_dir())
}

pub fn store_path_with<F>(env_lookup: F, home: Option<PathBuf>) -> io::Result<PathBuf>
where
    F: Fn(&str) -> Option<String>,
{
    config_root_dir_with(env_lookup, home)
        .map(|dir| dir.join(APP_DIR_NAME).join(STORE_FILE_NAME))
        .ok_or_else(|| unresolved("config directory"))
}

pub fn settings_path_with<F>(env_lookup: F, home: Option<PathBuf>) -> io::Result<PathBuf>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(dir) = non_empty_env(&env_lookup, "CLAUDE_CONFIG_DIR") {
        return Ok(PathBuf::from(dir).join(SETTINGS_FILE_NAME));
    }
    home.map(|home| home.join(".claude").join(SETTINGS_FILE_NAME))
        .ok_or_else(|| unresolved("home directory"))
}

/// Resolve the base config directory from env/home conventions.
fn config_root_dir_with<F>(env_lookup: F, home: Option<PathBuf>) -> Option<PathBuf>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(path) = non_empty_env(&env_lookup, "XDG_CONFIG_HOME") {
        return Some(PathBuf::from(path));
    }
    if cfg!(windows) {
        // %APPDATA%, falling back to the roaming dir under the profile.
        return non_empty_env(&env_lookup, "APPDATA")
            .map(PathBuf::from)
            .or_else(|| home.map(|home| home.join("AppData").join("Roaming")));
    }
    home.map(|home| home.join(".config")).or_else(dirs::config_dir)
}

fn non_empty_env<F>(env_lookup: &F, name: &str) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    env_lookup(name)
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

fn unresolved(what: &str) -> io::Error {
    io::Error::new(io::ErrorKind::NotFound, format!("unable to resolve {what}"))
}
