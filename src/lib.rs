//! ccs: switch Claude Code between API provider profiles.
//!
//! Profiles live in a small JSON store (`~/.config/ccs/config.json`).
//! Switching rewrites the provider keys under `env` in Claude Code's
//! `~/.claude/settings.json`, leaving everything else in that file intact.
//!
//! # Quick start
//!
//! ```no_run
//! use ccs::profile::ProfileStore;
//! use ccs::settings::SettingsDocument;
//!
//! # fn example() -> Result<(), ccs::error::CcsError> {
//! let mut store = ProfileStore::load()?;
//! let profile = store.get_profile("kimi")?.clone();
//!
//! let mut settings = SettingsDocument::load()?;
//! settings.clear_managed_keys();
//! settings.apply_profile(&profile);
//! settings.save()?;
//!
//! store.set_current_profile("kimi")?;
//! store.save()?;
//! # Ok(())
//! # }
//! ```

pub mod app;
pub mod build_info;
pub mod cli;
pub mod error;
pub mod paths;
pub mod profile;
pub mod settings;
#[cfg(test)]
pub mod testsupport;
