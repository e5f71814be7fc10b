//! Command orchestration for the ccs CLI.
//!
//! Commands compose the profile store and the settings document and return a
//! [`Report`] for `main` to print. Nothing here prompts or colors output.

use std::path::{Path, PathBuf};

use crate::cli::{Command, EditArgs};
use crate::error::{CcsError, SettingsError, StoreError};
use crate::paths::{default_settings_path, default_store_path};
use crate::profile::{Profile, ProfileStore};
use crate::settings::SettingsDocument;

mod view;

pub use view::mask_api_key;

/// Files a command operates on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Paths {
    pub store: PathBuf,
    pub settings: PathBuf,
}

impl Paths {
    /// Use explicit overrides, falling back to the platform defaults.
    pub fn resolve(store: Option<PathBuf>, settings: Option<PathBuf>) -> Result<Self, CcsError> {
        let store = match store {
            Some(path) => path,
            None => default_store_path().map_err(StoreError::Io)?,
        };
        let settings = match settings {
            Some(path) => path,
            None => default_settings_path().map_err(SettingsError::Io)?,
        };
        tracing::debug!(
            store = %store.display(),
            settings = %settings.display(),
            "resolved paths"
        );
        Ok(Self { store, settings })
    }
}

/// Output of one command: stdout lines plus non-fatal warnings.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Report {
    pub lines: Vec<String>,
    pub warnings: Vec<String>,
}

impl Report {
    fn line(&mut self, text: impl Into<String>) {
        self.lines.push(text.into());
    }
}

/// Execute one parsed command against `paths`.
pub fn run(command: Command, paths: &Paths) -> Result<Report, CcsError> {
    match command {
        Command::List => list(paths),
        Command::Add(args) => add(paths, args.into_profile()),
        Command::Edit(args) => edit(paths, args),
        Command::Use { alias } => use_profile(paths, &alias),
        Command::Remove { alias } => remove(paths, &alias),
        Command::Current => current(paths),
    }
}

fn list(paths: &Paths) -> Result<Report, CcsError> {
    let store = ProfileStore::load_from(&paths.store)?;
    let mut report = Report::default();
    if store.is_empty() {
        report.line(view::NO_PROFILES);
        return Ok(report);
    }
    report.line("Providers:");
    for profile in store.profiles() {
        report.line("");
        report
            .lines
            .extend(view::profile_summary(profile, store.is_current(&profile.alias)));
    }
    Ok(report)
}

fn add(paths: &Paths, profile: Profile) -> Result<Report, CcsError> {
    let mut store = ProfileStore::load_from(&paths.store)?;
    let label = view::profile_label(&profile);
    store.add_profile(profile)?;
    store.save()?;
    tracing::debug!(path = %store.path().display(), "saved profile store");

    let mut report = Report::default();
    report.line(format!("Added provider {label}."));
    Ok(report)
}

fn edit(paths: &Paths, args: EditArgs) -> Result<Report, CcsError> {
    let mut store = ProfileStore::load_from(&paths.store)?;
    let target = args.target.clone();
    let mut updated = store.get_profile(&target)?.clone();
    args.apply_to(&mut updated);
    let new_alias = updated.alias.clone();

    store.update_profile(&target, updated)?;
    store.save()?;

    let mut report = Report::default();
    let profile = store.get_profile(&new_alias)?;
    report.line(format!("Updated provider {}.", view::profile_label(profile)));

    if store.is_current(&new_alias) {
        match write_settings(&paths.settings, profile) {
            Ok(_) => report.line("Claude Code settings updated."),
            Err(err) => {
                tracing::warn!(error = %err, "provider saved but settings were not updated");
                report
                    .warnings
                    .push(format!("provider updated but Claude Code settings were not: {err}"));
            }
        }
    }
    Ok(report)
}

fn use_profile(paths: &Paths, alias: &str) -> Result<Report, CcsError> {
    let mut store = ProfileStore::load_from(&paths.store)?;
    if store.is_empty() {
        return Err(StoreError::NoProfilesConfigured.into());
    }
    let profile = store.get_profile(alias)?.clone();
    let backup = write_settings(&paths.settings, &profile)?;

    store.set_current_profile(alias)?;
    store.save()?;
    tracing::debug!(alias, "switched current provider");

    let mut report = Report::default();
    report.line(format!("Switched to {}.", view::profile_label(&profile)));
    if let Some(backup) = backup {
        report.line(format!("Previous settings saved to {}.", backup.display()));
    }
    Ok(report)
}

fn remove(paths: &Paths, alias: &str) -> Result<Report, CcsError> {
    let mut store = ProfileStore::load_from(&paths.store)?;
    let was_current = store.is_current(alias);
    let removed = store.remove_profile(alias)?;
    store.save()?;

    let mut report = Report::default();
    report.line(format!("Removed provider {}.", view::profile_label(&removed)));
    if was_current {
        report.line("No provider is active now; Claude Code settings were left as they are.");
    }
    Ok(report)
}

fn current(paths: &Paths) -> Result<Report, CcsError> {
    let store = ProfileStore::load_from(&paths.store)?;
    let mut report = Report::default();
    match store.current_profile() {
        Ok(profile) => report.lines.extend(view::profile_details(profile)),
        Err(StoreError::NoProfilesConfigured | StoreError::ProfileNotFound(_)) => {
            report.line("No current provider selected.");
        }
        Err(err) => return Err(err.into()),
    }

    let settings = SettingsDocument::load_from(&paths.settings)?;
    report.line("");
    report.line(format!("Claude Code settings ({}):", settings.path().display()));
    report
        .lines
        .extend(view::env_summary(&settings.current_env_summary()));
    Ok(report)
}

/// Clear and re-apply the managed env keys for `profile`.
fn write_settings(path: &Path, profile: &Profile) -> Result<Option<PathBuf>, SettingsError> {
    let mut settings = SettingsDocument::load_from(path)?;
    settings.clear_managed_keys();
    settings.apply_profile(profile);
    let backup = settings.save()?;
    tracing::debug!(path = %settings.path().display(), alias = %profile.alias, "wrote settings");
    Ok(backup)
}
