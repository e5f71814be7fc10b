//! CLI argument parsing via clap.

use clap::{Args as ClapArgs, Parser, Subcommand};
use std::path::PathBuf;

use crate::build_info;
use crate::profile::Profile;

/// Switch Claude Code between API provider profiles.
#[derive(Debug, Parser)]
#[command(name = "ccs", version, long_version = build_info::LONG_VERSION)]
pub struct Args {
    /// Path to the profile store (default: ~/.config/ccs/config.json).
    #[arg(short = 'c', long = "config", global = true)]
    pub config: Option<PathBuf>,

    /// Path to Claude Code settings (default: ~/.claude/settings.json).
    #[arg(long = "settings", global = true)]
    pub settings: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List all providers.
    #[command(visible_alias = "ls")]
    List,
    /// Add a new provider.
    #[command(visible_alias = "a")]
    Add(AddArgs),
    /// Edit an existing provider; re-applies settings when it is current.
    #[command(visible_alias = "e")]
    Edit(EditArgs),
    /// Switch to a provider and update Claude Code settings.
    #[command(visible_alias = "u")]
    Use {
        /// Alias of the provider to activate.
        alias: String,
    },
    /// Remove a provider.
    #[command(visible_alias = "rm")]
    Remove {
        /// Alias of the provider to remove.
        alias: String,
    },
    /// Show the current provider and the env written to Claude Code settings.
    #[command(visible_alias = "c")]
    Current,
}

#[derive(Debug, ClapArgs)]
pub struct AddArgs {
    /// Display name.
    #[arg(long)]
    pub name: String,
    /// Unique short alias.
    #[arg(long)]
    pub alias: String,
    /// API base URL (`ANTHROPIC_BASE_URL`).
    #[arg(long = "base-url")]
    pub base_url: String,
    /// API key (`ANTHROPIC_AUTH_TOKEN`).
    #[arg(long = "api-key")]
    pub api_key: String,
    #[command(flatten)]
    pub models: ModelArgs,
}

#[derive(Debug, ClapArgs)]
pub struct EditArgs {
    /// Alias of the provider to edit.
    #[arg(value_name = "ALIAS")]
    pub target: String,
    #[arg(long)]
    pub name: Option<String>,
    /// Rename the alias.
    #[arg(long)]
    pub alias: Option<String>,
    #[arg(long = "base-url")]
    pub base_url: Option<String>,
    #[arg(long = "api-key")]
    pub api_key: Option<String>,
    #[command(flatten)]
    pub models: ModelArgs,
}

/// Model and timeout flags shared by `add` and `edit`. An empty value clears
/// the field on edit.
#[derive(Debug, Default, ClapArgs)]
pub struct ModelArgs {
    /// Main model (`ANTHROPIC_MODEL`); empty role models default to it.
    #[arg(long)]
    pub model: Option<String>,
    #[arg(long = "small-model")]
    pub small_model: Option<String>,
    #[arg(long = "sonnet-model")]
    pub sonnet_model: Option<String>,
    #[arg(long = "opus-model")]
    pub opus_model: Option<String>,
    #[arg(long = "haiku-model")]
    pub haiku_model: Option<String>,
    /// API timeout in milliseconds (default 300000).
    #[arg(long = "timeout-ms")]
    pub timeout_ms: Option<u64>,
}

impl AddArgs {
    pub fn into_profile(self) -> Profile {
        let mut profile = Profile {
            name: self.name,
            alias: self.alias,
            base_url: self.base_url,
            api_key: self.api_key,
            ..Profile::default()
        };
        self.models.apply_to(&mut profile);
        profile
    }
}

impl EditArgs {
    /// Overlay the supplied flags onto `profile`. An empty `--api-key`
    /// keeps the stored key.
    pub fn apply_to(self, profile: &mut Profile) {
        let fields = [
            (self.name, &mut profile.name),
            (self.alias, &mut profile.alias),
            (self.base_url, &mut profile.base_url),
            (self.api_key.filter(|key| !key.is_empty()), &mut profile.api_key),
        ];
        for (value, field) in fields {
            if let Some(value) = value {
                *field = value;
            }
        }
        self.models.apply_to(profile);
    }
}

impl ModelArgs {
    fn apply_to(self, profile: &mut Profile) {
        let fields = [
            (self.model, &mut profile.model),
            (self.small_model, &mut profile.small_model),
            (self.sonnet_model, &mut profile.sonnet_model),
            (self.opus_model, &mut profile.opus_model),
            (self.haiku_model, &mut profile.haiku_model),
        ];
        for (value, field) in fields {
            if let Some(value) = value {
                *field = value;
            }
        }
        if let Some(timeout_ms) = self.timeout_ms {
            profile.timeout_ms = timeout_ms;
        }
    }
}
