//! Provider profile data model and on-disk store shape.

use serde::{Deserialize, Serialize};

/// Timeout applied to profiles saved without one (five minutes).
pub const DEFAULT_TIMEOUT_MS: u64 = 300_000;

/// One named API provider configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Profile {
    /// Display name.
    pub name: String,
    /// Unique short key used to select the profile.
    pub alias: String,
    pub base_url: String,
    pub api_key: String,
    /// Main model (`ANTHROPIC_MODEL`). Empty means no models are configured.
    pub model: String,
    /// `ANTHROPIC_SMALL_FAST_MODEL`.
    pub small_model: String,
    /// `ANTHROPIC_DEFAULT_SONNET_MODEL`.
    pub sonnet_model: String,
    /// `ANTHROPIC_DEFAULT_OPUS_MODEL`.
    pub opus_model: String,
    /// `ANTHROPIC_DEFAULT_HAIKU_MODEL`.
    pub haiku_model: String,
    /// API timeout in milliseconds; zero omits `API_TIMEOUT_MS`.
    /// Negative values from older stores load as zero.
    #[serde(deserialize_with = "timeout_from_signed")]
    pub timeout_ms: u64,
}

impl Profile {
    /// Fill empty model overrides from the main model and default the timeout.
    pub fn fill_defaults(&mut self) {
        if !self.model.is_empty() {
            for role in [
                &mut self.small_model,
                &mut self.sonnet_model,
                &mut self.opus_model,
                &mut self.haiku_model,
            ] {
                if role.is_empty() {
                    role.clone_from(&self.model);
                }
            }
        }
        if self.timeout_ms == 0 {
            self.timeout_ms = DEFAULT_TIMEOUT_MS;
        }
    }

    /// Model role overrides that differ from the main model, labelled for display.
    pub fn distinct_model_overrides(&self) -> Vec<(&'static str, &str)> {
        [
            ("small model", self.small_model.as_str()),
            ("sonnet model", self.sonnet_model.as_str()),
            ("opus model", self.opus_model.as_str()),
            ("haiku model", self.haiku_model.as_str()),
        ]
        .into_iter()
        .filter(|(_, value)| *value != self.model)
        .collect()
    }
}

/// Serialized form of `~/.config/ccs/config.json`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub(super) struct StoreFile {
    #[serde(default, deserialize_with = "null_as_default")]
    pub(super) current_provider: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub(super) providers: Vec<Profile>,
    /// Keys written by other builds (for example `language`), kept verbatim.
    #[serde(flatten)]
    pub(super) extra: serde_json::Map<String, serde_json::Value>,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: serde::Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn timeout_from_signed<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let raw = Option::<i64>::deserialize(deserializer)?.unwrap_or_default();
    Ok(u64::try_from(raw).unwrap_or(0))
}
