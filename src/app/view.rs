//! Plain-text rendering of profiles and settings summaries.

use std::collections::BTreeMap;

use crate::profile::Profile;
use crate::settings::keys;

pub(super) const NO_PROFILES: &str = "No providers configured. Run `ccs add` to create one.";
pub(super) const NO_PROVIDER_ENV: &str = "  No provider environment configured";

/// `Name (alias)` label used in confirmations.
pub(super) fn profile_label(profile: &Profile) -> String {
    format!("{} ({})", profile.name, profile.alias)
}

/// Compact block for `ccs list`.
pub(super) fn profile_summary(profile: &Profile, is_current: bool) -> Vec<String> {
    let header = if is_current {
        format!("* {} [current]", profile_label(profile))
    } else {
        format!("  {}", profile_label(profile))
    };
    let mut lines = vec![
        header,
        format!("    base url: {}", profile.base_url),
        format!("    model: {}", profile.model),
    ];
    for (label, value) in profile.distinct_model_overrides() {
        lines.push(format!("    {label}: {value}"));
    }
    lines
}

/// Full block for `ccs current`.
pub(super) fn profile_details(profile: &Profile) -> Vec<String> {
    let mut lines = vec![
        format!("Current provider: {}", profile_label(profile)),
        format!("  name: {}", profile.name),
        format!("  alias: {}", profile.alias),
        format!("  base url: {}", profile.base_url),
        format!("  api key: {}", mask_api_key(&profile.api_key)),
        format!("  model: {}", profile.model),
    ];
    for (label, value) in profile.distinct_model_overrides() {
        lines.push(format!("  {label}: {value}"));
    }
    lines.push(format!("  timeout ms: {}", profile.timeout_ms));
    lines
}

/// One line per managed env entry, in display order, with the token masked.
pub(super) fn env_summary(summary: &BTreeMap<&'static str, String>) -> Vec<String> {
    if summary.is_empty() {
        return vec![NO_PROVIDER_ENV.to_string()];
    }
    keys::VALUE_KEYS
        .into_iter()
        .filter_map(|key| {
            let value = summary.get(key)?;
            let shown = if key == keys::AUTH_TOKEN {
                mask_api_key(value)
            } else {
                value.clone()
            };
            Some(format!("  {key}: {shown}"))
        })
        .collect()
}

/// Keep the first and last four characters of keys longer than eight.
pub fn mask_api_key(key: &str) -> String {
    let chars: Vec<char> = key.chars().collect();
    if chars.len() <= 8 {
        return "*".repeat(chars.len());
    }
    let head: String = chars[..4].iter().collect();
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("{head}****{tail}")
}
