//! `env` keys owned by ccs inside Claude Code's settings file.

pub const BASE_URL: &str = "ANTHROPIC_BASE_URL";
pub const AUTH_TOKEN: &str = "ANTHROPIC_AUTH_TOKEN";
pub const API_TIMEOUT_MS: &str = "API_TIMEOUT_MS";
pub const MODEL: &str = "ANTHROPIC_MODEL";
pub const SMALL_FAST_MODEL: &str = "ANTHROPIC_SMALL_FAST_MODEL";
pub const DEFAULT_SONNET_MODEL: &str = "ANTHROPIC_DEFAULT_SONNET_MODEL";
pub const DEFAULT_OPUS_MODEL: &str = "ANTHROPIC_DEFAULT_OPUS_MODEL";
pub const DEFAULT_HAIKU_MODEL: &str = "ANTHROPIC_DEFAULT_HAIKU_MODEL";
pub const DISABLE_NONESSENTIAL_TRAFFIC: &str = "CLAUDE_CODE_DISABLE_NONESSENTIAL_TRAFFIC";

/// Keys carrying profile values, in display order.
pub const VALUE_KEYS: [&str; 8] = [
    BASE_URL,
    AUTH_TOKEN,
    API_TIMEOUT_MS,
    MODEL,
    SMALL_FAST_MODEL,
    DEFAULT_SONNET_MODEL,
    DEFAULT_OPUS_MODEL,
    DEFAULT_HAIKU_MODEL,
];

/// Every key removed before a profile is applied.
pub const MANAGED_KEYS: [&str; 9] = [
    BASE_URL,
    AUTH_TOKEN,
    API_TIMEOUT_MS,
    MODEL,
    SMALL_FAST_MODEL,
    DEFAULT_SONNET_MODEL,
    DEFAULT_OPUS_MODEL,
    DEFAULT_HAIKU_MODEL,
    DISABLE_NONESSENTIAL_TRAFFIC,
];
