//! Error types for the profile store, the settings document, and the CLI.

use std::fmt;
use std::path::PathBuf;

// ---------------------------------------------------------------------------
// StoreError
// ---------------------------------------------------------------------------

/// Errors from the profile store and its backing file.
#[derive(Debug)]
pub enum StoreError {
    /// Filesystem failure, including an unresolvable config directory.
    Io(std::io::Error),
    /// The store file exists but is not the expected JSON shape.
    ConfigCorrupt {
        path: PathBuf,
        source: serde_json::Error,
    },
    ProfileNotFound(String),
    ProfileExists(String),
    /// No profile is marked as current.
    NoProfilesConfigured,
    /// A profile alias was empty.
    InvalidAlias,
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "io: {e}"),
            Self::ConfigCorrupt { path, source } => {
                write!(f, "config file `{}` is corrupt: {source}", path.display())
            }
            Self::ProfileNotFound(alias) => write!(f, "profile `{alias}` not found"),
            Self::ProfileExists(alias) => {
                write!(f, "a profile with alias `{alias}` already exists")
            }
            Self::NoProfilesConfigured => write!(f, "no current profile configured"),
            Self::InvalidAlias => write!(f, "profile alias must not be empty"),
        }
    }
}

impl std::error::Error for StoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::ConfigCorrupt { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<std::io::Error> for StoreError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

// ---------------------------------------------------------------------------
// SettingsError
// ---------------------------------------------------------------------------

/// Errors from loading or saving the Claude Code settings document.
#[derive(Debug)]
pub enum SettingsError {
    /// Filesystem failure, including a failed backup copy.
    Io(std::io::Error),
    /// The file is not valid JSON even after comment and trailing-comma cleanup.
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

impl fmt::Display for SettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "io: {e}"),
            Self::Parse { path, source } => {
                write!(f, "failed to parse settings `{}`: {source}", path.display())
            }
        }
    }
}

impl std::error::Error for SettingsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Parse { source, .. } => Some(source),
        }
    }
}

impl From<std::io::Error> for SettingsError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

// ---------------------------------------------------------------------------
// CcsError
// ---------------------------------------------------------------------------

/// Top-level error surfaced by CLI commands.
#[derive(Debug)]
pub enum CcsError {
    Store(StoreError),
    Settings(SettingsError),
}

impl fmt::Display for CcsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Store(e) => write!(f, "config: {e}"),
            Self::Settings(e) => write!(f, "settings: {e}"),
        }
    }
}

impl std::error::Error for CcsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Store(e) => Some(e),
            Self::Settings(e) => Some(e),
        }
    }
}

impl From<StoreError> for CcsError {
    fn from(e: StoreError) -> Self {
        Self::Store(e)
    }
}

impl From<SettingsError> for CcsError {
    fn from(e: SettingsError) -> Self {
        Self::Settings(e)
    }
}
