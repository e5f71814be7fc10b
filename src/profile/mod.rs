//! Persistent collection of provider profiles plus the active alias.
//!
//! Every mutation works on the in-memory copy only; nothing reaches disk
//! until [`ProfileStore::save`] is called.

use std::path::{Path, PathBuf};

use crate::error::StoreError;
use crate::paths::default_store_path;

mod types;

pub use types::{Profile, DEFAULT_TIMEOUT_MS};
use types::StoreFile;

/// Profiles in insertion order and the alias currently written to settings.
#[derive(Debug, Clone)]
pub struct ProfileStore {
    path: PathBuf,
    file: StoreFile,
}

impl ProfileStore {
    /// Load the store from its default location.
    pub fn load() -> Result<Self, StoreError> {
        Self::load_from(default_store_path()?)
    }

    /// Load the store from `path`. A missing file yields an empty store.
    pub fn load_from(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        let file = match std::fs::read(&path) {
            Ok(bytes) => serde_json::from_slice(&bytes)
                .map_err(|source| StoreError::ConfigCorrupt {
                    path: path.clone(),
                    source,
                })?,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => StoreFile::default(),
            Err(err) => return Err(StoreError::Io(err)),
        };
        Ok(Self { path, file })
    }

    /// Write the store as indented JSON, creating the parent directory.
    pub fn save(&self) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let text = serde_json::to_string_pretty(&self.file)
            .map_err(|err| StoreError::Io(std::io::Error::other(err)))?;
        std::fs::write(&self.path, text)?;
        Ok(())
    }

    /// File this store loads from and saves to.
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn profiles(&self) -> &[Profile] {
        &self.file.providers
    }

    pub fn is_empty(&self) -> bool {
        self.file.providers.is_empty()
    }

    /// Alias marked active, if any. May name a profile that no longer exists.
    pub fn current_alias(&self) -> Option<&str> {
        Some(self.file.current_provider.as_str()).filter(|alias| !alias.is_empty())
    }

    pub fn is_current(&self, alias: &str) -> bool {
        self.current_alias() == Some(alias)
    }

    pub fn get_profile(&self, alias: &str) -> Result<&Profile, StoreError> {
        self.position(alias)
            .map(|idx| &self.file.providers[idx])
            .ok_or_else(|| StoreError::ProfileNotFound(alias.to_string()))
    }

    /// Resolve the active profile.
    pub fn current_profile(&self) -> Result<&Profile, StoreError> {
        let alias = self.current_alias().ok_or(StoreError::NoProfilesConfigured)?;
        self.get_profile(alias)
    }

    /// Append a new profile after applying defaults.
    pub fn add_profile(&mut self, mut profile: Profile) -> Result<(), StoreError> {
        if profile.alias.is_empty() {
            return Err(StoreError::InvalidAlias);
        }
        if self.position(&profile.alias).is_some() {
            return Err(StoreError::ProfileExists(profile.alias));
        }
        profile.fill_defaults();
        self.file.providers.push(profile);
        Ok(())
    }

    /// Replace the profile stored under `alias`, keeping its position.
    ///
    /// Renaming the current profile moves the current pointer with it.
    pub fn update_profile(&mut self, alias: &str, mut updated: Profile) -> Result<(), StoreError> {
        let idx = self
            .position(alias)
            .ok_or_else(|| StoreError::ProfileNotFound(alias.to_string()))?;
        if updated.alias.is_empty() {
            return Err(StoreError::InvalidAlias);
        }
        if updated.alias != alias {
            let collides = self
                .file
                .providers
                .iter()
                .enumerate()
                .any(|(other, p)| other != idx && p.alias == updated.alias);
            if collides {
                return Err(StoreError::ProfileExists(updated.alias));
            }
            if self.file.current_provider == alias {
                self.file.current_provider.clone_from(&updated.alias);
            }
        }
        updated.fill_defaults();
        self.file.providers[idx] = updated;
        Ok(())
    }

    /// Remove and return the profile under `alias`, clearing it as current.
    pub fn remove_profile(&mut self, alias: &str) -> Result<Profile, StoreError> {
        let idx = self
            .position(alias)
            .ok_or_else(|| StoreError::ProfileNotFound(alias.to_string()))?;
        let removed = self.file.providers.remove(idx);
        if self.file.current_provider == alias {
            self.file.current_provider.clear();
        }
        Ok(removed)
    }

    pub fn set_current_profile(&mut self, alias: &str) -> Result<(), StoreError> {
        self.get_profile(alias)?;
        self.file.current_provider = alias.to_string();
        Ok(())
    }

    fn position(&self, alias: &str) -> Option<usize> {
        self.file.providers.iter().position(|p| p.alias == alias)
    }
}
