//! Shared test fixtures for store, settings, and command test modules.

use serde_json::json;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

static TEST_DIR_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Temporary directory fixture with best-effort cleanup.
#[derive(Debug)]
pub struct TestTempDir {
    path: PathBuf,
}

impl TestTempDir {
    /// Create a unique temporary directory with a readable prefix.
    pub fn new(prefix: &str) -> Self {
        let suffix = TEST_DIR_COUNTER.fetch_add(1, Ordering::Relaxed);
        let millis = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_millis();
        let dir = std::env::temp_dir().join(format!(
            "ccs-{prefix}-{}-{millis}-{suffix}",
            std::process::id()
        ));
        fs::create_dir_all(&dir).expect("failed to create temporary fixture directory");
        Self { path: dir }
    }

    /// Root directory path for this fixture.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Build a child path under the fixture root.
    pub fn child(&self, relative: &str) -> PathBuf {
        self.path.join(relative)
    }

    /// Write UTF-8 text to a child path, creating parent directories as needed.
    pub fn write_text(&self, relative: &str, content: &str) -> PathBuf {
        let path = self.child(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("failed to create parent directories for fixture");
        }
        fs::write(&path, content).expect("failed to write fixture file");
        path
    }

    /// Read a child file back as JSON.
    pub fn read_json(&self, relative: &str) -> serde_json::Value {
        let text = fs::read_to_string(self.child(relative)).expect("failed to read fixture file");
        serde_json::from_str(&text).expect("fixture file is not valid JSON")
    }
}

impl Drop for TestTempDir {
    fn drop(&mut self) {
        let _ = fs::remove_dir_all(&self.path);
    }
}

/// Serialized store fixture with one profile per alias and `current` active.
pub fn store_json_fixture(aliases: &[&str], current: &str) -> String {
    let providers: Vec<_> = aliases
        .iter()
        .map(|alias| {
            json!({
                "name": format!("{alias} provider"),
                "alias": alias,
                "base_url": format!("https://{alias}.example.com"),
                "api_key": format!("sk-{alias}-0123456789"),
                "model": format!("{alias}-model"),
                "small_model": format!("{alias}-model"),
                "sonnet_model": format!("{alias}-model"),
                "opus_model": format!("{alias}-model"),
                "haiku_model": format!("{alias}-model"),
                "timeout_ms": 300000
            })
        })
        .collect();
    json!({ "current_provider": current, "providers": providers }).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn temp_dir_fixture_writes_and_resolves_paths() {
        let fixture = TestTempDir::new("fixture");
        let file = fixture.write_text("nested/file.txt", "hello");
        assert_eq!(fs::read_to_string(file).unwrap(), "hello");
        assert!(fixture.child("nested").starts_with(fixture.path()));
    }

    #[test]
    fn store_fixture_lists_every_alias() {
        let raw: serde_json::Value =
            serde_json::from_str(&store_json_fixture(&["a", "b"], "b")).unwrap();
        assert_eq!(raw["current_provider"], "b");
        assert_eq!(raw["providers"][1]["alias"], "b");
    }
}
