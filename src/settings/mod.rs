//! Claude Code `settings.json` as a schema-free JSON document.
//!
//! Only the managed keys inside `env` are interpreted. Every other key, at
//! any depth, passes through a load/save cycle unchanged.

use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::error::SettingsError;
use crate::paths::default_settings_path;
use crate::profile::Profile;

pub mod jsonc;
pub mod keys;

const ENV_KEY: &str = "env";

/// Parsed settings file bound to the path it is saved back to.
#[derive(Debug, Clone)]
pub struct SettingsDocument {
    path: PathBuf,
    root: Map<String, Value>,
}

impl SettingsDocument {
    /// Load from the default location (`~/.claude/settings.json`).
    pub fn load() -> Result<Self, SettingsError> {
        Self::load_from(default_settings_path()?)
    }

    /// Load from `path`. A missing file yields an empty document.
    pub fn load_from(path: impl Into<PathBuf>) -> Result<Self, SettingsError> {
        let path = path.into();
        let root = match std::fs::read(&path) {
            Ok(bytes) => parse_root(&bytes).map_err(|source| SettingsError::Parse {
                path: path.clone(),
                source,
            })?,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Map::new(),
            Err(err) => return Err(SettingsError::Io(err)),
        };
        Ok(Self { path, root })
    }

    /// Write the document back as indented JSON.
    ///
    /// An existing file is first copied to `<name>.bak`; if that copy fails
    /// nothing is written. Returns the backup path when one was made.
    pub fn save(&self) -> Result<Option<PathBuf>, SettingsError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let backup = if self.path.exists() {
            let backup = backup_path(&self.path);
            std::fs::copy(&self.path, &backup)?;
            Some(backup)
        } else {
            None
        };
        let mut text = serde_json::to_string_pretty(&self.root)
            .map_err(|err| SettingsError::Io(std::io::Error::other(err)))?;
        text.push('\n');
        std::fs::write(&self.path, text)?;
        Ok(backup)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whole document tree.
    pub fn root(&self) -> &Map<String, Value> {
        &self.root
    }

    /// The `env` object, when present and an object.
    pub fn env(&self) -> Option<&Map<String, Value>> {
        self.root.get(ENV_KEY).and_then(Value::as_object)
    }

    /// Write `profile` into `env`, removing role keys the profile leaves empty.
    pub fn apply_profile(&mut self, profile: &Profile) {
        let mut env = match self.root.remove(ENV_KEY) {
            Some(Value::Object(env)) => env,
            _ => Map::new(),
        };
        env.insert(keys::BASE_URL.into(), Value::from(profile.base_url.as_str()));
        env.insert(keys::AUTH_TOKEN.into(), Value::from(profile.api_key.as_str()));

        env.remove(keys::API_TIMEOUT_MS);
        if profile.timeout_ms > 0 {
            env.insert(
                keys::API_TIMEOUT_MS.into(),
                Value::from(profile.timeout_ms.to_string()),
            );
        }

        for (key, value) in [
            (keys::MODEL, &profile.model),
            (keys::SMALL_FAST_MODEL, &profile.small_model),
            (keys::DEFAULT_SONNET_MODEL, &profile.sonnet_model),
            (keys::DEFAULT_OPUS_MODEL, &profile.opus_model),
            (keys::DEFAULT_HAIKU_MODEL, &profile.haiku_model),
        ] {
            env.remove(key);
            if !value.is_empty() {
                env.insert(key.into(), Value::from(value.as_str()));
            }
        }

        env.insert(keys::DISABLE_NONESSENTIAL_TRAFFIC.into(), Value::from(1));
        self.root.insert(ENV_KEY.into(), Value::Object(env));
    }

    /// Remove every managed key from `env`, leaving other entries alone.
    pub fn clear_managed_keys(&mut self) {
        if let Some(env) = self.root.get_mut(ENV_KEY).and_then(Value::as_object_mut) {
            for key in keys::MANAGED_KEYS {
                env.remove(key);
            }
        }
    }

    /// Display strings for the managed value keys present in `env`.
    ///
    /// Values that are neither strings nor numbers are omitted.
    pub fn current_env_summary(&self) -> BTreeMap<&'static str, String> {
        let Some(env) = self.env() else {
            return BTreeMap::new();
        };
        keys::VALUE_KEYS
            .into_iter()
            .filter_map(|key| env.get(key).and_then(display_value).map(|text| (key, text)))
            .collect()
    }
}

/// Parse cleaned settings text; a bare `null` counts as an empty document.
fn parse_root(bytes: &[u8]) -> Result<Map<String, Value>, serde_json::Error> {
    let text = std::str::from_utf8(bytes)
        .map_err(<serde_json::Error as serde::de::Error>::custom)?;
    let cleaned = jsonc::clean(text);
    Ok(serde_json::from_str::<Option<Map<String, Value>>>(&cleaned)?.unwrap_or_default())
}

fn backup_path(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|value| value.to_os_string())
        .unwrap_or_else(|| "settings.json".into());
    name.push(".bak");
    path.with_file_name(name)
}

fn display_value(value: &Value) -> Option<String> {
    match value {
        Value::String(text) => Some(text.clone()),
        Value::Number(number) => Some(format_number(number)),
        _ => None,
    }
}

fn format_number(number: &serde_json::Number) -> String {
    if let Some(n) = number.as_u64() {
        return n.to_string();
    }
    if let Some(n) = number.as_i64() {
        return n.to_string();
    }
    // f64 Display is the shortest round-trip form without a trailing `.0`.
    number
        .as_f64()
        .map(|n| n.to_string())
        .unwrap_or_else(|| number.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testsupport::TestTempDir;
    use serde_json::json;

    fn profile() -> Profile {
        Profile {
            name: "X".into(),
            alias: "x".into(),
            base_url: "https://api.x".into(),
            api_key: "k".into(),
            ..Profile::default()
        }
    }

    fn doc(value: Value) -> SettingsDocument {
        let Value::Object(root) = value else {
            panic!("fixture must be an object");
        };
        SettingsDocument {
            path: PathBuf::from("settings.json"),
            root,
        }
    }

    fn env_keys(doc: &SettingsDocument) -> Vec<&str> {
        doc.env()
            .expect("env")
            .keys()
            .map(String::as_str)
            .collect()
    }

    #[test]
    fn missing_file_loads_empty_document() {
        let tmp = TestTempDir::new("settings-missing");
        let doc = SettingsDocument::load_from(tmp.child(".claude/settings.json")).expect("load");
        assert!(doc.root().is_empty());
        assert!(doc.env().is_none());
    }

    #[test]
    fn jsonc_file_loads() {
        let tmp = TestTempDir::new("settings-jsonc");
        let path = tmp.write_text(
            "settings.json",
            "{\n  # provider\n  \"env\": {\n    \"A\": \"x\", // note\n  },\n  \"model\": \"opus\",\n}\n",
        );
        let doc = SettingsDocument::load_from(&path).expect("load");
        assert_eq!(
            Value::Object(doc.root().clone()),
            json!({"env": {"A": "x"}, "model": "opus"})
        );
    }

    #[test]
    fn null_document_is_treated_as_empty() {
        let tmp = TestTempDir::new("settings-null");
        let path = tmp.write_text("settings.json", "null");
        let doc = SettingsDocument::load_from(&path).expect("load");
        assert!(doc.root().is_empty());
    }

    #[test]
    fn unparseable_file_is_reported() {
        let tmp = TestTempDir::new("settings-bad");
        for (name, text) in [("a.json", "{\"env\": "), ("b.json", "[1, 2]"), ("c.json", "")] {
            let path = tmp.write_text(name, text);
            let err = SettingsDocument::load_from(&path).unwrap_err();
            assert!(matches!(err, SettingsError::Parse { .. }), "{name}: {err}");
        }
    }

    #[test]
    fn non_utf8_file_is_a_parse_error() {
        let tmp = TestTempDir::new("settings-utf8");
        let path = tmp.child("settings.json");
        std::fs::write(&path, b"{\"env\": {\"A\": \"\xff\xfe\"}}").expect("write");
        let err = SettingsDocument::load_from(&path).unwrap_err();
        assert!(matches!(err, SettingsError::Parse { .. }), "got: {err}");
    }

    #[test]
    fn apply_without_timeout_or_models_writes_minimal_env() {
        let mut doc = doc(json!({"env": {"OTHER_TOOL_VAR": "keep"}}));
        doc.clear_managed_keys();
        doc.apply_profile(&profile());

        assert_eq!(
            Value::Object(doc.env().expect("env").clone()),
            json!({
                "OTHER_TOOL_VAR": "keep",
                "ANTHROPIC_BASE_URL": "https://api.x",
                "ANTHROPIC_AUTH_TOKEN": "k",
                "CLAUDE_CODE_DISABLE_NONESSENTIAL_TRAFFIC": 1
            })
        );
    }

    #[test]
    fn positive_timeout_is_written_as_string() {
        let mut doc = doc(json!({}));
        let mut p = profile();
        p.timeout_ms = 5000;
        doc.apply_profile(&p);
        assert_eq!(doc.env().expect("env")["API_TIMEOUT_MS"], json!("5000"));
    }

    #[test]
    fn switching_to_profile_without_models_drops_stale_model_keys() {
        let mut doc = doc(json!({}));
        let mut with_models = profile();
        with_models.model = "m".into();
        with_models.fill_defaults();
        doc.apply_profile(&with_models);
        assert_eq!(doc.env().expect("env")["ANTHROPIC_DEFAULT_HAIKU_MODEL"], "m");

        doc.apply_profile(&profile());
        let env = env_keys(&doc);
        assert!(!env.contains(&"ANTHROPIC_MODEL"));
        assert!(!env.contains(&"ANTHROPIC_DEFAULT_HAIKU_MODEL"));
        assert!(!env.contains(&"API_TIMEOUT_MS"));
    }

    #[test]
    fn non_object_env_is_replaced() {
        let mut doc = doc(json!({"env": "oops"}));
        doc.apply_profile(&profile());
        assert_eq!(doc.env().expect("env")["ANTHROPIC_AUTH_TOKEN"], "k");
    }

    #[test]
    fn apply_creates_env_and_keeps_sibling_keys() {
        let mut doc = doc(json!({"model": "opus"}));
        doc.apply_profile(&profile());
        assert_eq!(doc.root()["model"], "opus");
        assert_eq!(doc.env().expect("env")["ANTHROPIC_BASE_URL"], "https://api.x");
    }

    #[test]
    fn clear_removes_only_managed_keys() {
        let mut doc = doc(json!({
            "env": {
                "ANTHROPIC_BASE_URL": "u",
                "ANTHROPIC_AUTH_TOKEN": "t",
                "API_TIMEOUT_MS": "1",
                "ANTHROPIC_MODEL": "m",
                "ANTHROPIC_SMALL_FAST_MODEL": "m",
                "ANTHROPIC_DEFAULT_SONNET_MODEL": "m",
                "ANTHROPIC_DEFAULT_OPUS_MODEL": "m",
                "ANTHROPIC_DEFAULT_HAIKU_MODEL": "m",
                "CLAUDE_CODE_DISABLE_NONESSENTIAL_TRAFFIC": 1,
                "MY_VAR": "x"
            },
            "permissions": {"allow": ["Bash"]}
        }));
        doc.clear_managed_keys();
        assert_eq!(
            Value::Object(doc.root().clone()),
            json!({"env": {"MY_VAR": "x"}, "permissions": {"allow": ["Bash"]}})
        );
    }

    #[test]
    fn clear_without_env_is_a_no_op() {
        let mut doc = doc(json!({"model": "opus"}));
        doc.clear_managed_keys();
        assert_eq!(Value::Object(doc.root().clone()), json!({"model": "opus"}));
    }

    #[test]
    fn summary_formats_strings_and_numbers_and_skips_others() {
        let doc = doc(json!({
            "env": {
                "ANTHROPIC_BASE_URL": "https://api.x",
                "API_TIMEOUT_MS": 5000,
                "ANTHROPIC_MODEL": 1.5,
                "ANTHROPIC_SMALL_FAST_MODEL": 3000.0,
                "ANTHROPIC_DEFAULT_OPUS_MODEL": true,
                "ANTHROPIC_DEFAULT_HAIKU_MODEL": null,
                "CLAUDE_CODE_DISABLE_NONESSENTIAL_TRAFFIC": 1,
                "MY_VAR": "x"
            }
        }));
        let summary = doc.current_env_summary();
        assert_eq!(summary.len(), 4);
        assert_eq!(summary["ANTHROPIC_BASE_URL"], "https://api.x");
        assert_eq!(summary["API_TIMEOUT_MS"], "5000");
        assert_eq!(summary["ANTHROPIC_MODEL"], "1.5");
        assert_eq!(summary["ANTHROPIC_SMALL_FAST_MODEL"], "3000");
    }

    #[test]
    fn save_round_trips_unknown_keys_and_writes_backup() {
        let tmp = TestTempDir::new("settings-save");
        let original = "{\n  \"foo\": {\"bar\": 1},\n  \"env\": {\"MY_VAR\": \"x\",},\n}\n";
        let path = tmp.write_text(".claude/settings.json", original);

        let mut doc = SettingsDocument::load_from(&path).expect("load");
        doc.clear_managed_keys();
        doc.apply_profile(&profile());
        let backup = doc.save().expect("save").expect("backup written");

        assert_eq!(backup, tmp.child(".claude/settings.json.bak"));
        assert_eq!(std::fs::read_to_string(&backup).expect("backup"), original);

        let saved: Value =
            serde_json::from_str(&std::fs::read_to_string(&path).expect("read")).expect("json");
        assert_eq!(saved["foo"], json!({"bar": 1}));
        assert_eq!(saved["env"]["MY_VAR"], "x");
        assert_eq!(saved["env"]["ANTHROPIC_BASE_URL"], "https://api.x");
    }

    #[test]
    fn save_keeps_exact_digits_of_unmanaged_numbers() {
        let tmp = TestTempDir::new("settings-numbers");
        let path = tmp.write_text(
            "settings.json",
            r#"{"foo":{"big":12345678901234567890123,"id":18446744073709551616,"precise":0.1000000000000000000001}}"#,
        );
        let mut doc = SettingsDocument::load_from(&path).expect("load");
        doc.clear_managed_keys();
        doc.apply_profile(&profile());
        doc.save().expect("save");

        let saved = std::fs::read_to_string(&path).expect("read");
        assert!(saved.contains("12345678901234567890123"), "got: {saved}");
        assert!(saved.contains("18446744073709551616"), "got: {saved}");
        assert!(saved.contains("0.1000000000000000000001"), "got: {saved}");
    }

    #[test]
    fn first_save_creates_directory_without_backup() {
        let tmp = TestTempDir::new("settings-first");
        let path = tmp.child("fresh/.claude/settings.json");
        let mut doc = SettingsDocument::load_from(&path).expect("load");
        doc.apply_profile(&profile());
        assert_eq!(doc.save().expect("save"), None);
        assert!(path.exists());
        assert!(!tmp.child("fresh/.claude/settings.json.bak").exists());
    }

    #[test]
    fn failed_backup_aborts_save() {
        let tmp = TestTempDir::new("settings-backup-fail");
        let path = tmp.write_text("settings.json", "{\"a\": 1}");
        // A directory squatting on the backup path makes the copy fail.
        std::fs::create_dir_all(tmp.child("settings.json.bak")).expect("mkdir");

        let mut doc = SettingsDocument::load_from(&path).expect("load");
        doc.apply_profile(&profile());
        assert!(matches!(doc.save(), Err(SettingsError::Io(_))));
        assert_eq!(std::fs::read_to_string(&path).expect("read"), "{\"a\": 1}");
    }
}
