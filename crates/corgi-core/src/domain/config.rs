//! The corgi configuration entity.
//!
//! A [`Config`] is exactly four settings.  It is stored on disk as a JSON
//! object with the keys `snippets_file`, `snippets_dir`, `editor` and
//! `filter_cmd`:
//!
//! ```json
//! {
//!   "snippets_file": "/home/me/.corgi/snippets.json",
//!   "snippets_dir": "/home/me/.corgi/snippets",
//!   "editor": "/usr/bin/vim",
//!   "filter_cmd": "/usr/bin/fzf"
//! }
//! ```
//!
//! # Lifecycle
//!
//! A config is either *new* (all four fields empty, meaning no config file
//! or an empty one) or *populated*.  A new config is filled in with detected
//! defaults exactly once and written to disk; from then on the file is the
//! single source of truth and is only changed by an explicit save.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Config file location, relative to the config home.
pub const DEFAULT_CONFIG_FILE: &str = ".corgi/corgi_conf.json";

/// Snippets directory location, relative to the config home.
pub const DEFAULT_SNIPPETS_DIR: &str = ".corgi/snippets";

/// Snippets storage file location, relative to the config home.
pub const DEFAULT_SNIPPETS_FILE: &str = ".corgi/snippets.json";

/// Editor searched for on `$PATH` when `$EDITOR` is not set.
pub const DEFAULT_EDITOR: &str = "vim";

/// Fuzzy filter looked up first on `$PATH`.
pub const DEFAULT_FILTER_CMD_PECO: &str = "peco";

/// Fuzzy filter looked up second on `$PATH`.  Its result always replaces
/// the `peco` result, found or not.
pub const DEFAULT_FILTER_CMD_FZF: &str = "fzf";

/// Top-level configuration stored in the config file.
///
/// Missing keys deserialize to empty values, so a file written by an older
/// version (or edited by hand) still loads.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    /// Absolute path of the snippets storage file.
    pub snippets_file: PathBuf,
    /// Absolute path of the directory holding per-snippet files.
    pub snippets_dir: PathBuf,
    /// Editor path or command name.
    pub editor: String,
    /// Fuzzy-filter path or command name.  Empty when none was found.
    pub filter_cmd: String,
}

impl Config {
    /// Returns `true` when every field is empty.
    ///
    /// A new config signals first-run state: the caller should populate it
    /// with defaults and persist it.
    pub fn is_new(&self) -> bool {
        self.snippets_file.as_os_str().is_empty()
            && self.snippets_dir.as_os_str().is_empty()
            && self.editor.is_empty()
            && self.filter_cmd.is_empty()
    }

    /// Applies every provided, non-empty value in `update` to this config.
    ///
    /// Returns `true` if any field actually changed.
    pub fn apply(&mut self, update: &ConfigUpdate) -> bool {
        let mut changed = false;

        if let Some(path) = non_empty_path(&update.snippets_file) {
            changed |= replace(&mut self.snippets_file, path.clone());
        }
        if let Some(path) = non_empty_path(&update.snippets_dir) {
            changed |= replace(&mut self.snippets_dir, path.clone());
        }
        if let Some(editor) = update.editor.as_ref().filter(|e| !e.is_empty()) {
            changed |= replace(&mut self.editor, editor.clone());
        }
        if let Some(filter) = update.filter_cmd.as_ref().filter(|f| !f.is_empty()) {
            changed |= replace(&mut self.filter_cmd, filter.clone());
        }

        changed
    }
}

fn replace<T: PartialEq>(slot: &mut T, value: T) -> bool {
    if *slot == value {
        return false;
    }
    *slot = value;
    true
}

/// A partial change to a [`Config`], as requested by `corgi configure`.
///
/// `None` (or an empty value) leaves the corresponding field untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigUpdate {
    pub snippets_file: Option<PathBuf>,
    pub snippets_dir: Option<PathBuf>,
    pub editor: Option<String>,
    pub filter_cmd: Option<String>,
}

impl ConfigUpdate {
    /// Returns `true` when the update carries no usable value.
    pub fn is_empty(&self) -> bool {
        let text_empty = |s: &Option<String>| s.as_ref().map_or(true, String::is_empty);

        non_empty_path(&self.snippets_file).is_none()
            && non_empty_path(&self.snippets_dir).is_none()
            && text_empty(&self.editor)
            && text_empty(&self.filter_cmd)
    }

    /// Returns the snippets file and directory this update introduces, if any.
    pub fn snippets_locations(&self) -> (Option<&PathBuf>, Option<&PathBuf>) {
        (
            non_empty_path(&self.snippets_file),
            non_empty_path(&self.snippets_dir),
        )
    }
}

fn non_empty_path(path: &Option<PathBuf>) -> Option<&PathBuf> {
    path.as_ref().filter(|p| !p.as_os_str().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn populated() -> Config {
        Config {
            snippets_file: PathBuf::from("/a"),
            snippets_dir: PathBuf::from("/b"),
            editor: "/c".to_string(),
            filter_cmd: "/d".to_string(),
        }
    }

    // ── is_new ────────────────────────────────────────────────────────────────

    #[test]
    fn test_default_config_is_new() {
        assert!(Config::default().is_new());
    }

    #[test]
    fn test_populated_config_is_not_new() {
        assert!(!populated().is_new());
    }

    #[test]
    fn test_config_with_any_single_field_set_is_not_new() {
        let only_file = Config {
            snippets_file: PathBuf::from("/a"),
            ..Config::default()
        };
        let only_dir = Config {
            snippets_dir: PathBuf::from("/b"),
            ..Config::default()
        };
        let only_editor = Config {
            editor: "vim".to_string(),
            ..Config::default()
        };
        let only_filter = Config {
            filter_cmd: "fzf".to_string(),
            ..Config::default()
        };

        for cfg in [only_file, only_dir, only_editor, only_filter] {
            assert!(!cfg.is_new(), "{cfg:?} must not be new");
        }
    }

    // ── serde shape ───────────────────────────────────────────────────────────

    #[test]
    fn test_config_serializes_with_snake_case_keys() {
        let json = serde_json::to_string(&populated()).expect("serialize");

        assert_eq!(
            json,
            r#"{"snippets_file":"/a","snippets_dir":"/b","editor":"/c","filter_cmd":"/d"}"#
        );
    }

    #[test]
    fn test_config_missing_keys_deserialize_as_empty() {
        let cfg: Config = serde_json::from_str(r#"{"editor":"nano"}"#).expect("deserialize");

        assert_eq!(cfg.editor, "nano");
        assert!(cfg.snippets_file.as_os_str().is_empty());
        assert!(cfg.filter_cmd.is_empty());
    }

    // ── apply ─────────────────────────────────────────────────────────────────

    #[test]
    fn test_apply_replaces_only_provided_fields() {
        // Arrange
        let mut cfg = populated();
        let update = ConfigUpdate {
            editor: Some("nvim".to_string()),
            ..ConfigUpdate::default()
        };

        // Act
        let changed = cfg.apply(&update);

        // Assert
        assert!(changed);
        assert_eq!(cfg.editor, "nvim");
        assert_eq!(cfg.snippets_file, PathBuf::from("/a"));
        assert_eq!(cfg.filter_cmd, "/d");
    }

    #[test]
    fn test_apply_ignores_empty_values() {
        let mut cfg = populated();
        let update = ConfigUpdate {
            snippets_dir: Some(PathBuf::new()),
            filter_cmd: Some(String::new()),
            ..ConfigUpdate::default()
        };

        assert!(!cfg.apply(&update));
        assert_eq!(cfg, populated());
    }

    #[test]
    fn test_apply_same_value_reports_no_change() {
        let mut cfg = populated();
        let update = ConfigUpdate {
            editor: Some("/c".to_string()),
            ..ConfigUpdate::default()
        };

        assert!(!cfg.apply(&update));
    }

    #[test]
    fn test_update_is_empty_treats_blank_values_as_absent() {
        assert!(ConfigUpdate::default().is_empty());
        assert!(ConfigUpdate {
            editor: Some(String::new()),
            ..ConfigUpdate::default()
        }
        .is_empty());
        assert!(!ConfigUpdate {
            filter_cmd: Some("sk".to_string()),
            ..ConfigUpdate::default()
        }
        .is_empty());
    }

    #[test]
    fn test_snippets_locations_skips_blank_paths() {
        let update = ConfigUpdate {
            snippets_file: Some(PathBuf::from("/x/snippets.json")),
            snippets_dir: Some(PathBuf::new()),
            ..ConfigUpdate::default()
        };

        let (file, dir) = update.snippets_locations();

        assert_eq!(file, Some(&PathBuf::from("/x/snippets.json")));
        assert_eq!(dir, None);
    }
}
