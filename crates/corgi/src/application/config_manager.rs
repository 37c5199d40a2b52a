//! ConfigManager: locates, bootstraps, loads and persists the corgi config.
//!
//! # Bootstrap sequence
//!
//! ```text
//! {absent or empty on disk}
//!   └─ load()      -- parses to a *new* Config
//!        └─ populate defaults (snippets file + dir, editor, filter cmd)
//!        └─ save()
//! {populated on disk}
//!   └─ load()      -- parses and returns, no writes
//! ```
//!
//! # Seams
//!
//! Nothing in this module reads the process environment or the filesystem
//! directly.  The OS identity, environment variables and `$PATH` lookups come
//! from a [`HostEnvironment`]; creating, reading and writing files goes
//! through a [`FileStore`].  Production wiring uses `SystemEnvironment` and
//! `LocalFileStore`; tests use `MockEnvironment` and `InMemoryFileStore`.
//!
//! The config file is not locked and not written atomically.  Two corgi
//! processes bootstrapping at the same moment may both write defaults.

use std::path::{Path, PathBuf};

use corgi_core::domain::config::{
    DEFAULT_CONFIG_FILE, DEFAULT_EDITOR, DEFAULT_FILTER_CMD_FZF, DEFAULT_FILTER_CMD_PECO,
    DEFAULT_SNIPPETS_DIR, DEFAULT_SNIPPETS_FILE,
};
use corgi_core::domain::platform::EDITOR_VAR;
use corgi_core::{decode_config, encode_config, resolve_config_home, Config, JsonStyle, OsFamily};
use thiserror::Error;
use tracing::{debug, info, warn};

/// Permission bits for directories created on demand.
pub const DIR_MODE: u32 = 0o755;

/// Permission bits for the config file when `save` creates it.
pub const CONFIG_FILE_MODE: u32 = 0o644;

// ── Ports ─────────────────────────────────────────────────────────────────────

/// Read-only view of the host: OS identity, environment variables and
/// executable lookup.
pub trait HostEnvironment: Send + Sync {
    /// The OS family this process runs on.
    fn os_family(&self) -> OsFamily;

    /// Returns the value of environment variable `key`, or `None` if unset.
    fn var(&self, key: &str) -> Option<String>;

    /// Resolves `name` to an executable path by searching `$PATH`.
    ///
    /// Returns `None` when no matching executable is found.
    fn find_executable(&self, name: &str) -> Option<PathBuf>;
}

/// What kind of filesystem entry [`FileStore::ensure_path`] should create.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathKind {
    File,
    Directory,
}

/// Error type for filesystem operations.
#[derive(Debug, Error)]
pub enum StorageError {
    /// A file system I/O error occurred.
    #[error("I/O error accessing {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl StorageError {
    /// Wraps `source` with the path it concerned.
    pub fn io(path: &Path, source: std::io::Error) -> Self {
        Self::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

/// Storage for the config file and the default snippets locations.
pub trait FileStore: Send + Sync {
    /// Makes sure `path` exists.
    ///
    /// If nothing exists at `path`, every missing directory leading up to it
    /// is created with `mode` permission bits.  For [`PathKind::Directory`]
    /// that includes `path` itself; for [`PathKind::File`] an empty file is
    /// then created at `path`.  An existing entry is never modified, so
    /// calling this repeatedly is harmless.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Io`] if a directory or the file cannot be
    /// created.
    fn ensure_path(&self, path: &Path, kind: PathKind, mode: u32) -> Result<(), StorageError>;

    /// Reads the whole file at `path` as UTF-8 text.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Io`] if the file cannot be read.
    fn read_to_string(&self, path: &Path) -> Result<String, StorageError>;

    /// Replaces the content of the file at `path` with `contents`, creating
    /// it with `mode` permission bits if it does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Io`] if the file cannot be written.
    fn write(&self, path: &Path, contents: &str, mode: u32) -> Result<(), StorageError>;
}

// ── Errors ────────────────────────────────────────────────────────────────────

/// Error type for config operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Creating, reading or writing a file failed.
    #[error(transparent)]
    Storage(#[from] StorageError),

    /// The config file is not empty and is not a valid config document.
    #[error("failed to parse config {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The config could not be serialized to JSON.
    #[error("failed to serialize config: {0}")]
    Serialize(#[source] serde_json::Error),

    /// `$EDITOR` is unset and the fallback editor is not on `$PATH`.
    #[error(
        "could not find {editor} (default) in $PATH, update your editor choice with \
         \"corgi configure --editor <path to your editor>\""
    )]
    EditorNotFound { editor: String },

    /// None of the fallback filter commands is on `$PATH`.
    ///
    /// [`ConfigManager::load`] tolerates this and leaves `filter_cmd` empty.
    #[error("missing default filter cmd")]
    MissingDefaultFilterCmd,
}

impl ConfigError {
    /// Returns `true` for the one condition `load` does not treat as fatal.
    pub fn is_missing_filter_cmd(&self) -> bool {
        matches!(self, Self::MissingDefaultFilterCmd)
    }
}

// ── ConfigManager ─────────────────────────────────────────────────────────────

/// Loads and saves the corgi config through the injected host adapters.
pub struct ConfigManager<E, S> {
    env: E,
    store: S,
    style: JsonStyle,
}

impl<E: HostEnvironment, S: FileStore> ConfigManager<E, S> {
    /// Creates a manager writing JSON in the default style.
    pub fn new(env: E, store: S) -> Self {
        Self {
            env,
            store,
            style: JsonStyle::default(),
        }
    }

    /// Overrides the JSON indent/prefix style used by [`save`](Self::save).
    pub fn with_json_style(mut self, style: JsonStyle) -> Self {
        self.style = style;
        self
    }

    /// The file store this manager writes to.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Computes the config home for the current OS and environment.
    ///
    /// Returns an empty path on unsupported platforms, in which case every
    /// default location becomes relative to the working directory.
    pub fn config_home(&self) -> PathBuf {
        let os = self.env.os_family();
        let home = resolve_config_home(os, |key| self.env.var(key));
        if !os.is_supported() {
            warn!(?os, "no config home for this platform, using the working directory");
        } else if home.as_os_str().is_empty() {
            warn!(?os, "no home directory variable set, using the working directory");
        }
        home
    }

    /// Returns `<home>/.corgi/corgi_conf.json`, creating it if missing.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Storage`] if the file cannot be created.
    pub fn config_file(&self, home: &Path) -> Result<PathBuf, ConfigError> {
        self.ensure_default(home, DEFAULT_CONFIG_FILE, PathKind::File)
    }

    /// Returns `<home>/.corgi/snippets`, creating the directory if missing.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Storage`] if the directory cannot be created.
    pub fn snippets_dir(&self, home: &Path) -> Result<PathBuf, ConfigError> {
        self.ensure_default(home, DEFAULT_SNIPPETS_DIR, PathKind::Directory)
    }

    /// Returns `<home>/.corgi/snippets.json`, creating it if missing.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Storage`] if the file cannot be created.
    pub fn snippets_file(&self, home: &Path) -> Result<PathBuf, ConfigError> {
        self.ensure_default(home, DEFAULT_SNIPPETS_FILE, PathKind::File)
    }

    /// Resolves the config home and returns the (existing) config file path.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Storage`] if the file cannot be created.
    pub fn config_file_path(&self) -> Result<PathBuf, ConfigError> {
        let home = self.config_home();
        self.config_file(&home)
    }

    fn ensure_default(
        &self,
        home: &Path,
        relative: &str,
        kind: PathKind,
    ) -> Result<PathBuf, ConfigError> {
        let path = home.join(relative);
        self.store.ensure_path(&path, kind, DIR_MODE)?;
        Ok(path)
    }

    /// Picks the editor: `$EDITOR` if set, otherwise the fallback editor
    /// resolved on `$PATH`.
    ///
    /// A set `$EDITOR` is trusted as-is, even when empty; it is not checked
    /// to be an executable.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EditorNotFound`] when `$EDITOR` is unset and the
    /// fallback is not on `$PATH`.
    pub fn default_editor(&self) -> Result<String, ConfigError> {
        if let Some(editor) = self.env.var(EDITOR_VAR) {
            debug!(%editor, var = EDITOR_VAR, "using editor from environment");
            return Ok(editor);
        }

        self.env
            .find_executable(DEFAULT_EDITOR)
            .map(|path| path.to_string_lossy().into_owned())
            .ok_or_else(|| ConfigError::EditorNotFound {
                editor: DEFAULT_EDITOR.to_string(),
            })
    }

    /// Resolves the fuzzy filter on `$PATH`.
    ///
    /// `peco` is looked up first, then `fzf`.  The `fzf` result replaces the
    /// `peco` result whether or not `fzf` was found, so a `$PATH` holding
    /// only `peco` yields no filter.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingDefaultFilterCmd`] if the final lookup
    /// finds nothing.
    pub fn default_filter_cmd(&self) -> Result<String, ConfigError> {
        let peco = self.env.find_executable(DEFAULT_FILTER_CMD_PECO);
        debug!(found = peco.is_some(), "looked up {DEFAULT_FILTER_CMD_PECO}");

        let filter = self.env.find_executable(DEFAULT_FILTER_CMD_FZF);
        filter
            .map(|path| path.to_string_lossy().into_owned())
            .ok_or(ConfigError::MissingDefaultFilterCmd)
    }

    /// Loads the config, bootstrapping defaults on first run.
    ///
    /// If the config file is missing or empty, the default snippets file and
    /// directory are created, the editor and filter command are detected,
    /// and the populated config is saved before being returned.  A missing
    /// filter command leaves `filter_cmd` empty; every other failure aborts
    /// the load.
    ///
    /// # Errors
    ///
    /// - [`ConfigError::Storage`] for file-system failures.
    /// - [`ConfigError::Parse`] if the config file holds malformed JSON.
    /// - [`ConfigError::EditorNotFound`] if no editor can be determined.
    /// - [`ConfigError::Serialize`] if the populated config cannot be encoded.
    pub fn load(&self) -> Result<Config, ConfigError> {
        self.load_or_init(None)
    }

    /// Like [`load`](Self::load), but a first-run bootstrap uses `editor`
    /// instead of detecting one.
    ///
    /// This lets `corgi configure --editor` succeed on a machine where no
    /// editor can be detected.  An existing config is returned unchanged.
    ///
    /// # Errors
    ///
    /// Same as [`load`](Self::load), except that
    /// [`ConfigError::EditorNotFound`] cannot occur.
    pub fn load_with_editor(&self, editor: &str) -> Result<Config, ConfigError> {
        self.load_or_init(Some(editor))
    }

    fn load_or_init(&self, editor: Option<&str>) -> Result<Config, ConfigError> {
        let home = self.config_home();
        let path = self.config_file(&home)?;

        let content = self.store.read_to_string(&path)?;
        let mut config = decode_config(&content).map_err(|source| ConfigError::Parse {
            path: path.clone(),
            source,
        })?;

        if !config.is_new() {
            debug!(path = %path.display(), "loaded config");
            return Ok(config);
        }

        info!(path = %path.display(), "initialising config with defaults");

        config.snippets_file = self.snippets_file(&home)?;
        config.snippets_dir = self.snippets_dir(&home)?;
        config.editor = match editor {
            Some(editor) => editor.to_string(),
            None => self.default_editor()?,
        };
        config.filter_cmd = match self.default_filter_cmd() {
            Ok(cmd) => cmd,
            Err(e) if e.is_missing_filter_cmd() => {
                warn!(
                    filter = DEFAULT_FILTER_CMD_FZF,
                    "no filter command found in $PATH, leaving it unset"
                );
                String::new()
            }
            Err(e) => return Err(e),
        };

        self.save(&config)?;
        Ok(config)
    }

    /// Writes `config` to the config file, replacing its previous content.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Serialize`] if encoding fails, or
    /// [`ConfigError::Storage`] if the file cannot be written.
    pub fn save(&self, config: &Config) -> Result<(), ConfigError> {
        let path = self.config_file_path()?;
        let content = encode_config(config, &self.style).map_err(ConfigError::Serialize)?;
        self.store.write(&path, &content, CONFIG_FILE_MODE)?;
        debug!(path = %path.display(), "saved config");
        Ok(())
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
