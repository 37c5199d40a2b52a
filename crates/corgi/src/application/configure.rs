//! Configure use case: applies user-chosen settings to the persisted config.

use corgi_core::{Config, ConfigUpdate};
use tracing::{debug, info};

use crate::application::config_manager::{
    ConfigError, ConfigManager, FileStore, HostEnvironment, PathKind, DIR_MODE,
};

/// Result of a configure run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigureOutcome {
    /// The config as it now stands on disk.
    pub config: Config,
    /// Whether the update changed anything (and the file was rewritten).
    pub changed: bool,
}

/// Loads the config (bootstrapping it on first run), applies `update`, and
/// saves the result if anything changed.
///
/// A snippets file or directory named in `update` is created if it does not
/// exist yet, before the config is saved to point at it.
///
/// # Errors
///
/// Propagates any [`ConfigError`] from loading, creating the new snippets
/// locations, or saving.
pub fn configure<E, S>(
    manager: &ConfigManager<E, S>,
    update: &ConfigUpdate,
) -> Result<ConfigureOutcome, ConfigError>
where
    E: HostEnvironment,
    S: FileStore,
{
    let mut config = match update.editor.as_deref().filter(|e| !e.is_empty()) {
        Some(editor) => manager.load_with_editor(editor)?,
        None => manager.load()?,
    };

    if update.is_empty() {
        debug!("configure called without any values");
        return Ok(ConfigureOutcome {
            config,
            changed: false,
        });
    }

    let (snippets_file, snippets_dir) = update.snippets_locations();
    if let Some(file) = snippets_file {
        manager.store().ensure_path(file, PathKind::File, DIR_MODE)?;
    }
    if let Some(dir) = snippets_dir {
        manager.store().ensure_path(dir, PathKind::Directory, DIR_MODE)?;
    }

    let changed = config.apply(update);
    if changed {
        manager.save(&config)?;
        info!("config updated");
    }

    Ok(ConfigureOutcome { config, changed })
}
