//! Real filesystem storage.
//!
//! Permission bits are applied when entries are created and are subject to
//! the process umask.  On non-Unix platforms they are ignored.

use std::fs::{self, DirBuilder, OpenOptions};
use std::io::{self, Write};
use std::path::Path;

use tracing::debug;

use crate::application::config_manager::{FileStore, PathKind, StorageError};

/// [`FileStore`] backed by `std::fs`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFileStore;

impl LocalFileStore {
    pub fn new() -> Self {
        Self
    }
}

impl FileStore for LocalFileStore {
    fn ensure_path(&self, path: &Path, kind: PathKind, mode: u32) -> Result<(), StorageError> {
        if path.try_exists().map_err(|e| StorageError::io(path, e))? {
            return Ok(());
        }

        let dir = match kind {
            PathKind::Directory => Some(path),
            PathKind::File => path.parent().filter(|p| !p.as_os_str().is_empty()),
        };
        if let Some(dir) = dir {
            create_dir_all(dir, mode).map_err(|e| StorageError::io(dir, e))?;
        }

        if kind == PathKind::File {
            // No truncate: another process may have created it in the meantime.
            OpenOptions::new()
                .write(true)
                .create(true)
                .open(path)
                .map_err(|e| StorageError::io(path, e))?;
        }

        debug!(path = %path.display(), ?kind, "created");
        Ok(())
    }

    fn read_to_string(&self, path: &Path) -> Result<String, StorageError> {
        fs::read_to_string(path).map_err(|e| StorageError::io(path, e))
    }

    fn write(&self, path: &Path, contents: &str, mode: u32) -> Result<(), StorageError> {
        let mut options = OpenOptions::new();
        options.write(true).create(true).truncate(true);
        #[cfg(unix)]
        {
            use std::os::unix::fs::OpenOptionsExt;
            options.mode(mode);
        }
        #[cfg(not(unix))]
        let _ = mode;

        let mut file = options.open(path).map_err(|e| StorageError::io(path, e))?;
        file.write_all(contents.as_bytes())
            .map_err(|e| StorageError::io(path, e))
    }
}

fn create_dir_all(dir: &Path, mode: u32) -> io::Result<()> {
    let mut builder = DirBuilder::new();
    builder.recursive(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::DirBuilderExt;
        builder.mode(mode);
    }
    #[cfg(not(unix))]
    let _ = mode;

    builder.create(dir)
}
