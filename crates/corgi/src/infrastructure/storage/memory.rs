//! In-memory file store for unit testing.
//!
//! Paths are kept in a sorted map of entries; nothing touches the disk.
//! Directory chains are tracked explicitly, so a test can check that
//! `ensure_path` created the parents it should have.
//!
//! # Failure injection
//!
//! Set `should_fail_ensure` or `should_fail_writes` before use to make the
//! corresponding operations return a permission error.  This lets you test
//! error-handling paths in `ConfigManager` without a read-only filesystem.

use std::collections::BTreeMap;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::application::config_manager::{FileStore, PathKind, StorageError};

#[derive(Debug, Clone, PartialEq, Eq)]
enum Entry {
    Directory { mode: u32 },
    File { contents: String },
}

/// A [`FileStore`] that keeps every entry in memory.
#[derive(Debug, Default)]
pub struct InMemoryFileStore {
    entries: Mutex<BTreeMap<PathBuf, Entry>>,
    writes: AtomicUsize,
    /// When `true`, every `ensure_path` call fails.
    pub should_fail_ensure: bool,
    /// When `true`, every `write` call fails.
    pub should_fail_writes: bool,
}

impl InMemoryFileStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populates a file (and its parent directories) with `contents`.
    pub fn with_file(self, path: impl Into<PathBuf>, contents: &str) -> Self {
        let path = path.into();
        {
            let mut entries = self.lock();
            if let Some(parent) = path.parent() {
                // Seeding cannot collide with anything but other seeds.
                let _ = create_dirs(&mut entries, parent, 0o755);
            }
            entries.insert(
                path,
                Entry::File {
                    contents: contents.to_string(),
                },
            );
        }
        self
    }

    /// Returns the contents of the file at `path`, if it is a file.
    pub fn file_contents(&self, path: &Path) -> Option<String> {
        match self.lock().get(path) {
            Some(Entry::File { contents }) => Some(contents.clone()),
            _ => None,
        }
    }

    /// Returns `true` if `path` is a directory.
    pub fn is_dir(&self, path: &Path) -> bool {
        matches!(self.lock().get(path), Some(Entry::Directory { .. }))
    }

    /// Returns the permission bits `path` was created with, if it is a directory.
    pub fn dir_mode(&self, path: &Path) -> Option<u32> {
        match self.lock().get(path) {
            Some(Entry::Directory { mode }) => Some(*mode),
            _ => None,
        }
    }

    /// Returns `true` if anything exists at `path`.
    pub fn exists(&self, path: &Path) -> bool {
        self.lock().contains_key(path)
    }

    /// Number of successful `write` calls so far.
    pub fn write_count(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }

    fn lock(&self) -> MutexGuard<'_, BTreeMap<PathBuf, Entry>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Creates `dir` and every missing ancestor as directories.
fn create_dirs(
    entries: &mut BTreeMap<PathBuf, Entry>,
    dir: &Path,
    mode: u32,
) -> Result<(), StorageError> {
    let mut chain: Vec<&Path> = dir
        .ancestors()
        .filter(|p| !p.as_os_str().is_empty())
        .collect();
    chain.reverse();

    for ancestor in chain {
        match entries.get(ancestor) {
            Some(Entry::Directory { .. }) => {}
            Some(Entry::File { .. }) => {
                return Err(StorageError::io(
                    ancestor,
                    io::Error::new(io::ErrorKind::Other, "not a directory"),
                ));
            }
            None => {
                entries.insert(ancestor.to_path_buf(), Entry::Directory { mode });
            }
        }
    }
    Ok(())
}

fn permission_denied(path: &Path) -> StorageError {
    StorageError::io(
        path,
        io::Error::new(io::ErrorKind::PermissionDenied, "injected failure"),
    )
}

impl FileStore for InMemoryFileStore {
    fn ensure_path(&self, path: &Path, kind: PathKind, mode: u32) -> Result<(), StorageError> {
        if self.should_fail_ensure {
            return Err(permission_denied(path));
        }

        let mut entries = self.lock();
        if entries.contains_key(path) {
            return Ok(());
        }

        match kind {
            PathKind::Directory => create_dirs(&mut entries, path, mode),
            PathKind::File => {
                if let Some(parent) = path.parent() {
                    create_dirs(&mut entries, parent, mode)?;
                }
                entries.insert(
                    path.to_path_buf(),
                    Entry::File {
                        contents: String::new(),
                    },
                );
                Ok(())
            }
        }
    }

    fn read_to_string(&self, path: &Path) -> Result<String, StorageError> {
        match self.lock().get(path) {
            Some(Entry::File { contents }) => Ok(contents.clone()),
            Some(Entry::Directory { .. }) => Err(StorageError::io(
                path,
                io::Error::new(io::ErrorKind::Other, "is a directory"),
            )),
            None => Err(StorageError::io(
                path,
                io::Error::new(io::ErrorKind::NotFound, "no such file"),
            )),
        }
    }

    fn write(&self, path: &Path, contents: &str, _mode: u32) -> Result<(), StorageError> {
        if self.should_fail_writes {
            return Err(permission_denied(path));
        }

        let mut entries = self.lock();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            if !matches!(entries.get(parent), Some(Entry::Directory { .. })) {
                return Err(StorageError::io(
                    path,
                    io::Error::new(io::ErrorKind::NotFound, "parent directory does not exist"),
                ));
            }
        }
        if matches!(entries.get(path), Some(Entry::Directory { .. })) {
            return Err(StorageError::io(
                path,
                io::Error::new(io::ErrorKind::Other, "is a directory"),
            ));
        }

        entries.insert(
            path.to_path_buf(),
            Entry::File {
                contents: contents.to_string(),
            },
        );
        self.writes.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}
