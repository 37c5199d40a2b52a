//! Storage infrastructure: config and snippets file persistence.
//!
//! - `fs` – [`LocalFileStore`](fs::LocalFileStore), the real filesystem.
//! - `memory` – [`InMemoryFileStore`](memory::InMemoryFileStore), a map of
//!   paths to entries for tests that should not touch the disk.
//!
//! Both implement `application::config_manager::FileStore`.

pub mod fs;
pub mod memory;
