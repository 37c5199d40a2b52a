//! Application layer use cases.
//!
//! - **`config_manager`** – Locates, bootstraps, loads and saves the config.
//!   The OS-facing work (reading environment variables, searching `$PATH`,
//!   touching the filesystem) goes through the [`HostEnvironment`] and
//!   [`FileStore`] traits, which are implemented in the infrastructure layer.
//!
//! - **`configure`** – Applies a user-requested change to the persisted
//!   config (`corgi configure --editor ...`).
//!
//! [`HostEnvironment`]: config_manager::HostEnvironment
//! [`FileStore`]: config_manager::FileStore

pub mod config_manager;
pub mod configure;
