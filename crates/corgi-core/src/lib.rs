//! # corgi-core
//!
//! Shared library for corgi containing the configuration entity, the rules for
//! locating the per-user config home, and the JSON codec for the config file.
//!
//! This crate has zero dependencies on the filesystem, the process
//! environment, or `$PATH`.  Everything it needs from the host is passed in
//! explicitly, so every function here is pure and testable on any platform.
//!
//! # Architecture overview (for beginners)
//!
//! corgi is a command-line snippet manager.  Before it can do anything useful
//! it needs to know where snippets are stored, which editor to open them in,
//! and which fuzzy-filter program to use for interactive selection.  Those
//! four facts make up the [`Config`] and live in a small JSON file under the
//! user's config home.
//!
//! - **`domain`** – The [`Config`] entity and the platform rules
//!   ([`OsFamily`], [`resolve_config_home`]) that decide where it lives.
//!
//! - **`codec`** – How a [`Config`] becomes JSON text and back again.  An
//!   empty file is a valid "no data yet" state, not a parse error.

pub mod codec;
pub mod domain;

// Re-export the most-used types at the crate root so callers can write
// `corgi_core::Config` instead of `corgi_core::domain::config::Config`.
pub use codec::{decode_config, encode_config, JsonStyle};
pub use domain::config::{Config, ConfigUpdate};
pub use domain::platform::{resolve_config_home, OsFamily};
