//! corgi library entry point.
//!
//! Re-exports all public modules so that integration tests in `tests/`
//! and the binary entry point in `main.rs` share the same module tree.
//!
//! # What does this crate do? (for beginners)
//!
//! Every corgi command starts by loading the configuration.  On the very
//! first run there is nothing to load, so corgi:
//!
//! 1. Works out the config home for the current OS (see
//!    [`corgi_core::resolve_config_home`]).
//! 2. Creates `<home>/.corgi/corgi_conf.json` if it is missing.
//! 3. Creates the default snippets file and snippets directory.
//! 4. Picks an editor (`$EDITOR`, else `vim` on `$PATH`) and a fuzzy filter
//!    (`fzf` on `$PATH`; `peco` is looked up but never kept).
//! 5. Writes all four settings to the config file.
//!
//! On every later run the file is simply parsed and returned.

/// Application layer: the config manager and the configure flow.
pub mod application;

/// Infrastructure layer: process environment and filesystem adapters.
pub mod infrastructure;
