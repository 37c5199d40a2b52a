//! Host environment adapters.
//!
//! [`SystemEnvironment`] answers from the running process: the compile-time
//! OS identity, `std::env` variables, and `$PATH` via the `which` crate.
//!
//! A [`mock::MockEnvironment`] is always compiled (not guarded by `#[cfg]`) so
//! tests on any platform can describe exactly which variables and
//! executables exist.

use std::path::PathBuf;

use corgi_core::OsFamily;
use tracing::debug;

use crate::application::config_manager::HostEnvironment;

pub mod mock;

/// The environment of the current process.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemEnvironment;

impl SystemEnvironment {
    pub fn new() -> Self {
        Self
    }
}

impl HostEnvironment for SystemEnvironment {
    fn os_family(&self) -> OsFamily {
        OsFamily::from_os_name(std::env::consts::OS)
    }

    /// Non-Unicode values are treated as unset.
    fn var(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }

    fn find_executable(&self, name: &str) -> Option<PathBuf> {
        match which::which(name) {
            Ok(path) => {
                debug!(name, path = %path.display(), "resolved executable");
                Some(path)
            }
            Err(e) => {
                debug!(name, error = %e, "executable not found in $PATH");
                None
            }
        }
    }
}
