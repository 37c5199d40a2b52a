//! Mock host environment for tests.
//!
//! The real [`SystemEnvironment`](super::SystemEnvironment) depends on
//! whatever the test machine happens to have: its `$HOME`, its `$EDITOR`,
//! whether `vim` or `fzf` is installed.  `MockEnvironment` replaces all of
//! that with values fixed at construction time.
//!
//! # Usage in tests
//!
//! ```ignore
//! let env = MockEnvironment::new(OsFamily::Linux)
//!     .with_var("HOME", "/home/me")
//!     .with_executable("vim", "/usr/bin/vim");
//! let manager = ConfigManager::new(env, InMemoryFileStore::new());
//! ```

use std::collections::HashMap;
use std::path::PathBuf;

use corgi_core::OsFamily;

use crate::application::config_manager::HostEnvironment;

/// A host environment whose OS, variables and `$PATH` are all explicit.
#[derive(Debug, Clone)]
pub struct MockEnvironment {
    pub os: OsFamily,
    pub vars: HashMap<String, String>,
    /// Executable name → resolved path.
    pub executables: HashMap<String, PathBuf>,
}

impl MockEnvironment {
    /// Creates an environment for `os` with no variables and an empty `$PATH`.
    pub fn new(os: OsFamily) -> Self {
        Self {
            os,
            vars: HashMap::new(),
            executables: HashMap::new(),
        }
    }

    /// Sets environment variable `key` to `value`.
    pub fn with_var(mut self, key: &str, value: &str) -> Self {
        self.vars.insert(key.to_string(), value.to_string());
        self
    }

    /// Makes `name` resolve to `path` on `$PATH`.
    pub fn with_executable(mut self, name: &str, path: impl Into<PathBuf>) -> Self {
        self.executables.insert(name.to_string(), path.into());
        self
    }
}

impl HostEnvironment for MockEnvironment {
    fn os_family(&self) -> OsFamily {
        self.os
    }

    fn var(&self, key: &str) -> Option<String> {
        self.vars.get(key).cloned()
    }

    fn find_executable(&self, name: &str) -> Option<PathBuf> {
        self.executables.get(name).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_environment_answers_only_what_was_configured() {
        let env = MockEnvironment::new(OsFamily::MacOs)
            .with_var("HOME", "/Users/me")
            .with_executable("fzf", "/opt/homebrew/bin/fzf");

        assert_eq!(env.os_family(), OsFamily::MacOs);
        assert_eq!(env.var("HOME").as_deref(), Some("/Users/me"));
        assert_eq!(env.var("EDITOR"), None);
        assert_eq!(
            env.find_executable("fzf"),
            Some(PathBuf::from("/opt/homebrew/bin/fzf"))
        );
        assert_eq!(env.find_executable("peco"), None);
    }
}
