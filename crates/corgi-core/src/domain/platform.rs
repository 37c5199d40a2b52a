//! OS identity and config-home resolution.
//!
//! Where corgi keeps its files depends on the operating system:
//!
//! | OS      | Config home                                   |
//! |---------|-----------------------------------------------|
//! | macOS   | `$HOME`                                       |
//! | Linux   | `$XDG_CONFIG_HOME`, falling back to `$HOME`   |
//! | other   | empty (unsupported)                           |
//!
//! The config file and snippets then live under `<config home>/.corgi/`.
//!
//! Nothing here reads the real environment.  [`resolve_config_home`] takes
//! the OS and a variable lookup function as arguments, so the application
//! layer decides whether those come from the running process or from a test
//! fixture.

use std::path::PathBuf;

/// Home directory variable.
pub const HOME_VAR: &str = "HOME";

/// XDG base-directory variable for per-user configuration.
pub const XDG_CONFIG_HOME_VAR: &str = "XDG_CONFIG_HOME";

/// Editor preference variable.
pub const EDITOR_VAR: &str = "EDITOR";

/// The operating-system families corgi knows how to lay out files for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OsFamily {
    MacOs,
    Linux,
    /// Any OS without a supported layout.
    Other,
}

impl OsFamily {
    /// Maps an OS identifier as reported by `std::env::consts::OS`.
    pub fn from_os_name(name: &str) -> Self {
        match name {
            "macos" => Self::MacOs,
            "linux" => Self::Linux,
            _ => Self::Other,
        }
    }

    /// Returns `true` for the families with a supported layout.
    pub fn is_supported(self) -> bool {
        !matches!(self, Self::Other)
    }
}

/// Computes the config home for `os`, reading variables through `lookup`.
///
/// Variables that are unset or set to the empty string are treated the same.
/// Returns an empty path when nothing applies, including on any
/// [`OsFamily::Other`] system.  This function never fails.
///
/// # Example
///
/// ```rust
/// use std::path::PathBuf;
/// use corgi_core::{resolve_config_home, OsFamily};
///
/// let home = resolve_config_home(OsFamily::Linux, |key| match key {
///     "HOME" => Some("/home/me".to_string()),
///     _ => None,
/// });
/// assert_eq!(home, PathBuf::from("/home/me"));
/// ```
pub fn resolve_config_home<F>(os: OsFamily, lookup: F) -> PathBuf
where
    F: Fn(&str) -> Option<String>,
{
    let non_empty = |key: &str| lookup(key).filter(|value| !value.is_empty());

    let home = match os {
        OsFamily::MacOs => non_empty(HOME_VAR),
        OsFamily::Linux => non_empty(XDG_CONFIG_HOME_VAR).or_else(|| non_empty(HOME_VAR)),
        OsFamily::Other => None,
    };

    home.map(PathBuf::from).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn vars(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    fn resolve(os: OsFamily, env: &HashMap<String, String>) -> PathBuf {
        resolve_config_home(os, |key| env.get(key).cloned())
    }

    #[test]
    fn test_from_os_name_recognises_supported_families() {
        assert_eq!(OsFamily::from_os_name("macos"), OsFamily::MacOs);
        assert_eq!(OsFamily::from_os_name("linux"), OsFamily::Linux);
        assert_eq!(OsFamily::from_os_name("windows"), OsFamily::Other);
        assert_eq!(OsFamily::from_os_name("freebsd"), OsFamily::Other);
        assert!(!OsFamily::Other.is_supported());
    }

    #[test]
    fn test_macos_uses_home_and_ignores_xdg() {
        let env = vars(&[("HOME", "/Users/me"), ("XDG_CONFIG_HOME", "/xdg")]);
        assert_eq!(resolve(OsFamily::MacOs, &env), PathBuf::from("/Users/me"));
    }

    #[test]
    fn test_macos_without_home_is_empty() {
        let env = vars(&[("XDG_CONFIG_HOME", "/xdg")]);
        assert_eq!(resolve(OsFamily::MacOs, &env), PathBuf::new());
    }

    #[test]
    fn test_linux_prefers_xdg_config_home() {
        let env = vars(&[("HOME", "/home/me"), ("XDG_CONFIG_HOME", "/home/me/.config")]);
        assert_eq!(
            resolve(OsFamily::Linux, &env),
            PathBuf::from("/home/me/.config")
        );
    }

    #[test]
    fn test_linux_falls_back_to_home_when_xdg_unset() {
        let env = vars(&[("HOME", "/home/me")]);
        assert_eq!(resolve(OsFamily::Linux, &env), PathBuf::from("/home/me"));
    }

    #[test]
    fn test_linux_treats_empty_xdg_as_unset() {
        let env = vars(&[("HOME", "/home/me"), ("XDG_CONFIG_HOME", "")]);
        assert_eq!(resolve(OsFamily::Linux, &env), PathBuf::from("/home/me"));
    }

    #[test]
    fn test_linux_with_nothing_set_is_empty() {
        assert_eq!(resolve(OsFamily::Linux, &HashMap::new()), PathBuf::new());
    }

    #[test]
    fn test_unsupported_os_is_always_empty() {
        let env = vars(&[("HOME", "/home/me"), ("XDG_CONFIG_HOME", "/xdg")]);
        assert_eq!(resolve(OsFamily::Other, &env), PathBuf::new());
    }
}
