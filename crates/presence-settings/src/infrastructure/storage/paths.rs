//! Locations of the stored settings.
//!
//! - Project settings: `<project>/.presence/presence-project.json`
//! - Application settings, in the platform config directory:
//!   - Windows:  `%APPDATA%\PresenceSettings\presence.toml`
//!   - Linux:    `$XDG_CONFIG_HOME/presence-settings/presence.toml`
//!     (falling back to `~/.config/presence-settings/presence.toml`)
//!   - macOS:    `~/Library/Application Support/PresenceSettings/presence.toml`
//!   - other Unix: as on Linux
//!
//! Environment values that are not absolute paths are ignored, as the XDG
//! base directory rules require.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use crate::application::backend::StorageError;

/// Directory, relative to a project root, that holds its settings.
pub const PROJECT_SETTINGS_DIR: &str = ".presence";

/// Directory holding the settings of the project rooted at `project`.
pub fn project_settings_dir(project: &Path) -> PathBuf {
    project.join(PROJECT_SETTINGS_DIR)
}

/// Determines the platform-appropriate directory for application settings.
///
/// # Errors
///
/// Returns [`StorageError::NoPlatformConfigDir`] when the platform config base
/// directory cannot be determined from the environment.
pub fn application_settings_dir() -> Result<PathBuf, StorageError> {
    platform_config_dir().ok_or(StorageError::NoPlatformConfigDir)
}

/// Name of the settings directory inside the platform config base.
#[cfg(any(target_os = "windows", target_os = "macos"))]
const SETTINGS_DIR_NAME: &str = "PresenceSettings";
#[cfg(not(any(target_os = "windows", target_os = "macos")))]
const SETTINGS_DIR_NAME: &str = "presence-settings";

fn platform_config_dir() -> Option<PathBuf> {
    config_base(|key| std::env::var_os(key)).map(|base| base.join(SETTINGS_DIR_NAME))
}

/// Platform config base directory, reading the environment through `var`.
fn config_base(var: impl Fn(&str) -> Option<OsString>) -> Option<PathBuf> {
    let absolute = |key: &str| var(key).map(PathBuf::from).filter(|dir| dir.is_absolute());

    if cfg!(target_os = "windows") {
        absolute("APPDATA")
    } else if cfg!(target_os = "macos") {
        absolute("HOME").map(|home| home.join("Library").join("Application Support"))
    } else if cfg!(unix) {
        absolute("XDG_CONFIG_HOME").or_else(|| absolute("HOME").map(|home| home.join(".config")))
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_project_settings_dir_is_inside_project() {
        let dir = project_settings_dir(Path::new("/work/alpha"));
        assert_eq!(dir, PathBuf::from("/work/alpha/.presence"));
    }

    #[test]
    fn test_application_settings_dir_when_environment_allows() {
        // May legitimately fail in a stripped container with no HOME/APPDATA.
        match application_settings_dir() {
            Ok(dir) => {
                let name = dir.file_name().and_then(|n| n.to_str()).unwrap_or_default();
                assert!(
                    name == "presence-settings" || name == "PresenceSettings",
                    "unexpected settings directory {dir:?}"
                );
            }
            Err(e) => assert!(matches!(e, StorageError::NoPlatformConfigDir)),
        }
    }

    #[cfg(target_os = "linux")]
    fn env<'a>(pairs: &'a [(&'a str, &'a str)]) -> impl Fn(&str) -> Option<OsString> + 'a {
        move |key: &str| {
            pairs
                .iter()
                .find(|(name, _)| *name == key)
                .map(|(_, value)| OsString::from(value))
        }
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn test_config_base_prefers_xdg_config_home() {
        let base = config_base(env(&[("XDG_CONFIG_HOME", "/xdg"), ("HOME", "/home/u")]));
        assert_eq!(base, Some(PathBuf::from("/xdg")));
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn test_config_base_ignores_relative_or_empty_xdg_config_home() {
        for xdg in ["", "relative/config"] {
            let base = config_base(env(&[("XDG_CONFIG_HOME", xdg), ("HOME", "/home/u")]));
            assert_eq!(base, Some(PathBuf::from("/home/u/.config")), "XDG_CONFIG_HOME={xdg:?}");
        }
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn test_config_base_without_home_is_none() {
        assert_eq!(config_base(env(&[])), None);
        assert_eq!(config_base(env(&[("HOME", "home")])), None);
    }
}
