// OTD GUI - core/resolver.rs
//
// Directory resolution: merges command-line overrides with per-platform
// defaults.
//
// Rules:
//   - An override always wins; no platform logic runs for it.
//   - Settings defaults come from DEFAULT_SETTINGS_TABLE. A platform that is
//     not in the table has no default and resolves to `None`.
//   - The configuration directory is `<cwd>/Configurations` everywhere and is
//     never absent.
//   - Nothing here touches the filesystem; paths are intended, not created.

use crate::core::model::{DirectoryOverride, PlatformId, ResolvedDirectories};
use crate::platform::host::HostEnvironment;
use crate::util::constants;
use std::path::{Path, PathBuf};

/// Pure function computing a platform's default settings directory.
type SettingsDefault = fn(&HostEnvironment) -> PathBuf;

/// Per-platform default settings directory.
const DEFAULT_SETTINGS_TABLE: &[(PlatformId, SettingsDefault)] = &[
    (PlatformId::Windows, windows_settings_default),
    (PlatformId::Unix, unix_settings_default),
    (PlatformId::MacOS, macos_settings_default),
];

fn windows_settings_default(host: &HostEnvironment) -> PathBuf {
    settings_under(host.local_app_data(), constants::ENV_LOCAL_APP_DATA, &[])
}

fn unix_settings_default(host: &HostEnvironment) -> PathBuf {
    settings_under(host.home(), constants::ENV_HOME, constants::UNIX_SETTINGS_PARENT)
}

fn macos_settings_default(host: &HostEnvironment) -> PathBuf {
    settings_under(host.home(), constants::ENV_HOME, constants::MACOS_SETTINGS_PARENT)
}

/// `<base>/<parents...>/OpenTabletDriver`.
///
/// An unset variable is treated as an empty base, which leaves a relative path.
fn settings_under(base: Option<&Path>, var: &str, parents: &[&str]) -> PathBuf {
    let mut path = match base {
        Some(base) => base.to_path_buf(),
        None => {
            tracing::warn!(
                variable = var,
                "Environment variable not set; settings directory will be relative"
            );
            PathBuf::new()
        }
    };
    path.extend(parents);
    path.push(constants::SETTINGS_DIR_NAME);
    path
}

/// Resolve the settings directory for `platform`.
///
/// `platform` alone selects the default; `host.platform()` is not consulted
/// here, only the host's environment variables. [`resolve`] passes the
/// host's own platform.
///
/// Returns `None` only when there is no override and the platform has no
/// known default.
pub fn resolve_settings_directory(
    platform: PlatformId,
    override_dir: Option<&Path>,
    host: &HostEnvironment,
) -> Option<PathBuf> {
    if let Some(dir) = override_dir {
        return Some(dir.to_path_buf());
    }

    DEFAULT_SETTINGS_TABLE
        .iter()
        .find(|(id, _)| *id == platform)
        .map(|(_, default)| default(host))
}

/// Resolve the configuration directory: the override, or `<cwd>/Configurations`.
pub fn resolve_configuration_directory(
    override_dir: Option<&Path>,
    host: &HostEnvironment,
) -> PathBuf {
    match override_dir {
        Some(dir) => dir.to_path_buf(),
        None => host.current_dir().join(constants::CONFIGURATIONS_DIR_NAME),
    }
}

/// Resolve both directories for the host's platform.
pub fn resolve(overrides: &DirectoryOverride, host: &HostEnvironment) -> ResolvedDirectories {
    let settings =
        resolve_settings_directory(host.platform(), overrides.settings.as_deref(), host);
    let configuration =
        resolve_configuration_directory(overrides.configuration.as_deref(), host);
    ResolvedDirectories::new(settings, configuration)
}

// =============================================================================
// Unit tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_PLATFORMS: [PlatformId; 4] = [
        PlatformId::Windows,
        PlatformId::Unix,
        PlatformId::MacOS,
        PlatformId::Unknown,
    ];

    fn host(platform: PlatformId) -> HostEnvironment {
        HostEnvironment::new(platform, "/work")
            .with_local_app_data("/appdata/local")
            .with_home("/home/bob")
    }

    #[test]
    fn test_windows_default_uses_local_app_data() {
        let h = host(PlatformId::Windows);
        assert_eq!(
            resolve_settings_directory(PlatformId::Windows, None, &h),
            Some(Path::new("/appdata/local").join("OpenTabletDriver"))
        );
    }

    #[test]
    fn test_unix_default_uses_home_config() {
        let h = host(PlatformId::Unix);
        assert_eq!(
            resolve_settings_directory(PlatformId::Unix, None, &h),
            Some(PathBuf::from("/home/bob/.config/OpenTabletDriver"))
        );
    }

    #[test]
    fn test_macos_default_uses_application_support() {
        let h = host(PlatformId::MacOS);
        assert_eq!(
            resolve_settings_directory(PlatformId::MacOS, None, &h),
            Some(PathBuf::from(
                "/home/bob/Library/Application Support/OpenTabletDriver"
            ))
        );
    }

    #[test]
    fn test_unknown_platform_has_no_default() {
        let h = host(PlatformId::Unknown);
        assert_eq!(resolve_settings_directory(PlatformId::Unknown, None, &h), None);
    }

    #[test]
    fn test_settings_override_wins_on_every_platform() {
        let custom = Path::new("/tmp/custom");
        for platform in ALL_PLATFORMS {
            assert_eq!(
                resolve_settings_directory(platform, Some(custom), &host(platform)),
                Some(custom.to_path_buf()),
                "override ignored on {platform}"
            );
        }
    }

    /// Platform dispatch reads only its own variable.
    #[test]
    fn test_windows_default_ignores_home() {
        let h = HostEnvironment::new(PlatformId::Windows, "/work").with_home("/home/bob");
        assert_eq!(
            resolve_settings_directory(PlatformId::Windows, None, &h),
            Some(PathBuf::from("OpenTabletDriver"))
        );
    }

    /// The explicit platform argument decides, even if the host disagrees.
    #[test]
    fn test_platform_argument_wins_over_host_platform() {
        let h = host(PlatformId::Unknown);
        assert_eq!(
            resolve_settings_directory(PlatformId::Unix, None, &h),
            Some(PathBuf::from("/home/bob/.config/OpenTabletDriver"))
        );
        let h = host(PlatformId::Unix);
        assert_eq!(resolve_settings_directory(PlatformId::Unknown, None, &h), None);
    }

    #[test]
    fn test_missing_home_yields_relative_path() {
        let h = HostEnvironment::new(PlatformId::Unix, "/work");
        assert_eq!(
            resolve_settings_directory(PlatformId::Unix, None, &h),
            Some(PathBuf::from(".config/OpenTabletDriver"))
        );
    }

    #[test]
    fn test_configuration_default_is_cwd_configurations_on_every_platform() {
        for platform in ALL_PLATFORMS {
            assert_eq!(
                resolve_configuration_directory(None, &host(platform)),
                Path::new("/work").join("Configurations"),
                "wrong default on {platform}"
            );
        }
    }

    #[test]
    fn test_configuration_override_wins() {
        let h = host(PlatformId::MacOS);
        assert_eq!(
            resolve_configuration_directory(Some(Path::new("/etc/otd-config")), &h),
            PathBuf::from("/etc/otd-config")
        );
    }

    #[test]
    fn test_resolve_combines_both_kinds_using_host_platform() {
        let h = host(PlatformId::Unix);
        let overrides = DirectoryOverride {
            settings: None,
            configuration: Some(PathBuf::from("/srv/configs")),
        };
        let dirs = resolve(&overrides, &h);
        assert_eq!(
            dirs.settings_directory(),
            Some(Path::new("/home/bob/.config/OpenTabletDriver"))
        );
        assert_eq!(dirs.configuration_directory(), Path::new("/srv/configs"));
    }
}
