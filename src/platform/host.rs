// OTD GUI - platform/host.rs
//
// Snapshot of the host facts the directory resolver depends on: platform,
// the two environment variables it may consult, and the working directory.
//
// The snapshot is taken once at startup. Tests build one by hand so the
// resolver can be exercised for every platform on any host.

use crate::core::model::PlatformId;
use crate::util::constants;
use crate::util::error::{BootstrapError, Result};
use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Immutable view of the host environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostEnvironment {
    platform: PlatformId,
    local_app_data: Option<OsString>,
    home: Option<OsString>,
    current_dir: PathBuf,
}

impl HostEnvironment {
    /// Read the real host: compile-time platform, `LOCALAPPDATA`, `HOME`,
    /// and the current working directory.
    pub fn capture() -> Result<Self> {
        let current_dir =
            std::env::current_dir().map_err(|source| BootstrapError::CurrentDir { source })?;
        let host = Self {
            platform: PlatformId::current(),
            local_app_data: std::env::var_os(constants::ENV_LOCAL_APP_DATA),
            home: std::env::var_os(constants::ENV_HOME),
            current_dir,
        };

        tracing::debug!(
            platform = %host.platform,
            cwd = %host.current_dir.display(),
            local_app_data = host.local_app_data.is_some(),
            home = host.home.is_some(),
            "Host environment captured"
        );

        Ok(host)
    }

    /// A host with no environment variables set.
    pub fn new(platform: PlatformId, current_dir: impl Into<PathBuf>) -> Self {
        Self {
            platform,
            local_app_data: None,
            home: None,
            current_dir: current_dir.into(),
        }
    }

    pub fn with_local_app_data(mut self, value: impl Into<OsString>) -> Self {
        self.local_app_data = Some(value.into());
        self
    }

    pub fn with_home(mut self, value: impl Into<OsString>) -> Self {
        self.home = Some(value.into());
        self
    }

    pub fn platform(&self) -> PlatformId {
        self.platform
    }

    /// Value of `LOCALAPPDATA`, if set.
    pub fn local_app_data(&self) -> Option<&Path> {
        self.local_app_data.as_deref().map(Path::new)
    }

    /// Value of `HOME`, if set.
    pub fn home(&self) -> Option<&Path> {
        self.home.as_deref().map(Path::new)
    }

    pub fn current_dir(&self) -> &Path {
        &self.current_dir
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_host_has_no_variables() {
        let host = HostEnvironment::new(PlatformId::Unix, "/work");
        assert_eq!(host.platform(), PlatformId::Unix);
        assert!(host.home().is_none());
        assert!(host.local_app_data().is_none());
        assert_eq!(host.current_dir(), Path::new("/work"));
    }

    #[test]
    fn test_builder_sets_variables() {
        let host = HostEnvironment::new(PlatformId::Windows, "/work")
            .with_local_app_data("/appdata")
            .with_home("/home/x");
        assert_eq!(host.local_app_data(), Some(Path::new("/appdata")));
        assert_eq!(host.home(), Some(Path::new("/home/x")));
    }

    #[test]
    fn test_capture_reads_real_working_directory() {
        let host = HostEnvironment::capture().expect("cwd should be readable in tests");
        assert_eq!(host.platform(), PlatformId::current());
        assert_eq!(host.current_dir(), std::env::current_dir().unwrap());
    }
}
