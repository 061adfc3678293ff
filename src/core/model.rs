// OTD GUI - core/model.rs
//
// Core data types shared across all layers.
// These types have no I/O dependencies and are fully testable in isolation.

use std::path::{Path, PathBuf};

// =============================================================================
// Platform
// =============================================================================

/// Host operating system family, as far as directory defaults are concerned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlatformId {
    Windows,
    Unix,
    MacOS,
    /// A target with no known settings location.
    Unknown,
}

impl PlatformId {
    /// The platform this binary was compiled for.
    pub fn current() -> Self {
        if cfg!(target_os = "windows") {
            Self::Windows
        } else if cfg!(target_os = "macos") {
            Self::MacOS
        } else if cfg!(unix) {
            Self::Unix
        } else {
            Self::Unknown
        }
    }
}

impl std::fmt::Display for PlatformId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Windows => write!(f, "Windows"),
            Self::Unix => write!(f, "Unix"),
            Self::MacOS => write!(f, "macOS"),
            Self::Unknown => write!(f, "Unknown"),
        }
    }
}

// =============================================================================
// Directories
// =============================================================================

/// Directory overrides supplied on the command line.
///
/// A field is `Some` only when the corresponding flag was given a value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DirectoryOverride {
    /// `--settingsDir` / `-s`.
    pub settings: Option<PathBuf>,
    /// `--configDir` / `-c`.
    pub configuration: Option<PathBuf>,
}

/// The settings and configuration directories the application runs with.
///
/// Built once during startup by [`crate::core::resolver::resolve`] and then
/// shared read-only (typically behind an `Arc`). There are no setters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedDirectories {
    settings_directory: Option<PathBuf>,
    configuration_directory: PathBuf,
}

impl ResolvedDirectories {
    pub(crate) fn new(settings_directory: Option<PathBuf>, configuration_directory: PathBuf) -> Self {
        Self {
            settings_directory,
            configuration_directory,
        }
    }

    /// Directory holding user settings, or `None` when the platform has no
    /// default and no override was given.
    pub fn settings_directory(&self) -> Option<&Path> {
        self.settings_directory.as_deref()
    }

    /// Directory holding tablet configurations. Always present.
    pub fn configuration_directory(&self) -> &Path {
        &self.configuration_directory
    }
}

// =============================================================================
// Fault reports
// =============================================================================

/// A fatal fault, formatted for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FatalReport {
    /// Window title; always [`crate::util::constants::FATAL_REPORT_TITLE`].
    pub title: String,
    /// Fully-qualified type name of the fault.
    pub header: String,
    /// Type, message, cause chain, location and backtrace.
    pub body: String,
}
