// OTD GUI - util/constants.rs
//
// Single source of truth for all named constants and defaults.

// =============================================================================
// Application metadata
// =============================================================================

/// Application display name, also used as the CLI command name.
pub const APP_NAME: &str = "OpenTabletDriver";

/// Current application version.
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Diagnostic tag attached to the startup thread.
pub const STARTUP_THREAD_TAG: &str = "OpenTabletDriverGUI";

// =============================================================================
// Directory layout
// =============================================================================

/// Leaf directory name of the settings directory on every platform.
pub const SETTINGS_DIR_NAME: &str = "OpenTabletDriver";

/// Configuration directory name, relative to the working directory.
pub const CONFIGURATIONS_DIR_NAME: &str = "Configurations";

/// Path segments between `$HOME` and the settings directory on Unix.
pub const UNIX_SETTINGS_PARENT: &[&str] = &[".config"];

/// Path segments between `$HOME` and the settings directory on macOS.
pub const MACOS_SETTINGS_PARENT: &[&str] = &["Library", "Application Support"];

/// Environment variable holding the per-user local application data root (Windows).
pub const ENV_LOCAL_APP_DATA: &str = "LOCALAPPDATA";

/// Environment variable holding the user's home directory (Unix, macOS).
pub const ENV_HOME: &str = "HOME";

// =============================================================================
// Fatal fault reporting
// =============================================================================

/// Title of the fatal fault report window.
pub const FATAL_REPORT_TITLE: &str = "Fatal Exception";

/// How often the GUI wakes to drain queued fault reports while idle (ms).
pub const FAULT_POLL_INTERVAL_MS: u64 = 250;

/// Minimum width of the fatal report window in points.
pub const FATAL_REPORT_MIN_WIDTH: f32 = 480.0;

/// Maximum height of the scrollable report body in points.
pub const FATAL_REPORT_BODY_MAX_HEIGHT: f32 = 320.0;

// =============================================================================
// Window
// =============================================================================

/// Initial inner size of the main window.
pub const MAIN_WINDOW_SIZE: [f32; 2] = [720.0, 480.0];

/// Minimum inner size of the main window.
pub const MAIN_WINDOW_MIN_SIZE: [f32; 2] = [480.0, 320.0];

// =============================================================================
// Logging
// =============================================================================

/// Default log level.
pub const DEFAULT_LOG_LEVEL: &str = "info";
