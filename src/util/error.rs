// OTD GUI - util/error.rs
//
// Typed error hierarchy for the startup sequence.
// All errors preserve the causal chain for diagnostic logging.
//
// An absent settings directory is deliberately NOT an error: it is returned
// as `None` by the resolver and callers decide what to do with it.

use std::fmt;
use std::io;

/// Top-level error type for the startup sequence.
#[derive(Debug)]
pub enum BootstrapError {
    /// Command-line arguments could not be parsed (includes `--help` and
    /// `--version`, which clap reports through the same path).
    Args(clap::Error),

    /// The current working directory could not be read.
    CurrentDir { source: io::Error },

    /// The windowing subsystem failed to start or exited with an error.
    Gui(eframe::Error),
}

impl fmt::Display for BootstrapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Args(e) => write!(f, "Invalid command line: {e}"),
            Self::CurrentDir { source } => {
                write!(f, "Could not determine the current working directory: {source}")
            }
            Self::Gui(e) => write!(f, "GUI subsystem error: {e}"),
        }
    }
}

impl std::error::Error for BootstrapError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Args(e) => Some(e),
            Self::CurrentDir { source } => Some(source),
            Self::Gui(e) => Some(e),
        }
    }
}

impl From<clap::Error> for BootstrapError {
    fn from(e: clap::Error) -> Self {
        Self::Args(e)
    }
}

impl From<eframe::Error> for BootstrapError {
    fn from(e: eframe::Error) -> Self {
        Self::Gui(e)
    }
}

/// Convenience type alias for startup results.
pub type Result<T> = std::result::Result<T, BootstrapError>;
