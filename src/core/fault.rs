// OTD GUI - core/fault.rs
//
// Fault payloads and fatal report formatting.
//
// Any code that hits an unrecoverable error can call `raise(error)`, which
// panics with an `UnhandledFault` carrying the error's type name and cause
// chain. Plain `panic!` messages are understood too. The panic hook turns
// whichever payload arrives into a `FatalReport` via `fatal_report`.

use crate::core::model::FatalReport;
use crate::util::constants;
use std::any::Any;
use std::backtrace::Backtrace;
use std::error::Error;
use std::fmt;
use std::panic::Location;

/// Panic payload describing an error that escaped all other handling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnhandledFault {
    type_name: &'static str,
    message: String,
    causes: Vec<String>,
}

impl UnhandledFault {
    /// Capture `error`'s type name, message and `source()` chain.
    pub fn new<E: Error + 'static>(error: E) -> Self {
        let mut causes = Vec::new();
        let mut source = error.source();
        while let Some(cause) = source {
            causes.push(cause.to_string());
            source = cause.source();
        }
        Self {
            type_name: std::any::type_name::<E>(),
            message: error.to_string(),
            causes,
        }
    }

    /// Build a fault from any panic payload.
    ///
    /// Unrecognised payload types are replaced by an [`UnknownFault`]
    /// placeholder so the caller always gets something to report.
    pub fn from_payload(payload: &(dyn Any + Send)) -> Self {
        if let Some(fault) = payload.downcast_ref::<UnhandledFault>() {
            fault.clone()
        } else if let Some(message) = payload.downcast_ref::<&'static str>() {
            Self::from_message::<&'static str>(message)
        } else if let Some(message) = payload.downcast_ref::<String>() {
            Self::from_message::<String>(message)
        } else {
            Self::new(UnknownFault)
        }
    }

    fn from_message<T: ?Sized>(message: &str) -> Self {
        Self {
            type_name: std::any::type_name::<T>(),
            message: message.to_owned(),
            causes: Vec::new(),
        }
    }

    /// Fully-qualified type name of the original error or payload.
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for UnhandledFault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.type_name, self.message)?;
        for cause in &self.causes {
            write!(f, "\nCaused by: {cause}")?;
        }
        Ok(())
    }
}

/// Placeholder used when a panic payload carries nothing we can describe.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnknownFault;

impl fmt::Display for UnknownFault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "panic payload of unknown type")
    }
}

impl Error for UnknownFault {}

/// Abort the current operation with `error` as an unhandled fault.
///
/// The installed panic hook reports it; on a worker thread only that thread
/// unwinds.
pub fn raise<E: Error + 'static>(error: E) -> ! {
    std::panic::panic_any(UnhandledFault::new(error))
}

/// Format a fault for display.
pub fn fatal_report(
    fault: &UnhandledFault,
    location: Option<&Location<'_>>,
    backtrace: Option<&Backtrace>,
) -> FatalReport {
    let mut body = fault.to_string();
    if let Some(location) = location {
        body.push_str(&format!("\n   at {location}"));
    }
    if let Some(backtrace) = backtrace {
        body.push_str(&format!("\n\nStack backtrace:\n{backtrace}"));
    }

    FatalReport {
        title: constants::FATAL_REPORT_TITLE.to_owned(),
        header: fault.type_name().to_owned(),
        body,
    }
}
