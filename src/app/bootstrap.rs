// OTD GUI - app/bootstrap.rs
//
// Startup sequence. Runs once, on the main thread, in this order:
//
//   1. Tag the startup thread (tracing span)
//   2. Capture the host environment (platform, env vars, cwd)
//   3. Parse the command line
//   4. Resolve directories into an immutable shared value
//   5. Install the fatal fault reporter
//   6. Hand over to the GUI subsystem
//
// No step is retried; a failing step ends the sequence. The thread tag stays
// in place while the GUI runs on this thread. A panic that unwinds out of the
// GUI is caught here and its queued reports are returned to the caller, since
// the GUI can no longer display them.

use crate::app::cli;
use crate::app::reporter::{self, FaultInbox};
use crate::core::model::{FatalReport, ResolvedDirectories};
use crate::core::resolver;
use crate::platform::host::HostEnvironment;
use crate::util::constants;
use crate::util::error::Result;
use std::ffi::OsString;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;

/// When the GUI subsystem should end the process.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShutdownPolicy {
    /// Return from the event loop once the last top-level window has closed.
    OnLastWindowClose,
}

/// Everything the GUI subsystem receives from startup.
#[derive(Debug)]
pub struct Startup {
    /// Resolved directories, read-only for the rest of the process.
    pub directories: Arc<ResolvedDirectories>,
    /// Fatal reports raised on any thread; drained on the GUI thread.
    pub faults: FaultInbox,
    pub shutdown: ShutdownPolicy,
}

/// The windowing subsystem that takes over once startup is complete.
pub trait GuiSubsystem {
    /// Run the GUI until it shuts down according to `startup.shutdown`.
    fn start(self, startup: Startup) -> Result<()>;
}

/// How the GUI subsystem ended.
#[derive(Debug)]
pub enum GuiExit {
    /// The shutdown policy was met.
    Closed,
    /// The GUI thread panicked. Holds every report still queued at that
    /// point, including the one for the GUI panic itself.
    Faulted(Vec<FatalReport>),
}

/// Run the full startup sequence and then the GUI.
///
/// `args` includes the program name. `capture_host` is called exactly once,
/// after the thread has been tagged and before the arguments are parsed.
pub fn run<I, T, P, G>(args: I, capture_host: P, gui: G) -> Result<GuiExit>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
    P: FnOnce() -> Result<HostEnvironment>,
    G: GuiSubsystem,
{
    let span = tracing::info_span!("app", thread = constants::STARTUP_THREAD_TAG);
    let _entered = span.enter();

    let startup = prepare(args, capture_host)?;
    let faults = startup.faults.clone();

    match panic::catch_unwind(AssertUnwindSafe(|| gui.start(startup))) {
        Ok(result) => result.map(|()| GuiExit::Closed),
        Err(_) => {
            let reports = faults.poll();
            tracing::error!(
                reports = reports.len(),
                "GUI thread panicked; undisplayed fault reports handed back"
            );
            Ok(GuiExit::Faulted(reports))
        }
    }
}

/// Steps 2 to 5: everything up to, but not including, the GUI hand-over.
fn prepare<I, T, P>(args: I, capture_host: P) -> Result<Startup>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
    P: FnOnce() -> Result<HostEnvironment>,
{
    let host = capture_host()?;
    tracing::info!(
        version = constants::APP_VERSION,
        platform = %host.platform(),
        "OpenTabletDriver GUI starting"
    );

    let overrides = cli::parse_overrides(args)?;

    let directories = Arc::new(resolver::resolve(&overrides, &host));
    match directories.settings_directory() {
        Some(dir) => tracing::info!(
            path = %dir.display(),
            overridden = overrides.settings.is_some(),
            "Settings directory resolved"
        ),
        None => tracing::warn!(
            platform = %host.platform(),
            "No settings directory for this platform; settings will not be persisted"
        ),
    }
    tracing::info!(
        path = %directories.configuration_directory().display(),
        overridden = overrides.configuration.is_some(),
        "Configuration directory resolved"
    );

    let (fault_reporter, faults) = reporter::fault_channel();
    fault_reporter.install();

    Ok(Startup {
        directories,
        faults,
        shutdown: ShutdownPolicy::OnLastWindowClose,
    })
}

// =============================================================================
// Unit tests
// =============================================================================
//
// Only failure paths are covered here: a successful run installs the global
// panic hook, which would swallow assertion messages of unrelated tests in
// this binary. The happy path lives in tests/e2e_bootstrap.rs.
