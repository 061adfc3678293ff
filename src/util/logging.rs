// OTD GUI - util/logging.rs
//
// Structured logging to stderr.
//
// Activation:
//   - Environment variable: RUST_LOG=debug (or trace, or a full filter)
//
// Thread names are included in every line so the tagged startup span and
// faults raised on worker threads can be told apart.

use tracing_subscriber::EnvFilter;

/// Initialise the logging subsystem.
///
/// Priority: RUST_LOG env var > default "info".
///
/// Safe to call more than once; later calls leave the first subscriber in place.
pub fn init() {
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else {
        EnvFilter::new(super::constants::DEFAULT_LOG_LEVEL)
    };

    let installed = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(true)
        .with_thread_names(true)
        .with_file(true)
        .with_line_number(true)
        .compact()
        .try_init()
        .is_ok();

    if installed {
        tracing::debug!(
            app = super::constants::APP_NAME,
            version = super::constants::APP_VERSION,
            "Logging initialised"
        );
    }
}
