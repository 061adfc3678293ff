// OTD GUI - main.rs
//
// Application entry point:
// 1. Logging initialisation
// 2. Startup sequence (directories, fault reporter)
// 3. eframe GUI launch

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod gui;

// Re-export modules from the library crate so that `gui.rs` can still use
// `crate::app::...`, `crate::core::...` etc.
pub use otd_gui::app;
pub use otd_gui::core;
pub use otd_gui::platform;
pub use otd_gui::ui;
pub use otd_gui::util;

use crate::app::bootstrap::GuiExit;
use crate::platform::host::HostEnvironment;
use crate::util::error::BootstrapError;

fn main() {
    util::logging::init();

    let result = app::bootstrap::run(
        std::env::args_os(),
        HostEnvironment::capture,
        gui::EframeGui,
    );

    match result {
        Ok(GuiExit::Closed) => {}
        Ok(GuiExit::Faulted(reports)) => {
            gui::show_fatal_reports(&reports);
            std::process::exit(1);
        }
        // clap owns the exit policy: usage text, `--help`, `--version`, exit code.
        Err(BootstrapError::Args(e)) => e.exit(),
        Err(e) => {
            tracing::error!(error = %e, "Startup failed");
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}
