// OTD GUI - gui.rs
//
// Top-level eframe::App implementation and the eframe-backed GUI subsystem.
// Hosts the main window and surfaces fatal reports queued by the panic hook.
// Reports left over after the GUI thread itself panicked are shown with a
// native message box, since no egui frame can be drawn any more.

use crate::app::bootstrap::{GuiSubsystem, ShutdownPolicy, Startup};
use crate::app::reporter::FaultInbox;
use crate::core::model::{FatalReport, ResolvedDirectories};
use crate::ui::panels::{directories, fatal_report};
use crate::util::constants;
use crate::util::error::Result;
use std::collections::VecDeque;
use std::sync::Arc;
use std::time::Duration;

/// The OpenTabletDriver GUI shell.
pub struct OtdApp {
    directories: Arc<ResolvedDirectories>,
    faults: FaultInbox,
    pending_reports: VecDeque<FatalReport>,
}

impl OtdApp {
    pub fn new(startup: Startup) -> Self {
        Self {
            directories: startup.directories,
            faults: startup.faults,
            pending_reports: VecDeque::new(),
        }
    }
}

impl eframe::App for OtdApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let reports = self.faults.poll();
        if !reports.is_empty() {
            tracing::info!(count = reports.len(), "Displaying fatal report");
            self.pending_reports.extend(reports);
        }

        let interactive = self.pending_reports.is_empty();
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.add_enabled_ui(interactive, |ui| {
                ui.heading(constants::APP_NAME);
                ui.add_space(8.0);
                directories::render(ui, &self.directories);
            });
        });

        fatal_report::render(ctx, &mut self.pending_reports);

        // Faults can arrive while the UI is idle; wake up to check.
        ctx.request_repaint_after(Duration::from_millis(constants::FAULT_POLL_INTERVAL_MS));
    }
}

/// Runs [`OtdApp`] with eframe on the calling (main) thread.
pub struct EframeGui;

impl GuiSubsystem for EframeGui {
    fn start(self, startup: Startup) -> Result<()> {
        let run_and_return = match startup.shutdown {
            ShutdownPolicy::OnLastWindowClose => true,
        };

        let native_options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_title(format!(
                    "{} v{}",
                    constants::APP_NAME,
                    constants::APP_VERSION
                ))
                .with_inner_size(constants::MAIN_WINDOW_SIZE)
                .with_min_inner_size(constants::MAIN_WINDOW_MIN_SIZE),
            run_and_return,
            ..Default::default()
        };

        tracing::info!("Starting GUI");
        eframe::run_native(
            constants::APP_NAME,
            native_options,
            Box::new(move |_cc| Ok(Box::new(OtdApp::new(startup)))),
        )?;

        tracing::info!("Last window closed; shutting down");
        Ok(())
    }
}

/// Show each report in a native modal error dialog, one after another.
pub fn show_fatal_reports(reports: &[FatalReport]) {
    for report in reports {
        rfd::MessageDialog::new()
            .set_level(rfd::MessageLevel::Error)
            .set_title(report.title.as_str())
            .set_description(format!("{}\n\n{}", report.header, report.body))
            .set_buttons(rfd::MessageButtons::Ok)
            .show();
    }
}
