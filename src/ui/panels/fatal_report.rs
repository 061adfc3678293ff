// OTD GUI - ui/panels/fatal_report.rs
//
// Fatal report dialog: a centred, non-resizable, non-collapsible window
// showing the oldest pending report. Reports are shown one at a time and
// dismissed with "Close". The caller disables the rest of the UI while any
// report is pending.

use crate::core::model::FatalReport;
use crate::ui::theme;
use crate::util::constants;
use std::collections::VecDeque;

/// Render the dialog for the front of `pending`, if any.
pub fn render(ctx: &egui::Context, pending: &mut VecDeque<FatalReport>) {
    let Some(report) = pending.front() else {
        return;
    };
    let queued = pending.len() - 1;
    let mut close = false;

    egui::Window::new(report.title.as_str())
        .id(egui::Id::new("fatal_report"))
        .collapsible(false)
        .resizable(false)
        .min_width(constants::FATAL_REPORT_MIN_WIDTH)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .order(egui::Order::Foreground)
        .show(ctx, |ui| {
            ui.label(
                egui::RichText::new(report.header.as_str())
                    .size(16.0)
                    .strong()
                    .color(theme::FATAL_HEADER),
            );
            ui.separator();

            egui::ScrollArea::vertical()
                .max_height(constants::FATAL_REPORT_BODY_MAX_HEIGHT)
                .show(ui, |ui| {
                    ui.label(egui::RichText::new(report.body.as_str()).monospace());
                });

            ui.separator();
            ui.horizontal(|ui| {
                if ui.button("Copy").clicked() {
                    ui.ctx().copy_text(report.body.clone());
                }
                if ui.button("Close").clicked() {
                    close = true;
                }
                if queued > 0 {
                    ui.label(egui::RichText::new(format!("{queued} more pending")).weak());
                }
            });
        });

    if close {
        pending.pop_front();
    }
}
