// OTD GUI - ui/panels/directories.rs
//
// Read-only view of the directories the application was started with.

use crate::core::model::ResolvedDirectories;
use crate::ui::theme;
use std::path::Path;

/// Text shown in place of an absent directory.
pub const UNRESOLVED_LABEL: &str = "(not available on this platform)";

/// Display string for an optional directory.
pub fn display_value(dir: Option<&Path>) -> String {
    match dir {
        Some(dir) => dir.display().to_string(),
        None => UNRESOLVED_LABEL.to_string(),
    }
}

/// Render the settings/configuration directory grid.
pub fn render(ui: &mut egui::Ui, dirs: &ResolvedDirectories) {
    egui::Grid::new("resolved_directories")
        .num_columns(2)
        .spacing(theme::GRID_SPACING)
        .show(ui, |ui| {
            ui.strong("Settings directory");
            let settings = display_value(dirs.settings_directory());
            if dirs.settings_directory().is_some() {
                ui.monospace(settings);
            } else {
                ui.colored_label(theme::UNRESOLVED, settings);
            }
            ui.end_row();

            ui.strong("Configuration directory");
            ui.monospace(display_value(Some(dirs.configuration_directory())));
            ui.end_row();
        });
}
