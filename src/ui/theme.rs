// OTD GUI - ui/theme.rs
//
// Colours and layout constants for the host shell and fault dialog.

use egui::Color32;

/// Header colour of the fatal report (fault type name).
pub const FATAL_HEADER: Color32 = Color32::from_rgb(220, 38, 38); // Red 600

/// Colour used for an unresolved directory value.
pub const UNRESOLVED: Color32 = Color32::from_rgb(217, 119, 6); // Amber 600

/// Spacing between grid rows.
pub const GRID_SPACING: [f32; 2] = [12.0, 6.0];
