// OTD GUI - ui/mod.rs
//
// UI layer: presentation only.
// Dependencies: core (read-only models), util, egui.
// Must NOT depend on: app, platform.

pub mod panels;
pub mod theme;
