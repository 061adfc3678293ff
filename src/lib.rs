// OTD GUI - lib.rs
//
// Library entry point, exposing all non-GUI-shell modules for integration
// testing and for collaborators that read the resolved directories.
//
// The eframe `App` implementation lives in `gui.rs` on the binary side and
// is not part of the library surface.

pub mod app;
pub mod core;
pub mod platform;
pub mod ui;
pub mod util;
