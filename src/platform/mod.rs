// OTD GUI - platform/mod.rs
//
// Platform abstraction layer.
// Dependencies: standard library, core::model, util.
// Must NOT depend on: app, ui.

pub mod host;
