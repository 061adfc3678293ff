// OTD GUI - core/mod.rs
//
// Core logic layer: data model, directory resolution, fault formatting.
// Dependencies: standard library, platform::host (read-only snapshot), util.
// Must NOT depend on: ui, app.

pub mod fault;
pub mod model;
pub mod resolver;
