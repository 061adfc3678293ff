// OTD GUI - app/mod.rs
//
// Application layer: command line, fault reporting, startup sequencing.
// Dependencies: core, platform, util.
// Must NOT depend on: ui.

pub mod bootstrap;
pub mod cli;
pub mod reporter;
