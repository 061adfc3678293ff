// OTD GUI - ui/panels/mod.rs

pub mod directories;
pub mod fatal_report;
