//! Core scheduling functionality shared by the library and the CLI

pub mod catalog;
pub mod config;
pub mod export;
pub mod models;
pub mod report;
pub mod scheduler;

/// Returns the current version of the `SchedulAI` crate
#[must_use]
pub const fn get_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
