pub mod cli;
pub mod commands;
pub mod config;
pub mod dataset;
pub mod engine;
pub mod error;
pub mod logging;
pub mod output;
pub mod report;

pub use error::{InsightsError, Result};

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_SECTION_ERROR: i32 = 1;
pub const EXIT_CONFIG_ERROR: i32 = 2;

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
