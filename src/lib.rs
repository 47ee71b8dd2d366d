pub mod analysis;
pub mod checker;
pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod layout;
pub mod logging;
pub mod model;
pub mod output;
pub mod resolver;
pub mod scope;

#[cfg(test)]
mod test_fixtures;

pub use error::{CopyGuardError, Result};

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_VIOLATIONS_FOUND: i32 = 1;
pub const EXIT_ERROR: i32 = 2;

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
