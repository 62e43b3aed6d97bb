//! CLI module
//!
//! - init: write default config, create an empty data file
//! - serve: boot the file store and the HTTP server
//! - query: one-shot query execution against the data file

mod args;
mod commands;
mod errors;

pub use args::{Cli, Command};
pub use commands::{init, query, run, serve};
pub use errors::{CliError, CliResult};
