//! CLI module for Starblog
//!
//! Provides command-line interface for:
//! - serve: Open the store and run the HTTP server
//! - seed: Load reference data into the store

mod args;
mod commands;
mod errors;

pub use args::{Cli, Command, DatabaseArgs, ServerArgs};
pub use commands::{run, run_command, seed, serve};
pub use errors::{CliError, CliErrorCode, CliResult};
