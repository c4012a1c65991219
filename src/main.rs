//! Starblog CLI entry point
//!
//! Parses arguments, runs the selected command and exits non-zero on
//! failure. Everything else lives in the `cli` module.

use starblog::cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}
