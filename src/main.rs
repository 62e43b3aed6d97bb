//! logdeck CLI entry point
//!
//! Minimal by design: parse arguments, dispatch, print the error, exit
//! non-zero. All wiring lives in the cli module.

use logdeck::cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}
