//! salaries CLI entry point
//!
//! Parses arguments and dispatches through `cli::run`. Errors are printed to
//! stderr with a non-zero exit code; everything else lives in the library.

use salaries::cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}
