//! Pkgsum CLI Binary
//!
//! Command-line interface for building and verifying directory checksum
//! manifests.

use clap::Parser;
use pkgsum::cli::{execute, Cli, EXIT_ERROR};
use pkgsum::logging::init_logging;
use std::process;
use tracing::{error, info};

fn main() {
    let cli = Cli::parse();

    init_logging(if cli.verbose { "info" } else { "off" });
    info!("Pkgsum CLI starting");

    match execute(&cli) {
        Ok(code) => {
            info!(exit_code = code, "Command completed");
            process::exit(code);
        }
        Err(e) => {
            error!("Command failed: {}", e);
            eprintln!("Error: {}", e);
            process::exit(EXIT_ERROR);
        }
    }
}
