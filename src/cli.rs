//! CLI domain: parse, run, and output formatting only.
//! No hashing logic; the run table dispatches to the manifest services.

mod output;
mod parse;
mod run;

pub use output::{format_check_json, format_check_text, format_create_text};
pub use parse::{Cli, Commands, OutputFormat, PackageType, Verbosity};
pub use run::{execute, EXIT_ERROR, EXIT_MISMATCH, EXIT_OK};
