//! CLI parse: clap types for pkgsum. No behavior; definitions only.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Pkgsum CLI - Deterministic directory checksum manifests
#[derive(Parser)]
#[command(name = "pkgsum")]
#[command(about = "Build and verify per-file checksum manifests for a directory tree")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Package directory to checksum
    #[arg(short = 'p', long, default_value = ".", global = true)]
    pub package_path: PathBuf,

    /// Detailed checksum file name
    #[arg(short = 'd', long, default_value = "checksum_detailed.txt", global = true)]
    pub detailed_file: String,

    /// Global checksum file name
    #[arg(short = 'g', long, default_value = "checksum.txt", global = true)]
    pub global_file: String,

    /// Resolve checksum file names against the current directory instead of the package
    #[arg(long, global = true)]
    pub checksum_in_current_directory: bool,

    /// Hash algorithm (md5, sha1, sha256)
    #[arg(short = 'a', long, default_value = "md5", global = true)]
    pub algorithm: String,

    /// File selection policy
    #[arg(short = 't', long, value_enum, default_value = "full", global = true)]
    pub package_type: PackageType,

    /// Worker count for hash calculation (default: all cores)
    #[arg(long, global = true)]
    pub parallelism: Option<usize>,

    /// Output verbosity
    #[arg(short = 'v', long, value_enum, default_value = "normal", global = true)]
    pub verbosity: Verbosity,

    /// Result output format
    #[arg(long, value_enum, default_value = "text", global = true)]
    pub format: OutputFormat,

    /// Do not render progress to the console
    #[arg(long, global = true)]
    pub hide_progress: bool,

    /// Enable verbose logging (default: off)
    #[arg(long, default_value = "false", global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create checksum files; existing checksum files are replaced
    Create,
    /// Check the package against existing checksum files
    Check,
    /// Remove checksum files
    Clear,
}

/// File selection policy for the package.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PackageType {
    /// Every file under the package root
    Full,
    /// Patch area plus the latest file per archive module
    LatestPerModule,
}

/// Console output verbosity, lowest to highest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, ValueEnum)]
pub enum Verbosity {
    Silent,
    Terse,
    Normal,
    Verbose,
}

/// Result output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}
