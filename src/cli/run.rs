//! CLI run: resolves options and dispatches create/check/clear.

use crate::cli::output::{format_check_json, format_check_text, format_create_text};
use crate::cli::parse::{Cli, Commands, OutputFormat, PackageType, Verbosity};
use crate::error::ChecksumError;
use crate::hash::Algorithm;
use crate::lister::{FileLister, FullDirectoryLister, LatestPerModuleLister};
use crate::manifest::builder::HashBuilder;
use crate::manifest::compare::compare;
use crate::manifest::store::{self, ManifestPaths};
use crate::manifest::Manifest;
use crate::progress::{ConsoleProgress, NullObserver, ProgressObserver};
use std::path::{Path, PathBuf};
use tracing::info;

/// Run completed; for a check, everything matched.
pub const EXIT_OK: i32 = 0;
/// Configuration or I/O failure; no usable result.
pub const EXIT_ERROR: i32 = 1;
/// Check ran to completion but the package does not match the baseline.
pub const EXIT_MISMATCH: i32 = 2;

/// Execute the parsed command and return the process exit code.
pub fn execute(cli: &Cli) -> Result<i32, ChecksumError> {
    if !cli.package_path.is_dir() {
        return Err(ChecksumError::PackageNotFound(cli.package_path.clone()));
    }
    let package_root = cli.package_path.canonicalize()?;
    let paths = resolve_manifest_paths(cli, &package_root);

    match cli.command {
        Commands::Create => run_create(cli, &package_root, &paths),
        Commands::Check => run_check(cli, &package_root, &paths),
        Commands::Clear => {
            store::clear(&paths)?;
            info!("Checksum files removed");
            Ok(EXIT_OK)
        }
    }
}

fn run_create(
    cli: &Cli,
    package_root: &Path,
    paths: &ManifestPaths,
) -> Result<i32, ChecksumError> {
    let manifest = build_manifest(cli, package_root, paths)?;
    store::write(&manifest, paths)?;

    print!("{}", format_create_text(&manifest, cli.verbosity));
    Ok(EXIT_OK)
}

fn run_check(cli: &Cli, package_root: &Path, paths: &ManifestPaths) -> Result<i32, ChecksumError> {
    let expected = store::read(paths)?.ok_or(ChecksumError::MissingBaseline)?;
    let actual = build_manifest(cli, package_root, paths)?;

    let result = compare(Some(&actual), Some(&expected));
    match cli.format {
        OutputFormat::Json => println!("{}", format_check_json(&result)?),
        OutputFormat::Text => print!("{}", format_check_text(&result, cli.verbosity)),
    }

    if result.global_match {
        Ok(EXIT_OK)
    } else {
        Ok(EXIT_MISMATCH)
    }
}

fn build_manifest(
    cli: &Cli,
    package_root: &Path,
    paths: &ManifestPaths,
) -> Result<Manifest, ChecksumError> {
    let algorithm: Algorithm = cli.algorithm.parse()?;
    let lister: Box<dyn FileLister> = match cli.package_type {
        PackageType::Full => Box::new(FullDirectoryLister),
        PackageType::LatestPerModule => Box::new(LatestPerModuleLister::default()),
    };

    let console = (!cli.hide_progress && cli.verbosity > Verbosity::Silent)
        .then(ConsoleProgress::new);
    let observer: &dyn ProgressObserver = match &console {
        Some(console) => console,
        None => &NullObserver,
    };

    let result = HashBuilder::new(package_root.to_path_buf(), algorithm, observer)
        .with_excluded_paths(paths.excluded())
        .with_parallelism(cli.parallelism)
        .build(lister.as_ref());

    // The renderer must erase its line even when the build fails, or the
    // error print lands on top of a stale progress row.
    if let Some(console) = &console {
        console.finish();
    }
    result
}

/// Resolve the manifest file pair, either inside the package or relative
/// to the invocation directory.
fn resolve_manifest_paths(cli: &Cli, package_root: &Path) -> ManifestPaths {
    let resolve = |name: &str| -> PathBuf {
        if cli.checksum_in_current_directory {
            PathBuf::from(name)
        } else {
            package_root.join(name)
        }
    };
    ManifestPaths::new(resolve(&cli.detailed_file), resolve(&cli.global_file))
}
