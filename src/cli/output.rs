//! Result formatters for check and create output.

use crate::error::ChecksumError;
use crate::manifest::compare::{ComparisonResult, Outcome};
use crate::manifest::Manifest;
use crate::cli::parse::Verbosity;
use owo_colors::OwoColorize;

/// Format a check result for the terminal, filtered by verbosity.
///
/// Silent prints nothing. Terse prints the summary banner only. Normal
/// adds one row per non-`Same` file; Verbose shows `Same` rows too.
pub fn format_check_text(result: &ComparisonResult, verbosity: Verbosity) -> String {
    let mut out = String::new();

    if verbosity > Verbosity::Silent {
        let summary = format!("Checksum verified ({} files)", result.entries.len());
        if result.global_match {
            out.push_str(&format!("{}: {}\n", summary, "SUCCESS".green()));
        } else {
            out.push_str(&format!("{}: {}\n", summary, "FAILED".red()));
        }
    }

    if verbosity >= Verbosity::Normal {
        for entry in &result.entries {
            if entry.outcome == Outcome::Same && verbosity < Verbosity::Verbose {
                continue;
            }
            let outcome = match entry.outcome {
                Outcome::Same => entry.outcome.green().to_string(),
                Outcome::Unexpected => entry.outcome.yellow().to_string(),
                Outcome::Missing | Outcome::Different => entry.outcome.red().to_string(),
            };
            out.push_str(&format!(" {}: {}\n", entry.relative_path, outcome));
        }
    }

    out
}

/// Format a check result as JSON.
pub fn format_check_json(result: &ComparisonResult) -> Result<String, ChecksumError> {
    serde_json::to_string_pretty(result)
        .map_err(|e| ChecksumError::Io(std::io::Error::new(std::io::ErrorKind::Other, e)))
}

/// Format a create result, filtered by verbosity.
pub fn format_create_text(manifest: &Manifest, verbosity: Verbosity) -> String {
    let mut out = String::new();

    if verbosity > Verbosity::Silent {
        out.push_str(&format!(
            "Checksum files created ({} files)\n",
            manifest.entries.len()
        ));
    }

    if verbosity >= Verbosity::Verbose {
        out.push_str(&format!("Global hash: {}\n", manifest.global_hash_value()));
        for entry in &manifest.entries {
            out.push_str(&format!(" {}: {}\n", entry.relative_path, entry.content_hash));
        }
    }

    out
}
