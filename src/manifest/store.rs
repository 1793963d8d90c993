//! Manifest persistence as a flat text file pair.
//!
//! The global file holds one hash line; the detailed file holds one
//! `path;hash` CRLF line per entry in ascending path order. Both are
//! written verbatim from the in-memory manifest so a round trip preserves
//! the global hash text exactly.

use crate::error::ChecksumError;
use crate::manifest::{FileEntry, Manifest, FIELD_SEPARATOR};
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;
use tracing::debug;

/// Locations of the two manifest artifacts.
#[derive(Debug, Clone)]
pub struct ManifestPaths {
    pub detailed: PathBuf,
    pub global: PathBuf,
}

impl ManifestPaths {
    pub fn new(detailed: PathBuf, global: PathBuf) -> Self {
        Self { detailed, global }
    }

    /// Paths the hash builder must exclude so a manifest never hashes
    /// itself.
    pub fn excluded(&self) -> Vec<PathBuf> {
        vec![self.detailed.clone(), self.global.clone()]
    }
}

/// Write the manifest file pair.
pub fn write(manifest: &Manifest, paths: &ManifestPaths) -> Result<(), ChecksumError> {
    fs::write(&paths.detailed, &manifest.detailed_text)?;
    fs::write(&paths.global, &manifest.global_hash)?;
    debug!(
        detailed = %paths.detailed.display(),
        global = %paths.global.display(),
        "Wrote manifest files"
    );
    Ok(())
}

/// Read a previously written manifest pair.
///
/// Returns `Ok(None)` when either file is absent: the distinct
/// "no baseline" condition, not an error. Detail lines that do not split
/// into exactly `path;hash` are skipped.
pub fn read(paths: &ManifestPaths) -> Result<Option<Manifest>, ChecksumError> {
    if !paths.global.is_file() || !paths.detailed.is_file() {
        return Ok(None);
    }

    let global_hash = fs::read_to_string(&paths.global)?;
    let detailed_text = fs::read_to_string(&paths.detailed)?;

    let mut entries = Vec::new();
    for line in detailed_text.lines() {
        let fields: Vec<&str> = line.split(FIELD_SEPARATOR).collect();
        if fields.len() != 2 {
            continue;
        }
        entries.push(FileEntry {
            relative_path: fields[0].to_string(),
            content_hash: fields[1].to_string(),
            length: 0,
        });
    }

    Ok(Some(Manifest {
        entries,
        detailed_text,
        global_hash,
    }))
}

/// Delete both manifest files; absent files are not an error.
pub fn clear(paths: &ManifestPaths) -> Result<(), ChecksumError> {
    for path in [&paths.detailed, &paths.global] {
        match fs::remove_file(path) {
            Ok(()) => {}
            Err(e) if e.kind() == ErrorKind::NotFound => {}
            Err(e) => return Err(e.into()),
        }
    }
    Ok(())
}
