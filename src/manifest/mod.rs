//! Manifest data model and serialization.
//!
//! A manifest is fully determined by its entry set: two builds over
//! unchanged content produce byte-identical `detailed_text` and
//! `global_hash`, independent of enumeration or hashing order.

pub mod builder;
pub mod compare;
pub mod store;

use crate::hash::Algorithm;
use serde::Serialize;

/// Line terminator used by both manifest artifacts.
pub const LINE_TERMINATOR: &str = "\r\n";

/// Field separator between path and hash on a detailed manifest line.
pub const FIELD_SEPARATOR: char = ';';

/// One hashed file inside a manifest. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileEntry {
    /// Package-root-relative path; unique within one manifest.
    pub relative_path: String,
    /// Uppercase hex digest of the file content.
    pub content_hash: String,
    /// Byte length at stat time. Used only for progress weighting; entries
    /// loaded from disk carry zero.
    pub length: u64,
}

/// Sorted per-file hashes plus the aggregate hash over their serialization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Manifest {
    /// Entries in ascending byte-ordinal `relative_path` order.
    pub entries: Vec<FileEntry>,
    /// One `path;hash` CRLF line per entry, in entry order.
    pub detailed_text: String,
    /// Hash of `detailed_text` followed by CRLF.
    pub global_hash: String,
}

impl Manifest {
    /// Assemble a manifest from unordered entries.
    ///
    /// Sorts by relative path, serializes, and computes the global hash
    /// with the given algorithm. This sort is what makes the output
    /// independent of filesystem enumeration order and of which hashing
    /// worker finished first.
    pub fn from_entries(mut entries: Vec<FileEntry>, algorithm: Algorithm) -> Self {
        entries.sort_by(|a, b| a.relative_path.as_bytes().cmp(b.relative_path.as_bytes()));
        let detailed_text = serialize_entries(&entries);
        let global_hash = format!(
            "{}{}",
            algorithm.hasher().hash_str(&detailed_text),
            LINE_TERMINATOR
        );
        Self {
            entries,
            detailed_text,
            global_hash,
        }
    }

    /// The aggregate hash without its trailing line terminator.
    pub fn global_hash_value(&self) -> &str {
        self.global_hash.trim_end_matches(['\r', '\n'])
    }
}

fn serialize_entries(entries: &[FileEntry]) -> String {
    let mut text = String::new();
    for entry in entries {
        text.push_str(&entry.relative_path);
        text.push(FIELD_SEPARATOR);
        text.push_str(&entry.content_hash);
        text.push_str(LINE_TERMINATOR);
    }
    text
}
