//! Merge-based comparison of two manifests.

use crate::manifest::{FileEntry, Manifest};
use serde::Serialize;
use std::cmp::Ordering;
use std::fmt;

/// Per-file classification of a check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Outcome {
    /// Present in both manifests with equal hashes.
    Same,
    /// Present in both manifests with differing hashes.
    Different,
    /// Present in the expected baseline only.
    Missing,
    /// Present on disk only.
    Unexpected,
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Outcome::Same => "Same",
            Outcome::Different => "Different",
            Outcome::Missing => "Missing",
            Outcome::Unexpected => "Unexpected",
        };
        f.write_str(label)
    }
}

/// One row of a manifest comparison.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComparisonEntry {
    pub relative_path: String,
    pub expected_hash: Option<String>,
    pub actual_hash: Option<String>,
    pub outcome: Outcome,
}

/// Full result of comparing an actual tree against an expected baseline.
#[derive(Debug, Clone, Serialize)]
pub struct ComparisonResult {
    /// True iff both manifests are present and their global hashes are
    /// textually equal.
    pub global_match: bool,
    /// Every file appearing in either manifest, exactly once, in
    /// ascending `relative_path` order.
    pub entries: Vec<ComparisonEntry>,
}

impl ComparisonResult {
    /// Count of entries with the given outcome.
    pub fn count(&self, outcome: Outcome) -> usize {
        self.entries.iter().filter(|e| e.outcome == outcome).count()
    }
}

/// Merge-diff `actual` (the filesystem) against `expected` (the baseline).
///
/// Both inputs carry entries pre-sorted by relative path (the builder's
/// sort invariant), so the walk is a two-cursor merge and the output comes
/// out in ascending path order. An absent manifest contributes an empty
/// entry set and is never an error, but forces `global_match` false.
pub fn compare(actual: Option<&Manifest>, expected: Option<&Manifest>) -> ComparisonResult {
    let global_match = match (actual, expected) {
        (Some(actual), Some(expected)) => actual.global_hash == expected.global_hash,
        _ => false,
    };

    let actual_entries: &[FileEntry] = actual.map_or(&[], |m| m.entries.as_slice());
    let expected_entries: &[FileEntry] = expected.map_or(&[], |m| m.entries.as_slice());

    let mut entries = Vec::with_capacity(actual_entries.len().max(expected_entries.len()));
    let mut ai = 0;
    let mut ei = 0;

    loop {
        match (actual_entries.get(ai), expected_entries.get(ei)) {
            (None, None) => break,
            (Some(a), None) => {
                entries.push(unexpected(a));
                ai += 1;
            }
            (None, Some(e)) => {
                entries.push(missing(e));
                ei += 1;
            }
            (Some(a), Some(e)) => {
                match e.relative_path.as_bytes().cmp(a.relative_path.as_bytes()) {
                    Ordering::Equal => {
                        let outcome = if e.content_hash == a.content_hash {
                            Outcome::Same
                        } else {
                            Outcome::Different
                        };
                        entries.push(ComparisonEntry {
                            relative_path: a.relative_path.clone(),
                            expected_hash: Some(e.content_hash.clone()),
                            actual_hash: Some(a.content_hash.clone()),
                            outcome,
                        });
                        ai += 1;
                        ei += 1;
                    }
                    Ordering::Less => {
                        entries.push(missing(e));
                        ei += 1;
                    }
                    Ordering::Greater => {
                        entries.push(unexpected(a));
                        ai += 1;
                    }
                }
            }
        }
    }

    ComparisonResult {
        global_match,
        entries,
    }
}

fn missing(entry: &FileEntry) -> ComparisonEntry {
    ComparisonEntry {
        relative_path: entry.relative_path.clone(),
        expected_hash: Some(entry.content_hash.clone()),
        actual_hash: None,
        outcome: Outcome::Missing,
    }
}

fn unexpected(entry: &FileEntry) -> ComparisonEntry {
    ComparisonEntry {
        relative_path: entry.relative_path.clone(),
        expected_hash: None,
        actual_hash: Some(entry.content_hash.clone()),
        outcome: Outcome::Unexpected,
    }
}
