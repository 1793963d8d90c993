//! End-to-end check scenarios: baseline, mutate, re-check.

use pkgsum::hash::Algorithm;
use pkgsum::lister::FullDirectoryLister;
use pkgsum::manifest::builder::HashBuilder;
use pkgsum::manifest::compare::{compare, Outcome};
use pkgsum::manifest::store::{self, ManifestPaths};
use pkgsum::manifest::Manifest;
use pkgsum::progress::NullObserver;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn build(root: &Path) -> Manifest {
    HashBuilder::new(root.to_path_buf(), Algorithm::Md5, &NullObserver)
        .build(&FullDirectoryLister)
        .unwrap()
}

fn populate(root: &Path) {
    fs::write(root.join("top.txt"), "top").unwrap();
    fs::create_dir(root.join("subdir1")).unwrap();
    fs::write(root.join("subdir1").join("a"), "sub a").unwrap();
    fs::write(root.join("subdir1").join("b"), "sub b").unwrap();
}

#[test]
fn test_deleted_file_reported_missing() {
    let temp_dir = TempDir::new().unwrap();
    populate(temp_dir.path());

    let baseline = build(temp_dir.path());
    fs::remove_file(temp_dir.path().join("subdir1").join("a")).unwrap();
    let actual = build(temp_dir.path());

    let result = compare(Some(&actual), Some(&baseline));

    assert!(!result.global_match);
    let missing: Vec<_> = result
        .entries
        .iter()
        .filter(|e| e.outcome == Outcome::Missing)
        .collect();
    assert_eq!(missing.len(), 1);
    assert!(missing[0].relative_path.ends_with("a"));
    assert!(missing[0].relative_path.starts_with("subdir1"));
    assert_eq!(result.count(Outcome::Same), 2);
}

#[test]
fn test_added_file_reported_unexpected() {
    let temp_dir = TempDir::new().unwrap();
    populate(temp_dir.path());

    let baseline = build(temp_dir.path());
    fs::write(temp_dir.path().join("c"), "new file").unwrap();
    let actual = build(temp_dir.path());

    let result = compare(Some(&actual), Some(&baseline));

    assert!(!result.global_match);
    assert_eq!(result.count(Outcome::Unexpected), 1);
    assert_eq!(result.count(Outcome::Same), 3);
    let unexpected = result
        .entries
        .iter()
        .find(|e| e.outcome == Outcome::Unexpected)
        .unwrap();
    assert_eq!(unexpected.relative_path, "c");
}

#[test]
fn test_modified_file_reported_different() {
    let temp_dir = TempDir::new().unwrap();
    populate(temp_dir.path());

    let baseline = build(temp_dir.path());
    fs::write(temp_dir.path().join("top.txt"), "modified").unwrap();
    let actual = build(temp_dir.path());

    let result = compare(Some(&actual), Some(&baseline));

    assert!(!result.global_match);
    assert_eq!(result.count(Outcome::Different), 1);
    assert_eq!(result.count(Outcome::Same), 2);
    let different = result
        .entries
        .iter()
        .find(|e| e.outcome == Outcome::Different)
        .unwrap();
    assert_eq!(different.relative_path, "top.txt");
}

#[test]
fn test_unchanged_tree_fully_matches() {
    let temp_dir = TempDir::new().unwrap();
    populate(temp_dir.path());

    let baseline = build(temp_dir.path());
    let actual = build(temp_dir.path());

    let result = compare(Some(&actual), Some(&baseline));

    assert!(result.global_match);
    assert_eq!(result.count(Outcome::Same), result.entries.len());
}

/// Check against a stored baseline rather than an in-memory one: the
/// store round trip must not perturb the comparison.
#[test]
fn test_check_against_stored_baseline() {
    let temp_dir = TempDir::new().unwrap();
    populate(temp_dir.path());
    let paths = ManifestPaths::new(
        temp_dir.path().join("checksum_detailed.txt"),
        temp_dir.path().join("checksum.txt"),
    );

    let baseline = HashBuilder::new(
        temp_dir.path().to_path_buf(),
        Algorithm::Md5,
        &NullObserver,
    )
    .with_excluded_paths(paths.excluded())
    .build(&FullDirectoryLister)
    .unwrap();
    store::write(&baseline, &paths).unwrap();

    let loaded = store::read(&paths).unwrap().unwrap();
    let actual = HashBuilder::new(
        temp_dir.path().to_path_buf(),
        Algorithm::Md5,
        &NullObserver,
    )
    .with_excluded_paths(paths.excluded())
    .build(&FullDirectoryLister)
    .unwrap();

    let result = compare(Some(&actual), Some(&loaded));
    assert!(result.global_match);
    assert_eq!(result.count(Outcome::Same), result.entries.len());
}

/// No manifest files on disk: the store signals no-baseline instead of
/// crashing or falsely passing.
#[test]
fn test_missing_baseline_signal() {
    let temp_dir = TempDir::new().unwrap();
    let paths = ManifestPaths::new(
        temp_dir.path().join("checksum_detailed.txt"),
        temp_dir.path().join("checksum.txt"),
    );

    assert!(store::read(&paths).unwrap().is_none());
}
